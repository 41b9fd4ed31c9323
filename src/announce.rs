//! Where duties say what they are doing.
//!
//! Every duty speaks through an [`Announcer`] instead of printing on its own,
//! so the same code can talk to the terminal or to a transcript in a test.

/// A sink for one line of output at a time. Announcing never fails.
pub trait Announcer {
    fn announce(&mut self, line: &str);
}

/// Writes every line to standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct Console;

impl Announcer for Console {
    fn announce(&mut self, line: &str) {
        println!("{line}");
    }
}

/// Records lines in order. Handy as a transcript.
impl Announcer for Vec<String> {
    fn announce(&mut self, line: &str) {
        self.push(line.to_string());
    }
}

impl<A: Announcer + ?Sized> Announcer for &mut A {
    fn announce(&mut self, line: &str) {
        (**self).announce(line);
    }
}
