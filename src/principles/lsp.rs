//! Liskov substitution with birds.
//!
//! Not every bird flies, so flying is a refinement of [`Bird`] rather than a
//! method every bird must fake. An ostrich cannot be put in a sky show:
//!
//! ```compile_fail
//! use solid_school::principles::lsp::{sky_show, Ostrich, FlyingBird};
//!
//! let mut out: Vec<String> = Vec::new();
//! let flock: [&dyn FlyingBird; 1] = [&Ostrich];
//! sky_show(&mut out, &flock);
//! ```

use crate::announce::Announcer;

pub trait Bird {
    fn name(&self) -> &'static str;
    fn make_sound(&self, out: &mut dyn Announcer);
}

pub trait FlyingBird: Bird {
    fn fly(&self, out: &mut dyn Announcer);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Sparrow;

impl Bird for Sparrow {
    fn name(&self) -> &'static str {
        "Sparrow"
    }

    fn make_sound(&self, out: &mut dyn Announcer) {
        out.announce("Tweet tweet");
    }
}

impl FlyingBird for Sparrow {
    fn fly(&self, out: &mut dyn Announcer) {
        out.announce("Sparrow flying");
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Ostrich;

impl Bird for Ostrich {
    fn name(&self) -> &'static str {
        "Ostrich"
    }

    fn make_sound(&self, out: &mut dyn Announcer) {
        out.announce("Boom boom");
    }
}

/// Every bird can sing along.
pub fn chorus(out: &mut dyn Announcer, birds: &[&dyn Bird]) {
    for bird in birds {
        bird.make_sound(out);
    }
}

/// Only flyers are invited.
pub fn sky_show(out: &mut dyn Announcer, flock: &[&dyn FlyingBird]) {
    for bird in flock {
        bird.fly(out);
    }
}
