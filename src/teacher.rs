use tracing::{debug, trace};

use crate::announce::{Announcer, Console};
use crate::duty::{DutyKind, Responsibility};

/// Performs whatever responsibility it is handed.
///
/// The teacher only knows about the [`Responsibility`] contract. New duties
/// are added by writing new types, never by editing this one.
#[derive(Debug, Default)]
pub struct Teacher<A: Announcer = Console> {
    out: A,
}

impl Teacher<Console> {
    pub fn new() -> Self {
        Self { out: Console }
    }
}

impl<A: Announcer> Teacher<A> {
    pub fn with_announcer(out: A) -> Self {
        Self { out }
    }

    /// Accepts concrete duties as well as trait objects.
    pub fn perform_duty<R>(&mut self, responsibility: &R)
    where
        R: Responsibility + ?Sized,
    {
        trace!("performing duty");
        responsibility.perform(&mut self.out);
    }

    pub fn announcer(&self) -> &A {
        &self.out
    }

    pub fn into_announcer(self) -> A {
        self.out
    }

    fn announce(&mut self, line: &str) {
        self.out.announce(line);
    }
}

/// Works through a plan: the label of each duty, then the duty itself.
pub fn run_duties<A: Announcer>(teacher: &mut Teacher<A>, plan: &[DutyKind]) {
    debug!(duties = plan.len(), "starting duty plan");
    for &kind in plan {
        debug!(duty = %kind, "next duty");
        teacher.announce(kind.label());
        // Exercises are handed over through their refined contract.
        match kind.exercise() {
            Some(exercise) => teacher.perform_duty(exercise),
            None => teacher.perform_duty(kind.responsibility()),
        }
    }
}
