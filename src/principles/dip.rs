//! Dependency inversion: a school event planned around roles, not people.
//!
//! [`SchoolEvent`] only knows the [`Host`], [`Performer`] and [`Usher`]
//! contracts. When the performer falls sick, someone else takes the role and
//! the plan stays as it is.

use tracing::debug;

use crate::announce::Announcer;

pub trait Host {
    fn welcome(&self, out: &mut dyn Announcer);
}

pub trait Performer {
    fn perform_act(&self, out: &mut dyn Announcer);
}

pub trait Usher {
    fn guide_guests(&self, out: &mut dyn Announcer);
}

// =============================================================================
// Role holders
// =============================================================================

#[derive(Debug, Default, Clone, Copy)]
pub struct Principal;

impl Host for Principal {
    fn welcome(&self, out: &mut dyn Announcer) {
        out.announce("Principal welcomes the guests");
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct BackupHost;

impl Host for BackupHost {
    fn welcome(&self, out: &mut dyn Announcer) {
        out.announce("Vice principal welcomes the guests");
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ChoirStudent;

impl Performer for ChoirStudent {
    fn perform_act(&self, out: &mut dyn Announcer) {
        out.announce("Choir sings the school anthem");
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct DrumStudent;

impl Performer for DrumStudent {
    fn perform_act(&self, out: &mut dyn Announcer) {
        out.announce("Drummer plays a solo");
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct PrefectUsher;

impl Usher for PrefectUsher {
    fn guide_guests(&self, out: &mut dyn Announcer) {
        out.announce("Prefect guides guests to their seats");
    }
}

// =============================================================================
// Event
// =============================================================================

pub struct SchoolEvent {
    host: Box<dyn Host>,
    performer: Box<dyn Performer>,
    usher: Box<dyn Usher>,
}

impl SchoolEvent {
    pub fn new(host: Box<dyn Host>, performer: Box<dyn Performer>, usher: Box<dyn Usher>) -> Self {
        Self {
            host,
            performer,
            usher,
        }
    }

    /// Swaps whoever holds the performer role.
    pub fn replace_performer(&mut self, performer: Box<dyn Performer>) {
        debug!("performer replaced");
        self.performer = performer;
    }

    pub fn replace_host(&mut self, host: Box<dyn Host>) {
        debug!("host replaced");
        self.host = host;
    }

    pub fn run(&self, out: &mut dyn Announcer) {
        self.usher.guide_guests(out);
        self.host.welcome(out);
        self.performer.perform_act(out);
    }
}

impl Default for SchoolEvent {
    fn default() -> Self {
        Self::new(
            Box::new(Principal),
            Box::new(ChoirStudent),
            Box::new(PrefectUsher),
        )
    }
}
