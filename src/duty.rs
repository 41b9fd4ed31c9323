//! Duties a teacher can be handed.
//!
//! [`Responsibility`] is deliberately tiny: one operation. Exercises refine it
//! through [`PhysicalExercise`] instead of widening it, so nothing that
//! implements `Responsibility` is ever stuck with an operation it cannot do.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::announce::Announcer;
use crate::error::SchoolError;

// =============================================================================
// Capability contracts
// =============================================================================

/// Something that can be performed.
pub trait Responsibility {
    fn perform(&self, out: &mut dyn Announcer);
}

/// A responsibility that is also a physical exercise.
///
/// Every `PhysicalExercise` is a `Responsibility`, so it can be handed to
/// anything that only needs the narrower contract.
pub trait PhysicalExercise: Responsibility {
    fn exercise(&self, out: &mut dyn Announcer);
}

// =============================================================================
// Variants
// =============================================================================

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Teaching;

impl Responsibility for Teaching {
    fn perform(&self, out: &mut dyn Announcer) {
        out.announce("Teaching students");
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Correcting;

impl Responsibility for Correcting {
    fn perform(&self, out: &mut dyn Announcer) {
        out.announce("Correcting exam papers");
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Yoga;

impl Responsibility for Yoga {
    // Performing yoga is doing the exercise.
    fn perform(&self, out: &mut dyn Announcer) {
        self.exercise(out);
    }
}

impl PhysicalExercise for Yoga {
    fn exercise(&self, out: &mut dyn Announcer) {
        out.announce("Performing yoga");
    }
}

/// Leads a warm-up. Only physical exercises qualify.
///
/// A plain responsibility is turned away by the compiler, not at runtime:
///
/// ```compile_fail
/// use solid_school::duty::{lead_warm_up, Teaching};
///
/// let mut transcript: Vec<String> = Vec::new();
/// lead_warm_up(&mut transcript, &Teaching);
/// ```
///
/// ```
/// use solid_school::duty::{lead_warm_up, Yoga};
///
/// let mut transcript: Vec<String> = Vec::new();
/// lead_warm_up(&mut transcript, &Yoga);
/// assert_eq!(transcript, vec!["Performing yoga"]);
/// ```
pub fn lead_warm_up<E>(out: &mut dyn Announcer, exercise: &E)
where
    E: PhysicalExercise + ?Sized,
{
    exercise.exercise(out);
}

// =============================================================================
// Catalog
// =============================================================================

/// The duties that can be named in a plan.
///
/// Config files and the command line both parse names through [`FromStr`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum DutyKind {
    Teaching,
    Correcting,
    Yoga,
}

impl DutyKind {
    pub const ALL: [DutyKind; 3] = [DutyKind::Teaching, DutyKind::Correcting, DutyKind::Yoga];

    /// Heading announced before the duty is performed.
    pub fn label(self) -> &'static str {
        match self {
            DutyKind::Teaching => "Performing teaching duty:",
            DutyKind::Correcting => "Performing correcting duty:",
            DutyKind::Yoga => "Performing yoga duty (via PhysicalExercise interface):",
        }
    }

    pub fn responsibility(self) -> &'static dyn Responsibility {
        match self {
            DutyKind::Teaching => &Teaching,
            DutyKind::Correcting => &Correcting,
            DutyKind::Yoga => &Yoga,
        }
    }

    /// The duty as a physical exercise, when it is one.
    pub fn exercise(self) -> Option<&'static dyn PhysicalExercise> {
        match self {
            DutyKind::Yoga => Some(&Yoga),
            DutyKind::Teaching | DutyKind::Correcting => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            DutyKind::Teaching => "teaching",
            DutyKind::Correcting => "correcting",
            DutyKind::Yoga => "yoga",
        }
    }
}

impl fmt::Display for DutyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DutyKind {
    type Err = SchoolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "teaching" => Ok(DutyKind::Teaching),
            "correcting" => Ok(DutyKind::Correcting),
            "yoga" => Ok(DutyKind::Yoga),
            _ => Err(SchoolError::UnknownDuty(s.to_string())),
        }
    }
}

impl TryFrom<String> for DutyKind {
    type Error = SchoolError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        name.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transcript_of(duty: &dyn Responsibility) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        duty.perform(&mut out);
        out
    }

    #[test]
    fn test_teaching_message() {
        assert_eq!(transcript_of(&Teaching), vec!["Teaching students"]);
    }

    #[test]
    fn test_correcting_message() {
        assert_eq!(transcript_of(&Correcting), vec!["Correcting exam papers"]);
    }

    #[test]
    fn test_yoga_perform_matches_exercise() {
        let mut exercised: Vec<String> = Vec::new();
        Yoga.exercise(&mut exercised);

        assert_eq!(transcript_of(&Yoga), exercised);
        assert_eq!(exercised, vec!["Performing yoga"]);
    }

    #[test]
    fn test_repeated_perform_is_identical() {
        let mut out: Vec<String> = Vec::new();
        for _ in 0..3 {
            Correcting.perform(&mut out);
        }
        assert!(out.iter().all(|line| line == "Correcting exam papers"));
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn test_exercise_usable_as_responsibility() {
        let exercise: Box<dyn PhysicalExercise> = Box::new(Yoga);
        let mut out: Vec<String> = Vec::new();
        // Supertrait method through the wider trait object.
        exercise.perform(&mut out);
        lead_warm_up(&mut out, exercise.as_ref());
        assert_eq!(out, vec!["Performing yoga", "Performing yoga"]);
    }

    #[test]
    fn test_catalog_builds_matching_duty() {
        for kind in DutyKind::ALL {
            let mut from_catalog: Vec<String> = Vec::new();
            kind.responsibility().perform(&mut from_catalog);
            assert_eq!(from_catalog.len(), 1, "{kind} should announce one line");
        }
        assert_eq!(transcript_of(DutyKind::Yoga.responsibility()), vec!["Performing yoga"]);
    }

    #[test]
    fn test_only_yoga_is_an_exercise() {
        assert!(DutyKind::Teaching.exercise().is_none());
        assert!(DutyKind::Correcting.exercise().is_none());

        let mut out: Vec<String> = Vec::new();
        let yoga = DutyKind::Yoga.exercise().unwrap();
        lead_warm_up(&mut out, yoga);
        yoga.perform(&mut out);
        assert_eq!(out, vec!["Performing yoga", "Performing yoga"]);
    }

    #[test]
    fn test_try_from_string_matches_parse() {
        assert_eq!(DutyKind::try_from("Yoga".to_string()).unwrap(), DutyKind::Yoga);
        assert!(matches!(
            DutyKind::try_from("nap".to_string()),
            Err(SchoolError::UnknownDuty(_))
        ));
    }

    #[test]
    fn test_labels() {
        assert_eq!(DutyKind::Teaching.label(), "Performing teaching duty:");
        assert_eq!(DutyKind::Correcting.label(), "Performing correcting duty:");
        assert_eq!(
            DutyKind::Yoga.label(),
            "Performing yoga duty (via PhysicalExercise interface):"
        );
    }

    #[test]
    fn test_parse_duty_names() {
        assert_eq!("teaching".parse::<DutyKind>().unwrap(), DutyKind::Teaching);
        assert_eq!(" Yoga ".parse::<DutyKind>().unwrap(), DutyKind::Yoga);
        assert_eq!("CORRECTING".parse::<DutyKind>().unwrap(), DutyKind::Correcting);
    }

    #[test]
    fn test_parse_unknown_duty() {
        let result = "juggling".parse::<DutyKind>();
        assert!(matches!(result, Err(SchoolError::UnknownDuty(name)) if name == "juggling"));
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for kind in DutyKind::ALL {
            assert_eq!(kind.to_string().parse::<DutyKind>().unwrap(), kind);
        }
    }
}
