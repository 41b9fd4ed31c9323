//! A school that follows the SOLID principles.
//!
//! A [`Teacher`] performs whatever [`Responsibility`] it is handed. Duties
//! speak through an [`Announcer`], so the same code prints to the terminal or
//! records a transcript.

pub mod announce;
pub mod config;
pub mod duty;
pub mod error;
pub mod logging;
pub mod principles;
pub mod teacher;

pub use announce::{Announcer, Console};
pub use config::SchoolConfig;
pub use duty::{Correcting, DutyKind, PhysicalExercise, Responsibility, Teaching, Yoga};
pub use error::{Result, SchoolError};
pub use teacher::{run_duties, Teacher};
