//! Walkthroughs for the principles that need more than the duty model to show.
//!
//! Open/closed and interface segregation live in [`crate::duty`] and
//! [`crate::teacher`]; these modules cover the rest.

pub mod dip;
pub mod lsp;
pub mod srp;
