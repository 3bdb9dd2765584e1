//! Core vocabulary for the SORTIE campaign engine.
//!
//! This crate defines the types shared across all other crates: task roles,
//! the unit catalog, force maps, debriefings, settings, constants, and the
//! error taxonomy. It has no dependency on the theater graph or the
//! scheduler.

pub mod constants;
pub mod debriefing;
pub mod enums;
pub mod error;
pub mod settings;
pub mod types;
pub mod units;

#[cfg(test)]
mod tests;
