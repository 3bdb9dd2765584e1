//! Theater graph for the SORTIE campaign.
//!
//! Control points (bases, airports, carriers) connected by adjacency, each
//! with a capture state and a standing-force pool. The campaign scheduler
//! reads the graph and mutates base strength and force counts; capture state
//! is only ever flipped by the external layer.

pub mod base;
pub mod controlpoint;
pub mod demo;
pub mod theater;

pub use base::Base;
pub use controlpoint::{ControlPoint, CpId, GroundObject};
pub use theater::ConflictTheater;

#[cfg(test)]
mod tests;
