//! Campaign scheduler: the turn loop.
//!
//! `Game` owns one campaign session: event generation, player commitment,
//! debriefing application, the economy, and turn advancement. Events are a
//! closed tagged union; each variant supplies the same operation set
//! (required roles, force setup, success arithmetic, commit, skip).
//! Mission-file writing, persistence, and presentation are external
//! collaborators consuming `Game` and the `MissionPlan` artifact.

pub mod event;
pub mod game;
pub mod operation;
pub mod rng;

pub use event::{Event, EventClass, EventId, EventKind, EventOutcome};
pub use game::Game;
pub use operation::{EnvironmentSettings, MissionPlan, Operation, OperationGroup};
pub use rng::CampaignRng;

#[cfg(test)]
mod tests;
