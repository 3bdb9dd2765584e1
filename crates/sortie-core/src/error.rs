//! Error taxonomy for the campaign core.
//!
//! Generation-time ineligibility is not an error: it is a policy branch and
//! produces no event. The types here cover the conditions that are surfaced
//! or logged.

use thiserror::Error;

use crate::enums::Task;

/// Catalog completeness violation, detected fail-fast at construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("unknown faction {0:?}")]
    UnknownFaction(String),
    #[error("faction {faction:?} has no unit for task {task:?}")]
    MissingTaskCoverage { faction: String, task: Task },
}

/// Failures surfaced to the caller during a turn. None of these abort the
/// turn; the scheduler logs and continues.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CampaignError {
    /// The supplied force mapping does not cover exactly the event's
    /// required roles.
    #[error("invalid force composition for {event}: required roles {required:?}")]
    InvalidForceComposition { event: String, required: Vec<Task> },
    /// The referenced event is not in the active set.
    #[error("event {0} is not active")]
    EventNotActive(u32),
    /// The event has no bound operation yet (no force was committed).
    #[error("event {0} has no operation bound")]
    OperationMissing(u32),
}
