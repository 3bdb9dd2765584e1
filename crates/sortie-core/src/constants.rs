//! Campaign tuning constants.

use crate::enums::Task;

// --- Commissioning ---

/// Number of candidate unit types considered per commission.
pub const COMMISSION_UNIT_VARIETY: usize = 4;

/// Exponent applied to control-point importance in commissioning caps.
pub const COMMISSION_LIMITS_SCALE: f64 = 1.5;

/// Exponent applied to control-point importance in commissioning awards.
pub const COMMISSION_AMOUNTS_SCALE: f64 = 1.5;

/// Standing-force cap factor per task role.
pub fn commission_limit_factor(task: Task) -> f64 {
    match task {
        Task::PinpointStrike => 10.0,
        Task::GroundAttack => 5.0,
        Task::FighterSweep => 8.0,
        Task::AirDefence => 1.0,
        _ => 0.0,
    }
}

/// Commissioning points awarded per turn per task role.
pub fn commission_amount_factor(task: Task) -> f64 {
    match task {
        Task::PinpointStrike => 3.0,
        Task::GroundAttack => 1.0,
        Task::FighterSweep => 2.0,
        Task::AirDefence => 0.3,
        _ => 0.0,
    }
}

/// Task roles commissioning runs over, in order.
pub const COMMISSION_TASKS: &[Task] = &[
    Task::PinpointStrike,
    Task::GroundAttack,
    Task::FighterSweep,
    Task::AirDefence,
];

// --- Generation ---

/// Base-attack events are only generated against points at or below this
/// strength.
pub const BASEATTACK_STRENGTH_THRESHOLD: f64 = 0.4;

// --- Economy ---

/// Strength player-held points recover each turn.
pub const PLAYER_BASE_STRENGTH_RECOVERY: f64 = 0.2;

/// Flat budget cost of enabling AWACS for a single operation.
pub const AWACS_BUDGET_COST: i32 = 4;

/// Starting player budget.
pub const PLAYER_BUDGET_INITIAL: i32 = 170;

/// Base per-turn budget bonus.
pub const PLAYER_BUDGET_BASE: f64 = 14.0;

/// Log base of the importance term in the per-turn budget reward.
pub const PLAYER_BUDGET_IMPORTANCE_LOG: f64 = 2.0;

// --- Event resolution ---

/// Denominator epsilon guarding ratio predicates against an empty side.
pub const RATIO_EPSILON: f64 = 0.01;

/// Base per-event success bonus.
pub const EVENT_BONUS_BASE: f64 = 5.0;

/// Log base of the importance term in the event success bonus.
pub const EVENT_BONUS_LOG_BASE: f64 = 1.1;

// --- Theater ---

/// Lower bound of the normalized control-point importance scale.
pub const IMPORTANCE_LOW: f64 = 0.2;

/// Midpoint of the importance scale.
pub const IMPORTANCE_MEDIUM: f64 = 0.6;

/// Upper bound of the importance scale.
pub const IMPORTANCE_HIGH: f64 = 1.0;
