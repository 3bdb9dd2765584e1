//! Task-role enumeration used throughout the campaign.

use serde::{Deserialize, Serialize};

/// Role a unit type (or a required flight) fills in an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Task {
    /// Air-to-air sweep / escort / intercept flights.
    FighterSweep,
    /// Air-to-ground strike flights.
    GroundAttack,
    /// Armor and other ground combat units.
    PinpointStrike,
    /// Light reconnaissance vehicles (convoy escorts, insurgent technicals).
    Reconnaissance,
    /// Air logistics (cargo aircraft).
    Transport,
    /// Naval cargo shipping.
    CargoTransportation,
    /// SAM and AAA systems.
    AirDefence,
    /// Airborne early warning.
    Awacs,
    /// Helicopter infantry lift.
    Embarking,
    /// Carriers.
    Carriage,
}

impl Task {
    /// Human-readable role name for briefings and logs.
    pub fn name(self) -> &'static str {
        match self {
            Task::FighterSweep => "Fighter sweep",
            Task::GroundAttack => "Ground attack",
            Task::PinpointStrike => "Armor",
            Task::Reconnaissance => "Recon",
            Task::Transport => "Transport",
            Task::CargoTransportation => "Cargo shipping",
            Task::AirDefence => "Air defence",
            Task::Awacs => "AWACS",
            Task::Embarking => "Infantry lift",
            Task::Carriage => "Carrier",
        }
    }

    /// Roles that land in a base's aircraft pool.
    pub fn is_flying(self) -> bool {
        matches!(
            self,
            Task::FighterSweep
                | Task::GroundAttack
                | Task::Transport
                | Task::Awacs
                | Task::Embarking
        )
    }
}
