//! Operation is the bridge from a resolved force composition to a playable
//! mission.
//!
//! The campaign core only sets an operation up and asks it to generate; the
//! resulting `MissionPlan` is a serializable artifact the external mission
//! writer turns into an actual simulator file. Environment settings are
//! rolled once per operation so the regular and quick variants of the same
//! mission agree on weather and time of day.

use std::collections::BTreeMap;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use sortie_core::debriefing::Debriefing;
use sortie_core::types::{total_count, UnitMap};
use sortie_theater::CpId;

use crate::rng::CampaignRng;

/// Named force group within an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum OperationGroup {
    StrikeGroup,
    Escort,
    Interceptors,
    Attackers,
    Defenders,
    Targets,
    Transport,
    AirDefense,
}

/// Weather and daylight for one mission, rolled at prepare time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentSettings {
    /// Mission start hour, 0..24.
    pub start_hour: u32,
    /// Opaque seed handed to the external weather generator.
    pub weather_seed: u64,
}

/// The playable artifact produced by `Operation::generate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissionPlan {
    pub attacker: String,
    pub defender: String,
    pub location: DVec2,
    pub quick: bool,
    pub is_awacs_enabled: bool,
    pub ca_slots: u32,
    pub environment: EnvironmentSettings,
    pub groups: BTreeMap<OperationGroup, UnitMap>,
}

/// One event's bound operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Operation {
    pub attacker: String,
    pub defender: String,
    pub from_cp: CpId,
    pub departure_cp: CpId,
    pub to_cp: CpId,
    pub location: DVec2,
    pub groups: BTreeMap<OperationGroup, UnitMap>,
    pub is_awacs_enabled: bool,
    pub ca_slots: u32,
    pub environment: Option<EnvironmentSettings>,
    prepared_quick: Option<bool>,
}

impl Operation {
    pub fn new(
        attacker: impl Into<String>,
        defender: impl Into<String>,
        from_cp: CpId,
        departure_cp: CpId,
        to_cp: CpId,
        location: DVec2,
    ) -> Self {
        Self {
            attacker: attacker.into(),
            defender: defender.into(),
            from_cp,
            departure_cp,
            to_cp,
            location,
            groups: BTreeMap::new(),
            is_awacs_enabled: false,
            ca_slots: 0,
            environment: None,
            prepared_quick: None,
        }
    }

    /// Bind the force groups chosen for this operation.
    pub fn setup(&mut self, groups: BTreeMap<OperationGroup, UnitMap>) {
        self.groups = groups;
    }

    /// Roll the environment (once) and mark which mission flavor the next
    /// `generate` call produces.
    pub fn prepare(&mut self, rng: &mut CampaignRng, quick: bool) {
        if self.environment.is_none() {
            self.environment = Some(EnvironmentSettings {
                start_hour: rng.range(6, 20),
                weather_seed: rng.next_u64(),
            });
        }
        self.prepared_quick = Some(quick);
    }

    /// Materialize the mission plan. `prepare` must have been called.
    pub fn generate(&self) -> Option<MissionPlan> {
        let quick = self.prepared_quick?;
        let environment = self.environment?;
        Some(MissionPlan {
            attacker: self.attacker.clone(),
            defender: self.defender.clone(),
            location: self.location,
            quick,
            is_awacs_enabled: self.is_awacs_enabled,
            ca_slots: self.ca_slots,
            environment,
            groups: self.groups.clone(),
        })
    }

    /// Generic success fallback: the attacking side kept at least one unit
    /// alive. Variants with sharper arithmetic never call this.
    pub fn is_successful(&self, debriefing: &Debriefing) -> bool {
        total_count(&debriefing.alive(&self.attacker)) > 0
    }
}
