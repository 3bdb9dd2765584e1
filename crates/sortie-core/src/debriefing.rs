//! Post-mission debriefing, the sole input to outcome resolution.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::UnitMap;

/// Structured combat-result report flowing back from the external mission
/// runner. Faction keys are faction names; a faction absent from a map is
/// treated as having no units in that category.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Debriefing {
    /// Units destroyed during the mission, keyed by the owning faction.
    pub destroyed_units: BTreeMap<String, UnitMap>,
    /// Units still alive at mission end, keyed by the owning faction.
    pub alive_units: BTreeMap<String, UnitMap>,
    /// Opaque identifiers of destroyed ground objects.
    pub destroyed_objects: Vec<String>,
}

impl Debriefing {
    /// Destroyed units of a faction; empty map if the faction never appears.
    pub fn destroyed(&self, faction: &str) -> UnitMap {
        self.destroyed_units.get(faction).cloned().unwrap_or_default()
    }

    /// Alive units of a faction; empty map if the faction never appears.
    pub fn alive(&self, faction: &str) -> UnitMap {
        self.alive_units.get(faction).cloned().unwrap_or_default()
    }
}
