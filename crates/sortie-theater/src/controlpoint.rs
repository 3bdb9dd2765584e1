//! Control points, the nodes of the theater graph.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::base::Base;

/// Index of a control point within its theater.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct CpId(pub usize);

impl std::fmt::Display for CpId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "cp#{}", self.0)
    }
}

/// A strike-able installation belonging to a control point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroundObject {
    /// Opaque identifier matched against debriefing reports.
    pub identifier: String,
    pub is_dead: bool,
}

impl GroundObject {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            is_dead: false,
        }
    }
}

/// A base, airport, or carrier in the theater.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ControlPoint {
    pub id: CpId,
    pub name: String,
    pub position: DVec2,
    /// True while the player holds this point. Never flipped by the campaign
    /// core; a base-attack outcome recommends the change to the outer layer.
    pub captured: bool,
    /// Carriers and other remote bases exempt from certain event types.
    pub is_global: bool,
    /// Whether the point has coastal exposure (naval events possible).
    pub coastal: bool,
    /// Normalized importance, `IMPORTANCE_LOW..=IMPORTANCE_HIGH`.
    pub importance: f64,
    pub base: Base,
    pub ground_objects: Vec<GroundObject>,
}

impl ControlPoint {
    pub fn new(id: CpId, name: impl Into<String>, position: DVec2, importance: f64) -> Self {
        Self {
            id,
            name: name.into(),
            position,
            captured: false,
            is_global: false,
            coastal: false,
            importance,
            base: Base::default(),
            ground_objects: Vec::new(),
        }
    }

    /// Carrier constructor: global, coastal, captured by the player.
    pub fn carrier(id: CpId, name: impl Into<String>, position: DVec2, importance: f64) -> Self {
        let mut cp = Self::new(id, name, position, importance);
        cp.is_global = true;
        cp.coastal = true;
        cp.captured = true;
        cp
    }

    /// Whether any ground object is still standing.
    pub fn has_ground_objects(&self) -> bool {
        self.ground_objects.iter().any(|obj| !obj.is_dead)
    }
}
