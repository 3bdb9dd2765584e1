//! The conflict theater: control points plus adjacency.

use serde::{Deserialize, Serialize};

use crate::controlpoint::{ControlPoint, CpId};

/// Graph of control points. Points are stored by index; adjacency is
/// symmetric.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConflictTheater {
    points: Vec<ControlPoint>,
    adjacency: Vec<Vec<CpId>>,
}

impl ConflictTheater {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a control point and return its id. The point's `id` field is
    /// overwritten with the assigned index.
    pub fn add_controlpoint(&mut self, mut cp: ControlPoint) -> CpId {
        let id = CpId(self.points.len());
        cp.id = id;
        self.points.push(cp);
        self.adjacency.push(Vec::new());
        id
    }

    /// Connect two points (symmetric).
    pub fn connect(&mut self, a: CpId, b: CpId) {
        if !self.adjacency[a.0].contains(&b) {
            self.adjacency[a.0].push(b);
        }
        if !self.adjacency[b.0].contains(&a) {
            self.adjacency[b.0].push(a);
        }
    }

    pub fn point(&self, id: CpId) -> &ControlPoint {
        &self.points[id.0]
    }

    pub fn point_mut(&mut self, id: CpId) -> &mut ControlPoint {
        &mut self.points[id.0]
    }

    pub fn points(&self) -> impl Iterator<Item = &ControlPoint> {
        self.points.iter()
    }

    /// Ids of points the player holds.
    pub fn player_points(&self) -> Vec<CpId> {
        self.points
            .iter()
            .filter(|cp| cp.captured)
            .map(|cp| cp.id)
            .collect()
    }

    /// Ids of points the enemy holds.
    pub fn enemy_points(&self) -> Vec<CpId> {
        self.points
            .iter()
            .filter(|cp| !cp.captured)
            .map(|cp| cp.id)
            .collect()
    }

    /// Adjacent (player point, enemy point) pairs: the fronts where events
    /// can be generated this turn.
    pub fn conflicts(&self) -> Vec<(CpId, CpId)> {
        let mut pairs = Vec::new();
        for cp in &self.points {
            if !cp.captured {
                continue;
            }
            for &other in &self.adjacency[cp.id.0] {
                if !self.points[other.0].captured {
                    pairs.push((cp.id, other));
                }
            }
        }
        pairs
    }

    /// A ground front line exists between two adjacent non-global points.
    pub fn has_frontline_between(&self, a: CpId, b: CpId) -> bool {
        self.adjacency[a.0].contains(&b)
            && !self.points[a.0].is_global
            && !self.points[b.0].is_global
    }

    /// Mark a ground object dead wherever it lives. Returns whether a match
    /// was found.
    pub fn mark_object_dead(&mut self, identifier: &str) -> bool {
        for cp in &mut self.points {
            for obj in &mut cp.ground_objects {
                if !obj.is_dead && obj.identifier == identifier {
                    obj.is_dead = true;
                    return true;
                }
            }
        }
        false
    }
}
