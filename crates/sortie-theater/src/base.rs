//! Standing-force pool backing one control point.

use serde::{Deserialize, Serialize};

use sortie_core::enums::Task;
use sortie_core::types::{self, UnitMap};
use sortie_core::units;

use std::collections::BTreeMap;

/// Resource pool of a control point: aircraft, armor, air defences, a
/// normalized strength scalar, and the commissioning-points bank.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Base {
    pub aircraft: UnitMap,
    pub armor: UnitMap,
    pub aa: UnitMap,
    /// Morale/capability scalar, clamped to [0, 1].
    pub strength: f64,
    /// Fractional commissioning points banked per task role.
    pub commission_points: BTreeMap<Task, f64>,
}

impl Default for Base {
    fn default() -> Self {
        Self {
            aircraft: UnitMap::new(),
            armor: UnitMap::new(),
            aa: UnitMap::new(),
            strength: 1.0,
            commission_points: BTreeMap::new(),
        }
    }
}

impl Base {
    /// Standing unit count for one task role, across all pools.
    pub fn total_units(&self, task: Task) -> u32 {
        self.pools()
            .map(|pool| types::count_for_tasks(pool, &[task]))
            .sum()
    }

    /// Total aircraft on the base.
    pub fn total_planes(&self) -> u32 {
        types::total_count(&self.aircraft)
    }

    /// Total armor on the base.
    pub fn total_armor(&self) -> u32 {
        types::total_count(&self.armor)
    }

    /// Adjust strength by `delta`, clamping to [0, 1].
    pub fn affect_strength(&mut self, delta: f64) {
        self.strength = (self.strength + delta).clamp(0.0, 1.0);
    }

    /// Add newly commissioned units, routing each type to its pool by role.
    pub fn commission_units(&mut self, new_units: &UnitMap) {
        for (&unit, &count) in new_units {
            let task = units::task_of(unit);
            let pool = if task.is_flying() {
                &mut self.aircraft
            } else if task == Task::AirDefence {
                &mut self.aa
            } else {
                &mut self.armor
            };
            *pool.entry(unit).or_insert(0) += count;
        }
    }

    /// Subtract reported losses from whichever pools hold them.
    pub fn commit_losses(&mut self, losses: &UnitMap) {
        for (&unit, &count) in losses {
            for pool in [&mut self.aircraft, &mut self.armor, &mut self.aa] {
                if let Some(have) = pool.get_mut(&unit) {
                    *have = have.saturating_sub(count);
                    if *have == 0 {
                        pool.remove(&unit);
                    }
                    break;
                }
            }
        }
    }

    /// Bank fractional commissioning points for a role and return the whole
    /// points now spendable. The bank is zeroed of everything returned, so a
    /// second call without an intervening award yields nothing.
    pub fn append_commission_points(&mut self, task: Task, amount: f64) -> u32 {
        let bank = self.commission_points.entry(task).or_insert(0.0);
        *bank += amount;
        let spendable = bank.floor().max(0.0);
        *bank -= spendable;
        spendable as u32
    }

    /// Scramble aircraft of one role: pool count scaled by strength and the
    /// caller's factor, at least one aircraft whenever the pool is non-empty.
    pub fn scramble(&self, task: Task, factor: f64) -> UnitMap {
        let eligible: UnitMap = self
            .aircraft
            .iter()
            .filter(|(&unit, _)| units::task_of(unit) == task)
            .map(|(&unit, &count)| (unit, count))
            .collect();

        let available = types::total_count(&eligible);
        if available == 0 {
            return UnitMap::new();
        }
        let want = ((available as f64 * self.strength * factor).ceil() as u32)
            .clamp(1, available);
        types::restrict_count(&eligible, want)
    }

    /// Fighter-sweep scramble.
    pub fn scramble_sweep(&self, factor: f64) -> UnitMap {
        self.scramble(Task::FighterSweep, factor)
    }

    /// Ground-attack scramble.
    pub fn scramble_cas(&self, factor: f64) -> UnitMap {
        self.scramble(Task::GroundAttack, factor)
    }

    /// Interceptor scramble (sweep airframes in the interceptor role).
    pub fn scramble_interceptors(&self, factor: f64) -> UnitMap {
        self.scramble(Task::FighterSweep, factor)
    }

    /// How many aircraft a scramble at `factor` would launch.
    pub fn scramble_count(&self, factor: f64, task: Task) -> u32 {
        types::total_count(&self.scramble(task, factor))
    }

    /// Armor committed to a ground engagement: per-type counts scaled by
    /// strength, never less than one vehicle while any armor remains.
    pub fn assemble_attack(&self) -> UnitMap {
        let mut force: UnitMap = self
            .armor
            .iter()
            .filter_map(|(&unit, &count)| {
                let scaled = (count as f64 * self.strength) as u32;
                (scaled > 0).then_some((unit, scaled))
            })
            .collect();

        if force.is_empty() {
            if let Some((&unit, _)) = self.armor.iter().next() {
                force.insert(unit, 1);
            }
        }
        force
    }

    /// Armor headcount for threat descriptions.
    pub fn assemble_count(&self) -> u32 {
        types::total_count(&self.assemble_attack())
    }

    fn pools(&self) -> impl Iterator<Item = &UnitMap> {
        [&self.aircraft, &self.armor, &self.aa].into_iter()
    }
}
