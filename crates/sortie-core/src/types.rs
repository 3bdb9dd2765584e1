//! Typed force maps and the helpers that manipulate them.
//!
//! The campaign tracks forces as maps from a closed unit-type enumeration to
//! non-negative counts. `BTreeMap` keeps iteration deterministic, which the
//! scheduler relies on when iterating forces during a turn.

use std::collections::BTreeMap;

use crate::enums::Task;
use crate::units::{self, UnitType};

/// Unit type -> count.
pub type UnitMap = BTreeMap<UnitType, u32>;

/// Task role -> assigned force. What the player hands an event on commitment.
pub type TaskForceMap = BTreeMap<Task, UnitMap>;

/// Merge `other` into `into` additively.
pub fn merge_units(into: &mut UnitMap, other: &UnitMap) {
    for (&unit, &count) in other {
        *into.entry(unit).or_insert(0) += count;
    }
}

/// Total unit count in a map.
pub fn total_count(units: &UnitMap) -> u32 {
    units.values().sum()
}

/// Sum of counts whose unit type fills one of the given task roles.
pub fn count_for_tasks(units: &UnitMap, tasks: &[Task]) -> u32 {
    units
        .iter()
        .filter(|(&unit, _)| tasks.contains(&units::task_of(unit)))
        .map(|(_, &count)| count)
        .sum()
}

/// Restrict a force to at most `max` units, preserving map order.
pub fn restrict_count(units: &UnitMap, max: u32) -> UnitMap {
    let mut remaining = max;
    let mut result = UnitMap::new();
    for (&unit, &count) in units {
        if remaining == 0 {
            break;
        }
        let take = count.min(remaining);
        if take > 0 {
            result.insert(unit, take);
        }
        remaining -= take;
    }
    result
}
