//! Anti-shipping strike against a cargo group near a coastal point.

use sortie_core::constants::{IMPORTANCE_LOW, RATIO_EPSILON};
use sortie_core::debriefing::Debriefing;
use sortie_core::enums::Task;
use sortie_core::error::CampaignError;
use sortie_core::settings::Settings;
use sortie_core::types::{total_count, TaskForceMap, UnitMap};
use sortie_core::units::units_for_task;
use sortie_theater::ConflictTheater;

use super::{Event, EventCtx, EventKind};
use crate::operation::OperationGroup;

pub const STRENGTH_INFLUENCE: f64 = 0.3;
const TARGETS_SCALE: f64 = 20.0;

pub fn tasks(attacking: bool) -> Vec<Task> {
    if attacking {
        vec![Task::GroundAttack]
    } else {
        vec![Task::FighterSweep]
    }
}

pub fn flight_name(task: Task) -> &'static str {
    match task {
        Task::GroundAttack => "Naval intercept flight",
        Task::FighterSweep => "CAP flight",
        _ => "Flight",
    }
}

fn targets_count(theater: &ConflictTheater, event: &Event) -> u32 {
    let importance = theater.point(event.to_cp).importance;
    let scaled = ((importance - IMPORTANCE_LOW + 0.1) * TARGETS_SCALE) as i64;
    scaled.max(1) as u32
}

pub fn threat_description(event: &Event, theater: &ConflictTheater, settings: &Settings) -> String {
    let ships = targets_count(theater, event);
    let mut description = format!("{} ship(s)", ships);
    let departure = theater.point(event.departure());
    if !departure.captured {
        let aircraft = departure
            .base
            .scramble_count(settings.multiplier, Task::FighterSweep);
        description.push_str(&format!(", {} aircraft", aircraft));
    }
    description
}

impl Event {
    pub(super) fn naval_intercept_setup(
        &mut self,
        flights: &TaskForceMap,
        ctx: &mut EventCtx,
        attacking: bool,
    ) -> Result<(), CampaignError> {
        let count = targets_count(ctx.theater, self);
        let ships = units_for_task(Task::CargoTransportation, &self.defender);

        let mut targets = UnitMap::new();
        if let Some(ship) = ctx.rng.pick(&ships) {
            targets.insert(*ship, count);
        }

        let mut operation = self.new_operation();
        let mut groups = std::collections::BTreeMap::new();
        groups.insert(OperationGroup::Targets, targets.clone());

        if attacking {
            groups.insert(
                OperationGroup::StrikeGroup,
                flights.get(&Task::GroundAttack).cloned().unwrap_or_default(),
            );
            groups.insert(OperationGroup::Interceptors, UnitMap::new());
        } else {
            let from = &ctx.theater.point(self.departure()).base;
            groups.insert(
                OperationGroup::StrikeGroup,
                from.scramble_cas(ctx.settings.multiplier),
            );
            groups.insert(
                OperationGroup::Interceptors,
                flights.get(&Task::FighterSweep).cloned().unwrap_or_default(),
            );
        }

        operation.setup(groups);
        self.operation = Some(operation);

        if let EventKind::NavalIntercept {
            targets: ref mut slot,
        } = self.kind
        {
            *slot = targets;
        }
        Ok(())
    }

    pub(super) fn naval_intercept_success(
        &self,
        theater: &ConflictTheater,
        debriefing: &Debriefing,
    ) -> bool {
        let EventKind::NavalIntercept { ref targets } = self.kind else {
            return false;
        };
        let destroyed_map = debriefing.destroyed(&self.defender);
        let destroyed: u32 = targets
            .keys()
            .filter_map(|unit| destroyed_map.get(unit).copied())
            .sum();
        let share =
            (destroyed as f64 / (total_count(targets) as f64 + RATIO_EPSILON)).ceil();
        if theater.point(self.departure()).captured {
            share > 0.5
        } else {
            share < 0.5
        }
    }

    pub(super) fn naval_intercept_commit(
        &self,
        theater: &mut ConflictTheater,
        success: bool,
        player: &str,
    ) {
        let departure = self.departure();
        let weakened = if self.is_player_attacking(player) {
            if success { self.to_cp } else { departure }
        } else if success {
            departure
        } else {
            self.to_cp
        };
        theater
            .point_mut(weakened)
            .base
            .affect_strength(-STRENGTH_INFLUENCE);
    }
}
