//! Strike against a supply convoy picketed by a ground escort.

use sortie_core::constants::RATIO_EPSILON;
use sortie_core::debriefing::Debriefing;
use sortie_core::enums::Task;
use sortie_core::error::CampaignError;
use sortie_core::types::{count_for_tasks, total_count, TaskForceMap, UnitMap};
use sortie_core::units::units_for_task;
use sortie_theater::ConflictTheater;

use super::{Event, EventCtx, EventKind};
use crate::operation::OperationGroup;

pub const STRENGTH_INFLUENCE: f64 = 0.25;
/// Share of the convoy that must be destroyed.
pub const SUCCESS_RATE: f64 = 0.6;
/// Escort size scales with the owning point.
const ESCORT_SCALE: f64 = 4.0;

impl Event {
    pub(super) fn convoy_strike_setup(
        &mut self,
        flights: &TaskForceMap,
        ctx: &mut EventCtx,
    ) -> Result<(), CampaignError> {
        let from_point = ctx.theater.point(self.from_cp);

        let mut targets = UnitMap::new();
        if let Some(convoy) = units_for_task(Task::Reconnaissance, &self.defender).first() {
            targets.insert(*convoy, ctx.rng.range(4, 6));
        }
        if let Some(escort) = units_for_task(Task::PinpointStrike, &self.defender).first() {
            let count =
                (from_point.base.strength * from_point.importance * ESCORT_SCALE).ceil() as u32;
            if count > 0 {
                targets.insert(*escort, count);
            }
        }

        let mut operation = self.new_operation();
        let mut groups = std::collections::BTreeMap::new();
        groups.insert(OperationGroup::Targets, targets.clone());
        groups.insert(
            OperationGroup::StrikeGroup,
            flights.get(&Task::GroundAttack).cloned().unwrap_or_default(),
        );
        operation.setup(groups);
        self.operation = Some(operation);

        if let EventKind::ConvoyStrike {
            targets: ref mut slot,
        } = self.kind
        {
            *slot = targets;
        }
        Ok(())
    }

    pub(super) fn convoy_strike_success(
        &self,
        theater: &ConflictTheater,
        debriefing: &Debriefing,
    ) -> bool {
        let EventKind::ConvoyStrike { ref targets } = self.kind else {
            return false;
        };
        let destroyed = count_for_tasks(
            &debriefing.destroyed(&self.defender),
            &[Task::PinpointStrike, Task::Reconnaissance],
        );
        let share = destroyed as f64 / (total_count(targets) as f64 + RATIO_EPSILON);
        let attackers_success = share > SUCCESS_RATE;
        if theater.point(self.from_cp).captured {
            attackers_success
        } else {
            !attackers_success
        }
    }
}
