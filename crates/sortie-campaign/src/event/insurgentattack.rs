//! Insurgent raid behind the player's lines; the player always defends.

use sortie_core::constants::RATIO_EPSILON;
use sortie_core::debriefing::Debriefing;
use sortie_core::enums::Task;
use sortie_core::error::CampaignError;
use sortie_core::types::{count_for_tasks, total_count, TaskForceMap, UnitMap};
use sortie_core::units::units_for_task;
use sortie_theater::ConflictTheater;

use super::{Event, EventCtx, EventKind};
use crate::operation::OperationGroup;

pub const STRENGTH_INFLUENCE: f64 = 0.1;
pub const SUCCESS_RATE: f64 = 0.7;
/// Distinct insurgent vehicle types per raid.
const UNIT_VARIETY: usize = 2;

impl Event {
    pub(super) fn insurgent_attack_setup(
        &mut self,
        flights: &TaskForceMap,
        ctx: &mut EventCtx,
    ) -> Result<(), CampaignError> {
        let pool = units_for_task(Task::Reconnaissance, &self.attacker);
        let picked = ctx.rng.pick_distinct(&pool, UNIT_VARIETY);
        let per_type = ((self.difficulty as f64 * 0.5).floor() as u32).max(1);

        let mut targets = UnitMap::new();
        for unit in picked {
            targets.insert(unit, per_type);
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

        if let EventKind::InsurgentAttack {
            targets: ref mut slot,
        } = self.kind
        {
            *slot = targets;
        }
        Ok(())
    }

    pub(super) fn insurgent_attack_success(
        &self,
        theater: &ConflictTheater,
        debriefing: &Debriefing,
    ) -> bool {
        let EventKind::InsurgentAttack { ref targets } = self.kind else {
            return false;
        };
        let destroyed =
            count_for_tasks(&debriefing.destroyed(&self.attacker), &[Task::PinpointStrike]);
        let share = destroyed as f64 / (total_count(targets) as f64 + RATIO_EPSILON);
        let attackers_success = share > SUCCESS_RATE;
        if theater.point(self.from_cp).captured {
            attackers_success
        } else {
            !attackers_success
        }
    }
}
