//! Full assault on a control point. The only event that can flip ownership:
//! the outcome recommends a capture, which the hosting layer applies.

use sortie_core::debriefing::Debriefing;
use sortie_core::enums::Task;
use sortie_core::error::CampaignError;
use sortie_core::types::TaskForceMap;
use sortie_theater::{ConflictTheater, CpId};
use tracing::info;

use super::{Event, EventCtx};
use crate::operation::OperationGroup;

pub const STRENGTH_INFLUENCE: f64 = 0.3;
/// Ground superiority required to take the base.
pub const SUCCESS_RATE: f64 = 1.5;

pub fn tasks(attacking: bool) -> Vec<Task> {
    if attacking {
        vec![Task::GroundAttack, Task::FighterSweep, Task::PinpointStrike]
    } else {
        vec![Task::FighterSweep]
    }
}

pub fn flight_name(task: Task) -> &'static str {
    match task {
        Task::GroundAttack => "CAS flight",
        Task::FighterSweep => "CAP flight",
        Task::PinpointStrike => "Ground attack",
        _ => "Flight",
    }
}

impl Event {
    pub(super) fn base_attack_setup(
        &mut self,
        flights: &TaskForceMap,
        ctx: &mut EventCtx,
        attacking: bool,
    ) -> Result<(), CampaignError> {
        let from = &ctx.theater.point(self.departure()).base;
        let to = &ctx.theater.point(self.to_cp).base;

        let mut operation = self.new_operation();
        let mut groups = std::collections::BTreeMap::new();

        if attacking {
            groups.insert(
                OperationGroup::Attackers,
                flights
                    .get(&Task::PinpointStrike)
                    .cloned()
                    .unwrap_or_default(),
            );
            groups.insert(OperationGroup::Defenders, to.assemble_attack());
            groups.insert(
                OperationGroup::StrikeGroup,
                flights.get(&Task::GroundAttack).cloned().unwrap_or_default(),
            );
            groups.insert(
                OperationGroup::Escort,
                flights.get(&Task::FighterSweep).cloned().unwrap_or_default(),
            );
            groups.insert(
                OperationGroup::Interceptors,
                to.scramble_interceptors(ctx.settings.multiplier),
            );
        } else {
            groups.insert(OperationGroup::Attackers, from.assemble_attack());
            groups.insert(OperationGroup::Defenders, to.assemble_attack());
            groups.insert(
                OperationGroup::StrikeGroup,
                from.scramble_cas(ctx.settings.multiplier),
            );
            groups.insert(
                OperationGroup::Escort,
                from.scramble_sweep(ctx.settings.multiplier),
            );
            groups.insert(
                OperationGroup::Interceptors,
                flights.get(&Task::FighterSweep).cloned().unwrap_or_default(),
            );
        }

        operation.setup(groups);
        self.operation = Some(operation);
        Ok(())
    }

    pub(super) fn base_attack_success(
        &self,
        theater: &ConflictTheater,
        debriefing: &Debriefing,
    ) -> bool {
        self.ground_ratio_success(theater, debriefing, SUCCESS_RATE, false)
    }

    /// Strength adjustments plus the capture recommendation. Ownership is
    /// never flipped here.
    pub(super) fn base_attack_commit(
        &self,
        theater: &mut ConflictTheater,
        success: bool,
    ) -> Option<CpId> {
        if theater.point(self.from_cp).captured {
            if success {
                theater
                    .point_mut(self.to_cp)
                    .base
                    .affect_strength(-STRENGTH_INFLUENCE);
                info!(event_id = self.id, cp = %self.to_cp, "base taken, capture recommended");
                Some(self.to_cp)
            } else {
                theater
                    .point_mut(self.from_cp)
                    .base
                    .affect_strength(-STRENGTH_INFLUENCE);
                None
            }
        } else if success {
            theater
                .point_mut(self.from_cp)
                .base
                .affect_strength(-STRENGTH_INFLUENCE);
            None
        } else {
            theater
                .point_mut(self.to_cp)
                .base
                .affect_strength(-STRENGTH_INFLUENCE);
            info!(event_id = self.id, cp = %self.to_cp, "base lost, capture recommended");
            Some(self.to_cp)
        }
    }
}
