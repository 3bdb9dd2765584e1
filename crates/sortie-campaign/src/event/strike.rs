//! Precision strike on fixed ground installations. Success is binary on
//! whether at least one target was levelled; base strengths are untouched.

use sortie_core::debriefing::Debriefing;
use sortie_core::enums::Task;
use sortie_core::error::CampaignError;
use sortie_core::types::TaskForceMap;
use sortie_theater::ConflictTheater;

use super::{Event, EventCtx};
use crate::operation::OperationGroup;

pub fn flight_name(task: Task) -> &'static str {
    match task {
        Task::GroundAttack => "Strike flight",
        Task::FighterSweep => "Escort flight",
        _ => "Flight",
    }
}

impl Event {
    pub(super) fn strike_setup(
        &mut self,
        flights: &TaskForceMap,
        ctx: &mut EventCtx,
    ) -> Result<(), CampaignError> {
        let to = &ctx.theater.point(self.to_cp).base;

        let mut operation = self.new_operation();
        let mut groups = std::collections::BTreeMap::new();
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
        operation.setup(groups);
        self.operation = Some(operation);
        Ok(())
    }

    pub(super) fn strike_success(
        &self,
        theater: &ConflictTheater,
        debriefing: &Debriefing,
    ) -> bool {
        let destroyed_any = !debriefing.destroyed_objects.is_empty();
        if theater.point(self.from_cp).captured {
            destroyed_any
        } else {
            !destroyed_any
        }
    }
}
