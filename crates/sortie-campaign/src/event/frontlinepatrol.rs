//! Fighter patrol over the frontline: holding the air is enough, so the
//! ground ratio only has to stay near parity.

use sortie_core::debriefing::Debriefing;
use sortie_core::enums::Task;
use sortie_core::error::CampaignError;
use sortie_core::settings::Settings;
use sortie_core::types::{restrict_count, total_count, TaskForceMap};
use sortie_theater::ConflictTheater;

use super::{Event, EventCtx};
use crate::operation::OperationGroup;

pub const STRENGTH_INFLUENCE: f64 = 0.3;
pub const SUCCESS_RATE: f64 = 0.8;
/// Escort share of the opposing scramble.
const ESCORT_FACTOR: f64 = 0.5;

pub fn flight_name(task: Task) -> &'static str {
    match task {
        Task::FighterSweep => "CAP flight",
        _ => "Flight",
    }
}

pub fn threat_description(event: &Event, theater: &ConflictTheater, settings: &Settings) -> String {
    let to = &theater.point(event.to_cp).base;
    let aircraft = to.scramble_count(settings.multiplier * ESCORT_FACTOR, Task::FighterSweep);
    format!("{} aircraft + CAS", aircraft)
}

impl Event {
    pub(super) fn frontline_patrol_setup(
        &mut self,
        flights: &TaskForceMap,
        ctx: &mut EventCtx,
    ) -> Result<(), CampaignError> {
        let from = &ctx.theater.point(self.departure()).base;
        let to = &ctx.theater.point(self.to_cp).base;

        let cas = to.scramble_cas(ctx.settings.multiplier);
        let escort = to.scramble_sweep(ctx.settings.multiplier * ESCORT_FACTOR);
        let defenders = to.assemble_attack();
        let attackers = restrict_count(&from.assemble_attack(), total_count(&defenders));

        let mut operation = self.new_operation();
        let mut groups = std::collections::BTreeMap::new();
        groups.insert(OperationGroup::StrikeGroup, cas);
        groups.insert(OperationGroup::Escort, escort);
        groups.insert(
            OperationGroup::Interceptors,
            flights.get(&Task::FighterSweep).cloned().unwrap_or_default(),
        );
        groups.insert(OperationGroup::Attackers, attackers);
        groups.insert(OperationGroup::Defenders, defenders);
        operation.setup(groups);
        self.operation = Some(operation);
        Ok(())
    }

    pub(super) fn frontline_patrol_success(
        &self,
        theater: &ConflictTheater,
        debriefing: &Debriefing,
    ) -> bool {
        self.ground_ratio_success(theater, debriefing, SUCCESS_RATE, true)
    }
}
