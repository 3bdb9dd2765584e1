//! Frontline ground push supported by CAS and a fighter screen.

use sortie_core::debriefing::Debriefing;
use sortie_core::enums::Task;
use sortie_core::error::CampaignError;
use sortie_core::types::{restrict_count, total_count, TaskForceMap};
use sortie_theater::ConflictTheater;
use tracing::debug;

use super::{Event, EventCtx};
use crate::operation::OperationGroup;

pub const STRENGTH_INFLUENCE: f64 = 0.3;
/// Attacker-to-defender ground ratio required to break the line.
pub const SUCCESS_RATE: f64 = 1.5;
/// When attacking, the offense is held below parity with the defense.
const ATTACKER_CAP: f64 = 0.7;

pub fn tasks(attacking: bool) -> Vec<Task> {
    if attacking {
        vec![Task::GroundAttack, Task::FighterSweep]
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

pub fn threat_description(event: &Event, theater: &ConflictTheater) -> String {
    let vehicles = theater.point(event.to_cp).base.assemble_count();
    format!("{} vehicles", vehicles)
}

impl Event {
    pub(super) fn frontline_attack_setup(
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
            let defenders = to.assemble_attack();
            let max_attackers = (total_count(&defenders) as f64 * ATTACKER_CAP).ceil() as u32;
            let attackers = restrict_count(&from.assemble_attack(), max_attackers);
            debug!(
                attackers = total_count(&attackers),
                defenders = total_count(&defenders),
                "frontline attack forces"
            );

            groups.insert(OperationGroup::Defenders, defenders);
            groups.insert(OperationGroup::Attackers, attackers);
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
            let defenders = to.assemble_attack();
            let max_attackers = total_count(&defenders);
            let attackers = restrict_count(&from.assemble_attack(), max_attackers);

            groups.insert(OperationGroup::Defenders, defenders);
            groups.insert(OperationGroup::Attackers, attackers);
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

    pub(super) fn frontline_attack_success(
        &self,
        theater: &ConflictTheater,
        debriefing: &Debriefing,
    ) -> bool {
        self.ground_ratio_success(theater, debriefing, SUCCESS_RATE, false)
    }
}
