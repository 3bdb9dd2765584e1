//! Helicopter insertion of infantry at the frontline. Reaching the landing
//! zone is the mission; the event always resolves in favor of the side that
//! flew it.

use sortie_core::enums::Task;
use sortie_core::error::CampaignError;
use sortie_core::types::{TaskForceMap, UnitMap};
use sortie_core::units::units_for_task;
use sortie_theater::ConflictTheater;

use super::{Event, EventCtx};
use crate::operation::OperationGroup;

pub const STRENGTH_INFLUENCE: f64 = 0.3;
const AIRDEFENSE_COUNT: u32 = 2;

impl Event {
    pub(super) fn infantry_transport_setup(
        &mut self,
        flights: &TaskForceMap,
        _ctx: &mut EventCtx,
    ) -> Result<(), CampaignError> {
        let mut airdefense = UnitMap::new();
        if let Some(aa) = units_for_task(Task::AirDefence, &self.defender).first() {
            airdefense.insert(*aa, AIRDEFENSE_COUNT);
        }

        let mut operation = self.new_operation();
        let mut groups = std::collections::BTreeMap::new();
        groups.insert(
            OperationGroup::Transport,
            flights.get(&Task::Embarking).cloned().unwrap_or_default(),
        );
        groups.insert(OperationGroup::AirDefense, airdefense);
        operation.setup(groups);
        self.operation = Some(operation);
        Ok(())
    }

    pub(super) fn infantry_transport_commit(&self, theater: &mut ConflictTheater, success: bool) {
        if success {
            theater
                .point_mut(self.to_cp)
                .base
                .affect_strength(-STRENGTH_INFLUENCE);
        }
    }
}
