//! Interception of a transport flight between two points. A successful
//! player intercept deters every enemy point on the frontline at once.

use sortie_core::debriefing::Debriefing;
use sortie_core::enums::Task;
use sortie_core::error::CampaignError;
use sortie_core::settings::Settings;
use sortie_core::types::{TaskForceMap, UnitMap};
use sortie_core::units::units_for_task;
use sortie_theater::ConflictTheater;

use super::{Event, EventCtx, EventKind};
use crate::operation::OperationGroup;

pub const STRENGTH_INFLUENCE: f64 = 0.3;
const AIRDEFENSE_COUNT: u32 = 3;
/// Carrier-based intercepts run with a reduced scramble.
const GLOBAL_SCRAMBLE_FACTOR: f64 = 0.5;

fn scramble_factor(event: &Event, theater: &ConflictTheater, settings: &Settings) -> f64 {
    let over_water = theater.point(event.departure()).is_global || theater.point(event.to_cp).is_global;
    if over_water {
        settings.multiplier * GLOBAL_SCRAMBLE_FACTOR
    } else {
        settings.multiplier
    }
}

pub fn threat_description(
    event: &Event,
    theater: &ConflictTheater,
    settings: &Settings,
    player: &str,
) -> String {
    let factor = scramble_factor(event, theater, settings);
    let enemy = theater.point(event.enemy_cp(player));
    let aircraft = enemy.base.scramble_count(factor, Task::FighterSweep);
    format!("{} aircraft", aircraft)
}

impl Event {
    pub(super) fn intercept_setup(
        &mut self,
        flights: &TaskForceMap,
        ctx: &mut EventCtx,
        attacking: bool,
    ) -> Result<(), CampaignError> {
        let factor = scramble_factor(self, ctx.theater, ctx.settings);
        let transports = units_for_task(Task::Transport, &self.defender);
        let transport_unit = ctx.rng.pick(&transports).copied();

        let mut transport_group = UnitMap::new();
        if let Some(unit) = transport_unit {
            transport_group.insert(unit, 1);
        }

        let mut airdefense = UnitMap::new();
        if let Some(aa) = units_for_task(Task::AirDefence, &self.defender).last() {
            airdefense.insert(*aa, AIRDEFENSE_COUNT);
        }

        let mut operation = self.new_operation();
        let mut groups = std::collections::BTreeMap::new();

        if attacking {
            let to = &ctx.theater.point(self.to_cp).base;
            groups.insert(OperationGroup::Escort, to.scramble_sweep(factor));
            groups.insert(OperationGroup::Transport, transport_group);
            groups.insert(OperationGroup::AirDefense, airdefense);
            groups.insert(
                OperationGroup::Interceptors,
                flights.get(&Task::FighterSweep).cloned().unwrap_or_default(),
            );
        } else {
            let from = &ctx.theater.point(self.departure()).base;
            groups.insert(
                OperationGroup::Escort,
                flights.get(&Task::FighterSweep).cloned().unwrap_or_default(),
            );
            groups.insert(OperationGroup::Transport, transport_group);
            groups.insert(
                OperationGroup::Interceptors,
                from.scramble_interceptors(ctx.settings.multiplier),
            );
            groups.insert(OperationGroup::AirDefense, UnitMap::new());
        }

        operation.setup(groups);
        self.operation = Some(operation);

        if let EventKind::Intercept {
            transport_unit: ref mut slot,
        } = self.kind
        {
            *slot = transport_unit;
        }
        Ok(())
    }

    pub(super) fn intercept_success(
        &self,
        theater: &ConflictTheater,
        debriefing: &Debriefing,
    ) -> bool {
        let EventKind::Intercept { transport_unit } = self.kind else {
            return false;
        };
        let destroyed = transport_unit
            .and_then(|unit| debriefing.destroyed(&self.defender).get(&unit).copied())
            .unwrap_or(0);
        if theater.point(self.from_cp).captured {
            destroyed > 0
        } else {
            destroyed == 0
        }
    }

    pub(super) fn intercept_commit(
        &self,
        theater: &mut ConflictTheater,
        success: bool,
        player: &str,
    ) {
        if self.is_player_attacking(player) {
            if success {
                // A downed transport ripples across the whole frontline,
                // one delta per point even when it borders several of ours.
                let frontline: std::collections::BTreeSet<_> =
                    theater.conflicts().into_iter().map(|(_, cp)| cp).collect();
                for enemy_cp in frontline {
                    theater
                        .point_mut(enemy_cp)
                        .base
                        .affect_strength(-STRENGTH_INFLUENCE);
                }
            } else {
                theater
                    .point_mut(self.from_cp)
                    .base
                    .affect_strength(-STRENGTH_INFLUENCE);
            }
        } else if success {
            theater
                .point_mut(self.from_cp)
                .base
                .affect_strength(-STRENGTH_INFLUENCE);
        } else {
            theater
                .point_mut(self.to_cp)
                .base
                .affect_strength(-STRENGTH_INFLUENCE);
        }
    }
}
