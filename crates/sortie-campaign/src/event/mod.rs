//! The event family: combat and logistics encounters generated each turn.
//!
//! `Event` is one struct with a closed `EventKind` tagged union; dispatch is
//! a `match` per operation instead of a virtual-method chain. Every variant
//! supplies the same operation set: required roles, flight labels, force
//! setup (`player_attacking` / `player_defending`), success arithmetic,
//! `commit`, and `skip`.
//!
//! Success direction: every ratio predicate computes "did the nominal
//! attacker win" and then flips the answer when the originating point is not
//! player-held, so `is_successful` always answers from the player's
//! perspective. All ratio denominators carry a +0.01 epsilon so a side with
//! no forces resolves instead of faulting.

pub mod baseattack;
pub mod convoystrike;
pub mod frontlineattack;
pub mod frontlinepatrol;
pub mod infantrytransport;
pub mod insurgentattack;
pub mod intercept;
pub mod navalintercept;
pub mod strike;
pub mod unitsdelivery;

use glam::DVec2;
use serde::{Deserialize, Serialize};
use tracing::info;

use sortie_core::constants::{EVENT_BONUS_BASE, EVENT_BONUS_LOG_BASE, RATIO_EPSILON};
use sortie_core::debriefing::Debriefing;
use sortie_core::enums::Task;
use sortie_core::error::CampaignError;
use sortie_core::settings::Settings;
use sortie_core::types::{count_for_tasks, TaskForceMap, UnitMap};
use sortie_core::units::UnitType;
use sortie_theater::{ConflictTheater, CpId};

use crate::operation::Operation;
use crate::rng::CampaignRng;

/// Identifier of an event within one campaign session.
pub type EventId = u32;

/// Concrete event type, without per-event state. Used by the generation
/// probability table and the de-duplication rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventClass {
    FrontlineAttack,
    FrontlinePatrol,
    ConvoyStrike,
    Intercept,
    NavalIntercept,
    InsurgentAttack,
    InfantryTransport,
    UnitsDelivery,
    Strike,
    BaseAttack,
}

/// Per-variant event state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum EventKind {
    FrontlineAttack,
    FrontlinePatrol,
    ConvoyStrike { targets: UnitMap },
    Intercept { transport_unit: Option<UnitType> },
    NavalIntercept { targets: UnitMap },
    InsurgentAttack { targets: UnitMap },
    InfantryTransport,
    UnitsDelivery { pending: UnitMap },
    Strike,
    BaseAttack,
}

impl EventKind {
    /// Fresh state for a class.
    pub fn new(class: EventClass) -> Self {
        match class {
            EventClass::FrontlineAttack => Self::FrontlineAttack,
            EventClass::FrontlinePatrol => Self::FrontlinePatrol,
            EventClass::ConvoyStrike => Self::ConvoyStrike {
                targets: UnitMap::new(),
            },
            EventClass::Intercept => Self::Intercept {
                transport_unit: None,
            },
            EventClass::NavalIntercept => Self::NavalIntercept {
                targets: UnitMap::new(),
            },
            EventClass::InsurgentAttack => Self::InsurgentAttack {
                targets: UnitMap::new(),
            },
            EventClass::InfantryTransport => Self::InfantryTransport,
            EventClass::UnitsDelivery => Self::UnitsDelivery {
                pending: UnitMap::new(),
            },
            EventClass::Strike => Self::Strike,
            EventClass::BaseAttack => Self::BaseAttack,
        }
    }

    pub fn class(&self) -> EventClass {
        match self {
            Self::FrontlineAttack => EventClass::FrontlineAttack,
            Self::FrontlinePatrol => EventClass::FrontlinePatrol,
            Self::ConvoyStrike { .. } => EventClass::ConvoyStrike,
            Self::Intercept { .. } => EventClass::Intercept,
            Self::NavalIntercept { .. } => EventClass::NavalIntercept,
            Self::InsurgentAttack { .. } => EventClass::InsurgentAttack,
            Self::InfantryTransport => EventClass::InfantryTransport,
            Self::UnitsDelivery { .. } => EventClass::UnitsDelivery,
            Self::Strike => EventClass::Strike,
            Self::BaseAttack => EventClass::BaseAttack,
        }
    }
}

/// Result of committing a debriefing to an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventOutcome {
    /// Whether the event resolved in the player's favor.
    pub success: bool,
    /// Budget bonus awarded on success.
    pub bonus: u32,
    /// Control point whose capture the external layer should apply. The
    /// core itself never flips capture state.
    pub capture: Option<CpId>,
}

/// Read context handed to event setup: everything a variant needs to
/// synthesize the opposing force.
pub struct EventCtx<'a> {
    pub theater: &'a ConflictTheater,
    pub rng: &'a mut CampaignRng,
    pub settings: &'a Settings,
}

/// One combat/logistics encounter, live for the current turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub kind: EventKind,
    /// Point the event originates from (attacker side).
    pub from_cp: CpId,
    /// Point the committed force actually departs from; unset until the
    /// player commits, falls back to `from_cp`.
    pub departure_cp: Option<CpId>,
    /// Point the event targets (defender side).
    pub to_cp: CpId,
    pub location: DVec2,
    pub attacker: String,
    pub defender: String,
    pub difficulty: u32,
    pub is_awacs_enabled: bool,
    pub ca_slots: u32,
    pub operation: Option<Operation>,
}

impl Event {
    pub fn new(
        id: EventId,
        class: EventClass,
        from_cp: CpId,
        to_cp: CpId,
        location: DVec2,
        attacker: impl Into<String>,
        defender: impl Into<String>,
    ) -> Self {
        Self {
            id,
            kind: EventKind::new(class),
            from_cp,
            departure_cp: None,
            to_cp,
            location,
            attacker: attacker.into(),
            defender: defender.into(),
            difficulty: 1,
            is_awacs_enabled: false,
            ca_slots: 0,
            operation: None,
        }
    }

    pub fn class(&self) -> EventClass {
        self.kind.class()
    }

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self.kind {
            EventKind::FrontlineAttack => "Frontline attack",
            EventKind::FrontlinePatrol => "Frontline CAP",
            EventKind::ConvoyStrike { .. } => "Convoy strike",
            EventKind::Intercept { .. } => "Air intercept",
            EventKind::NavalIntercept { .. } => "Naval intercept",
            EventKind::InsurgentAttack { .. } => "Destroy insurgents",
            EventKind::InfantryTransport => "Frontline transport troops",
            EventKind::UnitsDelivery { .. } => "Units delivery",
            EventKind::Strike => "Strike",
            EventKind::BaseAttack => "Base attack",
        }
    }

    pub fn is_player_attacking(&self, player: &str) -> bool {
        self.attacker == player
    }

    /// Departure point for resolution; `from_cp` until the player commits.
    pub fn departure(&self) -> CpId {
        self.departure_cp.unwrap_or(self.from_cp)
    }

    /// The control point belonging to the enemy in this event.
    pub fn enemy_cp(&self, player: &str) -> CpId {
        if self.is_player_attacking(player) {
            self.to_cp
        } else {
            self.departure()
        }
    }

    /// Task roles the player must supply flights for.
    pub fn tasks(&self, attacking: bool) -> Vec<Task> {
        match self.kind {
            EventKind::FrontlineAttack => frontlineattack::tasks(attacking),
            EventKind::FrontlinePatrol => vec![Task::FighterSweep],
            EventKind::ConvoyStrike { .. } => vec![Task::GroundAttack],
            EventKind::Intercept { .. } => vec![Task::FighterSweep],
            EventKind::NavalIntercept { .. } => navalintercept::tasks(attacking),
            EventKind::InsurgentAttack { .. } => vec![Task::GroundAttack],
            EventKind::InfantryTransport => vec![Task::Embarking],
            EventKind::UnitsDelivery { .. } => vec![],
            EventKind::Strike => vec![Task::GroundAttack, Task::FighterSweep],
            EventKind::BaseAttack => baseattack::tasks(attacking),
        }
    }

    /// Label for the flight filling one required role.
    pub fn flight_name(&self, for_task: Task, attacking: bool) -> &'static str {
        match self.kind {
            EventKind::FrontlineAttack => frontlineattack::flight_name(for_task),
            EventKind::FrontlinePatrol => frontlinepatrol::flight_name(for_task),
            EventKind::ConvoyStrike { .. } => "Strike flight",
            EventKind::Intercept { .. } => {
                if attacking {
                    "Intercept flight"
                } else {
                    "Escort flight"
                }
            }
            EventKind::NavalIntercept { .. } => navalintercept::flight_name(for_task),
            EventKind::InsurgentAttack { .. } => "Ground intercept flight",
            EventKind::InfantryTransport => "Transport flight",
            EventKind::UnitsDelivery { .. } => "Delivery",
            EventKind::Strike => strike::flight_name(for_task),
            EventKind::BaseAttack => baseattack::flight_name(for_task),
        }
    }

    /// Whether this event may be flown from a global point (carrier).
    pub fn global_cp_available(&self) -> bool {
        matches!(
            self.kind,
            EventKind::FrontlineAttack
                | EventKind::ConvoyStrike { .. }
                | EventKind::Intercept { .. }
                | EventKind::NavalIntercept { .. }
                | EventKind::Strike
        )
    }

    /// Informational events carry no adversarial resolution and may span
    /// turns.
    pub fn informational(&self) -> bool {
        matches!(self.kind, EventKind::UnitsDelivery { .. })
    }

    /// Human-readable threat summary for the briefing screen.
    pub fn threat_description(
        &self,
        theater: &ConflictTheater,
        settings: &Settings,
        player: &str,
    ) -> String {
        match &self.kind {
            EventKind::FrontlineAttack => frontlineattack::threat_description(self, theater),
            EventKind::FrontlinePatrol => {
                frontlinepatrol::threat_description(self, theater, settings)
            }
            EventKind::Intercept { .. } => {
                intercept::threat_description(self, theater, settings, player)
            }
            EventKind::NavalIntercept { .. } => {
                navalintercept::threat_description(self, theater, settings)
            }
            _ => String::new(),
        }
    }

    /// Set up forces for the player's side when attacking. Validates the
    /// supplied flight mapping against the required roles, synthesizes the
    /// opposing force, and binds the operation.
    pub fn player_attacking(
        &mut self,
        flights: &TaskForceMap,
        ctx: &mut EventCtx,
    ) -> Result<(), CampaignError> {
        self.validate_flights(flights, &self.tasks(true))?;
        match self.kind {
            EventKind::FrontlineAttack => self.frontline_attack_setup(flights, ctx, true),
            EventKind::FrontlinePatrol => self.frontline_patrol_setup(flights, ctx),
            EventKind::ConvoyStrike { .. } => self.convoy_strike_setup(flights, ctx),
            EventKind::Intercept { .. } => self.intercept_setup(flights, ctx, true),
            EventKind::NavalIntercept { .. } => self.naval_intercept_setup(flights, ctx, true),
            EventKind::InsurgentAttack { .. } => self.insurgent_attack_setup(flights, ctx),
            EventKind::InfantryTransport => self.infantry_transport_setup(flights, ctx),
            EventKind::UnitsDelivery { .. } => Ok(()),
            EventKind::Strike => self.strike_setup(flights, ctx),
            EventKind::BaseAttack => self.base_attack_setup(flights, ctx, true),
        }
    }

    /// Set up forces for the player's side when defending.
    pub fn player_defending(
        &mut self,
        flights: &TaskForceMap,
        ctx: &mut EventCtx,
    ) -> Result<(), CampaignError> {
        self.validate_flights(flights, &self.tasks(false))?;
        match self.kind {
            EventKind::FrontlineAttack => self.frontline_attack_setup(flights, ctx, false),
            EventKind::FrontlinePatrol => self.frontline_patrol_setup(flights, ctx),
            EventKind::ConvoyStrike { .. } => self.convoy_strike_setup(flights, ctx),
            EventKind::Intercept { .. } => self.intercept_setup(flights, ctx, false),
            EventKind::NavalIntercept { .. } => self.naval_intercept_setup(flights, ctx, false),
            EventKind::InsurgentAttack { .. } => self.insurgent_attack_setup(flights, ctx),
            EventKind::InfantryTransport => self.infantry_transport_setup(flights, ctx),
            EventKind::UnitsDelivery { .. } => Ok(()),
            EventKind::Strike => self.strike_setup(flights, ctx),
            EventKind::BaseAttack => self.base_attack_setup(flights, ctx, false),
        }
    }

    /// Whether the event resolved in the player's favor.
    pub fn is_successful(&self, theater: &ConflictTheater, debriefing: &Debriefing) -> bool {
        match &self.kind {
            EventKind::FrontlineAttack => self.frontline_attack_success(theater, debriefing),
            EventKind::FrontlinePatrol => self.frontline_patrol_success(theater, debriefing),
            EventKind::ConvoyStrike { .. } => self.convoy_strike_success(theater, debriefing),
            EventKind::Intercept { .. } => self.intercept_success(theater, debriefing),
            EventKind::NavalIntercept { .. } => self.naval_intercept_success(theater, debriefing),
            EventKind::InsurgentAttack { .. } => self.insurgent_attack_success(theater, debriefing),
            EventKind::InfantryTransport => true,
            EventKind::UnitsDelivery { .. } => true,
            EventKind::Strike => self.strike_success(theater, debriefing),
            EventKind::BaseAttack => self.base_attack_success(theater, debriefing),
        }
    }

    /// Apply a debriefing: route losses, mark dead objects, apply the
    /// variant's strength adjustments. Returns the outcome for the caller.
    pub fn commit(
        &self,
        theater: &mut ConflictTheater,
        debriefing: &Debriefing,
        player: &str,
    ) -> EventOutcome {
        let success = self.is_successful(theater, debriefing);
        self.commit_losses(theater, debriefing);

        let mut outcome = EventOutcome {
            success,
            bonus: self.bonus(theater),
            capture: None,
        };

        match &self.kind {
            EventKind::FrontlineAttack => {
                self.frontline_commit(theater, success, frontlineattack::STRENGTH_INFLUENCE)
            }
            EventKind::FrontlinePatrol => {
                self.frontline_commit(theater, success, frontlinepatrol::STRENGTH_INFLUENCE)
            }
            EventKind::ConvoyStrike { .. } => {
                self.raid_commit(theater, success, convoystrike::STRENGTH_INFLUENCE)
            }
            EventKind::Intercept { .. } => {
                self.intercept_commit(theater, success, player);
            }
            EventKind::NavalIntercept { .. } => {
                self.naval_intercept_commit(theater, success, player);
            }
            EventKind::InsurgentAttack { .. } => {
                self.raid_commit(theater, success, insurgentattack::STRENGTH_INFLUENCE)
            }
            EventKind::InfantryTransport => {
                self.infantry_transport_commit(theater, success);
            }
            EventKind::UnitsDelivery { .. } => {}
            EventKind::Strike => {}
            EventKind::BaseAttack => {
                outcome.capture = self.base_attack_commit(theater, success);
            }
        }

        outcome
    }

    /// Apply the turn-end penalty for an unplayed event. UnitsDelivery
    /// instead flushes its pending units to the destination base.
    pub fn skip(&mut self, theater: &mut ConflictTheater) {
        match &mut self.kind {
            EventKind::FrontlineAttack => {
                if theater.point(self.to_cp).captured {
                    theater.point_mut(self.to_cp).base.affect_strength(-0.1);
                }
            }
            EventKind::FrontlinePatrol => {}
            EventKind::ConvoyStrike { .. } => {
                theater
                    .point_mut(self.to_cp)
                    .base
                    .affect_strength(-convoystrike::STRENGTH_INFLUENCE);
            }
            EventKind::Intercept { .. } => {
                if theater.point(self.to_cp).captured {
                    theater
                        .point_mut(self.to_cp)
                        .base
                        .affect_strength(-intercept::STRENGTH_INFLUENCE);
                }
            }
            EventKind::NavalIntercept { .. } => {
                if theater.point(self.to_cp).captured {
                    theater
                        .point_mut(self.to_cp)
                        .base
                        .affect_strength(-navalintercept::STRENGTH_INFLUENCE);
                }
            }
            EventKind::InsurgentAttack { .. } => {
                theater
                    .point_mut(self.to_cp)
                    .base
                    .affect_strength(-insurgentattack::STRENGTH_INFLUENCE);
            }
            EventKind::InfantryTransport => {}
            EventKind::UnitsDelivery { pending } => {
                theater.point_mut(self.to_cp).base.commission_units(pending);
                pending.clear();
            }
            EventKind::Strike => {}
            EventKind::BaseAttack => {
                theater.point_mut(self.to_cp).base.affect_strength(-0.1);
            }
        }
    }

    /// Budget bonus for a successful resolution.
    pub fn bonus(&self, theater: &ConflictTheater) -> u32 {
        let importance = theater.point(self.to_cp).importance;
        ((importance + 1.0).log(EVENT_BONUS_LOG_BASE) * EVENT_BONUS_BASE) as u32
    }

    // --- shared internals ---

    fn validate_flights(
        &self,
        flights: &TaskForceMap,
        required: &[Task],
    ) -> Result<(), CampaignError> {
        let covered =
            flights.len() == required.len() && required.iter().all(|task| flights.contains_key(task));
        if covered {
            Ok(())
        } else {
            Err(CampaignError::InvalidForceComposition {
                event: self.name().to_string(),
                required: required.to_vec(),
            })
        }
    }

    /// Fresh operation bound to this event's endpoints.
    pub(crate) fn new_operation(&self) -> Operation {
        Operation::new(
            self.attacker.clone(),
            self.defender.clone(),
            self.from_cp,
            self.departure(),
            self.to_cp,
            self.location,
        )
    }

    /// Route destroyed-unit tallies to the owning control point and mark
    /// destroyed ground objects dead across the theater.
    fn commit_losses(&self, theater: &mut ConflictTheater, debriefing: &Debriefing) {
        for (faction, losses) in &debriefing.destroyed_units {
            let cp = if *faction == self.attacker {
                self.departure()
            } else {
                self.to_cp
            };
            info!(event = self.name(), %cp, ?losses, "committing losses");
            theater.point_mut(cp).base.commit_losses(losses);
        }

        for identifier in &debriefing.destroyed_objects {
            if theater.mark_object_dead(identifier) {
                info!(event = self.name(), identifier, "ground object destroyed");
            }
        }
    }

    /// Ratio of alive attacker to alive defender ground forces, against an
    /// epsilon-guarded denominator; direction flipped when the originating
    /// point is enemy-held.
    pub(crate) fn ground_ratio_success(
        &self,
        theater: &ConflictTheater,
        debriefing: &Debriefing,
        factor: f64,
        inclusive: bool,
    ) -> bool {
        let alive_attackers =
            count_for_tasks(&debriefing.alive(&self.attacker), &[Task::PinpointStrike]);
        let alive_defenders =
            count_for_tasks(&debriefing.alive(&self.defender), &[Task::PinpointStrike]);
        let ratio = alive_attackers as f64 / (alive_defenders as f64 + RATIO_EPSILON);
        let attackers_success = if inclusive {
            ratio >= factor
        } else {
            ratio > factor
        };
        if theater.point(self.from_cp).captured {
            attackers_success
        } else {
            !attackers_success
        }
    }

    /// Shared frontline strength adjustment: the defending point weakens on
    /// a player win and recovers on a loss; an enemy push always costs one
    /// side.
    pub(crate) fn frontline_commit(
        &self,
        theater: &mut ConflictTheater,
        success: bool,
        influence: f64,
    ) {
        if theater.point(self.from_cp).captured {
            let delta = if success { -influence } else { influence };
            theater.point_mut(self.to_cp).base.affect_strength(delta);
        } else if success {
            theater.point_mut(self.from_cp).base.affect_strength(-influence);
        } else {
            theater.point_mut(self.to_cp).base.affect_strength(-influence);
        }
    }

    /// Shared raid strength adjustment (convoy strikes, insurgent attacks):
    /// only the side under threat pays, and only on a successful raid.
    pub(crate) fn raid_commit(&self, theater: &mut ConflictTheater, success: bool, influence: f64) {
        if !success {
            return;
        }
        let cp = if theater.point(self.from_cp).captured {
            self.to_cp
        } else {
            self.from_cp
        };
        theater.point_mut(cp).base.affect_strength(-influence);
    }
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} -> {}", self.name(), self.from_cp, self.to_cp)
    }
}
