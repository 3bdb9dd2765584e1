//! Campaign session: the turn loop, probabilistic event generation, budget
//! ledger, and commissioning of enemy forces.

use std::collections::HashSet;

use tracing::{info, warn};

use sortie_core::constants::{
    commission_amount_factor, commission_limit_factor, AWACS_BUDGET_COST,
    BASEATTACK_STRENGTH_THRESHOLD, COMMISSION_AMOUNTS_SCALE, COMMISSION_LIMITS_SCALE,
    COMMISSION_TASKS, COMMISSION_UNIT_VARIETY, IMPORTANCE_HIGH, IMPORTANCE_LOW,
    PLAYER_BASE_STRENGTH_RECOVERY, PLAYER_BUDGET_BASE, PLAYER_BUDGET_IMPORTANCE_LOG,
    PLAYER_BUDGET_INITIAL,
};
use sortie_core::debriefing::Debriefing;
use sortie_core::enums::Task;
use sortie_core::error::{CampaignError, CatalogError};
use sortie_core::settings::Settings;
use sortie_core::types::{TaskForceMap, UnitMap};
use sortie_core::units::{choose_units, price, units_for_task, validate_catalog, UnitType, SAM_BAN};
use sortie_theater::{ConflictTheater, CpId};

use crate::event::{Event, EventClass, EventCtx, EventId, EventOutcome};
use crate::operation::MissionPlan;
use crate::rng::CampaignRng;

/// Generation order for one frontline pair. Order matters: Strike and
/// BaseAttack de-duplication sets fill as earlier pairs generate.
const EVENT_GENERATION_ORDER: [EventClass; 9] = [
    EventClass::FrontlineAttack,
    EventClass::FrontlinePatrol,
    EventClass::Strike,
    EventClass::ConvoyStrike,
    EventClass::InfantryTransport,
    EventClass::BaseAttack,
    EventClass::Intercept,
    EventClass::NavalIntercept,
    EventClass::InsurgentAttack,
];

/// Classes that only make sense across an actual ground frontline.
const FRONTLINE_CLASSES: [EventClass; 4] = [
    EventClass::FrontlineAttack,
    EventClass::FrontlinePatrol,
    EventClass::InfantryTransport,
    EventClass::ConvoyStrike,
];

/// Generation probabilities in percent, (player-side, enemy-side). 100
/// means unconditional; 0 means the side never gets the event.
fn event_probability(class: EventClass) -> (u32, u32) {
    match class {
        EventClass::FrontlineAttack => (100, 9),
        EventClass::FrontlinePatrol => (100, 0),
        EventClass::Strike => (100, 0),
        EventClass::ConvoyStrike => (25, 0),
        EventClass::InfantryTransport => (25, 0),
        EventClass::BaseAttack => (100, 9),
        EventClass::Intercept => (25, 9),
        EventClass::NavalIntercept => (25, 9),
        EventClass::InsurgentAttack => (0, 6),
        EventClass::UnitsDelivery => (0, 0),
    }
}

/// One campaign session. Owns the theater, the live event set, and the
/// player's budget; persists across turns.
pub struct Game {
    pub settings: Settings,
    pub budget: i32,
    pub theater: ConflictTheater,
    events: Vec<Event>,
    next_event_id: EventId,
    ignored_cps: HashSet<CpId>,
    player: String,
    enemy: String,
    rng: CampaignRng,
}

impl Game {
    /// Start a session. Validates both factions' unit catalogs up front so
    /// a roster hole fails here rather than mid-turn, then generates the
    /// first turn's events.
    pub fn new(
        player: impl Into<String>,
        enemy: impl Into<String>,
        theater: ConflictTheater,
        settings: Settings,
        seed: u64,
    ) -> Result<Self, CatalogError> {
        let player = player.into();
        let enemy = enemy.into();
        validate_catalog(&[player.as_str(), enemy.as_str()])?;

        let rng = if settings.dev {
            CampaignRng::always_pass()
        } else {
            CampaignRng::seeded(seed)
        };

        let mut game = Self {
            settings,
            budget: PLAYER_BUDGET_INITIAL,
            theater,
            events: Vec::new(),
            next_event_id: 0,
            ignored_cps: HashSet::new(),
            player,
            enemy,
            rng,
        };
        game.generate_events();
        Ok(game)
    }

    pub fn player(&self) -> &str {
        &self.player
    }

    pub fn enemy(&self) -> &str {
        &self.enemy
    }

    /// Events live this turn, in generation order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    fn event_mut(&mut self, id: EventId) -> Result<&mut Event, CampaignError> {
        self.events
            .iter_mut()
            .find(|event| event.id == id)
            .ok_or(CampaignError::EventNotActive(id))
    }

    // --- event generation ---

    fn alloc_event_id(&mut self) -> EventId {
        let id = self.next_event_id;
        self.next_event_id += 1;
        id
    }

    fn push_event(&mut self, mut event: Event) {
        // Intercepts happen in transit, halfway between the endpoints.
        if matches!(
            event.class(),
            EventClass::Intercept | EventClass::NavalIntercept
        ) {
            let from = self.theater.point(event.from_cp).position;
            let to = self.theater.point(event.to_cp).position;
            event.location = from.lerp(to, 0.5);
        }
        info!(
            event = event.name(),
            from = %event.from_cp,
            to = %event.to_cp,
            attacker = %event.attacker,
            "event generated"
        );
        self.events.push(event);
    }

    fn generate_player_event(&mut self, class: EventClass, player_cp: CpId, enemy_cp: CpId) {
        let id = self.alloc_event_id();
        let location = self.theater.point(enemy_cp).position;
        let event = Event::new(
            id,
            class,
            player_cp,
            enemy_cp,
            location,
            self.player.clone(),
            self.enemy.clone(),
        );
        self.push_event(event);
    }

    fn generate_enemy_event(&mut self, class: EventClass, player_cp: CpId, enemy_cp: CpId) {
        let id = self.alloc_event_id();
        let location = self.theater.point(player_cp).position;
        let event = Event::new(
            id,
            class,
            enemy_cp,
            player_cp,
            location,
            self.enemy.clone(),
            self.player.clone(),
        );
        self.push_event(event);
    }

    fn player_eligible(
        &self,
        class: EventClass,
        enemy_cp: CpId,
        strike_done: &HashSet<CpId>,
        base_attack_done: &HashSet<CpId>,
    ) -> bool {
        let enemy_point = self.theater.point(enemy_cp);
        match class {
            EventClass::NavalIntercept => enemy_point.coastal,
            EventClass::Strike => {
                enemy_point.has_ground_objects() && !strike_done.contains(&enemy_cp)
            }
            EventClass::BaseAttack => {
                let softened =
                    enemy_point.base.strength <= BASEATTACK_STRENGTH_THRESHOLD || self.settings.dev;
                softened && !base_attack_done.contains(&enemy_cp)
            }
            EventClass::InsurgentAttack => false,
            _ => true,
        }
    }

    fn enemy_eligible(&self, class: EventClass, player_cp: CpId, enemy_cp: CpId) -> bool {
        let duplicate = self
            .events
            .iter()
            .any(|event| event.class() == class && event.attacker == self.enemy);
        if duplicate || self.ignored_cps.contains(&player_cp) {
            return false;
        }

        let player_point = self.theater.point(player_cp);
        let enemy_point = self.theater.point(enemy_cp);
        if enemy_point.base.total_planes() == 0 || player_point.is_global {
            return false;
        }

        match class {
            EventClass::NavalIntercept => player_point.coastal,
            EventClass::Strike => player_point.has_ground_objects(),
            EventClass::BaseAttack => {
                let already_contested = self
                    .events
                    .iter()
                    .any(|event| event.class() == EventClass::BaseAttack);
                !already_contested
                    && enemy_point.base.total_armor() > 0
                    && player_point.base.strength <= BASEATTACK_STRENGTH_THRESHOLD
            }
            _ => true,
        }
    }

    /// One generation pass over every frontline pair. Strike and BaseAttack
    /// are offered at most once per enemy point per turn.
    fn generate_events(&mut self) {
        let conflicts = self.theater.conflicts();
        let mut strike_done: HashSet<CpId> = HashSet::new();
        let mut base_attack_done: HashSet<CpId> = HashSet::new();

        for (player_cp, enemy_cp) in conflicts {
            for class in EVENT_GENERATION_ORDER {
                if FRONTLINE_CLASSES.contains(&class)
                    && !self.theater.has_frontline_between(player_cp, enemy_cp)
                {
                    continue;
                }

                let (player_prob, enemy_prob) = event_probability(class);

                if self.player_eligible(class, enemy_cp, &strike_done, &base_attack_done) {
                    let strength = self.theater.point(player_cp).base.strength;
                    if player_prob == 100 || self.rng.roll(player_prob, strength) {
                        self.generate_player_event(class, player_cp, enemy_cp);
                        match class {
                            EventClass::Strike => {
                                strike_done.insert(enemy_cp);
                            }
                            EventClass::BaseAttack => {
                                base_attack_done.insert(enemy_cp);
                            }
                            _ => {}
                        }
                    }
                }

                if enemy_prob > 0 && self.enemy_eligible(class, player_cp, enemy_cp) {
                    let strength = self.theater.point(enemy_cp).base.strength;
                    if enemy_prob == 100 || self.rng.roll(enemy_prob, strength) {
                        self.generate_enemy_event(class, player_cp, enemy_cp);
                    }
                }
            }
        }
    }

    // --- player actions ---

    /// Commit a force for an event the player is attacking, departing from
    /// `departure_cp`. Fails if the flight mapping misses a required role.
    pub fn player_attacking(
        &mut self,
        id: EventId,
        departure_cp: CpId,
        flights: &TaskForceMap,
    ) -> Result<(), CampaignError> {
        let Self {
            ref mut events,
            ref theater,
            ref mut rng,
            ref settings,
            ..
        } = *self;
        let event = events
            .iter_mut()
            .find(|event| event.id == id)
            .ok_or(CampaignError::EventNotActive(id))?;
        event.departure_cp = Some(departure_cp);
        let mut ctx = EventCtx {
            theater,
            rng,
            settings,
        };
        event.player_attacking(flights, &mut ctx)
    }

    /// Commit a force for an event the player is defending.
    pub fn player_defending(
        &mut self,
        id: EventId,
        flights: &TaskForceMap,
    ) -> Result<(), CampaignError> {
        let Self {
            ref mut events,
            ref theater,
            ref mut rng,
            ref settings,
            ..
        } = *self;
        let event = events
            .iter_mut()
            .find(|event| event.id == id)
            .ok_or(CampaignError::EventNotActive(id))?;
        let mut ctx = EventCtx {
            theater,
            rng,
            settings,
        };
        event.player_defending(flights, &mut ctx)
    }

    /// Materialize the committed event into a full and a quick mission
    /// plan. The environment is rolled once and shared by both.
    pub fn initiate_event(
        &mut self,
        id: EventId,
    ) -> Result<(MissionPlan, MissionPlan), CampaignError> {
        let Self {
            ref mut events,
            ref mut rng,
            ..
        } = *self;
        let event = events
            .iter_mut()
            .find(|event| event.id == id)
            .ok_or(CampaignError::EventNotActive(id))?;
        let operation = event
            .operation
            .as_mut()
            .ok_or(CampaignError::OperationMissing(id))?;

        operation.prepare(rng, false);
        let full = operation
            .generate()
            .ok_or(CampaignError::OperationMissing(id))?;
        operation.prepare(rng, true);
        let quick = operation
            .generate()
            .ok_or(CampaignError::OperationMissing(id))?;
        Ok((full, quick))
    }

    /// Apply a debriefing to a live event: route losses, adjust strengths,
    /// award the bonus, and retire the event. Resolving the same event
    /// twice yields `EventNotActive`.
    pub fn finish_event(
        &mut self,
        id: EventId,
        debriefing: &Debriefing,
    ) -> Result<EventOutcome, CampaignError> {
        let index = self
            .events
            .iter()
            .position(|event| event.id == id)
            .ok_or_else(|| {
                warn!(event_id = id, "finish requested for inactive event");
                CampaignError::EventNotActive(id)
            })?;
        let event = self.events.remove(index);

        let outcome = event.commit(&mut self.theater, debriefing, &self.player);
        if outcome.success {
            self.budget += outcome.bonus as i32;
        }
        info!(
            event = event.name(),
            success = outcome.success,
            bonus = outcome.bonus,
            budget = self.budget,
            "event resolved"
        );
        Ok(outcome)
    }

    // --- deliveries ---

    /// Find or create the delivery event for a friendly point.
    pub fn units_delivery_event(&mut self, to_cp: CpId) -> EventId {
        let existing = self.events.iter().find(|event| {
            event.class() == EventClass::UnitsDelivery && event.to_cp == to_cp
        });
        if let Some(event) = existing {
            return event.id;
        }

        let id = self.alloc_event_id();
        let location = self.theater.point(to_cp).position;
        let event = Event::new(
            id,
            EventClass::UnitsDelivery,
            to_cp,
            to_cp,
            location,
            self.player.clone(),
            self.player.clone(),
        );
        self.events.push(event);
        id
    }

    /// Cancel a pending delivery. Unknown or non-delivery ids are logged
    /// and ignored.
    pub fn units_delivery_remove(&mut self, id: EventId) {
        let index = self.events.iter().position(|event| {
            event.id == id && event.class() == EventClass::UnitsDelivery
        });
        match index {
            Some(index) => {
                self.events.remove(index);
            }
            None => warn!(event_id = id, "delivery removal for inactive event"),
        }
    }

    /// Buy units for a friendly point. Deducts the catalog price and queues
    /// the units onto that point's delivery event.
    pub fn purchase(
        &mut self,
        to_cp: CpId,
        units: &UnitMap,
    ) -> Result<EventId, CampaignError> {
        let id = self.units_delivery_event(to_cp);
        let cost: i32 = units
            .iter()
            .map(|(unit, count)| (price(*unit) * count) as i32)
            .sum();
        self.budget -= cost;
        self.event_mut(id)?.deliver(units);
        Ok(id)
    }

    // --- economy ---

    /// Flat deduction for flying an AWACS this mission; applied by the
    /// caller when the option is taken, independent of the turn reward.
    pub fn awacs_expense_commit(&mut self) {
        self.budget -= AWACS_BUDGET_COST;
    }

    /// Per-turn income: logarithmic in the summed importance-weighted
    /// strength of player points, zero when the player holds nothing.
    pub fn budget_reward_amount(&self) -> i32 {
        let player_points = self.theater.player_points();
        if player_points.is_empty() {
            return 0;
        }
        let total: f64 = player_points
            .iter()
            .map(|cp| {
                let point = self.theater.point(*cp);
                point.importance * point.base.strength
            })
            .sum();
        ((total + 1.0).log(PLAYER_BUDGET_IMPORTANCE_LOG) * PLAYER_BUDGET_BASE
            * self.settings.multiplier)
            .ceil() as i32
    }

    fn budget_player(&mut self) {
        let reward = self.budget_reward_amount();
        self.budget += reward;
        info!(reward, budget = self.budget, "turn income");
    }

    /// Unit types eligible for commissioning at an enemy point. The
    /// selection window slides with point importance; advanced SAMs are
    /// filtered when disabled in settings.
    pub fn commission_unit_types(&self, cp: CpId, task: Task) -> Vec<UnitType> {
        if task == Task::AirDefence && !self.settings.sams {
            return units_for_task(task, &self.enemy)
                .into_iter()
                .filter(|unit| !SAM_BAN.contains(unit))
                .collect();
        }
        let importance = self.theater.point(cp).importance;
        let factor = (importance - IMPORTANCE_LOW) / (IMPORTANCE_HIGH - IMPORTANCE_LOW);
        choose_units(task, factor, COMMISSION_UNIT_VARIETY, &self.enemy)
    }

    /// Bank commissioning points for one enemy point and spend any whole
    /// points on a randomly picked eligible unit type. Fractional points
    /// carry over on the Base, so repeated no-income turns stay idempotent.
    fn commission_units(&mut self, cp: CpId) {
        for &task in COMMISSION_TASKS {
            let importance = self.theater.point(cp).importance;
            let limit = commission_limit_factor(task)
                * importance.powf(COMMISSION_LIMITS_SCALE)
                * self.settings.multiplier;
            let standing = self.theater.point(cp).base.total_units(task);
            if limit - standing as f64 <= 0.0 {
                continue;
            }

            let awarded = commission_amount_factor(task)
                * importance.powf(COMMISSION_AMOUNTS_SCALE)
                * self.settings.multiplier;
            let spendable = self
                .theater
                .point_mut(cp)
                .base
                .append_commission_points(task, awarded);
            if spendable == 0 {
                continue;
            }

            let eligible = self.commission_unit_types(cp, task);
            if let Some(unit) = self.rng.pick(&eligible).copied() {
                let mut order = UnitMap::new();
                order.insert(unit, spendable);
                self.theater.point_mut(cp).base.commission_units(&order);
                info!(%cp, ?task, ?unit, count = spendable, "commissioned units");
            }
        }
    }

    // --- turn loop ---

    /// Advance the turn: skip unplayed events, apply the economy, recover
    /// player strength, and regenerate the event set. `ignored_cps`
    /// replaces the set excluded from enemy generation next turn.
    pub fn pass_turn(&mut self, no_action: bool, ignored_cps: &[CpId]) {
        let mut events = std::mem::take(&mut self.events);
        for event in events.iter_mut() {
            // Dev sessions only flush deliveries, no skip penalties.
            if self.settings.dev && !event.informational() {
                continue;
            }
            event.skip(&mut self.theater);
        }

        if !no_action {
            self.budget_player();
            for cp in self.theater.enemy_points() {
                self.commission_units(cp);
            }
            for cp in self.theater.player_points() {
                self.theater
                    .point_mut(cp)
                    .base
                    .affect_strength(PLAYER_BASE_STRENGTH_RECOVERY);
            }
        }

        self.ignored_cps = ignored_cps.iter().copied().collect();
        self.generate_events();
    }
}
