#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use glam::DVec2;

    use sortie_core::debriefing::Debriefing;
    use sortie_core::enums::Task;
    use sortie_core::error::CampaignError;
    use sortie_core::settings::Settings;
    use sortie_core::types::{TaskForceMap, UnitMap};
    use sortie_core::units::{price, UnitType};
    use sortie_theater::demo::strait_theater;
    use sortie_theater::{ConflictTheater, ControlPoint, CpId};

    use crate::event::{Event, EventClass, EventKind};
    use crate::game::Game;

    const PLAYER: &str = "USA";
    const ENEMY: &str = "Russia";

    fn dev_settings() -> Settings {
        Settings {
            dev: true,
            ..Settings::default()
        }
    }

    fn dev_game() -> Game {
        Game::new(PLAYER, ENEMY, strait_theater(), dev_settings(), 7).unwrap()
    }

    fn cp_by_name(theater: &ConflictTheater, name: &str) -> CpId {
        theater
            .points()
            .find(|point| point.name == name)
            .map(|point| point.id)
            .unwrap()
    }

    fn unit_map(entries: &[(UnitType, u32)]) -> UnitMap {
        entries.iter().copied().collect()
    }

    fn flights(entries: &[(Task, &[(UnitType, u32)])]) -> TaskForceMap {
        entries
            .iter()
            .map(|(task, units)| (*task, unit_map(units)))
            .collect()
    }

    fn debriefing_alive(faction: &str, units: &[(UnitType, u32)]) -> Debriefing {
        let mut debriefing = Debriefing::default();
        debriefing
            .alive_units
            .insert(faction.to_string(), unit_map(units));
        debriefing
    }

    fn debriefing_destroyed(faction: &str, units: &[(UnitType, u32)]) -> Debriefing {
        let mut debriefing = Debriefing::default();
        debriefing
            .destroyed_units
            .insert(faction.to_string(), unit_map(units));
        debriefing
    }

    // --- economy ---

    #[test]
    fn test_budget_reward_for_single_point() {
        let mut theater = ConflictTheater::new();
        let mut point = ControlPoint::new(CpId(0), "Lone Field", DVec2::ZERO, 0.8);
        point.captured = true;
        theater.add_controlpoint(point);

        let game = Game::new(PLAYER, ENEMY, theater, Settings::default(), 1).unwrap();
        // ceil(log2(0.8 * 1.0 + 1) * 14) = ceil(11.87)
        assert_eq!(game.budget_reward_amount(), 12);
    }

    #[test]
    fn test_budget_reward_zero_without_player_points() {
        let mut theater = ConflictTheater::new();
        theater.add_controlpoint(ControlPoint::new(CpId(0), "Hostile", DVec2::ZERO, 1.0));

        let game = Game::new(PLAYER, ENEMY, theater, Settings::default(), 1).unwrap();
        assert_eq!(game.budget_reward_amount(), 0);
    }

    #[test]
    fn test_awacs_expense_is_flat() {
        let mut game = dev_game();
        let before = game.budget;
        game.awacs_expense_commit();
        assert_eq!(game.budget, before - 4);
    }

    #[test]
    fn test_commissioning_banks_fractions_across_turns() {
        // A lone enemy point: AirDefence awards 0.3/turn against a cap of 1,
        // so the first whole vehicle appears on turn four and the cap then
        // stops further banking.
        let mut theater = ConflictTheater::new();
        theater.add_controlpoint(ControlPoint::new(CpId(0), "Depot", DVec2::ZERO, 1.0));

        let mut game = Game::new(PLAYER, ENEMY, theater, Settings::default(), 42).unwrap();
        for _ in 0..3 {
            game.pass_turn(false, &[]);
            let aa = game.theater.point(CpId(0)).base.total_units(Task::AirDefence);
            assert_eq!(aa, 0);
        }
        game.pass_turn(false, &[]);
        assert_eq!(
            game.theater.point(CpId(0)).base.total_units(Task::AirDefence),
            1
        );
        for _ in 0..4 {
            game.pass_turn(false, &[]);
        }
        assert_eq!(
            game.theater.point(CpId(0)).base.total_units(Task::AirDefence),
            1
        );
    }

    // --- generation ---

    #[test]
    fn test_generation_offers_unconditional_events_per_frontline() {
        let game = dev_game();
        let player_frontline_attacks = game
            .events()
            .iter()
            .filter(|event| {
                event.class() == EventClass::FrontlineAttack && event.attacker == PLAYER
            })
            .count();
        // Only the airfield pair has a ground frontline; the carrier pair
        // does not.
        assert_eq!(player_frontline_attacks, 1);
    }

    #[test]
    fn test_strike_offered_once_per_enemy_point() {
        let game = dev_game();
        let rahil = cp_by_name(&game.theater, "Cape Rahil");
        // Rahil borders both the airfield and the carrier, but the strike
        // offer is de-duplicated per target point.
        let strikes = game
            .events()
            .iter()
            .filter(|event| {
                event.class() == EventClass::Strike
                    && event.attacker == PLAYER
                    && event.to_cp == rahil
            })
            .count();
        assert_eq!(strikes, 1);
    }

    #[test]
    fn test_enemy_events_deduplicated_by_class() {
        let game = dev_game();
        for class in [
            EventClass::FrontlineAttack,
            EventClass::Intercept,
            EventClass::NavalIntercept,
            EventClass::InsurgentAttack,
        ] {
            let count = game
                .events()
                .iter()
                .filter(|event| event.class() == class && event.attacker == ENEMY)
                .count();
            assert!(count <= 1, "{class:?} generated {count} enemy events");
        }
    }

    #[test]
    fn test_enemy_never_attacks_from_empty_airbase() {
        let mut theater = strait_theater();
        let rahil = cp_by_name(&theater, "Cape Rahil");
        theater.point_mut(rahil).base.aircraft.clear();
        let isriyah = cp_by_name(&theater, "Isriyah");
        theater.point_mut(isriyah).base.aircraft.clear();
        let qattara = cp_by_name(&theater, "Qattara Rise");
        theater.point_mut(qattara).base.aircraft.clear();

        let game = Game::new(PLAYER, ENEMY, theater, dev_settings(), 7).unwrap();
        assert!(game.events().iter().all(|event| event.attacker == PLAYER));
    }

    #[test]
    fn test_ignored_points_block_enemy_generation() {
        let mut game = dev_game();
        let kassar = cp_by_name(&game.theater, "Port Kassar");
        game.pass_turn(true, &[kassar]);
        // The carrier is global and already excluded, so suppressing the
        // airfield removes every enemy-initiated event.
        assert!(game.events().iter().all(|event| event.attacker == PLAYER));
    }

    // --- player actions ---

    #[test]
    fn test_player_attacking_rejects_incomplete_force() {
        let mut game = dev_game();
        let kassar = cp_by_name(&game.theater, "Port Kassar");
        let id = game
            .events()
            .iter()
            .find(|event| {
                event.class() == EventClass::FrontlineAttack && event.attacker == PLAYER
            })
            .map(|event| event.id)
            .unwrap();

        let incomplete = flights(&[(Task::GroundAttack, &[(UnitType::A10C, 2)])]);
        let err = game.player_attacking(id, kassar, &incomplete).unwrap_err();
        assert!(matches!(err, CampaignError::InvalidForceComposition { .. }));
    }

    #[test]
    fn test_initiate_event_yields_full_and_quick_plans() {
        let mut game = dev_game();
        let kassar = cp_by_name(&game.theater, "Port Kassar");
        let id = game
            .events()
            .iter()
            .find(|event| {
                event.class() == EventClass::FrontlineAttack && event.attacker == PLAYER
            })
            .map(|event| event.id)
            .unwrap();

        assert!(matches!(
            game.initiate_event(id),
            Err(CampaignError::OperationMissing(_))
        ));

        let force = flights(&[
            (Task::GroundAttack, &[(UnitType::A10C, 2)]),
            (Task::FighterSweep, &[(UnitType::F15C, 2)]),
        ]);
        game.player_attacking(id, kassar, &force).unwrap();

        let (full, quick) = game.initiate_event(id).unwrap();
        assert!(!full.quick);
        assert!(quick.quick);
        // The environment is rolled once and shared by both flavors.
        assert_eq!(full.environment, quick.environment);
    }

    #[test]
    fn test_finish_event_twice_reports_not_active() {
        let mut game = dev_game();
        let id = game
            .events()
            .iter()
            .find(|event| {
                event.class() == EventClass::FrontlineAttack && event.attacker == PLAYER
            })
            .map(|event| event.id)
            .unwrap();

        let debriefing = debriefing_alive(PLAYER, &[(UnitType::M1A2Abrams, 4)]);
        game.finish_event(id, &debriefing).unwrap();
        assert!(matches!(
            game.finish_event(id, &debriefing),
            Err(CampaignError::EventNotActive(_))
        ));
    }

    #[test]
    fn test_successful_event_awards_bonus() {
        let mut game = dev_game();
        let id = game
            .events()
            .iter()
            .find(|event| {
                event.class() == EventClass::FrontlineAttack && event.attacker == PLAYER
            })
            .map(|event| event.id)
            .unwrap();

        let before = game.budget;
        // Attacker armor alive, defender wiped out: clear player victory.
        let debriefing = debriefing_alive(PLAYER, &[(UnitType::M1A2Abrams, 4)]);
        let outcome = game.finish_event(id, &debriefing).unwrap();
        assert!(outcome.success);
        assert!(outcome.bonus > 0);
        assert_eq!(game.budget, before + outcome.bonus as i32);
    }

    // --- resolution arithmetic ---

    #[test]
    fn test_ground_ratio_resolves_with_no_defenders_alive() {
        let theater = strait_theater();
        let kassar = cp_by_name(&theater, "Port Kassar");
        let rahil = cp_by_name(&theater, "Cape Rahil");
        let event = Event::new(
            0,
            EventClass::FrontlineAttack,
            kassar,
            rahil,
            DVec2::ZERO,
            PLAYER,
            ENEMY,
        );

        // 3 / (0 + 0.01) clears the 1.5 ratio without dividing by zero.
        let debriefing = debriefing_alive(PLAYER, &[(UnitType::M1A2Abrams, 3)]);
        assert!(event.is_successful(&theater, &debriefing));
    }

    #[test]
    fn test_success_direction_flips_for_enemy_initiated_events() {
        let theater = strait_theater();
        let kassar = cp_by_name(&theater, "Port Kassar");
        let rahil = cp_by_name(&theater, "Cape Rahil");
        let event = Event::new(
            0,
            EventClass::FrontlineAttack,
            rahil,
            kassar,
            DVec2::ZERO,
            ENEMY,
            PLAYER,
        );

        // The nominal attacker dominates, but it attacks from an enemy-held
        // point, so from the player's perspective the event failed.
        let debriefing = debriefing_alive(ENEMY, &[(UnitType::T80U, 6)]);
        assert!(!event.is_successful(&theater, &debriefing));
    }

    #[test]
    fn test_insurgent_raid_resolves_for_defender_when_nothing_is_destroyed() {
        let theater = strait_theater();
        let kassar = cp_by_name(&theater, "Port Kassar");
        let rahil = cp_by_name(&theater, "Cape Rahil");
        let mut event = Event::new(
            0,
            EventClass::InsurgentAttack,
            rahil,
            kassar,
            DVec2::ZERO,
            ENEMY,
            PLAYER,
        );
        event.kind = EventKind::InsurgentAttack {
            targets: unit_map(&[(UnitType::Brdm2, 4)]),
        };

        // Originating from an enemy-held point, the raw predicate flips:
        // an empty debriefing reads as the raid fizzling out.
        assert!(event.is_successful(&theater, &Debriefing::default()));

        // Heavy insurgent armor losses flip it back against the player.
        let debriefing = debriefing_destroyed(ENEMY, &[(UnitType::T80U, 3)]);
        assert!(!event.is_successful(&theater, &debriefing));
    }

    #[test]
    fn test_insurgent_raid_direction_from_player_held_point() {
        let theater = strait_theater();
        let kassar = cp_by_name(&theater, "Port Kassar");
        let rahil = cp_by_name(&theater, "Cape Rahil");
        let mut event = Event::new(
            0,
            EventClass::InsurgentAttack,
            kassar,
            rahil,
            DVec2::ZERO,
            PLAYER,
            ENEMY,
        );
        event.kind = EventKind::InsurgentAttack {
            targets: unit_map(&[(UnitType::M1043Humvee, 4)]),
        };

        assert!(!event.is_successful(&theater, &Debriefing::default()));
        let debriefing = debriefing_destroyed(PLAYER, &[(UnitType::M1A2Abrams, 3)]);
        assert!(event.is_successful(&theater, &debriefing));
    }

    #[test]
    fn test_insurgent_success_counts_ground_role_only() {
        let theater = strait_theater();
        let kassar = cp_by_name(&theater, "Port Kassar");
        let rahil = cp_by_name(&theater, "Cape Rahil");
        let mut event = Event::new(
            0,
            EventClass::InsurgentAttack,
            rahil,
            kassar,
            DVec2::ZERO,
            ENEMY,
            PLAYER,
        );
        event.kind = EventKind::InsurgentAttack {
            targets: unit_map(&[(UnitType::Brdm2, 4)]),
        };

        // Recon losses alone never clear the threshold; only armor counts.
        let debriefing = debriefing_destroyed(ENEMY, &[(UnitType::Brdm2, 4)]);
        assert!(event.is_successful(&theater, &debriefing));
    }

    #[test]
    fn test_convoy_strike_direction_both_sides() {
        let theater = strait_theater();
        let kassar = cp_by_name(&theater, "Port Kassar");
        let rahil = cp_by_name(&theater, "Cape Rahil");

        let mut player_raid = Event::new(
            0,
            EventClass::ConvoyStrike,
            kassar,
            rahil,
            DVec2::ZERO,
            PLAYER,
            ENEMY,
        );
        player_raid.kind = EventKind::ConvoyStrike {
            targets: unit_map(&[(UnitType::Brdm2, 5)]),
        };
        // 4 of 5 convoy vehicles destroyed clears the 0.6 share.
        let debriefing = debriefing_destroyed(ENEMY, &[(UnitType::Brdm2, 4)]);
        assert!(player_raid.is_successful(&theater, &debriefing));
        assert!(!player_raid.is_successful(&theater, &Debriefing::default()));

        let mut enemy_raid = Event::new(
            1,
            EventClass::ConvoyStrike,
            rahil,
            kassar,
            DVec2::ZERO,
            ENEMY,
            PLAYER,
        );
        enemy_raid.kind = EventKind::ConvoyStrike {
            targets: unit_map(&[(UnitType::M1043Humvee, 5)]),
        };
        // The same outcome read from the player's side: a gutted friendly
        // convoy is a failure, an intact one a success.
        let debriefing = debriefing_destroyed(PLAYER, &[(UnitType::M1043Humvee, 4)]);
        assert!(!enemy_raid.is_successful(&theater, &debriefing));
        assert!(enemy_raid.is_successful(&theater, &Debriefing::default()));
    }

    #[test]
    fn test_naval_intercept_direction_both_sides() {
        let theater = strait_theater();
        let kassar = cp_by_name(&theater, "Port Kassar");
        let rahil = cp_by_name(&theater, "Cape Rahil");

        let mut player_intercept = Event::new(
            0,
            EventClass::NavalIntercept,
            kassar,
            rahil,
            DVec2::ZERO,
            PLAYER,
            ENEMY,
        );
        player_intercept.kind = EventKind::NavalIntercept {
            targets: unit_map(&[(UnitType::DryCargoShip, 3)]),
        };
        // One sunk ship is enough for the ceiling'd share.
        let debriefing = debriefing_destroyed(ENEMY, &[(UnitType::DryCargoShip, 1)]);
        assert!(player_intercept.is_successful(&theater, &debriefing));
        assert!(!player_intercept.is_successful(&theater, &Debriefing::default()));

        let mut enemy_intercept = Event::new(
            1,
            EventClass::NavalIntercept,
            rahil,
            kassar,
            DVec2::ZERO,
            ENEMY,
            PLAYER,
        );
        enemy_intercept.kind = EventKind::NavalIntercept {
            targets: unit_map(&[(UnitType::DryCargoShip, 3)]),
        };
        assert!(enemy_intercept.is_successful(&theater, &Debriefing::default()));
        let debriefing = debriefing_destroyed(PLAYER, &[(UnitType::DryCargoShip, 1)]);
        assert!(!enemy_intercept.is_successful(&theater, &debriefing));
    }

    #[test]
    fn test_frontline_patrol_holds_at_parity_and_flips() {
        let theater = strait_theater();
        let kassar = cp_by_name(&theater, "Port Kassar");
        let rahil = cp_by_name(&theater, "Cape Rahil");

        let patrol = Event::new(
            0,
            EventClass::FrontlinePatrol,
            kassar,
            rahil,
            DVec2::ZERO,
            PLAYER,
            ENEMY,
        );
        // Inclusive threshold: near-parity (4 vs 4) is enough to hold.
        let mut debriefing = debriefing_alive(PLAYER, &[(UnitType::M1A2Abrams, 4)]);
        debriefing
            .alive_units
            .insert(ENEMY.to_string(), unit_map(&[(UnitType::T80U, 4)]));
        assert!(patrol.is_successful(&theater, &debriefing));

        let mut outnumbered = debriefing_alive(PLAYER, &[(UnitType::M1A2Abrams, 4)]);
        outnumbered
            .alive_units
            .insert(ENEMY.to_string(), unit_map(&[(UnitType::T80U, 6)]));
        assert!(!patrol.is_successful(&theater, &outnumbered));

        let enemy_patrol = Event::new(
            1,
            EventClass::FrontlinePatrol,
            rahil,
            kassar,
            DVec2::ZERO,
            ENEMY,
            PLAYER,
        );
        let mut dominated = debriefing_alive(ENEMY, &[(UnitType::T80U, 6)]);
        dominated
            .alive_units
            .insert(PLAYER.to_string(), unit_map(&[(UnitType::M1A2Abrams, 2)]));
        assert!(!enemy_patrol.is_successful(&theater, &dominated));
    }

    #[test]
    fn test_intercept_flight_label_depends_on_side() {
        let event = Event::new(
            0,
            EventClass::Intercept,
            CpId(0),
            CpId(1),
            DVec2::ZERO,
            PLAYER,
            ENEMY,
        );
        assert_eq!(event.flight_name(Task::FighterSweep, true), "Intercept flight");
        assert_eq!(event.flight_name(Task::FighterSweep, false), "Escort flight");
    }

    #[test]
    fn test_intercept_success_deters_whole_frontline() {
        let mut theater = strait_theater();
        let kassar = cp_by_name(&theater, "Port Kassar");
        let rahil = cp_by_name(&theater, "Cape Rahil");
        let isriyah = cp_by_name(&theater, "Isriyah");

        let mut event = Event::new(
            0,
            EventClass::Intercept,
            kassar,
            rahil,
            DVec2::ZERO,
            PLAYER,
            ENEMY,
        );
        event.kind = EventKind::Intercept {
            transport_unit: Some(UnitType::Il76MD),
        };

        let mut debriefing = Debriefing::default();
        debriefing
            .destroyed_units
            .insert(ENEMY.to_string(), unit_map(&[(UnitType::Il76MD, 1)]));

        let outcome = event.commit(&mut theater, &debriefing, PLAYER);
        assert!(outcome.success);
        // Rahil sits on the frontline and is deterred exactly once even
        // though it borders two player points; Isriyah is out of reach.
        let rahil_strength = theater.point(rahil).base.strength;
        assert!((rahil_strength - 0.7).abs() < 1e-9);
        assert!((theater.point(isriyah).base.strength - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_base_attack_recommends_capture_without_flipping() {
        let mut theater = strait_theater();
        let kassar = cp_by_name(&theater, "Port Kassar");
        let rahil = cp_by_name(&theater, "Cape Rahil");
        let event = Event::new(
            0,
            EventClass::BaseAttack,
            kassar,
            rahil,
            DVec2::ZERO,
            PLAYER,
            ENEMY,
        );

        let debriefing = debriefing_alive(PLAYER, &[(UnitType::M1A2Abrams, 8)]);
        let outcome = event.commit(&mut theater, &debriefing, PLAYER);
        assert!(outcome.success);
        assert_eq!(outcome.capture, Some(rahil));
        // Ownership changes are the hosting layer's call.
        assert!(!theater.point(rahil).captured);
    }

    #[test]
    fn test_strike_success_requires_destroyed_object() {
        let theater = strait_theater();
        let kassar = cp_by_name(&theater, "Port Kassar");
        let rahil = cp_by_name(&theater, "Cape Rahil");
        let event = Event::new(
            0,
            EventClass::Strike,
            kassar,
            rahil,
            DVec2::ZERO,
            PLAYER,
            ENEMY,
        );

        assert!(!event.is_successful(&theater, &Debriefing::default()));

        let mut debriefing = Debriefing::default();
        debriefing.destroyed_objects.push("rahil-fuel-depot".into());
        assert!(event.is_successful(&theater, &debriefing));
    }

    #[test]
    fn test_strike_commit_marks_objects_dead() {
        let mut theater = strait_theater();
        let kassar = cp_by_name(&theater, "Port Kassar");
        let rahil = cp_by_name(&theater, "Cape Rahil");
        let event = Event::new(
            0,
            EventClass::Strike,
            kassar,
            rahil,
            DVec2::ZERO,
            PLAYER,
            ENEMY,
        );

        let mut debriefing = Debriefing::default();
        debriefing.destroyed_objects.push("rahil-fuel-depot".into());
        event.commit(&mut theater, &debriefing, PLAYER);
        assert!(theater
            .point(rahil)
            .ground_objects
            .iter()
            .all(|object| object.is_dead));
    }

    #[test]
    fn test_losses_route_to_departure_and_target() {
        let mut theater = strait_theater();
        let kassar = cp_by_name(&theater, "Port Kassar");
        let rahil = cp_by_name(&theater, "Cape Rahil");
        let mut event = Event::new(
            0,
            EventClass::FrontlineAttack,
            kassar,
            rahil,
            DVec2::ZERO,
            PLAYER,
            ENEMY,
        );
        event.departure_cp = Some(kassar);

        let mut debriefing = Debriefing::default();
        debriefing
            .destroyed_units
            .insert(PLAYER.to_string(), unit_map(&[(UnitType::F15C, 2)]));
        debriefing
            .destroyed_units
            .insert(ENEMY.to_string(), unit_map(&[(UnitType::MiG29A, 3)]));

        event.commit(&mut theater, &debriefing, PLAYER);
        assert_eq!(
            theater.point(kassar).base.aircraft.get(&UnitType::F15C),
            Some(&6)
        );
        assert_eq!(
            theater.point(rahil).base.aircraft.get(&UnitType::MiG29A),
            Some(&3)
        );
    }

    // --- deliveries ---

    #[test]
    fn test_delivery_round_trip() {
        let mut game = dev_game();
        let kassar = cp_by_name(&game.theater, "Port Kassar");
        let before_budget = game.budget;
        let before_helos = game
            .theater
            .point(kassar)
            .base
            .aircraft
            .get(&UnitType::UH1H)
            .copied()
            .unwrap_or(0);

        let first = game.purchase(kassar, &unit_map(&[(UnitType::UH1H, 3)])).unwrap();
        let second = game.purchase(kassar, &unit_map(&[(UnitType::UH1H, 2)])).unwrap();
        assert_eq!(first, second);
        assert_eq!(
            game.budget,
            before_budget - (price(UnitType::UH1H) * 5) as i32
        );

        game.pass_turn(true, &[]);
        assert_eq!(
            game.theater
                .point(kassar)
                .base
                .aircraft
                .get(&UnitType::UH1H)
                .copied(),
            Some(before_helos + 5)
        );
        // Flushed deliveries do not survive into the next turn.
        assert!(game
            .events()
            .iter()
            .all(|event| event.class() != EventClass::UnitsDelivery));
    }

    #[test]
    fn test_delivery_removal_of_unknown_event_is_ignored() {
        let mut game = dev_game();
        let live_before = game.events().len();
        game.units_delivery_remove(9999);
        assert_eq!(game.events().len(), live_before);
    }

    // --- turn loop ---

    #[test]
    fn test_dev_skip_spares_combat_penalties() {
        let mut game = dev_game();
        let rahil = cp_by_name(&game.theater, "Cape Rahil");
        let before = game.theater.point(rahil).base.strength;
        game.pass_turn(true, &[]);
        assert!((game.theater.point(rahil).base.strength - before).abs() < 1e-9);
    }

    #[test]
    fn test_pass_turn_recovers_player_strength() {
        let mut game = dev_game();
        let kassar = cp_by_name(&game.theater, "Port Kassar");
        game.theater.point_mut(kassar).base.affect_strength(-0.5);
        game.pass_turn(false, &[]);
        assert!((game.theater.point(kassar).base.strength - 0.7).abs() < 1e-9);
    }

    #[test]
    fn test_pass_turn_replaces_event_set() {
        let mut game = dev_game();
        let first_turn: Vec<_> = game.events().iter().map(|event| event.id).collect();
        game.pass_turn(true, &[]);
        let second_turn: Vec<_> = game.events().iter().map(|event| event.id).collect();
        assert!(!second_turn.is_empty());
        assert!(first_turn.iter().all(|id| !second_turn.contains(id)));
    }

    // --- events as data ---

    #[test]
    fn test_delivery_merges_additively() {
        let mut event = Event::new(
            0,
            EventClass::UnitsDelivery,
            CpId(0),
            CpId(0),
            DVec2::ZERO,
            PLAYER,
            PLAYER,
        );
        event.deliver(&unit_map(&[(UnitType::UH1H, 3)]));
        event.deliver(&unit_map(&[(UnitType::UH1H, 2)]));
        assert_eq!(
            event.pending_units().and_then(|p| p.get(&UnitType::UH1H)),
            Some(&5)
        );
    }

    #[test]
    fn test_event_serde_round_trip() {
        let mut event = Event::new(
            3,
            EventClass::ConvoyStrike,
            CpId(0),
            CpId(1),
            DVec2::new(12.0, -4.0),
            PLAYER,
            ENEMY,
        );
        if let EventKind::ConvoyStrike { targets } = &mut event.kind {
            targets.insert(UnitType::T80U, 4);
        }

        let json = serde_json::to_string(&event).unwrap();
        let back: Event = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, event.id);
        assert_eq!(back.class(), EventClass::ConvoyStrike);
        assert_eq!(back.to_cp, event.to_cp);
    }

    #[test]
    fn test_required_roles_per_variant() {
        let event = |class| Event::new(0, class, CpId(0), CpId(1), DVec2::ZERO, PLAYER, ENEMY);
        assert_eq!(
            event(EventClass::FrontlineAttack).tasks(true),
            vec![Task::GroundAttack, Task::FighterSweep]
        );
        assert_eq!(
            event(EventClass::FrontlineAttack).tasks(false),
            vec![Task::FighterSweep]
        );
        assert_eq!(
            event(EventClass::BaseAttack).tasks(true),
            vec![Task::GroundAttack, Task::FighterSweep, Task::PinpointStrike]
        );
        assert_eq!(
            event(EventClass::InfantryTransport).tasks(true),
            vec![Task::Embarking]
        );
        assert!(event(EventClass::UnitsDelivery).tasks(true).is_empty());
    }

    #[test]
    fn test_event_class_round_trip() {
        for class in [
            EventClass::FrontlineAttack,
            EventClass::FrontlinePatrol,
            EventClass::ConvoyStrike,
            EventClass::Intercept,
            EventClass::NavalIntercept,
            EventClass::InsurgentAttack,
            EventClass::InfantryTransport,
            EventClass::UnitsDelivery,
            EventClass::Strike,
            EventClass::BaseAttack,
        ] {
            assert_eq!(EventKind::new(class).class(), class);
        }
    }

    #[test]
    fn test_flights_helper_builds_expected_shape() {
        let force = flights(&[
            (Task::GroundAttack, &[(UnitType::A10C, 2)]),
            (Task::FighterSweep, &[(UnitType::F15C, 4)]),
        ]);
        let expected: BTreeMap<Task, UnitMap> = [
            (Task::GroundAttack, unit_map(&[(UnitType::A10C, 2)])),
            (Task::FighterSweep, unit_map(&[(UnitType::F15C, 4)])),
        ]
        .into_iter()
        .collect();
        assert_eq!(force, expected);
    }
}
