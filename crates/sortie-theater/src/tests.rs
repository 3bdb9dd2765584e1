#[cfg(test)]
mod tests {
    use sortie_core::enums::Task;
    use sortie_core::types::{total_count, UnitMap};
    use sortie_core::units::UnitType;

    use crate::base::Base;
    use crate::demo::strait_theater;
    use crate::theater::ConflictTheater;

    fn base_with_aircraft(unit: UnitType, count: u32) -> Base {
        let mut base = Base::default();
        base.aircraft.insert(unit, count);
        base
    }

    #[test]
    fn test_affect_strength_clamps() {
        let mut base = Base::default();
        base.affect_strength(-2.0);
        assert_eq!(base.strength, 0.0);
        base.affect_strength(0.4);
        assert!((base.strength - 0.4).abs() < 1e-12);
        base.affect_strength(3.0);
        assert_eq!(base.strength, 1.0);
    }

    #[test]
    fn test_commission_units_routes_by_role() {
        let mut base = Base::default();
        let mut delivery = UnitMap::new();
        delivery.insert(UnitType::Su27, 2);
        delivery.insert(UnitType::T90, 3);
        delivery.insert(UnitType::Sa18Igla, 1);
        base.commission_units(&delivery);

        assert_eq!(base.aircraft[&UnitType::Su27], 2);
        assert_eq!(base.armor[&UnitType::T90], 3);
        assert_eq!(base.aa[&UnitType::Sa18Igla], 1);
        assert_eq!(base.total_planes(), 2);
        assert_eq!(base.total_armor(), 3);
        assert_eq!(base.total_units(Task::AirDefence), 1);
    }

    #[test]
    fn test_commit_losses_saturates() {
        let mut base = base_with_aircraft(UnitType::MiG29A, 2);
        let mut losses = UnitMap::new();
        losses.insert(UnitType::MiG29A, 5);
        base.commit_losses(&losses);
        assert_eq!(base.total_planes(), 0);
    }

    /// The bank keeps fractional remainders across awards and zeroes out
    /// everything it reports spendable.
    #[test]
    fn test_commission_points_bank() {
        let mut base = Base::default();
        assert_eq!(base.append_commission_points(Task::AirDefence, 0.3), 0);
        assert_eq!(base.append_commission_points(Task::AirDefence, 0.3), 0);
        assert_eq!(base.append_commission_points(Task::AirDefence, 0.5), 1);
        // Remainder 0.1 carried over; nothing spendable without a new award.
        assert_eq!(base.append_commission_points(Task::AirDefence, 0.0), 0);
    }

    #[test]
    fn test_scramble_scales_with_strength() {
        let mut base = base_with_aircraft(UnitType::F15C, 10);
        base.strength = 0.5;
        let flight = base.scramble_sweep(1.0);
        assert_eq!(total_count(&flight), 5);

        base.strength = 0.0;
        let skeleton = base.scramble_sweep(1.0);
        // Floor of one aircraft while the pool is non-empty.
        assert_eq!(total_count(&skeleton), 1);
    }

    #[test]
    fn test_scramble_empty_pool_is_empty() {
        let base = Base::default();
        assert!(base.scramble_cas(1.0).is_empty());
        assert_eq!(base.scramble_count(1.0, Task::GroundAttack), 0);
    }

    #[test]
    fn test_assemble_attack_floor() {
        let mut base = Base::default();
        base.armor.insert(UnitType::T55, 4);
        base.strength = 0.1;
        let force = base.assemble_attack();
        assert_eq!(total_count(&force), 1);
    }

    #[test]
    fn test_conflicts_lists_adjacent_cross_faction_pairs() {
        let theater = strait_theater();
        let conflicts = theater.conflicts();
        assert!(!conflicts.is_empty());
        for (player, enemy) in &conflicts {
            assert!(theater.point(*player).captured);
            assert!(!theater.point(*enemy).captured);
        }
        // Port Kassar and the carrier both face Cape Rahil.
        assert_eq!(conflicts.len(), 2);
    }

    #[test]
    fn test_frontline_requires_non_global_endpoints() {
        let theater = strait_theater();
        let conflicts = theater.conflicts();
        let (airfield_pair, carrier_pair): (Vec<_>, Vec<_>) = conflicts
            .into_iter()
            .partition(|(p, _)| !theater.point(*p).is_global);
        let (a, b) = airfield_pair[0];
        assert!(theater.has_frontline_between(a, b));
        let (c, d) = carrier_pair[0];
        assert!(!theater.has_frontline_between(c, d));
    }

    #[test]
    fn test_mark_object_dead() {
        let mut theater = strait_theater();
        assert!(theater.mark_object_dead("rahil-fuel-depot"));
        // Second kill of the same object finds nothing.
        assert!(!theater.mark_object_dead("rahil-fuel-depot"));
        assert!(!theater.mark_object_dead("no-such-object"));
    }

    #[test]
    fn test_theater_serde_round_trip() {
        let theater = strait_theater();
        let json = serde_json::to_string(&theater).unwrap();
        let back: ConflictTheater = serde_json::from_str(&json).unwrap();
        assert_eq!(back.player_points(), theater.player_points());
        assert_eq!(back.conflicts(), theater.conflicts());
    }
}
