#[cfg(test)]
mod tests {
    use crate::debriefing::Debriefing;
    use crate::enums::Task;
    use crate::settings::Settings;
    use crate::types::{self, UnitMap};
    use crate::units::{self, UnitType, ALL_UNITS, SAM_BAN};

    /// Every catalog entry has a task, a price, and at least one faction.
    #[test]
    fn test_catalog_is_total() {
        for &unit in ALL_UNITS {
            let _ = units::task_of(unit);
            assert!(units::price(unit) > 0, "{unit:?} has no price");
            let in_roster = ["USA", "Russia"].iter().any(|f| {
                units::faction_roster(f)
                    .map(|r| r.contains(&unit))
                    .unwrap_or(false)
            });
            assert!(in_roster, "{unit:?} not in any faction roster");
        }
    }

    #[test]
    fn test_catalog_validation_passes_for_known_factions() {
        units::validate_catalog(&["USA", "Russia"]).unwrap();
    }

    #[test]
    fn test_catalog_validation_rejects_unknown_faction() {
        assert!(units::validate_catalog(&["Atlantis"]).is_err());
    }

    #[test]
    fn test_units_for_task_respects_roster() {
        let sweeps = units::units_for_task(Task::FighterSweep, "USA");
        assert!(sweeps.contains(&UnitType::F15C));
        assert!(!sweeps.contains(&UnitType::Su27));
        assert!(sweeps.iter().all(|&u| units::task_of(u) == Task::FighterSweep));
    }

    #[test]
    fn test_choose_units_window_is_price_graded() {
        let cheap = units::choose_units(Task::FighterSweep, 0.0, 4, "Russia");
        let dear = units::choose_units(Task::FighterSweep, 1.0, 4, "Russia");
        assert!(!cheap.is_empty() && !dear.is_empty());
        let max_cheap = cheap.iter().map(|&u| units::price(u)).max().unwrap();
        let max_dear = dear.iter().map(|&u| units::price(u)).max().unwrap();
        assert!(max_dear >= max_cheap);
    }

    #[test]
    fn test_sam_ban_entries_are_air_defence() {
        for &unit in SAM_BAN {
            assert_eq!(units::task_of(unit), Task::AirDefence);
        }
    }

    #[test]
    fn test_restrict_count() {
        let mut force = UnitMap::new();
        force.insert(UnitType::T55, 3);
        force.insert(UnitType::T90, 4);
        let restricted = types::restrict_count(&force, 5);
        assert_eq!(types::total_count(&restricted), 5);
        // Order preserved: T55 fully taken first.
        assert_eq!(restricted[&UnitType::T55], 3);
        assert_eq!(restricted[&UnitType::T90], 2);
    }

    #[test]
    fn test_count_for_tasks_filters_by_role() {
        let mut force = UnitMap::new();
        force.insert(UnitType::T90, 2);
        force.insert(UnitType::Su27, 5);
        assert_eq!(types::count_for_tasks(&force, &[Task::PinpointStrike]), 2);
        assert_eq!(types::count_for_tasks(&force, &[Task::FighterSweep]), 5);
    }

    #[test]
    fn test_merge_units_is_additive() {
        let mut a = UnitMap::new();
        a.insert(UnitType::UH1H, 3);
        let mut b = UnitMap::new();
        b.insert(UnitType::UH1H, 2);
        b.insert(UnitType::C130, 1);
        types::merge_units(&mut a, &b);
        assert_eq!(a[&UnitType::UH1H], 5);
        assert_eq!(a[&UnitType::C130], 1);
    }

    /// A faction absent from the debriefing reads as an empty force.
    #[test]
    fn test_debriefing_missing_faction_defaults_empty() {
        let debriefing = Debriefing::default();
        assert!(debriefing.destroyed("USA").is_empty());
        assert!(debriefing.alive("Russia").is_empty());
    }

    #[test]
    fn test_debriefing_serde_round_trip() {
        let mut debriefing = Debriefing::default();
        let mut losses = UnitMap::new();
        losses.insert(UnitType::Il76MD, 1);
        debriefing.destroyed_units.insert("Russia".into(), losses);
        debriefing.destroyed_objects.push("warehouse#001".into());

        let json = serde_json::to_string(&debriefing).unwrap();
        let back: Debriefing = serde_json::from_str(&json).unwrap();
        assert_eq!(back.destroyed("Russia")[&UnitType::Il76MD], 1);
        assert_eq!(back.destroyed_objects, vec!["warehouse#001".to_string()]);
    }

    #[test]
    fn test_settings_default() {
        let settings = Settings::default();
        assert_eq!(settings.multiplier, 1.0);
        assert!(settings.sams);
        assert!(!settings.dev);
    }
}
