//! Unit catalog: every unit type the campaign can field, with its task
//! role, price, and faction allegiance.
//!
//! The catalog is static data. `validate_catalog` checks it for completeness
//! once at campaign construction; a miss here is a programming error, not a
//! runtime condition.

use serde::{Deserialize, Serialize};

use crate::enums::Task;
use crate::error::CatalogError;

/// Every unit type known to the campaign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum UnitType {
    // Fighters
    F5E,
    MiG21Bis,
    MiG23MLD,
    MiG29A,
    MiG31,
    Su27,
    Su33,
    FA18CHornet,
    AV8BHarrier,
    F15C,
    M2000C,

    // Attack aircraft
    A10A,
    A10C,
    Su25T,
    Su24M,
    Su17M4,
    L39ZA,
    MiG29G,
    Su34,

    // Air logistics
    Il76MD,
    An26B,
    Yak40,
    C130,

    // AWACS
    E3A,
    A50,

    // Helicopters (infantry lift)
    Mi8MTV2,
    UH1H,

    // Armor
    T55,
    T80U,
    T90,
    M60A3Patton,
    M1A2Abrams,
    Btr80,
    M1134Stryker,

    // Recon vehicles
    Brdm2,
    M1043Humvee,

    // Air defence
    VulcanM163,
    AvengerM1097,
    PatriotIcc,
    Zu23Ural,
    Sa18Igla,
    Sa19Tunguska,
    Sa8Osa,

    // Ships
    DryCargoShip,
    AdmiralKuznetsov,
    CvnJohnCStennis,
}

/// Every catalog entry, in catalog order (cheap to expensive is *not*
/// guaranteed here; `choose_units` sorts by price).
pub const ALL_UNITS: &[UnitType] = &[
    UnitType::F5E,
    UnitType::MiG21Bis,
    UnitType::MiG23MLD,
    UnitType::MiG29A,
    UnitType::MiG31,
    UnitType::Su27,
    UnitType::Su33,
    UnitType::FA18CHornet,
    UnitType::AV8BHarrier,
    UnitType::F15C,
    UnitType::M2000C,
    UnitType::A10A,
    UnitType::A10C,
    UnitType::Su25T,
    UnitType::Su24M,
    UnitType::Su17M4,
    UnitType::L39ZA,
    UnitType::MiG29G,
    UnitType::Su34,
    UnitType::Il76MD,
    UnitType::An26B,
    UnitType::Yak40,
    UnitType::C130,
    UnitType::E3A,
    UnitType::A50,
    UnitType::Mi8MTV2,
    UnitType::UH1H,
    UnitType::T55,
    UnitType::T80U,
    UnitType::T90,
    UnitType::M60A3Patton,
    UnitType::M1A2Abrams,
    UnitType::Btr80,
    UnitType::M1134Stryker,
    UnitType::Brdm2,
    UnitType::M1043Humvee,
    UnitType::VulcanM163,
    UnitType::AvengerM1097,
    UnitType::PatriotIcc,
    UnitType::Zu23Ural,
    UnitType::Sa18Igla,
    UnitType::Sa19Tunguska,
    UnitType::Sa8Osa,
    UnitType::DryCargoShip,
    UnitType::AdmiralKuznetsov,
    UnitType::CvnJohnCStennis,
];

/// Advanced SAM systems excluded from commissioning when the campaign
/// setting disables them.
pub const SAM_BAN: &[UnitType] = &[UnitType::PatriotIcc, UnitType::Sa8Osa];

/// Task role of a unit type. Total over the catalog.
pub fn task_of(unit: UnitType) -> Task {
    use UnitType::*;
    match unit {
        F5E | MiG21Bis | MiG23MLD | MiG29A | MiG31 | Su27 | Su33 | FA18CHornet | AV8BHarrier
        | F15C | M2000C => Task::FighterSweep,
        A10A | A10C | Su25T | Su24M | Su17M4 | L39ZA | MiG29G | Su34 => Task::GroundAttack,
        Il76MD | An26B | Yak40 | C130 => Task::Transport,
        E3A | A50 => Task::Awacs,
        Mi8MTV2 | UH1H => Task::Embarking,
        T55 | T80U | T90 | M60A3Patton | M1A2Abrams | Btr80 | M1134Stryker => Task::PinpointStrike,
        Brdm2 | M1043Humvee => Task::Reconnaissance,
        VulcanM163 | AvengerM1097 | PatriotIcc | Zu23Ural | Sa18Igla | Sa19Tunguska | Sa8Osa => {
            Task::AirDefence
        }
        DryCargoShip => Task::CargoTransportation,
        AdmiralKuznetsov | CvnJohnCStennis => Task::Carriage,
    }
}

/// Price of a unit type in budget points. Total over the catalog.
pub fn price(unit: UnitType) -> u32 {
    use UnitType::*;
    match unit {
        F5E => 12,
        MiG21Bis => 13,
        MiG23MLD => 15,
        MiG29A => 23,
        MiG31 => 30,
        Su27 => 30,
        Su33 => 33,
        FA18CHornet => 18,
        AV8BHarrier => 15,
        F15C => 30,
        M2000C => 15,
        A10A => 18,
        A10C => 20,
        Su25T => 15,
        Su24M => 18,
        Su17M4 => 13,
        L39ZA => 10,
        MiG29G => 18,
        Su34 => 22,
        Il76MD => 13,
        An26B => 13,
        Yak40 => 13,
        C130 => 8,
        E3A => 8,
        A50 => 8,
        Mi8MTV2 => 10,
        UH1H => 8,
        T55 => 4,
        T80U => 8,
        T90 => 10,
        M60A3Patton => 6,
        M1A2Abrams => 9,
        Btr80 => 6,
        M1134Stryker => 6,
        Brdm2 => 4,
        M1043Humvee => 4,
        VulcanM163 => 5,
        AvengerM1097 => 10,
        PatriotIcc => 15,
        Zu23Ural => 5,
        Sa18Igla => 8,
        Sa19Tunguska => 10,
        Sa8Osa => 15,
        DryCargoShip => 10,
        AdmiralKuznetsov => 100,
        CvnJohnCStennis => 100,
    }
}

const ROSTER_USA: &[UnitType] = &[
    UnitType::F15C,
    UnitType::FA18CHornet,
    UnitType::AV8BHarrier,
    UnitType::F5E,
    UnitType::M2000C,
    UnitType::MiG21Bis,
    UnitType::A10A,
    UnitType::A10C,
    UnitType::C130,
    UnitType::E3A,
    UnitType::UH1H,
    UnitType::M1A2Abrams,
    UnitType::M60A3Patton,
    UnitType::M1134Stryker,
    UnitType::M1043Humvee,
    UnitType::VulcanM163,
    UnitType::AvengerM1097,
    UnitType::PatriotIcc,
    UnitType::DryCargoShip,
    UnitType::CvnJohnCStennis,
];

const ROSTER_RUSSIA: &[UnitType] = &[
    UnitType::MiG21Bis,
    UnitType::MiG23MLD,
    UnitType::MiG29A,
    UnitType::MiG31,
    UnitType::Su27,
    UnitType::Su33,
    UnitType::Su25T,
    UnitType::Su24M,
    UnitType::Su17M4,
    UnitType::L39ZA,
    UnitType::MiG29G,
    UnitType::Su34,
    UnitType::Il76MD,
    UnitType::An26B,
    UnitType::Yak40,
    UnitType::A50,
    UnitType::Mi8MTV2,
    UnitType::T55,
    UnitType::T80U,
    UnitType::T90,
    UnitType::Btr80,
    UnitType::Brdm2,
    UnitType::Zu23Ural,
    UnitType::Sa18Igla,
    UnitType::Sa19Tunguska,
    UnitType::Sa8Osa,
    UnitType::DryCargoShip,
    UnitType::AdmiralKuznetsov,
];

/// Roster for a faction name, if known.
pub fn faction_roster(faction: &str) -> Option<&'static [UnitType]> {
    match faction {
        "USA" => Some(ROSTER_USA),
        "Russia" => Some(ROSTER_RUSSIA),
        _ => None,
    }
}

/// Unit types of a faction that fill the given task role, in catalog order.
/// Empty if the faction is unknown.
pub fn units_for_task(task: Task, faction: &str) -> Vec<UnitType> {
    faction_roster(faction)
        .map(|roster| {
            roster
                .iter()
                .copied()
                .filter(|&u| task_of(u) == task)
                .collect()
        })
        .unwrap_or_default()
}

/// Pick a price-graded window of unit types for commissioning.
///
/// Candidates are sorted by price; `factor` (0..1, from control-point
/// importance) slides the window toward the expensive end, and the window
/// widens slightly with it.
pub fn choose_units(task: Task, factor: f64, count: usize, faction: &str) -> Vec<UnitType> {
    let mut suitable = units_for_task(task, faction);
    suitable.sort_by_key(|&u| price(u));

    if suitable.is_empty() {
        return suitable;
    }

    let idx = (suitable.len() as f64 * factor) as usize;
    let variety = count + (count as f64 * factor / 2.0) as usize;

    let start = idx.min(suitable.len().saturating_sub(variety));
    let end = (idx + variety).min(suitable.len());
    suitable[start..end.max(start)].to_vec()
}

/// Tasks the engine scrambles or commissions units for; every faction roster
/// must cover each of these.
const REQUIRED_TASKS: &[Task] = &[
    Task::FighterSweep,
    Task::GroundAttack,
    Task::PinpointStrike,
    Task::Reconnaissance,
    Task::Transport,
    Task::CargoTransportation,
    Task::AirDefence,
    Task::Embarking,
];

/// Fail-fast catalog validation, run once at campaign construction.
pub fn validate_catalog(factions: &[&str]) -> Result<(), CatalogError> {
    for &faction in factions {
        let roster =
            faction_roster(faction).ok_or_else(|| CatalogError::UnknownFaction(faction.into()))?;
        for &task in REQUIRED_TASKS {
            if !roster.iter().any(|&u| task_of(u) == task) {
                return Err(CatalogError::MissingTaskCoverage {
                    faction: faction.into(),
                    task,
                });
            }
        }
    }
    Ok(())
}
