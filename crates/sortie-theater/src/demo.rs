//! A small canned theater: one strait, two factions, used by tests and as a
//! starting layout for new campaigns.

use glam::DVec2;

use sortie_core::constants::{IMPORTANCE_HIGH, IMPORTANCE_LOW, IMPORTANCE_MEDIUM};
use sortie_core::units::UnitType;

use crate::controlpoint::{ControlPoint, CpId, GroundObject};
use crate::theater::ConflictTheater;

/// Build the strait theater: a player airfield and carrier facing a chain of
/// three enemy points across a narrow sea.
///
/// Layout (west to east): Port Kassar (player), Carrier, Cape Rahil,
/// Isriyah, Qattara Rise (enemy).
pub fn strait_theater() -> ConflictTheater {
    let mut theater = ConflictTheater::new();

    let mut port_kassar = ControlPoint::new(
        CpId(0),
        "Port Kassar",
        DVec2::new(-60_000.0, 0.0),
        IMPORTANCE_MEDIUM,
    );
    port_kassar.captured = true;
    port_kassar.coastal = true;
    port_kassar.base.aircraft.insert(UnitType::F15C, 8);
    port_kassar.base.aircraft.insert(UnitType::A10C, 6);
    port_kassar.base.aircraft.insert(UnitType::UH1H, 4);
    port_kassar.base.armor.insert(UnitType::M1A2Abrams, 8);
    port_kassar.base.aa.insert(UnitType::AvengerM1097, 2);
    let port_kassar = theater.add_controlpoint(port_kassar);

    let mut carrier = ControlPoint::carrier(
        CpId(0),
        "Task Force 71",
        DVec2::new(-20_000.0, -35_000.0),
        IMPORTANCE_LOW,
    );
    carrier.base.aircraft.insert(UnitType::FA18CHornet, 10);
    let carrier = theater.add_controlpoint(carrier);

    let mut cape_rahil = ControlPoint::new(
        CpId(0),
        "Cape Rahil",
        DVec2::new(20_000.0, 5_000.0),
        IMPORTANCE_MEDIUM,
    );
    cape_rahil.coastal = true;
    cape_rahil.base.aircraft.insert(UnitType::MiG29A, 6);
    cape_rahil.base.aircraft.insert(UnitType::Su25T, 4);
    cape_rahil.base.aircraft.insert(UnitType::Il76MD, 2);
    cape_rahil.base.armor.insert(UnitType::T80U, 10);
    cape_rahil.base.aa.insert(UnitType::Zu23Ural, 3);
    cape_rahil
        .ground_objects
        .push(GroundObject::new("rahil-fuel-depot"));
    let cape_rahil = theater.add_controlpoint(cape_rahil);

    let mut isriyah = ControlPoint::new(
        CpId(0),
        "Isriyah",
        DVec2::new(55_000.0, 20_000.0),
        IMPORTANCE_HIGH,
    );
    isriyah.base.aircraft.insert(UnitType::Su27, 8);
    isriyah.base.armor.insert(UnitType::T90, 6);
    isriyah
        .ground_objects
        .push(GroundObject::new("isriyah-command-bunker"));
    let isriyah = theater.add_controlpoint(isriyah);

    let mut qattara = ControlPoint::new(
        CpId(0),
        "Qattara Rise",
        DVec2::new(90_000.0, 10_000.0),
        IMPORTANCE_HIGH,
    );
    qattara.base.aircraft.insert(UnitType::MiG31, 4);
    qattara.base.armor.insert(UnitType::T55, 12);
    let qattara = theater.add_controlpoint(qattara);

    theater.connect(port_kassar, cape_rahil);
    theater.connect(carrier, cape_rahil);
    theater.connect(cape_rahil, isriyah);
    theater.connect(isriyah, qattara);

    theater
}
