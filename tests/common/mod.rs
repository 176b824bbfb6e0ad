//! Shared test fixtures for integration tests.

#![allow(dead_code)]

use workshop_load::equipment::EquipmentRecord;

/// Pump line used throughout the worked example: 2 × 500, Кв 0.6, tgφ 0.75,
/// 380 V, cosφ 0.8, η 0.9.
pub fn pump_line() -> EquipmentRecord {
    EquipmentRecord {
        name: "Pump line".to_string(),
        efficiency_factor: 0.9,
        load_power_factor: 0.8,
        load_voltage: 380.0,
        quantity: 2,
        rated_power: 500,
        utilization_rate: 0.6,
        reactive_power_factor: 0.75,
    }
}

/// A mixed machine-shop group with light and heavy consumers.
pub fn machine_shop() -> Vec<EquipmentRecord> {
    vec![
        pump_line(),
        EquipmentRecord {
            name: "Lathe".to_string(),
            quantity: 3,
            rated_power: 100,
            ..pump_line()
        },
        EquipmentRecord {
            name: "Crane".to_string(),
            quantity: 1,
            rated_power: 50,
            utilization_rate: 0.1,
            reactive_power_factor: 1.73,
            ..pump_line()
        },
    ]
}

/// Same record with every numeric field left blank.
pub fn blank_record(name: &str) -> EquipmentRecord {
    EquipmentRecord {
        name: name.to_string(),
        ..EquipmentRecord::default()
    }
}

/// CSV header accepted by the importer.
pub const CSV_HEADER: &str = "name,efficiencyFactor,loadPowerFactor,loadVoltage,quantity,ratedPower,utilizationRate,reactivePowerFactor";
