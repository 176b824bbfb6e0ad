use tracing::warn;

use super::types::{CalculatedEquipment, EquipmentDerived, EquipmentRecord};
use crate::load::rounding::truncate_to_tenth;

impl EquipmentDerived {
    /// Derives the per-equipment quantities from one record.
    ///
    /// The design current is `n·Pн / (√3·Uн·cosφ·ηн)` floored to one decimal.
    /// When any factor in the denominator is zero the division is not finite;
    /// the current is then reported as `0.0` and a warning is logged.
    ///
    /// # Arguments
    ///
    /// * `record` - Equipment record to evaluate
    ///
    /// # Returns
    ///
    /// The derived quantities. Never fails.
    pub fn from_record(record: &EquipmentRecord) -> Self {
        let quantity = record.quantity as f64;
        let rated_power = record.rated_power as f64;

        let power_total = quantity * rated_power;
        let utilization_power = power_total * record.utilization_rate;
        let reactive_power = utilization_power * record.reactive_power_factor;
        let squared_power = quantity * rated_power.powi(2);

        let raw_current = power_total
            / (3.0_f64.sqrt()
                * record.load_voltage
                * record.load_power_factor
                * record.efficiency_factor);
        let current = if raw_current.is_finite() {
            truncate_to_tenth(raw_current)
        } else {
            warn!(
                equipment = %record.name,
                voltage = record.load_voltage,
                power_factor = record.load_power_factor,
                efficiency = record.efficiency_factor,
                "design current is not finite, reporting 0"
            );
            0.0
        };

        Self {
            power_total,
            utilization_power,
            reactive_power,
            squared_power,
            current,
        }
    }
}

/// Attaches derived values to an equipment record.
///
/// Pure: the record is returned unchanged alongside its [`EquipmentDerived`].
pub fn calculate_equipment_values(record: EquipmentRecord) -> CalculatedEquipment {
    let calculated_values = EquipmentDerived::from_record(&record);
    CalculatedEquipment {
        record,
        calculated_values,
    }
}
