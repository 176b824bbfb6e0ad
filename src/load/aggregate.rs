//! Workshop-level aggregation of equipment loads.
//!
//! Two pipelines share the same shape but differ on purpose:
//! - the group pipeline works on the live equipment list, ceils the
//!   effective count and does not scale reactive load by Кр;
//! - the busbar pipeline works on [`WorkshopTotals`], floors the effective
//!   count and scales both active and reactive load by Кр.
//!
//! Both divide by the voltage of the first listed equipment to obtain a
//! group current. Only the table-key steps are rounded; every other output
//! keeps full precision.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::resolver::{resolve_exact, resolve_range};
use super::rounding::round_to_tenth;
use super::tables::{BUSBAR_TABLE, ExactTable, GROUP_TABLE, RangeTable};
use crate::equipment::CalculatedEquipment;

/// Sums of the per-equipment derived values.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GroupTotals {
    /// Σ n·Pн
    pub total_power: f64,
    /// Σ n·Pн·Кв
    pub total_utilization_power: f64,
    /// Σ n·Pн²
    pub total_squared_power: f64,
    /// Σ n·Pн·Кв·tgφ
    pub total_reactive_power: f64,
}

impl GroupTotals {
    /// Sums derived values over all equipment, in list order.
    pub fn from_equipment(equipment: &[CalculatedEquipment]) -> Self {
        equipment
            .iter()
            .map(|e| &e.calculated_values)
            .fold(Self::default(), |acc, v| Self {
                total_power: acc.total_power + v.power_total,
                total_utilization_power: acc.total_utilization_power + v.utilization_power,
                total_squared_power: acc.total_squared_power + v.squared_power,
                total_reactive_power: acc.total_reactive_power + v.reactive_power,
            })
    }
}

/// Design load of the equipment group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupLoad {
    /// Group utilization rate Кв = Σ n·Pн·Кв / Σ n·Pн.
    pub group_utilization_rate: f64,
    /// Effective equipment count nе, ceiled.
    pub effective_equipment_count: f64,
    /// Standardized active-power coefficient Кр.
    pub estimated_active_power_factor: f64,
    /// Estimated active load Рр.
    pub estimated_active_load: f64,
    /// Estimated reactive load Qр.
    pub estimated_reactive_load: f64,
    /// Apparent power Sр.
    pub full_power: f64,
    /// Estimated group current Iр.
    pub estimated_group_current: f64,
}

impl GroupLoad {
    /// Runs the group pipeline over summed equipment values.
    ///
    /// # Arguments
    ///
    /// * `totals` - Sums over the equipment list
    /// * `voltage` - Representative group voltage, see [`representative_voltage`]
    /// * `table` - Exact-count coefficient table
    ///
    /// # Returns
    ///
    /// The group load. Zero denominators yield zero outputs.
    pub fn calculate(totals: &GroupTotals, voltage: Option<f64>, table: &ExactTable) -> Self {
        let group_utilization_rate = if totals.total_power > 0.0 {
            totals.total_utilization_power / totals.total_power
        } else {
            0.0
        };

        let effective_equipment_count = if totals.total_squared_power > 0.0 {
            (totals.total_power.powi(2) / totals.total_squared_power).ceil()
        } else {
            0.0
        };

        // Both ceilings are kept: the count above is already whole.
        let rounded_count = effective_equipment_count.ceil() as i64;
        let rounded_rate = round_to_tenth(group_utilization_rate);
        let estimated_active_power_factor = resolve_exact(rounded_count, rounded_rate, table);
        debug!(
            rounded_count,
            rounded_rate, estimated_active_power_factor, "resolved group coefficient"
        );

        let estimated_active_load = estimated_active_power_factor * totals.total_utilization_power;
        let estimated_reactive_load = totals.total_reactive_power;
        let full_power =
            (estimated_active_load.powi(2) + estimated_reactive_load.powi(2)).sqrt();
        let estimated_group_current = voltage.map_or(0.0, |v| estimated_active_load / v);

        Self {
            group_utilization_rate,
            effective_equipment_count,
            estimated_active_power_factor,
            estimated_active_load,
            estimated_reactive_load,
            full_power,
            estimated_group_current,
        }
    }
}

/// Whole-workshop survey totals driving the busbar pipeline.
///
/// Defaults to the reference survey; can be replaced from configuration or
/// per request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct WorkshopTotals {
    /// Σ n·Pн
    #[serde(alias = "total_power")]
    pub total_power: f64,
    /// Σ n·Pн·Кв
    #[serde(alias = "total_utilization_power")]
    pub total_utilization_power: f64,
    /// Σ n·Pн·Кв·tgφ
    #[serde(alias = "total_reactive_power")]
    pub total_reactive_power: f64,
    /// Σ n·Pн²
    #[serde(alias = "total_squared_power")]
    pub total_squared_power: f64,
}

impl WorkshopTotals {
    /// Totals of the reference workshop survey.
    pub const REFERENCE: Self = Self {
        total_power: 2330.0,
        total_utilization_power: 752.0,
        total_reactive_power: 657.0,
        total_squared_power: 96388.0,
    };
}

impl Default for WorkshopTotals {
    fn default() -> Self {
        Self::REFERENCE
    }
}

/// Design load of the whole workshop on the 0.38 kV busbars.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusbarLoad {
    /// Workshop utilization rate, rounded to one decimal.
    pub utilization_rate_all: f64,
    /// Effective equipment count, floored.
    pub effective_equipment_count_all: i64,
    /// Standardized active-power coefficient Кр.
    pub estimated_active_power_factor_all: f64,
    /// Estimated active load Рр on the busbars.
    pub estimated_active_load_tires: f64,
    /// Estimated reactive load Qр on the busbars.
    pub estimated_reactive_load_tires: f64,
    /// Apparent power Sр on the busbars.
    pub full_power_tires: f64,
    /// Estimated current on the busbars.
    pub estimated_group_current_tires: f64,
}

impl BusbarLoad {
    /// Runs the busbar pipeline over workshop survey totals.
    ///
    /// # Arguments
    ///
    /// * `totals` - Workshop survey totals
    /// * `voltage` - Representative group voltage, see [`representative_voltage`]
    /// * `table` - Range-keyed coefficient table
    ///
    /// # Returns
    ///
    /// The busbar load. Zero denominators yield zero outputs.
    pub fn calculate(totals: &WorkshopTotals, voltage: Option<f64>, table: &RangeTable) -> Self {
        let utilization_rate = if totals.total_power == 0.0 {
            0.0
        } else {
            totals.total_utilization_power / totals.total_power
        };

        let effective_equipment_count_all = if totals.total_squared_power == 0.0 {
            0
        } else {
            (totals.total_power.powi(2) / totals.total_squared_power).floor() as i64
        };

        let utilization_rate_all = round_to_tenth(utilization_rate);
        let estimated_active_power_factor_all =
            resolve_range(effective_equipment_count_all, utilization_rate_all, table);
        debug!(
            effective_equipment_count_all,
            utilization_rate_all, estimated_active_power_factor_all, "resolved busbar coefficient"
        );

        let estimated_active_load_tires =
            estimated_active_power_factor_all * totals.total_utilization_power;
        let estimated_reactive_load_tires =
            estimated_active_power_factor_all * totals.total_reactive_power;
        let full_power_tires = (estimated_active_load_tires.powi(2)
            + estimated_reactive_load_tires.powi(2))
        .sqrt();
        let estimated_group_current_tires =
            voltage.map_or(0.0, |v| estimated_active_load_tires / v);

        Self {
            utilization_rate_all,
            effective_equipment_count_all,
            estimated_active_power_factor_all,
            estimated_active_load_tires,
            estimated_reactive_load_tires,
            full_power_tires,
            estimated_group_current_tires,
        }
    }
}

/// Combined group and busbar design figures for one workshop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkshopResult {
    #[serde(flatten)]
    pub group: GroupLoad,
    #[serde(flatten)]
    pub busbar: BusbarLoad,
}

/// Voltage of the first listed equipment, if it is positive.
///
/// The first record stands in for the whole group.
pub fn representative_voltage(equipment: &[CalculatedEquipment]) -> Option<f64> {
    equipment
        .first()
        .map(|e| e.record.load_voltage)
        .filter(|v| *v > 0.0)
}

/// Computes the workshop result from already-calculated equipment.
///
/// # Arguments
///
/// * `equipment` - Equipment with derived values, in input order
/// * `workshop` - Whole-workshop survey totals for the busbar pipeline
///
/// # Returns
///
/// A fresh [`WorkshopResult`]; identical inputs give identical results.
pub fn calculate_workshop_results(
    equipment: &[CalculatedEquipment],
    workshop: &WorkshopTotals,
) -> WorkshopResult {
    let totals = GroupTotals::from_equipment(equipment);
    debug!(
        equipment = equipment.len(),
        total_power = totals.total_power,
        total_utilization_power = totals.total_utilization_power,
        total_squared_power = totals.total_squared_power,
        total_reactive_power = totals.total_reactive_power,
        "summed equipment values"
    );
    let voltage = representative_voltage(equipment);

    WorkshopResult {
        group: GroupLoad::calculate(&totals, voltage, &GROUP_TABLE),
        busbar: BusbarLoad::calculate(workshop, voltage, &BUSBAR_TABLE),
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::equipment::{EquipmentRecord, calculate_equipment_values};

    fn calculated(quantity: i64, rated_power: i64, utilization_rate: f64) -> CalculatedEquipment {
        calculate_equipment_values(EquipmentRecord {
            name: "Unit".to_string(),
            efficiency_factor: 0.9,
            load_power_factor: 0.8,
            load_voltage: 380.0,
            quantity,
            rated_power,
            utilization_rate,
            reactive_power_factor: 0.75,
        })
    }

    #[test]
    fn totals_sum_every_record() {
        let equipment = vec![calculated(2, 500, 0.6), calculated(1, 100, 0.2)];
        let totals = GroupTotals::from_equipment(&equipment);
        assert_eq!(totals.total_power, 1100.0);
        assert_relative_eq!(totals.total_utilization_power, 620.0);
        assert_eq!(totals.total_squared_power, 510_000.0);
        assert_relative_eq!(totals.total_reactive_power, 465.0);
    }

    #[test]
    fn group_single_record() {
        let equipment = vec![calculated(2, 500, 0.6)];
        let totals = GroupTotals::from_equipment(&equipment);
        let load = GroupLoad::calculate(&totals, Some(380.0), &GROUP_TABLE);

        assert_relative_eq!(load.group_utilization_rate, 0.6);
        assert_eq!(load.effective_equipment_count, 2.0);
        assert_eq!(load.estimated_active_power_factor, 1.33);
        assert_relative_eq!(load.estimated_active_load, 798.0, epsilon = 1e-9);
        assert_eq!(load.estimated_reactive_load, 450.0);
        assert_relative_eq!(load.full_power, 916.1354, epsilon = 1e-3);
        assert_relative_eq!(load.estimated_group_current, 798.0 / 380.0, epsilon = 1e-9);
    }

    #[test]
    fn group_effective_count_is_ceiled() {
        // (1000 + 300)² / (500000 + 3·100²) = 1690000 / 530000 ≈ 3.19
        let equipment = vec![calculated(2, 500, 0.6), calculated(3, 100, 0.6)];
        let totals = GroupTotals::from_equipment(&equipment);
        let load = GroupLoad::calculate(&totals, Some(380.0), &GROUP_TABLE);
        assert_eq!(load.effective_equipment_count, 4.0);
        assert_eq!(load.estimated_active_power_factor, 1.08);
    }

    #[test]
    fn group_reactive_load_is_not_scaled() {
        let equipment = vec![calculated(1, 1000, 0.1)];
        let totals = GroupTotals::from_equipment(&equipment);
        let load = GroupLoad::calculate(&totals, Some(380.0), &GROUP_TABLE);
        assert_eq!(load.estimated_active_power_factor, 8.0);
        assert_eq!(load.estimated_reactive_load, totals.total_reactive_power);
    }

    #[test]
    fn group_empty_totals_are_zero() {
        let load = GroupLoad::calculate(&GroupTotals::default(), None, &GROUP_TABLE);
        assert_eq!(load.group_utilization_rate, 0.0);
        assert_eq!(load.effective_equipment_count, 0.0);
        assert_eq!(load.estimated_active_power_factor, 1.25);
        assert_eq!(load.estimated_active_load, 0.0);
        assert_eq!(load.full_power, 0.0);
        assert_eq!(load.estimated_group_current, 0.0);
    }

    #[test]
    fn busbar_reference_survey() {
        let load = BusbarLoad::calculate(&WorkshopTotals::REFERENCE, Some(380.0), &BUSBAR_TABLE);
        // 752 / 2330 ≈ 0.3227 → 0.3; 2330² / 96388 ≈ 56.3 → 56
        assert_eq!(load.utilization_rate_all, 0.3);
        assert_eq!(load.effective_equipment_count_all, 56);
        assert_eq!(load.estimated_active_power_factor_all, 0.7);
        assert_relative_eq!(load.estimated_active_load_tires, 526.4, epsilon = 1e-9);
        assert_relative_eq!(load.estimated_reactive_load_tires, 459.9, epsilon = 1e-9);
        assert_relative_eq!(load.full_power_tires, 699.0028, epsilon = 1e-3);
        assert_relative_eq!(load.estimated_group_current_tires, 526.4 / 380.0, epsilon = 1e-9);
    }

    #[test]
    fn busbar_effective_count_is_floored() {
        // 100² / 1100 ≈ 9.09 → 9, rate 0.5 → 0.90
        let totals = WorkshopTotals {
            total_power: 100.0,
            total_utilization_power: 50.0,
            total_reactive_power: 40.0,
            total_squared_power: 1100.0,
        };
        let load = BusbarLoad::calculate(&totals, None, &BUSBAR_TABLE);
        assert_eq!(load.effective_equipment_count_all, 9);
        assert_eq!(load.estimated_active_power_factor_all, 0.90);
        assert_relative_eq!(load.estimated_reactive_load_tires, 36.0, epsilon = 1e-9);
        assert_eq!(load.estimated_group_current_tires, 0.0);
    }

    #[test]
    fn busbar_zero_totals_do_not_fault() {
        let totals = WorkshopTotals {
            total_power: 0.0,
            total_utilization_power: 0.0,
            total_reactive_power: 0.0,
            total_squared_power: 0.0,
        };
        let load = BusbarLoad::calculate(&totals, Some(380.0), &BUSBAR_TABLE);
        assert_eq!(load.utilization_rate_all, 0.0);
        assert_eq!(load.effective_equipment_count_all, 0);
        assert_eq!(load.estimated_active_power_factor_all, 0.7);
        assert_eq!(load.full_power_tires, 0.0);
    }

    #[test]
    fn representative_voltage_uses_first_record() {
        let mut second = calculated(1, 10, 0.5);
        second.record.load_voltage = 220.0;
        let equipment = vec![calculated(1, 10, 0.5), second];
        assert_eq!(representative_voltage(&equipment), Some(380.0));
        assert_eq!(representative_voltage(&[]), None);

        let mut zero = calculated(1, 10, 0.5);
        zero.record.load_voltage = 0.0;
        assert_eq!(representative_voltage(&[zero]), None);
    }

    #[test]
    fn empty_list_yields_zero_group_and_current() {
        let result = calculate_workshop_results(&[], &WorkshopTotals::REFERENCE);
        assert_eq!(result.group.group_utilization_rate, 0.0);
        assert_eq!(result.group.effective_equipment_count, 0.0);
        assert_eq!(result.group.estimated_group_current, 0.0);
        assert_eq!(result.busbar.estimated_group_current_tires, 0.0);
        assert_eq!(result.busbar.effective_equipment_count_all, 56);
    }

    #[test]
    fn result_serializes_flat_camel_case() {
        let result =
            calculate_workshop_results(&[calculated(2, 500, 0.6)], &WorkshopTotals::REFERENCE);
        let value = serde_json::to_value(result).expect("result should serialize");
        let object = value.as_object().expect("result should be an object");
        assert_eq!(object.len(), 14);
        assert_eq!(value["estimatedActivePowerFactor"], 1.33);
        assert_eq!(value["effectiveEquipmentCountAll"], 56);
        assert_eq!(value["utilizationRateAll"], 0.3);
    }

    #[test]
    fn workshop_totals_accept_both_spellings() {
        let camel: WorkshopTotals =
            serde_json::from_str(r#"{"totalPower": 10.0}"#).expect("camelCase should decode");
        let snake: WorkshopTotals =
            toml::from_str("total_power = 10.0").expect("snake_case should decode");
        assert_eq!(camel.total_power, 10.0);
        assert_eq!(snake.total_power, 10.0);
        assert_eq!(snake.total_squared_power, 96388.0);
    }
}
