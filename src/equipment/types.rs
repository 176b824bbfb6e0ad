//! Equipment input records and the values derived from them.

use serde::{Deserialize, Serialize};

/// One class of identical electrical loads in a workshop.
///
/// Field names on the wire use camelCase. Missing numeric fields decode as
/// zero; no range validation is applied, so out-of-range values flow through
/// the arithmetic unchanged.
///
/// # Examples
///
/// ```
/// use workshop_load::equipment::EquipmentRecord;
///
/// let lathe = EquipmentRecord {
///     name: "Lathe".to_string(),
///     efficiency_factor: 0.92,
///     load_power_factor: 0.9,
///     load_voltage: 0.38,
///     quantity: 4,
///     rated_power: 20,
///     utilization_rate: 0.15,
///     reactive_power_factor: 1.33,
/// };
/// assert_eq!(lathe.quantity, 4);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EquipmentRecord {
    /// Display name, informational only.
    pub name: String,
    /// Efficiency factor ηн (0.0 to 1.0).
    pub efficiency_factor: f64,
    /// Load power factor cosφ (0.0 to 1.0).
    pub load_power_factor: f64,
    /// Load voltage Uн.
    pub load_voltage: f64,
    /// Number of identical units n.
    pub quantity: i64,
    /// Rated power per unit Pн.
    pub rated_power: i64,
    /// Utilization rate Кв (0.0 to 1.0).
    pub utilization_rate: f64,
    /// Reactive-power factor tgφ.
    pub reactive_power_factor: f64,
}

/// Intermediate quantities computed from one [`EquipmentRecord`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentDerived {
    /// n · Pн
    pub power_total: f64,
    /// n · Pн · Кв
    pub utilization_power: f64,
    /// n · Pн · Кв · tgφ
    pub reactive_power: f64,
    /// n · Pн²
    pub squared_power: f64,
    /// Design current Iр, truncated to one decimal place.
    pub current: f64,
}

/// An equipment record together with its derived values.
///
/// Serializes as the record's own fields plus a `calculatedValues` object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatedEquipment {
    /// Input record as received.
    #[serde(flatten)]
    pub record: EquipmentRecord,
    /// Values derived from `record`.
    pub calculated_values: EquipmentDerived,
}
