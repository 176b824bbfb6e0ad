//! Electrical equipment records and their per-unit derived quantities.

pub mod types;
/// Per-equipment power and current calculation.
pub mod values;

pub use types::{CalculatedEquipment, EquipmentDerived, EquipmentRecord};
pub use values::calculate_equipment_values;
