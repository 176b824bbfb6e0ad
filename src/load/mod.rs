//! Electrical load aggregation: reference tables, coefficient lookup, and
//! the group and busbar pipelines.

pub mod aggregate;
pub mod report;
pub mod resolver;
pub mod rounding;
pub mod tables;

pub use aggregate::{
    BusbarLoad, GroupLoad, GroupTotals, WorkshopResult, WorkshopTotals,
    calculate_workshop_results,
};
pub use resolver::{resolve_exact, resolve_range};

use serde::Serialize;

use crate::equipment::{CalculatedEquipment, EquipmentRecord, calculate_equipment_values};

/// Per-equipment values and the workshop result for one request.
#[derive(Debug, Clone, Serialize)]
pub struct WorkshopEvaluation {
    /// Equipment with derived values, in input order.
    pub equipment: Vec<CalculatedEquipment>,
    /// Aggregated design figures.
    pub result: WorkshopResult,
}

/// Calculates every record, then aggregates them into a [`WorkshopResult`].
pub fn evaluate(records: Vec<EquipmentRecord>, workshop: &WorkshopTotals) -> WorkshopEvaluation {
    let equipment: Vec<CalculatedEquipment> =
        records.into_iter().map(calculate_equipment_values).collect();
    let result = calculate_workshop_results(&equipment, workshop);
    WorkshopEvaluation { equipment, result }
}
