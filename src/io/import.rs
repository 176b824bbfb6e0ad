//! Loading equipment lists from JSON or CSV files.

use std::fs;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::equipment::EquipmentRecord;
use crate::error::InputError;
use crate::load::WorkshopTotals;

/// Calculation request: an equipment list plus optional survey totals.
///
/// This is the body accepted by the HTTP API and one of the JSON layouts
/// accepted from files.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationRequest {
    /// Equipment records in input order.
    #[serde(default)]
    pub equipment_list: Vec<EquipmentRecord>,
    /// Overrides the configured whole-workshop totals when present.
    #[serde(default)]
    pub workshop_totals: Option<WorkshopTotals>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonInput {
    List(Vec<EquipmentRecord>),
    Request(CalculationRequest),
}

/// Parses a JSON equipment list: either a bare array of records or a
/// [`CalculationRequest`] object.
///
/// # Errors
///
/// Returns [`InputError::Json`] if the document matches neither layout.
pub fn parse_json(s: &str) -> Result<CalculationRequest, InputError> {
    let input: JsonInput = serde_json::from_str(s)?;
    Ok(match input {
        JsonInput::List(equipment_list) => CalculationRequest {
            equipment_list,
            workshop_totals: None,
        },
        JsonInput::Request(request) => request,
    })
}

/// Reads equipment records from CSV with a camelCase header row.
///
/// Blank cells decode as zero.
///
/// # Errors
///
/// Returns [`InputError::Csv`] on malformed rows or headers.
pub fn read_csv(reader: impl Read) -> Result<Vec<EquipmentRecord>, InputError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();
    for row in rdr.deserialize::<CsvRow>() {
        records.push(row?.into());
    }
    Ok(records)
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CsvRow {
    #[serde(default)]
    name: String,
    #[serde(default)]
    efficiency_factor: Option<f64>,
    #[serde(default)]
    load_power_factor: Option<f64>,
    #[serde(default)]
    load_voltage: Option<f64>,
    #[serde(default)]
    quantity: Option<i64>,
    #[serde(default)]
    rated_power: Option<i64>,
    #[serde(default)]
    utilization_rate: Option<f64>,
    #[serde(default)]
    reactive_power_factor: Option<f64>,
}

impl From<CsvRow> for EquipmentRecord {
    fn from(row: CsvRow) -> Self {
        Self {
            name: row.name,
            efficiency_factor: row.efficiency_factor.unwrap_or_default(),
            load_power_factor: row.load_power_factor.unwrap_or_default(),
            load_voltage: row.load_voltage.unwrap_or_default(),
            quantity: row.quantity.unwrap_or_default(),
            rated_power: row.rated_power.unwrap_or_default(),
            utilization_rate: row.utilization_rate.unwrap_or_default(),
            reactive_power_factor: row.reactive_power_factor.unwrap_or_default(),
        }
    }
}

/// Loads an equipment file, choosing the format by extension.
///
/// # Arguments
///
/// * `path` - A `.json` or `.csv` file
///
/// # Errors
///
/// Returns an [`InputError`] if the file cannot be read, is malformed, or has
/// an unsupported extension.
pub fn load_equipment_file(path: &Path) -> Result<CalculationRequest, InputError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    let read = || {
        fs::read_to_string(path).map_err(|source| InputError::Io {
            path: path.to_path_buf(),
            source,
        })
    };

    let request = match extension.as_deref() {
        Some("json") => parse_json(&read()?)?,
        Some("csv") => CalculationRequest {
            equipment_list: read_csv(read()?.as_bytes())?,
            workshop_totals: None,
        },
        _ => return Err(InputError::UnsupportedFormat(path.to_path_buf())),
    };

    info!(
        path = %path.display(),
        records = request.equipment_list.len(),
        "loaded equipment list"
    );
    Ok(request)
}

/// Whether every numeric field of the record is non-zero.
///
/// Mirrors the form check that skips partially filled rows.
pub fn is_complete(record: &EquipmentRecord) -> bool {
    record.efficiency_factor != 0.0
        && record.load_power_factor != 0.0
        && record.load_voltage != 0.0
        && record.quantity != 0
        && record.rated_power != 0
        && record.utilization_rate != 0.0
        && record.reactive_power_factor != 0.0
}
