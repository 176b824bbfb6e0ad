//! CSV export of per-equipment derived values.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::equipment::CalculatedEquipment;

/// Column header for the per-equipment CSV export.
const HEADER: &str = "name,power_total,utilization_power,reactive_power,squared_power,current";

/// Exports calculated equipment to a CSV file at the given path.
///
/// Writes a header row followed by one row per equipment in input order.
/// Produces deterministic output for identical inputs.
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_csv(equipment: &[CalculatedEquipment], path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let buf = io::BufWriter::new(file);
    write_csv(equipment, buf)
}

/// Writes calculated equipment as CSV to any writer.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_csv(equipment: &[CalculatedEquipment], writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    wtr.write_record(HEADER.split(','))?;

    for e in equipment {
        let v = &e.calculated_values;
        wtr.write_record(&[
            e.record.name.clone(),
            format!("{:.4}", v.power_total),
            format!("{:.4}", v.utilization_power),
            format!("{:.4}", v.reactive_power),
            format!("{:.4}", v.squared_power),
            format!("{:.1}", v.current),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equipment::{EquipmentRecord, calculate_equipment_values};

    fn make_equipment(name: &str, quantity: i64) -> CalculatedEquipment {
        calculate_equipment_values(EquipmentRecord {
            name: name.to_string(),
            efficiency_factor: 0.9,
            load_power_factor: 0.8,
            load_voltage: 380.0,
            quantity,
            rated_power: 500,
            utilization_rate: 0.6,
            reactive_power_factor: 0.75,
        })
    }

    #[test]
    fn header_and_row_count() {
        let equipment: Vec<CalculatedEquipment> =
            (1..=3).map(|n| make_equipment("Pump", n)).collect();
        let mut buf = Vec::new();
        write_csv(&equipment, &mut buf).ok();
        let output = String::from_utf8(buf).ok();
        let lines: Vec<&str> = output.as_deref().unwrap_or("").lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], HEADER);
    }

    #[test]
    fn names_with_commas_are_quoted() {
        let equipment = vec![make_equipment("Pump, spare", 2)];
        let mut buf = Vec::new();
        write_csv(&equipment, &mut buf).ok();

        let mut rdr = csv::ReaderBuilder::new().from_reader(buf.as_slice());
        let row = rdr.records().next().and_then(Result::ok);
        let row = row.as_ref();
        assert_eq!(row.map(|r| &r[0]), Some("Pump, spare"));
        assert_eq!(row.map(|r| &r[1]), Some("1000.0000"));
        assert_eq!(row.map(|r| &r[4]), Some("500000.0000"));
    }

    #[test]
    fn deterministic_output() {
        let equipment = vec![make_equipment("A", 1), make_equipment("B", 2)];
        let mut buf1 = Vec::new();
        let mut buf2 = Vec::new();
        write_csv(&equipment, &mut buf1).ok();
        write_csv(&equipment, &mut buf2).ok();
        assert_eq!(buf1, buf2);
    }
}
