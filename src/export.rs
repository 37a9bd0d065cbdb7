//! CSV export of measurement records

use crate::error::Result;
use crate::types::MeasurementRecord;
use std::path::Path;

/// Load measurement records from a JSON results file
pub fn load_records(path: &Path) -> Result<Vec<MeasurementRecord>> {
    let content = std::fs::read_to_string(path)?;
    let records: Vec<MeasurementRecord> = serde_json::from_str(&content)?;
    Ok(records)
}

/// Append a record to a JSON results file, creating it if missing
pub fn append_record(path: &Path, record: &MeasurementRecord) -> Result<()> {
    let mut records = if path.exists() {
        load_records(path)?
    } else {
        Vec::new()
    };
    records.push(record.clone());

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, serde_json::to_string_pretty(&records)?)?;
    Ok(())
}

/// Export measurement records to a CSV file
pub fn export_to_csv(records: &[MeasurementRecord], output: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(output)?;

    writer.write_record([
        "measured_at",
        "truck_type",
        "reference_height_m",
        "confidence",
        "meters_per_pixel",
        "width_m",
        "height_m",
    ])?;

    for record in records {
        writer.write_record([
            record.measured_at.to_rfc3339(),
            record.truck_type.clone(),
            format!("{:.2}", record.reference_height_m),
            format!("{:.4}", record.confidence),
            format!("{:.6}", record.meters_per_pixel),
            format!("{:.3}", record.width_m),
            format!("{:.3}", record.height_m),
        ])?;
    }

    writer.flush()?;
    Ok(())
}
