//! Output formatting module

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::types::MeasurementRecord;

pub fn output_record(output_format: OutputFormat, record: &MeasurementRecord) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(record)?;
        println!("{}", content);
    } else {
        println!("\nMeasurement Result");
        println!("==================");
        println!("Truck type:       {}", record.truck_type);
        println!("Reference height: {:.2} m", record.reference_height_m);
        println!("Confidence:       {:.0}%", record.confidence * 100.0);
        println!("Scale:            {:.6} m/px", record.meters_per_pixel);
        println!("Width:            {:.2} m", record.width_m);
        println!("Height:           {:.2} m", record.height_m);
    }

    Ok(())
}

pub fn output_truck_types(
    output_format: OutputFormat,
    types: &std::collections::BTreeMap<String, f64>,
) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(types)?;
        println!("{}", content);
    } else {
        println!("\nSupported Truck Types");
        println!("=====================");
        for (label, height) in types {
            println!("{:<14} {:.2} m", label, height);
        }
    }

    Ok(())
}
