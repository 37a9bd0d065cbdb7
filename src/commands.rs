//! Command handlers

use crate::cli::{Cli, Commands, OutputFormat};
use crate::config::Config;
use crate::detector::{CommandDetector, Detector, JsonFileDetector};
use crate::error::{Error, Result};
use crate::export::{append_record, export_to_csv, load_records};
use crate::output::{output_record, output_truck_types};
use crate::pipeline::MeasurementPipeline;
use crate::scanner::{load_image, validate_image};
use crate::types::Region;
use log::info;
use std::path::{Path, PathBuf};

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let output_format = cli.format.unwrap_or(config.output_format);

    match &cli.command {
        Commands::Measure {
            image,
            region,
            detections,
            resize_scale,
            output,
        } => {
            let resize = resize_scale.unwrap_or(config.resize_scale);
            cmd_measure(
                &config,
                image,
                region.as_deref(),
                detections.as_deref(),
                resize,
                output.as_deref(),
                output_format,
            )
        }

        Commands::Types => {
            let pipeline = MeasurementPipeline::new(config.classifier.clone());
            output_truck_types(output_format, pipeline.classifier().truck_types())
        }

        Commands::Export { results, output } => cmd_export(results, output.as_deref()),

        Commands::Config {
            show,
            set_detector_cmd,
            set_min_conf,
            set_output,
            set_resize_scale,
            reset,
        } => cmd_config(
            config,
            *show,
            set_detector_cmd.clone(),
            *set_min_conf,
            *set_output,
            *set_resize_scale,
            *reset,
        ),
    }
}

#[allow(clippy::too_many_arguments)]
fn cmd_measure(
    config: &Config,
    image: &Path,
    region: Option<&str>,
    detections: Option<&Path>,
    resize_scale: f64,
    output: Option<&Path>,
    output_format: OutputFormat,
) -> Result<()> {
    validate_image(image)?;

    let region = region.map(parse_region).transpose()?;

    // Sidecar detections are already in some fixed frame, so the image is
    // never resized on that path.
    let (detector, image_path): (Box<dyn Detector>, PathBuf) = if let Some(path) = detections {
        (
            Box::new(JsonFileDetector::new(path, config.detector_min_confidence)),
            image.to_path_buf(),
        )
    } else {
        let command = config.detector_command.as_deref().ok_or_else(|| {
            Error::Config(
                "no detector configured; set one with `config --set-detector-cmd` \
                 or pass --detections"
                    .to_string(),
            )
        })?;
        let image_path = prepare_image(image, resize_scale)?;
        (
            Box::new(CommandDetector::new(command, config.detector_min_confidence)),
            image_path,
        )
    };

    let pipeline = MeasurementPipeline::new(config.classifier.clone());
    let record = pipeline.run(detector.as_ref(), &image_path, region)?;

    output_record(output_format, &record)?;

    if let Some(path) = output {
        append_record(path, &record)?;
        info!("appended record to {}", path.display());
    }

    Ok(())
}

/// Resize the image to the detection frame if needed, returning the path
/// the detector should see.
fn prepare_image(image: &Path, resize_scale: f64) -> Result<PathBuf> {
    if (resize_scale - 1.0).abs() < f64::EPSILON {
        return Ok(image.to_path_buf());
    }

    let resized = load_image(image, resize_scale)?;
    let out_path = std::env::temp_dir().join(format!(
        "truck_measure_resized_{}.png",
        std::process::id()
    ));
    resized.save(&out_path)?;
    info!(
        "resized by {} for detection: {}",
        resize_scale,
        out_path.display()
    );
    Ok(out_path)
}

/// Parse a region given as "x,y,w,h"
fn parse_region(s: &str) -> Result<Region> {
    let parts: Vec<f64> = s
        .split(',')
        .map(|p| p.trim().parse::<f64>())
        .collect::<std::result::Result<_, _>>()
        .map_err(|e| Error::Config(format!("invalid region '{}': {}", s, e)))?;

    if parts.len() != 4 {
        return Err(Error::Config(format!(
            "region must be 'x,y,w,h', got '{}'",
            s
        )));
    }

    Ok(Region::new(parts[0], parts[1], parts[2], parts[3]))
}

fn cmd_export(results: &Path, output: Option<&Path>) -> Result<()> {
    if !results.exists() {
        return Err(Error::FileNotFound(results.display().to_string()));
    }

    let records = load_records(results)?;
    let output = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| results.with_extension("csv"));

    export_to_csv(&records, &output)?;
    println!("Exported {} record(s) to {}", records.len(), output.display());
    Ok(())
}

fn cmd_config(
    mut config: Config,
    show: bool,
    set_detector_cmd: Option<String>,
    set_min_conf: Option<f64>,
    set_output: Option<OutputFormat>,
    set_resize_scale: Option<f64>,
    reset: bool,
) -> Result<()> {
    if reset {
        config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        return Ok(());
    }

    let mut changed = false;

    if let Some(cmd) = set_detector_cmd {
        config.detector_command = Some(cmd);
        changed = true;
    }
    if let Some(conf) = set_min_conf {
        if !(0.0..=1.0).contains(&conf) {
            return Err(Error::Config(format!(
                "min confidence must be in [0, 1], got {}",
                conf
            )));
        }
        config.detector_min_confidence = conf;
        changed = true;
    }
    if let Some(format) = set_output {
        config.output_format = format;
        changed = true;
    }
    if let Some(scale) = set_resize_scale {
        if scale <= 0.0 {
            return Err(Error::Config(format!(
                "resize scale must be positive, got {}",
                scale
            )));
        }
        config.resize_scale = scale;
        changed = true;
    }

    if changed {
        config.save()?;
        println!("Configuration updated");
    }

    if show || !changed {
        println!("{}", config);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_region() {
        let region = parse_region("10, 20, 100, 50").unwrap();
        assert_eq!(region.x, 10.0);
        assert_eq!(region.y, 20.0);
        assert_eq!(region.width, 100.0);
        assert_eq!(region.height, 50.0);
    }

    #[test]
    fn test_parse_region_rejects_garbage() {
        assert!(parse_region("10,20,100").is_err());
        assert!(parse_region("10,20,abc,50").is_err());
        assert!(parse_region("").is_err());
    }
}
