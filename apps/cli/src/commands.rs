use crate::args::Command;
use anyhow::{Context, Result, anyhow};
use locus::domain::config::LocusConfig;
use locus::features::{geodesy, grid};
use locus::{GeoPoint, Resolver, detect_format};
use serde::Serialize;
use serde_json::json;
use std::io::{self, Read, Write};
use std::path::Path;
use std::process::ExitCode;
use tracing::info;

pub(crate) async fn run(command: Command, config: &LocusConfig) -> Result<ExitCode> {
    match command {
        Command::Resolve { input, key } => {
            let resolver = Resolver::from_config(config)?;
            let point = resolver.resolve(&input, key.as_deref()).await;
            emit(&json!({ "input": input, "format": detect_format(&input), "point": point }))?;
            Ok(status(point.is_some()))
        },
        Command::Detect { input } => {
            let format = detect_format(&input);
            emit(&json!({
                "input": input,
                "format": format,
                "label": format.map(|f| f.label()),
                "remote": format.is_some_and(|f| f.is_remote()),
            }))?;
            Ok(ExitCode::SUCCESS)
        },
        Command::Batch { file, key } => {
            let text = read_input(&file)?;
            let resolver = Resolver::from_config(config)?;
            let report = resolver.resolve_batch(text.lines(), key.as_deref()).await;
            info!(resolved = report.resolved, failed = report.failed, "Batch complete");
            emit(&report)?;
            Ok(status(report.failed == 0))
        },
        Command::Grid { reference } => {
            let parsed: grid::GridReference = reference.parse().context("Invalid grid reference")?;
            let (easting, northing) = parsed.easting_northing();
            let point = grid::osgb36_to_wgs84(easting, northing);
            emit(&json!({
                "reference": parsed.to_string(),
                "easting": easting,
                "northing": northing,
                "precision_m": parsed.precision_metres(),
                "point": point,
            }))?;
            Ok(ExitCode::SUCCESS)
        },
        Command::ToGrid { lat, lng, digits } => {
            let reference = grid::wgs84_to_grid(point(lat, lng)?, digits)?;
            emit(&json!({ "reference": reference.to_string(), "precision_m": reference.precision_metres() }))?;
            Ok(ExitCode::SUCCESS)
        },
        Command::Destination { lat, lng, bearing, distance_m } => {
            emit(&geodesy::destination_point(point(lat, lng)?, bearing, distance_m))?;
            Ok(ExitCode::SUCCESS)
        },
        Command::Bearing { lat1, lng1, lat2, lng2 } => {
            let bearing = geodesy::bearing_to(point(lat1, lng1)?, point(lat2, lng2)?);
            emit(&json!({ "bearing_deg": bearing }))?;
            Ok(ExitCode::SUCCESS)
        },
        Command::Distance { lat1, lng1, lat2, lng2 } => {
            let distance = geodesy::haversine_distance(point(lat1, lng1)?, point(lat2, lng2)?);
            emit(&json!({ "distance_m": distance }))?;
            Ok(ExitCode::SUCCESS)
        },
        Command::Sector { lat, lng, azimuth, radius_m, beamwidth, steps } => {
            let outline = geodesy::sector_outline(point(lat, lng)?, azimuth, radius_m, beamwidth, steps);
            emit(&outline)?;
            Ok(ExitCode::SUCCESS)
        },
    }
}

const fn status(ok: bool) -> ExitCode {
    if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}

fn point(lat: f64, lng: f64) -> Result<GeoPoint> {
    GeoPoint::new(lat, lng).ok_or_else(|| anyhow!("coordinate out of range: {lat}, {lng}"))
}

fn read_input(file: &Path) -> Result<String> {
    if file.as_os_str() == "-" {
        let mut text = String::new();
        io::stdin().lock().read_to_string(&mut text).context("Reading stdin")?;
        Ok(text)
    } else {
        std::fs::read_to_string(file).with_context(|| format!("Reading {}", file.display()))
    }
}

fn emit(value: &impl Serialize) -> Result<()> {
    let mut out = io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, value)?;
    writeln!(out)?;
    Ok(())
}
