use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use activity_chart_core::cli::{print_chart_report, print_summary_report};
use activity_chart_core::{
    load_config, parse_samples_json, ActivityView, ChartContext, DistanceUnit, Metrics,
    SpeedUnit, Sport, UnitHints, ZoomRange,
};

#[derive(Parser, Debug)]
#[command(name = "activity-report", about = "Print chart axes and summary for an activity")]
struct Args {
    /// JSON-fil med samples (array)
    samples: PathBuf,

    /// Sport, f.eks. "Run" eller "Ride"
    #[arg(long, default_value = "")]
    sport: String,

    /// Chart-konfig (JSON). Mangler filen brukes default.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Deklarert fartsenhet: mps | kmh
    #[arg(long)]
    speed_unit: Option<String>,

    /// Deklarert distanseenhet: m | km
    #[arg(long)]
    distance_unit: Option<String>,

    /// Zoom i tid (sekunder): START END
    #[arg(long, num_args = 2, value_names = ["START", "END"], conflicts_with = "zoom_distance")]
    zoom_time: Option<Vec<f64>>,

    /// Zoom i distanse (meter): START END
    #[arg(long, num_args = 2, value_names = ["START", "END"])]
    zoom_distance: Option<Vec<f64>>,

    /// Skriv prometheus-tellere til slutt
    #[arg(long)]
    metrics: bool,
}

fn parse_speed_unit(s: &str) -> Result<SpeedUnit> {
    match s.to_lowercase().as_str() {
        "mps" | "m/s" => Ok(SpeedUnit::MetersPerSecond),
        "kmh" | "km/h" => Ok(SpeedUnit::KilometersPerHour),
        other => anyhow::bail!("unknown speed unit: {other}"),
    }
}

fn parse_distance_unit(s: &str) -> Result<DistanceUnit> {
    match s.to_lowercase().as_str() {
        "m" => Ok(DistanceUnit::Meters),
        "km" => Ok(DistanceUnit::Kilometers),
        other => anyhow::bail!("unknown distance unit: {other}"),
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let raw = fs::read_to_string(&args.samples)
        .with_context(|| format!("reading {}", args.samples.display()))?;
    let samples = parse_samples_json(&raw).context("parsing samples")?;
    info!("loaded {} samples from {}", samples.len(), args.samples.display());

    let config = match &args.config {
        Some(p) => load_config(p).context("loading chart config")?,
        None => Default::default(),
    };
    let units = UnitHints {
        speed: args.speed_unit.as_deref().map(parse_speed_unit).transpose()?,
        distance: args.distance_unit.as_deref().map(parse_distance_unit).transpose()?,
    };
    let telemetry = Metrics::new()?;

    let ctx = ChartContext::new(Sport::parse(&args.sport))
        .with_units(units)
        .with_config(&config)
        .with_telemetry(&telemetry);
    let view = ActivityView::prepare(&samples, &ctx);

    print_chart_report(&view);
    print_summary_report("Summary", &view.summary);

    let zoom = match (&args.zoom_time, &args.zoom_distance) {
        (Some(t), _) => Some(ZoomRange::time(t[0], t[1])?),
        (_, Some(d)) => Some(ZoomRange::distance(d[0], d[1])?),
        _ => None,
    };
    if let Some(z) = view.effective_zoom(zoom.as_ref()) {
        let zs = view.summary_for(Some(&z), Some(&telemetry));
        print_summary_report("Zoom", &zs);
    } else if zoom.is_some() {
        info!("zoom covers the whole activity, showing full summary only");
    }

    if args.metrics {
        print!("{}", telemetry.render()?);
    }
    Ok(())
}
