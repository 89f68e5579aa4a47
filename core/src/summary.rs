use log::debug;

use crate::metrics;
use crate::models::{RowKind, Summary, SummaryOutcome, SummaryRow};
use crate::normalize::{NormalizedActivity, NormalizedSample};
use crate::telemetry::{empty_zoom_total, summaries_total, Metrics};
use crate::types::{Metric, Sport, ZoomDomain, ZoomRange};
use crate::units::{format_duration, format_pace, mps_to_kmh, speed_to_pace};

const NA: &str = "N/A";
const NO_MAX: &str = "-";

/// Samples innenfor vinduet, inkluderende i begge ender.
pub fn filter_range(samples: &[NormalizedSample], zoom: &ZoomRange) -> Vec<NormalizedSample> {
    samples
        .iter()
        .filter(|s| match zoom.domain {
            ZoomDomain::Time => zoom.contains(s.t),
            ZoomDomain::Distance => s.distance_m.map_or(false, |d| zoom.contains(d)),
        })
        .copied()
        .collect()
}

/// Hele utstrekningen i gitt domene, eller `None` hvis domenet mangler data.
pub fn extent(samples: &[NormalizedSample], domain: ZoomDomain) -> Option<(f64, f64)> {
    match domain {
        ZoomDomain::Time => Some((samples.first()?.t, samples.last()?.t)),
        ZoomDomain::Distance => {
            let ds = samples.iter().filter_map(|s| s.distance_m);
            let lo = metrics::min(ds.clone())?;
            let hi = metrics::max(ds)?;
            Some((lo, hi))
        }
    }
}

/// Zoom som dekker hele aktiviteten nullstilles.
pub fn effective_zoom(samples: &[NormalizedSample], zoom: Option<&ZoomRange>) -> Option<ZoomRange> {
    let z = zoom?;
    match extent(samples, z.domain) {
        Some((lo, hi)) if z.start <= lo && z.end >= hi => None,
        _ => Some(*z),
    }
}

fn fmt_opt(v: Option<f64>, f: impl Fn(f64) -> String) -> String {
    v.map(f).unwrap_or_else(|| NA.to_string())
}

fn avg_max_row(
    kind: RowKind,
    name: &str,
    metric: Metric,
    samples: &[NormalizedSample],
    unit: &str,
    decimals: usize,
    to_display: impl Fn(f64) -> f64,
) -> SummaryRow {
    let vals = || samples.iter().filter_map(move |s| s.value(metric));
    let avg = metrics::mean(vals()).map(&to_display);
    let max = metrics::max(vals()).map(&to_display);
    SummaryRow {
        kind,
        name: name.to_string(),
        value: avg,
        max,
        value_display: fmt_opt(avg, |v| format!("{v:.decimals$} {unit}")),
        max_display: fmt_opt(max, |v| format!("{v:.decimals$} {unit}")),
    }
}

fn pace_row(samples: &[NormalizedSample]) -> SummaryRow {
    let speeds = || samples.iter().filter_map(|s| s.speed_mps);
    // snittempo fra snittfart; "maks" = raskeste tempo
    let avg = metrics::mean(speeds()).map(speed_to_pace);
    let best = metrics::max(speeds()).map(speed_to_pace);
    SummaryRow {
        kind: RowKind::Pace,
        name: "Pace".to_string(),
        value: avg,
        max: best,
        value_display: fmt_opt(avg, |p| format!("{} /km", format_pace(p))),
        max_display: fmt_opt(best, |p| format!("{} /km", format_pace(p))),
    }
}

fn total_row(kind: RowKind, name: &str, total: Option<f64>, fmt: impl Fn(f64) -> String) -> SummaryRow {
    SummaryRow {
        kind,
        name: name.to_string(),
        value: total,
        max: None,
        value_display: fmt_opt(total, fmt),
        max_display: NO_MAX.to_string(),
    }
}

/// Rader for metrikkene i `present`, beregnet over `samples`.
pub fn summary_rows(samples: &[NormalizedSample], present: &[Metric], sport: &Sport) -> Vec<SummaryRow> {
    let mut rows = Vec::new();
    for &metric in present {
        match metric {
            Metric::Power => {
                rows.push(avg_max_row(RowKind::Power, "Power", metric, samples, "W", 0, |v| v))
            }
            Metric::HeartRate => rows.push(avg_max_row(
                RowKind::HeartRate,
                "Heart rate",
                metric,
                samples,
                "bpm",
                0,
                |v| v,
            )),
            Metric::Speed if sport.is_running() => rows.push(pace_row(samples)),
            Metric::Speed => rows.push(avg_max_row(
                RowKind::Speed,
                "Speed",
                metric,
                samples,
                "km/h",
                1,
                mps_to_kmh,
            )),
            Metric::Cadence => {
                rows.push(avg_max_row(RowKind::Cadence, "Cadence", metric, samples, "rpm", 0, |v| v))
            }
            Metric::Distance => rows.push(total_row(
                RowKind::Distance,
                "Distance",
                metrics::distance_covered(samples).map(|m| m / 1000.0),
                |km| format!("{km:.2} km"),
            )),
            Metric::Altitude => rows.push(total_row(
                RowKind::ElevationGain,
                "Elevation gain",
                metrics::elevation_gain(samples),
                |m| format!("{m:.0} m"),
            )),
        }
    }
    if present.contains(&Metric::Power) {
        rows.push(total_row(
            RowKind::Energy,
            "Energy",
            metrics::energy_joules(samples).map(|j| j / 1000.0),
            |kj| format!("{kj:.1} kJ"),
        ));
    }
    rows.push(total_row(
        RowKind::Duration,
        "Duration",
        metrics::elapsed_seconds(samples),
        format_duration,
    ));
    rows
}

/// Sammendrag for hele aktiviteten, eller for et zoom-vindu.
pub fn summarize(
    activity: &NormalizedActivity,
    sport: &Sport,
    zoom: Option<&ZoomRange>,
    telemetry: Option<&Metrics>,
) -> SummaryOutcome {
    if let Some(m) = telemetry {
        summaries_total(m).inc();
    }
    if activity.is_empty() {
        return SummaryOutcome::NoData;
    }

    let present = activity.present_metrics();
    let Some(z) = effective_zoom(&activity.samples, zoom) else {
        return SummaryOutcome::Ready(Summary {
            zoom: None,
            sample_count: activity.samples.len(),
            rows: summary_rows(&activity.samples, &present, sport),
        });
    };

    let in_range = filter_range(&activity.samples, &z);
    if in_range.is_empty() {
        debug!("zoom {:?} [{}, {}] matched no samples", z.domain, z.start, z.end);
        if let Some(m) = telemetry {
            empty_zoom_total(m).inc();
        }
        return SummaryOutcome::NoDataInRange { zoom: z };
    }

    SummaryOutcome::Ready(Summary {
        zoom: Some(z),
        sample_count: in_range.len(),
        rows: summary_rows(&in_range, &present, sport),
    })
}
