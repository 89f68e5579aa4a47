//! Akser og serier for chart-flaten.
//!
//! Én akse per metrikk med data, i fast prioritet (effekt, puls, fart/tempo,
//! kadens, distanse, høyde). Aksene veksler venstre/høyre og stables med fast
//! offset, slik at layouten er lik mellom hver rendring.

use chrono::{DateTime, Utc};
use log::debug;

use crate::config::ChartConfig;
use crate::metrics;
use crate::models::{Axis, AxisSide, ChartData, ChartOutcome, Series};
use crate::normalize::{MetricSeries, NormalizedActivity};
use crate::smoothing::median3;
use crate::types::{Metric, Sport};
use crate::units::{mps_to_kmh, speed_to_pace};

struct Display {
    label: &'static str,
    unit: &'static str,
    reversed: bool,
}

fn display_for(metric: Metric, sport: &Sport) -> Display {
    match metric {
        Metric::Power => Display { label: "Power", unit: "W", reversed: false },
        Metric::HeartRate => Display { label: "Heart rate", unit: "bpm", reversed: false },
        Metric::Speed if sport.is_running() => {
            Display { label: "Pace", unit: "min/km", reversed: true }
        }
        Metric::Speed => Display { label: "Speed", unit: "km/h", reversed: false },
        Metric::Cadence => Display { label: "Cadence", unit: "rpm", reversed: false },
        Metric::Distance => Display { label: "Distance", unit: "km", reversed: false },
        Metric::Altitude => Display { label: "Altitude", unit: "m", reversed: false },
    }
}

/// Kanonisk verdi -> visningsverdi.
pub fn display_value(metric: Metric, sport: &Sport, v: f64) -> f64 {
    match metric {
        Metric::Speed if sport.is_running() => speed_to_pace(v),
        Metric::Speed => mps_to_kmh(v),
        Metric::Distance => v / 1000.0,
        _ => v,
    }
}

fn display_points(
    series: &MetricSeries,
    sport: &Sport,
    config: &ChartConfig,
) -> Vec<(f64, f64)> {
    let pts: Vec<(f64, f64)> = series
        .points
        .iter()
        .map(|&(t, v)| (t, display_value(series.metric, sport, v)))
        .collect();
    if series.metric == Metric::Altitude && config.smooth_altitude {
        median3(&pts)
    } else {
        pts
    }
}

/// Domene fra egen min/maks med padding, gulv og klipping.
pub fn axis_domain(
    metric: Metric,
    sport: &Sport,
    values: &[f64],
    config: &ChartConfig,
) -> (f64, f64) {
    let pace = metric == Metric::Speed && sport.is_running();
    // 0:00-tempo (stillstand) skal ikke dra aksen
    let observed: Vec<f64> = if pace {
        values.iter().copied().filter(|v| *v > 0.0).collect()
    } else {
        values.to_vec()
    };

    let (lo, hi) = match (metrics::min(observed.iter().copied()), metrics::max(observed)) {
        (Some(lo), Some(hi)) => (lo, hi),
        _ => return (0.0, 1.0),
    };

    let span = hi - lo;
    let pad = if span > 0.0 {
        span * config.axis_padding
    } else {
        (hi.abs() * config.axis_padding).max(1.0)
    };

    let mut min = lo - pad;
    let mut max = hi + pad;
    if metric.is_non_negative() {
        min = min.max(0.0);
    }
    if metric == Metric::Power {
        max = max.max(config.power_axis_floor);
    }
    // taket gjelder bare når noe av tempoet faktisk ligger under det
    if pace && lo <= config.pace_axis_cap {
        max = max.min(config.pace_axis_cap);
        if min >= max {
            min = (max - 1.0).max(0.0);
        }
    }
    (min, max)
}

pub fn build_chart(
    activity: &NormalizedActivity,
    sport: &Sport,
    config: &ChartConfig,
    start_time: Option<DateTime<Utc>>,
) -> ChartOutcome {
    if activity.series.is_empty() {
        debug!("no metric series, chart has no data");
        return ChartOutcome::NoData;
    }

    let mut axes = Vec::with_capacity(activity.series.len());
    let mut series = Vec::with_capacity(activity.series.len());

    // activity.series er allerede i prioritet
    for (i, ms) in activity.series.iter().enumerate() {
        let disp = display_for(ms.metric, sport);
        let points = display_points(ms, sport, config);
        let values: Vec<f64> = points.iter().map(|p| p.1).collect();
        let (min, max) = axis_domain(ms.metric, sport, &values, config);
        let color = config.colors.for_metric(ms.metric).to_string();

        axes.push(Axis {
            metric: ms.metric,
            label: disp.label.to_string(),
            unit: disp.unit.to_string(),
            min,
            max,
            reversed: disp.reversed,
            side: if i % 2 == 0 { AxisSide::Left } else { AxisSide::Right },
            offset: (i / 2) as u32 * config.axis_width,
            color: color.clone(),
        });
        series.push(Series {
            metric: ms.metric,
            name: disp.label.to_string(),
            unit_suffix: format!(" {}", disp.unit),
            color,
            axis_index: i,
            points,
        });
    }

    debug!("built {} axes", axes.len());
    ChartOutcome::Ready(ChartData { axes, series, start_time })
}
