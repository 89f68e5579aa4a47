use log::{debug, warn};
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::config::ChartConfig;
use crate::metrics;
use crate::telemetry::{units_inferred_total, Metrics};
use crate::types::{
    DistanceUnit, Metric, ResolvedUnits, Sample, SpeedUnit, UnitHints, UnitSource,
};
use crate::units::{distance_to_m, speed_to_mps};

/// Sample i kanoniske enheter: fart m/s, distanse meter.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NormalizedSample {
    pub t: f64,
    pub hr: Option<f64>,
    pub watts: Option<f64>,
    pub speed_mps: Option<f64>,
    pub cadence: Option<f64>,
    pub distance_m: Option<f64>,
    pub altitude: Option<f64>,
}

impl NormalizedSample {
    pub fn value(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::Power => self.watts,
            Metric::HeartRate => self.hr,
            Metric::Speed => self.speed_mps,
            Metric::Cadence => self.cadence,
            Metric::Distance => self.distance_m,
            Metric::Altitude => self.altitude,
        }
    }
}

/// (tid ms, verdi) for én metrikk, kun der metrikken finnes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricSeries {
    pub metric: Metric,
    pub points: Vec<(f64, f64)>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedActivity {
    pub samples: Vec<NormalizedSample>,
    pub units: ResolvedUnits,
    /// I fast prioritet (Metric::ALL), kun metrikker med minst én verdi.
    pub series: Vec<MetricSeries>,
}

impl NormalizedActivity {
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn has(&self, metric: Metric) -> bool {
        self.series.iter().any(|s| s.metric == metric)
    }

    pub fn series_for(&self, metric: Metric) -> Option<&MetricSeries> {
        self.series.iter().find(|s| s.metric == metric)
    }

    pub fn present_metrics(&self) -> Vec<Metric> {
        self.series.iter().map(|s| s.metric).collect()
    }
}

#[inline]
fn finite(v: Option<f64>) -> Option<f64> {
    v.filter(|x| x.is_finite())
}

/// Forventet strekning i meter fra snittfart × varighet, når fart finnes.
fn distance_from_speed(samples: &[Sample], speed: SpeedUnit) -> Option<f64> {
    let timed = || samples.iter().filter(|s| s.t.is_finite());
    let mean = metrics::mean(
        timed()
            .filter_map(|s| finite(s.speed))
            .map(|v| speed_to_mps(v, speed)),
    )?;
    let first = metrics::min(timed().map(|s| s.t))?;
    let last = metrics::max(timed().map(|s| s.t))?;
    let expected = mean * (last - first);
    (expected > 0.0).then_some(expected)
}

/// Sammenligner forholdstallet på log-skala.
fn meters_fit_better(span: f64, expected_m: f64) -> bool {
    (span / expected_m).ln().abs() <= (span * 1000.0 / expected_m).ln().abs()
}

/// Deklarert enhet vinner alltid; heuristikk kun når serveren ikke sier noe.
pub fn resolve_units(
    samples: &[Sample],
    hints: &UnitHints,
    config: &ChartConfig,
    telemetry: Option<&Metrics>,
) -> ResolvedUnits {
    let (speed, speed_source) = match hints.speed {
        Some(u) => (u, UnitSource::Declared),
        None => {
            let max_speed = metrics::max(samples.iter().filter_map(|s| finite(s.speed)));
            let unit = match max_speed {
                Some(v) if v > config.speed_kmh_threshold => {
                    warn!(
                        "speed unit not declared, max {:.1} > {:.1}: treating as km/h",
                        v, config.speed_kmh_threshold
                    );
                    SpeedUnit::KilometersPerHour
                }
                _ => SpeedUnit::MetersPerSecond,
            };
            if max_speed.is_some() {
                if let Some(m) = telemetry {
                    units_inferred_total(m).inc();
                }
            }
            (unit, UnitSource::Inferred)
        }
    };

    let (distance, distance_source) = match hints.distance {
        Some(u) => (u, UnitSource::Declared),
        None => {
            let raw = || samples.iter().filter_map(|s| finite(s.distance));
            let max_dist = metrics::max(raw());
            let unit = match max_dist {
                Some(d) if d > 0.0 && d <= config.distance_km_threshold => {
                    let span = d - metrics::min(raw()).unwrap_or(0.0);
                    match distance_from_speed(samples, speed) {
                        // fart × tid sier meter: kort økt, ikke km
                        Some(expected) if span > 0.0 && meters_fit_better(span, expected) => {
                            warn!(
                                "distance unit not declared, span {:.1} matches {:.0} m from speed: treating as m",
                                span, expected
                            );
                            DistanceUnit::Meters
                        }
                        _ => {
                            warn!(
                                "distance unit not declared, max {:.2} <= {:.0}: treating as km",
                                d, config.distance_km_threshold
                            );
                            DistanceUnit::Kilometers
                        }
                    }
                }
                _ => DistanceUnit::Meters,
            };
            if max_dist.is_some() {
                if let Some(m) = telemetry {
                    units_inferred_total(m).inc();
                }
            }
            (unit, UnitSource::Inferred)
        }
    };

    ResolvedUnits { speed, speed_source, distance, distance_source }
}

/// Samples -> kanoniske samples + per-metrikk serier (tid ms -> verdi).
pub fn normalize_samples(
    samples: &[Sample],
    hints: &UnitHints,
    config: &ChartConfig,
    telemetry: Option<&Metrics>,
) -> NormalizedActivity {
    let units = resolve_units(samples, hints, config, telemetry);

    let mut out: Vec<NormalizedSample> = samples
        .iter()
        .filter(|s| s.t.is_finite())
        .map(|s| NormalizedSample {
            t: s.t,
            hr: finite(s.hr),
            watts: finite(s.watts),
            speed_mps: finite(s.speed).map(|v| speed_to_mps(v, units.speed)),
            cadence: finite(s.cadence),
            distance_m: finite(s.distance).map(|d| distance_to_m(d, units.distance)),
            altitude: finite(s.altitude),
        })
        .collect();

    let dropped = samples.len() - out.len();
    if dropped > 0 {
        warn!("dropped {} samples with non-finite time", dropped);
    }

    if out.windows(2).any(|w| w[1].t < w[0].t) {
        warn!("samples not time-ordered, re-sorting {} samples", out.len());
        // stabil sortering: like tider beholder rekkefølgen
        out.sort_by_key(|s| OrderedFloat(s.t));
    }

    let series: Vec<MetricSeries> = Metric::ALL
        .iter()
        .filter_map(|&metric| {
            let points: Vec<(f64, f64)> = out
                .iter()
                .filter_map(|s| s.value(metric).map(|v| (s.t * 1000.0, v)))
                .collect();
            if points.is_empty() {
                None
            } else {
                Some(MetricSeries { metric, points })
            }
        })
        .collect();

    debug!(
        "normalized {} samples, metrics present: {:?}",
        out.len(),
        series.iter().map(|s| s.metric.key()).collect::<Vec<_>>()
    );

    NormalizedActivity { samples: out, units, series }
}
