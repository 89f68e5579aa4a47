use chrono::{DateTime, Utc};
use log::debug;
use serde::Serialize;

use crate::axis::build_chart;
use crate::config::{ChartConfig, DEFAULT_CONFIG};
use crate::models::{ChartOutcome, SummaryOutcome};
use crate::normalize::{normalize_samples, NormalizedActivity};
use crate::summary::{effective_zoom, summarize};
use crate::telemetry::{views_built_total, Metrics};
use crate::types::{Sample, Sport, UnitHints, ZoomRange};

/// Alt pipelinen trenger utenfra, sendt eksplisitt inn.
#[derive(Debug, Clone)]
pub struct ChartContext<'a> {
    pub sport: Sport,
    pub units: UnitHints,
    pub config: &'a ChartConfig,
    pub start_time: Option<DateTime<Utc>>,
    pub telemetry: Option<&'a Metrics>,
}

impl<'a> ChartContext<'a> {
    pub fn new(sport: Sport) -> Self {
        Self {
            sport,
            units: UnitHints::default(),
            config: &*DEFAULT_CONFIG,
            start_time: None,
            telemetry: None,
        }
    }

    pub fn with_units(mut self, units: UnitHints) -> Self {
        self.units = units;
        self
    }

    pub fn with_config(mut self, config: &'a ChartConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_start_time(mut self, start: DateTime<Utc>) -> Self {
        self.start_time = Some(start);
        self
    }

    pub fn with_telemetry(mut self, metrics: &'a Metrics) -> Self {
        self.telemetry = Some(metrics);
        self
    }
}

/// Én aktivitetsvisning: normaliserte data, chart og helhetssammendrag.
#[derive(Debug, Clone, Serialize)]
pub struct ActivityView {
    pub sport: Sport,
    #[serde(skip)]
    pub activity: NormalizedActivity,
    pub chart: ChartOutcome,
    pub summary: SummaryOutcome,
}

impl ActivityView {
    pub fn prepare(samples: &[Sample], ctx: &ChartContext<'_>) -> Self {
        let activity = normalize_samples(samples, &ctx.units, ctx.config, ctx.telemetry);
        let chart = build_chart(&activity, &ctx.sport, ctx.config, ctx.start_time);
        let summary = summarize(&activity, &ctx.sport, None, ctx.telemetry);
        if let Some(m) = ctx.telemetry {
            views_built_total(m).inc();
        }
        debug!(
            "activity view ready: {} samples, sport={:?}",
            activity.samples.len(),
            ctx.sport
        );
        Self { sport: ctx.sport.clone(), activity, chart, summary }
    }

    /// Kjører kun aggregatoren på nytt for et nytt vindu.
    pub fn summary_for(&self, zoom: Option<&ZoomRange>, telemetry: Option<&Metrics>) -> SummaryOutcome {
        match effective_zoom(&self.activity.samples, zoom) {
            None => self.summary.clone(),
            Some(z) => summarize(&self.activity, &self.sport, Some(&z), telemetry),
        }
    }

    /// `None` når vinduet dekker hele aktiviteten (zoom nullstilles).
    pub fn effective_zoom(&self, zoom: Option<&ZoomRange>) -> Option<ZoomRange> {
        effective_zoom(&self.activity.samples, zoom)
    }
}
