use prometheus::{Encoder, IntCounter, Registry, TextEncoder};

use crate::error::ChartError;

/// Tellere for chart-pipelinen. Injiseres via `ChartContext`, ingen global state.
#[derive(Clone)]
pub struct Metrics {
    registry: Registry,
    views_built: IntCounter,
    summaries: IntCounter,
    empty_zoom: IntCounter,
    units_inferred: IntCounter,
}

impl Metrics {
    pub fn new() -> Result<Self, ChartError> {
        let registry = Registry::new();
        let views_built = IntCounter::new(
            "chart_views_built_total",
            "Activity views prepared (normalize + axes + summary)",
        )?;
        let summaries = IntCounter::new(
            "chart_summaries_total",
            "Summary aggregations computed (full range or zoom)",
        )?;
        let empty_zoom = IntCounter::new(
            "chart_empty_zoom_total",
            "Zoom windows that matched no samples",
        )?;
        let units_inferred = IntCounter::new(
            "chart_units_inferred_total",
            "Speed/distance units guessed from magnitude instead of declared",
        )?;
        registry.register(Box::new(views_built.clone()))?;
        registry.register(Box::new(summaries.clone()))?;
        registry.register(Box::new(empty_zoom.clone()))?;
        registry.register(Box::new(units_inferred.clone()))?;
        Ok(Self {
            registry,
            views_built,
            summaries,
            empty_zoom,
            units_inferred,
        })
    }

    /// Prometheus tekstformat.
    pub fn render(&self) -> Result<String, ChartError> {
        let mut buf = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

impl std::fmt::Debug for Metrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Metrics")
            .field("views_built", &self.views_built.get())
            .field("summaries", &self.summaries.get())
            .field("empty_zoom", &self.empty_zoom.get())
            .field("units_inferred", &self.units_inferred.get())
            .finish()
    }
}

pub fn views_built_total(m: &Metrics) -> &IntCounter {
    &m.views_built
}

pub fn summaries_total(m: &Metrics) -> &IntCounter {
    &m.summaries
}

pub fn empty_zoom_total(m: &Metrics) -> &IntCounter {
    &m.empty_zoom
}

pub fn units_inferred_total(m: &Metrics) -> &IntCounter {
    &m.units_inferred
}
