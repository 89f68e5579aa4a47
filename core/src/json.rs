//! JSON-inngang for visningslaget og Python-modulen.
//!
//! Request: `{ samples, sport, units?, zoom?, start_time?, config? }`.
//! Feil i input rapporteres med JSON-sti (serde_path_to_error).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json as json;
use serde_path_to_error as spte;

use crate::config::{ChartConfig, DEFAULT_CONFIG};
use crate::error::ChartError;
use crate::models::{ChartOutcome, SummaryOutcome};
use crate::normalize::normalize_samples;
use crate::summary::summarize;
use crate::types::{Sample, Sport, UnitHints, ZoomRange};
use crate::view::{ActivityView, ChartContext};

#[derive(Debug, Deserialize)]
pub struct ViewRequest {
    pub samples: Vec<Sample>,
    #[serde(default, alias = "sport_type", alias = "activity_type")]
    pub sport: Sport,
    #[serde(default)]
    pub units: UnitHints,
    #[serde(default)]
    pub zoom: Option<ZoomRange>,
    #[serde(default)]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub config: Option<ChartConfig>,
}

#[derive(Debug, Serialize)]
pub struct ViewResponse {
    pub sport: Sport,
    pub chart: ChartOutcome,
    pub summary: SummaryOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zoom_summary: Option<SummaryOutcome>,
}

fn parse<T: for<'de> Deserialize<'de>>(json_in: &str) -> Result<T, ChartError> {
    let mut de = json::Deserializer::from_str(json_in);
    let parsed = spte::deserialize(&mut de)?;
    de.end().map_err(|e| ChartError::Parse {
        path: ".".to_string(),
        message: e.to_string(),
    })?;
    Ok(parsed)
}

pub fn parse_samples_json(json_in: &str) -> Result<Vec<Sample>, ChartError> {
    parse(json_in)
}

pub fn parse_view_request(json_in: &str) -> Result<ViewRequest, ChartError> {
    parse(json_in)
}

pub fn prepare_view(req: &ViewRequest) -> ViewResponse {
    let config = req.config.clone().unwrap_or_default();
    let mut ctx = ChartContext::new(req.sport.clone())
        .with_units(req.units)
        .with_config(&config);
    if let Some(start) = req.start_time {
        ctx = ctx.with_start_time(start);
    }

    let view = ActivityView::prepare(&req.samples, &ctx);
    let zoom_summary = view
        .effective_zoom(req.zoom.as_ref())
        .map(|z| view.summary_for(Some(&z), None));

    ViewResponse {
        sport: view.sport,
        chart: view.chart,
        summary: view.summary,
        zoom_summary,
    }
}

/// Hele pipelinen, JSON inn og JSON ut.
pub fn prepare_view_json(json_in: &str) -> Result<String, ChartError> {
    let req = parse_view_request(json_in)?;
    let resp = prepare_view(&req);
    Ok(json::to_string(&resp)?)
}

#[derive(Debug, Deserialize)]
struct RangeRequest {
    samples: Vec<Sample>,
    #[serde(default, alias = "sport_type", alias = "activity_type")]
    sport: Sport,
    #[serde(default)]
    units: UnitHints,
    zoom: Option<ZoomRange>,
}

/// Kun sammendrag for et vindu (brukes ved hver zoom-endring).
pub fn summarize_range_json(json_in: &str) -> Result<String, ChartError> {
    let req: RangeRequest = parse(json_in)?;
    let activity = normalize_samples(&req.samples, &req.units, &DEFAULT_CONFIG, None);
    let out = summarize(&activity, &req.sport, req.zoom.as_ref(), None);
    Ok(json::to_string(&out)?)
}
