use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{Metric, ZoomRange};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisSide {
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    pub metric: Metric,
    pub label: String,
    pub unit: String,
    pub min: f64,
    pub max: f64,
    /// Tempo-aksen: lavere verdi (raskere) øverst
    pub reversed: bool,
    pub side: AxisSide,
    /// Piksler fra plottet, for stabling på samme side
    pub offset: u32,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub metric: Metric,
    pub name: String,
    pub unit_suffix: String,
    pub color: String,
    pub axis_index: usize,
    /// (tid ms, visningsverdi)
    pub points: Vec<(f64, f64)>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub axes: Vec<Axis>,
    pub series: Vec<Series>,
    pub start_time: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ChartOutcome {
    NoData,
    Ready(ChartData),
}

impl ChartOutcome {
    pub fn data(&self) -> Option<&ChartData> {
        match self {
            ChartOutcome::Ready(d) => Some(d),
            ChartOutcome::NoData => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowKind {
    Power,
    HeartRate,
    Speed,
    Pace,
    Cadence,
    Distance,
    ElevationGain,
    Energy,
    Duration,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRow {
    pub kind: RowKind,
    pub name: String,
    /// Snitt eller total, i visningsenhet
    pub value: Option<f64>,
    pub max: Option<f64>,
    pub value_display: String,
    pub max_display: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub zoom: Option<ZoomRange>,
    pub sample_count: usize,
    pub rows: Vec<SummaryRow>,
}

impl Summary {
    pub fn row(&self, kind: RowKind) -> Option<&SummaryRow> {
        self.rows.iter().find(|r| r.kind == kind)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SummaryOutcome {
    NoData,
    NoDataInRange { zoom: ZoomRange },
    Ready(Summary),
}

impl SummaryOutcome {
    pub fn summary(&self) -> Option<&Summary> {
        match self {
            SummaryOutcome::Ready(s) => Some(s),
            _ => None,
        }
    }
}
