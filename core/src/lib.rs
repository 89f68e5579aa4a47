//! Chart-data for aktivitetsvisning: normaliserer samples, bygger akser/serier
//! og regner sammendrag for hele økten eller et zoom-vindu.

pub mod axis;
pub mod cli;
pub mod config;
pub mod error;
pub mod json;
pub mod metrics;
pub mod models;
pub mod normalize;
pub mod smoothing;
pub mod storage;
pub mod summary;
pub mod telemetry;
pub mod types;
pub mod units;
pub mod view;

#[cfg(feature = "python")]
mod py;

pub use axis::build_chart;
pub use config::{ChartConfig, SeriesColors, DEFAULT_CONFIG};
pub use error::ChartError;
pub use json::{parse_samples_json, prepare_view_json, summarize_range_json};
pub use models::{
    Axis, AxisSide, ChartData, ChartOutcome, RowKind, Series, Summary, SummaryOutcome, SummaryRow,
};
pub use normalize::{normalize_samples, MetricSeries, NormalizedActivity, NormalizedSample};
pub use storage::{load_config, save_config};
pub use summary::summarize;
pub use telemetry::Metrics;
pub use types::{
    DistanceUnit, Metric, ResolvedUnits, Sample, SpeedUnit, Sport, UnitHints, UnitSource,
    ZoomDomain, ZoomRange,
};
pub use view::{ActivityView, ChartContext};
