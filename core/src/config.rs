use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::types::Metric;

/// Standardkonfig, delt av alle visninger som ikke injiserer sin egen.
pub static DEFAULT_CONFIG: Lazy<ChartConfig> = Lazy::new(ChartConfig::default);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Fart over denne (maks) tolkes som km/h når enhet ikke er deklarert.
    pub speed_kmh_threshold: f64,
    /// Kumulativ distanse med maks <= denne tolkes som km når enhet mangler.
    pub distance_km_threshold: f64,
    /// Andel av spennet som legges på over/under aksen.
    pub axis_padding: f64,
    /// Effekt-aksen går alltid minst hit (W).
    pub power_axis_floor: f64,
    /// Tempo-aksen kappes her (min/km) så gåpauser ikke dominerer.
    pub pace_axis_cap: f64,
    /// Piksler per stablet akse på samme side.
    pub axis_width: u32,
    /// 3-punkts median på visningsserien for høyde.
    pub smooth_altitude: bool,
    pub colors: SeriesColors,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            speed_kmh_threshold: 15.0,
            distance_km_threshold: 250.0,
            axis_padding: 0.05,
            power_axis_floor: 300.0,
            pace_axis_cap: 20.0,
            axis_width: 50,
            smooth_altitude: false,
            colors: SeriesColors::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeriesColors {
    pub power: String,
    pub heart_rate: String,
    pub speed: String,
    pub cadence: String,
    pub distance: String,
    pub altitude: String,
}

impl Default for SeriesColors {
    fn default() -> Self {
        Self {
            power: "#8b5cf6".into(),
            heart_rate: "#ef4444".into(),
            speed: "#3b82f6".into(),
            cadence: "#f59e0b".into(),
            distance: "#10b981".into(),
            altitude: "#6b7280".into(),
        }
    }
}

impl SeriesColors {
    pub fn for_metric(&self, metric: Metric) -> &str {
        match metric {
            Metric::Power => &self.power,
            Metric::HeartRate => &self.heart_rate,
            Metric::Speed => &self.speed,
            Metric::Cadence => &self.cadence,
            Metric::Distance => &self.distance,
            Metric::Altitude => &self.altitude,
        }
    }
}
