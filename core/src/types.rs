use serde::{Deserialize, Serialize};

use crate::error::ChartError;

/// En måling på et punkt i aktivitetens forløpte tid.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Sample {
    #[serde(alias = "time", alias = "elapsed")]
    pub t: f64, // sekunder fra start
    #[serde(default, alias = "heartrate", alias = "heart_rate")]
    pub hr: Option<f64>, // bpm
    #[serde(default, alias = "power")]
    pub watts: Option<f64>, // watt
    #[serde(default, alias = "velocity_smooth")]
    pub speed: Option<f64>, // m/s eller km/h (se UnitHints)
    #[serde(default)]
    pub cadence: Option<f64>, // rpm
    #[serde(default)]
    pub distance: Option<f64>, // kumulativ, meter eller km
    #[serde(default, alias = "elevation", alias = "alt")]
    pub altitude: Option<f64>, // meter
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpeedUnit {
    #[serde(rename = "mps", alias = "m/s")]
    MetersPerSecond,
    #[serde(rename = "kmh", alias = "km/h")]
    KilometersPerHour,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DistanceUnit {
    #[serde(rename = "m")]
    Meters,
    #[serde(rename = "km")]
    Kilometers,
}

/// Enheter deklarert av serveren. `None` => heuristikk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UnitHints {
    #[serde(default)]
    pub speed: Option<SpeedUnit>,
    #[serde(default)]
    pub distance: Option<DistanceUnit>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitSource {
    Declared,
    Inferred,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedUnits {
    pub speed: SpeedUnit,
    pub speed_source: UnitSource,
    pub distance: DistanceUnit,
    pub distance_source: UnitSource,
}

/// Metrikker i fast prioritet. Rekkefølgen her styrer akse-stabling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Power,
    HeartRate,
    Speed,
    Cadence,
    Distance,
    Altitude,
}

impl Metric {
    pub const ALL: [Metric; 6] = [
        Metric::Power,
        Metric::HeartRate,
        Metric::Speed,
        Metric::Cadence,
        Metric::Distance,
        Metric::Altitude,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Metric::Power => "power",
            Metric::HeartRate => "heart_rate",
            Metric::Speed => "speed",
            Metric::Cadence => "cadence",
            Metric::Distance => "distance",
            Metric::Altitude => "altitude",
        }
    }

    /// Verdier som aldri kan være negative (aksen klippes ved 0).
    pub fn is_non_negative(&self) -> bool {
        !matches!(self, Metric::Altitude)
    }
}

/// Sportstype. Kun løping har egen visning (tempo i stedet for fart).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Sport {
    Running,
    Other(String),
}

impl Sport {
    pub fn parse(label: &str) -> Self {
        let norm = label.trim().to_lowercase();
        match norm.as_str() {
            "running" | "run" => Sport::Running,
            _ => Sport::Other(label.trim().to_string()),
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self, Sport::Running)
    }
}

impl Default for Sport {
    fn default() -> Self {
        Sport::Other(String::new())
    }
}

impl From<String> for Sport {
    fn from(s: String) -> Self {
        Sport::parse(&s)
    }
}

impl From<Sport> for String {
    fn from(s: Sport) -> Self {
        match s {
            Sport::Running => "running".to_string(),
            Sport::Other(label) => label,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoomDomain {
    /// Forløpt tid i sekunder
    Time,
    /// Kumulativ distanse i meter (normalisert)
    Distance,
}

/// Brukervalgt [start, end]-vindu, inkluderende.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ZoomRangeRaw")]
pub struct ZoomRange {
    pub domain: ZoomDomain,
    pub start: f64,
    pub end: f64,
}

#[derive(Deserialize)]
struct ZoomRangeRaw {
    domain: ZoomDomain,
    start: f64,
    end: f64,
}

impl TryFrom<ZoomRangeRaw> for ZoomRange {
    type Error = ChartError;

    fn try_from(raw: ZoomRangeRaw) -> Result<Self, Self::Error> {
        ZoomRange::new(raw.domain, raw.start, raw.end)
    }
}

impl ZoomRange {
    pub fn new(domain: ZoomDomain, start: f64, end: f64) -> Result<Self, ChartError> {
        if !start.is_finite() || !end.is_finite() || start > end {
            return Err(ChartError::InvalidZoom { start, end });
        }
        Ok(Self { domain, start, end })
    }

    pub fn time(start_s: f64, end_s: f64) -> Result<Self, ChartError> {
        Self::new(ZoomDomain::Time, start_s, end_s)
    }

    pub fn distance(start_m: f64, end_m: f64) -> Result<Self, ChartError> {
        Self::new(ZoomDomain::Distance, start_m, end_m)
    }

    #[inline]
    pub fn contains(&self, x: f64) -> bool {
        x >= self.start && x <= self.end
    }
}
