use std::path::Path;

use log::{info, warn};

use crate::config::ChartConfig;
use crate::error::ChartError;

/// Leser inn chart-konfig fra disk (JSON).
/// Hvis filen ikke finnes, returneres default-konfig.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<ChartConfig, ChartError> {
    let path = path.as_ref();
    if path.exists() {
        let contents = std::fs::read_to_string(path)?;
        let config: ChartConfig = serde_json::from_str(&contents)?;
        info!(
            "chart config loaded from {} (smooth_altitude={})",
            path.display(),
            config.smooth_altitude
        );
        Ok(config)
    } else {
        warn!("no chart config at {}, using defaults", path.display());
        Ok(ChartConfig::default())
    }
}

/// Lagrer konfig til disk som JSON (pretty-print).
pub fn save_config<P: AsRef<Path>>(config: &ChartConfig, path: P) -> Result<(), ChartError> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(config)?;
    std::fs::write(path, json)?;
    info!("chart config saved to {}", path.display());
    Ok(())
}
