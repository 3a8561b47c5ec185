use log::warn;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::dashboard::{
    DEFAULT_END_TIME, DEFAULT_SEED, DEFAULT_START_TIME, DashboardRequest, SeriesConfig,
};
use crate::domain::{Parameter, ZoneSpec};

fn default_seed() -> u64 {
    DEFAULT_SEED
}
fn default_start_time() -> String {
    DEFAULT_START_TIME.to_string()
}
fn default_end_time() -> String {
    DEFAULT_END_TIME.to_string()
}
fn default_zones() -> Vec<ZoneSpec> {
    ZoneSpec::defaults()
}
fn default_artifacts_dir() -> PathBuf {
    PathBuf::from("./artefacts")
}

#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    #[serde(default)]
    pub dashboard: DashboardConfig,
    #[serde(default)]
    pub scoring: ScoringConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    #[serde(default = "default_seed")]
    pub seed: u64,
    #[serde(default = "default_start_time")]
    pub start_time: String,
    #[serde(default = "default_end_time")]
    pub end_time: String,
    #[serde(default)]
    pub parameter: Parameter,
    #[serde(default = "default_zones")]
    pub zones: Vec<ZoneSpec>,
    #[serde(flatten)]
    pub series: SeriesConfig,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            start_time: default_start_time(),
            end_time: default_end_time(),
            parameter: Parameter::default(),
            zones: default_zones(),
            series: SeriesConfig::default(),
        }
    }
}

impl DashboardConfig {
    pub fn to_request(&self) -> DashboardRequest {
        DashboardRequest {
            start_time: self.start_time.clone(),
            end_time: self.end_time.clone(),
            parameter: self.parameter,
            seed: self.seed,
            zones: self.zones.clone(),
            series: self.series.clone(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ScoringConfig {
    /// Directory holding `tf-idf.json` and `logreg.json`
    #[serde(default = "default_artifacts_dir")]
    pub artifacts_dir: PathBuf,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            artifacts_dir: default_artifacts_dir(),
        }
    }
}

impl FileConfig {
    /// Load the first parsable config file from the standard locations
    pub fn load() -> Option<Self> {
        get_config_paths()
            .into_iter()
            .find_map(|path| Self::load_from(&path))
    }

    fn load_from(path: &Path) -> Option<Self> {
        if !path.exists() {
            return None;
        }
        let contents = std::fs::read_to_string(path).ok()?;
        match toml::from_str(&contents) {
            Ok(config) => Some(config),
            Err(e) => {
                warn!("Failed to parse config file {:?}: {}", path, e);
                None
            }
        }
    }
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from("minedash.toml"));
    paths.push(PathBuf::from(".minedash.toml"));

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("minedash").join("config.toml"));
        paths.push(config_dir.join("minedash.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".minedash.toml"));
        paths.push(home.join(".config").join("minedash").join("config.toml"));
    }

    paths
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::builder::{DEFAULT_BASE_TIMESTAMP, DEFAULT_TICK_COUNT};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: FileConfig = toml::from_str("").unwrap();

        assert_eq!(config.dashboard.seed, 42);
        assert_eq!(config.dashboard.start_time, DEFAULT_START_TIME);
        assert_eq!(config.dashboard.zones.len(), 3);
        assert_eq!(config.dashboard.series.tick_count, DEFAULT_TICK_COUNT);
        assert_eq!(config.dashboard.series.base_timestamp, DEFAULT_BASE_TIMESTAMP);
        assert_eq!(config.scoring.artifacts_dir, PathBuf::from("./artefacts"));
        assert_eq!(config.dashboard.to_request(), DashboardRequest::default());
    }

    #[test]
    fn test_overrides() {
        let config: FileConfig = toml::from_str(
            r#"
            [dashboard]
            seed = 7
            parameter = "humidity"
            tick_count = 20
            retry_until_accepted = true

            [[dashboard.zones]]
            name = "Shaft"
            center = [0.5, 0.5]
            vertex_count = 5

            [scoring]
            artifacts_dir = "/opt/models"
            "#,
        )
        .unwrap();

        let request = config.dashboard.to_request();
        assert_eq!(request.seed, 7);
        assert_eq!(request.parameter, Parameter::Humidity);
        assert_eq!(request.series.tick_count, 20);
        assert!(request.series.retry_until_accepted);
        assert_eq!(request.zones.len(), 1);
        assert_eq!(request.zones[0].vertex_count, 5);
        assert_eq!(request.zones[0].spread, 0.7);
        assert_eq!(config.scoring.artifacts_dir, PathBuf::from("/opt/models"));
    }

    #[test]
    fn test_load_from_skips_bad_files() {
        let dir = tempdir().unwrap();
        let bad = dir.path().join("bad.toml");
        fs::write(&bad, "[dashboard\nseed = ").unwrap();
        assert!(FileConfig::load_from(&bad).is_none());
        assert!(FileConfig::load_from(&dir.path().join("missing.toml")).is_none());

        let good = dir.path().join("good.toml");
        fs::write(&good, "[dashboard]\nseed = 9\n").unwrap();
        assert_eq!(FileConfig::load_from(&good).unwrap().dashboard.seed, 9);
    }
}
