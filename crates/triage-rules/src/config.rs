use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::confidence::ConfidencePolicy;
use crate::error::ConfigError;

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

/// What to do when a choice answer is not named by any rule and only the
/// fallback rule matches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum MatchMode {
    /// Use the fallback recommendation.
    #[default]
    Fallback,
    /// Fail with `ClassifyError::UnhandledCategory`.
    Strict,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ClassifierConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    #[serde(default)]
    pub confidence: ConfidencePolicy,
    #[serde(default)]
    pub match_mode: MatchMode,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            confidence: ConfidencePolicy::default(),
            match_mode: MatchMode::default(),
        }
    }
}

impl ClassifierConfig {
    pub fn strict() -> Self {
        Self {
            match_mode: MatchMode::Strict,
            ..Self::default()
        }
    }

    pub fn with_confidence(mut self, confidence: ConfidencePolicy) -> Self {
        self.confidence = confidence;
        self
    }
}

/// Default location of the classifier config file.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let base = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
    Ok(base.join("triage").join("classifier.json"))
}

pub fn load_config(path: &Path) -> Result<ClassifierConfig, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.display().to_string(),
        source,
    })?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .map_or(0, |v| u32::try_from(v).unwrap_or(u32::MAX));

    let migrated = migrate(json, on_disk_version)?;
    let config: ClassifierConfig = serde_json::from_value(migrated)?;
    Ok(config)
}

/// Load the config at `path`, or the defaults if no file exists yet.
pub fn load_or_default(path: &Path) -> Result<ClassifierConfig, ConfigError> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no classifier config, using defaults");
        return Ok(ClassifierConfig::default());
    }
    load_config(path)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
fn migrate(mut json: serde_json::Value, from_version: u32) -> Result<serde_json::Value, ConfigError> {
    if from_version > CURRENT_VERSION {
        return Err(ConfigError::UnsupportedVersion {
            found: from_version,
            supported: CURRENT_VERSION,
        });
    }

    // v0 → v1: write out the defaults the pre-versioned file relied on
    if from_version < 1 {
        let obj = json.as_object_mut().ok_or(ConfigError::NotAnObject)?;
        obj.entry("confidence")
            .or_insert(serde_json::to_value(ConfidencePolicy::default())?);
        obj.entry("match_mode")
            .or_insert(serde_json::to_value(MatchMode::default())?);
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated classifier config v0 → v1");
    }

    Ok(json)
}

pub fn save_config(path: &Path, config: &ClassifierConfig) -> Result<(), ConfigError> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;
    let json = serde_json::to_string_pretty(&stamped)?;

    // Write to a temp file then rename for atomicity
    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
    }

    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), "classifier config saved");
    Ok(())
}
