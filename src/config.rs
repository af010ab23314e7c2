use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::core::{MatchOptions, Matcher};
use crate::error::MatchError;
use crate::models::{ScoringCurves, ScoringWeights};

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatchingSettings {
    pub min_score: Option<f64>,
    pub limit: Option<usize>,
    pub parallel_threshold: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
    #[serde(default)]
    pub curves: CurvesConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_case_type_weight")]
    pub case_type: f64,
    #[serde(default = "default_specialization_weight")]
    pub specialization: f64,
    #[serde(default = "default_success_rate_weight")]
    pub success_rate: f64,
    #[serde(default = "default_availability_weight")]
    pub availability: f64,
    #[serde(default = "default_pricing_weight")]
    pub pricing: f64,
    #[serde(default = "default_client_profile_weight")]
    pub client_profile: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            case_type: default_case_type_weight(),
            specialization: default_specialization_weight(),
            success_rate: default_success_rate_weight(),
            availability: default_availability_weight(),
            pricing: default_pricing_weight(),
            client_profile: default_client_profile_weight(),
        }
    }
}

fn default_case_type_weight() -> f64 { 0.25 }
fn default_specialization_weight() -> f64 { 0.15 }
fn default_success_rate_weight() -> f64 { 0.15 }
fn default_availability_weight() -> f64 { 0.25 }
fn default_pricing_weight() -> f64 { 0.10 }
fn default_client_profile_weight() -> f64 { 0.10 }

#[derive(Debug, Clone, Deserialize)]
pub struct CurvesConfig {
    #[serde(default = "default_hourly_budget_ratio")]
    pub hourly_budget_ratio: f64,
    #[serde(default = "default_contingency_reasonable_pct")]
    pub contingency_reasonable_pct: f64,
}

impl Default for CurvesConfig {
    fn default() -> Self {
        Self {
            hourly_budget_ratio: default_hourly_budget_ratio(),
            contingency_reasonable_pct: default_contingency_reasonable_pct(),
        }
    }
}

fn default_hourly_budget_ratio() -> f64 { 0.1 }
fn default_contingency_reasonable_pct() -> f64 { 25.0 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "compact".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with COUNSEL__)
    pub fn load() -> Result<Self, MatchError> {
        let builder = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., COUNSEL__SCORING__WEIGHTS__PRICING -> scoring.weights.pricing
            .add_source(env_source());

        Self::from_builder(apply_env_overrides(builder)?)
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, MatchError> {
        let builder = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(env_source());

        Self::from_builder(builder)
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, MatchError> {
        Ok(builder.build()?.try_deserialize()?)
    }

    pub fn scoring_weights(&self) -> ScoringWeights {
        let w = &self.scoring.weights;
        ScoringWeights {
            case_type: w.case_type,
            specialization: w.specialization,
            success_rate: w.success_rate,
            availability: w.availability,
            pricing: w.pricing,
            client_profile: w.client_profile,
        }
    }

    pub fn scoring_curves(&self) -> ScoringCurves {
        ScoringCurves {
            hourly_budget_ratio: self.scoring.curves.hourly_budget_ratio,
            contingency_reasonable_pct: self.scoring.curves.contingency_reasonable_pct,
        }
    }

    pub fn match_options(&self) -> MatchOptions {
        let defaults = MatchOptions::default();
        MatchOptions {
            min_score: self.matching.min_score.unwrap_or(defaults.min_score),
            limit: self.matching.limit.or(defaults.limit),
            parallel_threshold: self
                .matching
                .parallel_threshold
                .unwrap_or(defaults.parallel_threshold),
        }
    }

    /// Build a matcher from these settings, validating the weights
    pub fn matcher(&self) -> Result<Matcher, MatchError> {
        Ok(Matcher::new(self.scoring_weights())?
            .with_curves(self.scoring_curves())
            .with_options(self.match_options()))
    }
}

fn env_source() -> Environment {
    Environment::with_prefix("COUNSEL")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

/// Honor the conventional LOG_LEVEL / LOG_FORMAT variables on top of the files
fn apply_env_overrides(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    use std::env;

    let mut builder = builder;
    if let Ok(level) = env::var("LOG_LEVEL") {
        builder = builder.set_override("logging.level", level)?;
    }
    if let Ok(format) = env::var("LOG_FORMAT") {
        builder = builder.set_override("logging.format", format)?;
    }
    Ok(builder)
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;
    use std::env;
    use std::io::Write;
    use std::sync::Mutex;

    // Environment variables are process-wide
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn from_toml(toml: &str) -> Result<Settings, MatchError> {
        Settings::from_builder(Config::builder().add_source(File::from_str(toml, FileFormat::Toml)))
    }

    #[test]
    fn test_default_weights() {
        let weights = WeightsConfig::default();
        assert_eq!(weights.case_type, 0.25);
        assert_eq!(weights.specialization, 0.15);
        assert_eq!(weights.success_rate, 0.15);
        assert_eq!(weights.availability, 0.25);
        assert_eq!(weights.pricing, 0.10);
        assert_eq!(weights.client_profile, 0.10);
    }

    #[test]
    fn test_default_logging() {
        let logging = LoggingSettings::default();
        assert_eq!(logging.level, "info");
        assert_eq!(logging.format, "compact");
    }

    #[test]
    fn test_weights_match_model_defaults() {
        assert_eq!(Settings::default().scoring_weights(), ScoringWeights::default());
        assert_eq!(Settings::default().scoring_curves(), ScoringCurves::default());
        assert_eq!(Settings::default().match_options(), MatchOptions::default());
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let settings = from_toml("").unwrap();
        assert_eq!(settings.scoring_weights(), ScoringWeights::default());
        assert!(settings.matcher().is_ok());
    }

    #[test]
    fn test_partial_file_overrides() {
        let settings = from_toml(
            r#"
            [matching]
            limit = 10
            min_score = 20.0

            [scoring.curves]
            contingency_reasonable_pct = 33.0
            "#,
        )
        .unwrap();

        let options = settings.match_options();
        assert_eq!(options.limit, Some(10));
        assert_eq!(options.min_score, 20.0);
        assert_eq!(options.parallel_threshold, 256);
        assert_eq!(settings.scoring_curves().contingency_reasonable_pct, 33.0);
    }

    #[test]
    fn test_load_from_file() {
        let _env = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(
            br#"
            [matching]
            limit = 3

            [logging]
            format = "pretty"
            "#,
        )
        .unwrap();

        let settings = Settings::load_from(file.path()).unwrap();
        assert_eq!(settings.match_options().limit, Some(3));
        assert_eq!(settings.logging.format, "pretty");
        assert_eq!(settings.logging.level, "info");
    }

    #[test]
    fn test_load_from_missing_file_fails() {
        let _env = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let result = Settings::load_from("config/does-not-exist.toml");
        assert!(matches!(result, Err(MatchError::Config(_))));
    }

    #[test]
    fn test_prefixed_env_overrides_files() {
        let _env = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        env::set_var("COUNSEL__MATCHING__LIMIT", "5");
        env::set_var("COUNSEL__SCORING__WEIGHTS__PRICING", "0.2");
        env::set_var("COUNSEL__SCORING__WEIGHTS__CLIENT_PROFILE", "0.0");

        let loaded = Settings::load();

        env::remove_var("COUNSEL__MATCHING__LIMIT");
        env::remove_var("COUNSEL__SCORING__WEIGHTS__PRICING");
        env::remove_var("COUNSEL__SCORING__WEIGHTS__CLIENT_PROFILE");

        let settings = loaded.unwrap();
        assert_eq!(settings.match_options().limit, Some(5));
        assert_eq!(settings.scoring.weights.pricing, 0.2);
        assert_eq!(settings.scoring.weights.client_profile, 0.0);
        assert!(settings.matcher().is_ok());
    }

    #[test]
    fn test_log_env_vars_override_logging_section() {
        let _env = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        env::set_var("LOG_LEVEL", "debug");
        env::set_var("LOG_FORMAT", "pretty");

        let loaded = Settings::load();

        env::remove_var("LOG_LEVEL");
        env::remove_var("LOG_FORMAT");

        let settings = loaded.unwrap();
        assert_eq!(settings.logging.level, "debug");
        assert_eq!(settings.logging.format, "pretty");
    }

    #[test]
    fn test_matcher_rejects_unbalanced_weights() {
        let settings = from_toml(
            r#"
            [scoring.weights]
            pricing = 0.5
            "#,
        )
        .unwrap();

        assert!(matches!(settings.matcher(), Err(MatchError::InvalidWeights(_))));
    }
}
