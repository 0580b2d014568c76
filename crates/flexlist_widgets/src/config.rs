//! Overscroll configuration
//!
//! Every field has a default, so a config file only needs the keys it wants to
//! change:
//!
//! ```toml
//! max_overscroll_dp = 120.0
//! spring_back_duration_ms = 350
//! easing = "decelerate"
//! ```

use std::fs;
use std::path::Path;

use flexlist_animation::{Easing, DEFAULT_DURATION_MS};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Logical overscroll distance before density scaling
pub const DEFAULT_MAX_OVERSCROLL_DP: f32 = 100.0;

/// Raw drag deltas are divided by this before moving the list
pub const DEFAULT_DAMPING_DIVISOR: i32 = 2;

/// Configuration for elastic overscroll behavior
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverscrollConfig {
    /// Overscroll cap and pull threshold in logical units
    pub max_overscroll_dp: f32,
    /// Duration of the spring-back animation
    pub spring_back_duration_ms: u32,
    /// Divisor applied to drag deltas while overscrolled (2 = half speed)
    pub damping_divisor: i32,
    /// Interpolator for the spring-back animation
    pub easing: Easing,
}

impl Default for OverscrollConfig {
    fn default() -> Self {
        Self {
            max_overscroll_dp: DEFAULT_MAX_OVERSCROLL_DP,
            spring_back_duration_ms: DEFAULT_DURATION_MS,
            damping_divisor: DEFAULT_DAMPING_DIVISOR,
            easing: Easing::default(),
        }
    }
}

impl OverscrollConfig {
    /// Parse and validate a config from TOML text
    pub fn from_toml_str(input: &str) -> Result<Self> {
        let config: Self = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config file
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }

    /// Render the config as TOML
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    /// Check that every value is usable
    pub fn validate(&self) -> Result<()> {
        if !self.max_overscroll_dp.is_finite() || self.max_overscroll_dp < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "max_overscroll_dp must be a non-negative number, got {}",
                self.max_overscroll_dp
            )));
        }
        if self.spring_back_duration_ms == 0 {
            return Err(ConfigError::Invalid(
                "spring_back_duration_ms must be greater than zero".to_string(),
            ));
        }
        if self.damping_divisor <= 0 {
            return Err(ConfigError::Invalid(format!(
                "damping_divisor must be positive, got {}",
                self.damping_divisor
            )));
        }
        Ok(())
    }

    /// Overscroll cap in device pixels for the given display density
    pub fn max_overscroll_distance(&self, density: f32) -> i32 {
        (density * self.max_overscroll_dp) as i32
    }

    pub fn with_max_overscroll_dp(mut self, dp: f32) -> Self {
        self.max_overscroll_dp = dp;
        self
    }

    pub fn with_duration_ms(mut self, duration_ms: u32) -> Self {
        self.spring_back_duration_ms = duration_ms;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn with_damping_divisor(mut self, divisor: i32) -> Self {
        self.damping_divisor = divisor;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = OverscrollConfig::default();
        assert_eq!(config.max_overscroll_dp, 100.0);
        assert_eq!(config.spring_back_duration_ms, 500);
        assert_eq!(config.damping_divisor, 2);
        assert_eq!(config.easing, Easing::AccelerateDecelerate);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_density_scaling_truncates() {
        let config = OverscrollConfig::default();
        assert_eq!(config.max_overscroll_distance(1.0), 100);
        assert_eq!(config.max_overscroll_distance(2.75), 275);
        assert_eq!(config.max_overscroll_distance(1.333), 133);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = OverscrollConfig::from_toml_str(
            "max_overscroll_dp = 120.0\neasing = \"decelerate\"\n",
        )
        .unwrap();

        assert_eq!(config.max_overscroll_dp, 120.0);
        assert_eq!(config.easing, Easing::Decelerate);
        assert_eq!(config.spring_back_duration_ms, 500);
    }

    #[test]
    fn test_unknown_easing_is_rejected() {
        let err = OverscrollConfig::from_toml_str("easing = \"bounce\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_rejects_invalid_values() {
        let err = OverscrollConfig::from_toml_str("spring_back_duration_ms = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = OverscrollConfig::from_toml_str("damping_divisor = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = OverscrollConfig::from_toml_str("max_overscroll_dp = -1.0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_rejects_malformed_toml() {
        let err = OverscrollConfig::from_toml_str("max_overscroll_dp = \"far\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_toml_output_reloads() {
        let config = OverscrollConfig::default().with_duration_ms(300);
        let text = config.to_toml_string().unwrap();
        assert_eq!(OverscrollConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_missing_file() {
        let err = OverscrollConfig::from_path(Path::new("/nonexistent/overscroll.toml"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
