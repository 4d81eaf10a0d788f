//! Tolerance configuration.
//!
//! Floating-point drift means composed and inverted transforms are compared
//! within a tolerance rather than exactly. Tolerances load from a TOML file:
//!
//! ```toml
//! position_epsilon = 1e-9
//! angle_epsilon = 1e-9
//! ```
//!
//! Missing keys fall back to their defaults.

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Comparison tolerances for transforms.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ToleranceConfig {
    /// Maximum per-axis translation difference (default: 1e-9)
    #[serde(default = "default_position_epsilon")]
    pub position_epsilon: f64,

    /// Maximum wrap-aware heading difference in radians (default: 1e-9)
    #[serde(default = "default_angle_epsilon")]
    pub angle_epsilon: f64,
}

fn default_position_epsilon() -> f64 {
    1e-9
}

fn default_angle_epsilon() -> f64 {
    1e-9
}

impl Default for ToleranceConfig {
    fn default() -> Self {
        Self {
            position_epsilon: default_position_epsilon(),
            angle_epsilon: default_angle_epsilon(),
        }
    }
}

impl ToleranceConfig {
    /// Load tolerances from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let config = Self::from_toml(&contents)?;
        log::info!("Loaded tolerances from {}", path.display());
        Ok(config)
    }

    /// Parse tolerances from a TOML string.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: ToleranceConfig = toml::from_str(contents)?;
        config.validate()?;
        log::debug!(
            "Tolerances: position_epsilon={:e}, angle_epsilon={:e}",
            config.position_epsilon,
            config.angle_epsilon
        );
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("position_epsilon", self.position_epsilon),
            ("angle_epsilon", self.angle_epsilon),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::Config(format!(
                    "{} must be a finite, non-negative number (got {})",
                    name, value
                )));
            }
        }
        Ok(())
    }
}
