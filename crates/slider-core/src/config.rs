//! Per-instance slider configuration.
//!
//! A `SliderConfig` is supplied once when a slider is mounted and never
//! changes afterwards. The host element it is attached to is a DOM reference
//! and therefore lives on the web side, not here.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("radius must be positive, got {0}")]
    NonPositiveRadius(f64),
    #[error("min value {min} must be below max value {max}")]
    EmptyRange { min: f64, max: f64 },
    #[error("step must be positive, got {0}")]
    NonPositiveStep(f64),
    #[error("`{0}` must be a finite number")]
    NonFinite(&'static str),
}

#[derive(Clone, Debug, PartialEq)]
pub struct SliderConfig {
    pub radius: f64,
    pub color: String,
    pub min_value: f64,
    pub max_value: f64,
    pub step: f64,
    /// Value shown before any interaction; `min_value` when absent.
    pub initial_value: Option<f64>,
    /// Optional caption shown next to the value in the legend.
    pub label: Option<String>,
    /// When false only ring clicks move the handle.
    pub draggable: bool,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            radius: 100.0,
            color: "#3a8fd9".to_string(),
            min_value: 0.0,
            max_value: 100.0,
            step: 1.0,
            initial_value: None,
            label: None,
            draggable: true,
        }
    }
}

impl SliderConfig {
    /// Check the numeric fields.
    ///
    /// Mounting does not require a valid config: invalid values render a
    /// degraded ring instead of failing. Callers that prefer to fail fast
    /// can use this directly.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, v) in [
            ("radius", self.radius),
            ("minValue", self.min_value),
            ("maxValue", self.max_value),
            ("step", self.step),
        ] {
            if !v.is_finite() {
                return Err(ConfigError::NonFinite(name));
            }
        }
        if let Some(v) = self.initial_value {
            if !v.is_finite() {
                return Err(ConfigError::NonFinite("initialValue"));
            }
        }
        if self.radius <= 0.0 {
            return Err(ConfigError::NonPositiveRadius(self.radius));
        }
        if self.min_value >= self.max_value {
            return Err(ConfigError::EmptyRange {
                min: self.min_value,
                max: self.max_value,
            });
        }
        if self.step <= 0.0 {
            return Err(ConfigError::NonPositiveStep(self.step));
        }
        Ok(())
    }

    #[inline]
    pub fn range(&self) -> f64 {
        self.max_value - self.min_value
    }
}
