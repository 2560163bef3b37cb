//! Engine configuration loaded from JSON.

use crate::animation::ease::Ease;
use crate::effects::stagger::StaggerTiming;
use crate::effects::{Evaporate, Scale, Variant};
use crate::foundation::error::{HTextError, HTextResult};

fn evaporate_char_time() -> f64 {
    Evaporate::DEFAULT_TIMING.char_time_ms
}

fn scale_char_time() -> f64 {
    Scale::DEFAULT_TIMING.char_time_ms
}

fn default_most_count() -> u32 {
    20
}

/// Effect selection and its timing parameters.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum VariantConfig {
    /// [`Evaporate`] effect.
    Evaporate {
        /// Reveal time of one character, in milliseconds.
        #[serde(default = "evaporate_char_time")]
        char_time_ms: f64,
        /// Characters per character-time.
        #[serde(default = "default_most_count")]
        most_count: u32,
    },
    /// [`Scale`] effect.
    Scale {
        /// Reveal time of one character, in milliseconds.
        #[serde(default = "scale_char_time")]
        char_time_ms: f64,
        /// Characters per character-time.
        #[serde(default = "default_most_count")]
        most_count: u32,
    },
}

impl Default for VariantConfig {
    fn default() -> Self {
        Self::Evaporate {
            char_time_ms: evaporate_char_time(),
            most_count: default_most_count(),
        }
    }
}

impl VariantConfig {
    /// Timing parameters of the selected effect.
    pub fn timing(&self) -> StaggerTiming {
        match *self {
            Self::Evaporate {
                char_time_ms,
                most_count,
            }
            | Self::Scale {
                char_time_ms,
                most_count,
            } => StaggerTiming {
                char_time_ms,
                most_count,
            },
        }
    }

    /// Instantiate the selected effect.
    pub fn build(&self) -> Box<dyn Variant> {
        match self {
            Self::Evaporate { .. } => Box::new(Evaporate::new(self.timing())),
            Self::Scale { .. } => Box::new(Scale::new(self.timing())),
        }
    }
}

/// Engine configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EngineConfig {
    /// Effect to animate with.
    #[serde(default)]
    pub variant: VariantConfig,
    /// Ramp easing; accelerate/decelerate when unset.
    #[serde(default)]
    pub ease: Option<Ease>,
}

impl EngineConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json_str(s: &str) -> HTextResult<Self> {
        let cfg: Self = serde_json::from_str(s).map_err(|e| HTextError::serde(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Validate static invariants.
    pub fn validate(&self) -> HTextResult<()> {
        let timing = self.variant.timing();
        if !timing.char_time_ms.is_finite() || timing.char_time_ms <= 0.0 {
            return Err(HTextError::validation(
                "char_time_ms must be finite and > 0",
            ));
        }
        if timing.most_count == 0 {
            return Err(HTextError::validation("most_count must be > 0"));
        }
        Ok(())
    }

    /// Easing curve for the progress ramp.
    pub fn ease(&self) -> Ease {
        self.ease.unwrap_or(Ease::InOutSine)
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
