//! Overridable scoring configuration.
//!
//! Weights, multipliers, verdict scores and the event catalog all default
//! to the built-in tables and can be replaced from TOML. Omitted sections
//! and fields keep their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::{EventCategory, default_catalog};
use crate::error::EventError;

/// Weights for the dasha scorer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Contribution weight per dasha level, Mahadasha first.
    pub level_weights: [f64; 4],
    /// Multiplier per signification level, level 1 first.
    pub strength_multipliers: [f64; 4],
    /// Fraction of the running score added when every level matches.
    pub synergy_fraction: f64,
    /// Flat points when the transiting Moon's star lord matches.
    pub transit_bonus: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            level_weights: [40.0, 30.0, 20.0, 10.0],
            strength_multipliers: [1.5, 1.2, 1.0, 0.8],
            synergy_fraction: 0.2,
            transit_bonus: 5.0,
        }
    }
}

/// Strength score attached to each promise verdict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromiseConfig {
    pub promised: u8,
    pub promised_with_obstacles: u8,
    pub neutral: u8,
    pub denied: u8,
}

impl Default for PromiseConfig {
    fn default() -> Self {
        Self {
            promised: 90,
            promised_with_obstacles: 60,
            neutral: 40,
            denied: 10,
        }
    }
}

/// Complete engine configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KpConfig {
    pub scoring: ScoringConfig,
    pub promise: PromiseConfig,
    pub events: Vec<EventCategory>,
}

impl Default for KpConfig {
    fn default() -> Self {
        Self {
            scoring: ScoringConfig::default(),
            promise: PromiseConfig::default(),
            events: default_catalog(),
        }
    }
}

impl KpConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self, EventError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        debug!(events = config.events.len(), "configuration parsed");
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, EventError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        debug!(path = %path.display(), "loading configuration");
        Self::from_toml_str(&text)
    }

    /// Check internal consistency.
    pub fn validate(&self) -> Result<(), EventError> {
        let invalid = |msg: String| Err(EventError::InvalidConfig(msg));
        let s = &self.scoring;

        if s.level_weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return invalid("level weights must be finite and non-negative".into());
        }
        if s.strength_multipliers.iter().any(|m| !m.is_finite() || *m < 0.0) {
            return invalid("strength multipliers must be finite and non-negative".into());
        }
        if s.strength_multipliers[0] <= 0.0 {
            return invalid("level 1 strength multiplier must be positive".into());
        }
        if !s.synergy_fraction.is_finite() || s.synergy_fraction < 0.0 {
            return invalid("synergy fraction must be finite and non-negative".into());
        }
        if !s.transit_bonus.is_finite() || s.transit_bonus < 0.0 {
            return invalid("transit bonus must be finite and non-negative".into());
        }
        let p = &self.promise;
        if [p.promised, p.promised_with_obstacles, p.neutral, p.denied]
            .iter()
            .any(|&v| v > 100)
        {
            return invalid("promise scores must be within 0..=100".into());
        }

        if self.events.is_empty() {
            return invalid("event catalog is empty".into());
        }
        for (i, e) in self.events.iter().enumerate() {
            if e.id.is_empty() {
                return invalid(format!("event #{i} has an empty id"));
            }
            if self.events[..i].iter().any(|o| o.id == e.id) {
                return invalid(format!("duplicate event id '{}'", e.id));
            }
            if e.houses.is_empty() {
                return invalid(format!("event '{}' requires no houses", e.id));
            }
            if let Some(h) = e.houses.iter().find(|h| !(1..=12).contains(*h)) {
                return invalid(format!("event '{}' has house {h} outside 1..=12", e.id));
            }
            if !e.requires(e.primary_house) {
                return invalid(format!(
                    "event '{}' primary house {} is not a required house",
                    e.id, e.primary_house
                ));
            }
        }
        Ok(())
    }
}
