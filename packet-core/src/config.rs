use serde::{Deserialize, Serialize};

use crate::color::Color;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{field} must be finite, got {value}")]
    NotFinite { field: &'static str, value: f32 },
    #[error("{field} must be greater than zero, got {value}")]
    NotPositive { field: &'static str, value: f32 },
    #[error("{field} must lie in [0, 1], got {value}")]
    OutOfUnitRange { field: &'static str, value: f32 },
    #[error("failed to parse config: {0}")]
    Parse(String),
}

/// Packet colours per transport kind.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub tcp: Color,
    pub udp: Color,
    pub other: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            tcp: Color::rgb(0x33, 0x99, 0xff),
            udp: Color::rgb(0xff, 0x99, 0x33),
            other: Color::rgb(0x99, 0x99, 0x99),
        }
    }
}

/// Tunables for a [`crate::compositor::Compositor`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Seed for the jitter rng, so a replayed event stream lays out identically.
    pub seed: u64,
    /// Repulsion cutoff distance.
    pub spread: f32,
    pub repel_force: f32,
    /// Optional upper distance bound for repulsion; `None` leaves only `spread`.
    pub max_spread: Option<f32>,
    /// Fraction of the force accumulator lost per second.
    pub damping: f32,
    /// Per-frame factor pulling the viewport toward the node centroid.
    pub view_smoothing: f32,
    pub zoom: f32,
    /// Clamp the packet ease factor to `[0, 1]` instead of letting it overshoot.
    pub clamp_ease: bool,
    /// Side of the square around the view centre where new nodes appear.
    pub spawn_spread: f32,
    pub palette: Palette,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            spread: 150.0,
            repel_force: 1000.0,
            max_spread: None,
            damping: 0.4,
            view_smoothing: 0.65,
            zoom: 1.0,
            clamp_ease: false,
            spawn_spread: 400.0,
            palette: Palette::default(),
        }
    }
}

impl SimConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let cfg: SimConfig =
            serde_json::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Checks that every numeric field is usable by the physics and view code.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("spread", self.spread),
            ("repel_force", self.repel_force),
            ("zoom", self.zoom),
            ("spawn_spread", self.spawn_spread),
        ];
        for (field, value) in positive {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { field, value });
            }
            if value <= 0.0 {
                return Err(ConfigError::NotPositive { field, value });
            }
        }

        if let Some(value) = self.max_spread {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite {
                    field: "max_spread",
                    value,
                });
            }
            if value <= 0.0 {
                return Err(ConfigError::NotPositive {
                    field: "max_spread",
                    value,
                });
            }
        }

        for (field, value) in [
            ("damping", self.damping),
            ("view_smoothing", self.view_smoothing),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::OutOfUnitRange { field, value });
            }
        }
        Ok(())
    }
}
