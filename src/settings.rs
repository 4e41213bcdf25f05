//! Presentation settings
//!
//! Nothing here changes gameplay outcomes. The only knob the simulation reads
//! is the particle budget for explosions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Visual quality tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum QualityPreset {
    Low,
    #[default]
    Medium,
    High,
}

impl QualityPreset {
    /// Live particle cap for this tier
    pub fn particle_budget(self) -> usize {
        match self {
            Self::Low => 100,
            Self::Medium => 500,
            Self::High => 2000,
        }
    }
}

impl fmt::Display for QualityPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        })
    }
}

impl FromStr for QualityPreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" | "med" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(format!("unknown quality preset '{other}' (low, medium, high)")),
        }
    }
}

/// Presentation preferences handed to a new session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub quality: QualityPreset,
    /// Turn explosion debris off entirely
    pub explosions: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_preset(QualityPreset::default())
    }
}

impl Settings {
    pub fn from_preset(quality: QualityPreset) -> Self {
        Self {
            quality,
            explosions: true,
        }
    }

    pub fn particle_budget(&self) -> usize {
        if self.explosions {
            self.quality.particle_budget()
        } else {
            0
        }
    }
}
