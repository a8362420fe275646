//! Momentum tuning

use serde::{Deserialize, Serialize};

/// Hard ceiling for any configured momentum bound
pub const MOMENTUM_CEILING: u32 = 100;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MomentumConfig {
    /// Starting momentum (기본: 50)
    pub initial: u32,
    /// Upper bound (기본: 100)
    pub max: u32,
    /// Momentum swing per point scored (기본: 2)
    pub points_factor: u32,
    /// Momentum gained per defensive stop (기본: 3)
    pub stop_bonus: u32,
    /// Opponent run that warrants a timeout (기본: 8)
    pub run_timeout_trigger: u32,
}

impl Default for MomentumConfig {
    fn default() -> Self {
        Self { initial: 50, max: 100, points_factor: 2, stop_bonus: 3, run_timeout_trigger: 8 }
    }
}
