//! Rotation and foul-trouble thresholds

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RotationConfig {
    /// Energy below which a player is flagged (기본: 70, clamp 50-100)
    pub fatigue_threshold: f32,
    /// Players in the rotation (기본: 9, clamp 7-12)
    pub rotation_depth: u8,
    /// Foul trouble in the first half (기본: 2)
    pub first_half_foul_trouble: u8,
    /// Foul trouble in the second half and overtime (기본: 4)
    pub second_half_foul_trouble: u8,
    /// Personal fouls that disqualify a player (기본: 6)
    pub foul_out_limit: u8,
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            fatigue_threshold: 70.0,
            rotation_depth: 9,
            first_half_foul_trouble: 2,
            second_half_foul_trouble: 4,
            foul_out_limit: 6,
        }
    }
}

impl RotationConfig {
    pub fn foul_trouble_threshold(&self, quarter: u8) -> u8 {
        if quarter <= 2 {
            self.first_half_foul_trouble
        } else {
            self.second_half_foul_trouble
        }
    }
}
