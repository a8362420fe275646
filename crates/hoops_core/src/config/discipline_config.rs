//! Technical foul / ejection odds

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DisciplineConfig {
    /// Technical chance with a clean record (기본: 0.30)
    pub first_technical_probability: f64,
    /// Technical chance once already warned (기본: 0.60)
    pub repeat_technical_probability: f64,
    /// Technicals that eject the coach (기본: 2)
    pub ejection_threshold: u8,
    /// Chance a technical rallies the team (기본: 0.60)
    pub rally_probability: f64,
    pub ejection_morale: i32,
    pub rally_morale: i32,
    pub no_rally_morale: i32,
    /// Morale when the argument lands without a technical
    pub point_made_morale: i32,
}

impl Default for DisciplineConfig {
    fn default() -> Self {
        Self {
            first_technical_probability: 0.30,
            repeat_technical_probability: 0.60,
            ejection_threshold: 2,
            rally_probability: 0.60,
            ejection_morale: -10,
            rally_morale: 8,
            no_rally_morale: -3,
            point_made_morale: 3,
        }
    }
}
