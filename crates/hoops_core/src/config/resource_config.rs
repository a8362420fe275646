//! Per-game resource budgets

use serde::{Deserialize, Serialize};

/// 경기당 자원 한도
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ResourceConfig {
    /// Timeouts per game (기본: 7)
    pub timeouts_per_game: u8,
    /// Fouls to give, reset every quarter (기본: 4)
    pub fouls_to_give_per_quarter: u8,
    /// Regulation quarter length in seconds (기본: 720)
    pub quarter_length_secs: f32,
    /// Overtime period length in seconds (기본: 300)
    pub overtime_length_secs: f32,
    /// Full shot clock in seconds (기본: 24)
    pub shot_clock_secs: f32,
}

impl Default for ResourceConfig {
    fn default() -> Self {
        Self {
            timeouts_per_game: 7,
            fouls_to_give_per_quarter: 4,
            quarter_length_secs: 720.0,
            overtime_length_secs: 300.0,
            shot_clock_secs: 24.0,
        }
    }
}

impl ResourceConfig {
    /// Length of the given period; quarters past the fourth are overtime.
    pub fn period_length_secs(&self, quarter: u8) -> f32 {
        if quarter > 4 {
            self.overtime_length_secs
        } else {
            self.quarter_length_secs
        }
    }
}
