//! Game-state snapshot pushed in by the match simulator.

use serde::{Deserialize, Serialize};

use crate::config::ClutchConfig;

/// Read-only view of the game at one event.
///
/// Scores are from the coached team's perspective: a positive
/// [`score_differential`](Self::score_differential) means leading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameSituation {
    /// 1-4 regulation, 5+ overtime
    pub quarter: u8,
    pub game_clock_secs: f32,
    pub shot_clock_secs: f32,
    pub team_score: u16,
    pub opponent_score: u16,
    pub has_possession: bool,
}

impl Default for GameSituation {
    fn default() -> Self {
        Self {
            quarter: 1,
            game_clock_secs: 720.0,
            shot_clock_secs: 24.0,
            team_score: 0,
            opponent_score: 0,
            has_possession: false,
        }
    }
}

impl GameSituation {
    pub fn score_differential(&self) -> i32 {
        self.team_score as i32 - self.opponent_score as i32
    }

    pub fn is_clutch_time(&self, clutch: &ClutchConfig) -> bool {
        self.quarter >= clutch.min_quarter
            && self.game_clock_secs < clutch.max_clock_secs
            && self.score_differential().abs() <= clutch.max_margin
    }

    pub fn is_first_half(&self) -> bool {
        self.quarter <= 2
    }

    pub fn is_overtime(&self) -> bool {
        self.quarter > 4
    }
}
