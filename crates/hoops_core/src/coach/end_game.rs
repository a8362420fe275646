//! End-Game Advisor
//!
//! Ordered rule list; the first rule that matches wins. There is no scoring,
//! the order is the tie-break.
//!
//! | # | possession | score          | clock  | extra          | action                 |
//! |---|------------|----------------|--------|----------------|------------------------|
//! | 1 | yes        | tied           | < 24 s |                | HoldForLastShot (4 s)  |
//! | 2 | yes        | down 1-3       | < 30 s |                | QuickTwo / QuickThree  |
//! | 3 | yes        | leading        | < 24 s |                | RunClock               |
//! | 4 | no         | up exactly 3   | < 15 s |                | FoulToPreventThree     |
//! | 5 | no         | up more than 3 | < 24 s |                | PlayStraightDefense    |
//! | 6 | no         | trailing       | < 24 s | fouls to give  | FoulToStopClock        |
//! | 7 | otherwise  |                |        |                | PlayNormal             |

use serde::{Deserialize, Serialize};

use crate::situation::GameSituation;

pub const LAST_SHOT_WINDOW_SECS: f32 = 24.0;
pub const CATCH_UP_WINDOW_SECS: f32 = 30.0;
pub const FOUL_UP_THREE_WINDOW_SECS: f32 = 15.0;
/// Shot clock to leave on the last possession of a tie game
pub const LAST_SHOT_TARGET_SHOT_CLOCK: u8 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EndGameAction {
    HoldForLastShot,
    QuickTwo,
    QuickThree,
    /// Milk the clock, attack to draw fouls
    RunClock,
    FoulToPreventThree,
    PlayStraightDefense,
    FoulToStopClock,
    PlayNormal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndGameDecision {
    pub action: EndGameAction,
    pub target_shot_clock: Option<u8>,
    pub description: String,
}

impl EndGameDecision {
    fn new(action: EndGameAction, description: &str) -> Self {
        Self { action, target_shot_clock: None, description: description.to_string() }
    }
}

pub struct EndGameAdvisor;

impl EndGameAdvisor {
    pub fn recommend(
        situation: &GameSituation,
        has_possession: bool,
        fouls_to_give: u8,
    ) -> EndGameDecision {
        let diff = situation.score_differential();
        let clock = situation.game_clock_secs;

        if has_possession {
            if diff == 0 && clock < LAST_SHOT_WINDOW_SECS {
                return EndGameDecision {
                    target_shot_clock: Some(LAST_SHOT_TARGET_SHOT_CLOCK),
                    ..EndGameDecision::new(EndGameAction::HoldForLastShot, "Hold for last shot")
                };
            }
            if (-3..=-1).contains(&diff) && clock < CATCH_UP_WINDOW_SECS {
                return if diff == -3 {
                    EndGameDecision::new(EndGameAction::QuickThree, "Quick three to tie")
                } else {
                    EndGameDecision::new(EndGameAction::QuickTwo, "Quick two, keep a possession")
                };
            }
            if diff > 0 && clock < LAST_SHOT_WINDOW_SECS {
                return EndGameDecision::new(EndGameAction::RunClock, "Run clock, draw a foul");
            }
        } else {
            if diff == 3 && clock < FOUL_UP_THREE_WINDOW_SECS {
                return EndGameDecision::new(
                    EndGameAction::FoulToPreventThree,
                    "Foul before the game-tying three",
                );
            }
            if diff > 3 && clock < LAST_SHOT_WINDOW_SECS {
                return EndGameDecision::new(
                    EndGameAction::PlayStraightDefense,
                    "Straight defense, no fouls",
                );
            }
            if diff < 0 && clock < LAST_SHOT_WINDOW_SECS && fouls_to_give > 0 {
                return EndGameDecision::new(EndGameAction::FoulToStopClock, "Foul to stop the clock");
            }
        }

        EndGameDecision::new(EndGameAction::PlayNormal, "Play normal")
    }
}
