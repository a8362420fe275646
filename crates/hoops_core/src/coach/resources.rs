//! Resource Ledger - 경기당 소모 자원
//!
//! Timeouts, fouls to give, technical fouls and the coach's challenge.
//! Every operation reports failure through [`CoachError`] instead of
//! panicking; counters never go negative.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::ResourceConfig;
use crate::error::{CoachError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
pub enum TimeoutReason {
    /// 상대 런 끊기
    StopRun,
    Rest,
    DrawPlay,
    AdvanceBall,
    /// 자유투 직전 슈터 흔들기
    IceShooter,
    Strategy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChallengeType {
    OutOfBounds,
    Goaltending,
    PersonalFoul,
    BasketInterference,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeoutResult {
    pub timeouts_remaining: u8,
    pub reason: TimeoutReason,
    pub quarter: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChallengeResult {
    pub challenge_type: ChallengeType,
    pub won: bool,
    /// A lost challenge forfeits one timeout
    pub timeout_charged: bool,
    pub timeouts_remaining: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IntentionalFoulOutcome {
    /// Foul came out of the per-quarter budget
    NoFreeThrows { fouls_to_give_left: u8 },
    /// Budget exhausted; the opponent shoots
    FreeThrowsAwarded,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceLedger {
    timeouts_remaining: u8,
    timeouts_used_first_half: u8,
    technical_fouls: u8,
    challenge_used: bool,
    fouls_to_give: u8,
    fouls_to_give_per_quarter: u8,
}

impl ResourceLedger {
    pub fn new(config: &ResourceConfig) -> Self {
        Self {
            timeouts_remaining: config.timeouts_per_game,
            timeouts_used_first_half: 0,
            technical_fouls: 0,
            challenge_used: false,
            fouls_to_give: config.fouls_to_give_per_quarter,
            fouls_to_give_per_quarter: config.fouls_to_give_per_quarter,
        }
    }

    pub fn timeouts_remaining(&self) -> u8 {
        self.timeouts_remaining
    }

    pub fn timeouts_used_first_half(&self) -> u8 {
        self.timeouts_used_first_half
    }

    pub fn technical_fouls(&self) -> u8 {
        self.technical_fouls
    }

    pub fn challenge_used(&self) -> bool {
        self.challenge_used
    }

    pub fn fouls_to_give(&self) -> u8 {
        self.fouls_to_give
    }

    pub fn call_timeout(&mut self, reason: TimeoutReason, quarter: u8) -> Result<TimeoutResult> {
        if self.timeouts_remaining == 0 {
            return Err(CoachError::NoTimeoutsLeft);
        }
        self.timeouts_remaining -= 1;
        if quarter <= 2 {
            self.timeouts_used_first_half += 1;
        }
        Ok(TimeoutResult { timeouts_remaining: self.timeouts_remaining, reason, quarter })
    }

    /// One challenge per game, and it must be backed by a timeout that is
    /// forfeited if the call stands.
    pub fn use_challenge(
        &mut self,
        challenge_type: ChallengeType,
        success_probability: f64,
        rng: &mut impl Rng,
    ) -> Result<ChallengeResult> {
        if self.challenge_used {
            return Err(CoachError::ChallengeAlreadyUsed);
        }
        if self.timeouts_remaining == 0 {
            return Err(CoachError::NoTimeoutsForChallenge);
        }

        self.challenge_used = true;
        let won = rng.gen::<f64>() < success_probability;
        if !won {
            self.timeouts_remaining -= 1;
        }

        Ok(ChallengeResult {
            challenge_type,
            won,
            timeout_charged: !won,
            timeouts_remaining: self.timeouts_remaining,
        })
    }

    pub fn intentional_foul(&mut self) -> IntentionalFoulOutcome {
        if self.fouls_to_give > 0 {
            self.fouls_to_give -= 1;
            IntentionalFoulOutcome::NoFreeThrows { fouls_to_give_left: self.fouls_to_give }
        } else {
            IntentionalFoulOutcome::FreeThrowsAwarded
        }
    }

    pub fn advance_quarter(&mut self) {
        self.fouls_to_give = self.fouls_to_give_per_quarter;
    }

    pub(crate) fn add_technical_foul(&mut self) -> u8 {
        self.technical_fouls = self.technical_fouls.saturating_add(1);
        self.technical_fouls
    }
}
