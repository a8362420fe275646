//! Serializable engine state for the save/load collaborator.
//!
//! Collaborators (playbook, observers) and configuration are not part of the
//! snapshot; they are supplied again on restore.

use serde::{Deserialize, Serialize};

use super::matchups::MatchupRegistry;
use super::momentum::MomentumTracker;
use super::resources::ResourceLedger;
use super::substitutions::{
    SubstitutionPlan, MAX_FATIGUE_THRESHOLD, MAX_ROTATION_DEPTH, MIN_FATIGUE_THRESHOLD,
    MIN_ROTATION_DEPTH,
};
use crate::config::CoachConfig;
use crate::error::{CoachError, Result};
use crate::playbook::PlayCall;
use crate::situation::GameSituation;
use crate::tactics::{TacticalState, TeamStrategy};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoachSnapshot {
    pub situation: GameSituation,
    pub ledger: ResourceLedger,
    pub momentum: MomentumTracker,
    pub matchups: MatchupRegistry,
    pub substitution_plan: SubstitutionPlan,
    pub tactics: TacticalState,
    pub strategy: Option<TeamStrategy>,
    pub last_play_call: Option<PlayCall>,
    pub just_called_timeout: bool,
}

impl CoachSnapshot {
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| CoachError::Snapshot(e.to_string()))
    }

    pub fn from_json(src: &str) -> Result<Self> {
        serde_json::from_str(src).map_err(|e| CoachError::Snapshot(e.to_string()))
    }

    /// Reject state the engine could never have reached under `config`.
    pub fn check(&self, config: &CoachConfig) -> Result<()> {
        let ledger = &self.ledger;
        let res = &config.resources;
        let bad = |msg: String| Err(CoachError::Snapshot(msg));

        if self.situation.quarter == 0 {
            return bad("quarter must start at 1".into());
        }
        if self.momentum.momentum() > config.momentum.max {
            return bad(format!(
                "momentum {} above max {}",
                self.momentum.momentum(),
                config.momentum.max
            ));
        }
        if ledger.timeouts_remaining() > res.timeouts_per_game {
            return bad(format!(
                "{} timeouts remaining, budget is {}",
                ledger.timeouts_remaining(),
                res.timeouts_per_game
            ));
        }
        if ledger.timeouts_used_first_half() > res.timeouts_per_game - ledger.timeouts_remaining() {
            return bad("first-half timeouts exceed timeouts used".into());
        }
        if ledger.fouls_to_give() > res.fouls_to_give_per_quarter {
            return bad(format!(
                "{} fouls to give, budget is {}",
                ledger.fouls_to_give(),
                res.fouls_to_give_per_quarter
            ));
        }
        if ledger.technical_fouls() > config.discipline.ejection_threshold {
            return bad(format!(
                "{} technicals, ejection at {}",
                ledger.technical_fouls(),
                config.discipline.ejection_threshold
            ));
        }
        let plan = &self.substitution_plan;
        if !(MIN_FATIGUE_THRESHOLD..=MAX_FATIGUE_THRESHOLD).contains(&plan.fatigue_threshold())
            || !(MIN_ROTATION_DEPTH..=MAX_ROTATION_DEPTH).contains(&plan.rotation_depth())
        {
            return bad("substitution plan out of range".into());
        }
        Ok(())
    }
}
