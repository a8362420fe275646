//! Disciplinary Model - 심판 항의, 테크니컬 파울, 퇴장
//!
//! Arguing a call draws a technical with a probability that rises after the
//! first one. Reaching the ejection threshold ends the coach's night: every
//! later argument is a no-op.
//!
//! Randomness always comes in through the `rng` argument.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::resources::ResourceLedger;
use crate::config::DisciplineConfig;

pub const MIN_MORALE: i32 = 0;
pub const MAX_MORALE: i32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArgueOutcome {
    /// Coach is already gone; nothing changes
    AlreadyEjected,
    /// The argument landed without drawing a technical
    NoTechnical { morale_change: i32, morale: i32 },
    Technical { technical_fouls: u8, rallied: bool, morale_change: i32, morale: i32 },
    Ejected { technical_fouls: u8, morale_change: i32, morale: i32 },
}

impl ArgueOutcome {
    pub fn morale_change(&self) -> i32 {
        match self {
            ArgueOutcome::AlreadyEjected => 0,
            ArgueOutcome::NoTechnical { morale_change, .. }
            | ArgueOutcome::Technical { morale_change, .. }
            | ArgueOutcome::Ejected { morale_change, .. } => *morale_change,
        }
    }

    pub fn drew_technical(&self) -> bool {
        matches!(self, ArgueOutcome::Technical { .. } | ArgueOutcome::Ejected { .. })
    }

    pub fn is_ejection(&self) -> bool {
        matches!(self, ArgueOutcome::Ejected { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DisciplinaryModel {
    config: DisciplineConfig,
}

impl DisciplinaryModel {
    pub fn new(config: &DisciplineConfig) -> Self {
        Self { config: config.clone() }
    }

    pub fn is_ejected(&self, ledger: &ResourceLedger) -> bool {
        ledger.technical_fouls() >= self.config.ejection_threshold
    }

    pub fn technical_probability(&self, ledger: &ResourceLedger) -> f64 {
        if ledger.technical_fouls() == 0 {
            self.config.first_technical_probability
        } else {
            self.config.repeat_technical_probability
        }
    }

    pub fn argue_call(
        &self,
        ledger: &mut ResourceLedger,
        team_morale: i32,
        rng: &mut impl Rng,
    ) -> ArgueOutcome {
        if self.is_ejected(ledger) {
            return ArgueOutcome::AlreadyEjected;
        }

        // reported change is what actually landed after clamping
        let start = team_morale.clamp(MIN_MORALE, MAX_MORALE);
        let apply = |delta: i32| {
            let morale = start.saturating_add(delta).clamp(MIN_MORALE, MAX_MORALE);
            (morale - start, morale)
        };

        if rng.gen::<f64>() >= self.technical_probability(ledger) {
            let (morale_change, morale) = apply(self.config.point_made_morale);
            return ArgueOutcome::NoTechnical { morale_change, morale };
        }

        let technical_fouls = ledger.add_technical_foul();
        if technical_fouls >= self.config.ejection_threshold {
            let (morale_change, morale) = apply(self.config.ejection_morale);
            info!(technical_fouls, "coach ejected");
            return ArgueOutcome::Ejected { technical_fouls, morale_change, morale };
        }

        let rallied = rng.gen::<f64>() < self.config.rally_probability;
        let delta = if rallied { self.config.rally_morale } else { self.config.no_rally_morale };
        let (morale_change, morale) = apply(delta);
        info!(technical_fouls, rallied, "technical foul on the coach");
        ArgueOutcome::Technical { technical_fouls, rallied, morale_change, morale }
    }
}
