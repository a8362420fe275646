//! Scripted game driver
//!
//! A YAML script stands in for the match simulator: it pushes game state,
//! scoring and coaching requests into a [`CoachEngine`] step by step and
//! collects what came back.
//!
//! ```yaml
//! seed: 7
//! lineup: [pg, sg, sf, pf, c]
//! strategy:
//!   pace_preference: Fast
//!   offensive_system: SpaceAndPace
//!   defensive_scheme: TwoThreeZone
//! steps:
//!   - action: opponent_points
//!     points: 3
//!   - action: timeout
//!     reason: StopRun
//!   - action: quick_action
//!     quick_action: ShooterAction
//!     primary: sg
//! ```

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use hoops_core::coach::{
    ChallengeType, DoubleTeamTrigger, MatchupPriority, PlayerCondition, TimeoutReason,
};
use hoops_core::tactics::{
    DefensiveScheme, Intensity, OffensiveScheme, Pace, PickAndRollCoverage, TransitionDefense,
};
use hoops_core::{
    CoachEngine, CoachError, CoachEvent, GameSituation, PlayerId, PlaybookLibrary, QuickAction,
    TeamStrategy,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{debug, info};

/// Morale handed to `argue` steps that don't set one
pub const DEFAULT_MORALE: i32 = 50;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameScript {
    /// Seed for every random draw in the run
    pub seed: u64,
    pub lineup: Vec<PlayerId>,
    pub strategy: Option<TeamStrategy>,
    pub playbook: Option<PlaybookLibrary>,
    pub steps: Vec<Step>,
}

impl GameScript {
    pub fn from_yaml_str(src: &str) -> Result<Self> {
        serde_yaml::from_str(src).context("Failed to parse game script")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let src = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read script: {}", path.display()))?;
        Self::from_yaml_str(&src)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Step {
    Situation(GameSituation),
    AdvanceQuarter,
    TeamPoints { points: u32 },
    OpponentPoints { points: u32 },
    Stop,
    Timeout { reason: TimeoutReason },
    Challenge { challenge_type: ChallengeType, probability: f64 },
    IntentionalFoul,
    Offense { scheme: OffensiveScheme },
    Defense { scheme: DefensiveScheme },
    Pace { pace: Pace },
    Intensity { intensity: Intensity },
    Coverage { coverage: PickAndRollCoverage },
    TransitionDefense { level: TransitionDefense },
    Press { enabled: bool },
    FoulStrategy { enabled: bool },
    Matchup {
        defender: PlayerId,
        opponent: PlayerId,
        #[serde(default)]
        priority: MatchupPriority,
    },
    DoubleTeam {
        opponent: PlayerId,
        #[serde(default)]
        trigger: DoubleTeamTrigger,
    },
    ClearDoubleTeam { opponent: PlayerId },
    Substitute { player_out: PlayerId, player_in: PlayerId },
    SubstituteMany { players_out: Vec<PlayerId>, players_in: Vec<PlayerId> },
    Suggestions {
        #[serde(default)]
        conditions: HashMap<PlayerId, PlayerCondition>,
    },
    QuickAction {
        quick_action: QuickAction,
        primary: Option<PlayerId>,
        secondary: Option<PlayerId>,
    },
    SetPlay { id: String, primary: Option<PlayerId> },
    AtoPlay { primary: Option<PlayerId> },
    Recommend,
    Argue {
        #[serde(default = "default_morale")]
        morale: i32,
    },
    EndGame,
}

fn default_morale() -> i32 {
    DEFAULT_MORALE
}

/// One printed line per step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepReport {
    pub step: usize,
    pub action: String,
    pub outcome: Value,
    pub events: Vec<CoachEvent>,
}

pub struct ScriptRunner {
    engine: CoachEngine,
    lineup: Vec<PlayerId>,
    rng: ChaCha8Rng,
}

impl ScriptRunner {
    pub fn new(mut engine: CoachEngine, script: &GameScript) -> Self {
        if let Some(playbook) = &script.playbook {
            engine.set_playbook(Some(Box::new(playbook.clone())));
        }
        if let Some(strategy) = script.strategy {
            engine.apply_team_strategy(strategy);
        }
        Self {
            engine,
            lineup: script.lineup.clone(),
            rng: ChaCha8Rng::seed_from_u64(script.seed),
        }
    }

    pub fn engine(&self) -> &CoachEngine {
        &self.engine
    }

    pub fn lineup(&self) -> &[PlayerId] {
        &self.lineup
    }

    /// Recoverable rejections become outcomes; anything else aborts the run.
    pub fn run_step(&mut self, index: usize, step: &Step) -> Result<StepReport> {
        let action = step_name(step)?;
        let outcome = match self.apply(step) {
            Ok(outcome) => outcome,
            Err(err) => match err.downcast_ref::<CoachError>() {
                Some(rejection) if rejection.is_recoverable() => {
                    debug!(step = index, %action, "step rejected: {rejection}");
                    json!({ "rejected": rejection.to_string(), "kind": format!("{:?}", rejection.kind()) })
                }
                _ => return Err(err.context(format!("Step {index} ({action}) failed"))),
            },
        };
        Ok(StepReport { step: index, action, outcome, events: self.engine.drain_events() })
    }

    fn apply(&mut self, step: &Step) -> Result<Value> {
        let engine = &mut self.engine;
        let outcome = match step {
            Step::Situation(situation) => {
                engine.update_game_state(*situation);
                json!({ "clutch": engine.is_clutch_time(), "differential": engine.score_differential() })
            }
            Step::AdvanceQuarter => {
                engine.advance_quarter();
                to_value(engine.situation())?
            }
            Step::TeamPoints { points } => {
                engine.record_team_points(*points);
                json!({ "momentum": engine.momentum().momentum() })
            }
            Step::OpponentPoints { points } => {
                engine.record_opponent_points(*points);
                json!({
                    "momentum": engine.momentum().momentum(),
                    "timeout_advice": engine.timeout_advice(),
                })
            }
            Step::Stop => {
                engine.record_defensive_stop();
                json!({ "momentum": engine.momentum().momentum() })
            }
            Step::Timeout { reason } => to_value(&engine.call_timeout(*reason)?)?,
            Step::Challenge { challenge_type, probability } => {
                to_value(&engine.use_challenge(*challenge_type, *probability, &mut self.rng)?)?
            }
            Step::IntentionalFoul => to_value(&engine.intentional_foul())?,
            Step::Offense { scheme } => {
                engine.set_offense(*scheme);
                Value::Null
            }
            Step::Defense { scheme } => {
                engine.set_defense(*scheme);
                Value::Null
            }
            Step::Pace { pace } => {
                engine.set_pace(*pace);
                Value::Null
            }
            Step::Intensity { intensity } => {
                engine.set_intensity(*intensity);
                Value::Null
            }
            Step::Coverage { coverage } => {
                engine.set_pick_and_roll_coverage(*coverage);
                Value::Null
            }
            Step::TransitionDefense { level } => {
                engine.set_transition_defense(*level);
                Value::Null
            }
            Step::Press { enabled } => {
                engine.set_press(*enabled);
                Value::Null
            }
            Step::FoulStrategy { enabled } => {
                engine.set_intentional_foul_strategy(*enabled);
                Value::Null
            }
            Step::Matchup { defender, opponent, priority } => {
                to_value(&engine.set_defensive_matchup(defender.clone(), opponent.clone(), *priority))?
            }
            Step::DoubleTeam { opponent, trigger } => {
                engine.set_double_team(opponent.clone(), *trigger);
                Value::Null
            }
            Step::ClearDoubleTeam { opponent } => {
                engine.clear_double_team(opponent);
                json!({ "target": engine.tactics().double_team_target })
            }
            Step::Substitute { player_out, player_in } => {
                let result = engine.substitute(player_out, player_in, &self.lineup)?;
                self.lineup = result.lineup.clone();
                to_value(&result)?
            }
            Step::SubstituteMany { players_out, players_in } => {
                let result = engine.substitute_multiple(players_out, players_in, &self.lineup)?;
                self.lineup = result.lineup.clone();
                to_value(&result)?
            }
            Step::Suggestions { conditions } => {
                to_value(&engine.substitution_suggestions(&self.lineup, conditions))?
            }
            Step::QuickAction { quick_action, primary, secondary } => {
                to_value(&engine.call_quick_action(*quick_action, primary.clone(), secondary.clone()))?
            }
            Step::SetPlay { id, primary } => to_value(&engine.call_set_play(id, primary.clone())?)?,
            Step::AtoPlay { primary } => to_value(&engine.call_ato_play(primary.clone()))?,
            Step::Recommend => to_value(&engine.recommended_plays())?,
            Step::Argue { morale } => to_value(&engine.argue_call(*morale, &mut self.rng))?,
            Step::EndGame => to_value(&engine.end_game_recommendation())?,
        };
        Ok(outcome)
    }
}

fn to_value<T: Serialize + ?Sized>(value: &T) -> Result<Value> {
    serde_json::to_value(value).context("Failed to serialize step outcome")
}

fn step_name(step: &Step) -> Result<String> {
    let value = serde_json::to_value(step)?;
    Ok(value["action"].as_str().unwrap_or_default().to_string())
}

/// Run every step of `script` against `engine`.
pub fn run_script(engine: CoachEngine, script: &GameScript) -> Result<Vec<StepReport>> {
    let mut runner = ScriptRunner::new(engine, script);
    // strategy application happens before step 0; keep its events
    let mut reports = Vec::with_capacity(script.steps.len() + 1);
    let setup = runner.engine.drain_events();
    if !setup.is_empty() {
        reports.push(StepReport {
            step: 0,
            action: "setup".to_string(),
            outcome: Value::Null,
            events: setup,
        });
    }
    for (i, step) in script.steps.iter().enumerate() {
        reports.push(runner.run_step(i + 1, step)?);
    }
    info!(steps = script.steps.len(), "script finished");
    Ok(reports)
}
