//! Coach Engine - 한 팀, 한 경기의 코칭 결정 엔진
//!
//! Composition root for the ledger, momentum, matchups, substitution plan,
//! tactical state, play calling and discipline. The match simulator pushes
//! [`GameSituation`]s in and records scoring events; decisions come back as
//! return values and as [`CoachEvent`]s.
//!
//! Single-threaded and synchronous. One engine per team per match; nothing
//! is shared between instances. Probabilistic calls take the RNG as an
//! argument so a seeded generator replays a game exactly.

use std::collections::HashMap;
use std::fmt;

use rand::Rng;
use tracing::{debug, info, warn};

use super::discipline::{ArgueOutcome, DisciplinaryModel};
use super::end_game::{EndGameAdvisor, EndGameDecision};
use super::events::{CoachEvent, CoachObserver, EventBus};
use super::matchups::{DoubleTeamTrigger, Matchup, MatchupPriority, MatchupRegistry};
use super::momentum::MomentumTracker;
use super::resources::{
    ChallengeResult, ChallengeType, IntentionalFoulOutcome, ResourceLedger, TimeoutReason,
    TimeoutResult,
};
use super::snapshot::CoachSnapshot;
use super::substitutions::{
    PlayerCondition, SubstitutionPlan, SubstitutionResult, SubstitutionSuggestion,
};
use crate::config::CoachConfig;
use crate::error::Result;
use crate::playbook::{Play, PlayCall, PlayCallDispatcher, PlaySituation, Playbook, QuickAction};
use crate::situation::GameSituation;
use crate::tactics::{
    DefensiveScheme, Intensity, OffensiveScheme, Pace, PickAndRollCoverage, TacticalState,
    TeamStrategy, TransitionDefense,
};
use crate::PlayerId;

pub struct CoachEngine {
    config: CoachConfig,
    situation: GameSituation,
    ledger: ResourceLedger,
    momentum: MomentumTracker,
    matchups: MatchupRegistry,
    plan: SubstitutionPlan,
    tactics: TacticalState,
    strategy: Option<TeamStrategy>,
    discipline: DisciplinaryModel,
    dispatcher: PlayCallDispatcher,
    last_play_call: Option<PlayCall>,
    just_called_timeout: bool,
    events: EventBus,
}

impl fmt::Debug for CoachEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CoachEngine")
            .field("situation", &self.situation)
            .field("ledger", &self.ledger)
            .field("momentum", &self.momentum)
            .field("tactics", &self.tactics)
            .field("dispatcher", &self.dispatcher)
            .field("observers", &self.events.observer_count())
            .finish()
    }
}

impl CoachEngine {
    /// Fails only on an invalid configuration.
    pub fn new(config: CoachConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::assemble(config, PlayCallDispatcher::new(), EventBus::new()))
    }

    pub fn with_defaults() -> Self {
        Self::assemble(CoachConfig::standard(), PlayCallDispatcher::new(), EventBus::new())
    }

    fn assemble(config: CoachConfig, dispatcher: PlayCallDispatcher, events: EventBus) -> Self {
        let situation = GameSituation {
            game_clock_secs: config.resources.quarter_length_secs,
            shot_clock_secs: config.resources.shot_clock_secs,
            ..Default::default()
        };
        Self {
            situation,
            ledger: ResourceLedger::new(&config.resources),
            momentum: MomentumTracker::new(&config.momentum),
            matchups: MatchupRegistry::new(),
            plan: SubstitutionPlan::new(&config.rotation),
            tactics: TacticalState::new(),
            strategy: None,
            discipline: DisciplinaryModel::new(&config.discipline),
            dispatcher,
            last_play_call: None,
            just_called_timeout: false,
            events,
            config,
        }
    }

    pub fn with_playbook(mut self, playbook: Box<dyn Playbook>) -> Self {
        self.dispatcher.set_playbook(Some(playbook));
        self
    }

    pub fn set_playbook(&mut self, playbook: Option<Box<dyn Playbook>>) {
        self.dispatcher.set_playbook(playbook);
    }

    pub fn subscribe(&mut self, observer: Box<dyn CoachObserver>) {
        self.events.subscribe(observer);
    }

    pub fn drain_events(&mut self) -> Vec<CoachEvent> {
        self.events.drain()
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn config(&self) -> &CoachConfig {
        &self.config
    }

    pub fn situation(&self) -> &GameSituation {
        &self.situation
    }

    pub fn ledger(&self) -> &ResourceLedger {
        &self.ledger
    }

    pub fn momentum(&self) -> &MomentumTracker {
        &self.momentum
    }

    pub fn matchups(&self) -> &MatchupRegistry {
        &self.matchups
    }

    pub fn substitution_plan(&self) -> &SubstitutionPlan {
        &self.plan
    }

    pub fn substitution_plan_mut(&mut self) -> &mut SubstitutionPlan {
        &mut self.plan
    }

    pub fn tactics(&self) -> &TacticalState {
        &self.tactics
    }

    pub fn strategy(&self) -> Option<&TeamStrategy> {
        self.strategy.as_ref()
    }

    pub fn last_play_call(&self) -> Option<&PlayCall> {
        self.last_play_call.as_ref()
    }

    pub fn just_called_timeout(&self) -> bool {
        self.just_called_timeout
    }

    pub fn score_differential(&self) -> i32 {
        self.situation.score_differential()
    }

    pub fn is_clutch_time(&self) -> bool {
        self.situation.is_clutch_time(&self.config.clutch)
    }

    pub fn is_coach_ejected(&self) -> bool {
        self.discipline.is_ejected(&self.ledger)
    }

    // ========================================================================
    // Game flow
    // ========================================================================

    /// Accepts a snapshot at any point. A later quarter resets fouls to give.
    pub fn update_game_state(&mut self, situation: GameSituation) {
        if situation.quarter > self.situation.quarter {
            debug!(from = self.situation.quarter, to = situation.quarter, "quarter change");
            self.ledger.advance_quarter();
        }
        self.situation = situation;
    }

    pub fn advance_quarter(&mut self) {
        let quarter = self.situation.quarter.saturating_add(1);
        self.situation.quarter = quarter;
        self.situation.game_clock_secs = self.config.resources.period_length_secs(quarter);
        self.situation.shot_clock_secs = self.config.resources.shot_clock_secs;
        self.ledger.advance_quarter();
        debug!(quarter, "advanced quarter");
    }

    pub fn record_team_points(&mut self, points: u32) {
        self.momentum.record_team_points(points);
    }

    pub fn record_opponent_points(&mut self, points: u32) {
        self.momentum.record_opponent_points(points);
        if let Some(reason) = self.momentum.timeout_advice() {
            debug!(run = self.momentum.opponent_run_points(), ?reason, "opponent run");
        }
    }

    pub fn record_defensive_stop(&mut self) {
        self.momentum.record_defensive_stop();
    }

    pub fn timeout_advice(&self) -> Option<TimeoutReason> {
        self.momentum.timeout_advice()
    }

    // ========================================================================
    // Resources
    // ========================================================================

    pub fn call_timeout(&mut self, reason: TimeoutReason) -> Result<TimeoutResult> {
        let result = match self.ledger.call_timeout(reason, self.situation.quarter) {
            Ok(result) => result,
            Err(err) => {
                warn!(?reason, "timeout rejected: {err}");
                return Err(err);
            }
        };
        self.momentum.clear_opponent_run();
        self.just_called_timeout = true;
        info!(?reason, remaining = result.timeouts_remaining, "timeout");
        self.events.emit(CoachEvent::TimeoutCalled(result.clone()));
        Ok(result)
    }

    pub fn use_challenge(
        &mut self,
        challenge_type: ChallengeType,
        success_probability: f64,
        rng: &mut impl Rng,
    ) -> Result<ChallengeResult> {
        let result = self
            .ledger
            .use_challenge(challenge_type, success_probability, rng)
            .inspect_err(|err| warn!(?challenge_type, "challenge rejected: {err}"))?;
        info!(?challenge_type, won = result.won, "coach's challenge");
        self.events.emit(CoachEvent::ChallengeResolved(result.clone()));
        Ok(result)
    }

    pub fn intentional_foul(&mut self) -> IntentionalFoulOutcome {
        let outcome = self.ledger.intentional_foul();
        debug!(?outcome, "intentional foul");
        outcome
    }

    // ========================================================================
    // Tactics
    // ========================================================================

    fn decide(&mut self, label: String) {
        info!(%label, "decision");
        self.events.emit(CoachEvent::DecisionMade { label });
    }

    pub fn set_offense(&mut self, scheme: OffensiveScheme) {
        self.tactics.offense = scheme;
        self.decide(format!("Offense: {scheme}"));
    }

    pub fn set_defense(&mut self, scheme: DefensiveScheme) {
        self.tactics.defense = scheme;
        self.decide(format!("Defense: {scheme}"));
    }

    pub fn set_pace(&mut self, pace: Pace) {
        self.tactics.pace = pace;
        self.decide(format!("Pace: {pace}"));
    }

    pub fn set_intensity(&mut self, intensity: Intensity) {
        self.tactics.intensity = intensity;
        self.decide(format!("Intensity: {intensity}"));
    }

    pub fn set_pick_and_roll_coverage(&mut self, coverage: PickAndRollCoverage) {
        self.tactics.pick_and_roll_coverage = coverage;
        self.decide(format!("PnR coverage: {coverage}"));
    }

    pub fn set_transition_defense(&mut self, level: TransitionDefense) {
        self.tactics.transition_defense = level;
        self.decide(format!("Transition defense: {level}"));
    }

    pub fn set_press(&mut self, enabled: bool) {
        self.tactics.press_enabled = enabled;
        self.decide(format!("Press: {}", if enabled { "on" } else { "off" }));
    }

    pub fn set_intentional_foul_strategy(&mut self, enabled: bool) {
        self.tactics.intentional_foul_strategy = enabled;
        self.decide(format!("Intentional fouling: {}", if enabled { "on" } else { "off" }));
    }

    /// Re-derive offense, defense and pace from the team strategy.
    pub fn apply_team_strategy(&mut self, strategy: TeamStrategy) {
        self.tactics.apply_team_strategy(&strategy);
        self.strategy = Some(strategy);
        let label = format!(
            "Strategy: {} / {} / {}",
            self.tactics.offense, self.tactics.defense, self.tactics.pace
        );
        self.decide(label);
    }

    pub fn set_defensive_matchup(
        &mut self,
        defender_id: impl Into<PlayerId>,
        opponent_id: impl Into<PlayerId>,
        priority: MatchupPriority,
    ) -> Matchup {
        let matchup = self.matchups.set_matchup(defender_id, opponent_id, priority).clone();
        self.decide(format!("Matchup: {} on {}", matchup.defender_id, matchup.opponent_id));
        matchup
    }

    pub fn remove_defensive_matchup(&mut self, defender_id: &str) -> Option<Matchup> {
        self.matchups.remove_matchup(defender_id)
    }

    pub fn set_double_team(&mut self, opponent_id: impl Into<PlayerId>, trigger: DoubleTeamTrigger) {
        let opponent_id = opponent_id.into();
        self.matchups.set_double_team(opponent_id.clone(), trigger);
        self.decide(format!("Double team: {opponent_id}"));
        self.tactics.double_team_target = Some(opponent_id);
    }

    pub fn clear_double_team(&mut self, opponent_id: &str) {
        self.matchups.clear_double_team(opponent_id);
        if self.tactics.double_team_target.as_deref() == Some(opponent_id) {
            self.tactics.double_team_target = None;
            self.decide(format!("Double team cleared: {opponent_id}"));
        }
    }

    // ========================================================================
    // Substitutions
    // ========================================================================

    pub fn substitute(
        &mut self,
        player_out: &str,
        player_in: &str,
        lineup: &[PlayerId],
    ) -> Result<SubstitutionResult> {
        let result = self
            .plan
            .substitute(player_out, player_in, lineup)
            .inspect_err(|err| warn!("substitution rejected: {err}"))?;
        info!(player_out, player_in, "substitution");
        self.events.emit(CoachEvent::SubstitutionMade(result.clone()));
        Ok(result)
    }

    pub fn substitute_multiple(
        &mut self,
        players_out: &[PlayerId],
        players_in: &[PlayerId],
        lineup: &[PlayerId],
    ) -> Result<SubstitutionResult> {
        let result = self
            .plan
            .substitute_multiple(players_out, players_in, lineup)
            .inspect_err(|err| warn!("substitution rejected: {err}"))?;
        info!(count = result.swaps.len(), "multiple substitution");
        self.events.emit(CoachEvent::SubstitutionMade(result.clone()));
        Ok(result)
    }

    pub fn substitution_suggestions(
        &self,
        lineup: &[PlayerId],
        conditions: &HashMap<PlayerId, PlayerCondition>,
    ) -> Vec<SubstitutionSuggestion> {
        self.plan.suggestions(lineup, conditions, self.situation.quarter)
    }

    pub fn closing_lineup_swaps(&self, lineup: &[PlayerId]) -> Vec<(PlayerId, PlayerId)> {
        self.plan.closing_lineup_swaps(lineup)
    }

    // ========================================================================
    // Play calling
    // ========================================================================

    pub fn play_situation(&self) -> PlaySituation {
        PlaySituation {
            quarter: self.situation.quarter,
            game_clock_secs: self.situation.game_clock_secs,
            score_differential: self.situation.score_differential(),
            shot_clock_secs: self.situation.shot_clock_secs,
            after_timeout: self.just_called_timeout,
        }
    }

    fn record_play_call(&mut self, call: PlayCall, play: Option<Play>) {
        self.just_called_timeout = false;
        self.last_play_call = Some(call.clone());
        self.events.emit(CoachEvent::PlayCalled { call, play });
    }

    pub fn call_set_play(&mut self, play_id: &str, primary: Option<PlayerId>) -> Result<Play> {
        let play = self.dispatcher.call_set_play(play_id)?;
        let call = PlayCall::from_play(&play, self.situation.game_clock_secs)
            .with_primary(primary)
            .ato(self.just_called_timeout);
        info!(play_id, "set play called");
        self.record_play_call(call, Some(play.clone()));
        Ok(play)
    }

    pub fn call_quick_action(
        &mut self,
        action: QuickAction,
        primary: Option<PlayerId>,
        secondary: Option<PlayerId>,
    ) -> PlayCall {
        let call = self
            .dispatcher
            .call_quick_action(action, primary, secondary, self.situation.game_clock_secs)
            .ato(self.just_called_timeout);
        debug!(?action, play_type = ?call.play_type, "quick action");
        self.record_play_call(call.clone(), None);
        call
    }

    pub fn call_ato_play(&mut self, primary: Option<PlayerId>) -> PlayCall {
        let (call, play) = self.dispatcher.call_ato_play(primary, self.situation.game_clock_secs);
        debug!(play_type = ?call.play_type, "ATO play");
        self.record_play_call(call.clone(), play);
        call
    }

    pub fn recommended_plays(&self) -> Vec<Play> {
        self.dispatcher.recommended_plays(&self.play_situation())
    }

    // ========================================================================
    // End game / discipline
    // ========================================================================

    pub fn end_game_recommendation(&self) -> EndGameDecision {
        EndGameAdvisor::recommend(
            &self.situation,
            self.situation.has_possession,
            self.ledger.fouls_to_give(),
        )
    }

    pub fn argue_call(&mut self, team_morale: i32, rng: &mut impl Rng) -> ArgueOutcome {
        let outcome = self.discipline.argue_call(&mut self.ledger, team_morale, rng);
        if outcome.drew_technical() {
            self.events.emit(CoachEvent::TechnicalFoul { outcome });
        }
        outcome
    }

    // ========================================================================
    // Lifecycle
    // ========================================================================

    /// Fresh engine for the next game. Keeps configuration, playbook,
    /// observers and strategy; drops undrained events.
    pub fn reset_for_new_game(self) -> Self {
        let CoachEngine { config, dispatcher, mut events, strategy, .. } = self;
        events.clear_queue();
        let mut fresh = Self::assemble(config, dispatcher, events);
        if let Some(strategy) = strategy {
            fresh.tactics = TacticalState::from_strategy(&strategy);
            fresh.strategy = Some(strategy);
        }
        info!("engine reset for new game");
        fresh
    }

    pub fn snapshot(&self) -> CoachSnapshot {
        CoachSnapshot {
            situation: self.situation,
            ledger: self.ledger.clone(),
            momentum: self.momentum.clone(),
            matchups: self.matchups.clone(),
            substitution_plan: self.plan.clone(),
            tactics: self.tactics.clone(),
            strategy: self.strategy,
            last_play_call: self.last_play_call.clone(),
            just_called_timeout: self.just_called_timeout,
        }
    }

    /// Fails on an invalid config or a snapshot that breaks its limits.
    pub fn restore(config: CoachConfig, snapshot: CoachSnapshot) -> Result<Self> {
        let mut engine = Self::new(config)?;
        if let Err(err) = snapshot.check(&engine.config) {
            warn!("snapshot rejected: {err}");
            return Err(err);
        }
        engine.situation = snapshot.situation;
        engine.ledger = snapshot.ledger;
        engine.momentum = snapshot.momentum;
        engine.matchups = snapshot.matchups;
        engine.plan = snapshot.substitution_plan;
        engine.tactics = snapshot.tactics;
        engine.strategy = snapshot.strategy;
        engine.last_play_call = snapshot.last_play_call;
        engine.just_called_timeout = snapshot.just_called_timeout;
        Ok(engine)
    }
}
