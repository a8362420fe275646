//! Substitution Planner
//!
//! Lineups are passed in by the caller and never held here; the planner
//! only owns the rotation plan (fatigue threshold, depth, minutes targets,
//! closing lineup).
//!
//! ## 포함 함수
//! - substitute: 1:1 교체 (lineup 에 없는 선수면 실패)
//! - substitute_multiple: 다중 교체, all-or-nothing
//! - suggestions: 체력/파울/출전시간 기반 교체 제안 (lineup 은 건드리지 않음)
//! - closing_lineup_swaps: 클로징 라인업으로 가기 위한 교체 쌍

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::config::RotationConfig;
use crate::error::{CoachError, Result};
use crate::PlayerId;

pub const MIN_FATIGUE_THRESHOLD: f32 = 50.0;
pub const MAX_FATIGUE_THRESHOLD: f32 = 100.0;
pub const MIN_ROTATION_DEPTH: u8 = 7;
pub const MAX_ROTATION_DEPTH: u8 = 12;

/// Urgency of a suggestion, in ascending order.
///
/// Comparison follows declaration order, so `Immediate` ranks highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Urgency {
    Low,
    Medium,
    High,
    Immediate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SuggestionReason {
    LowEnergy,
    FoulTrouble,
    FouledOut,
    MinutesLimit,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubstitutionSuggestion {
    pub player_id: PlayerId,
    pub reason: SuggestionReason,
    pub urgency: Urgency,
    pub description: String,
}

/// Live condition of one player, as reported by the simulator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerCondition {
    /// 0-100
    pub energy: f32,
    pub fouls: u8,
    pub minutes_played: f32,
}

impl Default for PlayerCondition {
    fn default() -> Self {
        Self { energy: 100.0, fouls: 0, minutes_played: 0.0 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubstitutionResult {
    /// (out, in) pairs in the order they were applied
    pub swaps: Vec<(PlayerId, PlayerId)>,
    pub lineup: Vec<PlayerId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubstitutionPlan {
    fatigue_threshold: f32,
    rotation_depth: u8,
    target_minutes: HashMap<PlayerId, f32>,
    closing_lineup: Vec<PlayerId>,
    rules: RotationConfig,
}

impl SubstitutionPlan {
    pub fn new(config: &RotationConfig) -> Self {
        let mut plan = Self {
            fatigue_threshold: MIN_FATIGUE_THRESHOLD,
            rotation_depth: MIN_ROTATION_DEPTH,
            target_minutes: HashMap::new(),
            closing_lineup: Vec::new(),
            rules: config.clone(),
        };
        plan.set_fatigue_threshold(config.fatigue_threshold);
        plan.set_rotation_depth(config.rotation_depth);
        plan
    }

    pub fn fatigue_threshold(&self) -> f32 {
        self.fatigue_threshold
    }

    pub fn set_fatigue_threshold(&mut self, threshold: f32) {
        self.fatigue_threshold = threshold.clamp(MIN_FATIGUE_THRESHOLD, MAX_FATIGUE_THRESHOLD);
    }

    pub fn rotation_depth(&self) -> u8 {
        self.rotation_depth
    }

    pub fn set_rotation_depth(&mut self, depth: u8) {
        self.rotation_depth = depth.clamp(MIN_ROTATION_DEPTH, MAX_ROTATION_DEPTH);
    }

    pub fn target_minutes(&self, player_id: &str) -> Option<f32> {
        self.target_minutes.get(player_id).copied()
    }

    pub fn set_target_minutes(&mut self, player_id: impl Into<PlayerId>, minutes: f32) {
        self.target_minutes.insert(player_id.into(), minutes.max(0.0));
    }

    pub fn closing_lineup(&self) -> &[PlayerId] {
        &self.closing_lineup
    }

    pub fn set_closing_lineup(&mut self, lineup: Vec<PlayerId>) {
        self.closing_lineup = lineup;
    }

    /// Swap `player_out` for `player_in`; the incoming player goes to the end.
    pub fn substitute(
        &self,
        player_out: &str,
        player_in: &str,
        lineup: &[PlayerId],
    ) -> Result<SubstitutionResult> {
        let mut working = lineup.to_vec();
        apply_swap(&mut working, player_out, player_in)?;
        Ok(SubstitutionResult {
            swaps: vec![(player_out.to_string(), player_in.to_string())],
            lineup: working,
        })
    }

    /// Applies every pair against a working copy; the first failure aborts
    /// the whole batch and the caller's lineup stays untouched.
    pub fn substitute_multiple(
        &self,
        players_out: &[PlayerId],
        players_in: &[PlayerId],
        lineup: &[PlayerId],
    ) -> Result<SubstitutionResult> {
        if players_out.len() != players_in.len() {
            return Err(CoachError::SubstitutionCountMismatch {
                outs: players_out.len(),
                ins: players_in.len(),
            });
        }

        let mut working = lineup.to_vec();
        for (out, inn) in players_out.iter().zip(players_in) {
            apply_swap(&mut working, out, inn)?;
        }

        Ok(SubstitutionResult {
            swaps: players_out.iter().cloned().zip(players_in.iter().cloned()).collect(),
            lineup: working,
        })
    }

    /// Suggestions for the current lineup, most urgent first.
    ///
    /// Players missing from `conditions` are treated as fresh.
    pub fn suggestions(
        &self,
        lineup: &[PlayerId],
        conditions: &HashMap<PlayerId, PlayerCondition>,
        quarter: u8,
    ) -> Vec<SubstitutionSuggestion> {
        let foul_trouble = self.rules.foul_trouble_threshold(quarter);
        let mut out = Vec::new();

        for player_id in lineup {
            let condition = conditions.get(player_id).copied().unwrap_or_default();

            if condition.energy < self.fatigue_threshold {
                out.push(SubstitutionSuggestion {
                    player_id: player_id.clone(),
                    reason: SuggestionReason::LowEnergy,
                    urgency: Urgency::High,
                    description: format!("Low energy ({:.0})", condition.energy),
                });
            }

            if condition.fouls >= foul_trouble {
                out.push(SubstitutionSuggestion {
                    player_id: player_id.clone(),
                    reason: SuggestionReason::FoulTrouble,
                    urgency: Urgency::Medium,
                    description: format!("Foul trouble ({} fouls)", condition.fouls),
                });
            }

            if condition.fouls >= self.rules.foul_out_limit {
                out.push(SubstitutionSuggestion {
                    player_id: player_id.clone(),
                    reason: SuggestionReason::FouledOut,
                    urgency: Urgency::Immediate,
                    description: "Fouled out".to_string(),
                });
            }

            if let Some(target) = self.target_minutes(player_id) {
                if condition.minutes_played > target {
                    out.push(SubstitutionSuggestion {
                        player_id: player_id.clone(),
                        reason: SuggestionReason::MinutesLimit,
                        urgency: Urgency::Low,
                        description: format!(
                            "Over minutes target ({:.1}/{:.1})",
                            condition.minutes_played, target
                        ),
                    });
                }
            }
        }

        // stable: equal urgency keeps lineup order
        out.sort_by(|a, b| b.urgency.cmp(&a.urgency));
        out
    }

    /// (out, in) pairs that turn `lineup` into the closing lineup.
    ///
    /// Pairs are formed in order; surplus on either side is left alone.
    pub fn closing_lineup_swaps(&self, lineup: &[PlayerId]) -> Vec<(PlayerId, PlayerId)> {
        let outs = lineup.iter().filter(|p| !self.closing_lineup.contains(*p));
        let ins = self.closing_lineup.iter().filter(|p| !lineup.contains(*p));
        outs.cloned().zip(ins.cloned()).collect()
    }
}

fn apply_swap(lineup: &mut Vec<PlayerId>, player_out: &str, player_in: &str) -> Result<()> {
    let idx = lineup
        .iter()
        .position(|p| p == player_out)
        .ok_or_else(|| CoachError::PlayerNotInLineup { player: player_out.to_string() })?;
    if lineup.iter().any(|p| p == player_in) {
        return Err(CoachError::PlayerAlreadyInLineup { player: player_in.to_string() });
    }
    lineup.remove(idx);
    lineup.push(player_in.to_string());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn plan() -> SubstitutionPlan {
        SubstitutionPlan::new(&RotationConfig::default())
    }

    fn lineup(ids: &[&str]) -> Vec<PlayerId> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    fn cond(energy: f32, fouls: u8) -> PlayerCondition {
        PlayerCondition { energy, fouls, minutes_played: 0.0 }
    }

    #[test]
    fn test_substitute_success() {
        let starting = lineup(&["A", "B", "C", "D", "E"]);
        let result = plan().substitute("C", "F", &starting).unwrap();
        assert_eq!(result.lineup, lineup(&["A", "B", "D", "E", "F"]));
        assert_eq!(result.swaps, vec![("C".to_string(), "F".to_string())]);
    }

    #[test]
    fn test_substitute_missing_player() {
        let starting = lineup(&["A", "B", "C", "D", "E"]);
        let err = plan().substitute("Z", "F", &starting).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidLineupOperation);
        assert!(matches!(err, CoachError::PlayerNotInLineup { .. }));
    }

    #[test]
    fn test_substitute_incoming_already_on_floor() {
        let starting = lineup(&["A", "B", "C", "D", "E"]);
        let err = plan().substitute("C", "D", &starting).unwrap_err();
        assert!(matches!(err, CoachError::PlayerAlreadyInLineup { .. }));
    }

    #[test]
    fn test_substitute_same_player_rejected() {
        let starting = lineup(&["A", "B", "C", "D", "E"]);
        let err = plan().substitute("C", "C", &starting).unwrap_err();
        assert!(matches!(err, CoachError::PlayerAlreadyInLineup { ref player } if player == "C"));
    }

    #[test]
    fn test_substitute_multiple_all_or_nothing() {
        let starting = lineup(&["A", "B", "C", "D", "E"]);
        let p = plan();

        let ok = p
            .substitute_multiple(&lineup(&["A", "B"]), &lineup(&["F", "G"]), &starting)
            .unwrap();
        assert_eq!(ok.lineup, lineup(&["C", "D", "E", "F", "G"]));
        assert_eq!(ok.swaps.len(), 2);

        let err = p
            .substitute_multiple(&lineup(&["A", "Z"]), &lineup(&["F", "G"]), &starting)
            .unwrap_err();
        assert!(matches!(err, CoachError::PlayerNotInLineup { ref player } if player == "Z"));
        assert_eq!(starting, lineup(&["A", "B", "C", "D", "E"]));
    }

    #[test]
    fn test_substitute_multiple_count_mismatch() {
        let starting = lineup(&["A", "B", "C", "D", "E"]);
        let err = plan()
            .substitute_multiple(&lineup(&["A", "B"]), &lineup(&["F"]), &starting)
            .unwrap_err();
        assert!(matches!(err, CoachError::SubstitutionCountMismatch { outs: 2, ins: 1 }));
    }

    #[test]
    fn test_plan_clamps() {
        let mut p = plan();
        p.set_fatigue_threshold(20.0);
        assert_eq!(p.fatigue_threshold(), 50.0);
        p.set_fatigue_threshold(150.0);
        assert_eq!(p.fatigue_threshold(), 100.0);
        p.set_rotation_depth(3);
        assert_eq!(p.rotation_depth(), 7);
        p.set_rotation_depth(15);
        assert_eq!(p.rotation_depth(), 12);
    }

    #[test]
    fn test_suggestions_energy_and_fouls() {
        let on_floor = lineup(&["A", "B", "C"]);
        let mut conditions = HashMap::new();
        conditions.insert("A".to_string(), cond(40.0, 0));
        conditions.insert("B".to_string(), cond(90.0, 2));
        conditions.insert("C".to_string(), cond(60.0, 3));

        let first_half = plan().suggestions(&on_floor, &conditions, 2);
        let summary: Vec<_> =
            first_half.iter().map(|s| (s.player_id.as_str(), s.reason)).collect();
        assert_eq!(
            summary,
            vec![
                ("A", SuggestionReason::LowEnergy),
                ("C", SuggestionReason::LowEnergy),
                ("B", SuggestionReason::FoulTrouble),
                ("C", SuggestionReason::FoulTrouble),
            ]
        );

        // second-half threshold is 4 fouls
        let second_half = plan().suggestions(&on_floor, &conditions, 3);
        assert!(second_half.iter().all(|s| s.reason == SuggestionReason::LowEnergy));
        assert_eq!(second_half.len(), 2);
    }

    #[test]
    fn test_suggestions_do_not_touch_unknown_players() {
        let on_floor = lineup(&["A"]);
        assert!(plan().suggestions(&on_floor, &HashMap::new(), 1).is_empty());
    }

    #[test]
    fn test_fouled_out_ranks_first() {
        let on_floor = lineup(&["A", "B"]);
        let mut conditions = HashMap::new();
        conditions.insert("A".to_string(), cond(30.0, 0));
        conditions.insert("B".to_string(), cond(95.0, 6));

        let suggestions = plan().suggestions(&on_floor, &conditions, 4);
        assert_eq!(suggestions[0].urgency, Urgency::Immediate);
        assert_eq!(suggestions[0].player_id, "B");
        assert_eq!(suggestions[1].urgency, Urgency::High);
        assert_eq!(suggestions[2].reason, SuggestionReason::FoulTrouble);
    }

    #[test]
    fn test_minutes_limit_is_low_urgency() {
        let mut p = plan();
        p.set_target_minutes("A", 30.0);
        let mut conditions = HashMap::new();
        conditions.insert(
            "A".to_string(),
            PlayerCondition { energy: 80.0, fouls: 0, minutes_played: 31.5 },
        );

        let suggestions = p.suggestions(&lineup(&["A"]), &conditions, 4);
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].reason, SuggestionReason::MinutesLimit);
        assert_eq!(suggestions[0].urgency, Urgency::Low);
    }

    #[test]
    fn test_urgency_order() {
        assert!(Urgency::Immediate > Urgency::High);
        assert!(Urgency::High > Urgency::Medium);
        assert!(Urgency::Medium > Urgency::Low);
    }

    #[test]
    fn test_closing_lineup_swaps() {
        let mut p = plan();
        p.set_closing_lineup(lineup(&["A", "B", "C", "F", "G"]));
        let swaps = p.closing_lineup_swaps(&lineup(&["A", "B", "C", "D", "E"]));
        assert_eq!(
            swaps,
            vec![("D".to_string(), "F".to_string()), ("E".to_string(), "G".to_string())]
        );

        let closing = lineup(&["A", "B", "C", "F", "G"]);
        assert!(p.closing_lineup_swaps(&closing).is_empty());
    }
}
