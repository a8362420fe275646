//! Defensive matchups and double-team triggers.
//!
//! One live matchup per defender; several defenders may share an opponent.
//! The active double-team target itself lives on
//! [`TacticalState`](crate::tactics::TacticalState); the registry only keeps
//! the triggers and hands back the target to set.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::PlayerId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum MatchupPriority {
    #[default]
    Normal,
    /// 밀착 마크
    Shadow,
    DoubleTeam,
    /// 공 못 받게 차단
    Deny,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Matchup {
    pub defender_id: PlayerId,
    pub opponent_id: PlayerId,
    pub priority: MatchupPriority,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DoubleTeamTrigger {
    #[default]
    Always,
    OnPostCatch,
    OnDrive,
    OnPickAndRoll,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MatchupRegistry {
    matchups: Vec<Matchup>,
    double_teams: BTreeMap<PlayerId, DoubleTeamTrigger>,
}

impl MatchupRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces any matchup the defender already had.
    pub fn set_matchup(
        &mut self,
        defender_id: impl Into<PlayerId>,
        opponent_id: impl Into<PlayerId>,
        priority: MatchupPriority,
    ) -> &Matchup {
        let defender_id = defender_id.into();
        self.matchups.retain(|m| m.defender_id != defender_id);
        self.matchups.push(Matchup { defender_id, opponent_id: opponent_id.into(), priority });
        &self.matchups[self.matchups.len() - 1]
    }

    pub fn remove_matchup(&mut self, defender_id: &str) -> Option<Matchup> {
        let idx = self.matchups.iter().position(|m| m.defender_id == defender_id)?;
        Some(self.matchups.remove(idx))
    }

    pub fn matchup_for(&self, defender_id: &str) -> Option<&Matchup> {
        self.matchups.iter().find(|m| m.defender_id == defender_id)
    }

    pub fn defenders_on(&self, opponent_id: &str) -> Vec<&PlayerId> {
        self.matchups
            .iter()
            .filter(|m| m.opponent_id == opponent_id)
            .map(|m| &m.defender_id)
            .collect()
    }

    pub fn matchups(&self) -> &[Matchup] {
        &self.matchups
    }

    pub fn set_double_team(&mut self, opponent_id: impl Into<PlayerId>, trigger: DoubleTeamTrigger) {
        self.double_teams.insert(opponent_id.into(), trigger);
    }

    /// Returns whether a trigger was registered for the opponent.
    pub fn clear_double_team(&mut self, opponent_id: &str) -> bool {
        self.double_teams.remove(opponent_id).is_some()
    }

    pub fn double_team_trigger(&self, opponent_id: &str) -> Option<DoubleTeamTrigger> {
        self.double_teams.get(opponent_id).copied()
    }

    pub fn double_team_count(&self) -> usize {
        self.double_teams.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_matchup_replaces_old() {
        let mut reg = MatchupRegistry::new();
        reg.set_matchup("D1", "O1", MatchupPriority::Normal);
        reg.set_matchup("D1", "O2", MatchupPriority::Deny);

        assert_eq!(reg.matchups().len(), 1);
        let m = reg.matchup_for("D1").unwrap();
        assert_eq!(m.opponent_id, "O2");
        assert_eq!(m.priority, MatchupPriority::Deny);
    }

    #[test]
    fn test_shared_opponent_tolerated() {
        let mut reg = MatchupRegistry::new();
        reg.set_matchup("D1", "O1", MatchupPriority::Shadow);
        reg.set_matchup("D2", "O1", MatchupPriority::Normal);
        assert_eq!(reg.defenders_on("O1").len(), 2);
        assert!(reg.defenders_on("O3").is_empty());
    }

    #[test]
    fn test_remove_matchup() {
        let mut reg = MatchupRegistry::new();
        reg.set_matchup("D1", "O1", MatchupPriority::Normal);
        assert!(reg.remove_matchup("D1").is_some());
        assert!(reg.remove_matchup("D1").is_none());
        assert!(reg.matchup_for("D1").is_none());
    }

    #[test]
    fn test_double_team_triggers() {
        let mut reg = MatchupRegistry::new();
        reg.set_double_team("O1", DoubleTeamTrigger::OnPostCatch);
        reg.set_double_team("O2", DoubleTeamTrigger::OnDrive);
        assert_eq!(reg.double_team_count(), 2);
        assert_eq!(reg.double_team_trigger("O1"), Some(DoubleTeamTrigger::OnPostCatch));

        assert!(reg.clear_double_team("O1"));
        assert!(!reg.clear_double_team("O1"));
        assert_eq!(reg.double_team_trigger("O1"), None);
    }
}
