//! Momentum Tracker - 득점 런과 모멘텀
//!
//! Momentum is a bounded scalar (0..=max, 50 at tip-off) pushed up by
//! team points and stops and down by opponent points. Run counters reset
//! whenever the other side scores.

use serde::{Deserialize, Serialize};

use super::resources::TimeoutReason;
use crate::config::MomentumConfig;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MomentumTracker {
    momentum: u32,
    team_run_points: u32,
    opponent_run_points: u32,
    consecutive_stops: u32,
    consecutive_scores: u32,
    config: MomentumConfig,
}

impl MomentumTracker {
    pub fn new(config: &MomentumConfig) -> Self {
        Self {
            momentum: config.initial.min(config.max),
            team_run_points: 0,
            opponent_run_points: 0,
            consecutive_stops: 0,
            consecutive_scores: 0,
            config: config.clone(),
        }
    }

    pub fn momentum(&self) -> u32 {
        self.momentum
    }

    pub fn team_run_points(&self) -> u32 {
        self.team_run_points
    }

    pub fn opponent_run_points(&self) -> u32 {
        self.opponent_run_points
    }

    pub fn consecutive_stops(&self) -> u32 {
        self.consecutive_stops
    }

    pub fn consecutive_scores(&self) -> u32 {
        self.consecutive_scores
    }

    pub fn record_team_points(&mut self, points: u32) {
        self.team_run_points = self.team_run_points.saturating_add(points);
        self.opponent_run_points = 0;
        self.consecutive_scores = self.consecutive_scores.saturating_add(1);
        let swing = points.saturating_mul(self.config.points_factor);
        self.momentum = self.momentum.saturating_add(swing).min(self.config.max);
    }

    pub fn record_opponent_points(&mut self, points: u32) {
        self.opponent_run_points = self.opponent_run_points.saturating_add(points);
        self.team_run_points = 0;
        self.consecutive_stops = 0;
        self.consecutive_scores = 0;
        let swing = points.saturating_mul(self.config.points_factor);
        self.momentum = self.momentum.saturating_sub(swing);
    }

    pub fn record_defensive_stop(&mut self) {
        self.consecutive_stops = self.consecutive_stops.saturating_add(1);
        self.momentum = self.momentum.saturating_add(self.config.stop_bonus).min(self.config.max);
    }

    /// Timeouts break the opponent's run.
    pub fn clear_opponent_run(&mut self) {
        self.opponent_run_points = 0;
    }

    /// Suggest a timeout once the opponent run reaches the trigger.
    pub fn timeout_advice(&self) -> Option<TimeoutReason> {
        (self.opponent_run_points >= self.config.run_timeout_trigger)
            .then_some(TimeoutReason::StopRun)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn tracker() -> MomentumTracker {
        MomentumTracker::new(&MomentumConfig::default())
    }

    #[test]
    fn test_team_points_raise_momentum() {
        let mut m = tracker();
        m.record_team_points(3);
        assert_eq!(m.momentum(), 56);
        assert_eq!(m.team_run_points(), 3);
        assert_eq!(m.consecutive_scores(), 1);

        m.record_team_points(2);
        assert_eq!(m.team_run_points(), 5);
        assert_eq!(m.consecutive_scores(), 2);
    }

    #[test]
    fn test_opponent_points_break_team_run() {
        let mut m = tracker();
        m.record_team_points(2);
        m.record_defensive_stop();
        m.record_opponent_points(3);
        assert_eq!(m.team_run_points(), 0);
        assert_eq!(m.opponent_run_points(), 3);
        assert_eq!(m.consecutive_stops(), 0);
        assert_eq!(m.consecutive_scores(), 0);
        assert_eq!(m.momentum(), 50 + 4 + 3 - 6);
    }

    #[test]
    fn test_team_points_reset_opponent_run() {
        let mut m = tracker();
        m.record_opponent_points(5);
        m.record_team_points(2);
        assert_eq!(m.opponent_run_points(), 0);
    }

    #[test]
    fn test_momentum_clamped() {
        let mut m = tracker();
        m.record_team_points(100);
        assert_eq!(m.momentum(), 100);
        m.record_defensive_stop();
        assert_eq!(m.momentum(), 100);
        m.record_opponent_points(200);
        assert_eq!(m.momentum(), 0);
    }

    #[test]
    fn test_timeout_advice_on_run() {
        let mut m = tracker();
        m.record_opponent_points(3);
        m.record_opponent_points(3);
        assert_eq!(m.timeout_advice(), None);
        m.record_opponent_points(2);
        assert_eq!(m.timeout_advice(), Some(TimeoutReason::StopRun));
        m.clear_opponent_run();
        assert_eq!(m.timeout_advice(), None);
    }

    #[derive(Debug, Clone)]
    enum Event {
        Team(u32),
        Opponent(u32),
        Stop,
    }

    fn event() -> impl Strategy<Value = Event> {
        prop_oneof![
            any::<u32>().prop_map(Event::Team),
            any::<u32>().prop_map(Event::Opponent),
            Just(Event::Stop),
        ]
    }

    proptest! {
        #[test]
        fn prop_momentum_always_bounded(events in proptest::collection::vec(event(), 0..64)) {
            let mut m = tracker();
            for e in events {
                match e {
                    Event::Team(p) => m.record_team_points(p),
                    Event::Opponent(p) => m.record_opponent_points(p),
                    Event::Stop => m.record_defensive_stop(),
                }
                prop_assert!(m.momentum() <= 100);
            }
        }
    }
}
