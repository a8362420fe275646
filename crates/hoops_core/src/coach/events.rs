//! Coach events and observers.
//!
//! Every event lands in a queue the host drains once per game event, and is
//! also pushed to each registered [`CoachObserver`] in registration order.

use serde::{Deserialize, Serialize};

use super::discipline::ArgueOutcome;
use super::resources::{ChallengeResult, TimeoutResult};
use super::substitutions::SubstitutionResult;
use crate::playbook::{Play, PlayCall};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CoachEvent {
    /// A tactic changed; `label` names the new value
    DecisionMade { label: String },
    TimeoutCalled(TimeoutResult),
    SubstitutionMade(SubstitutionResult),
    PlayCalled { call: PlayCall, play: Option<Play> },
    ChallengeResolved(ChallengeResult),
    TechnicalFoul { outcome: ArgueOutcome },
}

impl CoachEvent {
    pub fn dispatch(&self, observer: &mut dyn CoachObserver) {
        match self {
            CoachEvent::DecisionMade { label } => observer.on_decision(label),
            CoachEvent::TimeoutCalled(result) => observer.on_timeout(result),
            CoachEvent::SubstitutionMade(result) => observer.on_substitution(result),
            CoachEvent::PlayCalled { call, play } => observer.on_play_called(call, play.as_ref()),
            CoachEvent::ChallengeResolved(result) => observer.on_challenge(result),
            CoachEvent::TechnicalFoul { outcome } => observer.on_technical(outcome),
        }
    }
}

/// UI / analytics listener. Implement only the events you care about.
pub trait CoachObserver {
    fn on_decision(&mut self, _label: &str) {}

    fn on_timeout(&mut self, _result: &TimeoutResult) {}

    fn on_substitution(&mut self, _result: &SubstitutionResult) {}

    fn on_play_called(&mut self, _call: &PlayCall, _play: Option<&Play>) {}

    fn on_challenge(&mut self, _result: &ChallengeResult) {}

    fn on_technical(&mut self, _outcome: &ArgueOutcome) {}
}

#[derive(Default)]
pub struct EventBus {
    queue: Vec<CoachEvent>,
    observers: Vec<Box<dyn CoachObserver>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, observer: Box<dyn CoachObserver>) {
        self.observers.push(observer);
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    pub fn emit(&mut self, event: CoachEvent) {
        for observer in self.observers.iter_mut() {
            event.dispatch(observer.as_mut());
        }
        self.queue.push(event);
    }

    pub fn pending(&self) -> &[CoachEvent] {
        &self.queue
    }

    pub fn drain(&mut self) -> Vec<CoachEvent> {
        std::mem::take(&mut self.queue)
    }

    /// Keep observers, drop anything not yet drained.
    pub(crate) fn clear_queue(&mut self) {
        self.queue.clear();
    }
}
