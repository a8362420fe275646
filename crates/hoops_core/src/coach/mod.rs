//! Coach decision components and the [`CoachEngine`] that owns them.

pub mod discipline;
pub mod end_game;
pub mod engine;
pub mod events;
pub mod matchups;
pub mod momentum;
pub mod resources;
pub mod snapshot;
pub mod substitutions;

pub use discipline::{ArgueOutcome, DisciplinaryModel};
pub use end_game::{EndGameAction, EndGameAdvisor, EndGameDecision};
pub use engine::CoachEngine;
pub use events::{CoachEvent, CoachObserver, EventBus};
pub use matchups::{DoubleTeamTrigger, Matchup, MatchupPriority, MatchupRegistry};
pub use momentum::MomentumTracker;
pub use resources::{
    ChallengeResult, ChallengeType, IntentionalFoulOutcome, ResourceLedger, TimeoutReason,
    TimeoutResult,
};
pub use snapshot::CoachSnapshot;
pub use substitutions::{
    PlayerCondition, SubstitutionPlan, SubstitutionResult, SubstitutionSuggestion,
    SuggestionReason, Urgency,
};
