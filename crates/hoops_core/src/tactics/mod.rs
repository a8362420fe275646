// Tactical state and the team-strategy bridge

pub mod tactical_state;
pub mod team_strategy;

pub use tactical_state::{
    DefensiveScheme, Intensity, OffensiveScheme, Pace, PickAndRollCoverage, TacticalState,
    TransitionDefense,
};
pub use team_strategy::{DefensiveSystem, OffensiveSystem, PacePreference, TeamStrategy};
