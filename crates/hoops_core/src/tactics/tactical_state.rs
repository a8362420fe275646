//! Active scheme selection
//!
//! Exactly one value per category at all times. No combination is invalid.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::PlayerId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
pub enum OffensiveScheme {
    #[default]
    Motion,
    Isolation,
    PickAndRoll,
    PostUp,
    ThreeHeavy,
    FastBreak,
    Princeton,
    Triangle,
    FiveOut,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
pub enum DefensiveScheme {
    #[default]
    ManToMan,
    Zone23,
    Zone32,
    Zone131,
    Zone122,
    BoxAndOne,
    TriangleAndTwo,
    SwitchAll,
    FullCourtPress,
    HalfCourtTrap,
    MatchupZone,
}

impl DefensiveScheme {
    pub fn is_zone(&self) -> bool {
        matches!(
            self,
            DefensiveScheme::Zone23
                | DefensiveScheme::Zone32
                | DefensiveScheme::Zone131
                | DefensiveScheme::Zone122
                | DefensiveScheme::MatchupZone
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
pub enum Pace {
    Push,
    #[default]
    Normal,
    Slow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
pub enum Intensity {
    Conservative,
    #[default]
    Normal,
    Aggressive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
pub enum PickAndRollCoverage {
    #[default]
    Drop,
    Hedge,
    Blitz,
    Switch,
    /// Force the handler baseline, away from the screen
    Ice,
    ShowAndRecover,
    Under,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
pub enum TransitionDefense {
    /// Crash the offensive glass
    Crash,
    #[default]
    Balanced,
    /// Everyone sprints back
    GetBack,
}

macro_rules! display_as_debug {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                fmt::Debug::fmt(self, f)
            }
        })*
    };
}

display_as_debug!(
    OffensiveScheme,
    DefensiveScheme,
    Pace,
    Intensity,
    PickAndRollCoverage,
    TransitionDefense
);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TacticalState {
    pub offense: OffensiveScheme,
    pub defense: DefensiveScheme,
    pub pace: Pace,
    pub intensity: Intensity,
    pub pick_and_roll_coverage: PickAndRollCoverage,
    pub transition_defense: TransitionDefense,
    /// At most one current double-team target
    pub double_team_target: Option<PlayerId>,
    pub press_enabled: bool,
    pub intentional_foul_strategy: bool,
}

impl TacticalState {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_defaults() {
        let state = TacticalState::new();
        assert_eq!(state.offense, OffensiveScheme::Motion);
        assert_eq!(state.defense, DefensiveScheme::ManToMan);
        assert_eq!(state.pace, Pace::Normal);
        assert_eq!(state.intensity, Intensity::Normal);
        assert!(state.double_team_target.is_none());
        assert!(!state.press_enabled);
    }

    #[test]
    fn test_category_sizes() {
        assert_eq!(OffensiveScheme::iter().count(), 9);
        assert_eq!(DefensiveScheme::iter().count(), 11);
        assert_eq!(Pace::iter().count(), 3);
        assert_eq!(Intensity::iter().count(), 3);
        assert_eq!(PickAndRollCoverage::iter().count(), 7);
        assert_eq!(TransitionDefense::iter().count(), 3);
    }

    #[test]
    fn test_zone_detection() {
        let zones: Vec<_> = DefensiveScheme::iter().filter(|d| d.is_zone()).collect();
        assert_eq!(zones.len(), 5);
        assert!(!DefensiveScheme::BoxAndOne.is_zone());
    }

    #[test]
    fn test_display_labels() {
        assert_eq!(DefensiveScheme::Zone23.to_string(), "Zone23");
        assert_eq!(Pace::Push.to_string(), "Push");
    }
}
