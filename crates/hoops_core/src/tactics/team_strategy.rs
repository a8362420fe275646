//! Team strategy → tactical state mapping
//!
//! The strategy record belongs to the team-management side and uses its own
//! vocabulary. Mapping is a fixed lookup; anything the engine has no scheme
//! for lands on the default (Normal pace, Motion offense, ManToMan defense).

use serde::{Deserialize, Serialize};

use super::tactical_state::{DefensiveScheme, OffensiveScheme, Pace, TacticalState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
pub enum PacePreference {
    VerySlow,
    Slow,
    Balanced,
    Fast,
    VeryFast,
    #[default]
    #[serde(other)]
    Unspecified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
pub enum OffensiveSystem {
    MotionOffense,
    IsolationHeavy,
    PickAndRollHeavy,
    InsideOut,
    SpaceAndPace,
    RunAndGun,
    Princeton,
    Triangle,
    FiveOut,
    /// Read-and-react, no fixed system
    Freelance,
    #[default]
    #[serde(other)]
    Unspecified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
pub enum DefensiveSystem {
    ManToMan,
    TwoThreeZone,
    ThreeTwoZone,
    OneThreeOneZone,
    OneTwoTwoZone,
    BoxAndOne,
    TriangleAndTwo,
    SwitchEverything,
    FullCourtPress,
    HalfCourtTrap,
    MatchupZone,
    /// Mixes man and zone possession by possession
    Hybrid,
    #[default]
    #[serde(other)]
    Unspecified,
}

/// Read-only strategy record from the team-management collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TeamStrategy {
    pub pace_preference: PacePreference,
    pub offensive_system: OffensiveSystem,
    pub defensive_scheme: DefensiveSystem,
}

pub fn map_pace(pref: PacePreference) -> Pace {
    match pref {
        PacePreference::Fast | PacePreference::VeryFast => Pace::Push,
        PacePreference::Slow | PacePreference::VerySlow => Pace::Slow,
        PacePreference::Balanced | PacePreference::Unspecified => Pace::Normal,
    }
}

pub fn map_offense(system: OffensiveSystem) -> OffensiveScheme {
    match system {
        OffensiveSystem::MotionOffense => OffensiveScheme::Motion,
        OffensiveSystem::IsolationHeavy => OffensiveScheme::Isolation,
        OffensiveSystem::PickAndRollHeavy => OffensiveScheme::PickAndRoll,
        OffensiveSystem::InsideOut => OffensiveScheme::PostUp,
        OffensiveSystem::SpaceAndPace => OffensiveScheme::ThreeHeavy,
        OffensiveSystem::RunAndGun => OffensiveScheme::FastBreak,
        OffensiveSystem::Princeton => OffensiveScheme::Princeton,
        OffensiveSystem::Triangle => OffensiveScheme::Triangle,
        OffensiveSystem::FiveOut => OffensiveScheme::FiveOut,
        OffensiveSystem::Freelance | OffensiveSystem::Unspecified => OffensiveScheme::Motion,
    }
}

pub fn map_defense(system: DefensiveSystem) -> DefensiveScheme {
    match system {
        DefensiveSystem::ManToMan => DefensiveScheme::ManToMan,
        DefensiveSystem::TwoThreeZone => DefensiveScheme::Zone23,
        DefensiveSystem::ThreeTwoZone => DefensiveScheme::Zone32,
        DefensiveSystem::OneThreeOneZone => DefensiveScheme::Zone131,
        DefensiveSystem::OneTwoTwoZone => DefensiveScheme::Zone122,
        DefensiveSystem::BoxAndOne => DefensiveScheme::BoxAndOne,
        DefensiveSystem::TriangleAndTwo => DefensiveScheme::TriangleAndTwo,
        DefensiveSystem::SwitchEverything => DefensiveScheme::SwitchAll,
        DefensiveSystem::FullCourtPress => DefensiveScheme::FullCourtPress,
        DefensiveSystem::HalfCourtTrap => DefensiveScheme::HalfCourtTrap,
        DefensiveSystem::MatchupZone => DefensiveScheme::MatchupZone,
        DefensiveSystem::Hybrid | DefensiveSystem::Unspecified => DefensiveScheme::ManToMan,
    }
}

impl TacticalState {
    /// Overwrite pace, offense and defense from the strategy record.
    ///
    /// Other categories (coverage, intensity, toggles, double team) are
    /// in-game calls and are left as they are. Idempotent.
    pub fn apply_team_strategy(&mut self, strategy: &TeamStrategy) {
        self.pace = map_pace(strategy.pace_preference);
        self.offense = map_offense(strategy.offensive_system);
        self.defense = map_defense(strategy.defensive_scheme);
    }

    pub fn from_strategy(strategy: &TeamStrategy) -> Self {
        let mut state = Self::default();
        state.apply_team_strategy(strategy);
        state
    }
}
