use serde::{Deserialize, Serialize};

use crate::PlayerId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
pub enum PlayType {
    Isolation,
    PickAndRoll,
    PickAndPop,
    PostUp,
    SpotUp3,
    HandOff,
    BackdoorCut,
    Floppy,
    HornsSet,
    ElbowAction,
    StaggerScreen,
    Transition,
    LobPlay,
    DriveAndKick,
    Motion,
    BaselineOutOfBounds,
    SidelineOutOfBounds,
    LastShot,
}

/// Single-tap play request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
pub enum QuickAction {
    Isolation,
    PickAndRoll,
    PostUp,
    ShooterAction,
    Cut,
    Lob,
}

impl QuickAction {
    pub fn play_type(&self) -> PlayType {
        match self {
            QuickAction::Isolation => PlayType::Isolation,
            QuickAction::PickAndRoll => PlayType::PickAndRoll,
            QuickAction::PostUp => PlayType::PostUp,
            QuickAction::ShooterAction => PlayType::SpotUp3,
            QuickAction::Cut => PlayType::BackdoorCut,
            QuickAction::Lob => PlayType::LobPlay,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SituationTag {
    AfterTimeout,
    EndOfQuarter,
    NeedThree,
    SideOutOfBounds,
    BaselineOutOfBounds,
}

/// A play definition as stored in the playbook.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Play {
    pub id: String,
    pub name: String,
    pub play_type: PlayType,
    /// Historical success rate (0.0-1.0)
    #[serde(default)]
    pub success_rate: f32,
    #[serde(default)]
    pub tags: Vec<SituationTag>,
}

/// A play the coach actually called.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayCall {
    pub play_type: PlayType,
    /// Set when the call came from the playbook
    pub play_id: Option<String>,
    pub primary_player: Option<PlayerId>,
    pub secondary_player: Option<PlayerId>,
    pub is_ato: bool,
    /// Game clock when the call was made
    pub game_clock_secs: f32,
}

impl PlayCall {
    pub fn new(play_type: PlayType, game_clock_secs: f32) -> Self {
        Self {
            play_type,
            play_id: None,
            primary_player: None,
            secondary_player: None,
            is_ato: false,
            game_clock_secs,
        }
    }

    pub fn from_play(play: &Play, game_clock_secs: f32) -> Self {
        Self { play_id: Some(play.id.clone()), ..Self::new(play.play_type, game_clock_secs) }
    }

    pub fn with_primary(mut self, player: Option<PlayerId>) -> Self {
        self.primary_player = player;
        self
    }

    pub fn with_secondary(mut self, player: Option<PlayerId>) -> Self {
        self.secondary_player = player;
        self
    }

    pub fn ato(mut self, is_ato: bool) -> Self {
        self.is_ato = is_ato;
        self
    }
}

/// Snapshot handed to the playbook when asking for recommendations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlaySituation {
    pub quarter: u8,
    pub game_clock_secs: f32,
    pub score_differential: i32,
    pub shot_clock_secs: f32,
    pub after_timeout: bool,
}

impl PlaySituation {
    /// Tags this moment qualifies for.
    pub fn tags(&self) -> Vec<SituationTag> {
        let mut tags = Vec::new();
        if self.after_timeout {
            tags.push(SituationTag::AfterTimeout);
        }
        if self.game_clock_secs < 24.0 {
            tags.push(SituationTag::EndOfQuarter);
        }
        if self.quarter >= 4 && self.game_clock_secs < 30.0 && self.score_differential == -3 {
            tags.push(SituationTag::NeedThree);
        }
        tags
    }
}
