use thiserror::Error;

use crate::PlayerId;

/// Broad category of a [`CoachError`].
///
/// Everything except `Configuration` is an expected in-game outcome the
/// caller may surface to the player or retry with different inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    ResourceExhausted,
    InvalidLineupOperation,
    MissingCollaborator,
    UnknownIdentifier,
    Configuration,
}

#[derive(Error, Debug)]
pub enum CoachError {
    #[error("No timeouts left")]
    NoTimeoutsLeft,

    #[error("Coach's challenge already used this game")]
    ChallengeAlreadyUsed,

    #[error("No timeouts available to risk on a challenge")]
    NoTimeoutsForChallenge,

    #[error("Player {player} is not in the lineup")]
    PlayerNotInLineup { player: PlayerId },

    #[error("Player {player} is already in the lineup")]
    PlayerAlreadyInLineup { player: PlayerId },

    #[error("Substitution count mismatch: {outs} out, {ins} in")]
    SubstitutionCountMismatch { outs: usize, ins: usize },

    #[error("No playbook loaded")]
    NoPlaybook,

    #[error("Unknown play: {id}")]
    UnknownPlay { id: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Configuration parse error: {0}")]
    ConfigParse(String),

    #[error("Snapshot error: {0}")]
    Snapshot(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CoachError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CoachError::NoTimeoutsLeft
            | CoachError::ChallengeAlreadyUsed
            | CoachError::NoTimeoutsForChallenge => ErrorKind::ResourceExhausted,
            CoachError::PlayerNotInLineup { .. }
            | CoachError::PlayerAlreadyInLineup { .. }
            | CoachError::SubstitutionCountMismatch { .. } => ErrorKind::InvalidLineupOperation,
            CoachError::NoPlaybook => ErrorKind::MissingCollaborator,
            CoachError::UnknownPlay { .. } => ErrorKind::UnknownIdentifier,
            CoachError::InvalidConfig(_)
            | CoachError::ConfigParse(_)
            | CoachError::Snapshot(_)
            | CoachError::Io(_) => ErrorKind::Configuration,
        }
    }

    /// In-play failures are recoverable; configuration failures are not.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self.kind(), ErrorKind::Configuration)
    }
}

impl From<serde_yaml::Error> for CoachError {
    fn from(err: serde_yaml::Error) -> Self {
        CoachError::ConfigParse(err.to_string())
    }
}

impl From<serde_json::Error> for CoachError {
    fn from(err: serde_json::Error) -> Self {
        CoachError::ConfigParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CoachError>;
