//! Play Call Dispatcher
//!
//! Turns set-play ids, quick actions and ATO requests into [`PlayCall`]s,
//! consulting the playbook collaborator when one is loaded.

use tracing::{debug, warn};

use super::play::{Play, PlayCall, PlaySituation, PlayType, QuickAction, SituationTag};
use super::Playbook;
use crate::error::{CoachError, Result};
use crate::PlayerId;

/// Play type used for an ATO call when the playbook has nothing better.
pub const FALLBACK_ATO_PLAY: PlayType = PlayType::HornsSet;

#[derive(Default)]
pub struct PlayCallDispatcher {
    playbook: Option<Box<dyn Playbook>>,
}

impl std::fmt::Debug for PlayCallDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlayCallDispatcher").field("has_playbook", &self.has_playbook()).finish()
    }
}

impl PlayCallDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_playbook(playbook: Box<dyn Playbook>) -> Self {
        Self { playbook: Some(playbook) }
    }

    pub fn set_playbook(&mut self, playbook: Option<Box<dyn Playbook>>) {
        self.playbook = playbook;
    }

    pub fn has_playbook(&self) -> bool {
        self.playbook.is_some()
    }

    pub fn call_set_play(&self, play_id: &str) -> Result<Play> {
        let playbook = self.playbook.as_ref().ok_or(CoachError::NoPlaybook)?;
        match playbook.get_play(play_id) {
            Some(play) => Ok(play),
            None => {
                warn!(play_id, "unknown set play");
                Err(CoachError::UnknownPlay { id: play_id.to_string() })
            }
        }
    }

    pub fn call_quick_action(
        &self,
        action: QuickAction,
        primary: Option<PlayerId>,
        secondary: Option<PlayerId>,
        game_clock_secs: f32,
    ) -> PlayCall {
        PlayCall::new(action.play_type(), game_clock_secs)
            .with_primary(primary)
            .with_secondary(secondary)
    }

    /// Best-effort: always yields an ATO-flagged call, from the playbook if
    /// it has an after-timeout play. The resolved play comes back with it.
    pub fn call_ato_play(
        &self,
        primary: Option<PlayerId>,
        game_clock_secs: f32,
    ) -> (PlayCall, Option<Play>) {
        let play = self
            .playbook
            .as_ref()
            .and_then(|pb| pb.best_play_for_situation(SituationTag::AfterTimeout));

        let call = match &play {
            Some(play) => PlayCall::from_play(play, game_clock_secs),
            None => {
                debug!("no ATO play in playbook, using fallback");
                PlayCall::new(FALLBACK_ATO_PLAY, game_clock_secs)
            }
        };
        (call.with_primary(primary).ato(true), play)
    }

    pub fn recommended_plays(&self, situation: &PlaySituation) -> Vec<Play> {
        match &self.playbook {
            Some(playbook) => playbook.recommended_plays(situation),
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::playbook::PlaybookLibrary;

    fn play(id: &str, play_type: PlayType, tags: Vec<SituationTag>) -> Play {
        Play {
            id: id.to_string(),
            name: id.to_string(),
            play_type,
            success_rate: 0.5,
            tags,
        }
    }

    fn dispatcher() -> PlayCallDispatcher {
        let lib = PlaybookLibrary::new(vec![
            play("ato-lob", PlayType::LobPlay, vec![SituationTag::AfterTimeout]),
            play("pnr", PlayType::PickAndRoll, vec![]),
        ]);
        PlayCallDispatcher::with_playbook(Box::new(lib))
    }

    fn situation() -> PlaySituation {
        PlaySituation {
            quarter: 2,
            game_clock_secs: 300.0,
            score_differential: 4,
            shot_clock_secs: 24.0,
            after_timeout: false,
        }
    }

    #[test]
    fn test_set_play_requires_playbook() {
        let err = PlayCallDispatcher::new().call_set_play("pnr").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingCollaborator);
    }

    #[test]
    fn test_set_play_unknown_id() {
        let err = dispatcher().call_set_play("nope").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownIdentifier);
    }

    #[test]
    fn test_set_play_found() {
        assert_eq!(dispatcher().call_set_play("pnr").unwrap().play_type, PlayType::PickAndRoll);
    }

    #[test]
    fn test_quick_action_stamps_clock() {
        let call = PlayCallDispatcher::new().call_quick_action(
            QuickAction::PickAndRoll,
            Some("PG".to_string()),
            Some("C".to_string()),
            431.5,
        );
        assert_eq!(call.play_type, PlayType::PickAndRoll);
        assert_eq!(call.primary_player.as_deref(), Some("PG"));
        assert_eq!(call.secondary_player.as_deref(), Some("C"));
        assert_eq!(call.game_clock_secs, 431.5);
        assert!(call.play_id.is_none());
    }

    #[test]
    fn test_ato_uses_playbook() {
        let (call, play) = dispatcher().call_ato_play(None, 40.0);
        assert!(call.is_ato);
        assert_eq!(call.play_type, PlayType::LobPlay);
        assert_eq!(call.play_id.as_deref(), Some("ato-lob"));
        assert_eq!(play.map(|p| p.id), Some("ato-lob".to_string()));
    }

    #[test]
    fn test_ato_fallback_without_playbook() {
        let (call, play) = PlayCallDispatcher::new().call_ato_play(Some("SG".to_string()), 40.0);
        assert!(play.is_none());
        assert!(call.is_ato);
        assert_eq!(call.play_type, FALLBACK_ATO_PLAY);
        assert_eq!(call.primary_player.as_deref(), Some("SG"));
    }

    #[test]
    fn test_recommendations_empty_without_playbook() {
        assert!(PlayCallDispatcher::new().recommended_plays(&situation()).is_empty());
        assert_eq!(dispatcher().recommended_plays(&situation()).len(), 2);
    }
}
