// Play calling: playbook collaborator seam, play definitions, dispatcher

pub mod dispatcher;
pub mod library;
pub mod play;

pub use dispatcher::{PlayCallDispatcher, FALLBACK_ATO_PLAY};
pub use library::PlaybookLibrary;
pub use play::{Play, PlayCall, PlaySituation, PlayType, QuickAction, SituationTag};

/// Playbook store that resolves play ids and recommends plays.
pub trait Playbook {
    fn get_play(&self, id: &str) -> Option<Play>;

    fn recommended_plays(&self, situation: &PlaySituation) -> Vec<Play>;

    fn best_play_for_situation(&self, tag: SituationTag) -> Option<Play>;
}
