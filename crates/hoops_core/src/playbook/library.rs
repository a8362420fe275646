//! In-memory playbook loadable from YAML.
//!
//! ```yaml
//! plays:
//!   - id: horns-flare
//!     name: Horns Flare
//!     play_type: HornsSet
//!     success_rate: 0.48
//!     tags: [AfterTimeout]
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::play::{Play, PlaySituation, SituationTag};
use super::Playbook;
use crate::error::Result;

/// Upper bound on recommendations returned at once
pub const MAX_RECOMMENDATIONS: usize = 3;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlaybookLibrary {
    #[serde(default)]
    plays: Vec<Play>,
}

impl PlaybookLibrary {
    pub fn new(plays: Vec<Play>) -> Self {
        Self { plays }
    }

    pub fn from_yaml_str(src: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(src)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let src = std::fs::read_to_string(path.as_ref())?;
        let library = Self::from_yaml_str(&src)?;
        tracing::debug!(plays = library.plays.len(), "loaded playbook");
        Ok(library)
    }

    pub fn plays(&self) -> &[Play] {
        &self.plays
    }

    pub fn add_play(&mut self, play: Play) {
        self.plays.retain(|p| p.id != play.id);
        self.plays.push(play);
    }
}

impl Playbook for PlaybookLibrary {
    fn get_play(&self, id: &str) -> Option<Play> {
        self.plays.iter().find(|p| p.id == id).cloned()
    }

    /// Plays matching more of the situation's tags rank first, then by
    /// success rate.
    fn recommended_plays(&self, situation: &PlaySituation) -> Vec<Play> {
        let tags = situation.tags();
        let mut ranked: Vec<(usize, &Play)> = self
            .plays
            .iter()
            .map(|p| (p.tags.iter().filter(|t| tags.contains(t)).count(), p))
            .collect();
        ranked.sort_by(|(fit_a, a), (fit_b, b)| {
            fit_b.cmp(fit_a).then(b.success_rate.total_cmp(&a.success_rate))
        });
        ranked.into_iter().take(MAX_RECOMMENDATIONS).map(|(_, p)| p.clone()).collect()
    }

    fn best_play_for_situation(&self, tag: SituationTag) -> Option<Play> {
        self.plays
            .iter()
            .filter(|p| p.tags.contains(&tag))
            .max_by(|a, b| a.success_rate.total_cmp(&b.success_rate))
            .cloned()
    }
}
