//! # hoops_core - Basketball Head-Coach Decision Engine
//!
//! Per-team, per-game coaching state for a basketball match simulation:
//! timeouts and fouls to give, momentum, defensive matchups, rotations,
//! tactical schemes, play calling, end-game advice and the coach's temper.
//!
//! ## Features
//! - Deterministic: every random draw comes from a caller-supplied RNG
//! - Typed results with a small error taxonomy, no panics in play
//! - Event queue plus observer hooks for UI and analytics
//! - Serde snapshot for save/load

pub mod coach;
pub mod config;
pub mod error;
pub mod playbook;
pub mod situation;
pub mod tactics;

/// Opaque player identifier supplied by the host.
pub type PlayerId = String;

pub use coach::{CoachEngine, CoachEvent, CoachObserver, CoachSnapshot};
pub use config::CoachConfig;
pub use error::{CoachError, ErrorKind, Result};
pub use playbook::{Play, PlayCall, PlayType, Playbook, PlaybookLibrary, QuickAction};
pub use situation::GameSituation;
pub use tactics::{TacticalState, TeamStrategy};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
