//! hoops_cli library
//!
//! Drives a `CoachEngine` from scripted game events.

pub mod script;

pub use script::{run_script, GameScript, ScriptRunner, Step, StepReport};

use anyhow::{bail, Result};
use hoops_core::CoachConfig;

/// Named configuration presets accepted on the command line.
pub const PRESETS: [&str; 3] = ["standard", "fiba", "hot_headed"];

pub fn preset(name: &str) -> Result<CoachConfig> {
    match name {
        "standard" => Ok(CoachConfig::standard()),
        "fiba" => Ok(CoachConfig::fiba()),
        "hot_headed" | "hot-headed" => Ok(CoachConfig::hot_headed()),
        other => bail!("Unknown preset '{other}' (expected one of {})", PRESETS.join(", ")),
    }
}

/// Split a score differential into `(team, opponent)` scores.
pub fn scores_from_diff(diff: i32) -> Result<(u16, u16)> {
    let Ok(margin) = u16::try_from(diff.unsigned_abs()) else {
        bail!("Score differential {diff} is out of range (max {})", u16::MAX);
    };
    Ok(if diff >= 0 { (margin, 0) } else { (0, margin) })
}
