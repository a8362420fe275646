//! # Coach Configuration
//!
//! 코칭 엔진의 모든 튜닝 상수를 한 곳에서 관리.
//!
//! ## 프리셋
//! - `standard()` - NBA 규정 (기본)
//! - `fiba()` - FIBA 규정 (타임아웃 5개, 10분 쿼터, 5반칙 퇴장)
//! - `hot_headed()` - 테크니컬 파울이 잦은 감독
//!
//! ## 사용법
//! ```rust
//! use hoops_core::config::CoachConfig;
//!
//! let config = CoachConfig::default();
//! let fiba = CoachConfig::fiba();
//! assert!(fiba.validate().is_ok());
//! ```

mod discipline_config;
mod momentum_config;
mod resource_config;
mod rotation_config;

pub use discipline_config::DisciplineConfig;
pub use momentum_config::{MomentumConfig, MOMENTUM_CEILING};
pub use resource_config::ResourceConfig;
pub use rotation_config::RotationConfig;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CoachError, Result};

/// Late-game window that gates clutch decisions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ClutchConfig {
    /// First quarter that can be clutch (기본: 4)
    pub min_quarter: u8,
    /// Clock must be under this many seconds (기본: 300)
    pub max_clock_secs: f32,
    /// Absolute score margin (기본: 10)
    pub max_margin: i32,
}

impl Default for ClutchConfig {
    fn default() -> Self {
        Self { min_quarter: 4, max_clock_secs: 300.0, max_margin: 10 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct CoachConfig {
    pub resources: ResourceConfig,
    pub momentum: MomentumConfig,
    pub discipline: DisciplineConfig,
    pub rotation: RotationConfig,
    pub clutch: ClutchConfig,
}

impl CoachConfig {
    /// NBA 규정 (기본)
    pub fn standard() -> Self {
        Self::default()
    }

    /// FIBA 규정
    pub fn fiba() -> Self {
        let mut cfg = Self::default();
        cfg.resources.timeouts_per_game = 5;
        cfg.resources.quarter_length_secs = 600.0;
        cfg.clutch.max_clock_secs = 240.0;
        cfg.rotation.foul_out_limit = 5;
        cfg.rotation.second_half_foul_trouble = 3;
        cfg
    }

    /// 다혈질 감독
    pub fn hot_headed() -> Self {
        let mut cfg = Self::default();
        cfg.discipline.first_technical_probability = 0.5;
        cfg.discipline.repeat_technical_probability = 0.8;
        cfg
    }

    pub fn from_yaml_str(src: &str) -> Result<Self> {
        let cfg: Self = serde_yaml::from_str(src)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_json_str(src: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(src)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load from disk; `.json` files are parsed as JSON, anything else as YAML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let src = std::fs::read_to_string(path)?;
        let cfg = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json_str(&src)?,
            _ => Self::from_yaml_str(&src)?,
        };
        tracing::debug!(path = %path.display(), "loaded coach config");
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        if self.resources.timeouts_per_game == 0 {
            return Err(CoachError::InvalidConfig("timeouts_per_game must be positive".into()));
        }
        if self.resources.quarter_length_secs <= 0.0 || self.resources.overtime_length_secs <= 0.0
        {
            return Err(CoachError::InvalidConfig("period lengths must be positive".into()));
        }
        if self.momentum.max > MOMENTUM_CEILING {
            return Err(CoachError::InvalidConfig(format!(
                "momentum max {} exceeds {MOMENTUM_CEILING}",
                self.momentum.max
            )));
        }
        if self.momentum.initial > self.momentum.max {
            return Err(CoachError::InvalidConfig(format!(
                "initial momentum {} exceeds max {}",
                self.momentum.initial, self.momentum.max
            )));
        }
        let d = &self.discipline;
        for (name, p) in [
            ("first_technical_probability", d.first_technical_probability),
            ("repeat_technical_probability", d.repeat_technical_probability),
            ("rally_probability", d.rally_probability),
        ] {
            if !(0.0..=1.0).contains(&p) {
                return Err(CoachError::InvalidConfig(format!("{name} must be within [0, 1]")));
            }
        }
        if d.ejection_threshold == 0 {
            return Err(CoachError::InvalidConfig("ejection_threshold must be positive".into()));
        }
        if self.rotation.foul_out_limit == 0 {
            return Err(CoachError::InvalidConfig("foul_out_limit must be positive".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use std::io::Write;

    #[test]
    fn test_presets_are_valid() {
        assert!(CoachConfig::standard().validate().is_ok());
        assert!(CoachConfig::fiba().validate().is_ok());
        assert!(CoachConfig::hot_headed().validate().is_ok());
    }

    #[test]
    fn test_standard_defaults() {
        let cfg = CoachConfig::standard();
        assert_eq!(cfg.resources.timeouts_per_game, 7);
        assert_eq!(cfg.resources.fouls_to_give_per_quarter, 4);
        assert_eq!(cfg.momentum.initial, 50);
        assert_eq!(cfg.discipline.ejection_threshold, 2);
        assert_eq!(cfg.rotation.foul_trouble_threshold(2), 2);
        assert_eq!(cfg.rotation.foul_trouble_threshold(3), 4);
    }

    #[test]
    fn test_partial_yaml_falls_back_to_defaults() {
        let cfg = CoachConfig::from_yaml_str("resources:\n  timeouts_per_game: 5\n").unwrap();
        assert_eq!(cfg.resources.timeouts_per_game, 5);
        assert_eq!(cfg.resources.fouls_to_give_per_quarter, 4);
        assert_eq!(cfg.discipline, DisciplineConfig::default());
    }

    #[test]
    fn test_invalid_probability_rejected() {
        let err = CoachConfig::from_json_str(r#"{"discipline":{"rally_probability":1.5}}"#)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }

    #[test]
    fn test_zero_timeouts_rejected() {
        let mut cfg = CoachConfig::default();
        cfg.resources.timeouts_per_game = 0;
        assert!(matches!(cfg.validate(), Err(CoachError::InvalidConfig(_))));
    }

    #[test]
    fn test_momentum_max_capped() {
        let err = CoachConfig::from_yaml_str("momentum:\n  initial: 300\n  max: 500\n")
            .unwrap_err();
        assert!(matches!(err, CoachError::InvalidConfig(_)));

        let cfg = CoachConfig::from_yaml_str("momentum:\n  initial: 40\n  max: 80\n").unwrap();
        assert_eq!(cfg.momentum.max, 80);
    }

    #[test]
    fn test_malformed_yaml_is_parse_error() {
        let err = CoachConfig::from_yaml_str("resources: [").unwrap_err();
        assert!(matches!(err, CoachError::ConfigParse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "clutch:\n  max_margin: 5").unwrap();
        let cfg = CoachConfig::load(file.path()).unwrap();
        assert_eq!(cfg.clutch.max_margin, 5);
        assert_eq!(cfg.clutch.min_quarter, 4);
    }

    #[test]
    fn test_period_length() {
        let cfg = ResourceConfig::default();
        assert_eq!(cfg.period_length_secs(4), 720.0);
        assert_eq!(cfg.period_length_secs(5), 300.0);
    }
}
