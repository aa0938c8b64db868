//! Meet configuration file.
//!
//! ```toml
//! [courses]
//! Winchester = 3.08
//! "Franklin Park" = 3.1
//!
//! [scoring]
//! ranking = "time"
//! scorers_per_team = 5
//! ```
//!
//! Listed courses overlay the league defaults; a listed course replaces the
//! default distance of the same name.

use std::path::Path;

use serde::{Deserialize, Serialize};
use xc_model::{CourseRegistry, ScoringOptions};

use crate::error::{IngestError, Result};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeetConfig {
    pub courses: CourseRegistry,
    pub scoring: ScoringOptions,
}

impl MeetConfig {
    /// League defaults overlaid with the configured courses.
    pub fn registry(&self) -> CourseRegistry {
        let mut registry = CourseRegistry::league_default();
        registry.overlay(&self.courses);
        registry
    }
}

/// Loads a meet configuration from a TOML file.
pub fn load_meet_config(path: &Path) -> Result<MeetConfig> {
    let text = std::fs::read_to_string(path).map_err(|e| IngestError::read(path, e))?;
    parse_meet_config(&text).map_err(|message| IngestError::CourseFile {
        path: path.to_path_buf(),
        message,
    })
}

fn parse_meet_config(text: &str) -> std::result::Result<MeetConfig, String> {
    let config: MeetConfig = toml::from_str(text).map_err(|e| e.to_string())?;
    tracing::debug!(
        courses = config.courses.len(),
        ranking = ?config.scoring.ranking,
        "loaded meet config"
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use xc_model::RankingMode;

    use super::*;

    #[test]
    fn overlays_league_defaults() {
        let config = parse_meet_config(
            r#"
            [courses]
            Winchester = 3.1
            "Franklin Park" = 3.1
            Belmont = 3
            "#,
        )
        .unwrap();
        let registry = config.registry();
        assert_eq!(registry.distance("Winchester").unwrap(), 3.1);
        assert_eq!(registry.distance("Franklin Park").unwrap(), 3.1);
        assert_eq!(registry.distance("Belmont").unwrap(), 3.0);
        assert_eq!(registry.distance("Twilight").unwrap(), 3.06);
        assert_eq!(config.scoring, ScoringOptions::default());
    }

    #[test]
    fn reads_scoring_section() {
        let config = parse_meet_config(
            r#"
            [scoring]
            ranking = "time"
            scorers_per_team = 7
            "#,
        )
        .unwrap();
        assert_eq!(config.scoring.ranking, RankingMode::Time);
        assert_eq!(config.scoring.scorers_per_team, 7);
        assert!(config.courses.is_empty());
    }

    #[test]
    fn rejects_non_positive_distances() {
        let err = parse_meet_config("[courses]\nDevens = -3.1\n").unwrap_err();
        assert!(err.contains("Devens"), "{err}");
    }
}
