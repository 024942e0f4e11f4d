//! # Quest Catalog Generation
//!
//! Scales every base activity across the five intensity levels.
//!
//! Activities are visited in document order; each emits its five intensity
//! variants before the next activity starts. Keys repeat whenever a path has
//! more than one activity, which the app relies on: it collects all entries
//! matching a `"{path}-{intensity}"` key to build a task list.

use crate::{CatalogGenerator, ForgeConfig, QuestforgeError, QuestforgeResult};
use serde::{Deserialize, Serialize};

/// Intensity multiplier table, level 1 through 5. Level 3 is the canonical
/// duration.
const INTENSITY_MULTIPLIERS: [(u8, f64); 5] =
    [(1, 0.5), (2, 0.75), (3, 1.0), (4, 1.5), (5, 2.0)];

/// One (base activity, intensity level) pair with its scaled duration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestEntry {
    /// Composite `"{path}-{intensity}"` code string
    pub key: String,
    /// Task name copied from the base activity
    pub task: String,
    /// Canonical duration scaled by the intensity multiplier
    pub duration_minutes: u32,
}

/// Scales a canonical duration by an intensity multiplier.
///
/// Rounds half away from zero (`f64::round`), which matches what the
/// published catalogs were generated with for these non-negative durations.
///
/// # Examples
///
/// ```
/// use questforge::scale_duration;
///
/// assert_eq!(scale_duration(30, 0.75), 23);
/// assert_eq!(scale_duration(30, 2.0), 60);
/// ```
pub fn scale_duration(minutes: u32, multiplier: f64) -> u32 {
    (minutes as f64 * multiplier).round() as u32
}

/// Generator for the quest catalog.
#[derive(Debug, Clone, Default)]
pub struct QuestCatalogGenerator;

impl QuestCatalogGenerator {
    /// Creates a new quest catalog generator.
    pub fn new() -> Self {
        Self
    }
}

impl CatalogGenerator<Vec<QuestEntry>> for QuestCatalogGenerator {
    fn generate(&self, config: &ForgeConfig) -> QuestforgeResult<Vec<QuestEntry>> {
        let mut entries =
            Vec::with_capacity(config.base_activities.len() * INTENSITY_MULTIPLIERS.len());

        for activity in &config.base_activities {
            for (intensity, multiplier) in INTENSITY_MULTIPLIERS {
                entries.push(QuestEntry {
                    key: format!("{}-{}", activity.path, intensity),
                    task: activity.task.clone(),
                    duration_minutes: scale_duration(activity.duration_minutes, multiplier),
                });
            }
        }

        log::debug!("expanded {} quest entries", entries.len());
        Ok(entries)
    }

    fn validate(&self, content: &Vec<QuestEntry>, config: &ForgeConfig) -> QuestforgeResult<()> {
        // Keys are deliberately not checked for uniqueness: every activity
        // on a path shares that path's five keys.
        let expected = config.base_activities.len() * INTENSITY_MULTIPLIERS.len();
        if content.len() != expected {
            return Err(QuestforgeError::GenerationFailed(format!(
                "quest catalog has {} entries, expected {}",
                content.len(),
                expected
            )));
        }

        Ok(())
    }

    fn generator_type(&self) -> &'static str {
        "QuestCatalogGenerator"
    }
}
