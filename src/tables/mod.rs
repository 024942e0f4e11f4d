//! # Configuration Tables
//!
//! Data model for the generator's input document.
//!
//! The document is a single JSON file carrying the four enumeration axes,
//! the nested class-name mapping, the quest templates, the consequence
//! modifiers, and the base activity list. Field names follow the asset
//! format the app consumes (camelCase, integer codes as string keys).
//!
//! Axis tables are `BTreeMap`s keyed by integer code, so iterating an axis
//! always visits codes in ascending order and expansion stays deterministic.

use crate::{QuestforgeError, QuestforgeResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// The four enumeration axes, each mapping an integer code to a display label.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisTables {
    /// Path axis (1=Mind, 2=Body, 3=Balanced)
    pub path_map: BTreeMap<u8, String>,
    /// Difficulty axis, five commitment levels
    pub difficulty_map: BTreeMap<u8, String>,
    /// Tracking axis (1=Leveling System, 2=Streaks & Habits, 3=Both)
    pub tracking_map: BTreeMap<u8, String>,
    /// Consequence axis, three penalty modes
    pub consequence_map: BTreeMap<u8, String>,
}

/// One statically authored activity with its canonical duration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseActivity {
    /// Path code the activity belongs to
    pub path: u8,
    /// Human-readable task name
    pub task: String,
    /// Duration in minutes at intensity level 3 (the 1.0 multiplier)
    pub duration_minutes: u32,
}

/// Quest-format template for one (path, difficulty) combination.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestTemplate {
    pub format: String,
}

/// Narrative description attached to a consequence mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsequenceModifier {
    pub description: String,
}

/// The full configuration document driving both catalogs.
///
/// Loaded once at startup via [`ForgeConfig::from_path`]; read-only
/// thereafter. All lookups return [`QuestforgeError::MissingMapping`] naming
/// the absent key path, so a hole in the document halts generation instead
/// of producing a partial catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForgeConfig {
    /// The four enumeration axes
    pub util: AxisTables,
    /// path label -> difficulty label -> tracking label -> consequence label -> class name
    pub class_mapping: BTreeMap<String, BTreeMap<String, BTreeMap<String, BTreeMap<String, String>>>>,
    /// path label -> difficulty label -> quest-format template
    pub quest_templates: BTreeMap<String, BTreeMap<String, QuestTemplate>>,
    /// consequence label -> description
    pub consequence_modifiers: BTreeMap<String, ConsequenceModifier>,
    /// Ordered base activity list for the quest catalog
    pub base_activities: Vec<BaseActivity>,
}

impl ForgeConfig {
    /// Reads and parses a configuration document from disk.
    ///
    /// This is the thin I/O boundary in front of the pure generators:
    /// everything downstream works on the returned value only. Unreadable
    /// files surface as [`QuestforgeError::Io`], malformed JSON as
    /// [`QuestforgeError::Serde`], and an empty axis table as
    /// [`QuestforgeError::InvalidConfig`].
    pub fn from_path(path: impl AsRef<Path>) -> QuestforgeResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&raw)?;
        config.check_axes()?;
        Ok(config)
    }

    /// Rejects documents whose enumeration axes are empty.
    fn check_axes(&self) -> QuestforgeResult<()> {
        let axes = [
            ("pathMap", self.util.path_map.len()),
            ("difficultyMap", self.util.difficulty_map.len()),
            ("trackingMap", self.util.tracking_map.len()),
            ("consequenceMap", self.util.consequence_map.len()),
        ];

        for (name, len) in axes {
            if len == 0 {
                return Err(QuestforgeError::InvalidConfig(format!(
                    "axis table {} is empty",
                    name
                )));
            }
        }

        Ok(())
    }

    /// Path codes in ascending order.
    pub fn path_codes(&self) -> impl Iterator<Item = u8> + '_ {
        self.util.path_map.keys().copied()
    }

    /// Difficulty codes in ascending order.
    pub fn difficulty_codes(&self) -> impl Iterator<Item = u8> + '_ {
        self.util.difficulty_map.keys().copied()
    }

    /// Tracking codes in ascending order.
    pub fn tracking_codes(&self) -> impl Iterator<Item = u8> + '_ {
        self.util.tracking_map.keys().copied()
    }

    /// Consequence codes in ascending order.
    pub fn consequence_codes(&self) -> impl Iterator<Item = u8> + '_ {
        self.util.consequence_map.keys().copied()
    }

    /// Resolves a path code to its display label.
    pub fn path_label(&self, code: u8) -> QuestforgeResult<&str> {
        Self::axis_label(&self.util.path_map, "pathMap", code)
    }

    /// Resolves a difficulty code to its display label.
    pub fn difficulty_label(&self, code: u8) -> QuestforgeResult<&str> {
        Self::axis_label(&self.util.difficulty_map, "difficultyMap", code)
    }

    /// Resolves a tracking code to its display label.
    pub fn tracking_label(&self, code: u8) -> QuestforgeResult<&str> {
        Self::axis_label(&self.util.tracking_map, "trackingMap", code)
    }

    /// Resolves a consequence code to its display label.
    pub fn consequence_label(&self, code: u8) -> QuestforgeResult<&str> {
        Self::axis_label(&self.util.consequence_map, "consequenceMap", code)
    }

    fn axis_label<'a>(
        map: &'a BTreeMap<u8, String>,
        axis: &str,
        code: u8,
    ) -> QuestforgeResult<&'a str> {
        map.get(&code).map(String::as_str).ok_or_else(|| {
            QuestforgeError::MissingMapping(format!("{} has no entry for code {}", axis, code))
        })
    }

    /// Looks up the class name for one resolved label combination.
    pub fn class_name(
        &self,
        path: &str,
        difficulty: &str,
        tracking: &str,
        consequence: &str,
    ) -> QuestforgeResult<&str> {
        self.class_mapping
            .get(path)
            .and_then(|by_difficulty| by_difficulty.get(difficulty))
            .and_then(|by_tracking| by_tracking.get(tracking))
            .and_then(|by_consequence| by_consequence.get(consequence))
            .map(String::as_str)
            .ok_or_else(|| {
                QuestforgeError::MissingMapping(format!(
                    "classMapping has no entry for {}/{}/{}/{}",
                    path, difficulty, tracking, consequence
                ))
            })
    }

    /// Looks up the quest-format template for a (path, difficulty) pair.
    pub fn quest_template(&self, path: &str, difficulty: &str) -> QuestforgeResult<&str> {
        self.quest_templates
            .get(path)
            .and_then(|by_difficulty| by_difficulty.get(difficulty))
            .map(|template| template.format.as_str())
            .ok_or_else(|| {
                QuestforgeError::MissingMapping(format!(
                    "questTemplates has no entry for {}/{}",
                    path, difficulty
                ))
            })
    }

    /// Looks up the description attached to a consequence mode.
    pub fn consequence_description(&self, consequence: &str) -> QuestforgeResult<&str> {
        self.consequence_modifiers
            .get(consequence)
            .map(|modifier| modifier.description.as_str())
            .ok_or_else(|| {
                QuestforgeError::MissingMapping(format!(
                    "consequenceModifiers has no entry for {}",
                    consequence
                ))
            })
    }

    /// Number of class entries a complete expansion must produce.
    pub fn expected_class_count(&self) -> usize {
        self.util.path_map.len()
            * self.util.difficulty_map.len()
            * self.util.tracking_map.len()
            * self.util.consequence_map.len()
    }
}
