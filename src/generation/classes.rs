//! # Class Catalog Generation
//!
//! Expands the full Cartesian product of the four persona axes into the
//! class catalog.
//!
//! Iteration order is path outermost, then difficulty, then tracking, then
//! consequence innermost, each axis in ascending code order. The order only
//! determines the output sequence; every entry is independent of its
//! neighbors.

use crate::{CatalogGenerator, ForgeConfig, QuestforgeError, QuestforgeResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One resolved combination of the four axes with its generated content.
///
/// Serialized field names are the catalog format the app reads; `class` is
/// backed by `class_name` because of the Rust keyword.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassEntry {
    /// Composite `"P-D-T-C"` code string, unique across the catalog
    pub key: String,
    /// Resolved path label
    pub path: String,
    /// Resolved difficulty label
    pub difficulty: String,
    /// Resolved tracking label
    pub tracking: String,
    /// Resolved consequence label
    pub consequence: String,
    /// Class name looked up from the nested mapping
    #[serde(rename = "class")]
    pub class_name: String,
    /// Generated narrative description
    pub description: String,
    /// Quest-format template with the consequence/tracking suffix applied
    pub quest_format: String,
    /// Description of the consequence mode
    pub consequence_description: String,
}

/// Generator for the class catalog.
///
/// Produces one [`ClassEntry`] per (path, difficulty, tracking, consequence)
/// quadruple. Any hole in the mapping tables aborts the whole expansion;
/// downstream consumers index into the catalog by key and rely on it being
/// complete.
#[derive(Debug, Clone, Default)]
pub struct ClassCatalogGenerator;

impl ClassCatalogGenerator {
    /// Creates a new class catalog generator.
    pub fn new() -> Self {
        Self
    }

    /// Suffix appended to the quest-format template for a (tracking,
    /// consequence) code pair.
    ///
    /// Tracking 2 (streaks) replaces the base consequence phrase outright
    /// instead of appending to it. Under tracking 3, consequence codes 1 and
    /// 3 share the " and dual tracking" clause; the published catalogs were
    /// generated with that duplication, so it is part of the format.
    fn consequence_suffix(tracking: u8, consequence: u8) -> String {
        let mut suffix = String::from(match consequence {
            1 => " with strict consequences",
            2 => " with self-imposed consequences",
            3 => " with no penalties",
            _ => "",
        });

        if tracking == 3 {
            suffix.push_str(match consequence {
                1 => " and dual tracking",
                2 => " and comprehensive tracking",
                3 => " and dual tracking",
                _ => "",
            });
        } else if tracking == 2 {
            suffix = String::from(match consequence {
                1 => " with strict consequences for broken streaks",
                2 => " with self-imposed streak consequences",
                3 => " with flexible streaks",
                _ => "",
            });
        }

        suffix
    }

    /// Fixed-template narrative sentence over the four lower-cased labels.
    fn describe(path: &str, difficulty: &str, tracking: &str, consequence: &str) -> String {
        format!(
            "A {} focused hero who faces {} with {} tracking and embraces {}.",
            path.to_lowercase(),
            difficulty.to_lowercase(),
            tracking.to_lowercase(),
            consequence.to_lowercase()
        )
    }
}

impl CatalogGenerator<Vec<ClassEntry>> for ClassCatalogGenerator {
    fn generate(&self, config: &ForgeConfig) -> QuestforgeResult<Vec<ClassEntry>> {
        let mut entries = Vec::with_capacity(config.expected_class_count());

        for p in config.path_codes() {
            let path = config.path_label(p)?;

            for d in config.difficulty_codes() {
                let difficulty = config.difficulty_label(d)?;

                for t in config.tracking_codes() {
                    let tracking = config.tracking_label(t)?;

                    for c in config.consequence_codes() {
                        let consequence = config.consequence_label(c)?;

                        let class_name = config.class_name(path, difficulty, tracking, consequence)?;
                        let quest_format = config.quest_template(path, difficulty)?;
                        let consequence_description = config.consequence_description(consequence)?;

                        entries.push(ClassEntry {
                            key: format!("{}-{}-{}-{}", p, d, t, c),
                            path: path.to_string(),
                            difficulty: difficulty.to_string(),
                            tracking: tracking.to_string(),
                            consequence: consequence.to_string(),
                            class_name: class_name.to_string(),
                            description: Self::describe(path, difficulty, tracking, consequence),
                            quest_format: format!(
                                "{}{}",
                                quest_format,
                                Self::consequence_suffix(t, c)
                            ),
                            consequence_description: consequence_description.to_string(),
                        });
                    }
                }
            }
        }

        log::debug!("expanded {} class entries", entries.len());
        Ok(entries)
    }

    fn validate(&self, content: &Vec<ClassEntry>, config: &ForgeConfig) -> QuestforgeResult<()> {
        let expected = config.expected_class_count();
        if content.len() != expected {
            return Err(QuestforgeError::GenerationFailed(format!(
                "class catalog has {} entries, expected {}",
                content.len(),
                expected
            )));
        }

        let mut keys = HashSet::with_capacity(content.len());
        for entry in content {
            if !keys.insert(entry.key.as_str()) {
                return Err(QuestforgeError::GenerationFailed(format!(
                    "duplicate class key {}",
                    entry.key
                )));
            }
        }

        Ok(())
    }

    fn generator_type(&self) -> &'static str {
        "ClassCatalogGenerator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::{AxisTables, ConsequenceModifier, QuestTemplate};
    use std::collections::BTreeMap;

    fn label_map(labels: &[(u8, &str)]) -> BTreeMap<u8, String> {
        labels
            .iter()
            .map(|(code, label)| (*code, label.to_string()))
            .collect()
    }

    /// Full four-axis document with synthetic class names and templates.
    fn test_config() -> ForgeConfig {
        let util = AxisTables {
            path_map: label_map(&[(1, "Mind"), (2, "Body"), (3, "Balanced")]),
            difficulty_map: label_map(&[
                (1, "Daily Trials"),
                (2, "Epic Missions"),
                (3, "Relentless Campaign"),
                (4, "Seasonal Conquests"),
                (5, "Spartan Trials"),
            ]),
            tracking_map: label_map(&[(1, "Leveling System"), (2, "Streaks & Habits"), (3, "Both")]),
            consequence_map: label_map(&[
                (1, "Yes Bring It On"),
                (2, "Choose My Own Punishments"),
                (3, "Without Consequence"),
            ]),
        };

        let mut class_mapping = BTreeMap::new();
        let mut quest_templates = BTreeMap::new();
        for path in util.path_map.values() {
            let mut by_difficulty = BTreeMap::new();
            let mut templates_by_difficulty = BTreeMap::new();
            for difficulty in util.difficulty_map.values() {
                let mut by_tracking = BTreeMap::new();
                for tracking in util.tracking_map.values() {
                    let mut by_consequence = BTreeMap::new();
                    for consequence in util.consequence_map.values() {
                        by_consequence.insert(
                            consequence.clone(),
                            format!("{} {} {} {}", path, difficulty, tracking, consequence),
                        );
                    }
                    by_tracking.insert(tracking.clone(), by_consequence);
                }
                by_difficulty.insert(difficulty.clone(), by_tracking);
                templates_by_difficulty.insert(
                    difficulty.clone(),
                    QuestTemplate {
                        format: format!("Pursue {} {}", path, difficulty),
                    },
                );
            }
            class_mapping.insert(path.clone(), by_difficulty);
            quest_templates.insert(path.clone(), templates_by_difficulty);
        }

        let consequence_modifiers = util
            .consequence_map
            .values()
            .map(|consequence| {
                (
                    consequence.clone(),
                    ConsequenceModifier {
                        description: format!("{} description", consequence),
                    },
                )
            })
            .collect();

        ForgeConfig {
            util,
            class_mapping,
            quest_templates,
            consequence_modifiers,
            base_activities: Vec::new(),
        }
    }

    #[test]
    fn test_full_expansion_count_and_order() {
        let config = test_config();
        let entries = ClassCatalogGenerator::new().generate(&config).unwrap();

        assert_eq!(entries.len(), 135);
        assert_eq!(entries.first().unwrap().key, "1-1-1-1");
        assert_eq!(entries.last().unwrap().key, "3-5-3-3");

        // Consequence is the innermost axis
        assert_eq!(entries[1].key, "1-1-1-2");
        assert_eq!(entries[3].key, "1-1-2-1");
    }

    #[test]
    fn test_keys_unique() {
        let config = test_config();
        let entries = ClassCatalogGenerator::new().generate(&config).unwrap();

        let keys: std::collections::HashSet<_> = entries.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys.len(), entries.len());
    }

    #[test]
    fn test_labels_and_class_name_resolved() {
        let config = test_config();
        let entries = ClassCatalogGenerator::new().generate(&config).unwrap();

        let entry = entries.iter().find(|e| e.key == "2-5-3-1").unwrap();
        assert_eq!(entry.path, "Body");
        assert_eq!(entry.difficulty, "Spartan Trials");
        assert_eq!(entry.tracking, "Both");
        assert_eq!(entry.consequence, "Yes Bring It On");
        assert_eq!(entry.class_name, "Body Spartan Trials Both Yes Bring It On");
        assert_eq!(entry.consequence_description, "Yes Bring It On description");
    }

    #[test]
    fn test_description_template() {
        let config = test_config();
        let entries = ClassCatalogGenerator::new().generate(&config).unwrap();

        let entry = entries.iter().find(|e| e.key == "1-1-1-1").unwrap();
        assert_eq!(
            entry.description,
            "A mind focused hero who faces daily trials with leveling system tracking \
             and embraces yes bring it on."
        );
    }

    #[test]
    fn test_plain_suffix_under_leveling() {
        assert_eq!(
            ClassCatalogGenerator::consequence_suffix(1, 1),
            " with strict consequences"
        );
        assert_eq!(
            ClassCatalogGenerator::consequence_suffix(1, 2),
            " with self-imposed consequences"
        );
        assert_eq!(
            ClassCatalogGenerator::consequence_suffix(1, 3),
            " with no penalties"
        );
    }

    #[test]
    fn test_dual_tracking_clause_is_duplicated() {
        // Consequence codes 1 and 3 both get " and dual tracking" under
        // tracking 3. The duplication is part of the published format.
        let strict = ClassCatalogGenerator::consequence_suffix(3, 1);
        let none = ClassCatalogGenerator::consequence_suffix(3, 3);

        assert_eq!(strict, " with strict consequences and dual tracking");
        assert_eq!(none, " with no penalties and dual tracking");
        assert!(strict.ends_with(" and dual tracking"));
        assert!(none.ends_with(" and dual tracking"));
        assert_eq!(
            ClassCatalogGenerator::consequence_suffix(3, 2),
            " with self-imposed consequences and comprehensive tracking"
        );
    }

    #[test]
    fn test_streak_suffix_replaces_base_phrase() {
        // Tracking 2 overrides the consequence phrase instead of appending.
        assert_eq!(
            ClassCatalogGenerator::consequence_suffix(2, 2),
            " with self-imposed streak consequences"
        );
        assert_eq!(
            ClassCatalogGenerator::consequence_suffix(2, 1),
            " with strict consequences for broken streaks"
        );
        assert_eq!(
            ClassCatalogGenerator::consequence_suffix(2, 3),
            " with flexible streaks"
        );
    }

    #[test]
    fn test_quest_format_concatenation() {
        let config = test_config();
        let entries = ClassCatalogGenerator::new().generate(&config).unwrap();

        let entry = entries.iter().find(|e| e.key == "1-2-3-1").unwrap();
        assert_eq!(
            entry.quest_format,
            "Pursue Mind Epic Missions with strict consequences and dual tracking"
        );
    }

    #[test]
    fn test_missing_class_mapping_aborts() {
        let mut config = test_config();
        config
            .class_mapping
            .get_mut("Body")
            .unwrap()
            .get_mut("Spartan Trials")
            .unwrap()
            .get_mut("Both")
            .unwrap()
            .remove("Yes Bring It On");

        let err = ClassCatalogGenerator::new().generate(&config).unwrap_err();
        assert!(matches!(err, QuestforgeError::MissingMapping(_)));
        assert!(err.to_string().contains("Body/Spartan Trials/Both/Yes Bring It On"));
    }

    #[test]
    fn test_missing_quest_template_aborts() {
        let mut config = test_config();
        config.quest_templates.remove("Balanced");

        let err = ClassCatalogGenerator::new().generate(&config).unwrap_err();
        assert!(matches!(err, QuestforgeError::MissingMapping(_)));
    }

    #[test]
    fn test_validate_rejects_incomplete_catalog() {
        let config = test_config();
        let generator = ClassCatalogGenerator::new();
        let mut entries = generator.generate(&config).unwrap();

        generator.validate(&entries, &config).unwrap();

        entries.pop();
        let err = generator.validate(&entries, &config).unwrap_err();
        assert!(matches!(err, QuestforgeError::GenerationFailed(_)));
    }

    #[test]
    fn test_validate_rejects_duplicate_keys() {
        let config = test_config();
        let generator = ClassCatalogGenerator::new();
        let mut entries = generator.generate(&config).unwrap();

        let first = entries.first().unwrap().clone();
        let len = entries.len();
        entries[len - 1] = first;

        let err = generator.validate(&entries, &config).unwrap_err();
        assert!(matches!(err, QuestforgeError::GenerationFailed(_)));
        assert!(err.to_string().contains("duplicate"));
    }
}
