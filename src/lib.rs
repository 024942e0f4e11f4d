//! # Questforge
//!
//! Offline content generator for the habit-RPG companion app.
//!
//! ## Architecture Overview
//!
//! Questforge is a batch tool: it runs once, reads a single configuration
//! document, and expands it into the two static catalogs the app ships with:
//!
//! - **Class catalog**: every combination of the four persona axes (path,
//!   difficulty, tracking, consequence) resolved to a named hero class with
//!   generated narrative content.
//! - **Quest catalog**: every base activity scaled across the five intensity
//!   levels.
//!
//! Generation is a pure function of the configuration document: no
//! randomness, no I/O. File reading and writing live at the edges
//! ([`tables::ForgeConfig::from_path`] and [`output::write_catalog`]), and
//! the writer is atomic so a failed run never leaves a truncated catalog
//! behind.

pub mod generation;
pub mod output;
pub mod tables;

// Core module re-exports
pub use generation::*;
pub use output::*;
pub use tables::*;

/// Core error type for the questforge generator.
#[derive(thiserror::Error, Debug)]
pub enum QuestforgeError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Configuration document is semantically invalid
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A table lookup during expansion has no matching entry
    #[error("Missing mapping: {0}")]
    MissingMapping(String),

    /// A generated catalog violates its output guarantees
    #[error("Generation failed: {0}")]
    GenerationFailed(String),

    /// Catalog could not be written to its destination
    #[error("Catalog write failed: {0}")]
    WriteFailed(String),
}

/// Result type used throughout the questforge codebase.
pub type QuestforgeResult<T> = Result<T, QuestforgeError>;

/// Version information for the generator.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Generator configuration constants.
pub mod config {
    /// Default input configuration document
    pub const DEFAULT_CONFIG_PATH: &str = "assets/forge-config.json";

    /// Default destination for the generated class catalog
    pub const DEFAULT_CLASS_CATALOG_PATH: &str = "assets/classes.json";

    /// Default destination for the generated quest catalog
    pub const DEFAULT_QUEST_CATALOG_PATH: &str = "assets/quests.json";

    /// Number of intensity levels each base activity is scaled across
    pub const INTENSITY_LEVELS: usize = 5;
}
