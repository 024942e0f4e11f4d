//! # Questforge Main Entry Point
//!
//! Reads the configuration document, expands the class and quest catalogs,
//! and writes them to the assets directory.

use clap::Parser;
use log::info;
use questforge::{
    config, write_catalog, CatalogGenerator, ClassCatalogGenerator, ForgeConfig,
    QuestCatalogGenerator, QuestforgeResult,
};
use std::path::PathBuf;

/// Command line arguments for the questforge catalog generator.
#[derive(Parser, Debug)]
#[command(name = "questforge")]
#[command(about = "Expands class and quest configuration tables into static catalogs")]
#[command(version)]
struct Args {
    /// Path to the configuration document
    #[arg(short, long, default_value = config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Directory to write both catalogs into, overriding the default
    /// assets destinations
    #[arg(short, long)]
    out_dir: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Args {
    /// Destination paths for the class and quest catalogs.
    fn catalog_paths(&self) -> (PathBuf, PathBuf) {
        match &self.out_dir {
            Some(dir) => (dir.join("classes.json"), dir.join("quests.json")),
            None => (
                PathBuf::from(config::DEFAULT_CLASS_CATALOG_PATH),
                PathBuf::from(config::DEFAULT_QUEST_CATALOG_PATH),
            ),
        }
    }
}

fn main() -> QuestforgeResult<()> {
    let args = Args::parse();

    initialize_logging(&args.log_level);

    info!("Starting questforge v{}", questforge::VERSION);

    let forge_config = ForgeConfig::from_path(&args.config)?;
    info!("Loaded configuration from {}", args.config.display());

    let (class_path, quest_path) = args.catalog_paths();

    let class_generator = ClassCatalogGenerator::new();
    let classes = class_generator.generate(&forge_config)?;
    class_generator.validate(&classes, &forge_config)?;
    info!("Generated {} class entries", classes.len());

    let quest_generator = QuestCatalogGenerator::new();
    let quests = quest_generator.generate(&forge_config)?;
    quest_generator.validate(&quests, &forge_config)?;
    info!("Generated {} quest entries", quests.len());

    // Both catalogs are fully generated and validated before either file is
    // touched, so a generation failure leaves prior catalogs as they were.
    write_catalog(&class_path, &classes)?;
    info!("Class catalog saved to {}", class_path.display());

    write_catalog(&quest_path, &quests)?;
    info!("Quest catalog saved to {}", quest_path.display());

    Ok(())
}

/// Initializes the logging system based on the specified log level.
fn initialize_logging(log_level: &str) {
    let level = match log_level.to_lowercase().as_str() {
        "error" => log::LevelFilter::Error,
        "warn" => log::LevelFilter::Warn,
        "info" => log::LevelFilter::Info,
        "debug" => log::LevelFilter::Debug,
        "trace" => log::LevelFilter::Trace,
        _ => log::LevelFilter::Info,
    };

    env_logger::Builder::new().filter_level(level).init();
}
