//! Runtime configuration.
//!
//! Values come from command-line flags first, then the environment (a `.env` file is
//! loaded by `main`), then built-in defaults.

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config as LogConfig, Root};
use std::env;
use std::error::Error;
use std::path::{Path, PathBuf};

/// Catalog file used when nothing else is configured.
pub const DEFAULT_CATALOG_FILE: &str = "reserved_ip.json";
/// Logging configuration used when nothing else is configured.
pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";
/// Environment variable naming the catalog file.
pub const CATALOG_ENV: &str = "IP_ATTRIBUTES_CATALOG";
/// Environment variable naming the log4rs configuration file.
pub const LOG_CONFIG_ENV: &str = "IP_ATTRIBUTES_LOG_CONFIG";

/// Resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Reserved-range catalog to load.
    pub catalog_file: PathBuf,
    /// Whether `catalog_file` came from the flag or the environment.
    pub catalog_explicit: bool,
    /// log4rs YAML configuration.
    pub log_config: PathBuf,
}

impl Config {
    /// Resolve settings from an optional `--catalog` flag and the process environment.
    pub fn resolve(catalog_flag: Option<PathBuf>) -> Config {
        Config::resolve_with(catalog_flag, |key| env::var(key).ok())
    }

    /// Resolve settings with a custom environment lookup.
    pub fn resolve_with<F>(catalog_flag: Option<PathBuf>, lookup: F) -> Config
    where
        F: Fn(&str) -> Option<String>,
    {
        let from_env = |key: &str, default: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(default))
        };
        let catalog_explicit = catalog_flag.is_some()
            || lookup(CATALOG_ENV).is_some_and(|v| !v.trim().is_empty());
        Config {
            catalog_file: catalog_flag
                .unwrap_or_else(|| from_env(CATALOG_ENV, DEFAULT_CATALOG_FILE)),
            catalog_explicit,
            log_config: from_env(LOG_CONFIG_ENV, DEFAULT_LOG_CONFIG),
        }
    }
}

/// Initialise log4rs from a YAML file, or warn-level logging to stderr without one.
pub fn init_logging(log_config: &Path) -> Result<(), Box<dyn Error>> {
    if log_config.exists() {
        log4rs::init_file(log_config, Default::default())?;
        log::debug!("log4rs initialised from {}", log_config.display());
        return Ok(());
    }

    let stderr = ConsoleAppender::builder().target(Target::Stderr).build();
    let config = LogConfig::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn))?;
    log4rs::init_config(config)?;
    Ok(())
}
