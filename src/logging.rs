//! log4rs initialisation.

use crate::config;
use log::LevelFilter;
use log4rs::append::console::ConsoleAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::Path;
use std::str::FromStr;

/// Initialise logging from `config_file`, or from a console-only default
/// when the file does not exist.
pub fn init(config_file: &str) -> Result<(), Box<dyn Error>> {
    if Path::new(config_file).exists() {
        log4rs::init_file(config_file, Default::default())?;
        log::debug!("Logging configured from {config_file}");
        return Ok(());
    }

    log4rs::init_config(default_config(level_from_env())?)?;
    log::debug!("{config_file} not found, logging to console");
    Ok(())
}

fn level_from_env() -> LevelFilter {
    let level = config::env_or(config::ENV_LOG_LEVEL, "info");
    LevelFilter::from_str(level.trim()).unwrap_or(LevelFilter::Info)
}

fn default_config(level: LevelFilter) -> Result<Config, Box<dyn Error>> {
    let stdout = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(config::DEFAULT_LOG_PATTERN)))
        .build();

    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .build(Root::builder().appender("stdout").build(level))?;
    Ok(config)
}
