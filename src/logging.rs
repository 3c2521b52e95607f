//! Logger setup for applications and tests using this crate.
//!
//! The library itself only emits through the `log` facade. Call
//! [`init_logging`] once to route those records through log4rs.

use log::LevelFilter;
use log4rs::append::console::ConsoleAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::Path;
use std::str::FromStr;

/// Environment variable naming the log4rs YAML file.
pub const LOG_CONFIG_ENV: &str = "IP_NETS_LOG_CONFIG";
/// Environment variable holding the fallback log level (e.g. "debug").
pub const LOG_LEVEL_ENV: &str = "IP_NETS_LOG_LEVEL";
/// Config file used when neither argument nor environment name one.
pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

/// Initialise log4rs.
///
/// The config file is `config_file`, else `$IP_NETS_LOG_CONFIG`, else
/// `log4rs.yml`. Variables may come from a `.env` file. If the file does not
/// exist a console logger is set up at `$IP_NETS_LOG_LEVEL` (default `warn`).
///
/// Fails if a logger is already installed or the config is invalid.
pub fn init_logging(config_file: Option<&str>) -> Result<(), Box<dyn Error>> {
    dotenv::dotenv().ok();

    let config_file = config_path(config_file, std::env::var(LOG_CONFIG_ENV).ok());

    if Path::new(&config_file).exists() {
        log4rs::init_file(&config_file, Default::default())
            .map_err(|e| format!("Error initializing log4rs from {config_file}: {e}"))?;
        log::debug!("Logging configured from {config_file}");
        return Ok(());
    }

    let level = fallback_level()?;
    let stdout = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} {h({l})} {M} - {m}{n}",
        )))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .build(Root::builder().appender("stdout").build(level))
        .map_err(|e| format!("Error building log4rs config: {e}"))?;
    log4rs::init_config(config).map_err(|e| format!("Error initializing log4rs: {e}"))?;
    log::debug!("Logging to console at level {level}, no config file {config_file}");
    Ok(())
}

/// Config file from the argument, else the environment value, else the default.
fn config_path(arg: Option<&str>, env: Option<String>) -> String {
    match (arg, env) {
        (Some(file), _) => file.to_string(),
        (None, Some(file)) => file,
        (None, None) => DEFAULT_LOG_CONFIG.to_string(),
    }
}

fn fallback_level() -> Result<LevelFilter, Box<dyn Error>> {
    parse_level(std::env::var(LOG_LEVEL_ENV).ok().as_deref())
}

fn parse_level(level: Option<&str>) -> Result<LevelFilter, Box<dyn Error>> {
    match level {
        Some(level) => LevelFilter::from_str(level.trim())
            .map_err(|_| format!("Invalid log level in {LOG_LEVEL_ENV}: {level}").into()),
        None => Ok(LevelFilter::Warn),
    }
}
