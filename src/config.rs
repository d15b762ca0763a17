use std::env;
use std::ffi::OsString;

use log::Level;
use thiserror::Error;

pub const USAGE: &str = "usage: life <cells|-> <generations>

  cells        rows of 0/1 separated by R, e.g. 010R001R111; `-` reads stdin
  generations  number of generations to simulate

  LIFE_LOG     log level (error, warn, info, debug, trace); default warn";

const LOG_LEVEL_VAR: &str = "LIFE_LOG";

#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum ConfigError {
    #[error("expected 2 arguments, got {0}")]
    WrongArgumentCount(usize),

    #[error("invalid LIFE_LOG level: {0:?}")]
    InvalidLogLevel(String),

    #[error("argument is not valid UTF-8: {0:?}")]
    InvalidArgument(String),
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum CellSource {
    Argument(String),
    Stdin,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Config {
    pub cells: CellSource,
    pub generations: String,
    pub log_level: Level,
}

impl Config {
    /// Build a config from the arguments following the program name and an
    /// optional log level setting.
    pub fn new<I>(args: I, log_level: Option<&str>) -> Result<Config, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let args: Vec<String> = args.into_iter().collect();

        let (cells, generations) = match args.as_slice() {
            [cells, generations] => (cells, generations),
            _ => return Err(ConfigError::WrongArgumentCount(args.len())),
        };

        let log_level = match log_level.map(str::trim) {
            None | Some("") => Level::Warn,
            Some(level) => level
                .parse()
                .map_err(|_| ConfigError::InvalidLogLevel(level.to_owned()))?,
        };

        Ok(Config {
            cells: match cells.as_str() {
                "-" => CellSource::Stdin,
                cells => CellSource::Argument(cells.to_owned()),
            },
            generations: generations.clone(),
            log_level,
        })
    }

    /// Like [`Config::new`], for raw OS arguments that may not be UTF-8.
    pub fn from_os_args<I>(args: I, log_level: Option<&str>) -> Result<Config, ConfigError>
    where
        I: IntoIterator<Item = OsString>,
    {
        let args = args
            .into_iter()
            .map(|arg| {
                arg.into_string()
                    .map_err(|arg| ConfigError::InvalidArgument(arg.to_string_lossy().into_owned()))
            })
            .collect::<Result<Vec<String>, _>>()?;

        Config::new(args, log_level)
    }

    pub fn from_env() -> Result<Config, ConfigError> {
        let level = env::var(LOG_LEVEL_VAR).ok();
        Config::from_os_args(env::args_os().skip(1), level.as_deref())
    }
}
