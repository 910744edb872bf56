//! Runtime configuration resolved from CLI flags, environment and defaults.

use crate::cli::{Cli, OutputFormat};
use stamplist_core::{default_log_level, LogLevel, LoggingError};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

const DEFAULT_DB_FILE_NAME: &str = "stamplist.sqlite3";
const DEFAULT_LOG_DIR_NAME: &str = "stamplist-logs";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub db_path: PathBuf,
    /// Always absolute.
    pub log_dir: PathBuf,
    pub log_level: LogLevel,
    pub format: OutputFormat,
    pub preview: bool,
}

#[derive(Debug)]
pub enum ConfigError {
    LogLevel(LoggingError),
    CurrentDir(std::io::Error),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LogLevel(err) => write!(f, "invalid configuration: {err}"),
            Self::CurrentDir(err) => write!(f, "cannot resolve current directory: {err}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::LogLevel(err) => Some(err),
            Self::CurrentDir(err) => Some(err),
        }
    }
}

impl AppConfig {
    /// Resolves configuration relative to the process working directory.
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let cwd = std::env::current_dir().map_err(ConfigError::CurrentDir)?;
        Self::resolve(cli, &cwd)
    }

    /// Resolves configuration; relative paths are joined onto `cwd`.
    pub fn resolve(cli: &Cli, cwd: &Path) -> Result<Self, ConfigError> {
        let log_level = match cli.log_level.as_deref() {
            Some(value) => value.parse::<LogLevel>().map_err(ConfigError::LogLevel)?,
            None => default_log_level(),
        };

        let db_path = absolutize(
            cli.db
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_FILE_NAME)),
            cwd,
        );
        let log_dir = absolutize(
            cli.log_dir
                .clone()
                .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_LOG_DIR_NAME)),
            cwd,
        );

        Ok(Self {
            db_path,
            log_dir,
            log_level,
            format: cli.format,
            preview: cli.preview,
        })
    }
}

fn absolutize(path: PathBuf, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        cwd.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::{AppConfig, ConfigError};
    use crate::cli::{Cli, Command, OutputFormat};
    use clap::Parser;
    use stamplist_core::{default_log_level, LogLevel};
    use std::path::Path;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn defaults_are_absolute() {
        let cli = Cli {
            command: Command::List,
            db: None,
            log_dir: None,
            log_level: None,
            format: OutputFormat::Text,
            preview: false,
        };
        let config = AppConfig::resolve(&cli, Path::new("/work")).unwrap();

        assert_eq!(config.db_path, Path::new("/work/stamplist.sqlite3"));
        assert!(config.log_dir.is_absolute());
        assert_eq!(config.log_level, default_log_level());
    }

    #[test]
    fn flags_override_defaults() {
        let cli = parse(&[
            "stamplist",
            "--db",
            "data/items.db",
            "--log-dir",
            "/var/log/stamplist",
            "--log-level",
            "WARNING",
            "--format",
            "json",
            "add",
            "--count",
            "3",
        ]);
        let config = AppConfig::resolve(&cli, Path::new("/work")).unwrap();

        assert_eq!(config.db_path, Path::new("/work/data/items.db"));
        assert_eq!(config.log_dir, Path::new("/var/log/stamplist"));
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(cli.command, Command::Add { count: 3 });
    }

    #[test]
    fn unknown_log_level_is_rejected() {
        let cli = parse(&["stamplist", "--log-level", "chatty", "list"]);
        let err = AppConfig::resolve(&cli, Path::new("/work")).unwrap_err();
        assert!(matches!(err, ConfigError::LogLevel(_)));
    }
}
