//! Command-line and environment configuration

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::model::DEFAULT_BASE_URL;
use crate::model::favorites::FAVORITES_FILE_NAME;

#[derive(Debug, Parser)]
#[command(name = "quoterm", version, about = "Random quotes in your terminal")]
pub struct Config {
    /// Base URL of the quote API
    #[arg(long, env = "QUOTERM_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Where favorites are stored (defaults to the user data directory)
    #[arg(long, env = "QUOTERM_FAVORITES")]
    pub favorites_file: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(long, env = "QUOTERM_TIMEOUT_SECS", default_value_t = 10)]
    pub timeout_secs: u64,

    /// Start in dark mode
    #[arg(long, env = "QUOTERM_DARK")]
    pub dark: bool,

    /// Directory for log files
    #[arg(long, env = "QUOTERM_LOG_DIR", default_value = ".logs")]
    pub log_dir: PathBuf,
}

impl Config {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn favorites_path(&self) -> PathBuf {
        if let Some(path) = &self.favorites_file {
            return path.clone();
        }
        dirs::data_dir()
            .map(|dir| dir.join("quoterm"))
            .unwrap_or_else(|| PathBuf::from(".quoterm"))
            .join(FAVORITES_FILE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::try_parse_from(["quoterm"]).unwrap();
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert!(config.favorites_path().ends_with("favoriteQuotes.json"));
    }

    #[test]
    fn explicit_flags() {
        let config = Config::try_parse_from([
            "quoterm",
            "--base-url",
            "http://localhost:4000",
            "--favorites-file",
            "/tmp/favs.json",
            "--timeout-secs",
            "3",
            "--dark",
        ])
        .unwrap();
        assert_eq!(config.base_url, "http://localhost:4000");
        assert_eq!(config.favorites_path(), PathBuf::from("/tmp/favs.json"));
        assert_eq!(config.timeout_secs, 3);
        assert!(config.dark);
    }

    #[test]
    fn rejects_non_numeric_timeout() {
        assert!(Config::try_parse_from(["quoterm", "--timeout-secs", "soon"]).is_err());
    }
}
