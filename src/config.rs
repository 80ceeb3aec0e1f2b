use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TeamsError};

pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";
pub const DEFAULT_COLUMNS: usize = 3;

const API_URL_ENV: &str = "TEAMS_API_URL";
const API_TOKEN_ENV: &str = "TEAMS_API_TOKEN";

#[derive(Deserialize, Serialize, Default, Debug, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub columns: Option<usize>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            return Ok(Config::default());
        }

        let contents =
            std::fs::read_to_string(&config_path).map_err(|e| TeamsError::ConfigRead {
                path: config_path.clone(),
                source: e,
            })?;

        Self::parse(&contents).map_err(|e| TeamsError::ConfigParse {
            path: config_path,
            source: e,
        })
    }

    pub fn parse(contents: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    pub fn config_path() -> Result<PathBuf> {
        ProjectDirs::from("", "", "team-browser")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .ok_or(TeamsError::NoConfigDir)
    }

    /// Get API URL, preferring an explicit argument, then the env var, then the config file
    pub fn resolve_api_url(&self, explicit: Option<&str>) -> String {
        self.resolve_api_url_with(explicit, std::env::var(API_URL_ENV).ok())
    }

    fn resolve_api_url_with(&self, explicit: Option<&str>, env: Option<String>) -> String {
        explicit
            .map(String::from)
            .or(env)
            .or_else(|| self.api_url.clone())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
    }

    /// Get auth token with env var taking precedence over config file
    pub fn auth_token(&self) -> Option<String> {
        self.auth_token_with(std::env::var(API_TOKEN_ENV).ok())
    }

    fn auth_token_with(&self, env: Option<String>) -> Option<String> {
        env.or_else(|| self.auth_token.clone())
            .filter(|token| !token.trim().is_empty())
    }

    /// A configured token is what counts as being logged in.
    pub fn is_login(&self) -> bool {
        self.auth_token().is_some()
    }

    /// Zero columns from either source is ignored.
    pub fn columns(&self, explicit: Option<usize>) -> usize {
        let usable = |columns: &usize| *columns > 0;
        explicit
            .filter(usable)
            .or(self.columns.filter(usable))
            .unwrap_or(DEFAULT_COLUMNS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_config() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn test_parse_full_config() {
        let config = Config::parse(
            r#"
api_url = "https://teams.example.com/api"
auth_token = "secret"
columns = 2
"#,
        )
        .unwrap();

        assert_eq!(config.api_url.as_deref(), Some("https://teams.example.com/api"));
        assert_eq!(config.auth_token.as_deref(), Some("secret"));
        assert_eq!(config.columns, Some(2));
    }

    #[test]
    fn test_to_toml_reads_back() {
        let config = Config {
            api_url: Some("https://teams.example.com/api".to_string()),
            auth_token: Some("secret".to_string()),
            columns: None,
        };
        let contents = config.to_toml().unwrap();

        assert!(!contents.contains("columns"));
        assert_eq!(Config::parse(&contents).unwrap(), config);
        assert_eq!(Config::default().to_toml().unwrap(), "");
    }

    #[test]
    fn test_parse_rejects_wrong_types() {
        assert!(Config::parse("columns = \"three\"").is_err());
    }

    #[test]
    fn test_explicit_api_url_wins() {
        let config = Config {
            api_url: Some("https://file.example.com".to_string()),
            ..Config::default()
        };
        assert_eq!(
            config.resolve_api_url(Some("https://flag.example.com")),
            "https://flag.example.com"
        );
    }

    #[test]
    fn test_api_url_precedence() {
        let config = Config {
            api_url: Some("https://file.example.com".to_string()),
            ..Config::default()
        };
        let env = || Some("https://env.example.com".to_string());

        assert_eq!(
            config.resolve_api_url_with(Some("https://flag.example.com"), env()),
            "https://flag.example.com"
        );
        assert_eq!(
            config.resolve_api_url_with(None, env()),
            "https://env.example.com"
        );
        assert_eq!(
            config.resolve_api_url_with(None, None),
            "https://file.example.com"
        );
        assert_eq!(
            Config::default().resolve_api_url_with(None, None),
            DEFAULT_API_URL
        );
    }

    #[test]
    fn test_auth_token_precedence() {
        let config = Config {
            auth_token: Some("from-file".to_string()),
            ..Config::default()
        };

        assert_eq!(
            config.auth_token_with(Some("from-env".to_string())).as_deref(),
            Some("from-env")
        );
        assert_eq!(config.auth_token_with(None).as_deref(), Some("from-file"));
        assert_eq!(Config::default().auth_token_with(None), None);
    }

    #[test]
    fn test_blank_token_is_logged_out() {
        let config = Config {
            auth_token: Some("   ".to_string()),
            ..Config::default()
        };
        assert_eq!(config.auth_token_with(None), None);
        assert_eq!(Config::default().auth_token_with(Some(String::new())), None);
    }

    #[test]
    fn test_columns() {
        let config = Config {
            columns: Some(4),
            ..Config::default()
        };
        assert_eq!(config.columns(None), 4);
        assert_eq!(config.columns(Some(1)), 1);
        assert_eq!(config.columns(Some(0)), 4);
        assert_eq!(Config::default().columns(None), DEFAULT_COLUMNS);
        assert_eq!(Config::default().columns(Some(0)), DEFAULT_COLUMNS);

        let zero_in_file = Config {
            columns: Some(0),
            ..Config::default()
        };
        assert_eq!(zero_in_file.columns(None), DEFAULT_COLUMNS);
        assert_eq!(zero_in_file.columns(Some(2)), 2);
    }
}
