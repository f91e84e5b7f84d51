#![forbid(unsafe_code)]

//! Runtime settings taken from the environment
//!
//! - `XRAY_LINK_JSON_CONVERTER`: converter program (default `libxray-convert`)
//! - `XRAY_LINK_JSON_COLOR`: `auto`, `always` or `never`
//! - `NO_COLOR`: any non-empty value disables color unless overridden

use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

pub const CONVERTER_ENV: &str = "XRAY_LINK_JSON_CONVERTER";
pub const COLOR_ENV: &str = "XRAY_LINK_JSON_COLOR";
pub const NO_COLOR_ENV: &str = "NO_COLOR";

/// Converter program looked up on `PATH` when none is configured
pub const DEFAULT_CONVERTER: &str = "libxray-convert";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid XRAY_LINK_JSON_COLOR value '{0}': expected auto, always or never")]
    InvalidColor(String),
}

/// Color mode for the diagnostic stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorOption {
    /// Color only when stderr is an interactive terminal
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorOption {
    pub fn to_color_choice(self, is_terminal: bool) -> termcolor::ColorChoice {
        match self {
            ColorOption::Always => termcolor::ColorChoice::Always,
            ColorOption::Never => termcolor::ColorChoice::Never,
            ColorOption::Auto if is_terminal => termcolor::ColorChoice::Auto,
            ColorOption::Auto => termcolor::ColorChoice::Never,
        }
    }
}

impl FromStr for ColorOption {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(ColorOption::Auto),
            "always" => Ok(ColorOption::Always),
            "never" => Ok(ColorOption::Never),
            _ => Err(ConfigError::InvalidColor(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Program implementing the conversion boundary
    pub converter: PathBuf,
    pub color: ColorOption,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            converter: PathBuf::from(DEFAULT_CONVERTER),
            color: ColorOption::Auto,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary variable lookup
    ///
    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let converter = get(CONVERTER_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONVERTER));

        let color = match get(COLOR_ENV) {
            Some(value) => value.parse()?,
            None if get(NO_COLOR_ENV).is_some() => ColorOption::Never,
            None => ColorOption::Auto,
        };

        Ok(Config { converter, color })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        assert_eq!(config_from(&[]).unwrap(), Config::default());
    }

    #[test]
    fn test_converter_override() {
        let config = config_from(&[(CONVERTER_ENV, "/opt/libxray/convert")]).unwrap();
        assert_eq!(config.converter, PathBuf::from("/opt/libxray/convert"));
    }

    #[test]
    fn test_empty_converter_uses_default() {
        let config = config_from(&[(CONVERTER_ENV, "")]).unwrap();
        assert_eq!(config.converter, PathBuf::from(DEFAULT_CONVERTER));
    }

    #[test]
    fn test_color_values() {
        assert_eq!(
            config_from(&[(COLOR_ENV, "Always")]).unwrap().color,
            ColorOption::Always
        );
        assert_eq!(
            config_from(&[(COLOR_ENV, "never")]).unwrap().color,
            ColorOption::Never
        );
        assert_eq!(
            config_from(&[(COLOR_ENV, "invalid")]).unwrap_err(),
            ConfigError::InvalidColor("invalid".to_string())
        );
    }

    #[test]
    fn test_no_color_and_explicit_override() {
        assert_eq!(
            config_from(&[(NO_COLOR_ENV, "1")]).unwrap().color,
            ColorOption::Never
        );
        assert_eq!(
            config_from(&[(NO_COLOR_ENV, "1"), (COLOR_ENV, "always")])
                .unwrap()
                .color,
            ColorOption::Always
        );
        assert_eq!(
            config_from(&[(NO_COLOR_ENV, "")]).unwrap().color,
            ColorOption::Auto
        );
    }

    #[test]
    fn test_auto_follows_terminal() {
        use termcolor::ColorChoice;

        assert_eq!(ColorOption::Auto.to_color_choice(true), ColorChoice::Auto);
        assert_eq!(ColorOption::Auto.to_color_choice(false), ColorChoice::Never);
        assert_eq!(ColorOption::Always.to_color_choice(false), ColorChoice::Always);
        assert_eq!(ColorOption::Never.to_color_choice(true), ColorChoice::Never);
    }
}
