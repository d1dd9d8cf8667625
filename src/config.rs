use crate::error::{Error, Result};
use crate::report::OutputFormat;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

#[cfg(feature = "config")]
use std::fs;

/// Top-level configuration for the demo binary
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DemoConfig {
    #[serde(default)]
    pub report: ReportConfig,
}

/// How report lines are rendered
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    #[serde(default)]
    pub format: OutputFormat,

    /// Closing field of every text line; empty disables it
    #[serde(default = "default_marker")]
    pub marker: String,

    #[serde(default = "default_separator")]
    pub separator: String,
}

fn default_marker() -> String {
    "<br>".to_string()
}
fn default_separator() -> String {
    " ".to_string()
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            marker: default_marker(),
            separator: default_separator(),
        }
    }
}

impl DemoConfig {
    /// Defaults, then the optional config file, then `STROPS_*` variables
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Load configuration from TOML file
    #[cfg(feature = "config")]
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();

        let content = fs::read_to_string(path_ref).map_err(|e| {
            Error::config(format!(
                "Failed to read config file '{}': {}. Make sure the file exists and is readable.",
                path_ref.display(),
                e
            ))
        })?;

        let config: DemoConfig = toml::from_str(&content).map_err(|e| {
            Error::config(format!(
                "Failed to parse config file '{}': {}. Check TOML syntax.",
                path_ref.display(),
                e
            ))
        })?;

        log::debug!(
            "Successfully loaded configuration from: {}",
            path_ref.display()
        );
        Ok(config)
    }

    #[cfg(not(feature = "config"))]
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Err(Error::config(format!(
            "Cannot load '{}': built without the `config` feature",
            path.as_ref().display()
        )))
    }

    /// Create configuration with environment variable overrides
    pub fn from_env() -> Result<Self> {
        let mut config = DemoConfig::default();
        config.apply_env_overrides()?;
        Ok(config)
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides(|key| env::var(key).ok())
    }

    /// Apply `STROPS_FORMAT`, `STROPS_MARKER` and `STROPS_SEPARATOR` from `lookup`
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(format) = lookup("STROPS_FORMAT") {
            self.report.format = format
                .parse()
                .map_err(|_| Error::config(format!("Invalid STROPS_FORMAT value '{}'", format)))?;
        }
        if let Some(marker) = lookup("STROPS_MARKER") {
            self.report.marker = marker;
        }
        if let Some(separator) = lookup("STROPS_SEPARATOR") {
            self.report.separator = separator;
        }
        Ok(())
    }

    /// Reject settings that would break the one-line-per-operation layout
    pub fn validate(&self) -> Result<()> {
        let breaks_line = |s: &str| s.contains('\n') || s.contains('\r');

        if breaks_line(&self.report.marker) {
            return Err(Error::config("report.marker must not contain a line break"));
        }
        if breaks_line(&self.report.separator) {
            return Err(Error::config(
                "report.separator must not contain a line break",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = DemoConfig::default();
        assert_eq!(config.report.format, OutputFormat::Text);
        assert_eq!(config.report.marker, "<br>");
        assert_eq!(config.report.separator, " ");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [("STROPS_FORMAT", "json"), ("STROPS_MARKER", "")]
            .into_iter()
            .collect();
        let mut config = DemoConfig::default();
        config
            .apply_overrides(|key| vars.get(key).map(|v| v.to_string()))
            .unwrap();
        assert_eq!(config.report.format, OutputFormat::Json);
        assert_eq!(config.report.marker, "");
        assert_eq!(config.report.separator, " ");
    }

    #[test]
    fn test_invalid_format_override() {
        let mut config = DemoConfig::default();
        let err = config
            .apply_overrides(|key| (key == "STROPS_FORMAT").then(|| "xml".to_string()))
            .unwrap_err();
        assert!(err.to_string().contains("STROPS_FORMAT"));
    }

    #[test]
    fn test_validate_rejects_line_breaks() {
        let mut config = DemoConfig::default();
        config.report.marker = "<br>\n".to_string();
        assert!(config.validate().is_err());

        let mut config = DemoConfig::default();
        config.report.separator = "\r".to_string();
        assert!(config.validate().is_err());
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("strops.toml");
        fs::write(
            &path,
            "[report]\nformat = \"json\"\nseparator = \"\\t\"\n",
        )
        .unwrap();

        let config = DemoConfig::from_file(&path).unwrap();
        assert_eq!(config.report.format, OutputFormat::Json);
        assert_eq!(config.report.separator, "\t");
        assert_eq!(config.report.marker, "<br>");
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_from_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        let err = DemoConfig::from_file(&missing).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));

        let broken = dir.path().join("broken.toml");
        fs::write(&broken, "[report\n").unwrap();
        let err = DemoConfig::from_file(&broken).unwrap_err();
        assert!(err.to_string().contains("Check TOML syntax"));
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_empty_file_section_uses_defaults() {
        let config: DemoConfig = toml::from_str("[report]\n").unwrap();
        assert_eq!(config.report, ReportConfig::default());

        let config: DemoConfig = toml::from_str("").unwrap();
        assert_eq!(config.report, ReportConfig::default());
    }
}
