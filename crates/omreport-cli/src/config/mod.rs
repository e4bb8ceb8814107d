//! Configuration management.

use anyhow::{Context as _, Result};
use directories::ProjectDirs;
use omreport::{Fingerprint, OmReportConfig};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::output::OutputFormat;

/// CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Where omcliproxy lives and how strictly it is checked.
    #[serde(flatten)]
    pub omreport: OmReportConfig,

    /// Known-good fingerprint of omcliproxy, checked by `verify`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_fingerprint: Option<Fingerprint>,

    /// Default output format.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_format: Option<OutputFormat>,
}

/// Keys accepted by [`Config::set`].
pub const KEYS: [(&str, &str); 5] = [
    ("omcliproxy_path", "Full path to omcliproxy"),
    ("omcliproxy_dir", "Directory holding omcliproxy"),
    ("enhanced_security_mode", "Re-hash omcliproxy before every report (true/false)"),
    ("expected_fingerprint", "Known-good SHA-256 of omcliproxy"),
    ("output_format", "Default output format (pretty/json/yaml)"),
];

impl Config {
    /// Get the default config file path.
    pub fn default_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("", "", "omreport-rs")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Load configuration from file, or defaults if it does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config: Self =
            toml::from_str(&content).with_context(|| format!("parsing {}", path.display()))?;

        Ok(config)
    }

    /// Save configuration to file.
    pub fn save(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).with_context(|| format!("writing {}", path.display()))?;

        Ok(())
    }

    /// Set one key from its string form.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "omcliproxy_path" | "proxy_path" => {
                self.omreport.omcliproxy_path = Some(value.into());
            }
            "omcliproxy_dir" | "proxy_dir" => {
                self.omreport.omcliproxy_dir = Some(value.into());
            }
            "enhanced_security_mode" | "enhanced_security" => {
                self.omreport.enhanced_security_mode = value
                    .parse()
                    .with_context(|| format!("{key} must be true or false"))?;
            }
            "expected_fingerprint" => {
                self.expected_fingerprint = Some(
                    value
                        .parse()
                        .with_context(|| format!("{key} must be 64 hex characters"))?,
                );
            }
            "output_format" | "output" => {
                self.output_format = Some(value.parse()?);
            }
            _ => {
                let available: Vec<String> = KEYS
                    .iter()
                    .map(|(key, help)| format!("  {key:<24}- {help}"))
                    .collect();
                anyhow::bail!(
                    "Unknown config key: {}\n\nAvailable keys:\n{}",
                    key,
                    available.join("\n")
                );
            }
        }
        Ok(())
    }
}
