//! Client configuration types.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default directory that contains `omcliproxy`.
pub const DEFAULT_OMCLIPROXY_DIR: &str = "/opt/dell/srvadmin/sbin";

/// The only base name accepted for the proxy binary.
pub const OMCLIPROXY_BINARY_NAME: &str = "omcliproxy";

/// Sub-command passed to `omcliproxy`.
pub const OMREPORT_COMMAND: &str = "omreport";

/// Arguments appended to every report to request XML output.
pub const XML_FORMAT_ARGS: [&str; 2] = ["-fmt", "xml"];

/// Configuration for an [`OmReport`](crate::OmReport) client.
///
/// Unset fields fall back to the defaults above when the path is resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OmReportConfig {
    /// Full path to the `omcliproxy` binary
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub omcliproxy_path: Option<PathBuf>,

    /// Directory holding `omcliproxy`, used when no full path is given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub omcliproxy_dir: Option<PathBuf>,

    /// Re-hash the binary before every invocation and refuse to run it if
    /// it changed since the client was built
    #[serde(default)]
    pub enhanced_security_mode: bool,
}

impl OmReportConfig {
    /// Create a configuration with every field unset
    #[must_use]
    pub const fn new() -> Self {
        Self {
            omcliproxy_path: None,
            omcliproxy_dir: None,
            enhanced_security_mode: false,
        }
    }

    /// Set the full path to `omcliproxy`
    #[must_use]
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.omcliproxy_path = Some(path.into());
        self
    }

    /// Set the directory that contains `omcliproxy`
    #[must_use]
    pub fn with_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.omcliproxy_dir = Some(dir.into());
        self
    }

    /// Enable or disable enhanced security mode
    #[must_use]
    pub const fn enhanced_security_mode(mut self, enabled: bool) -> Self {
        self.enhanced_security_mode = enabled;
        self
    }

    /// Path the client will validate and execute
    #[must_use]
    pub fn resolved_path(&self) -> PathBuf {
        self.omcliproxy_path.clone().unwrap_or_else(|| {
            self.omcliproxy_dir
                .as_deref()
                .unwrap_or_else(|| Path::new(DEFAULT_OMCLIPROXY_DIR))
                .join(OMCLIPROXY_BINARY_NAME)
        })
    }
}
