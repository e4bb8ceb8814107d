//! Command implementations.

pub mod about;
pub mod chassis;
pub mod config;
pub mod storage;
pub mod verify;

use anyhow::Context as _;
use omreport::{Fingerprint, OmReport, OmReportConfig};
use std::path::PathBuf;

use crate::output::OutputFormat;

/// Shared context for all commands.
#[derive(Debug, Clone)]
pub struct Context {
    /// Client configuration after flags are applied
    pub omreport: OmReportConfig,

    /// Known-good fingerprint from the config file
    pub expected_fingerprint: Option<Fingerprint>,

    /// Config file in use
    pub config_path: PathBuf,

    /// Output format
    pub output_format: OutputFormat,

    /// Verbose output
    pub verbose: bool,

    /// Disable colors
    pub no_color: bool,
}

impl Context {
    /// Validate omcliproxy and create a client for it.
    pub fn client(&self) -> anyhow::Result<OmReport> {
        let path = self.omreport.resolved_path();
        OmReport::new(self.omreport.clone()).with_context(|| {
            format!(
                "refusing to use {}\n\n\
                 Point at the real binary with one of:\n  \
                 1. --proxy-path <PATH>\n  \
                 2. OMREPORT_PROXY_PATH environment variable\n  \
                 3. omreport-rs config set omcliproxy_path <PATH>",
                path.display()
            )
        })
    }
}
