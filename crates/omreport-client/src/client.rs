//! Main omreport client implementation.

use crate::api::*;
use crate::config::{OmReportConfig, OMREPORT_COMMAND, XML_FORMAT_ARGS};
use crate::runner::{CommandRunner, SystemRunner};
use crate::trust::TrustGate;
use omreport_core::{AboutOutput, Fingerprint, FromReport, Result};
use std::sync::Arc;
use tracing::debug;

/// Client that runs `omreport` through a trusted `omcliproxy`.
///
/// Cloning is cheap; clones share the same trust gate and runner.
#[derive(Clone)]
pub struct OmReport {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    gate: TrustGate,
    enhanced_security_mode: bool,
    runner: Box<dyn CommandRunner>,
}

impl OmReport {
    /// Validate the configured binary and build a client that spawns it.
    ///
    /// # Errors
    ///
    /// Fails if the binary is rejected or cannot be fingerprinted.
    pub fn new(config: OmReportConfig) -> Result<Self> {
        OmReportBuilder::new().config(config).build()
    }

    /// Create a builder for custom configuration
    #[must_use]
    pub fn builder() -> OmReportBuilder {
        OmReportBuilder::new()
    }

    /// Access `omreport chassis` reports
    #[must_use]
    pub fn chassis(&self) -> ChassisApi<'_> {
        ChassisApi::new(self)
    }

    /// Access `omreport storage` reports
    #[must_use]
    pub fn storage(&self) -> StorageApi<'_> {
        StorageApi::new(self)
    }

    /// Run `omreport about`
    ///
    /// # Errors
    ///
    /// Returns the invocation or decoding failure.
    pub fn about(&self) -> Result<AboutOutput> {
        self.fetch(&["about"])
    }

    /// The trust gate guarding the binary
    #[must_use]
    pub fn trust_gate(&self) -> &TrustGate {
        &self.inner.gate
    }

    /// Fingerprint captured when the client was built
    #[must_use]
    pub fn baseline(&self) -> Fingerprint {
        self.inner.gate.baseline()
    }

    /// Whether every report re-checks the binary before running it
    #[must_use]
    pub fn is_enhanced_security_mode(&self) -> bool {
        self.inner.enhanced_security_mode
    }

    /// Check the binary against its baseline, regardless of mode.
    ///
    /// # Errors
    ///
    /// Returns `OmReportError::TamperDetected` if the content changed.
    pub fn suspicious_binary(&self) -> Result<()> {
        self.inner.gate.check()
    }

    /// Run `omcliproxy omreport <args> -fmt xml` and return the raw output.
    ///
    /// With enhanced security mode on the binary is re-hashed first and the
    /// command is not run if it changed.
    ///
    /// # Errors
    ///
    /// Returns the tamper, spawn or exit failure.
    pub fn report<S: AsRef<str>>(&self, args: &[S]) -> Result<Vec<u8>> {
        if self.inner.enhanced_security_mode {
            self.suspicious_binary()?;
        }

        let argv: Vec<String> = std::iter::once(OMREPORT_COMMAND)
            .chain(args.iter().map(|arg| arg.as_ref()))
            .chain(XML_FORMAT_ARGS)
            .map(String::from)
            .collect();

        let program = self.inner.gate.path();
        debug!(program = %program.display(), ?argv, "running report");
        self.inner.runner.run(program, &argv)
    }

    /// Run a report and decode it
    pub(crate) fn fetch<T: FromReport>(&self, args: &[&str]) -> Result<T> {
        let output = self.report(args)?;
        T::from_report(&output)
    }
}

impl std::fmt::Debug for OmReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OmReport")
            .field("gate", &self.inner.gate)
            .field("enhanced_security_mode", &self.inner.enhanced_security_mode)
            .finish_non_exhaustive()
    }
}

/// Builder for configuring an [`OmReport`]
pub struct OmReportBuilder {
    config: OmReportConfig,
    runner: Box<dyn CommandRunner>,
}

impl Default for OmReportBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl OmReportBuilder {
    /// Create a builder with the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: OmReportConfig::default(),
            runner: Box::new(SystemRunner),
        }
    }

    /// Set the configuration
    #[must_use]
    pub fn config(mut self, config: OmReportConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the process runner (useful for testing)
    #[must_use]
    pub fn runner(mut self, runner: impl CommandRunner + 'static) -> Self {
        self.runner = Box::new(runner);
        self
    }

    /// Validate the binary and build the client.
    ///
    /// # Errors
    ///
    /// Fails if the binary is rejected or cannot be fingerprinted.
    pub fn build(self) -> Result<OmReport> {
        let gate = TrustGate::establish(self.config.resolved_path())?;

        Ok(OmReport {
            inner: Arc::new(ClientInner {
                gate,
                enhanced_security_mode: self.config.enhanced_security_mode,
                runner: self.runner,
            }),
        })
    }
}
