//! Process invocation seam.

use std::path::Path;
use std::process::Command;
use tracing::debug;

use omreport_core::{OmReportError, Result};

/// Runs an external program and returns its combined output.
///
/// The client only ever hands a runner a path that passed the trust gate.
pub trait CommandRunner: Send + Sync {
    /// Run `program` with `args`, blocking until it exits.
    ///
    /// # Errors
    ///
    /// Returns `OmReportError::Spawn` if the program cannot be started and
    /// `OmReportError::CommandFailed` if it exits unsuccessfully.
    fn run(&self, program: &Path, args: &[String]) -> Result<Vec<u8>>;
}

/// [`CommandRunner`] backed by `std::process::Command`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &Path, args: &[String]) -> Result<Vec<u8>> {
        debug!(program = %program.display(), ?args, "spawning");

        let output = Command::new(program)
            .args(args)
            .output()
            .map_err(|source| OmReportError::Spawn {
                program: program.to_path_buf(),
                source,
            })?;

        let mut combined = output.stdout;
        combined.extend_from_slice(&output.stderr);

        if output.status.success() {
            Ok(combined)
        } else {
            Err(OmReportError::CommandFailed {
                program: program.to_path_buf(),
                status: output.status.code(),
                output: String::from_utf8_lossy(&combined).into_owned(),
            })
        }
    }
}
