//! Binary trust gate for `omcliproxy`.
//!
//! The gate validates the executable path once, captures a SHA-256 baseline
//! of its content, and can later re-hash the file to detect substitution.
//!
//! ## Checks, in order
//!
//! 1. The final path component is exactly `omcliproxy`
//! 2. The entry can be stat'ed without following links
//! 3. The entry is not a symbolic link
//! 4. The entry is a regular file
//!
//! The baseline never changes after construction. A mismatch is reported
//! each time it is observed and is never latched or healed.

use serde::Serialize;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

use crate::config::OMCLIPROXY_BINARY_NAME;
use crate::hash::sha256_file;
use omreport_core::{Fingerprint, OmReportError, Result};

/// Validate that `path` is safe to execute.
///
/// Read-only: only filesystem metadata is queried.
///
/// # Errors
///
/// Returns the error naming the first check that failed.
pub fn validate_executable_path(path: &Path) -> Result<()> {
    if path.file_name().and_then(OsStr::to_str) != Some(OMCLIPROXY_BINARY_NAME) {
        return Err(OmReportError::UnexpectedBinaryName {
            path: path.to_path_buf(),
            expected: OMCLIPROXY_BINARY_NAME,
        });
    }

    let meta = std::fs::symlink_metadata(path).map_err(|source| OmReportError::Stat {
        path: path.to_path_buf(),
        source,
    })?;

    if meta.file_type().is_symlink() {
        return Err(OmReportError::Symlink {
            path: path.to_path_buf(),
        });
    }

    if !meta.is_file() {
        return Err(OmReportError::NotAFile {
            path: path.to_path_buf(),
        });
    }

    debug!(path = %path.display(), "executable path validated");
    Ok(())
}

/// Outcome of comparing the current content against the baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum TrustVerdict {
    /// Content is unchanged
    Match,
    /// Content changed since the baseline was captured
    Mismatch {
        /// Freshly computed fingerprint
        current: Fingerprint,
        /// Fingerprint captured at construction
        baseline: Fingerprint,
    },
}

impl TrustVerdict {
    /// Returns true if the content is unchanged
    #[must_use]
    pub const fn is_match(&self) -> bool {
        matches!(self, Self::Match)
    }
}

/// A validated executable path and its content baseline.
#[derive(Debug, Clone)]
pub struct TrustGate {
    path: PathBuf,
    baseline: Fingerprint,
}

impl TrustGate {
    /// Validate `path` and capture its baseline fingerprint.
    ///
    /// # Errors
    ///
    /// Fails with the validation error or the fingerprinting I/O error. No
    /// gate is produced in either case.
    pub fn establish(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        validate_executable_path(&path)?;
        let baseline = sha256_file(&path)?;
        debug!(path = %path.display(), "baseline captured");
        trace!(baseline = %baseline);
        Ok(Self { path, baseline })
    }

    /// Path the gate was established for
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Fingerprint captured at construction
    #[must_use]
    pub const fn baseline(&self) -> Fingerprint {
        self.baseline
    }

    /// Re-hash the file and compare it with the baseline.
    ///
    /// # Errors
    ///
    /// Returns `OmReportError::Io` if the file can no longer be read.
    pub fn verdict(&self) -> Result<TrustVerdict> {
        let current = sha256_file(&self.path)?;
        trace!(current = %current, baseline = %self.baseline);
        if current == self.baseline {
            Ok(TrustVerdict::Match)
        } else {
            Ok(TrustVerdict::Mismatch {
                current,
                baseline: self.baseline,
            })
        }
    }

    /// Fail with `TamperDetected` unless the content matches the baseline.
    ///
    /// # Errors
    ///
    /// Returns `OmReportError::TamperDetected` on mismatch, or
    /// `OmReportError::Io` if the file can no longer be read.
    pub fn check(&self) -> Result<()> {
        match self.verdict()? {
            TrustVerdict::Match => Ok(()),
            TrustVerdict::Mismatch { current, baseline } => Err(OmReportError::TamperDetected {
                path: self.path.clone(),
                current,
                baseline,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::sha256_bytes;
    use tempfile::TempDir;

    fn write_proxy(dir: &TempDir, name: &str, content: &[u8]) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn wrong_name_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_proxy(&dir, "proxybinary", b"foo");
        let err = TrustGate::establish(&path).unwrap_err();
        assert!(matches!(err, OmReportError::UnexpectedBinaryName { .. }));
        assert!(err.is_rejected_binary());
    }

    #[test]
    fn name_must_match_exactly() {
        let dir = TempDir::new().unwrap();
        let path = write_proxy(&dir, "omcliproxy.bak", b"foo");
        assert!(matches!(
            validate_executable_path(&path),
            Err(OmReportError::UnexpectedBinaryName { .. })
        ));
    }

    #[test]
    fn missing_file_fails_stat() {
        let dir = TempDir::new().unwrap();
        let err = TrustGate::establish(dir.path().join("omcliproxy")).unwrap_err();
        assert!(matches!(err, OmReportError::Stat { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn symlink_is_rejected() {
        let dir = TempDir::new().unwrap();
        let target_dir = dir.path().join("real");
        std::fs::create_dir(&target_dir).unwrap();
        let target = target_dir.join("omcliproxy");
        std::fs::write(&target, b"foo").unwrap();

        let link = dir.path().join("omcliproxy");
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let err = TrustGate::establish(&link).unwrap_err();
        assert!(matches!(err, OmReportError::Symlink { .. }));
        assert!(err.is_rejected_binary());
    }

    #[test]
    fn directory_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("omcliproxy");
        std::fs::create_dir(&path).unwrap();
        assert!(matches!(
            TrustGate::establish(&path),
            Err(OmReportError::NotAFile { .. })
        ));
    }

    #[test]
    fn baseline_matches_fresh_fingerprint() {
        let dir = TempDir::new().unwrap();
        let path = write_proxy(&dir, "omcliproxy", b"foo");
        let gate = TrustGate::establish(&path).unwrap();
        assert_eq!(gate.baseline(), sha256_file(&path).unwrap());
        assert_eq!(gate.baseline(), sha256_bytes(b"foo"));
        assert_eq!(gate.path(), path.as_path());
    }

    #[test]
    fn repeated_checks_are_idempotent() {
        let dir = TempDir::new().unwrap();
        let path = write_proxy(&dir, "omcliproxy", b"foo");
        let gate = TrustGate::establish(&path).unwrap();
        let baseline = gate.baseline();
        for _ in 0..3 {
            gate.check().unwrap();
            assert_eq!(gate.baseline(), baseline);
        }
    }

    #[test]
    fn detects_change_and_restore() {
        let dir = TempDir::new().unwrap();
        let path = write_proxy(&dir, "omcliproxy", b"foo");
        let gate = TrustGate::establish(&path).unwrap();

        std::fs::write(&path, b"bar").unwrap();
        assert_eq!(
            gate.verdict().unwrap(),
            TrustVerdict::Mismatch {
                current: sha256_bytes(b"bar"),
                baseline: sha256_bytes(b"foo"),
            }
        );
        let err = gate.check().unwrap_err();
        assert!(err.is_tamper());

        // Reported again, not latched into a different state
        assert!(gate.check().unwrap_err().is_tamper());

        std::fs::write(&path, b"foo").unwrap();
        assert!(gate.verdict().unwrap().is_match());
        gate.check().unwrap();
    }

    #[test]
    fn removed_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let path = write_proxy(&dir, "omcliproxy", b"foo");
        let gate = TrustGate::establish(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        let err = gate.check().unwrap_err();
        assert!(err.is_retryable());
        assert!(!err.is_tamper());
    }

    #[test]
    fn verdict_serializes_with_tag() {
        let json = serde_json::to_value(TrustVerdict::Match).unwrap();
        assert_eq!(json["verdict"], "match");
    }
}
