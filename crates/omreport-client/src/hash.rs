//! Streaming SHA-256 hashing via `ring::digest`.

use ring::digest::{Context, Digest, SHA256};
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use omreport_core::{Fingerprint, IoStage, OmReportError, Result, FINGERPRINT_LEN};

/// Buffer size for streaming file reads (64 KiB).
const BUF_SIZE: usize = 64 * 1024;

/// Compute SHA-256 of a file, streaming to avoid loading it all into memory.
///
/// # Errors
///
/// Returns `OmReportError::Io` tagged with [`IoStage::Open`] if the file
/// cannot be opened, or [`IoStage::Read`] if a read fails part way.
pub fn sha256_file(path: &Path) -> Result<Fingerprint> {
    let mut file = File::open(path).map_err(|e| OmReportError::io(path, IoStage::Open, e))?;

    let mut context = Context::new(&SHA256);
    let mut buf = vec![0u8; BUF_SIZE];

    loop {
        let n = match file.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(OmReportError::io(path, IoStage::Read, e)),
        };
        context.update(&buf[..n]);
    }

    Ok(to_fingerprint(&context.finish()))
}

/// Compute SHA-256 of raw bytes.
#[must_use]
pub fn sha256_bytes(data: &[u8]) -> Fingerprint {
    to_fingerprint(&ring::digest::digest(&SHA256, data))
}

fn to_fingerprint(digest: &Digest) -> Fingerprint {
    let mut bytes = [0u8; FINGERPRINT_LEN];
    bytes.copy_from_slice(digest.as_ref());
    Fingerprint::from_bytes(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_sha256_file() {
        let mut tmp = NamedTempFile::new().unwrap();
        write!(tmp, "hello world").unwrap();
        tmp.flush().unwrap();

        let hash = sha256_file(tmp.path()).unwrap();
        assert_eq!(
            hash.to_hex(),
            "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9"
        );
    }

    #[test]
    fn test_sha256_bytes() {
        let hash = sha256_bytes(b"foo");
        assert_eq!(
            hash.to_hex(),
            "2c26b46b68ffc68ff99b453c1d30413413422d706483bfa0f98a5e886266e7ae"
        );
    }

    #[test]
    fn test_sha256_empty_file() {
        let tmp = NamedTempFile::new().unwrap();
        let hash = sha256_file(tmp.path()).unwrap();
        assert_eq!(
            hash.to_hex(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_sha256_spans_buffers() {
        let data = vec![0x5au8; BUF_SIZE * 2 + 17];
        let mut tmp = NamedTempFile::new().unwrap();
        tmp.write_all(&data).unwrap();
        tmp.flush().unwrap();

        assert_eq!(sha256_file(tmp.path()).unwrap(), sha256_bytes(&data));
    }

    #[test]
    fn test_missing_file_fails_at_open() {
        let dir = tempfile::tempdir().unwrap();
        let err = sha256_file(&dir.path().join("absent")).unwrap_err();
        assert!(matches!(
            err,
            OmReportError::Io {
                stage: IoStage::Open,
                ..
            }
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_directory_fails_at_read() {
        // Directories open on unix but reject the first read with EISDIR
        let dir = tempfile::tempdir().unwrap();
        let err = sha256_file(dir.path()).unwrap_err();
        assert!(matches!(
            err,
            OmReportError::Io {
                stage: IoStage::Read,
                ..
            }
        ));
        assert!(err.to_string().starts_with("read failed for "));
        assert!(err.is_retryable());
    }
}
