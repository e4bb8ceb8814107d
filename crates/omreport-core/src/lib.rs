//! Core types and errors for the omreport client.
//!
//! This crate provides the foundational types shared by the client and CLI:
//!
//! - **Types**: Typed records for every supported `omreport` report, decoded
//!   from the tool's XML output through [`FromReport`]
//! - **Codes**: Status, state, layout and bus protocol tables with an explicit
//!   `Unrecognized` fallback
//! - **Fingerprint**: The SHA-256 value used to pin the `omcliproxy` binary
//! - **Errors**: Inspectable error taxonomy with [`OmReportError`]
//!
//! # Example
//!
//! ```rust,ignore
//! use omreport_core::{ChassisTempsOutput, FromReport, Result};
//!
//! fn hottest(xml: &[u8]) -> Result<Option<f64>> {
//!     let temps = ChassisTempsOutput::from_report(xml)?;
//!     Ok(temps.probes.iter().map(|p| p.reading).reduce(f64::max))
//! }
//! ```

#![doc(html_root_url = "https://docs.rs/omreport-core/0.1.0")]

mod error;
mod fingerprint;
pub mod types;
pub mod xml;

pub use error::{IoStage, OmReportError, Result};
pub use fingerprint::{Fingerprint, FINGERPRINT_LEN};
pub use types::*;
pub use xml::FromReport;
