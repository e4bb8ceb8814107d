//! Typed, integrity-checked access to Dell OpenManage `omreport`.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use omreport::{OmReport, OmReportConfig};
//!
//! fn main() -> omreport::Result<()> {
//!     let config = OmReportConfig::new().enhanced_security_mode(true);
//!     let om = OmReport::new(config)?;
//!
//!     // Every call below re-hashes omcliproxy before running it
//!     let chassis = om.chassis().summary()?;
//!     for (name, status) in chassis.subsystems() {
//!         println!("{name}: {status}");
//!     }
//!
//!     for disk in om.storage().all_pdisks()? {
//!         if disk.failure_predicted() {
//!             println!("disk {} on controller {} is failing", disk.id, disk.controller_id);
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```

#![doc(html_root_url = "https://docs.rs/omreport/0.1.0")]

// Re-export core types
pub use omreport_core::*;

// Re-export client
pub use omreport_client::{
    api, hash, runner, trust, CommandRunner, OmReport, OmReportBuilder, OmReportConfig,
    SystemRunner, TrustGate, TrustVerdict, DEFAULT_OMCLIPROXY_DIR, OMCLIPROXY_BINARY_NAME,
};
