//! Integrity-checked client for Dell OpenManage `omreport`.
//!
//! This crate provides [`OmReport`], which runs `omreport` through the
//! `omcliproxy` binary and decodes its XML into typed records.
//!
//! Before any report is run the binary passes through a [`TrustGate`]: its
//! name and file type are validated and a SHA-256 baseline of its content is
//! captured. With enhanced security mode on, every invocation re-hashes the
//! binary and refuses to run it if the content changed.

#![doc(html_root_url = "https://docs.rs/omreport-client/0.1.0")]

mod client;
mod config;
pub mod api;
pub mod hash;
pub mod runner;
pub mod trust;

pub use client::{OmReport, OmReportBuilder};
pub use config::*;
pub use omreport_core::{OmReportError, Result};
pub use runner::{CommandRunner, SystemRunner};
pub use trust::{TrustGate, TrustVerdict};
