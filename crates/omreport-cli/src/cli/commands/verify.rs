//! `omreport-rs verify` - Validate and fingerprint omcliproxy.
//!
//! Building the client already rejects misnamed, symlinked or non-file
//! paths. The content is then compared with the expected fingerprint from
//! `--expect` or the config file, or re-hashed against the startup baseline
//! when none is pinned.

use anyhow::Result;
use colored::Colorize;
use omreport::hash::sha256_file;
use omreport::{Fingerprint, OmReportError, TrustVerdict};
use serde::Serialize;
use std::path::Path;

use super::Context;
use crate::cli::args::VerifyArgs;
use crate::config::Config;
use crate::output::render;

#[derive(Serialize)]
struct Report<'a> {
    path: &'a Path,
    fingerprint: Fingerprint,
    pinned: bool,
    #[serde(flatten)]
    verdict: TrustVerdict,
}

pub fn execute(ctx: &Context, args: VerifyArgs) -> Result<()> {
    let client = ctx.client()?;
    let gate = client.trust_gate();

    if args.pin {
        return pin(ctx, gate.path(), gate.baseline());
    }

    let expected = args.expect.or(ctx.expected_fingerprint);
    let verdict = match expected {
        Some(expected) => {
            let current = sha256_file(gate.path())?;
            if current == expected {
                TrustVerdict::Match
            } else {
                TrustVerdict::Mismatch {
                    current,
                    baseline: expected,
                }
            }
        }
        None => gate.verdict()?,
    };

    let report = Report {
        path: gate.path(),
        fingerprint: gate.baseline(),
        pinned: expected.is_some(),
        verdict,
    };

    render(ctx.output_format, &report, |report| {
        println!("{} {}", "Binary:".bold(), report.path.display());
        println!("{} {}", "SHA-256:".bold(), report.fingerprint);
        match report.verdict {
            TrustVerdict::Match if report.pinned => {
                println!("{} {}", "Verdict:".bold(), "matches pinned fingerprint".green());
            }
            TrustVerdict::Match => {
                println!("{} {}", "Verdict:".bold(), "unchanged".green());
                println!(
                    "{}",
                    "No fingerprint pinned; use --expect or `verify --pin`".dimmed()
                );
            }
            TrustVerdict::Mismatch { current, baseline } => {
                println!("{} {}", "Verdict:".bold(), "MISMATCH".red().bold());
                println!("  {} {}", "expected:".bold(), baseline);
                println!("  {} {}", "current: ".bold(), current);
            }
        }
    })?;

    match verdict {
        TrustVerdict::Match => Ok(()),
        TrustVerdict::Mismatch { current, baseline } => Err(OmReportError::TamperDetected {
            path: gate.path().to_path_buf(),
            current,
            baseline,
        }
        .into()),
    }
}

fn pin(ctx: &Context, path: &Path, fingerprint: Fingerprint) -> Result<()> {
    let mut config = Config::load(&ctx.config_path)?;
    config.expected_fingerprint = Some(fingerprint);
    config.save(&ctx.config_path)?;

    println!(
        "{} pinned {} for {}.",
        "Success:".green().bold(),
        fingerprint.to_string().cyan(),
        path.display()
    );
    Ok(())
}
