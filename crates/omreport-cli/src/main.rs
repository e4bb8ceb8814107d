//! omreport-rs - Dell OpenManage omreport with binary integrity checks
//!
//! Runs `omreport` through a pinned `omcliproxy` and prints typed results.

use anyhow::Result;

fn main() -> Result<()> {
    omreport_cli::run()
}
