//! `omreport-rs about` - Installed Server Administrator version.

use anyhow::Result;
use colored::Colorize;

use super::Context;
use crate::output::render;

pub fn execute(ctx: &Context) -> Result<()> {
    let client = ctx.client()?;
    let about = client.about()?;

    render(ctx.output_format, &about, |about| {
        println!(
            "{}: {}",
            "Product".bold(),
            about.product_name.as_deref().unwrap_or("N/A")
        );
        println!("{}: {}", "Version".bold(), about.version);
    })
}
