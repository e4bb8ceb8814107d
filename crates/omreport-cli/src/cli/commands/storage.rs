//! `omreport-rs storage` - RAID controllers, enclosures and disks.

use anyhow::Result;
use colored::Colorize;
use omreport::PDisk;
use tabled::Tabled;

use super::Context;
use crate::cli::args::{StorageArgs, StorageCommands};
use crate::output::{print_table, render, status_label};

#[derive(Tabled)]
struct ControllerRow {
    #[tabled(rename = "ID")]
    id: u32,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "State")]
    state: String,
    #[tabled(rename = "Status")]
    status: String,
}

#[derive(Tabled)]
struct EnclosureRow {
    #[tabled(rename = "ID")]
    id: u32,
    #[tabled(rename = "Controller")]
    controller_id: u32,
    #[tabled(rename = "State")]
    state: String,
    #[tabled(rename = "Status")]
    status: String,
}

#[derive(Tabled)]
struct VDiskRow {
    #[tabled(rename = "ID")]
    id: u32,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Device")]
    device_name: String,
    #[tabled(rename = "Layout")]
    layout: String,
    #[tabled(rename = "Size (GiB)")]
    size: String,
    #[tabled(rename = "State")]
    state: String,
    #[tabled(rename = "Status")]
    status: String,
}

#[derive(Tabled)]
struct PDiskRow {
    #[tabled(rename = "Ctrl")]
    controller_id: u32,
    #[tabled(rename = "Encl")]
    enclosure_id: u32,
    #[tabled(rename = "Slot")]
    slot_no: u32,
    #[tabled(rename = "Product")]
    product_id: String,
    #[tabled(rename = "Serial")]
    serial_no: String,
    #[tabled(rename = "Bus")]
    bus_protocol: String,
    #[tabled(rename = "State")]
    state: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Flags")]
    flags: String,
}

impl From<&PDisk> for PDiskRow {
    fn from(d: &PDisk) -> Self {
        let flags = d.attributes.names().join(", ");
        Self {
            controller_id: d.controller_id,
            enclosure_id: d.enclosure_id,
            slot_no: d.slot_no,
            product_id: d.product_id.clone(),
            serial_no: d.serial_no.clone(),
            bus_protocol: d.bus_protocol.to_string(),
            state: d.state.to_string(),
            status: status_label(d.status).to_string(),
            flags: if d.failure_predicted() {
                flags.red().bold().to_string()
            } else {
                flags
            },
        }
    }
}

#[allow(clippy::cast_precision_loss)]
fn gib(bytes: u64) -> String {
    format!("{:.1}", bytes as f64 / f64::from(1u32 << 30))
}

pub fn execute(ctx: &Context, args: StorageArgs) -> Result<()> {
    let client = ctx.client()?;
    let storage = client.storage();

    match args.command {
        StorageCommands::Controller => render(ctx.output_format, &storage.controllers()?, |out| {
            let rows: Vec<ControllerRow> = out
                .controllers
                .iter()
                .map(|c| ControllerRow {
                    id: c.id,
                    name: c.name.clone(),
                    state: c.state.to_string(),
                    status: status_label(c.status).to_string(),
                })
                .collect();
            print_table(&rows, "No controllers found");
        }),
        StorageCommands::Enclosure => render(ctx.output_format, &storage.enclosures()?, |out| {
            let rows: Vec<EnclosureRow> = out
                .enclosures
                .iter()
                .map(|e| EnclosureRow {
                    id: e.id,
                    controller_id: e.controller_id,
                    state: e.state.to_string(),
                    status: status_label(e.status).to_string(),
                })
                .collect();
            print_table(&rows, "No enclosures found");
        }),
        StorageCommands::Vdisk => render(ctx.output_format, &storage.vdisks()?, |out| {
            let rows: Vec<VDiskRow> = out
                .vdisks
                .iter()
                .map(|v| VDiskRow {
                    id: v.id,
                    name: v.name.clone(),
                    device_name: v.device_name.clone(),
                    layout: v.layout.to_string(),
                    size: gib(v.size),
                    state: v.state.to_string(),
                    status: status_label(v.status).to_string(),
                })
                .collect();
            print_table(&rows, "No virtual disks found");
        }),
        StorageCommands::Pdisk { controller } => {
            let pdisks = match controller {
                Some(id) => storage.pdisks(id)?.pdisks,
                None => storage.all_pdisks()?,
            };
            render(ctx.output_format, &pdisks, |disks| {
                let rows: Vec<PDiskRow> = disks.iter().map(PDiskRow::from).collect();
                print_table(&rows, "No physical disks found");

                let failing = disks.iter().filter(|d| d.failure_predicted()).count();
                if failing > 0 {
                    println!();
                    println!(
                        "{} {} disk(s) predicted to fail",
                        "Warning:".yellow().bold(),
                        failing
                    );
                }
            })
        }
    }
}
