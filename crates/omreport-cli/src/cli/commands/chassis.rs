//! `omreport-rs chassis` - Chassis sensors and components.

use anyhow::Result;
use colored::Colorize;
use tabled::Tabled;

use super::Context;
use crate::cli::args::{ChassisArgs, ChassisCommands};
use crate::output::{optional, print_table, render, status_label};

#[derive(Tabled)]
struct SubsystemRow {
    #[tabled(rename = "Subsystem")]
    name: &'static str,
    #[tabled(rename = "Status")]
    status: String,
}

#[derive(Tabled)]
struct ProbeRow {
    #[tabled(rename = "ID")]
    id: u32,
    #[tabled(rename = "Location")]
    location: String,
    #[tabled(rename = "Reading")]
    reading: String,
    #[tabled(rename = "Status")]
    status: String,
}

#[derive(Tabled)]
struct ProcessorRow {
    #[tabled(rename = "ID")]
    id: u32,
    #[tabled(rename = "Model")]
    model: String,
    #[tabled(rename = "Cores")]
    cores: String,
    #[tabled(rename = "Speed (MHz)")]
    speed: String,
    #[tabled(rename = "Status")]
    status: String,
}

#[derive(Tabled)]
struct DimmRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Part No")]
    part_no: String,
    #[tabled(rename = "Errors (single/multi)")]
    errors: String,
}

#[derive(Tabled)]
struct PowerSupplyRow {
    #[tabled(rename = "ID")]
    id: u32,
    #[tabled(rename = "Location")]
    location: String,
    #[tabled(rename = "Output (W)")]
    output: String,
    #[tabled(rename = "Firmware")]
    firmware: String,
    #[tabled(rename = "State")]
    state: String,
}

pub fn execute(ctx: &Context, args: ChassisArgs) -> Result<()> {
    let client = ctx.client()?;
    let chassis = client.chassis();

    match args.command.unwrap_or(ChassisCommands::Summary) {
        ChassisCommands::Summary => render(ctx.output_format, &chassis.summary()?, |out| {
            let rows: Vec<SubsystemRow> = out
                .subsystems()
                .into_iter()
                .map(|(name, status)| SubsystemRow {
                    name,
                    status: status_label(status).to_string(),
                })
                .collect();
            print_table(&rows, "No subsystems reported");
        }),
        ChassisCommands::Batteries => render(ctx.output_format, &chassis.batteries()?, |out| {
            let rows: Vec<ProbeRow> = out
                .probes
                .iter()
                .map(|p| ProbeRow {
                    id: p.id,
                    location: p.location.clone(),
                    reading: "-".to_string(),
                    status: status_label(p.status).to_string(),
                })
                .collect();
            print_table(&rows, "No batteries reported");
        }),
        ChassisCommands::Fans => render(ctx.output_format, &chassis.fans()?, |out| {
            let rows: Vec<ProbeRow> = out
                .probes
                .iter()
                .map(|p| ProbeRow {
                    id: p.id,
                    location: p.location.clone(),
                    reading: format!(
                        "{} RPM (min {})",
                        p.reading,
                        optional(p.min_critical_threshold)
                    ),
                    status: status_label(p.status).to_string(),
                })
                .collect();
            print_table(&rows, "No fans reported");
        }),
        ChassisCommands::Processors => render(ctx.output_format, &chassis.processors()?, |out| {
            let rows: Vec<ProcessorRow> = out
                .processors
                .iter()
                .map(|p| ProcessorRow {
                    id: p.id,
                    model: p.model.clone(),
                    cores: format!("{}/{}", p.physical_cores, p.virtual_cores),
                    speed: format!("{}/{}", p.current_speed, p.max_speed),
                    status: status_label(p.status).to_string(),
                })
                .collect();
            print_table(&rows, "No processors reported");

            for probe in out.probes.iter().filter(|p| p.flags.throttled) {
                println!("{} {} is throttled", "Warning:".yellow().bold(), probe.location);
            }
        }),
        ChassisCommands::Memory => render(ctx.output_format, &chassis.memory()?, |out| {
            println!(
                "{} {} KiB total, {} KiB available ({})",
                "Memory:".bold(),
                out.total_physical_memory_size,
                out.available_physical_memory_size,
                status_label(out.status)
            );
            let rows: Vec<DimmRow> = out
                .dimms
                .iter()
                .map(|d| DimmRow {
                    name: d.name.clone(),
                    part_no: d.part_no.clone(),
                    errors: format!("{}/{}", d.single_bit_errors, d.multi_bit_errors),
                })
                .collect();
            print_table(&rows, "No memory modules reported");
        }),
        ChassisCommands::Temps => render(ctx.output_format, &chassis.temps()?, |out| {
            let rows: Vec<ProbeRow> = out
                .probes
                .iter()
                .map(|p| ProbeRow {
                    id: p.id,
                    location: p.location.clone(),
                    reading: format!("{:.1} C", p.reading / 10.0),
                    status: status_label(p.status).to_string(),
                })
                .collect();
            print_table(&rows, "No temperature probes reported");
        }),
        ChassisCommands::PowerMonitoring => {
            render(ctx.output_format, &chassis.power_monitoring()?, |out| {
                let rows: Vec<ProbeRow> = out
                    .probes
                    .iter()
                    .map(|p| ProbeRow {
                        id: p.id,
                        location: p.name.clone(),
                        reading: format!(
                            "{} (warn {}, crit {})",
                            p.reading,
                            optional(p.warning_threshold),
                            optional(p.critical_threshold)
                        ),
                        status: status_label(p.status).to_string(),
                    })
                    .collect();
                print_table(&rows, "No power probes reported");
            })
        }
        ChassisCommands::PowerSupplies => {
            render(ctx.output_format, &chassis.power_supplies()?, |out| {
                let rows: Vec<PowerSupplyRow> = out
                    .power_supplies
                    .iter()
                    .map(|ps| PowerSupplyRow {
                        id: ps.id,
                        location: ps.location.clone(),
                        output: format!("{:.1}", ps.output_watts / 10.0),
                        firmware: ps.firmware_version.clone(),
                        state: if ps.state.is_healthy() {
                            "Healthy".green().to_string()
                        } else if ps.state.ac_lost {
                            "AC lost".red().bold().to_string()
                        } else {
                            "Faulted".red().bold().to_string()
                        },
                    })
                    .collect();
                print_table(&rows, "No power supplies reported");
            })
        }
    }
}
