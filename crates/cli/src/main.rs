//! `solid-catalogue` CLI entry-point.
//!
//! Available sub-commands, one per principle plus `all`:
//! - `srp` — Single Responsibility (payroll calculation vs. god service)
//! - `ocp` — Open/Closed (compensation without type inspection)
//! - `lsp` — Liskov Substitution (a flight contract broken, then honoured)
//! - `isp` — Interface Segregation (fly/swim/walk capability subsets)
//! - `dip` — Dependency Inversion (interchangeable storage stand-ins)
//! - `all` — run every demonstration in principle order

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "solid-catalogue",
    about = "Before/after demonstrations of the five SOLID design principles",
    version
)]
struct Cli {
    /// Output format for demonstration transcripts.
    #[arg(long, value_enum, default_value = "text")]
    format: Format,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Single Responsibility: payroll arithmetic split out of a do-everything service.
    Srp,
    /// Open/Closed: per-type compensation behind one capability, no type inspection.
    Ocp,
    /// Liskov Substitution: a bird hierarchy that breaks, then honours, its contract.
    Lsp,
    /// Interface Segregation: fly/swim/walk implemented only where they apply.
    Isp,
    /// Dependency Inversion: a service wired to interchangeable storage stand-ins.
    Dip,
    /// Run every demonstration in principle order.
    All,
}

/// One demonstration's transcript, ready for text or JSON output.
#[derive(Debug, Serialize)]
struct DemoReport {
    principle: &'static str,
    lines: Vec<String>,
}

fn reports_for(command: &Command) -> Vec<DemoReport> {
    let single = |principle, lines| vec![DemoReport { principle, lines }];

    match command {
        Command::Srp => single("single-responsibility", srp::demo()),
        Command::Ocp => single("open-closed", ocp::demo()),
        Command::Lsp => single("liskov-substitution", lsp::demo()),
        Command::Isp => single("interface-segregation", isp::demo()),
        Command::Dip => single("dependency-inversion", dip::demo()),
        Command::All => vec![
            DemoReport { principle: "single-responsibility", lines: srp::demo() },
            DemoReport { principle: "open-closed", lines: ocp::demo() },
            DemoReport { principle: "liskov-substitution", lines: lsp::demo() },
            DemoReport { principle: "interface-segregation", lines: isp::demo() },
            DemoReport { principle: "dependency-inversion", lines: dip::demo() },
        ],
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let reports = reports_for(&cli.command);
    info!("running {} demonstration(s)", reports.len());

    match cli.format {
        Format::Text => {
            for report in &reports {
                println!("== {} ==", report.principle);
                for line in &report.lines {
                    println!("{line}");
                }
            }
        }
        Format::Json => {
            println!("{}", serde_json::to_string_pretty(&reports)?);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_runs_every_principle_in_order() {
        let reports = reports_for(&Command::All);
        let principles: Vec<&str> = reports.iter().map(|r| r.principle).collect();
        assert_eq!(
            principles,
            vec![
                "single-responsibility",
                "open-closed",
                "liskov-substitution",
                "interface-segregation",
                "dependency-inversion",
            ],
        );
        assert!(reports.iter().all(|r| !r.lines.is_empty()));
    }

    #[test]
    fn single_commands_produce_one_report() {
        for command in [Command::Srp, Command::Ocp, Command::Lsp, Command::Isp, Command::Dip] {
            let reports = reports_for(&command);
            assert_eq!(reports.len(), 1, "{command:?}");
        }
    }

    #[test]
    fn reports_serialize_to_json() {
        let reports = reports_for(&Command::Dip);
        let json = serde_json::to_string(&reports).expect("serializable");
        assert!(json.contains("dependency-inversion"));
    }
}
