//! Vastu Plan CLI
//!
//! Usage:
//!   vastu-plan [OPTIONS] [FILE]
//!
//! Options:
//!   -r, --report   Print a plain-text report instead of JSON
//!   -p, --pretty   Pretty-print the JSON output
//!   -h, --help     Print help

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;

use vastu_plan::{generate, render_report, PlanConfig};

#[derive(Parser)]
#[command(name = "vastu-plan")]
#[command(about = "Rule-constrained residential floor-plan generator")]
struct Cli {
    /// TOML configuration file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Print a plain-text report instead of JSON
    #[arg(short, long)]
    report: bool,

    /// Pretty-print the JSON output
    #[arg(short, long)]
    pretty: bool,
}

fn main() {
    let cli = Cli::parse();

    // If no input file and stdin is a terminal (interactive), show intro help
    if cli.input.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    // Read configuration
    let source = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => buffer,
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    let config = match PlanConfig::from_toml_str(&source) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let result = generate(&config);

    if cli.report {
        print!("{}", render_report(&config, &result));
        return;
    }

    let json = if cli.pretty {
        serde_json::to_string_pretty(&result)
    } else {
        serde_json::to_string(&result)
    };
    match json {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error serializing plan: {}", e);
            std::process::exit(1);
        }
    }
}

fn print_intro() {
    println!(
        r#"Vastu Plan - rule-constrained residential floor-plan generator

USAGE:
    vastu-plan [OPTIONS] [FILE]
    cat config.toml | vastu-plan

OPTIONS:
    -r, --report   Plain-text room table and compliance report
    -p, --pretty   Pretty-print the JSON plan
    -h, --help     Print help

CONFIGURATION (TOML):
    plot_width = 30        # feet, 18-80
    plot_depth = 30
    facing = "east"        # north | east | south | west
    floors = 2             # 1-3
    bedrooms = 3           # 1-6
    bathrooms = 2          # 1-(bedrooms+1)

    [features]
    pooja = true
    balcony = true
    parking = false
    store = false

QUICK START:
    printf 'plot_width = 30\nplot_depth = 30\nfacing = "east"\n' | vastu-plan --report

The output lists every room with its rectangle and compass zone, the
door and window openings, and a 0-100 Vastu compliance score with
per-rule findings."#
    );
}
