//! CLI definitions and entry point

use clap::{Parser, Subcommand};

use crate::commands;
use oop_patterns::config::AppConfig;
use oop_patterns::output::OutputMode;

/// oop-patterns - Classic object-oriented design patterns, one subcommand each
#[derive(Parser, Debug)]
#[command(
    name = "oop-patterns",
    version,
    about = "Classic object-oriented design patterns, one subcommand each",
    long_about = "Run small demonstrations of textbook design patterns.\n\n\
                  Abstract base classes, a process-wide singleton, a factory,\n\
                  and an adapter, each usable on its own."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the battery life of every device (abstract base class)
    Devices,

    /// Show the battery life of one device
    Device {
        /// Device name: smartphone, laptop, smartwatch
        name: String,
    },

    /// Load a JSON file through the shared configuration manager (singleton)
    Config {
        /// JSON file to load (defaults to `config_manager.default_file`)
        #[arg(short, long)]
        file: Option<String>,

        /// Key path to look up (e.g., `database host`); omit for the whole file
        keys: Vec<String>,
    },

    /// Build a vehicle by type (factory)
    Vehicle {
        /// Vehicle type: car, bicycle, motorcycle
        name: String,
    },

    /// Run the factory walkthrough, including a rejected type
    Vehicles,

    /// Read a Fahrenheit sensor in Celsius (adapter)
    Temperature {
        /// Celsius value to write through the adapter first
        #[arg(short, long, allow_negative_numbers = true)]
        celsius: Option<f64>,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let config = AppConfig::load();

    let output_mode = if cli.json || config.output.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Devices) => commands::devices(output_mode),
        Some(Command::Device { name }) => commands::device(&name, output_mode),
        Some(Command::Config { file, keys }) => {
            commands::config(file.as_deref(), &keys, &config, output_mode)
        },
        Some(Command::Vehicle { name }) => commands::vehicle(&name, output_mode),
        Some(Command::Vehicles) => commands::vehicles(output_mode),
        Some(Command::Temperature { celsius }) => {
            commands::temperature(celsius, &config, output_mode)
        },
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("oop-patterns v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("oop-patterns v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'oop-patterns --help' for usage");
                println!("Run 'oop-patterns devices' to get started");
            }
            Ok(())
        },
    }
}
