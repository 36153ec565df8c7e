//! Command line entry point for the insect foraging simulation.

mod run;
mod telemetry;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use forage_core::{GeneratorConfig, ReportFormat};
use std::path::PathBuf;

/// Command-line arguments for forage.
#[derive(Parser)]
#[command(name = "forage", version, about = "Single-turn insect foraging simulation")]
struct Cli {
    /// Path to a JSON run configuration file.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Simulate one turn and write the results file (the default).
    Run {
        /// Input document; defaults to `input.txt`.
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Results file; defaults to `output.txt`.
        #[arg(short, long)]
        output: Option<PathBuf>,
        #[arg(short, long, value_enum)]
        format: Option<Format>,
    },
    /// Write a random valid input document.
    Generate {
        #[arg(long, default_value_t = GeneratorConfig::default().board_size)]
        size: i32,
        #[arg(long, default_value_t = GeneratorConfig::default().insect_count)]
        insects: usize,
        #[arg(long, default_value_t = GeneratorConfig::default().food_count)]
        food: usize,
        #[arg(long, default_value_t = GeneratorConfig::default().max_food_amount)]
        max_amount: u32,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Destination file; stdout when omitted.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

impl From<Format> for ReportFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Text => ReportFormat::Text,
            Format::Json => ReportFormat::Json,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    telemetry::init_telemetry(cli.json_logs)?;

    let mut config = run::load_config(cli.config.as_deref())?;

    match cli.command.unwrap_or(Command::Run {
        input: None,
        output: None,
        format: None,
    }) {
        Command::Run {
            input,
            output,
            format,
        } => {
            if let Some(input) = input {
                config.input_path = input.display().to_string();
            }
            if let Some(output) = output {
                config.output_path = output.display().to_string();
            }
            if let Some(format) = format {
                config.format = format.into();
            }
            run::simulate(&config)
        }
        Command::Generate {
            size,
            insects,
            food,
            max_amount,
            seed,
            output,
        } => {
            let generator = GeneratorConfig {
                board_size: size,
                insect_count: insects,
                food_count: food,
                max_food_amount: max_amount,
                seed,
            };
            run::generate(&generator, &config.limits, output.as_deref())
        }
    }
}
