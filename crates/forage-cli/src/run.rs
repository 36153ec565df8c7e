//! Command implementations.

use anyhow::{Context, Result};
use forage_core::{BoardLimits, GeneratorConfig, RunConfig};
use forage_world::{generator, report, setup};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Load the run configuration from a JSON file, or use defaults.
pub fn load_config(path: Option<&Path>) -> Result<RunConfig> {
    match path {
        Some(path) => {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file '{}'", path.display()))?;
            let config: RunConfig = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file '{}'", path.display()))?;
            config
                .limits
                .validate()
                .with_context(|| format!("Invalid limits in config file '{}'", path.display()))?;
            info!("Loaded config from '{}'", path.display());
            Ok(config)
        }
        None => Ok(RunConfig::default()),
    }
}

/// Read the input document, run one turn, and write the results file.
///
/// A rejected document is not a failure of the tool: its message becomes
/// the whole results file.
pub fn simulate(config: &RunConfig) -> Result<()> {
    info!(input = %config.input_path, output = %config.output_path, "Running simulation");

    let input = fs::read_to_string(&config.input_path)
        .with_context(|| format!("Failed to read input file '{}'", config.input_path))?;

    let body = match setup::parse(&input, &config.limits) {
        Ok(mut simulation) => {
            let result = simulation.run()?;
            info!(
                insects = result.records.len(),
                eaten = result.total_eaten(),
                "Turn finished"
            );
            report::render(&result.records, config.format)?
        }
        Err(err) if err.is_input_error() => {
            warn!(error = %err, "Input rejected");
            report::render_error(&err, config.format)?
        }
        Err(err) => return Err(err.into()),
    };

    fs::write(&config.output_path, body)
        .with_context(|| format!("Failed to write results file '{}'", config.output_path))?;
    Ok(())
}

/// Write a generated input document to `output`, or stdout.
pub fn generate(config: &GeneratorConfig, limits: &BoardLimits, output: Option<&Path>) -> Result<()> {
    let doc = generator::generate(config, limits)?;
    match output {
        Some(path) => {
            fs::write(path, doc)
                .with_context(|| format!("Failed to write '{}'", path.display()))?;
            info!(path = %path.display(), seed = config.seed, "Board written");
        }
        None => print!("{doc}"),
    }
    Ok(())
}
