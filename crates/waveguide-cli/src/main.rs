//! Waveguide calculator command-line interface.
//!
//! ```sh
//! waveguide-cli solve --neff 2.5 --wavelength 1550
//! waveguide-cli convert --frequency 193.1
//! waveguide-cli session --config calc.toml
//! waveguide-cli validate calc.toml
//! ```

mod runner;
mod session;

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use waveguide_core::config::CalculatorConfig;

#[derive(Parser)]
#[command(name = "waveguide-cli")]
#[command(about = "Waveguide calculator: β = n_eff · 2π / λ")]
#[command(version)]
struct Cli {
    /// Display configuration file (TOML).
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Derive the missing quantity from exactly two of β, n_eff and λ (or f).
    Solve {
        #[command(flatten)]
        inputs: runner::SolveInputs,
        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Convert between wavelength (nm) and frequency (THz).
    Convert(ConvertArgs),
    /// Interactive session reading commands from standard input.
    Session,
    /// Validate a configuration file.
    Validate {
        /// Path to the configuration file.
        path: PathBuf,
    },
}

#[derive(Args)]
#[group(required = true, multiple = false)]
struct ConvertArgs {
    /// Wavelength in nm.
    #[arg(long, allow_hyphen_values = true)]
    wavelength: Option<String>,
    /// Frequency in THz.
    #[arg(long, allow_hyphen_values = true)]
    frequency: Option<String>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Solve { inputs, json } => {
            let report = runner::solve(&inputs)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                runner::print_report(&report);
            }
            Ok(())
        }
        Commands::Convert(args) => {
            let line = match (args.wavelength, args.frequency) {
                (Some(wavelength), _) => runner::convert_wavelength(&wavelength)?,
                (None, Some(frequency)) => runner::convert_frequency(&frequency)?,
                (None, None) => anyhow::bail!("either --wavelength or --frequency is required"),
            };
            println!("{line}");
            Ok(())
        }
        Commands::Session => {
            let config = load_config(cli.config.as_deref())?;
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            session::run(stdin.lock(), stdout.lock(), &config)
        }
        Commands::Validate { path } => {
            let config = CalculatorConfig::load(&path)
                .with_context(|| format!("{} is not a valid configuration", path.display()))?;
            println!("Configuration is valid: {}", path.display());
            println!("  history order: {:?}", config.history.order);
            println!("  window: {} x {}", config.window.width, config.window.height);
            Ok(())
        }
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<CalculatorConfig> {
    match path {
        Some(path) => Ok(CalculatorConfig::load(path)?),
        None => Ok(CalculatorConfig::default()),
    }
}
