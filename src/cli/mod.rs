// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Entry point for all user interaction, parsed with `clap`.
// All business logic is delegated to Layer 2 (application).
//
// Two commands are supported:
//   1. `convert` — full ARFF → .pat conversion
//   2. `inspect` — encoding preview without writing files

// Declare the commands submodule
pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, ConvertArgs, InspectArgs};

/// The main CLI struct — clap reads the fields and generates
/// argument parsing code automatically via the Parser derive macro.
#[derive(Parser, Debug)]
#[command(
    name = "arff2pat",
    version = "0.1.0",
    about = "Convert ARFF (weka) datasets into SNNS/JavaNNS .pat pattern files."
)]
pub struct Cli {
    /// The subcommand to run (convert or inspect)
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Match on the subcommand and dispatch to the correct use case.
    /// This keeps the CLI layer thin — it only routes, never computes.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Convert(args) => Self::run_convert(args),
            Commands::Inspect(args) => Self::run_inspect(args),
        }
    }

    /// Handles the `convert` subcommand.
    fn run_convert(args: ConvertArgs) -> Result<()> {
        use crate::application::convert_use_case::ConvertUseCase;

        tracing::info!("Converting '{}'", args.arff);

        // Convert CLI args → application config
        let use_case = ConvertUseCase::new(args.into());
        let summary  = use_case.execute()?;

        println!("{}", summary.render());
        Ok(())
    }

    /// Handles the `inspect` subcommand.
    fn run_inspect(args: InspectArgs) -> Result<()> {
        use crate::application::inspect_use_case::InspectUseCase;

        let use_case = InspectUseCase::new(args.arff);
        println!("{}", use_case.execute()?);
        Ok(())
    }
}
