// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Entry point for all user interaction, built on the `clap`
// crate. All pipeline logic is delegated to Layer 2
// (application) — this layer only routes and prints.
//
// Two commands are supported:
//   1. `create`  — builds the train/dev/test dataset files
//   2. `inspect` — reads a built split back and reports on it
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

// Declare the commands submodule
pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, CreateArgs, InspectArgs};

/// The main CLI struct — clap reads the fields and generates
/// argument parsing code automatically via the Parser derive macro.
#[derive(Parser, Debug)]
#[command(
    name = "revdict-dataset",
    version = "0.1.0",
    about = "Build the WordNet reverse-dictionary dataset (word;tokenized description)."
)]
pub struct Cli {
    /// The subcommand to run (create or inspect)
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Match on the subcommand and dispatch to the correct use case.
    /// This keeps the CLI layer thin — it only routes, never computes.
    /// The handlers are associated functions: the match moves the args
    /// out of `self.command`, so they must not borrow `self` again.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Create(args)  => Self::run_create(args),
            Commands::Inspect(args) => Self::run_inspect(args),
        }
    }

    /// Handles the `create` subcommand.
    /// Converts CLI args into a CreateConfig and hands off to Layer 2.
    fn run_create(args: CreateArgs) -> Result<()> {
        use crate::application::create_use_case::CreateUseCase;

        tracing::info!("Building dataset from WordNet at: {}", args.wordnet_dir);

        // Convert CLI args → application config (separates presentation from domain)
        let use_case = CreateUseCase::new(args.into());
        let summary  = use_case.execute()?;

        println!(
            "Dataset written: {} train / {} dev / {} test instances.",
            summary.train_instances, summary.dev_instances, summary.test_instances
        );
        Ok(())
    }

    /// Handles the `inspect` subcommand.
    /// Parses a previously written split file and prints a report.
    fn run_inspect(args: InspectArgs) -> Result<()> {
        use crate::application::inspect_use_case::InspectUseCase;

        let use_case = InspectUseCase::new(args.out_dir, args.split);
        let report   = use_case.report(args.samples)?;

        println!("\nSplit '{}':", report.split);
        println!("  instances:      {}", report.instances);
        println!("  distinct words: {}", report.distinct_words);
        println!("  avg tokens:     {:.2}", report.avg_description_len);
        for line in &report.sample_lines {
            println!("  e.g. {}", line);
        }
        Ok(())
    }
}
