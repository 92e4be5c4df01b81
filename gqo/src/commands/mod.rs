mod check;
mod completions;
mod generate;
mod inspect;

use std::path::PathBuf;

use check::CheckCommand;
use clap::{Args, Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;
use gqodegen_schema::SchemaFile;
use inspect::InspectCommand;

/// Extension trait for exiting on schema errors with pretty formatting
///
/// The error is printed as a miette report and the process exits with status 1.
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for gqodegen_schema::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

/// The schema file every command reads.
#[derive(Args)]
pub struct SourceArgs {
    /// Path to the GraphQL schema
    #[arg(short, long, env = "SOURCE", default_value = "test.gql")]
    pub source: PathBuf,
}

impl SourceArgs {
    pub fn open(&self) -> SchemaFile {
        SchemaFile::open(&self.source).unwrap_or_exit()
    }
}

#[derive(Parser)]
#[command(name = "gqodegen")]
#[command(version)]
#[command(about = "Generate TypeScript declarations from a GraphQL schema")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Inspect(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate TypeScript declarations from the schema
    Generate(GenerateCommand),

    /// Validate the schema without generating code
    Check(CheckCommand),

    /// Print the parsed schema as JSON
    Inspect(InspectCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
