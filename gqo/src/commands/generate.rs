use std::path::PathBuf;

use chrono::{DateTime, Local, NaiveDateTime};
use clap::{Args, builder::FalseyValueParser};
use eyre::{Context, Result, eyre};
use gqodegen_codegen::{generation::OutputFile, pipeline::Pipeline};
use gqodegen_codegen_typescript::{EmitError, Generator, GeneratorOptions};
use gqodegen_schema::SchemaFile;

use super::{SourceArgs, UnwrapOrExit};
use crate::{
    ops,
    reports::{GenerateReport, Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Path of the generated TypeScript file
    #[arg(short, long, env = "OUTPUT", default_value = "generated.ts")]
    pub output: PathBuf,

    /// Module the custom scalars are imported from
    #[arg(long, env = "SCALARS", default_value = "types.ts")]
    pub scalars: String,

    /// Render argument defaults as initializers in function signatures
    #[arg(long, env = "DEFAULTS", value_parser = FalseyValueParser::new())]
    pub defaults: bool,

    /// Command run on the generated file after writing (e.g. "deno check")
    #[arg(long, env = "COMPILE")]
    pub compile: Option<String>,

    /// Print the generated code instead of writing it
    #[arg(long)]
    pub dry_run: bool,

    /// Unix timestamp used in the header instead of the current time
    #[arg(long, env = "SOURCE_DATE_EPOCH", hide = true)]
    pub source_date_epoch: Option<i64>,
}

/// A rendered file and the number of validation diagnostics behind it.
struct Generated {
    output: OutputFile,
    diagnostics: usize,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let file = self.source.open();
        let generated = self.build(&file, self.generated_at()?).unwrap_or_exit();

        if self.dry_run {
            print!("{}", generated.output.content());
            return Ok(());
        }

        self.write(generated)?.render(&mut TerminalOutput::new());
        Ok(())
    }

    /// Validate and render the schema. Nothing is written.
    fn build(
        &self,
        file: &SchemaFile,
        generated_at: NaiveDateTime,
    ) -> gqodegen_schema::Result<Generated> {
        tracing::info!(source = %file.path().display(), "generating");

        let ctx = Pipeline::new().run(file.document().clone());
        let options = GeneratorOptions::new(generated_at)
            .scalar_module(&self.scalars)
            .render_defaults(self.defaults);

        let output = Generator::from_context(&ctx, options)
            .output(&self.output)
            .map_err(|err| match err {
                EmitError::InvalidExtension { name, location, .. } => {
                    file.source_context().invalid_extension_error(name, location)
                }
            })?;

        Ok(Generated {
            output,
            diagnostics: ctx.diagnostics.len(),
        })
    }

    /// Write the output and run the compile hook.
    fn write(&self, generated: Generated) -> Result<GenerateReport> {
        let Generated {
            output,
            diagnostics,
        } = generated;
        let written = output.write().wrap_err("Failed to write generated code")?;

        let compiled = match &self.compile {
            Some(command) => Some(ops::compile(command, output.path())?),
            None => None,
        };

        Ok(GenerateReport {
            output_path: output.path().to_path_buf(),
            written,
            diagnostics,
            compiled,
        })
    }

    fn generated_at(&self) -> Result<NaiveDateTime> {
        match self.source_date_epoch {
            Some(secs) => DateTime::from_timestamp(secs, 0)
                .map(|at| at.naive_utc())
                .ok_or_else(|| eyre!("SOURCE_DATE_EPOCH out of range: {}", secs)),
            None => Ok(Local::now().naive_local()),
        }
    }
}
