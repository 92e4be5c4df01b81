use clap::Args;
use eyre::Result;
use gqodegen_codegen::pipeline::ValidatePhase;

use super::SourceArgs;
use crate::{
    ops,
    reports::{Output, Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub source: SourceArgs,

    /// List the lints that are run and exit
    #[arg(long)]
    pub list_lints: bool,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let mut out = TerminalOutput::new();

        if self.list_lints {
            out.section("Lints");
            for info in ValidatePhase::new().lint_info() {
                out.key_value_indented(info.name, info.description);
            }
            return Ok(());
        }

        let file = self.source.open();
        let report = ops::check(file.document(), file.path());
        report.render(&mut out);

        if !report.is_valid() {
            std::process::exit(1);
        }
        Ok(())
    }
}
