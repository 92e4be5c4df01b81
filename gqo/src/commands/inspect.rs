use clap::Args;
use eyre::{Context, Result};

use super::SourceArgs;

#[derive(Args)]
pub struct InspectCommand {
    #[command(flatten)]
    pub source: SourceArgs,
}

impl InspectCommand {
    /// Print the lowered document as pretty JSON
    pub fn run(&self) -> Result<()> {
        let file = self.source.open();
        let json =
            serde_json::to_string_pretty(file.document()).wrap_err("Failed to serialize schema")?;
        println!("{}", json);
        Ok(())
    }
}
