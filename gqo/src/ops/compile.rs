//! Compile operation - hands the generated file to a downstream command.

use std::{path::Path, process::Command};

use eyre::{Result, WrapErr, bail, eyre};

/// Run `command` with `output` appended as its last argument.
///
/// The command line is split on whitespace; the first word is the program.
/// A non-zero exit status is an error.
pub fn compile(command: &str, output: &Path) -> Result<String> {
    let mut words = command.split_whitespace();
    let program = words
        .next()
        .ok_or_else(|| eyre!("COMPILE is set but empty"))?;

    tracing::info!(command, output = %output.display(), "compiling generated source");
    let status = Command::new(program)
        .args(words)
        .arg(output)
        .status()
        .wrap_err_with(|| format!("Failed to run `{}`", command))?;

    if !status.success() {
        bail!("`{} {}` failed with {}", command, output.display(), status);
    }
    Ok(format!("{} {}", command, output.display()))
}
