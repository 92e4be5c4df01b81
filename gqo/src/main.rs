mod commands;
mod ops;
mod reports;

use clap::Parser;
use eyre::{Result, WrapErr};
use tracing_subscriber::{EnvFilter, filter::LevelFilter, fmt, prelude::*};

use crate::commands::Cli;

/// Environment variable holding the log filter (e.g. `debug`).
const LOG_ENV: &str = "GQODEGEN_LOG";

fn main() -> Result<()> {
    color_eyre::install()?;
    ignore_missing(dotenvy::dotenv())?;

    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .with_env_var(LOG_ENV)
        .from_env_lossy();
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    Cli::parse().run()
}

/// A missing .env file is fine, a malformed one is not.
fn ignore_missing<T>(loaded: dotenvy::Result<T>) -> Result<()> {
    match loaded {
        Ok(_) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(e).wrap_err("Failed to load .env"),
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_missing_env_file_is_ignored() {
        let temp = TempDir::new().unwrap();
        assert!(ignore_missing(dotenvy::from_path(temp.path().join(".env"))).is_ok());
    }

    #[test]
    fn test_malformed_env_file_is_reported() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(".env");
        fs::write(&path, "GQODEGEN_TEST_KEY=\"unterminated\n").unwrap();

        let err = ignore_missing(dotenvy::from_path(&path)).unwrap_err();
        assert!(err.to_string().contains(".env"));
    }
}
