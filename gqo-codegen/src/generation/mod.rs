//! Output management.

mod output;

pub use output::{OutputFile, WriteResult};
