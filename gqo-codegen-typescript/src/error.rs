use gqodegen_ir::Location;
use thiserror::Error;

/// Errors that stop declaration emission.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EmitError {
    /// `extend type` on a type other than `Query` or `Mutation`.
    #[error("extended {name} at {filename}:{}, only Query and Mutation may be extended", .location.line)]
    InvalidExtension {
        name: String,
        filename: String,
        location: Location,
    },
}
