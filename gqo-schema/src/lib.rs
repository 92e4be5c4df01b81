//! GraphQL SDL loading for gqodegen.
//!
//! Parsing is delegated to `async-graphql-parser`; this crate turns the parsed
//! document into [`gqodegen_ir::SchemaDocument`] and reports failures as
//! [`miette`] diagnostics pointing into the schema source.
//!
//! A schema file may also carry operations and fragments. They are checked
//! with the executable grammar and kept as `Other` definitions.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod file;
mod lower;
mod source;

use std::borrow::Cow;

pub use error::{Error, Result, SourceContext};
pub use file::SchemaFile;
use gqodegen_ir::SchemaDocument;

/// Parse SDL from a string (uses "schema.gql" as filename in errors).
pub fn parse_str(content: &str) -> Result<SchemaDocument> {
    parse_str_with_filename(content, "schema.gql")
}

/// Parse SDL from a string with a custom filename for error reporting.
pub fn parse_str_with_filename(content: &str, filename: &str) -> Result<SchemaDocument> {
    let ctx = SourceContext::new(content, filename);
    let executable = source::executable_ranges(content);

    let schema = if executable.is_empty() {
        Cow::Borrowed(content)
    } else {
        Cow::Owned(source::blank(content, &executable, false))
    };
    let mut lowered = if !executable.is_empty() && schema.trim().is_empty() {
        SchemaDocument::new(filename)
    } else {
        let document =
            async_graphql_parser::parse_schema(&*schema).map_err(|e| ctx.parse_error(&e))?;
        lower::lower_document(document, content, filename)
    };

    if !executable.is_empty() {
        let query = source::blank(content, &executable, true);
        match async_graphql_parser::parse_query(&query) {
            // fragments without an operation
            Ok(_) | Err(async_graphql_parser::Error::MissingOperation) => {}
            Err(e) => return Err(ctx.parse_error(&e)),
        }
        lowered.definitions.extend(
            executable
                .iter()
                .map(|range| lower::lower_executable(content, range.start)),
        );
        lowered.definitions.sort_by_key(|definition| {
            let at = definition.location();
            (at.line, at.column)
        });
    }

    tracing::debug!(
        filename,
        definitions = lowered.definitions.len(),
        executable = executable.len(),
        "lowered schema document"
    );
    Ok(lowered)
}
