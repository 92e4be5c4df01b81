//! Language-specific abstractions.
//!
//! A target language plugs into the generators by providing a
//! [`ScalarMapper`]: the table that turns schema scalar names into the
//! target's own type names.

/// Maps schema scalar names to target language type names.
///
/// Implementations are pure lookup tables. Names without an entry must pass
/// through unchanged so custom scalars resolve to the imported declarations
/// of the same name.
pub trait ScalarMapper {
    /// Identifier for the target language (e.g., "typescript").
    fn language(&self) -> &'static str;

    /// Target name for a schema scalar.
    fn map_scalar<'a>(&self, name: &'a str) -> &'a str;
}

/// Mapper backed by a fixed `(schema, target)` table.
#[derive(Debug, Clone, Copy)]
pub struct TableScalarMapper {
    language: &'static str,
    table: &'static [(&'static str, &'static str)],
}

impl TableScalarMapper {
    pub const fn new(
        language: &'static str,
        table: &'static [(&'static str, &'static str)],
    ) -> Self {
        Self { language, table }
    }
}

impl ScalarMapper for TableScalarMapper {
    fn language(&self) -> &'static str {
        self.language
    }

    fn map_scalar<'a>(&self, name: &'a str) -> &'a str {
        self.table
            .iter()
            .find(|(from, _)| *from == name)
            .map(|(_, to)| *to)
            .unwrap_or(name)
    }
}
