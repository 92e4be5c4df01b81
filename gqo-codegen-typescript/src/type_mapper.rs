//! TypeScript scalar mapper implementation.

use gqodegen_codegen::{ScalarMapper, language::TableScalarMapper};

/// Schema scalars with a TypeScript primitive of their own. `Int`, `Float`
/// and `ID` are not listed: they are imported from the scalar module.
const TYPESCRIPT_SCALARS: TableScalarMapper = TableScalarMapper::new(
    "typescript",
    &[("String", "string"), ("Boolean", "boolean")],
);

/// TypeScript scalar mapper implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeScriptScalarMapper;

impl ScalarMapper for TypeScriptScalarMapper {
    fn language(&self) -> &'static str {
        TYPESCRIPT_SCALARS.language()
    }

    fn map_scalar<'a>(&self, name: &'a str) -> &'a str {
        TYPESCRIPT_SCALARS.map_scalar(name)
    }
}
