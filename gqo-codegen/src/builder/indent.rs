//! Indentation unit for generated code.

/// The text written once per indentation level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indent(&'static str);

impl Indent {
    /// Two spaces, the TypeScript convention.
    pub const TYPESCRIPT: Self = Self("  ");

    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::TYPESCRIPT
    }
}
