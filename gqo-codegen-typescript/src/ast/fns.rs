//! TypeScript function signature builder.

use gqodegen_codegen::{CodeFragment, Renderable};

/// A parameter in a TypeScript function signature.
#[derive(Debug, Clone)]
pub struct Param {
    pub name: String,
    pub ty: String,
    /// Initializer literal, rendered as `name: ty = default`.
    pub default: Option<String>,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            default: None,
        }
    }

    pub fn default_value(mut self, literal: impl Into<String>) -> Self {
        self.default = Some(literal.into());
        self
    }
}

impl std::fmt::Display for Param {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.name, self.ty)?;
        if let Some(default) = &self.default {
            write!(f, " = {}", default)?;
        }
        Ok(())
    }
}

/// Builder for exported function declarations without a body
/// (`export function name(a: T): R;`).
#[derive(Debug, Clone)]
pub struct FnSignature {
    name: String,
    params: Vec<Param>,
    return_type: String,
}

impl FnSignature {
    pub fn new(name: impl Into<String>, return_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
            return_type: return_type.into(),
        }
    }

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    /// The declaration on a single line, without trailing newline.
    pub fn to_line(&self) -> String {
        let params: Vec<String> = self.params.iter().map(Param::to_string).collect();
        format!(
            "export function {}({}): {};",
            self.name,
            params.join(", "),
            self.return_type
        )
    }
}

impl Renderable for FnSignature {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::Line(self.to_line())]
    }
}
