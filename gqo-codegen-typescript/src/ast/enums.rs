//! TypeScript enum and enum-string tuple builders.

use gqodegen_codegen::{CodeFragment, Renderable};

/// `export enum Name { A, B }` on a single line.
#[derive(Debug, Clone)]
pub struct Enum {
    name: String,
    values: Vec<String>,
}

impl Enum {
    pub fn new(name: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }
}

impl Renderable for Enum {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let line = if self.values.is_empty() {
            format!("export enum {} {{}}", self.name)
        } else {
            format!("export enum {} {{ {} }}", self.name, self.values.join(", "))
        };
        vec![CodeFragment::Line(line)]
    }
}

/// `export type NameString = ["A", "B"];`, the enum values as a string tuple.
#[derive(Debug, Clone)]
pub struct EnumStrings {
    name: String,
    values: Vec<String>,
}

impl EnumStrings {
    pub fn new(name: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }
}

impl Renderable for EnumStrings {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let items: Vec<String> = self
            .values
            .iter()
            .map(|v| serde_json::Value::String(v.clone()).to_string())
            .collect();
        vec![CodeFragment::Line(format!(
            "export type {}String = [{}];",
            self.name,
            items.join(", ")
        ))]
    }
}

#[cfg(test)]
mod tests {
    use gqodegen_codegen::Indent;

    use super::*;

    fn colors() -> Vec<String> {
        vec!["RED".into(), "GREEN".into(), "BLUE".into()]
    }

    #[test]
    fn test_enum() {
        let e = Enum::new("Color", colors());
        assert_eq!(
            e.render(Indent::TYPESCRIPT),
            "export enum Color { RED, GREEN, BLUE }\n"
        );
    }

    #[test]
    fn test_enum_strings() {
        let e = EnumStrings::new("Color", colors());
        assert_eq!(
            e.render(Indent::TYPESCRIPT),
            "export type ColorString = [\"RED\", \"GREEN\", \"BLUE\"];\n"
        );
    }

    #[test]
    fn test_empty_enum() {
        assert_eq!(
            Enum::new("Nothing", vec![]).render(Indent::TYPESCRIPT),
            "export enum Nothing {}\n"
        );
        assert_eq!(
            EnumStrings::new("Nothing", vec![]).render(Indent::TYPESCRIPT),
            "export type NothingString = [];\n"
        );
    }
}
