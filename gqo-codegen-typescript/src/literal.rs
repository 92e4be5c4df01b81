//! Rendering of default values as TypeScript literals.

use gqodegen_ir::DefaultValue;

/// Emitted in place of a literal that has no TypeScript form.
pub const UNSUPPORTED_PLACEHOLDER: &str = "Error";

/// Render a default value as TypeScript literal text.
///
/// Values are not checked against the declared type; the TypeScript
/// compiler reports mismatches. Unsupported kinds are logged and rendered as
/// [`UNSUPPORTED_PLACEHOLDER`].
pub fn render_literal(value: &DefaultValue) -> String {
    match value {
        DefaultValue::List(items) => {
            let items: Vec<String> = items.iter().map(render_literal).collect();
            format!("[{}]", items.join(", "))
        }
        DefaultValue::Object(fields) if fields.is_empty() => "{}".to_string(),
        DefaultValue::Object(fields) => {
            let fields: Vec<String> = fields
                .iter()
                .map(|(name, value)| format!("{}: {}", name, render_literal(value)))
                .collect();
            format!("{{ {} }}", fields.join(", "))
        }
        DefaultValue::Int(text) | DefaultValue::Float(text) => text.clone(),
        DefaultValue::Bool(b) => b.to_string(),
        DefaultValue::String(s) => serde_json::Value::String(s.clone()).to_string(),
        DefaultValue::Null => "null".to_string(),
        DefaultValue::Variable(name) => name.clone(),
        DefaultValue::Unsupported(_) => {
            tracing::warn!(kind = value.kind(), "unsupported default value");
            UNSUPPORTED_PLACEHOLDER.to_string()
        }
    }
}
