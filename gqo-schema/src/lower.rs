//! Lowering from the parser AST to the IR.

use async_graphql_parser::{
    Pos, Positioned,
    types::{
        BaseType, FieldDefinition, InputValueDefinition, ServiceDocument, Type, TypeDefinition,
        TypeKind, TypeSystemDefinition,
    },
};
use async_graphql_value::ConstValue;
use gqodegen_ir::{
    ArgumentDef, DefaultValue, Definition, EnumDef, FieldDef, InputTypeDef, Location,
    ObjectTypeDef, ObjectTypeExtension, ScalarDef, SchemaDocument, TypeRef,
};

use crate::{error::byte_offset, source};

/// `src` is the original schema text, used to recover number literals.
pub(crate) fn lower_document(
    document: ServiceDocument,
    src: &str,
    filename: &str,
) -> SchemaDocument {
    let definitions = document
        .definitions
        .into_iter()
        .map(|definition| match definition {
            TypeSystemDefinition::Schema(schema) => Definition::Other {
                kind: if schema.node.extend {
                    "schema extension".to_string()
                } else {
                    "schema".to_string()
                },
                name: None,
                location: location(schema.pos),
            },
            TypeSystemDefinition::Directive(directive) => Definition::Other {
                kind: "directive".to_string(),
                name: Some(directive.node.name.node.to_string()),
                location: location(directive.pos),
            },
            TypeSystemDefinition::Type(ty) => lower_type_definition(ty, src),
        })
        .collect();

    SchemaDocument {
        filename: filename.to_string(),
        definitions,
    }
}

/// An operation or fragment, kept by kind and name only.
pub(crate) fn lower_executable(src: &str, offset: usize) -> Definition {
    let (kind, name) = source::executable_header(src, offset);
    Definition::Other {
        kind: kind.to_string(),
        name: name.map(str::to_string),
        location: source::location_of(src, offset),
    }
}

fn lower_type_definition(definition: Positioned<TypeDefinition>, src: &str) -> Definition {
    let at = location(definition.pos);
    let TypeDefinition {
        extend,
        description,
        name,
        kind,
        ..
    } = definition.node;
    let name = name.node.to_string();
    let description = description.map(|d| d.node);

    match (kind, extend) {
        (TypeKind::Scalar, false) => Definition::Scalar(ScalarDef { name, location: at }),
        (TypeKind::Enum(ty), false) => Definition::Enum(EnumDef {
            name,
            values: ty
                .values
                .into_iter()
                .map(|value| value.node.value.node.to_string())
                .collect(),
            location: at,
        }),
        (TypeKind::Object(ty), false) => Definition::Object(ObjectTypeDef {
            name,
            description,
            fields: ty
                .fields
                .iter()
                .map(|f| lower_field(&f.node, src))
                .collect(),
            location: at,
        }),
        (TypeKind::Object(ty), true) => Definition::ObjectExtension(ObjectTypeExtension {
            name,
            fields: ty
                .fields
                .iter()
                .map(|f| lower_field(&f.node, src))
                .collect(),
            location: at,
        }),
        (TypeKind::InputObject(ty), false) => Definition::Input(InputTypeDef {
            name,
            description,
            fields: ty
                .fields
                .iter()
                .map(|f| lower_input_value(&f.node, src))
                .collect(),
            location: at,
        }),
        (kind, extend) => {
            let kind = match kind {
                TypeKind::Scalar => "scalar",
                TypeKind::Object(_) => "object",
                TypeKind::Interface(_) => "interface",
                TypeKind::Union(_) => "union",
                TypeKind::Enum(_) => "enum",
                TypeKind::InputObject(_) => "input",
            };
            Definition::Other {
                kind: if extend {
                    format!("{} extension", kind)
                } else {
                    kind.to_string()
                },
                name: Some(name),
                location: at,
            }
        }
    }
}

fn lower_field(field: &FieldDefinition, src: &str) -> FieldDef {
    FieldDef {
        name: field.name.node.to_string(),
        description: field.description.as_ref().map(|d| d.node.clone()),
        arguments: field
            .arguments
            .iter()
            .map(|arg| lower_input_value(&arg.node, src))
            .collect(),
        ty: lower_type(&field.ty.node),
    }
}

fn lower_input_value(value: &InputValueDefinition, src: &str) -> ArgumentDef {
    let default = value.default_value.as_ref().map(|v| {
        let offset = byte_offset(src, location(v.pos));
        let mut numbers = source::number_literals(src, offset).into_iter();
        lower_value(&v.node, &mut numbers)
    });
    ArgumentDef {
        name: value.name.node.to_string(),
        description: value.description.as_ref().map(|d| d.node.clone()),
        ty: lower_type(&value.ty.node),
        default,
    }
}

/// `Type` keeps nullability as a flag; the IR wraps it as `NonNull`.
fn lower_type(ty: &Type) -> TypeRef {
    let base = match &ty.base {
        BaseType::Named(name) => TypeRef::Named(name.to_string()),
        BaseType::List(inner) => TypeRef::list(lower_type(inner)),
    };
    if ty.nullable {
        base
    } else {
        TypeRef::non_null(base)
    }
}

/// Numbers take their text from `numbers`, the literals of the value in
/// source order, since `ConstValue` has already normalized them.
fn lower_value<'a>(
    value: &ConstValue,
    numbers: &mut impl Iterator<Item = &'a str>,
) -> DefaultValue {
    match value {
        ConstValue::Null => DefaultValue::Null,
        ConstValue::Number(n) => {
            let text = numbers.next().map_or_else(|| n.to_string(), str::to_string);
            if text.contains(['.', 'e', 'E']) {
                DefaultValue::Float(text)
            } else {
                DefaultValue::Int(text)
            }
        }
        ConstValue::String(s) => DefaultValue::String(s.clone()),
        ConstValue::Boolean(b) => DefaultValue::Bool(*b),
        ConstValue::List(items) => DefaultValue::List(
            items
                .iter()
                .map(|item| lower_value(item, numbers))
                .collect(),
        ),
        ConstValue::Object(fields) => DefaultValue::Object(
            fields
                .iter()
                .map(|(name, value)| (name.to_string(), lower_value(value, numbers)))
                .collect(),
        ),
        ConstValue::Enum(_) => DefaultValue::Unsupported("enum".to_string()),
        ConstValue::Binary(_) => DefaultValue::Unsupported("binary".to_string()),
    }
}

fn location(pos: Pos) -> Location {
    Location::new(pos.line, pos.column)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lower(sdl: &str) -> SchemaDocument {
        let document = async_graphql_parser::parse_schema(sdl).expect("valid SDL");
        lower_document(document, sdl, "test.gql")
    }

    fn only_object(doc: &SchemaDocument) -> &ObjectTypeDef {
        match &doc.definitions[0] {
            Definition::Object(obj) => obj,
            other => panic!("expected object, got {:?}", other),
        }
    }

    #[test]
    fn test_non_null_list_of_non_null() {
        let doc = lower("type Query { ids: [ID!]! }");
        let field = &only_object(&doc).fields[0];
        assert_eq!(
            field.ty,
            TypeRef::non_null(TypeRef::list(TypeRef::non_null(TypeRef::named("ID"))))
        );
    }

    #[test]
    fn test_definitions_keep_source_order() {
        let doc = lower(
            r#"
            scalar Email
            enum Color { RED GREEN BLUE }
            input Filter { q: String }
            type User { email: Email }
            "#,
        );
        let kinds: Vec<_> = doc.definitions.iter().map(Definition::kind).collect();
        assert_eq!(kinds, vec!["scalar", "enum", "input", "object"]);
    }

    #[test]
    fn test_enum_values_in_order() {
        let doc = lower("enum Color { RED GREEN BLUE }");
        match &doc.definitions[0] {
            Definition::Enum(def) => assert_eq!(def.values, vec!["RED", "GREEN", "BLUE"]),
            other => panic!("expected enum, got {:?}", other),
        }
    }

    #[test]
    fn test_object_extension_is_distinct() {
        let doc = lower("extend type Query { extra: Int }");
        match &doc.definitions[0] {
            Definition::ObjectExtension(ext) => {
                assert_eq!(ext.name, "Query");
                assert_eq!(ext.fields.len(), 1);
                assert_eq!(ext.location.line, 1);
            }
            other => panic!("expected extension, got {:?}", other),
        }
    }

    #[test]
    fn test_other_kinds_are_observed() {
        let doc = lower(
            r#"
            directive @auth on FIELD_DEFINITION
            interface Node { id: ID! }
            union Thing = A | B
            extend enum Color { PINK }
            "#,
        );
        let kinds: Vec<_> = doc.definitions.iter().map(Definition::kind).collect();
        assert_eq!(
            kinds,
            vec!["directive", "interface", "union", "enum extension"]
        );
        assert_eq!(doc.definitions[0].name(), Some("auth"));
    }

    #[test]
    fn test_default_values() {
        let doc = lower(
            r#"
            type Query {
              search(
                ids: [Int] = []
                limit: Int = 10
                ratio: Float = 0.5
                exact: Boolean = false
                term: String = "a\"b"
                cursor: String = null
                order: Order = ASC
                page: Page = { size: 20, from: 0 }
              ): [String]
            }
            "#,
        );
        let defaults: Vec<_> = only_object(&doc).fields[0]
            .arguments
            .iter()
            .map(|arg| arg.default.clone().expect("every argument has a default"))
            .collect();

        assert_eq!(defaults[0], DefaultValue::List(vec![]));
        assert_eq!(defaults[1], DefaultValue::Int("10".into()));
        assert_eq!(defaults[2], DefaultValue::Float("0.5".into()));
        assert_eq!(defaults[3], DefaultValue::Bool(false));
        assert_eq!(defaults[4], DefaultValue::String("a\"b".into()));
        assert_eq!(defaults[5], DefaultValue::Null);
        assert_eq!(defaults[6], DefaultValue::Unsupported("enum".into()));
        assert_eq!(
            defaults[7],
            DefaultValue::Object(vec![
                ("size".into(), DefaultValue::Int("20".into())),
                ("from".into(), DefaultValue::Int("0".into())),
            ])
        );
    }

    #[test]
    fn test_number_defaults_keep_source_text() {
        let doc = lower(
            r#"
            type Query {
              scale(
                a: Float = 1e3
                b: Float = 0.10
                c: Float = 1.0
                d: Int = -0
                e: Int = 99999999999999999999
                f: [[Float]] = [[2.50], [], [-1E-2]]
                g: Range = { from: 0.0, to: 10, tags: ["1.5"] }
              ): Int
            }
            "#,
        );
        let defaults: Vec<_> = only_object(&doc).fields[0]
            .arguments
            .iter()
            .map(|arg| arg.default.clone().expect("every argument has a default"))
            .collect();

        assert_eq!(defaults[0], DefaultValue::Float("1e3".into()));
        assert_eq!(defaults[1], DefaultValue::Float("0.10".into()));
        assert_eq!(defaults[2], DefaultValue::Float("1.0".into()));
        assert_eq!(defaults[3], DefaultValue::Int("-0".into()));
        assert_eq!(
            defaults[4],
            DefaultValue::Int("99999999999999999999".into())
        );
        assert_eq!(
            defaults[5],
            DefaultValue::List(vec![
                DefaultValue::List(vec![DefaultValue::Float("2.50".into())]),
                DefaultValue::List(vec![]),
                DefaultValue::List(vec![DefaultValue::Float("-1E-2".into())]),
            ])
        );
        assert_eq!(
            defaults[6],
            DefaultValue::Object(vec![
                ("from".into(), DefaultValue::Float("0.0".into())),
                ("to".into(), DefaultValue::Int("10".into())),
                (
                    "tags".into(),
                    DefaultValue::List(vec![DefaultValue::String("1.5".into())])
                ),
            ])
        );
    }

    #[test]
    fn test_descriptions() {
        let doc = lower(
            r#"
            "A person"
            type User {
              "Primary address"
              email: String
            }
            "#,
        );
        let obj = only_object(&doc);
        assert_eq!(obj.description.as_deref(), Some("A person"));
        assert_eq!(
            obj.fields[0].description.as_deref(),
            Some("Primary address")
        );
    }
}
