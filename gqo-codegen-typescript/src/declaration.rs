//! Object and input type declarations.

use gqodegen_codegen::ScalarMapper;
use gqodegen_ir::{FieldDef, InputTypeDef, ObjectTypeDef};

use crate::{
    ast::{Member, ObjectType},
    flatten::flatten_type,
    literal::render_literal,
};

/// Declaration for an object type.
///
/// Fields with arguments become call signatures, all others properties.
/// Argument defaults are not rendered here: type members cannot carry
/// initializers.
pub fn object_declaration(def: &ObjectTypeDef, mapper: &dyn ScalarMapper) -> ObjectType {
    let ty = def.fields.iter().fold(ObjectType::new(&def.name), |ty, field| {
        ty.member(field_member(field, mapper))
    });
    with_doc(ty, def.description.as_deref())
}

/// Declaration for an input object type. Defaults are kept as `//=` comments.
pub fn input_declaration(def: &InputTypeDef, mapper: &dyn ScalarMapper) -> ObjectType {
    let ty = def.fields.iter().fold(ObjectType::new(&def.name), |ty, field| {
        let mut member = Member::property(&field.name, flatten_type(&field.ty, mapper));
        if let Some(default) = &field.default {
            member = member.trailing(format!("={}", render_literal(default)));
        }
        if let Some(doc) = &field.description {
            member = member.doc(doc);
        }
        ty.member(member)
    });
    with_doc(ty, def.description.as_deref())
}

fn field_member(field: &FieldDef, mapper: &dyn ScalarMapper) -> Member {
    let ty = flatten_type(&field.ty, mapper);
    let member = if field.has_arguments() {
        let params = field
            .arguments
            .iter()
            .map(|arg| format!("{}: {}", arg.name, flatten_type(&arg.ty, mapper)))
            .collect();
        Member::method(&field.name, params, ty)
    } else {
        Member::property(&field.name, ty)
    };
    match &field.description {
        Some(doc) => member.doc(doc),
        None => member,
    }
}

fn with_doc(ty: ObjectType, doc: Option<&str>) -> ObjectType {
    match doc {
        Some(doc) => ty.doc(doc),
        None => ty,
    }
}

#[cfg(test)]
mod tests {
    use gqodegen_codegen::{Indent, Renderable};
    use gqodegen_ir::{ArgumentDef, DefaultValue, Location, TypeRef};

    use super::*;
    use crate::TypeScriptScalarMapper;

    #[test]
    fn test_object_fields_and_methods() {
        let def = ObjectTypeDef {
            name: "User".into(),
            description: Some("A registered user".into()),
            fields: vec![
                FieldDef::new("name", TypeRef::non_null(TypeRef::named("String")))
                    .description("Display name"),
                FieldDef::new("posts", TypeRef::list(TypeRef::named("Post"))).argument(
                    ArgumentDef::new("first", TypeRef::named("Int"))
                        .with_default(DefaultValue::Int("10".into())),
                ),
            ],
            location: Location::new(1, 1),
        };

        let code = object_declaration(&def, &TypeScriptScalarMapper).render(Indent::TYPESCRIPT);

        assert_eq!(
            code,
            "// A registered user\n\
             export type User = {\n\
             \x20 // Display name\n\
             \x20 name: string;\n\
             \x20 posts(first: Int): Array<Post>;\n\
             };\n"
        );
    }

    #[test]
    fn test_object_without_fields() {
        let def = ObjectTypeDef {
            name: "Marker".into(),
            description: None,
            fields: vec![],
            location: Location::default(),
        };
        let code = object_declaration(&def, &TypeScriptScalarMapper).render(Indent::TYPESCRIPT);
        assert_eq!(code, "export type Marker = {};\n");
    }

    #[test]
    fn test_input_defaults_become_comments() {
        let def = InputTypeDef {
            name: "Filter".into(),
            description: None,
            fields: vec![
                ArgumentDef::new("query", TypeRef::named("String")),
                ArgumentDef::new("tags", TypeRef::list(TypeRef::named("String")))
                    .with_default(DefaultValue::List(vec![DefaultValue::String("a".into())])),
            ],
            location: Location::default(),
        };

        let code = input_declaration(&def, &TypeScriptScalarMapper).render(Indent::TYPESCRIPT);

        assert_eq!(
            code,
            "export type Filter = {\n\
             \x20 query: string;\n\
             \x20 tags: Array<string>; //=[\"a\"]\n\
             };\n"
        );
    }
}
