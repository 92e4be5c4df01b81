//! Built-in lints for schema validation.

mod duplicate_definition;
mod empty_enum;
mod input_field_type;
mod unknown_type;

pub use duplicate_definition::DuplicateDefinitionLint;
pub use empty_enum::EmptyEnumLint;
pub use input_field_type::InputFieldTypeLint;
pub use unknown_type::UnknownTypeLint;

use gqodegen_ir::{ArgumentDef, Definition, FieldDef, Location, SchemaDocument, TypeRef};

/// A place in the schema where a type is referenced.
pub(crate) struct TypeUse<'a> {
    /// `Type.field` or `Type.field(arg)`.
    pub path: String,
    pub ty: &'a TypeRef,
    /// Argument or input field, where only input types are allowed.
    pub input: bool,
    /// Location of the enclosing definition.
    pub location: Location,
}

/// Every type reference in the document, in source order.
pub(crate) fn type_uses(document: &SchemaDocument) -> Vec<TypeUse<'_>> {
    let mut uses = Vec::new();
    for definition in &document.definitions {
        match definition {
            Definition::Object(obj) => push_fields(&mut uses, &obj.name, &obj.fields, obj.location),
            Definition::ObjectExtension(ext) => {
                push_fields(&mut uses, &ext.name, &ext.fields, ext.location)
            }
            Definition::Input(input) => {
                for field in &input.fields {
                    let path = format!("{}.{}", input.name, field.name);
                    push_input(&mut uses, path, field, input.location);
                }
            }
            Definition::Scalar(_) | Definition::Enum(_) | Definition::Other { .. } => {}
        }
    }
    uses
}

fn push_fields<'a>(
    uses: &mut Vec<TypeUse<'a>>,
    owner: &str,
    fields: &'a [FieldDef],
    location: Location,
) {
    for field in fields {
        uses.push(TypeUse {
            path: format!("{}.{}", owner, field.name),
            ty: &field.ty,
            input: false,
            location,
        });
        for arg in &field.arguments {
            let path = format!("{}.{}({})", owner, field.name, arg.name);
            push_input(uses, path, arg, location);
        }
    }
}

fn push_input<'a>(
    uses: &mut Vec<TypeUse<'a>>,
    path: String,
    arg: &'a ArgumentDef,
    location: Location,
) {
    uses.push(TypeUse {
        path,
        ty: &arg.ty,
        input: true,
        location,
    });
}
