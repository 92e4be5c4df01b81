//! Final document layout.

use chrono::NaiveDateTime;
use gqodegen_codegen::CodeBuilder;

use crate::{
    ast::{Enum, EnumStrings, Import},
    walker::Accumulators,
};

/// Scalars without a TypeScript primitive. The scalar module must export
/// them, so they are always imported.
pub const PRELUDE_SCALARS: &[&str] = &["Int", "Float", "ID"];

const TOOL_BANNER: &str = "gqodegen :: GraphQL to TS";

/// Concatenates the walk results into the generated file.
#[derive(Debug, Clone)]
pub struct DocumentAssembler {
    scalar_module: String,
    generated_at: NaiveDateTime,
}

impl DocumentAssembler {
    pub fn new(scalar_module: impl Into<String>, generated_at: NaiveDateTime) -> Self {
        Self {
            scalar_module: scalar_module.into(),
            generated_at,
        }
    }

    pub fn assemble(&self, acc: Accumulators) -> String {
        let mut builder = CodeBuilder::typescript();

        builder
            .push_line("/*")
            .push_line(&format!(" * {}", TOOL_BANNER))
            .push_line(&format!(
                " * Generated on {}",
                self.generated_at.format("%-d-%-m-%Y %H:%M")
            ))
            .push_line(" */")
            .push_blank();

        let import = Import::new(module_specifier(&self.scalar_module))
            .named_all(&acc.scalars)
            .named_all(PRELUDE_SCALARS.iter().copied());
        builder.push_comment("scalars").emit(&import);

        builder.push_blank().push_comment("enums");
        for (name, values) in &acc.enums {
            builder.emit(&Enum::new(name, values.clone()));
        }

        builder.push_blank().push_comment("enum strings");
        for (name, values) in &acc.enums {
            builder.emit(&EnumStrings::new(name, values.clone()));
        }

        builder.push_blank().push_comment("types");
        push_text(&mut builder, &acc.types);

        builder.push_blank().push_comment("query headers");
        push_text(&mut builder, &acc.functions);

        builder.build()
    }
}

/// Import path for the scalar module. Bare names are made relative.
pub fn module_specifier(module: &str) -> String {
    if module.starts_with("./") || module.starts_with("../") || module.starts_with('/') {
        module.to_string()
    } else {
        format!("./{}", module)
    }
}

fn push_text(builder: &mut CodeBuilder, text: &str) {
    for line in text.lines() {
        builder.push_line(line);
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 5)
            .and_then(|d| d.and_hms_opt(hour, minute, 0))
            .unwrap()
    }

    #[test]
    fn test_empty_document_layout() {
        let assembler = DocumentAssembler::new("types.ts", at(9, 7));
        let out = assembler.assemble(Accumulators::default());
        assert_eq!(
            out,
            "/*\n\
             \x20* gqodegen :: GraphQL to TS\n\
             \x20* Generated on 5-3-2024 09:07\n\
             \x20*/\n\
             \n\
             // scalars\n\
             import { Int, Float, ID } from \"./types.ts\";\n\
             \n\
             // enums\n\
             \n\
             // enum strings\n\
             \n\
             // types\n\
             \n\
             // query headers\n"
        );
    }

    #[test]
    fn test_prelude_not_duplicated() {
        let acc = Accumulators {
            scalars: vec!["Date".into(), "ID".into()],
            ..Default::default()
        };
        let assembler = DocumentAssembler::new("scalars.ts", at(23, 59));
        let out = assembler.assemble(acc);
        assert!(out.contains("import { Date, ID, Int, Float } from \"./scalars.ts\";\n"));
        assert!(out.contains("Generated on 5-3-2024 23:59\n"));
    }

    #[test]
    fn test_enums_then_enum_strings() {
        let mut acc = Accumulators::default();
        acc.enums.insert("Color".into(), vec!["RED".into(), "BLUE".into()]);
        acc.enums.insert("Size".into(), vec!["S".into()]);

        let out = DocumentAssembler::new("types.ts", at(0, 0)).assemble(acc);

        assert!(out.contains(
            "// enums\n\
             export enum Color { RED, BLUE }\n\
             export enum Size { S }\n\
             \n\
             // enum strings\n\
             export type ColorString = [\"RED\", \"BLUE\"];\n\
             export type SizeString = [\"S\"];\n"
        ));
    }

    #[test]
    fn test_module_specifier() {
        assert_eq!(module_specifier("types.ts"), "./types.ts");
        assert_eq!(module_specifier("./types.ts"), "./types.ts");
        assert_eq!(module_specifier("../shared/types.ts"), "../shared/types.ts");
        assert_eq!(module_specifier("/abs/types.ts"), "/abs/types.ts");
    }
}
