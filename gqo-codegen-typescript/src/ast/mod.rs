//! TypeScript AST builders for the declarations gqodegen emits.
//!
//! These provide a small API for constructing TypeScript syntax, which is
//! then rendered via [`CodeBuilder`](gqodegen_codegen::CodeBuilder).

mod enums;
mod fns;
mod imports;
mod types;

pub use enums::{Enum, EnumStrings};
pub use fns::{FnSignature, Param};
pub use imports::Import;
pub use types::{Member, ObjectType};
