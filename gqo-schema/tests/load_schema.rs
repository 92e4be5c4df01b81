//! Loading schema files from disk.

use std::fs;

use gqodegen_ir::{DefaultValue, Definition, TypeRef};
use gqodegen_schema::{Error, SchemaFile};
use tempfile::TempDir;

const SCHEMA: &str = r#"
scalar Date

enum Status { DRAFT PUBLISHED }

"A blog post"
type Post {
  title: String!
  tags: [String!]!
}

input PostInput {
  title: String = "untitled"
  status: Status = DRAFT
  meta: MetaInput = { pinned: true, weight: 1.5 }
}

type Query {
  posts(limit: Int = 10): [Post]
}

extend type Query {
  drafts: [Post]
}

query Recent { posts(limit: 5) { title } }
"#;

#[test]
fn test_open_lowers_in_source_order() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("blog.gql");
    fs::write(&path, SCHEMA).unwrap();

    let file = SchemaFile::open(&path).unwrap();
    let kinds: Vec<_> = file.document().definitions.iter().map(Definition::kind).collect();

    assert_eq!(
        kinds,
        vec![
            "scalar",
            "enum",
            "object",
            "input",
            "object",
            "object extension",
            "operation",
        ]
    );
    assert_eq!(file.content(), SCHEMA);
    assert_eq!(file.document().filename, path.display().to_string());
}

#[test]
fn test_wrappers_and_defaults_survive_lowering() {
    let document = gqodegen_schema::parse_str(SCHEMA).unwrap();

    let Some(Definition::Object(post)) = document.definitions.get(2) else {
        panic!("expected Post object");
    };
    assert_eq!(post.description.as_deref(), Some("A blog post"));
    assert_eq!(
        post.fields[1].ty,
        TypeRef::non_null(TypeRef::list(TypeRef::non_null(TypeRef::named("String"))))
    );

    let Some(Definition::Input(input)) = document.definitions.get(3) else {
        panic!("expected input definition");
    };
    let defaults: Vec<_> = input.fields.iter().map(|f| f.default.clone()).collect();
    assert_eq!(
        defaults,
        vec![
            Some(DefaultValue::String("untitled".into())),
            Some(DefaultValue::Unsupported("enum".into())),
            Some(DefaultValue::Object(vec![
                ("pinned".into(), DefaultValue::Bool(true)),
                ("weight".into(), DefaultValue::Float("1.5".into())),
            ])),
        ]
    );
}

#[test]
fn test_missing_file_is_io_error() {
    let temp = TempDir::new().unwrap();
    let err = SchemaFile::open(temp.path().join("nope.gql")).unwrap_err();
    assert!(matches!(*err, Error::Io { .. }));
}

#[test]
fn test_syntax_error_has_span() {
    let err = gqodegen_schema::parse_str_with_filename("type Query {\n  a: \n}", "bad.gql")
        .unwrap_err();
    match *err {
        Error::Parse { span, .. } => assert!(span.is_some()),
        other => panic!("expected parse error, got {:?}", other),
    }
}
