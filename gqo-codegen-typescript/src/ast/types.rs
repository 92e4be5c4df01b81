//! TypeScript object type builder.

use gqodegen_codegen::{CodeFragment, Renderable};

/// A member of a TypeScript object type.
#[derive(Debug, Clone)]
pub struct Member {
    pub name: String,
    /// `Some` renders a call signature `name(a: T): R;`.
    pub params: Option<Vec<String>>,
    pub ty: String,
    pub doc: Option<String>,
    /// Trailing `//=` comment, used for input defaults.
    pub trailing: Option<String>,
}

impl Member {
    /// A property member: `name: ty;`.
    pub fn property(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: None,
            ty: ty.into(),
            doc: None,
            trailing: None,
        }
    }

    /// A call signature member: `name(params): ty;`.
    pub fn method(name: impl Into<String>, params: Vec<String>, ty: impl Into<String>) -> Self {
        Self {
            params: Some(params),
            ..Self::property(name, ty)
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn trailing(mut self, comment: impl Into<String>) -> Self {
        self.trailing = Some(comment.into());
        self
    }

    fn line(&self) -> String {
        let mut line = match &self.params {
            Some(params) => format!("{}({}): {};", self.name, params.join(", "), self.ty),
            None => format!("{}: {};", self.name, self.ty),
        };
        if let Some(comment) = &self.trailing {
            line.push_str(" //");
            line.push_str(comment);
        }
        line
    }
}

/// Builder for exported object types (`export type Foo = { ... };`).
#[derive(Debug, Clone)]
pub struct ObjectType {
    name: String,
    doc: Option<String>,
    members: Vec<Member>,
}

impl ObjectType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            members: Vec::new(),
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn member(mut self, member: Member) -> Self {
        self.members.push(member);
        self
    }
}

impl Renderable for ObjectType {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();

        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::comment(doc));
        }

        if self.members.is_empty() {
            fragments.push(CodeFragment::Line(format!("export type {} = {{}};", self.name)));
        } else {
            let body = self
                .members
                .iter()
                .flat_map(|member| {
                    let mut lines = Vec::new();
                    if let Some(doc) = &member.doc {
                        lines.push(CodeFragment::comment(doc));
                    }
                    lines.push(CodeFragment::Line(member.line()));
                    lines
                })
                .collect();
            fragments.push(CodeFragment::block(
                format!("export type {} = {{", self.name),
                body,
                "};",
            ));
        }

        fragments
    }
}
