//! Token-level view of the schema source.
//!
//! `async-graphql-parser` reads type-system and executable documents with
//! separate grammars and normalizes number literals. This module finds the
//! executable definitions in a mixed document and recovers literal text.

use std::ops::Range;

use gqodegen_ir::Location;
use logos::{Lexer, Logos};

/// GraphQL lexical token kinds. Whitespace, commas and comments are skipped;
/// anything the lexer does not recognise is treated as punctuation.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n,\u{FEFF}]+")]
#[logos(skip r"#[^\r\n]*")]
pub(crate) enum TokenKind {
    #[token("...")]
    #[regex(r"[!$&()\[\]{}:=@|]")]
    Punct,

    #[regex(r"[_A-Za-z][_0-9A-Za-z]*")]
    Name,

    #[regex(r"-?[0-9]+(\.[0-9]+)?([eE][+-]?[0-9]+)?")]
    Number,

    #[regex(r#""([^"\\\r\n]|\\.)*""#)]
    #[regex(r#""""([^"\\]|\\"""|\\|"[^"]|""[^"])*""""#, priority = 3)]
    String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    /// Byte offset in the source.
    pub start: usize,
}

impl Token<'_> {
    fn end(&self) -> usize {
        self.start + self.text.len()
    }

    fn is_punct(&self, c: &str) -> bool {
        self.kind == TokenKind::Punct && self.text == c
    }

    fn is_name(&self, names: &[&str]) -> bool {
        self.kind == TokenKind::Name && names.contains(&self.text)
    }
}

/// Tokens of `src` from a byte offset on.
pub(crate) struct Tokens<'a> {
    lexer: Lexer<'a, TokenKind>,
    offset: usize,
}

impl<'a> Tokens<'a> {
    pub fn new(src: &'a str, offset: usize) -> Self {
        Self {
            lexer: TokenKind::lexer(&src[offset..]),
            offset,
        }
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        let kind = self.lexer.next()?.unwrap_or(TokenKind::Punct);
        Some(Token {
            kind,
            text: self.lexer.slice(),
            start: self.offset + self.lexer.span().start,
        })
    }
}

const OPERATION_KEYWORDS: &[&str] = &["query", "mutation", "subscription", "fragment"];

/// Tokens after which a keyword is a type name, not the start of an
/// operation (`type query`, `union U = query`).
const NAME_POSITIONS: &[&str] = &[
    "type",
    "interface",
    "union",
    "enum",
    "input",
    "scalar",
    "extend",
    "implements",
    "directive",
    "on",
    "schema",
];

fn starts_operation(token: &Token<'_>, prev: Option<&Token<'_>>) -> bool {
    if token.is_name(OPERATION_KEYWORDS) {
        return match prev {
            None => true,
            Some(prev) if prev.kind == TokenKind::Name => !prev.is_name(NAME_POSITIONS),
            Some(prev) if prev.kind == TokenKind::Punct => {
                !matches!(prev.text, "=" | "|" | "&" | "@" | ":")
            }
            Some(_) => true,
        };
    }
    // `{ ... }` query shorthand
    token.is_punct("{") && prev.is_none_or(|prev| prev.is_punct("}"))
}

fn opens(token: &Token<'_>) -> bool {
    token.kind == TokenKind::Punct && matches!(token.text, "{" | "(" | "[")
}

fn closes(token: &Token<'_>) -> bool {
    token.kind == TokenKind::Punct && matches!(token.text, "}" | ")" | "]")
}

/// Byte ranges of the operations and fragments in `src`, in source order.
pub(crate) fn executable_ranges(src: &str) -> Vec<Range<usize>> {
    let mut ranges = Vec::new();
    let mut tokens = Tokens::new(src, 0);
    let mut depth = 0usize;
    let mut prev: Option<Token<'_>> = None;

    while let Some(token) = tokens.next() {
        if depth == 0 && starts_operation(&token, prev.as_ref()) {
            let end = operation_end(&token, &mut tokens).unwrap_or(src.len());
            ranges.push(token.start..end);
            prev = Some(Token {
                kind: TokenKind::Punct,
                text: "}",
                start: end,
            });
            continue;
        }

        if opens(&token) {
            depth += 1;
        } else if closes(&token) {
            depth = depth.saturating_sub(1);
        }
        if depth == 0 {
            prev = Some(token);
        }
    }
    ranges
}

/// End offset of the operation starting at `first`: the close of its
/// selection set.
fn operation_end(first: &Token<'_>, tokens: &mut Tokens<'_>) -> Option<usize> {
    let mut depth = 0usize;
    let mut token = *first;
    loop {
        if opens(&token) {
            depth += 1;
        } else if closes(&token) {
            depth = depth.saturating_sub(1);
            if depth == 0 && token.is_punct("}") {
                return Some(token.end());
            }
        }
        token = tokens.next()?;
    }
}

/// 1-based line and character column of a byte offset.
pub(crate) fn location_of(src: &str, offset: usize) -> Location {
    let before = &src[..offset.min(src.len())];
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    Location::new(
        before.matches('\n').count() + 1,
        before[line_start..].chars().count() + 1,
    )
}

/// Kind and name of the executable definition starting at `offset`.
pub(crate) fn executable_header(src: &str, offset: usize) -> (&'static str, Option<&str>) {
    let mut tokens = Tokens::new(src, offset);
    let kind = match tokens.next() {
        Some(token) if token.is_name(&["fragment"]) => "fragment",
        Some(token) if token.kind == TokenKind::Name => "operation",
        _ => return ("operation", None),
    };
    let name = tokens
        .next()
        .filter(|token| token.kind == TokenKind::Name)
        .map(|token| token.text);
    (kind, name)
}

/// Copy of `src` with every character inside (or, with `keep_inside`,
/// outside) `ranges` replaced by a space. Line breaks are kept so parser
/// positions still point into `src`.
pub(crate) fn blank(src: &str, ranges: &[Range<usize>], keep_inside: bool) -> String {
    src.char_indices()
        .map(|(i, c)| {
            let inside = ranges.iter().any(|r| r.contains(&i));
            if inside == keep_inside || c == '\n' || c == '\r' {
                c
            } else {
                ' '
            }
        })
        .collect()
}

/// Text of every number literal in the value starting at `offset`, in
/// source order. A leading `=` is skipped.
pub(crate) fn number_literals(src: &str, offset: usize) -> Vec<&str> {
    let mut numbers = Vec::new();
    let mut depth = 0usize;
    let mut tokens = Tokens::new(src, offset).peekable();

    if tokens.peek().is_some_and(|t| t.is_punct("=")) {
        tokens.next();
    }
    for token in tokens {
        if token.kind == TokenKind::Number {
            numbers.push(token.text);
        }
        if opens(&token) {
            depth += 1;
        } else if closes(&token) {
            depth = depth.saturating_sub(1);
        }
        if depth == 0 {
            break;
        }
    }
    numbers
}
