//! Call-site data produced by source parsers.
//!
//! These types are the handoff point between a [`SourceParser`](super::parsers::SourceParser)
//! and the matcher. They carry no syntax-tree references, so the matcher can be
//! exercised with hand-built call sites.

use std::fmt;

/// Location of a call's opening parenthesis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    /// File path as it was handed to the parser (used verbatim in `#:` comments).
    pub file: String,
    /// 1-indexed line number.
    pub line: usize,
}

impl SourceLocation {
    pub fn new(file: impl Into<String>, line: usize) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// Kind of declaration an identifier resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclKind {
    Var,
    Const,
    Func,
    Type,
}

/// One positional argument of a call, tagged by the shape the matcher cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Argument {
    /// String literal, raw token including its quotes: `"a\tb"` or `` `raw` ``.
    Str(String),
    /// Integer literal, raw token.
    Int(String),
    /// Bare identifier with the declaration it resolves to in the file, if any.
    Ident {
        name: String,
        decl: Option<DeclKind>,
    },
    /// Any other expression (calls, concatenations, selectors, ...).
    Other,
}

impl Argument {
    /// Raw token of a string literal argument.
    pub fn as_str_literal(&self) -> Option<&str> {
        match self {
            Argument::Str(raw) => Some(raw),
            _ => None,
        }
    }
}

/// What a call expression is dispatched through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Callee {
    /// `receiver.method(...)`
    Selector { receiver: String, method: String },
    /// Plain function calls, calls on call results, conversions, ...
    Other,
}

/// A single call expression found in source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallSite {
    pub callee: Callee,
    pub arguments: Vec<Argument>,
    pub location: SourceLocation,
}

impl CallSite {
    /// `receiver.Method` label used in catalog reference comments.
    pub fn label(&self) -> Option<String> {
        match &self.callee {
            Callee::Selector { receiver, method } => Some(format!("{}.{}", receiver, method)),
            Callee::Other => None,
        }
    }
}

/// All call sites of one parsed source file, in traversal order.
#[derive(Debug, Clone, Default)]
pub struct ParsedUnit {
    pub file: String,
    pub call_sites: Vec<CallSite>,
}
