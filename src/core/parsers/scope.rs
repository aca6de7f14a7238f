//! Lexical scopes used to tag identifiers with their declaration kind.

use std::collections::HashMap;

use crate::core::source::DeclKind;

/// Stack of block scopes on top of a file scope.
///
/// The file scope holds package-level declarations and is visible from
/// everywhere in the file, including before the declaration. Block scopes only
/// see names declared earlier in the walk.
#[derive(Debug, Default)]
pub struct Scopes {
    file: HashMap<String, DeclKind>,
    blocks: Vec<HashMap<String, DeclKind>>,
}

impl Scopes {
    pub fn new(file: HashMap<String, DeclKind>) -> Self {
        Self {
            file,
            blocks: Vec::new(),
        }
    }

    pub fn push(&mut self) {
        self.blocks.push(HashMap::new());
    }

    pub fn pop(&mut self) {
        self.blocks.pop();
    }

    /// Declare a name in the innermost scope. Blank identifiers declare nothing.
    pub fn declare(&mut self, name: &str, kind: DeclKind) {
        if name == "_" {
            return;
        }
        let scope = self.blocks.last_mut().unwrap_or(&mut self.file);
        scope.insert(name.to_string(), kind);
    }

    pub fn lookup(&self, name: &str) -> Option<DeclKind> {
        self.blocks
            .iter()
            .rev()
            .find_map(|scope| scope.get(name).copied())
            .or_else(|| self.file.get(name).copied())
    }
}
