//! Go source parser built on tree-sitter.
//!
//! Walks the syntax tree in pre-order (a call is visited before the calls in
//! its arguments) and records every call expression. Identifier arguments are
//! resolved against the declarations visible at the call: package-level
//! declarations of every file parsed together, function parameters, `:=` definitions,
//! `var`/`const` specs, range/receive clauses and type switch aliases.

use std::{collections::HashMap, fs, path::PathBuf};

use anyhow::{Context, Result, anyhow, bail};
use tree_sitter::{Node, Parser, Tree};

use super::SourceParser;
use super::scope::Scopes;
use crate::core::source::{Argument, CallSite, Callee, DeclKind, ParsedUnit, SourceLocation};

pub struct GoParser {
    parser: Parser,
}

/// A syntax tree together with the text it was parsed from.
struct SourceTree<'a> {
    file: &'a str,
    source: &'a str,
    tree: Tree,
}

impl GoParser {
    pub fn new() -> Result<Self> {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_go::LANGUAGE.into())
            .context("Failed to load the Go grammar")?;
        Ok(Self { parser })
    }

    /// Parse Go source text. `file` is the path recorded in call locations.
    pub fn parse_source(&mut self, source: &str, file: &str) -> Result<ParsedUnit> {
        let parsed = self.parse_tree(file, source)?;
        let declarations = file_declarations(parsed.tree.root_node(), source.as_bytes());
        Ok(collect_calls(&parsed, declarations))
    }

    /// Parse the `(file, source)` pairs of one package.
    ///
    /// Every file is checked for syntax errors before any call is collected.
    /// Package-level declarations of all files are visible in each of them.
    pub fn parse_sources(&mut self, sources: &[(String, String)]) -> Result<Vec<ParsedUnit>> {
        let trees = sources
            .iter()
            .map(|(file, source)| self.parse_tree(file, source))
            .collect::<Result<Vec<_>>>()?;

        let mut package = HashMap::new();
        for parsed in &trees {
            package.extend(file_declarations(
                parsed.tree.root_node(),
                parsed.source.as_bytes(),
            ));
        }

        Ok(trees
            .iter()
            .map(|parsed| collect_calls(parsed, package.clone()))
            .collect())
    }

    fn parse_tree<'a>(&mut self, file: &'a str, source: &'a str) -> Result<SourceTree<'a>> {
        let tree = self
            .parser
            .parse(source, None)
            .ok_or_else(|| anyhow!("Failed to parse {}", file))?;
        let root = tree.root_node();

        if root.has_error() {
            let (line, column) = first_error(root).map(position).unwrap_or((1, 1));
            bail!("{}:{}:{}: syntax error", file, line, column);
        }
        check_top_level(root, file)?;

        Ok(SourceTree { file, source, tree })
    }
}

impl SourceParser for GoParser {
    fn parse_files(&mut self, paths: &[PathBuf]) -> Result<Vec<ParsedUnit>> {
        let sources = paths
            .iter()
            .map(|path| -> Result<(String, String)> {
                let source = fs::read_to_string(path)
                    .with_context(|| format!("Failed to read source file: {}", path.display()))?;
                Ok((path.display().to_string(), source))
            })
            .collect::<Result<Vec<_>>>()?;
        self.parse_sources(&sources)
    }
}

const TOP_LEVEL_DECLARATIONS: &[&str] = &[
    "import_declaration",
    "function_declaration",
    "method_declaration",
    "var_declaration",
    "const_declaration",
    "type_declaration",
];

/// The grammar accepts statements at file level and a missing package clause.
/// A Go file is a package clause followed by declarations only.
fn check_top_level(root: Node, file: &str) -> Result<()> {
    let mut cursor = root.walk();
    let mut items = root
        .named_children(&mut cursor)
        .filter(|child| child.kind() != "comment");

    match items.next() {
        Some(first) if first.kind() == "package_clause" => {}
        Some(first) => {
            let (line, column) = position(first);
            bail!(
                "{}:{}:{}: syntax error: package statement must be first",
                file,
                line,
                column
            );
        }
        None => bail!("{}:1:1: syntax error: package statement must be first", file),
    }

    if let Some(item) = items.find(|item| !TOP_LEVEL_DECLARATIONS.contains(&item.kind())) {
        let (line, column) = position(item);
        bail!(
            "{}:{}:{}: syntax error: non-declaration statement outside function body",
            file,
            line,
            column
        );
    }

    Ok(())
}

fn collect_calls(parsed: &SourceTree, declarations: HashMap<String, DeclKind>) -> ParsedUnit {
    let mut collector = CallCollector {
        source: parsed.source.as_bytes(),
        file: parsed.file,
        scopes: Scopes::new(declarations),
        call_sites: Vec::new(),
    };
    collector.visit(parsed.tree.root_node());

    ParsedUnit {
        file: parsed.file.to_string(),
        call_sites: collector.call_sites,
    }
}

struct CallCollector<'a> {
    source: &'a [u8],
    file: &'a str,
    scopes: Scopes,
    call_sites: Vec<CallSite>,
}

impl CallCollector<'_> {
    fn visit(&mut self, node: Node) {
        match node.kind() {
            "call_expression" => {
                self.record_call(node);
                self.visit_children(node);
            }
            "function_declaration" | "method_declaration" | "func_literal" => {
                self.visit_function(node)
            }
            "block" | "if_statement" | "for_statement" | "expression_switch_statement"
            | "select_statement" | "expression_case" | "type_case" | "default_case"
            | "communication_case" => {
                self.scopes.push();
                self.visit_children(node);
                self.scopes.pop();
            }
            "type_switch_statement" => self.visit_type_switch(node),
            "short_var_declaration" => self.visit_definition(node),
            "range_clause" | "receive_statement" if has_token(node, ":=") => {
                self.visit_definition(node)
            }
            "var_spec" => self.visit_spec(node, DeclKind::Var),
            "const_spec" => self.visit_spec(node, DeclKind::Const),
            _ => self.visit_children(node),
        }
    }

    fn visit_children(&mut self, node: Node) {
        let mut cursor = node.walk();
        for child in node.named_children(&mut cursor) {
            self.visit(child);
        }
    }

    fn visit_function(&mut self, node: Node) {
        self.scopes.push();
        for field in ["receiver", "type_parameters", "parameters", "result"] {
            if let Some(list) = node.child_by_field_name(field) {
                self.declare_parameters(list);
            }
        }
        if let Some(body) = node.child_by_field_name("body") {
            self.visit(body);
        }
        self.scopes.pop();
    }

    fn visit_type_switch(&mut self, node: Node) {
        self.scopes.push();
        if let Some(initializer) = node.child_by_field_name("initializer") {
            self.visit(initializer);
        }
        if let Some(value) = node.child_by_field_name("value") {
            self.visit(value);
        }
        if let Some(alias) = node.child_by_field_name("alias") {
            self.declare_names(alias, DeclKind::Var);
        }
        let mut cursor = node.walk();
        for child in node.named_children(&mut cursor) {
            if matches!(child.kind(), "type_case" | "default_case") {
                self.visit(child);
            }
        }
        self.scopes.pop();
    }

    /// `left := right`: the right side is evaluated before the names exist.
    fn visit_definition(&mut self, node: Node) {
        if let Some(right) = node.child_by_field_name("right") {
            self.visit(right);
        }
        if let Some(left) = node.child_by_field_name("left") {
            self.declare_names(left, DeclKind::Var);
        }
    }

    fn visit_spec(&mut self, spec: Node, kind: DeclKind) {
        if let Some(value) = spec.child_by_field_name("value") {
            self.visit(value);
        }
        for name in field_names(spec, "name", self.source) {
            self.scopes.declare(&name, kind);
        }
    }

    fn declare_parameters(&mut self, list: Node) {
        let mut cursor = list.walk();
        for param in list.named_children(&mut cursor) {
            let kind = match param.kind() {
                "parameter_declaration" | "variadic_parameter_declaration" => DeclKind::Var,
                "type_parameter_declaration" => DeclKind::Type,
                _ => continue,
            };
            for name in field_names(param, "name", self.source) {
                self.scopes.declare(&name, kind);
            }
        }
    }

    /// Declare an identifier or every identifier of an expression list.
    fn declare_names(&mut self, node: Node, kind: DeclKind) {
        if node.kind() == "identifier" {
            self.scopes.declare(&text(node, self.source), kind);
            return;
        }
        let mut cursor = node.walk();
        let names: Vec<String> = node
            .named_children(&mut cursor)
            .filter(|child| child.kind() == "identifier")
            .map(|child| text(child, self.source))
            .collect();
        for name in names {
            self.scopes.declare(&name, kind);
        }
    }

    fn record_call(&mut self, node: Node) {
        let Some(argument_list) = node.child_by_field_name("arguments") else {
            return;
        };

        let callee = node
            .child_by_field_name("function")
            .filter(|function| function.kind() == "selector_expression")
            .and_then(|selector| {
                let operand = selector.child_by_field_name("operand")?;
                let field = selector.child_by_field_name("field")?;
                Some(Callee::Selector {
                    receiver: single_line(&text(operand, self.source)),
                    method: text(field, self.source),
                })
            })
            .unwrap_or(Callee::Other);

        let mut cursor = argument_list.walk();
        let arguments = argument_list
            .named_children(&mut cursor)
            .filter(|arg| arg.kind() != "comment")
            .map(|arg| self.classify(arg))
            .collect();

        // Position of the opening parenthesis
        let line = argument_list.start_position().row + 1;
        self.call_sites.push(CallSite {
            callee,
            arguments,
            location: SourceLocation::new(self.file, line),
        });
    }

    fn classify(&self, arg: Node) -> Argument {
        match arg.kind() {
            "interpreted_string_literal" | "raw_string_literal" => {
                Argument::Str(text(arg, self.source))
            }
            "int_literal" => Argument::Int(text(arg, self.source)),
            "identifier" => {
                let name = text(arg, self.source);
                let decl = self.scopes.lookup(&name);
                Argument::Ident { name, decl }
            }
            _ => Argument::Other,
        }
    }
}

const VAR_SPECS: &[&str] = &["var_spec"];
const CONST_SPECS: &[&str] = &["const_spec"];
const TYPE_SPECS: &[&str] = &["type_spec", "type_alias"];

/// Package-level declarations of a file. They are visible throughout the
/// file, regardless of declaration order.
fn file_declarations(root: Node, source: &[u8]) -> HashMap<String, DeclKind> {
    let mut decls = HashMap::new();
    let mut cursor = root.walk();

    for child in root.named_children(&mut cursor) {
        let (spec_kinds, kind) = match child.kind() {
            "function_declaration" => {
                if let Some(name) = child.child_by_field_name("name") {
                    decls.insert(text(name, source), DeclKind::Func);
                }
                continue;
            }
            "var_declaration" => (VAR_SPECS, DeclKind::Var),
            "const_declaration" => (CONST_SPECS, DeclKind::Const),
            "type_declaration" => (TYPE_SPECS, DeclKind::Type),
            _ => continue,
        };

        for spec in specs(child, spec_kinds) {
            for name in field_names(spec, "name", source) {
                if name != "_" {
                    decls.insert(name, kind);
                }
            }
        }
    }

    decls
}

/// Specs of a declaration, looking through parenthesized spec lists.
fn specs<'tree>(decl: Node<'tree>, kinds: &[&str]) -> Vec<Node<'tree>> {
    let mut found = Vec::new();
    let mut cursor = decl.walk();
    for child in decl.named_children(&mut cursor) {
        if kinds.contains(&child.kind()) {
            found.push(child);
        } else if child.kind().ends_with("_spec_list") {
            found.extend(specs(child, kinds));
        }
    }
    found
}

fn field_names(node: Node, field: &str, source: &[u8]) -> Vec<String> {
    let mut cursor = node.walk();
    let names = node
        .children_by_field_name(field, &mut cursor)
        .filter(|name| matches!(name.kind(), "identifier" | "type_identifier"))
        .map(|name| text(name, source))
        .collect();
    names
}

fn has_token(node: Node, token: &str) -> bool {
    let mut cursor = node.walk();
    let found = node.children(&mut cursor).any(|child| child.kind() == token);
    found
}

fn first_error(node: Node) -> Option<Node> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }
    let mut cursor = node.walk();
    let children: Vec<Node> = node.children(&mut cursor).collect();
    children.into_iter().find_map(first_error)
}

/// 1-indexed line and column of a node.
fn position(node: Node) -> (usize, usize) {
    let pos = node.start_position();
    (pos.row + 1, pos.column + 1)
}

/// Collapse whitespace runs so multi-line expressions fit one comment line.
fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn text(node: Node, source: &[u8]) -> String {
    node.utf8_text(source).unwrap_or_default().to_string()
}
