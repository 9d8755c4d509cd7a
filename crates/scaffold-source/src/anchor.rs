//! Anchor location
//!
//! Finds the four structural locations of a wiring file that augmentation
//! extends:
//!
//! - the import list
//! - the field list of a named struct type
//! - the keyed literal returned by a named constructor function
//! - the statement list of a named method
//!
//! Lookups are read-only and return owned byte ranges, so all anchors can be
//! located against one tree before anything is edited.

use crate::document::GoSource;
use std::fmt;
use std::ops::Range;
use tree_sitter::Node;

/// Which anchor a lookup or mutation refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnchorKind {
    /// Top-level import declaration
    Import,
    /// Named struct type declaration
    Type,
    /// Keyed literal returned by the constructor
    Constructor,
    /// Statement list of the registration method
    Method,
}

impl AnchorKind {
    /// All anchors, in mutation order
    pub const ALL: [AnchorKind; 4] = [
        AnchorKind::Import,
        AnchorKind::Type,
        AnchorKind::Constructor,
        AnchorKind::Method,
    ];
}

impl fmt::Display for AnchorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AnchorKind::Import => "import",
            AnchorKind::Type => "type",
            AnchorKind::Constructor => "constructor",
            AnchorKind::Method => "method",
        };
        f.write_str(name)
    }
}

/// Result of an anchor lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Located<T> {
    /// Anchor found in the expected shape
    Found(T),
    /// No declaration with the requested name
    Absent,
    /// Declaration exists but does not have the expected shape
    Mismatch(String),
}

impl<T> Located<T> {
    /// Found value, if any
    #[inline]
    pub fn found(self) -> Option<T> {
        match self {
            Located::Found(value) => Some(value),
            _ => None,
        }
    }

    /// Check if the anchor was found
    #[inline]
    #[must_use]
    pub fn is_found(&self) -> bool {
        matches!(self, Located::Found(_))
    }
}

/// One element of a delimited list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// What the element is
    pub kind: EntryKind,
    /// Byte range of the element (separators excluded)
    pub span: Range<usize>,
    /// First row (0-based)
    pub start_row: usize,
    /// Last row (0-based)
    pub end_row: usize,
}

impl Entry {
    /// Check if the element fits on one line
    #[inline]
    #[must_use]
    pub fn is_single_line(&self) -> bool {
        self.start_row == self.end_row
    }
}

/// Element payloads the mutator cares about
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryKind {
    /// Import spec with its unquoted path
    Import { path: String },
    /// Struct field declaration (no names for embedded fields)
    Field {
        names: Vec<String>,
        ty: String,
        tag: Option<String>,
    },
    /// `key: value` element of a composite literal
    Keyed { key: String, value: String },
    /// Positional element of a composite literal
    Positional,
    /// Statement; `selected_field` is `X` for `recv.X.method(...)` calls
    Statement { selected_field: Option<String> },
    /// Comment
    Comment { text: String },
}

/// A brace- or paren-delimited list of entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryList {
    /// Offset of the opening delimiter
    pub open: usize,
    /// Offset of the closing delimiter
    pub close: usize,
    /// Row of the opening delimiter
    pub open_row: usize,
    /// Row of the closing delimiter
    pub close_row: usize,
    /// Elements in source order, comments included
    pub entries: Vec<Entry>,
}

impl EntryList {
    /// Elements that are not comments
    pub fn items(&self) -> impl Iterator<Item = &Entry> {
        self.entries
            .iter()
            .filter(|e| !matches!(e.kind, EntryKind::Comment { .. }))
    }
}

/// Import anchor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportAnchor {
    /// Every import path in the file, across all declarations
    pub paths: Vec<String>,
    /// Shape of the first import declaration
    pub first: ImportDecl,
}

/// Shape of the first import declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportDecl {
    /// `import ( ... )`
    Grouped(EntryList),
    /// `import "path"`; `spec` is the range of the spec after the keyword
    Single { spec: Range<usize> },
    /// No import declaration; `after` is the end of the package clause
    None { after: usize },
}

/// Struct type anchor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructAnchor {
    /// Field list
    pub fields: EntryList,
}

/// Constructor anchor: the keyed literal the constructor returns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiteralAnchor {
    /// Literal elements
    pub elements: EntryList,
}

/// Registration method anchor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodAnchor {
    /// Receiver name
    pub receiver: String,
    /// Body statements
    pub body: EntryList,
}

/// Anchor lookups over one parsed source
#[derive(Debug, Clone, Copy)]
pub struct Locator<'a> {
    doc: &'a GoSource,
}

impl<'a> Locator<'a> {
    /// Create locator over a document
    #[inline]
    #[must_use]
    pub fn new(doc: &'a GoSource) -> Self {
        Self { doc }
    }

    /// Locate the import list
    ///
    /// Never absent: a file without imports reports where one can be created.
    #[must_use]
    pub fn imports(&self) -> ImportAnchor {
        let decls: Vec<Node<'a>> = top_level(self.doc)
            .into_iter()
            .filter(|n| n.kind() == "import_declaration")
            .collect();

        let mut paths = Vec::new();
        for decl in &decls {
            for spec in descendants_of_kind(*decl, "import_spec") {
                if let Some(path) = spec.child_by_field_name("path") {
                    paths.push(unquote(self.doc.node_text(path)).to_string());
                }
            }
        }

        let first = match decls.first() {
            Some(decl) => match named_children(*decl).into_iter().find(|c| c.kind() != "comment") {
                Some(list) if list.kind() == "import_spec_list" => {
                    ImportDecl::Grouped(self.entry_list(list, |node| self.import_entry(node)))
                }
                Some(spec) => ImportDecl::Single {
                    spec: spec.byte_range(),
                },
                None => ImportDecl::None {
                    after: self.package_end(),
                },
            },
            None => ImportDecl::None {
                after: self.package_end(),
            },
        };

        ImportAnchor { paths, first }
    }

    /// Locate the field list of struct type `name`
    #[must_use]
    pub fn struct_type(&self, name: &str) -> Located<StructAnchor> {
        let spec = top_level(self.doc)
            .into_iter()
            .filter(|n| n.kind() == "type_declaration")
            .flat_map(named_children)
            .filter(|n| matches!(n.kind(), "type_spec" | "type_alias"))
            .find(|n| self.field_text(*n, "name") == Some(name));

        let Some(spec) = spec else {
            return Located::Absent;
        };
        if spec.kind() == "type_alias" {
            return Located::Mismatch(format!("`{name}` is a type alias"));
        }
        let Some(ty) = spec.child_by_field_name("type") else {
            return Located::Mismatch(format!("`{name}` has no type"));
        };
        if ty.kind() != "struct_type" {
            return Located::Mismatch(format!("`{name}` is a {}, not a struct", ty.kind()));
        }
        match named_children(ty)
            .into_iter()
            .find(|c| c.kind() == "field_declaration_list")
        {
            Some(list) => Located::Found(StructAnchor {
                fields: self.entry_list(list, |node| self.field_entry(node)),
            }),
            None => Located::Mismatch(format!("`{name}` has no field list")),
        }
    }

    /// Locate the keyed literal returned by function `name`
    ///
    /// The function must contain exactly one `return`, returning `&T{...}` or
    /// `T{...}` whose elements are all keyed.
    #[must_use]
    pub fn constructor_literal(&self, name: &str) -> Located<LiteralAnchor> {
        let func = top_level(self.doc)
            .into_iter()
            .filter(|n| n.kind() == "function_declaration")
            .find(|n| self.field_text(*n, "name") == Some(name));

        let Some(func) = func else {
            return Located::Absent;
        };
        let Some(body) = func.child_by_field_name("body") else {
            return Located::Mismatch(format!("`{name}` has no body"));
        };

        let mut returns = Vec::new();
        collect_returns(body, &mut returns);
        let ret = match returns.as_slice() {
            [ret] => *ret,
            [] => return Located::Mismatch(format!("`{name}` has no return statement")),
            _ => {
                return Located::Mismatch(format!(
                    "`{name}` has {} return statements",
                    returns.len()
                ))
            }
        };

        let value = named_children(ret)
            .into_iter()
            .find(|c| c.kind() == "expression_list")
            .and_then(|list| named_children(list).into_iter().find(|c| c.kind() != "comment"));
        let Some(value) = value else {
            return Located::Mismatch(format!("`{name}` returns no value"));
        };

        let literal = match value.kind() {
            "composite_literal" => Some(value),
            "unary_expression" => value
                .child_by_field_name("operand")
                .filter(|operand| operand.kind() == "composite_literal"),
            _ => None,
        };
        let Some(body) = literal.and_then(|lit| lit.child_by_field_name("body")) else {
            return Located::Mismatch(format!("`{name}` does not return a composite literal"));
        };

        let elements = self.entry_list(body, |node| self.literal_entry(node));
        if elements
            .entries
            .iter()
            .any(|e| e.kind == EntryKind::Positional)
        {
            return Located::Mismatch(format!("`{name}` returns a literal with unkeyed elements"));
        }
        Located::Found(LiteralAnchor { elements })
    }

    /// Locate the statement list of method `name` declared on `receiver_type`
    ///
    /// Value and pointer receivers both match; type arguments are ignored.
    #[must_use]
    pub fn method_body(&self, receiver_type: &str, name: &str) -> Located<MethodAnchor> {
        let method = top_level(self.doc)
            .into_iter()
            .filter(|n| n.kind() == "method_declaration")
            .filter(|n| self.field_text(*n, "name") == Some(name))
            .find_map(|n| {
                let param = self.receiver_param(n)?;
                (self.receiver_base_type(param) == Some(receiver_type)).then_some((n, param))
            });

        let Some((method, param)) = method else {
            return Located::Absent;
        };

        let receiver = param
            .child_by_field_name("name")
            .map(|ident| self.doc.node_text(ident).to_string())
            .filter(|ident| ident != "_");
        let Some(receiver) = receiver else {
            return Located::Mismatch(format!("`{name}` has an unnamed receiver"));
        };

        match method.child_by_field_name("body") {
            Some(body) => Located::Found(MethodAnchor {
                receiver,
                body: self.entry_list(body, |node| self.statement_entry(node)),
            }),
            None => Located::Mismatch(format!("`{name}` has no body")),
        }
    }

    fn receiver_param(&self, method: Node<'a>) -> Option<Node<'a>> {
        method.child_by_field_name("receiver").and_then(|params| {
            named_children(params)
                .into_iter()
                .find(|p| p.kind() == "parameter_declaration")
        })
    }

    /// `T` for a receiver of type `T`, `*T`, `T[K]` or `*T[K]`
    fn receiver_base_type(&self, param: Node<'a>) -> Option<&'a str> {
        let ty = self.field_text(param, "type")?;
        let ty = ty.trim_start_matches(['*', ' ', '\t']);
        Some(ty.split('[').next().unwrap_or(ty).trim())
    }

    /// Build an entry list from a delimited node
    ///
    /// Block bodies may nest their statements in a `statement_list`; it is
    /// flattened so the entries are the statements themselves.
    fn entry_list<F>(&self, node: Node<'a>, classify: F) -> EntryList
    where
        F: Fn(Node<'a>) -> EntryKind,
    {
        let mut cursor = node.walk();
        let children: Vec<Node<'a>> = node.children(&mut cursor).collect();

        let open = children.first().copied().unwrap_or(node);
        let close = children.last().copied().unwrap_or(node);

        let mut entries = Vec::new();
        for child in children.iter().filter(|c| c.is_named()) {
            let members = if child.kind() == "statement_list" {
                named_children(*child)
            } else {
                vec![*child]
            };
            for member in members {
                let kind = match member.kind() {
                    "comment" => EntryKind::Comment {
                        text: self.doc.node_text(member).to_string(),
                    },
                    _ => classify(member),
                };
                entries.push(Entry {
                    kind,
                    span: member.byte_range(),
                    start_row: member.start_position().row,
                    end_row: member.end_position().row,
                });
            }
        }

        EntryList {
            open: open.start_byte(),
            close: close.start_byte(),
            open_row: open.start_position().row,
            close_row: close.start_position().row,
            entries,
        }
    }

    fn import_entry(&self, node: Node<'a>) -> EntryKind {
        let path = node
            .child_by_field_name("path")
            .map(|p| unquote(self.doc.node_text(p)).to_string())
            .unwrap_or_default();
        EntryKind::Import { path }
    }

    fn field_entry(&self, node: Node<'a>) -> EntryKind {
        let mut cursor = node.walk();
        let names: Vec<String> = node
            .children_by_field_name("name", &mut cursor)
            .map(|n| self.doc.node_text(n).to_string())
            .collect();
        // Embedded `*T` keeps its star outside the `type` field
        let ty = match node.child_by_field_name("type") {
            Some(ty) if names.is_empty() => self
                .doc
                .text()
                .get(node.start_byte()..ty.end_byte())
                .unwrap_or_default()
                .to_string(),
            Some(ty) => self.doc.node_text(ty).to_string(),
            None => String::new(),
        };
        let tag = node
            .child_by_field_name("tag")
            .map(|t| self.doc.node_text(t).to_string());
        EntryKind::Field { names, ty, tag }
    }

    fn literal_entry(&self, node: Node<'a>) -> EntryKind {
        if node.kind() != "keyed_element" {
            return EntryKind::Positional;
        }
        let parts: Vec<Node<'a>> = named_children(node)
            .into_iter()
            .filter(|c| c.kind() != "comment")
            .collect();
        match (parts.first(), parts.last()) {
            (Some(key), Some(value)) if parts.len() >= 2 => EntryKind::Keyed {
                key: self.doc.node_text(*key).trim().to_string(),
                value: self.doc.node_text(*value).to_string(),
            },
            _ => EntryKind::Positional,
        }
    }

    fn statement_entry(&self, node: Node<'a>) -> EntryKind {
        EntryKind::Statement {
            selected_field: self.registered_field(node),
        }
    }

    /// `X` for an expression statement shaped `recv.X.method(...)`
    fn registered_field(&self, node: Node<'a>) -> Option<String> {
        if node.kind() != "expression_statement" {
            return None;
        }
        let call = named_children(node)
            .into_iter()
            .find(|c| c.kind() == "call_expression")?;
        let function = call.child_by_field_name("function")?;
        if function.kind() != "selector_expression" {
            return None;
        }
        let operand = function.child_by_field_name("operand")?;
        if operand.kind() != "selector_expression" {
            return None;
        }
        let field = operand.child_by_field_name("field")?;
        Some(self.doc.node_text(field).to_string())
    }

    /// End offset of the package clause (start of file if there is none)
    fn package_end(&self) -> usize {
        top_level(self.doc)
            .into_iter()
            .find(|n| n.kind() == "package_clause")
            .map_or(0, |n| n.end_byte())
    }

    fn field_text(&self, node: Node<'a>, field: &str) -> Option<&'a str> {
        node.child_by_field_name(field)
            .map(|n| self.doc.node_text(n))
    }
}

fn top_level(doc: &GoSource) -> Vec<Node<'_>> {
    named_children(doc.root())
}

fn named_children(node: Node<'_>) -> Vec<Node<'_>> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor).collect()
}

fn descendants_of_kind<'t>(node: Node<'t>, kind: &str) -> Vec<Node<'t>> {
    let mut found = Vec::new();
    let mut stack = vec![node];
    while let Some(current) = stack.pop() {
        if current.kind() == kind {
            found.push(current);
            continue;
        }
        let mut children = named_children(current);
        children.reverse();
        stack.extend(children);
    }
    found
}

/// Collect `return` statements, not descending into function literals
fn collect_returns<'t>(node: Node<'t>, out: &mut Vec<Node<'t>>) {
    for child in named_children(node) {
        match child.kind() {
            "return_statement" => out.push(child),
            "func_literal" => {}
            _ => collect_returns(child, out),
        }
    }
}

/// Strip the quotes of an interpreted or raw string literal
fn unquote(literal: &str) -> &str {
    let literal = literal.trim();
    literal
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .or_else(|| literal.strip_prefix('`').and_then(|s| s.strip_suffix('`')))
        .unwrap_or(literal)
}
