//! Go source documents
//!
//! A [`GoSource`] owns the text of one Go file together with its tree-sitter
//! syntax tree. The text itself is the formatting metadata: every later edit
//! is a byte splice, so comments and layout outside the edited entries are
//! re-emitted verbatim.

use crate::hash::ContentHash;
use tree_sitter::{Node, Parser, Tree};

/// Parsed Go source text
#[derive(Debug, Clone)]
pub struct GoSource {
    /// Source text
    text: String,

    /// Syntax tree over `text`
    tree: Tree,

    /// Hash of `text` at load time
    hash: ContentHash,
}

impl GoSource {
    /// Parse Go source text
    ///
    /// # Errors
    /// - `ParseError::ParserInit` if the Go grammar cannot be loaded
    /// - `ParseError::ParseFailed` if tree-sitter produced no tree
    /// - `ParseError::SyntaxError` if the text is not valid Go
    pub fn parse(text: impl Into<String>) -> Result<Self, ParseError> {
        let text = text.into();
        let hash = ContentHash::compute(text.as_bytes());

        let language: tree_sitter::Language = tree_sitter_go::LANGUAGE.into();
        let mut parser = Parser::new();
        parser
            .set_language(&language)
            .map_err(|e| ParseError::ParserInit(e.to_string()))?;

        let tree = parser.parse(&text, None).ok_or(ParseError::ParseFailed)?;

        if let Some(bad) = first_error(tree.root_node()) {
            let position = bad.start_position();
            let message = if bad.is_missing() {
                format!("missing {}", bad.kind())
            } else {
                let snippet: String = text
                    .get(bad.byte_range())
                    .unwrap_or_default()
                    .chars()
                    .take(32)
                    .collect();
                format!("unexpected `{}`", snippet.trim())
            };
            return Err(ParseError::SyntaxError {
                line: position.row + 1,
                column: position.column + 1,
                message,
            });
        }

        Ok(Self { text, tree, hash })
    }

    /// Get source text
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Consume the document, returning its text
    #[inline]
    #[must_use]
    pub fn into_text(self) -> String {
        self.text
    }

    /// Hash of the text this document was parsed from
    #[inline]
    #[must_use]
    pub fn hash(&self) -> ContentHash {
        self.hash
    }

    /// Root `source_file` node
    #[inline]
    #[must_use]
    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }

    /// Text covered by `node`
    #[inline]
    #[must_use]
    pub fn node_text(&self, node: Node<'_>) -> &str {
        self.text.get(node.byte_range()).unwrap_or_default()
    }

    /// Byte offset of the start of the line containing `offset`
    #[must_use]
    pub fn line_start(&self, offset: usize) -> usize {
        self.text[..offset.min(self.text.len())]
            .rfind('\n')
            .map_or(0, |i| i + 1)
    }

    /// Byte offset of the terminator (`\n` or `\r\n`) ending the line
    /// containing `offset` (text length for the last line)
    #[must_use]
    pub fn line_end(&self, offset: usize) -> usize {
        let offset = offset.min(self.text.len());
        match self.text[offset..].find('\n') {
            Some(i) if self.text[..offset + i].ends_with('\r') => offset + i - 1,
            Some(i) => offset + i,
            None => self.text.len(),
        }
    }

    /// Line terminator of the file, taken from its first line
    #[must_use]
    pub fn line_ending(&self) -> &'static str {
        match self.text.find('\n') {
            Some(i) if self.text[..i].ends_with('\r') => "\r\n",
            _ => "\n",
        }
    }

    /// Leading whitespace of the line containing `offset`
    #[must_use]
    pub fn indent_at(&self, offset: usize) -> &str {
        let start = self.line_start(offset);
        let line = &self.text[start..self.line_end(offset)];
        let width = line.len() - line.trim_start_matches([' ', '\t']).len();
        &line[..width]
    }
}

/// Depth-first search for the first error or missing node
fn first_error(node: Node<'_>) -> Option<Node<'_>> {
    if !node.has_error() {
        return None;
    }
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    let mut cursor = node.walk();
    let children: Vec<Node<'_>> = node.children(&mut cursor).collect();
    children
        .into_iter()
        .find_map(first_error)
        .or(Some(node))
}

/// Parse error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("parser initialization failed: {0}")]
    ParserInit(String),

    #[error("parse failed")]
    ParseFailed,

    #[error("syntax error at {line}:{column}: {message}")]
    SyntaxError {
        line: usize,
        column: usize,
        message: String,
    },
}
