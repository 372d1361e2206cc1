//! Node and comment types
//!
//! These mirror the ESTree shape an external parser produces once comment
//! attachment has run: every node carries its kind, its source location,
//! a parent link and the comments physically adjacent to it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Index of a node inside an [`AstArena`](super::AstArena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(u32);

impl NodeId {
    pub fn new(index: u32) -> Self {
        NodeId(index)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Syntactic kind of a node
///
/// Only the kinds the resolver dispatches on get their own variant; every
/// other ESTree tag is kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Program,
    FunctionDeclaration,
    FunctionExpression,
    CallExpression,
    VariableDeclaration,
    VariableDeclarator,
    Other(String),
}

impl NodeKind {
    /// Map an ESTree `type` tag to a kind
    pub fn from_estree(tag: &str) -> Self {
        match tag {
            "Program" => NodeKind::Program,
            "FunctionDeclaration" => NodeKind::FunctionDeclaration,
            "FunctionExpression" => NodeKind::FunctionExpression,
            "CallExpression" => NodeKind::CallExpression,
            "VariableDeclaration" => NodeKind::VariableDeclaration,
            "VariableDeclarator" => NodeKind::VariableDeclarator,
            other => NodeKind::Other(other.to_string()),
        }
    }

    /// The ESTree `type` tag for this kind
    pub fn as_str(&self) -> &str {
        match self {
            NodeKind::Program => "Program",
            NodeKind::FunctionDeclaration => "FunctionDeclaration",
            NodeKind::FunctionExpression => "FunctionExpression",
            NodeKind::CallExpression => "CallExpression",
            NodeKind::VariableDeclaration => "VariableDeclaration",
            NodeKind::VariableDeclarator => "VariableDeclarator",
            NodeKind::Other(tag) => tag,
        }
    }

    /// True for function declarations and function expressions
    pub fn is_function(&self) -> bool {
        matches!(
            self,
            NodeKind::FunctionDeclaration | NodeKind::FunctionExpression
        )
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for NodeKind {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for NodeKind {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(NodeKind::from_estree(&tag))
    }
}

/// Line/column position; lines are 1-based, columns 0-based
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Position {
    pub line: u32,
    #[serde(default)]
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

/// Source span of a node or comment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SourceLocation {
    pub start: Position,
    pub end: Position,
}

impl SourceLocation {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Location spanning whole lines, columns left at zero
    pub fn lines(start_line: u32, end_line: u32) -> Self {
        Self {
            start: Position::new(start_line, 0),
            end: Position::new(end_line, 0),
        }
    }
}

/// Comment kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CommentKind {
    /// Single line comment //
    #[serde(alias = "CommentLine", alias = "Hashbang", alias = "Shebang")]
    Line,
    /// Block comment /* */
    #[serde(alias = "CommentBlock")]
    Block,
}

/// A lexical comment as attached by the parser
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    #[serde(rename = "type")]
    pub kind: CommentKind,
    /// Text between the delimiters
    pub value: String,
    pub loc: SourceLocation,
}

impl Comment {
    pub fn new(kind: CommentKind, value: impl Into<String>, loc: SourceLocation) -> Self {
        Self {
            kind,
            value: value.into(),
            loc,
        }
    }

    pub fn block(value: impl Into<String>, loc: SourceLocation) -> Self {
        Self::new(CommentKind::Block, value, loc)
    }

    pub fn line(value: impl Into<String>, loc: SourceLocation) -> Self {
        Self::new(CommentKind::Line, value, loc)
    }

    /// Block comment whose text starts with `marker`
    pub fn is_marked_block(&self, marker: char) -> bool {
        self.kind == CommentKind::Block && self.value.starts_with(marker)
    }
}

/// A syntax-tree element
///
/// Comment sequences are optional because parsers only attach the fields
/// they have something for; readers go through the slice accessors, which
/// treat absence as empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub kind: NodeKind,
    pub loc: Option<SourceLocation>,
    pub parent: Option<NodeId>,
    pub leading_comments: Option<Vec<Comment>>,
    pub trailing_comments: Option<Vec<Comment>>,
    /// Whole-file comment list, only ever set on the root
    pub comments: Option<Vec<Comment>>,
    pub body: Vec<NodeId>,
    /// Callee child of a call expression
    pub callee: Option<NodeId>,
}

impl Node {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            loc: None,
            parent: None,
            leading_comments: None,
            trailing_comments: None,
            comments: None,
            body: Vec::new(),
            callee: None,
        }
    }

    pub fn with_loc(mut self, loc: SourceLocation) -> Self {
        self.loc = Some(loc);
        self
    }

    pub fn with_lines(self, start_line: u32, end_line: u32) -> Self {
        self.with_loc(SourceLocation::lines(start_line, end_line))
    }

    pub fn with_parent(mut self, parent: NodeId) -> Self {
        self.parent = Some(parent);
        self
    }

    pub fn with_leading_comments(mut self, comments: Vec<Comment>) -> Self {
        self.leading_comments = Some(comments);
        self
    }

    pub fn with_trailing_comments(mut self, comments: Vec<Comment>) -> Self {
        self.trailing_comments = Some(comments);
        self
    }

    pub fn with_comments(mut self, comments: Vec<Comment>) -> Self {
        self.comments = Some(comments);
        self
    }

    pub fn leading_comments(&self) -> &[Comment] {
        self.leading_comments.as_deref().unwrap_or(&[])
    }

    pub fn trailing_comments(&self) -> &[Comment] {
        self.trailing_comments.as_deref().unwrap_or(&[])
    }

    pub fn file_comments(&self) -> &[Comment] {
        self.comments.as_deref().unwrap_or(&[])
    }

    /// Start line, if the parser recorded a location
    pub fn start_line(&self) -> Option<u32> {
        self.loc.map(|loc| loc.start.line)
    }
}
