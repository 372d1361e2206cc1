//! ast-jsdoc-rs: JSDoc comment resolution over ESTree syntax trees
//!
//! This library answers two read-only questions about a syntax tree an
//! external parser has already built and annotated with comments: which
//! comments are attached to a node, and which block comment is the JSDoc
//! documentation of a function node.

pub mod ast;
pub mod cli;
pub mod config;
pub mod error;

pub use config::JsDocOptions;
pub use error::{Error as JsDocError, Result as JsDocResult};

// Re-export commonly used types
pub use ast::{
    collect_jsdoc, get_comments, get_jsdoc_comment, AstArena, Comment, CommentKind, Comments,
    JsDocMatch, JsDocResolver, Node, NodeId, NodeKind, SourceLocation,
};
