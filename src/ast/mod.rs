//! Abstract Syntax Tree (AST) module
//!
//! This module holds the read-only tree model the comment queries run over.
//! The module is organized into sub-modules by functionality:
//!
//! - `node`: Node, comment and location types
//! - `arena`: Node table with index-based parent links
//! - `estree`: Loading ESTree JSON produced by an external parser
//! - `comments/`: Leading/trailing comment access and JSDoc resolution

pub mod arena;
pub mod comments;
pub mod estree;
pub mod node;

// Re-export the main types for public API
pub use arena::{Ancestors, AstArena};
pub use comments::{
    collect_jsdoc, get_comments, get_jsdoc_comment, Comments, JsDocMatch, JsDocResolver,
};
pub use node::{Comment, CommentKind, Node, NodeId, NodeKind, Position, SourceLocation};
