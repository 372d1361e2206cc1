//! Comment queries
//!
//! This module provides the two read-only queries run over an attached
//! syntax tree: raw leading/trailing comment access and JSDoc resolution.

pub mod accessor;
pub mod jsdoc;

pub use accessor::{get_comments, Comments};
pub use jsdoc::{collect_jsdoc, get_jsdoc_comment, JsDocMatch, JsDocResolver};
