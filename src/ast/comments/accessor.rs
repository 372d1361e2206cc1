//! Leading/trailing comment access
//!
//! Some parsers attach nothing to an empty program and only fill the
//! whole-file `comments` list, so an empty root reports that list as its
//! leading comments.

use serde::Serialize;

use crate::ast::{AstArena, Comment, NodeId, NodeKind};

/// Comments physically adjacent to a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Comments<'a> {
    pub leading: &'a [Comment],
    pub trailing: &'a [Comment],
}

impl<'a> Comments<'a> {
    pub fn is_empty(&self) -> bool {
        self.leading.is_empty() && self.trailing.is_empty()
    }
}

/// Get all comments for the given node, indexed by position
///
/// Never fails for a node of `arena`.
///
/// # Panics
///
/// If `id` was not handed out by `arena`, like indexing the arena does.
pub fn get_comments(arena: &AstArena, id: NodeId) -> Comments<'_> {
    let node = arena.node(id);

    if node.kind == NodeKind::Program && node.body.is_empty() {
        return Comments {
            leading: node.file_comments(),
            trailing: &[],
        };
    }

    Comments {
        leading: node.leading_comments(),
        trailing: node.trailing_comments(),
    }
}
