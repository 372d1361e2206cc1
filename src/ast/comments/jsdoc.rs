//! JSDoc comment resolution
//!
//! Only function declarations and function expressions are documentable.
//! A declaration owns its JSDoc directly. An anonymous function expression
//! is documented by whatever construct the parser attached the comment to,
//! usually the enclosing variable declaration or assignment, so the
//! resolver walks up to the nearest ancestor carrying leading comments.

use rayon::prelude::*;
use serde::Serialize;

use crate::ast::{AstArena, Comment, Node, NodeId, NodeKind};
use crate::config::JsDocOptions;
use crate::error::{Error, Result};

/// A documentable node together with its resolved JSDoc comment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct JsDocMatch<'a> {
    pub node: NodeId,
    pub comment: &'a Comment,
}

/// Resolves JSDoc comments over one arena
#[derive(Debug, Clone, Copy)]
pub struct JsDocResolver<'a> {
    arena: &'a AstArena,
    options: JsDocOptions,
}

impl<'a> JsDocResolver<'a> {
    pub fn new(arena: &'a AstArena, options: JsDocOptions) -> Self {
        Self { arena, options }
    }

    pub fn with_defaults(arena: &'a AstArena) -> Self {
        Self::new(arena, JsDocOptions::default())
    }

    /// Retrieve the JSDoc comment for the given node
    ///
    /// Returns `Ok(None)` for every kind other than function declarations
    /// and function expressions. Fails when `id` is not a node of this
    /// arena, or when the function node being documented has no location.
    pub fn resolve(&self, id: NodeId) -> Result<Option<&'a Comment>> {
        let node = self.arena.get(id).ok_or(Error::invalid_node(id, "id"))?;

        match node.kind {
            NodeKind::FunctionDeclaration => {
                let line = start_line(node, id)?;
                Ok(self.find_jsdoc_comment(node.leading_comments(), line))
            }
            NodeKind::FunctionExpression => self.resolve_expression(id, node),
            _ => Ok(None),
        }
    }

    fn resolve_expression(&self, id: NodeId, node: &'a Node) -> Result<Option<&'a Comment>> {
        let Some(parent_id) = node.parent else {
            log::debug!("function expression {} has no parent", id);
            return Ok(None);
        };

        let parent = self.arena.node(parent_id);
        if parent.kind == NodeKind::CallExpression && parent.callee == Some(id) {
            log::debug!("function expression {} is an immediately invoked callee", id);
            return Ok(None);
        }

        // Adjacency is always measured from the function itself, so a
        // function nested deep inside a commented statement does not
        // inherit the statement's doc.
        let line = start_line(node, id)?;

        // An explicitly empty comment list still ends the walk
        let owner = self.arena.ancestors(id).find(|(_, ancestor)| {
            ancestor.leading_comments.is_some() || ancestor.kind.is_function()
        });
        let Some((owner_id, owner)) = owner else {
            log::debug!("no commented ancestor above function expression {}", id);
            return Ok(None);
        };

        if owner.kind == NodeKind::FunctionDeclaration {
            log::debug!(
                "function expression {} is nested in declaration {}",
                id,
                owner_id
            );
            return Ok(None);
        }

        Ok(self.find_jsdoc_comment(owner.leading_comments(), line))
    }

    /// Nearest marked block comment, if it ends close enough to `line`
    ///
    /// Only the last marked block is a candidate. When it is too far away
    /// the search stops, even if an earlier comment would qualify.
    fn find_jsdoc_comment(&self, comments: &'a [Comment], line: u32) -> Option<&'a Comment> {
        for comment in comments.iter().rev() {
            if !comment.is_marked_block(self.options.marker) {
                continue;
            }

            // Signed: a comment ending below `line` still counts as adjacent
            let gap = i64::from(line) - i64::from(comment.loc.end.line);
            if gap <= i64::from(self.options.max_line_gap) {
                log::trace!(
                    "JSDoc candidate at line {} accepted (gap {})",
                    comment.loc.end.line,
                    gap
                );
                return Some(comment);
            }

            log::trace!(
                "JSDoc candidate at line {} too far (gap {})",
                comment.loc.end.line,
                gap
            );
            return None;
        }

        None
    }

    /// Resolve every documentable node in the arena
    ///
    /// Matches come back in node-id order. Nodes are resolved in parallel,
    /// but errors are reported in node-id order too: the error returned is
    /// the one of the lowest failing node.
    pub fn collect(&self) -> Result<Vec<JsDocMatch<'a>>> {
        let resolved: Vec<Result<Option<JsDocMatch<'a>>>> = self
            .arena
            .nodes()
            .par_iter()
            .enumerate()
            .filter(|(_, node)| node.kind.is_function())
            .map(|(index, _)| -> Result<Option<JsDocMatch<'a>>> {
                let id = NodeId::new(index as u32);
                Ok(self
                    .resolve(id)?
                    .map(|comment| JsDocMatch { node: id, comment }))
            })
            .collect();

        resolved.into_iter().filter_map(Result::transpose).collect()
    }
}

fn start_line(node: &Node, id: NodeId) -> Result<u32> {
    node.start_line().ok_or(Error::invalid_node(id, "loc"))
}

/// Retrieve the JSDoc comment for the given node with default options
pub fn get_jsdoc_comment(arena: &AstArena, id: NodeId) -> Result<Option<&Comment>> {
    JsDocResolver::with_defaults(arena).resolve(id)
}

/// Resolve the JSDoc comment of every function node with default options
pub fn collect_jsdoc(arena: &AstArena) -> Result<Vec<JsDocMatch<'_>>> {
    JsDocResolver::with_defaults(arena).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::SourceLocation;

    fn block(text: &str, start: u32, end: u32) -> Comment {
        Comment::block(text, SourceLocation::lines(start, end))
    }

    fn declaration(comments: Vec<Comment>, line: u32) -> (AstArena, NodeId) {
        let mut arena = AstArena::new();
        let program = arena.alloc(Node::new(NodeKind::Program)).unwrap();
        let decl = arena
            .alloc(
                Node::new(NodeKind::FunctionDeclaration)
                    .with_lines(line, line + 2)
                    .with_parent(program)
                    .with_leading_comments(comments),
            )
            .unwrap();
        (arena, decl)
    }

    #[test]
    fn test_line_comments_are_skipped_for_earlier_block() {
        let comments = vec![
            block("* doc", 2, 4),
            Comment::line(" not a doc", SourceLocation::lines(4, 4)),
        ];
        let (arena, decl) = declaration(comments, 5);
        let found = get_jsdoc_comment(&arena, decl).unwrap().unwrap();
        assert_eq!(found.value, "* doc");
        assert_eq!(found.loc.end.line, 4);
    }

    #[test]
    fn test_unmarked_block_is_skipped() {
        let comments = vec![block("* doc", 2, 4), block(" plain", 4, 4)];
        let (arena, decl) = declaration(comments, 5);
        let found = get_jsdoc_comment(&arena, decl).unwrap().unwrap();
        assert_eq!(found.value, "* doc");
    }

    #[test]
    fn test_comment_on_same_line_is_adjacent() {
        let (arena, decl) = declaration(vec![block("* inline", 5, 5)], 5);
        assert!(get_jsdoc_comment(&arena, decl).unwrap().is_some());
    }

    #[test]
    fn test_wider_gap_option() {
        let (arena, decl) = declaration(vec![block("* doc", 1, 2)], 5);
        assert_eq!(get_jsdoc_comment(&arena, decl).unwrap(), None);

        let resolver = JsDocResolver::new(&arena, JsDocOptions::default().with_max_line_gap(3));
        assert!(resolver.resolve(decl).unwrap().is_some());
    }

    #[test]
    fn test_custom_marker() {
        let (arena, decl) = declaration(vec![block("! license", 3, 4)], 5);
        assert_eq!(get_jsdoc_comment(&arena, decl).unwrap(), None);

        let options = JsDocOptions {
            marker: '!',
            ..JsDocOptions::default()
        };
        let resolver = JsDocResolver::new(&arena, options);
        assert_eq!(resolver.resolve(decl).unwrap().unwrap().value, "! license");
    }

    #[test]
    fn test_declaration_without_loc_is_invalid() {
        let mut arena = AstArena::new();
        let decl = arena
            .alloc(Node::new(NodeKind::FunctionDeclaration))
            .unwrap();
        let err = get_jsdoc_comment(&arena, decl).unwrap_err();
        assert_eq!(err, Error::invalid_node(decl, "loc"));
    }

    #[test]
    fn test_unknown_id_is_invalid() {
        let (arena, _) = declaration(Vec::new(), 5);
        let stray = NodeId::new(42);
        let err = get_jsdoc_comment(&arena, stray).unwrap_err();
        assert_eq!(err, Error::invalid_node(stray, "id"));
    }

    #[test]
    fn test_collect_reports_lowest_failing_node() {
        let mut arena = AstArena::new();
        let program = arena.alloc(Node::new(NodeKind::Program)).unwrap();
        let mut broken = Vec::new();
        for _ in 0..64 {
            broken.push(
                arena
                    .alloc(Node::new(NodeKind::FunctionDeclaration).with_parent(program))
                    .unwrap(),
            );
        }

        for _ in 0..8 {
            let err = collect_jsdoc(&arena).unwrap_err();
            assert_eq!(err, Error::invalid_node(broken[0], "loc"));
        }
    }

    #[test]
    fn test_expression_without_parent_resolves_to_none() {
        let mut arena = AstArena::new();
        let expr = arena
            .alloc(Node::new(NodeKind::FunctionExpression).with_lines(1, 1))
            .unwrap();
        assert_eq!(get_jsdoc_comment(&arena, expr).unwrap(), None);
    }

    #[test]
    fn test_collect_reports_matches_in_node_order() {
        let mut arena = AstArena::new();
        let program = arena.alloc(Node::new(NodeKind::Program).with_lines(1, 20)).unwrap();
        let first = arena
            .alloc(
                Node::new(NodeKind::FunctionDeclaration)
                    .with_lines(2, 4)
                    .with_parent(program)
                    .with_leading_comments(vec![block("* first", 1, 1)]),
            )
            .unwrap();
        arena
            .alloc(
                Node::new(NodeKind::FunctionDeclaration)
                    .with_lines(6, 8)
                    .with_parent(program),
            )
            .unwrap();
        let third = arena
            .alloc(
                Node::new(NodeKind::FunctionDeclaration)
                    .with_lines(12, 14)
                    .with_parent(program)
                    .with_leading_comments(vec![block("* third", 10, 11)]),
            )
            .unwrap();

        let matches = collect_jsdoc(&arena).unwrap();
        let found: Vec<(NodeId, &str)> = matches
            .iter()
            .map(|m| (m.node, m.comment.value.as_str()))
            .collect();
        assert_eq!(found, vec![(first, "* first"), (third, "* third")]);
    }
}
