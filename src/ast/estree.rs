//! ESTree JSON ingestion
//!
//! Loads the JSON an ESTree parser emits with comment attachment turned on
//! (espree/esprima `attachComment`, acorn + a comment-attach pass) into an
//! [`AstArena`]. Any object with a string `type` field is a node. Comment
//! fields are read as comment lists and never walked as children.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::ast::arena::AstArena;
use crate::ast::node::{Comment, Node, NodeId, NodeKind, SourceLocation};
use crate::error::{Error, Result};

/// Keys that hold positional data or comments rather than child nodes
const NON_CHILD_KEYS: &[&str] = &[
    "type",
    "loc",
    "range",
    "start",
    "end",
    "leadingComments",
    "trailingComments",
    "innerComments",
    "comments",
    "tokens",
];

/// How a freshly allocated node hangs off its parent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Link {
    Child,
    Body,
    Callee,
}

struct Pending<'v> {
    object: &'v Map<String, Value>,
    parent: Option<NodeId>,
    link: Link,
}

impl AstArena {
    /// Parse an ESTree JSON document into a new arena
    pub fn from_estree_str(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_estree_value(&value)
    }

    /// Build an arena from an already-parsed ESTree document
    ///
    /// Nodes are allocated in document order, so the root is always the
    /// first node.
    pub fn from_estree_value(root: &Value) -> Result<Self> {
        let root = as_node_object(root).ok_or(Error::InvalidNode {
            node: None,
            field: "type",
        })?;

        let mut arena = AstArena::new();
        let mut stack = vec![Pending {
            object: root,
            parent: None,
            link: Link::Child,
        }];

        while let Some(pending) = stack.pop() {
            let node = build_node(pending.object, pending.parent)?;
            let is_call = node.kind == NodeKind::CallExpression;
            log::trace!("estree: {} under {:?}", node.kind, pending.parent);
            let id = arena.alloc(node)?;

            if let Some(parent) = pending.parent {
                match pending.link {
                    Link::Body => arena.push_body(parent, id)?,
                    Link::Callee => arena.set_callee(parent, id)?,
                    Link::Child => {}
                }
            }

            let children = collect_children(pending.object, id, is_call);
            stack.extend(children.into_iter().rev());
        }

        Ok(arena)
    }
}

fn as_node_object(value: &Value) -> Option<&Map<String, Value>> {
    let object = value.as_object()?;
    object.get("type")?.as_str()?;
    Some(object)
}

fn build_node(object: &Map<String, Value>, parent: Option<NodeId>) -> Result<Node> {
    let tag = object
        .get("type")
        .and_then(Value::as_str)
        .ok_or(Error::InvalidNode { node: None, field: "type" })?;
    let kind = NodeKind::from_estree(tag);

    let loc = match object.get("loc") {
        None | Some(Value::Null) => None,
        Some(value) => Some(
            SourceLocation::deserialize(value)
                .map_err(|e| Error::json(format!("loc of {}: {}", tag, e)))?,
        ),
    };

    let mut node = Node::new(kind);
    node.loc = loc;
    node.parent = parent;
    node.leading_comments = read_comments(object, "leadingComments", tag)?;
    node.trailing_comments = read_comments(object, "trailingComments", tag)?;
    node.comments = read_comments(object, "comments", tag)?;
    Ok(node)
}

fn read_comments(
    object: &Map<String, Value>,
    key: &str,
    tag: &str,
) -> Result<Option<Vec<Comment>>> {
    match object.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => Vec::<Comment>::deserialize(value)
            .map(Some)
            .map_err(|e| Error::json(format!("{} of {}: {}", key, tag, e))),
    }
}

fn collect_children<'v>(
    object: &'v Map<String, Value>,
    parent: NodeId,
    is_call: bool,
) -> Vec<Pending<'v>> {
    let mut children = Vec::new();

    for (key, value) in object {
        if NON_CHILD_KEYS.contains(&key.as_str()) {
            continue;
        }
        match value {
            Value::Object(_) => {
                if let Some(child) = as_node_object(value) {
                    let link = if is_call && key == "callee" {
                        Link::Callee
                    } else {
                        Link::Child
                    };
                    children.push(Pending {
                        object: child,
                        parent: Some(parent),
                        link,
                    });
                }
            }
            Value::Array(items) => {
                let link = if key == "body" { Link::Body } else { Link::Child };
                // Sparse array patterns carry `null` holes
                for child in items.iter().filter_map(as_node_object) {
                    children.push(Pending {
                        object: child,
                        parent: Some(parent),
                        link,
                    });
                }
            }
            _ => {}
        }
    }

    children
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::CommentKind;
    use serde_json::json;

    fn loc(start: u32, end: u32) -> Value {
        json!({"start": {"line": start, "column": 0}, "end": {"line": end, "column": 1}})
    }

    #[test]
    fn test_root_without_type_is_invalid() {
        let err = AstArena::from_estree_value(&json!({"body": []})).unwrap_err();
        assert_eq!(err, Error::InvalidNode { node: None, field: "type" });

        let err = AstArena::from_estree_value(&json!([1, 2])).unwrap_err();
        assert!(matches!(err, Error::InvalidNode { field: "type", .. }));
    }

    #[test]
    fn test_iife_callee_and_body_are_linked() {
        let doc = json!({
            "type": "Program",
            "loc": loc(1, 1),
            "body": [{
                "type": "ExpressionStatement",
                "loc": loc(1, 1),
                "expression": {
                    "type": "CallExpression",
                    "loc": loc(1, 1),
                    "callee": {
                        "type": "FunctionExpression",
                        "loc": loc(1, 1),
                        "params": [],
                        "body": {"type": "BlockStatement", "loc": loc(1, 1), "body": []}
                    },
                    "arguments": []
                }
            }]
        });

        let arena = AstArena::from_estree_value(&doc).unwrap();
        let program = arena.root().unwrap();
        assert_eq!(program, NodeId::new(0));
        assert_eq!(arena[program].body.len(), 1);

        let (call, call_node) = arena
            .iter()
            .find(|(_, n)| n.kind == NodeKind::CallExpression)
            .unwrap();
        let callee = call_node.callee.unwrap();
        assert_eq!(arena[callee].kind, NodeKind::FunctionExpression);
        assert_eq!(arena[callee].parent, Some(call));
    }

    #[test]
    fn test_comment_fields_are_not_walked_as_children() {
        let doc = json!({
            "type": "Program",
            "body": [],
            "comments": [
                {"type": "Line", "value": " a", "loc": loc(1, 1)},
                {"type": "Block", "value": "* b", "loc": loc(2, 2)}
            ]
        });

        let arena = AstArena::from_estree_value(&doc).unwrap();
        assert_eq!(arena.len(), 1);
        let comments = arena[NodeId::new(0)].file_comments();
        assert_eq!(comments.len(), 2);
        assert_eq!(comments[0].kind, CommentKind::Line);
        assert_eq!(comments[1].value, "* b");
        assert_eq!(arena[NodeId::new(0)].loc, None);
    }

    #[test]
    fn test_malformed_comment_is_a_json_error() {
        let doc = json!({
            "type": "Program",
            "body": [],
            "comments": [{"type": "Block", "value": "* b"}]
        });
        let err = AstArena::from_estree_value(&doc).unwrap_err();
        assert!(matches!(err, Error::Json { .. }));
    }

    #[test]
    fn test_sparse_array_holes_are_skipped() {
        let doc = json!({
            "type": "ArrayPattern",
            "elements": [null, {"type": "Identifier", "name": "a"}]
        });
        let arena = AstArena::from_estree_value(&doc).unwrap();
        assert_eq!(arena.len(), 2);
        assert_eq!(arena[NodeId::new(1)].parent, Some(NodeId::new(0)));
    }
}
