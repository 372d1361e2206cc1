//! Node table with index-based parent links
//!
//! Nodes are only appended, and a node may only name a parent that is
//! already in the table, so every parent id is smaller than its child's id
//! and the parent chain of any node terminates.

use crate::ast::node::{Node, NodeId};
use crate::error::{Error, Result};

/// Owns every node of one syntax tree
#[derive(Debug, Clone, Default)]
pub struct AstArena {
    nodes: Vec<Node>,
}

impl AstArena {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Append a node, returning its id
    ///
    /// Fails if the node names a parent that has not been allocated yet.
    pub fn alloc(&mut self, node: Node) -> Result<NodeId> {
        if let Some(parent) = node.parent {
            if parent.index() >= self.nodes.len() {
                return Err(Error::InvalidNode {
                    node: Some(parent),
                    field: "parent",
                });
            }
        }
        let id = NodeId::new(self.nodes.len() as u32);
        self.nodes.push(node);
        Ok(id)
    }

    /// Append `child` to `parent`'s statement list
    pub fn push_body(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        self.check_child_of(parent, child)?;
        self.nodes[parent.index()].body.push(child);
        Ok(())
    }

    /// Record `callee` as the callee of the call expression `call`
    pub fn set_callee(&mut self, call: NodeId, callee: NodeId) -> Result<()> {
        self.check_child_of(call, callee)?;
        self.nodes[call.index()].callee = Some(callee);
        Ok(())
    }

    fn check_child_of(&self, parent: NodeId, child: NodeId) -> Result<()> {
        let child_node = self.get(child).ok_or(Error::InvalidNode {
            node: Some(child),
            field: "id",
        })?;
        if child_node.parent != Some(parent) {
            return Err(Error::invalid_node(child, "parent"));
        }
        Ok(())
    }

    /// Node by id
    ///
    /// Ids are only handed out by this arena; passing one from another
    /// arena that is out of range panics like slice indexing.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    /// First node without a parent
    pub fn root(&self) -> Option<NodeId> {
        self.nodes
            .iter()
            .position(|node| node.parent.is_none())
            .map(|index| NodeId::new(index as u32))
    }

    /// Strict ancestors of `id`, nearest first
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors {
            arena: self,
            next: self.parent(id),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .map(|(index, node)| (NodeId::new(index as u32), node))
    }

    pub(crate) fn nodes(&self) -> &[Node] {
        &self.nodes
    }
}

impl std::ops::Index<NodeId> for AstArena {
    type Output = Node;

    fn index(&self, id: NodeId) -> &Node {
        self.node(id)
    }
}

/// Iterator over a node's parent chain
pub struct Ancestors<'a> {
    arena: &'a AstArena,
    next: Option<NodeId>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = (NodeId, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        let node = self.arena.node(id);
        self.next = node.parent;
        Some((id, node))
    }
}
