//! Depth-first traversal over document trees.

use super::node::{Node, NodeKind};

/// Calls `visitor` on every node of `kind`, depth-first in document order.
pub fn visit<'a, F>(node: &'a Node, kind: &NodeKind, visitor: &mut F)
where
    F: FnMut(&'a Node),
{
    if node.kind() == kind {
        visitor(node);
    }
    if let Some(children) = node.children() {
        for child in children {
            visit(child, kind, visitor);
        }
    }
}

/// Collects mutable references to every node of `kind`, in document order.
///
/// A matched node is not descended into, so the returned references never
/// overlap and can be handed to independent tasks.
pub fn select_mut<'a>(node: &'a mut Node, kind: &NodeKind) -> Vec<&'a mut Node> {
    let mut selected = Vec::new();
    collect_mut(node, kind, &mut selected);
    selected
}

fn collect_mut<'a>(node: &'a mut Node, kind: &NodeKind, out: &mut Vec<&'a mut Node>) {
    if node.kind == *kind {
        out.push(node);
        return;
    }
    if let Some(children) = node.children_mut() {
        for child in children.iter_mut() {
            collect_mut(child, kind, out);
        }
    }
}

/// Counts the nodes of `kind` in a tree.
#[must_use]
pub fn count(node: &Node, kind: &NodeKind) -> usize {
    let mut total = 0;
    visit(node, kind, &mut |_| total += 1);
    total
}
