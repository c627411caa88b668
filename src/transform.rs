//! Whole-tree walks. Callbacks always receive a frozen node (no children), so
//! they cannot reach into descendants; the walk itself visits every child.

use crate::model::{Child, Node, Tree};

/// Flattens `node` into a nested list: the mapped node first, then one entry
/// per child in order. The source tree is left untouched.
pub fn transform<T, F>(node: &Node, mut f: F) -> Tree<T>
where
  F: FnMut(Node) -> T,
{
  transform_with(node, &mut f)
}

fn transform_with<T, F>(node: &Node, f: &mut F) -> Tree<T>
where
  F: FnMut(Node) -> T,
{
  let head = f(node.freeze());
  let tail = node
    .children()
    .iter()
    .map(|child| match child {
      Child::Node(child) => transform_with(child, f),
      Child::Text(text) => Tree::Text(text.clone()),
    })
    .collect();

  Tree::Branch(head, tail)
}

/// `transform` with the identity mapping.
pub fn to_list(node: &Node) -> Tree<Node> {
  transform(node, |node| node)
}

/// Rebuilds the tree, replacing every node with the result of `f`.
///
/// `f` sees the frozen node. Whatever children it returns are discarded and
/// replaced by the traversed children of the original node.
pub fn traverse<F>(node: &Node, mut f: F) -> Node
where
  F: FnMut(Node) -> Node,
{
  traverse_with(node, &mut f)
}

fn traverse_with<F>(node: &Node, f: &mut F) -> Node
where
  F: FnMut(Node) -> Node,
{
  let root = f(node.freeze());
  let leaves = node
    .children()
    .iter()
    .map(|child| match child {
      Child::Node(child) => Child::Node(traverse_with(child, f)),
      Child::Text(text) => Child::Text(text.clone()),
    })
    .collect();

  root.with_children(leaves)
}

impl Node {
  pub fn transform<T, F>(&self, f: F) -> Tree<T>
  where
    F: FnMut(Node) -> T,
  {
    transform(self, f)
  }

  pub fn to_list(&self) -> Tree<Node> {
    to_list(self)
  }

  pub fn traverse<F>(&self, f: F) -> Node
  where
    F: FnMut(Node) -> Node,
  {
    traverse(self, f)
  }
}
