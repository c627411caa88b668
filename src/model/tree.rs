use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};

/// Nested ordered structure produced by flattening a node tree.
///
/// A `Branch` holds the mapped value of one element followed by one entry per
/// child, in order. Literal text children are kept as `Text` leaves.
#[derive(Clone, PartialEq, Debug)]
pub enum Tree<T> {
  Branch(T, Vec<Tree<T>>),
  Text(String),
}

impl<T> Tree<T> {
  pub fn head(&self) -> Option<&T> {
    match self {
      Tree::Branch(head, _) => Some(head),
      Tree::Text(_) => None,
    }
  }

  pub fn tail(&self) -> &[Tree<T>] {
    match self {
      Tree::Branch(_, tail) => tail,
      Tree::Text(_) => &[],
    }
  }

  /// Number of mapped values in the structure.
  pub fn len(&self) -> usize {
    match self {
      Tree::Branch(_, tail) => 1 + tail.iter().map(Tree::len).sum::<usize>(),
      Tree::Text(_) => 0,
    }
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }
}

// Encodes as `[head, ...tail]` so the JSON form matches a nested list.
impl<T: Serialize> Serialize for Tree<T> {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: Serializer,
  {
    match self {
      Tree::Branch(head, tail) => {
        let mut seq = serializer.serialize_seq(Some(tail.len() + 1))?;
        seq.serialize_element(head)?;
        for item in tail {
          seq.serialize_element(item)?;
        }
        seq.end()
      }
      Tree::Text(text) => serializer.serialize_str(text),
    }
  }
}
