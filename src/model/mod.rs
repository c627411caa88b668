use indexmap::IndexMap;

pub mod listener;
pub mod node;
pub mod tree;
pub mod value;

pub use listener::Listener;
pub use node::{Child, Node};
pub use tree::Tree;
pub use value::Value;

/// Attribute name to value, in insertion order.
pub type Attributes = IndexMap<String, Value>;

/// CSS property name to value, in insertion order.
pub type Style = IndexMap<String, String>;

/// Event name (without the `on` prefix) to the listeners registered for it.
pub type Listeners = IndexMap<String, Vec<Listener>>;
