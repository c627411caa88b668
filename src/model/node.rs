use super::{Attributes, Listener, Listeners, Style, Value};
use crate::attributes::ParsedAttributes;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::fmt;
use std::rc::Rc;

/// One markup element.
///
/// Nodes are only produced by element constructors (see [`crate::registry`]),
/// which run the argument and attribute normalization. Map-like fields are
/// reference counted: [`Node::freeze`] and tree walks share them, and the few
/// mutating methods copy on write.
#[derive(Clone, PartialEq, Debug)]
pub struct Node {
  pub(crate) name: String,
  pub(crate) is_void: bool,
  pub(crate) id: Option<String>,
  pub(crate) class_list: Rc<Vec<String>>,
  pub(crate) style: Option<Rc<Style>>,
  pub(crate) listeners: Rc<Listeners>,
  pub(crate) attributes: Rc<Attributes>,
  pub(crate) content: String,
  pub(crate) children: Vec<Child>,
}

/// A child entry: either a nested element or a literal text segment.
#[derive(Clone, PartialEq, Debug, Serialize)]
#[serde(untagged)]
pub enum Child {
  Node(Node),
  Text(String),
}

impl Node {
  pub(crate) fn new(
    name: &str,
    is_void: bool,
    parsed: ParsedAttributes,
    content: String,
    children: Vec<Child>,
  ) -> Self {
    Node {
      name: name.into(),
      is_void,
      id: parsed.id,
      class_list: Rc::new(parsed.class_list),
      style: parsed.style.map(Rc::new),
      listeners: Rc::new(parsed.listeners),
      attributes: Rc::new(parsed.attributes),
      content,
      children,
    }
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn is_void(&self) -> bool {
    self.is_void
  }

  pub fn id(&self) -> Option<&str> {
    self.id.as_deref()
  }

  pub fn class_list(&self) -> &[String] {
    &self.class_list
  }

  pub fn style(&self) -> Option<&Style> {
    self.style.as_deref()
  }

  pub fn listeners(&self) -> &Listeners {
    &self.listeners
  }

  pub fn attributes(&self) -> &Attributes {
    &self.attributes
  }

  pub fn attribute(&self, key: &str) -> Option<&Value> {
    self.attributes.get(key)
  }

  pub fn content(&self) -> &str {
    &self.content
  }

  pub fn children(&self) -> &[Child] {
    &self.children
  }

  /// A copy of this node without its children. Every other field is shared
  /// with `self`.
  pub fn freeze(&self) -> Node {
    Node {
      name: self.name.clone(),
      is_void: self.is_void,
      id: self.id.clone(),
      class_list: self.class_list.clone(),
      style: self.style.clone(),
      listeners: self.listeners.clone(),
      attributes: self.attributes.clone(),
      content: self.content.clone(),
      children: Vec::new(),
    }
  }

  /// Registers `listener` for `event`, after any listener already registered
  /// for it. This is the only in-place mutation a node supports.
  pub fn on(&mut self, event: &str, listener: Listener) -> &mut Self {
    Rc::make_mut(&mut self.listeners)
      .entry(event.into())
      .or_default()
      .push(listener);
    self
  }

  pub fn with_id(mut self, id: impl Into<String>) -> Node {
    self.id = Some(id.into());
    self
  }

  pub fn with_class(mut self, class: impl Into<String>) -> Node {
    Rc::make_mut(&mut self.class_list).push(class.into());
    self
  }

  pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Node {
    Rc::make_mut(&mut self.attributes).insert(key.into(), value.into());
    self
  }

  pub fn with_content(mut self, content: impl Into<String>) -> Node {
    self.content = content.into();
    self
  }

  pub(crate) fn with_children(mut self, children: Vec<Child>) -> Node {
    self.children = children;
    self
  }
}

impl Child {
  pub fn as_node(&self) -> Option<&Node> {
    match self {
      Child::Node(node) => Some(node),
      Child::Text(_) => None,
    }
  }

  pub fn as_text(&self) -> Option<&str> {
    match self {
      Child::Text(text) => Some(text),
      Child::Node(_) => None,
    }
  }
}

impl From<Node> for Child {
  fn from(value: Node) -> Child {
    Child::Node(value)
  }
}

impl From<&str> for Child {
  fn from(value: &str) -> Child {
    Child::Text(value.into())
  }
}

impl From<String> for Child {
  fn from(value: String) -> Child {
    Child::Text(value)
  }
}

impl Serialize for Node {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: Serializer,
  {
    let mut state = serializer.serialize_struct("Node", 9)?;
    state.serialize_field("name", &self.name)?;
    state.serialize_field("isVoid", &self.is_void)?;
    state.serialize_field("id", &self.id)?;
    state.serialize_field("class", &self.class_list)?;
    state.serialize_field("style", &self.style)?;
    state.serialize_field("listeners", &self.listeners)?;
    state.serialize_field("attributes", &self.attributes)?;
    state.serialize_field("content", &self.content)?;
    state.serialize_field("children", &self.children)?;
    state.end()
  }
}

impl fmt::Display for Node {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
    f.write_str(&json)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  fn sample() -> Node {
    el!(div, attrs!(id = "main", class = "a b", title = "t"), "body", [
      Child::from(el!(span, (), "inner")),
      "tail".into()
    ])
  }

  #[test]
  fn freeze_drops_children_and_shares_fields() {
    let node = sample();
    let frozen = node.freeze();

    assert!(frozen.children().is_empty());
    assert_eq!(node.children().len(), 2);
    assert!(Rc::ptr_eq(&node.attributes, &frozen.attributes));
    assert!(Rc::ptr_eq(&node.class_list, &frozen.class_list));
    assert!(Rc::ptr_eq(&node.listeners, &frozen.listeners));
    assert_eq!(frozen.content(), "body");
    assert_eq!(frozen.id(), Some("main"));
  }

  #[test]
  fn on_accumulates_in_order() {
    let first = Listener::new(|| ());
    let second = Listener::new(|| ());
    let mut node = el!(button);

    node.on("click", first.clone()).on("click", second.clone());

    assert_eq!(node.listeners()["click"], vec![first, second]);
  }

  #[test]
  fn on_does_not_leak_into_frozen_copies() {
    let mut node = el!(button);
    let frozen = node.freeze();
    node.on("click", Listener::new(|| ()));

    assert_eq!(node.listeners().len(), 1);
    assert!(frozen.listeners().is_empty());
  }

  #[test]
  fn builders_copy_on_write() {
    let node = sample();
    let changed = node.freeze().with_attribute("title", "new").with_class("c");

    assert_eq!(node.attribute("title"), Some(&Value::from("t")));
    assert_eq!(changed.attribute("title"), Some(&Value::from("new")));
    assert_eq!(node.class_list(), ["a", "b"]);
    assert_eq!(changed.class_list(), ["a", "b", "c"]);
  }

  #[test]
  fn with_id_replaces_id() {
    let node = sample();
    let renamed = node.freeze().with_id("other");

    assert_eq!(renamed.id(), Some("other"));
    assert_eq!(node.id(), Some("main"));
    assert_eq!(el!(p).with_id("fresh").render(), r#"<p id="fresh"></p>"#);
  }

  #[test]
  fn display_is_json() {
    let node = el!(br);
    assert_eq!(
      node.to_string(),
      concat!(
        r#"{"name":"br","isVoid":true,"id":null,"class":[],"style":null,"#,
        r#""listeners":{},"attributes":{},"content":"","children":[]}"#
      )
    );
  }

  #[test]
  fn display_serializes_children_and_listeners() {
    let mut node = el!(p, ".x", "hi", ["text"]);
    node.on("click", Listener::new(|| ()));

    let json: serde_json::Value = serde_json::from_str(&node.to_string()).unwrap();
    assert_eq!(json["class"], serde_json::json!(["x"]));
    assert_eq!(json["children"], serde_json::json!(["text"]));
    assert_eq!(json["listeners"], serde_json::json!({"click": [null]}));
  }
}
