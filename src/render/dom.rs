//! Materializes node trees into a host document.
//!
//! The host is reached only through [`Document`], a narrow construction
//! capability. Nothing here assumes an ambient document; host adapters (the
//! browser one lives in the `lmth-wasm` crate) implement the trait.

use super::html::{attribute_value, style_text};
use crate::model::{Child, Listener, Node};

/// Construction operations a host document provides.
pub trait Document {
  /// Handle to a host element or text node.
  type Node;
  type Error;

  fn create_element(&mut self, name: &str) -> Result<Self::Node, Self::Error>;

  fn create_text_node(&mut self, text: &str) -> Result<Self::Node, Self::Error>;

  fn set_attribute(
    &mut self,
    element: &Self::Node,
    name: &str,
    value: &str,
  ) -> Result<(), Self::Error>;

  fn add_event_listener(
    &mut self,
    element: &Self::Node,
    event: &str,
    listener: &Listener,
  ) -> Result<(), Self::Error>;

  fn append_child(&mut self, parent: &Self::Node, child: &Self::Node) -> Result<(), Self::Error>;

  /// Sets the element's id. Hosts with an `id` property should override this.
  fn set_id(&mut self, element: &Self::Node, id: &str) -> Result<(), Self::Error> {
    self.set_attribute(element, "id", id)
  }

  /// Sets the element's space-separated class list.
  fn set_class_name(&mut self, element: &Self::Node, class_name: &str) -> Result<(), Self::Error> {
    self.set_attribute(element, "class", class_name)
  }
}

/// Builds host nodes for `node` and its descendants, depth first, and returns
/// the root element. The root is not attached anywhere.
pub fn materialize<D>(node: &Node, document: &mut D) -> Result<D::Node, D::Error>
where
  D: Document + ?Sized,
{
  tracing::trace!(name = node.name(), "materializing element");
  let root = document.create_element(node.name())?;

  for (key, value) in node.attributes() {
    if let Some(text) = attribute_value(key, value) {
      document.set_attribute(&root, key, &text)?;
    }
  }

  if let Some(id) = node.id() {
    document.set_id(&root, id)?;
  }

  if !node.class_list().is_empty() {
    document.set_class_name(&root, &node.class_list().join(" "))?;
  }

  if let Some(style) = node.style() {
    document.set_attribute(&root, "style", &style_text(style))?;
  }

  for (event, listeners) in node.listeners() {
    for listener in listeners {
      tracing::trace!(event = event.as_str(), "registering listener");
      document.add_event_listener(&root, event, listener)?;
    }
  }

  let content = document.create_text_node(node.content())?;
  document.append_child(&root, &content)?;

  for child in node.children() {
    let handle = match child {
      Child::Node(child) => materialize(child, document)?,
      Child::Text(text) => document.create_text_node(text)?,
    };
    document.append_child(&root, &handle)?;
  }

  Ok(root)
}

/// Materializes each node and appends it to `parent`, in order.
pub fn append_list_to_dom<D>(
  parent: &D::Node,
  nodes: &[Node],
  document: &mut D,
) -> Result<(), D::Error>
where
  D: Document + ?Sized,
{
  for node in nodes {
    let handle = materialize(node, document)?;
    document.append_child(parent, &handle)?;
  }
  Ok(())
}

impl Node {
  pub fn to_dom<D>(&self, document: &mut D) -> Result<D::Node, D::Error>
  where
    D: Document + ?Sized,
  {
    materialize(self, document)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;
  use std::cell::Cell;
  use std::rc::Rc;

  #[derive(PartialEq, Debug)]
  enum Call {
    CreateElement(String),
    CreateTextNode(String),
    SetAttribute(usize, String, String),
    SetId(usize, String),
    SetClassName(usize, String),
    AddEventListener(usize, String),
    AppendChild(usize, usize),
  }

  /// Records every capability call. Handles are creation indices.
  #[derive(Default)]
  struct Recorder {
    calls: Vec<Call>,
    created: usize,
    listeners: Vec<Listener>,
    reject: Option<&'static str>,
  }

  impl Recorder {
    fn next(&mut self) -> usize {
      self.created += 1;
      self.created - 1
    }
  }

  impl Document for Recorder {
    type Node = usize;
    type Error = String;

    fn create_element(&mut self, name: &str) -> Result<usize, String> {
      if self.reject == Some(name) {
        return Err(format!("cannot create {}", name));
      }
      self.calls.push(Call::CreateElement(name.into()));
      Ok(self.next())
    }

    fn create_text_node(&mut self, text: &str) -> Result<usize, String> {
      self.calls.push(Call::CreateTextNode(text.into()));
      Ok(self.next())
    }

    fn set_attribute(&mut self, element: &usize, name: &str, value: &str) -> Result<(), String> {
      self.calls.push(Call::SetAttribute(*element, name.into(), value.into()));
      Ok(())
    }

    fn add_event_listener(
      &mut self,
      element: &usize,
      event: &str,
      listener: &Listener,
    ) -> Result<(), String> {
      self.calls.push(Call::AddEventListener(*element, event.into()));
      self.listeners.push(listener.clone());
      Ok(())
    }

    fn append_child(&mut self, parent: &usize, child: &usize) -> Result<(), String> {
      self.calls.push(Call::AppendChild(*parent, *child));
      Ok(())
    }

    fn set_id(&mut self, element: &usize, id: &str) -> Result<(), String> {
      self.calls.push(Call::SetId(*element, id.into()));
      Ok(())
    }

    fn set_class_name(&mut self, element: &usize, class_name: &str) -> Result<(), String> {
      self.calls.push(Call::SetClassName(*element, class_name.into()));
      Ok(())
    }
  }

  fn call_attr(element: usize, name: &str, value: &str) -> Call {
    Call::SetAttribute(element, name.into(), value.into())
  }

  #[test]
  fn two_level_tree_end_to_end() {
    let tree = el!(div, attrs!(id = "app", class = "card wide", hidden = true), (), [
      el!(p, (), "Hello")
    ]);

    assert_eq!(
      tree.render(),
      r#"<div id="app" class="card wide" hidden="hidden"><p>Hello</p></div>"#
    );

    let mut document = Recorder::default();
    let root = materialize(&tree, &mut document).unwrap();

    assert_eq!(root, 0);
    assert_eq!(
      document.calls,
      vec![
        Call::CreateElement("div".into()),
        call_attr(0, "hidden", "hidden"),
        Call::SetId(0, "app".into()),
        Call::SetClassName(0, "card wide".into()),
        Call::CreateTextNode("".into()),
        Call::AppendChild(0, 1),
        Call::CreateElement("p".into()),
        Call::CreateTextNode("Hello".into()),
        Call::AppendChild(2, 3),
        Call::AppendChild(0, 2),
      ]
    );
  }

  #[test]
  fn boolean_and_plain_attributes() {
    let node = el!(input, attrs!(checked = false, required = true, value = "a\"b", size = 4));
    let mut document = Recorder::default();
    materialize(&node, &mut document).unwrap();

    assert_eq!(
      document.calls,
      vec![
        Call::CreateElement("input".into()),
        call_attr(0, "required", "required"),
        call_attr(0, "value", "a\"b"),
        call_attr(0, "size", "4"),
        Call::CreateTextNode("".into()),
        Call::AppendChild(0, 1),
      ]
    );
  }

  #[test]
  fn style_listeners_and_text_children() {
    let count = Rc::new(Cell::new(0));
    let first_count = count.clone();
    let second_count = count.clone();
    let first = Listener::new(move || first_count.set(first_count.get() * 10 + 1));
    let second = Listener::new(move || second_count.set(second_count.get() * 10 + 2));

    let mut node = el!(button, attrs!(style = "color: red"), "Go", ["!"]);
    node.on("click", first.clone()).on("click", second.clone());

    let mut document = Recorder::default();
    materialize(&node, &mut document).unwrap();

    assert_eq!(
      document.calls,
      vec![
        Call::CreateElement("button".into()),
        call_attr(0, "style", "color:red;"),
        Call::AddEventListener(0, "click".into()),
        Call::AddEventListener(0, "click".into()),
        Call::CreateTextNode("Go".into()),
        Call::AppendChild(0, 1),
        Call::CreateTextNode("!".into()),
        Call::AppendChild(0, 2),
      ]
    );
    assert_eq!(document.listeners, vec![first, second]);

    for listener in &document.listeners {
      listener.call();
    }
    assert_eq!(count.get(), 12);
  }

  #[test]
  fn empty_content_still_gets_a_text_node() {
    let mut document = Recorder::default();
    materialize(&el!(div), &mut document).unwrap();
    assert_eq!(
      document.calls,
      vec![
        Call::CreateElement("div".into()),
        Call::CreateTextNode("".into()),
        Call::AppendChild(0, 1),
      ]
    );
  }

  #[test]
  fn append_list_in_order() {
    let mut document = Recorder::default();
    let parent = document.create_element("ul").unwrap();
    append_list_to_dom(&parent, &[el!(li), el!(li)], &mut document).unwrap();

    assert_eq!(
      document.calls,
      vec![
        Call::CreateElement("ul".into()),
        Call::CreateElement("li".into()),
        Call::CreateTextNode("".into()),
        Call::AppendChild(1, 2),
        Call::AppendChild(0, 1),
        Call::CreateElement("li".into()),
        Call::CreateTextNode("".into()),
        Call::AppendChild(3, 4),
        Call::AppendChild(0, 3),
      ]
    );
  }

  #[test]
  fn host_errors_propagate_unchanged() {
    let mut document = Recorder {
      reject: Some("blink"),
      ..Recorder::default()
    };
    let tree = el!(div, [el!(span), el!(blink)]);

    assert_eq!(tree.to_dom(&mut document), Err("cannot create blink".to_string()));
  }

  #[test]
  fn default_id_and_class_use_attributes() {
    struct Plain(Vec<(String, String)>);

    impl Document for Plain {
      type Node = ();
      type Error = ();

      fn create_element(&mut self, _: &str) -> Result<(), ()> {
        Ok(())
      }

      fn create_text_node(&mut self, _: &str) -> Result<(), ()> {
        Ok(())
      }

      fn set_attribute(&mut self, _: &(), name: &str, value: &str) -> Result<(), ()> {
        self.0.push((name.into(), value.into()));
        Ok(())
      }

      fn add_event_listener(&mut self, _: &(), _: &str, _: &Listener) -> Result<(), ()> {
        Ok(())
      }

      fn append_child(&mut self, _: &(), _: &()) -> Result<(), ()> {
        Ok(())
      }
    }

    let mut document = Plain(vec![]);
    el!(div, "#a.b.c").to_dom(&mut document).unwrap();
    assert_eq!(
      document.0,
      vec![("id".into(), "a".into()), ("class".into(), "b c".into())]
    );
  }
}
