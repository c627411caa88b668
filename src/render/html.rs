use crate::model::{Child, Node, Style, Value};
use std::borrow::Cow;
use std::io::{Error, Write};

/// Attributes whose presence, not their value, carries the meaning.
pub static BOOLEAN_ATTRIBUTES: &[&str] = &[
  "allowfullscreen", "async", "autofocus", "autoplay", "checked", "controls", "default", "defer",
  "disabled", "formnovalidate", "hidden", "inert", "ismap", "itemscope", "loop", "multiple",
  "muted", "nomodule", "novalidate", "open", "playsinline", "readonly", "required", "reversed",
  "selected", "truespeed",
];

pub fn is_boolean_attribute(name: &str) -> bool {
  BOOLEAN_ATTRIBUTES
    .iter()
    .any(|attribute| attribute.eq_ignore_ascii_case(name))
}

/// Replaces `& < > " '` with character references in one pass.
pub fn escape(input: &str) -> Cow<'_, str> {
  if !input.contains(['&', '<', '>', '"', '\'']) {
    return Cow::Borrowed(input);
  }

  let mut escaped = String::with_capacity(input.len() + 8);
  for c in input.chars() {
    match c {
      '&' => escaped.push_str("&amp;"),
      '<' => escaped.push_str("&lt;"),
      '>' => escaped.push_str("&gt;"),
      '"' => escaped.push_str("&quot;"),
      '\'' => escaped.push_str("&apos;"),
      _ => escaped.push(c),
    }
  }
  Cow::Owned(escaped)
}

/// The unescaped text an attribute is written with, or `None` when it is left
/// out. Boolean attributes set to `true` repeat their name and are dropped
/// when `false`; any other value is written as text.
pub fn attribute_value<'a>(key: &'a str, value: &'a Value) -> Option<Cow<'a, str>> {
  if is_boolean_attribute(key) {
    match value {
      Value::Boolean(true) => return Some(Cow::Borrowed(key)),
      Value::Boolean(false) => return None,
      _ => (),
    }
  }

  match value {
    Value::String(text) => Some(Cow::Borrowed(text)),
    other => Some(Cow::Owned(other.to_string())),
  }
}

/// `prop:value;` for every declaration, in map order.
pub fn style_text(style: &Style) -> String {
  style
    .iter()
    .map(|(property, value)| format!("{}:{};", property, value))
    .collect()
}

pub fn render(node: &Node) -> String {
  let mut output = String::new();
  render_into(node, &mut output);
  output
}

pub fn render_list(nodes: &[Node]) -> String {
  let mut output = String::new();
  for node in nodes {
    render_into(node, &mut output);
  }
  output
}

pub fn write<W: Write>(node: &Node, writer: &mut W) -> Result<(), Error> {
  writer.write_all(render(node).as_bytes())
}

fn push_attribute(output: &mut String, key: &str, value: &str) {
  output.push(' ');
  output.push_str(key);
  output.push_str("=\"");
  output.push_str(&escape(value));
  output.push('"');
}

fn render_into(node: &Node, output: &mut String) {
  output.push('<');
  output.push_str(node.name());

  if let Some(id) = node.id() {
    push_attribute(output, "id", id);
  }

  if !node.class_list().is_empty() {
    push_attribute(output, "class", &node.class_list().join(" "));
  }

  if let Some(style) = node.style() {
    push_attribute(output, "style", &style_text(style));
  }

  for (key, value) in node.attributes() {
    if let Some(text) = attribute_value(key, value) {
      push_attribute(output, key, &text);
    }
  }

  output.push('>');

  if node.is_void() && node.children().is_empty() && node.content().is_empty() {
    return;
  }

  output.push_str(&escape(node.content()));

  for child in node.children() {
    match child {
      Child::Node(child) => render_into(child, output),
      Child::Text(text) => output.push_str(&escape(text)),
    }
  }

  output.push_str("</");
  output.push_str(node.name());
  output.push('>');
}

impl Node {
  pub fn render(&self) -> String {
    render(self)
  }
}
