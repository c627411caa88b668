//! Normalizes the attributes argument of an element constructor.

use crate::model::{Attributes, Listeners, Style, Value};
use crate::selector;

/// Prefix marking an attribute key as an event listener registration.
pub const LISTENER_PREFIX: &str = "on";

/// The two accepted shapes of an attributes argument.
#[derive(PartialEq, Debug, Clone)]
pub enum AttributeSource {
  Selector(String),
  Map(Attributes),
}

impl Default for AttributeSource {
  fn default() -> Self {
    AttributeSource::Map(Attributes::new())
  }
}

#[derive(PartialEq, Debug, Clone, Default)]
pub struct ParsedAttributes {
  pub id: Option<String>,
  pub class_list: Vec<String>,
  pub style: Option<Style>,
  pub listeners: Listeners,
  /// Everything not captured by the fields above.
  pub attributes: Attributes,
}

pub fn parse_attributes(source: AttributeSource) -> ParsedAttributes {
  match source {
    AttributeSource::Selector(input) => {
      let parsed = selector::parse(&input);
      ParsedAttributes {
        id: parsed.id.map(String::from),
        class_list: parsed.classes.into_iter().map(String::from).collect(),
        ..ParsedAttributes::default()
      }
    }
    AttributeSource::Map(map) => convert_map(map),
  }
}

fn convert_map(map: Attributes) -> ParsedAttributes {
  let mut output = ParsedAttributes::default();

  for (key, value) in map {
    match key.as_str() {
      "id" => output.id = convert_id(value),
      "class" => output.class_list = convert_class(value),
      "style" => output.style = convert_style(value),
      _ => {
        let event = listener_event(&key).map(String::from);
        match event.zip(value.listeners()) {
          Some((event, listeners)) => output.listeners.entry(event).or_default().extend(listeners),
          None => {
            output.attributes.insert(key, value);
          }
        }
      }
    }
  }

  output
}

fn listener_event(key: &str) -> Option<&str> {
  key
    .strip_prefix(LISTENER_PREFIX)
    .filter(|event| !event.is_empty())
}

fn convert_id(value: Value) -> Option<String> {
  match value {
    Value::Null => None,
    Value::String(id) => Some(id),
    other => Some(other.to_string()),
  }
}

fn convert_class(value: Value) -> Vec<String> {
  match value {
    Value::String(classes) => classes.split_whitespace().map(String::from).collect(),
    Value::Array(items) => items.iter().map(Value::to_string).collect(),
    Value::Null => vec![],
    other => vec![other.to_string()],
  }
}

fn convert_style(value: Value) -> Option<Style> {
  match value {
    Value::Null => None,
    Value::Hash(entries) => Some(
      entries
        .into_iter()
        .map(|(property, value)| (property, value.to_string()))
        .collect(),
    ),
    Value::String(declarations) => Some(parse_declarations(&declarations)),
    other => Some(parse_declarations(&other.to_string())),
  }
}

/// Splits `color: red; margin: 0` into a style map.
fn parse_declarations(input: &str) -> Style {
  input
    .split(';')
    .filter_map(|declaration| declaration.split_once(':'))
    .map(|(property, value)| (property.trim(), value.trim()))
    .filter(|(property, _)| !property.is_empty())
    .map(|(property, value)| (property.into(), value.into()))
    .collect()
}
