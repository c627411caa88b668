//! Assigns the three positional constructor arguments to the attributes,
//! content and children roles.

use crate::attributes::AttributeSource;
use crate::model::value::format_number;
use crate::model::{Attributes, Child};
use std::fmt;

/// One positional argument, classified by shape.
#[derive(PartialEq, Debug, Clone, Default)]
pub enum Arg {
  #[default]
  Absent,
  Text(String),
  Number(f64),
  Boolean(bool),
  Map(Attributes),
  List(Vec<Child>),
}

impl fmt::Display for Arg {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      Arg::Text(text) => f.write_str(text),
      Arg::Number(number) => format_number(*number, f),
      Arg::Boolean(value) => write!(f, "{}", value),
      Arg::Map(_) => f.write_str("[object Object]"),
      Arg::List(_) | Arg::Absent => Ok(()),
    }
  }
}

/// Role assignment for one constructor call.
#[derive(PartialEq, Debug, Clone, Default)]
pub struct Resolved {
  pub attributes: AttributeSource,
  pub content: String,
  pub children: Vec<Child>,
}

pub fn resolve(one: Arg, two: Arg, three: Arg) -> Resolved {
  let mut resolved = Resolved::default();

  match one {
    Arg::Text(selector) => resolved.attributes = AttributeSource::Selector(selector),
    Arg::Map(map) => resolved.attributes = AttributeSource::Map(map),
    Arg::List(children) => resolved.children = children,
    Arg::Number(_) | Arg::Boolean(_) | Arg::Absent => (),
  }

  match two {
    Arg::Map(map) => resolved.attributes = AttributeSource::Map(map),
    Arg::List(children) => resolved.children = children,
    Arg::Absent => (),
    primitive => resolved.content = primitive.to_string(),
  }

  if let Arg::List(children) = three {
    resolved.children = children;
  }

  resolved
}

impl From<()> for Arg {
  fn from(_: ()) -> Arg {
    Arg::Absent
  }
}

impl From<&str> for Arg {
  fn from(value: &str) -> Arg {
    Arg::Text(value.into())
  }
}

impl From<String> for Arg {
  fn from(value: String) -> Arg {
    Arg::Text(value)
  }
}

impl From<&String> for Arg {
  fn from(value: &String) -> Arg {
    Arg::Text(value.clone())
  }
}

impl From<f64> for Arg {
  fn from(value: f64) -> Arg {
    Arg::Number(value)
  }
}

impl From<i32> for Arg {
  fn from(value: i32) -> Arg {
    Arg::Number(value.into())
  }
}

impl From<u32> for Arg {
  fn from(value: u32) -> Arg {
    Arg::Number(value.into())
  }
}

impl From<bool> for Arg {
  fn from(value: bool) -> Arg {
    Arg::Boolean(value)
  }
}

impl From<Attributes> for Arg {
  fn from(value: Attributes) -> Arg {
    Arg::Map(value)
  }
}

impl<T: Into<Child>> From<Vec<T>> for Arg {
  fn from(value: Vec<T>) -> Arg {
    Arg::List(value.into_iter().map(Into::into).collect())
  }
}

impl<T: Into<Child>, const N: usize> From<[T; N]> for Arg {
  fn from(value: [T; N]) -> Arg {
    Arg::List(value.into_iter().map(Into::into).collect())
  }
}

impl<T: Into<Arg>> From<Option<T>> for Arg {
  fn from(value: Option<T>) -> Arg {
    value.map_or(Arg::Absent, Into::into)
  }
}
