use super::listener::Listener;
use super::Attributes;
use serde::Serialize;
use std::fmt;

#[derive(PartialEq, Clone, Debug, Serialize)]
#[serde(untagged)]
pub enum Value {
  Hash(Attributes),
  Array(Vec<Value>),
  String(String),
  Number(f64),
  Boolean(bool),
  Listener(Listener),
  Null,
}

impl Value {
  pub fn as_listener(&self) -> Option<&Listener> {
    match self {
      Value::Listener(listener) => Some(listener),
      _ => None,
    }
  }

  /// Listeners held by this value, if it is a listener or a non-empty array
  /// made only of listeners.
  pub fn listeners(&self) -> Option<Vec<Listener>> {
    match self {
      Value::Listener(listener) => Some(vec![listener.clone()]),
      Value::Array(values) if !values.is_empty() => values
        .iter()
        .map(|value| value.as_listener().cloned())
        .collect(),
      _ => None,
    }
  }
}

impl From<&str> for Value {
  fn from(value: &str) -> Value {
    Value::String(value.into())
  }
}

impl From<String> for Value {
  fn from(value: String) -> Value {
    Value::String(value)
  }
}

impl From<bool> for Value {
  fn from(value: bool) -> Value {
    Value::Boolean(value)
  }
}

impl From<i32> for Value {
  fn from(value: i32) -> Value {
    Value::Number(value.into())
  }
}

impl From<u32> for Value {
  fn from(value: u32) -> Value {
    Value::Number(value.into())
  }
}

impl From<f64> for Value {
  fn from(value: f64) -> Value {
    Value::Number(value)
  }
}

impl From<Listener> for Value {
  fn from(value: Listener) -> Value {
    Value::Listener(value)
  }
}

impl From<Vec<Value>> for Value {
  fn from(value: Vec<Value>) -> Value {
    Value::Array(value)
  }
}

impl From<Attributes> for Value {
  fn from(value: Attributes) -> Value {
    Value::Hash(value)
  }
}

impl<T: Into<Value>> From<Option<T>> for Value {
  fn from(value: Option<T>) -> Value {
    value.map_or(Value::Null, Into::into)
  }
}

/// Formats a number the way a JavaScript `String(n)` call would for the
/// values that show up in markup.
pub(crate) fn format_number(value: f64, f: &mut fmt::Formatter) -> fmt::Result {
  if value.is_nan() {
    write!(f, "NaN")
  } else if value.is_infinite() {
    write!(f, "{}Infinity", if value < 0.0 { "-" } else { "" })
  } else if value == 0.0 {
    write!(f, "0")
  } else if value.abs() >= 1e21 || value.abs() < 1e-6 {
    // exponent form, with an explicit sign on positive exponents
    let text = format!("{:e}", value);
    match text.split_once('e') {
      Some((mantissa, exponent)) if !exponent.starts_with('-') => {
        write!(f, "{}e+{}", mantissa, exponent)
      }
      _ => f.write_str(&text),
    }
  } else {
    write!(f, "{}", value)
  }
}

impl fmt::Display for Value {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      Value::String(value) => write!(f, "{}", value),
      Value::Number(value) => format_number(*value, f),
      Value::Boolean(value) => write!(f, "{}", value),
      Value::Array(values) => {
        for (index, value) in values.iter().enumerate() {
          if index > 0 {
            write!(f, ",")?;
          }
          write!(f, "{}", value)?;
        }
        Ok(())
      }
      Value::Hash(_) => write!(f, "[object Object]"),
      Value::Listener(_) => write!(f, "[function]"),
      Value::Null => write!(f, "null"),
    }
  }
}
