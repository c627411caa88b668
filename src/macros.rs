/// Builds an [`Attributes`](crate::model::Attributes) map.
///
/// Keys are identifiers (`attrs!(id = "x", disabled = true)`) or, for names
/// that are not valid identifiers, string literals
/// (`attrs!("data-id" => 3, "type" => "text")`).
#[macro_export]
macro_rules! attrs {
  () => {
    $crate::model::Attributes::new()
  };

  ($($key:ident = $value:expr),+ $(,)?) => {
    $crate::model::Attributes::from([
      $((stringify!($key).to_string(), $crate::model::Value::from($value)),)+
    ])
  };

  ($($key:literal => $value:expr),+ $(,)?) => {
    $crate::model::Attributes::from([
      $(($key.to_string(), $crate::model::Value::from($value)),)+
    ])
  };
}

/// Builds a [`Style`](crate::model::Style) map; values are converted with
/// `to_string`.
#[macro_export]
macro_rules! style {
  ($($key:ident = $value:expr),+ $(,)?) => {
    $crate::model::Style::from([
      $((stringify!($key).to_string(), ($value).to_string()),)+
    ])
  };

  ($($key:literal => $value:expr),+ $(,)?) => {
    $crate::model::Style::from([
      $(($key.to_string(), ($value).to_string()),)+
    ])
  };
}

/// Calls a standard element constructor with up to three arguments, filling
/// the missing positions with `()`.
///
/// `el!(div)`, `el!(p, (), "text")`, `el!(div, ".card", "title", [child])`.
#[macro_export]
macro_rules! el {
  ($tag:ident $(,)?) => {
    $crate::elements::$tag((), (), ())
  };

  ($tag:ident, $one:expr $(,)?) => {
    $crate::elements::$tag($one, (), ())
  };

  ($tag:ident, $one:expr, $two:expr $(,)?) => {
    $crate::elements::$tag($one, $two, ())
  };

  ($tag:ident, $one:expr, $two:expr, $three:expr $(,)?) => {
    $crate::elements::$tag($one, $two, $three)
  };
}
