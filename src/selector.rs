use pest::Parser;

#[derive(Parser)]
#[grammar = "selector.pest"]
struct SelectorParser;

/// Tokens found in a selector string such as `#main.card.wide`.
#[derive(PartialEq, Debug, Default)]
pub struct Selector<'a> {
  /// The last `#` segment; ids are unique, so later ones replace earlier ones.
  pub id: Option<&'a str>,
  pub classes: Vec<&'a str>,
}

pub fn parse(input: &str) -> Selector<'_> {
  let mut selector = Selector::default();

  let pairs = match SelectorParser::parse(Rule::Selector, input) {
    Ok(pairs) => pairs,
    Err(err) => {
      tracing::warn!(input, error = %err, "selector string rejected");
      return selector;
    }
  };

  for pair in pairs.flatten() {
    match pair.as_rule() {
      Rule::Id => selector.id = pair.as_str().strip_prefix('#'),
      Rule::Class => selector.classes.extend(pair.as_str().strip_prefix('.')),
      _ => (),
    }
  }

  selector
}
