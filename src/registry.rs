//! Tag name registry and the element constructors built from it.

use crate::args::{resolve, Arg};
use crate::attributes::parse_attributes;
use crate::error::Error;
use crate::model::Node;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub static ELEMENTS: &[&str] = &[
  "a", "abbr", "acronym", "address", "applet", "area", "article", "aside", "audio", "b", "base",
  "basefont", "bdi", "bdo", "bgsound", "big", "blink", "blockquote", "body", "br", "button",
  "canvas", "caption", "center", "cite", "code", "col", "colgroup", "command", "content", "data",
  "datalist", "dd", "del", "details", "dfn", "dialog", "dir", "div", "dl", "dt", "element", "em",
  "embed", "fieldset", "figcaption", "figure", "font", "footer", "form", "frame", "frameset", "h1",
  "h2", "h3", "h4", "h5", "h6", "head", "header", "hgroup", "hr", "html", "i", "iframe", "image",
  "img", "input", "ins", "isindex", "kbd", "keygen", "label", "legend", "li", "link", "listing",
  "main", "map", "mark", "marquee", "menu", "menuitem", "meta", "meter", "multicol", "nav", "nobr",
  "noembed", "noframes", "noscript", "object", "ol", "optgroup", "option", "output", "p", "param",
  "picture", "plaintext", "pre", "progress", "q", "rp", "rt", "rtc", "ruby", "s", "samp", "script",
  "section", "select", "shadow", "small", "source", "spacer", "span", "strike", "strong", "style",
  "sub", "summary", "sup", "table", "tbody", "td", "template", "textarea", "tfoot", "th", "thead",
  "time", "title", "tr", "track", "tt", "u", "ul", "var", "video", "wbr", "xmp",
];

pub static VOID_ELEMENTS: &[&str] = &[
  "area", "base", "br", "col", "embed", "hr", "img", "input", "keygen", "link", "meta", "param",
  "source", "track", "wbr",
];

pub fn is_void_element(name: &str) -> bool {
  VOID_ELEMENTS.contains(&name)
}

/// Serializable description of a registry.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RegistryConfig {
  #[serde(default)]
  pub elements: Vec<String>,
  #[serde(default)]
  pub void_elements: Vec<String>,
}

/// Element constructor for one registered tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constructor {
  name: String,
  is_void: bool,
}

impl Constructor {
  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn is_void(&self) -> bool {
    self.is_void
  }

  pub fn build(&self, one: impl Into<Arg>, two: impl Into<Arg>, three: impl Into<Arg>) -> Node {
    build(&self.name, self.is_void, one.into(), two.into(), three.into())
  }
}

/// Maps tag names to their void flag.
#[derive(Debug, Clone, PartialEq)]
pub struct Registry {
  elements: IndexMap<String, bool>,
}

impl Registry {
  /// A registry with no tags. [`Registry::default`] holds the standard tags.
  pub fn empty() -> Self {
    Registry {
      elements: IndexMap::new(),
    }
  }

  /// The shared registry of standard tags, built on first use.
  pub fn standard() -> &'static Registry {
    static STANDARD: OnceLock<Registry> = OnceLock::new();
    STANDARD.get_or_init(Registry::default)
  }

  pub fn from_config(config: RegistryConfig) -> Result<Self, Error> {
    let mut registry = Registry::empty();

    for name in &config.elements {
      let is_void = config.void_elements.contains(name);
      registry.register(name, is_void)?;
    }

    for name in &config.void_elements {
      if !registry.contains(name) {
        registry.register(name, true)?;
      }
    }

    tracing::debug!(elements = registry.elements.len(), "loaded element registry");
    Ok(registry)
  }

  pub fn from_json(input: &str) -> Result<Self, Error> {
    Registry::from_config(serde_json::from_str(input)?)
  }

  pub fn to_config(&self) -> RegistryConfig {
    RegistryConfig {
      elements: self.elements.keys().cloned().collect(),
      void_elements: self
        .elements
        .iter()
        .filter(|(_, is_void)| **is_void)
        .map(|(name, _)| name.clone())
        .collect(),
    }
  }

  /// Adds `name`, or replaces its void flag if it is already registered.
  /// Constructors handed out earlier keep the flag they were built with.
  pub fn register(&mut self, name: &str, is_void: bool) -> Result<Constructor, Error> {
    if name.is_empty() {
      return Err(Error::EmptyName);
    }

    tracing::debug!(name, is_void, "registering element");
    self.elements.insert(name.into(), is_void);
    Ok(Constructor {
      name: name.into(),
      is_void,
    })
  }

  pub fn contains(&self, name: &str) -> bool {
    self.elements.contains_key(name)
  }

  pub fn is_void(&self, name: &str) -> Option<bool> {
    self.elements.get(name).copied()
  }

  pub fn names(&self) -> impl Iterator<Item = &str> {
    self.elements.keys().map(String::as_str)
  }

  pub fn len(&self) -> usize {
    self.elements.len()
  }

  pub fn is_empty(&self) -> bool {
    self.elements.is_empty()
  }

  pub fn constructor(&self, name: &str) -> Option<Constructor> {
    self.elements.get(name).map(|&is_void| Constructor {
      name: name.into(),
      is_void,
    })
  }

  pub fn create(
    &self,
    name: &str,
    one: impl Into<Arg>,
    two: impl Into<Arg>,
    three: impl Into<Arg>,
  ) -> Result<Node, Error> {
    self
      .constructor(name)
      .map(|constructor| constructor.build(one, two, three))
      .ok_or_else(|| Error::UnknownElement(name.into()))
  }
}

impl Default for Registry {
  fn default() -> Self {
    Registry {
      elements: ELEMENTS
        .iter()
        .map(|&name| (name.to_string(), is_void_element(name)))
        .collect(),
    }
  }
}

/// Builds an element for any tag name, registered or not. The void flag
/// follows [`VOID_ELEMENTS`].
pub fn create_element(
  name: &str,
  one: impl Into<Arg>,
  two: impl Into<Arg>,
  three: impl Into<Arg>,
) -> Result<Node, Error> {
  if name.is_empty() {
    return Err(Error::EmptyName);
  }

  Ok(build(name, is_void_element(name), one.into(), two.into(), three.into()))
}

pub(crate) fn build(name: &str, is_void: bool, one: Arg, two: Arg, three: Arg) -> Node {
  let resolved = resolve(one, two, three);
  let parsed = parse_attributes(resolved.attributes);
  Node::new(name, is_void, parsed, resolved.content, resolved.children)
}
