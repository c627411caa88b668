use lmth::render::Document;
use lmth::{Listener, Node};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// [`Document`] backed by a browser `web_sys::Document`.
pub struct HostDocument {
  document: web_sys::Document,
}

impl HostDocument {
  pub fn new(document: web_sys::Document) -> Self {
    HostDocument { document }
  }

  /// The document of the current window, if there is one.
  pub fn ambient() -> Option<Self> {
    web_sys::window()?.document().map(HostDocument::new)
  }
}

fn as_element(node: &web_sys::Node) -> Result<&web_sys::Element, JsValue> {
  node
    .dyn_ref::<web_sys::Element>()
    .ok_or_else(|| js_sys::Error::new("expected an element").into())
}

impl Document for HostDocument {
  type Node = web_sys::Node;
  type Error = JsValue;

  fn create_element(&mut self, name: &str) -> Result<web_sys::Node, JsValue> {
    Ok(self.document.create_element(name)?.into())
  }

  fn create_text_node(&mut self, text: &str) -> Result<web_sys::Node, JsValue> {
    Ok(self.document.create_text_node(text).into())
  }

  fn set_attribute(
    &mut self,
    element: &web_sys::Node,
    name: &str,
    value: &str,
  ) -> Result<(), JsValue> {
    as_element(element)?.set_attribute(name, value)
  }

  // Listeners live as long as the page; the closure is leaked on purpose.
  fn add_event_listener(
    &mut self,
    element: &web_sys::Node,
    event: &str,
    listener: &Listener,
  ) -> Result<(), JsValue> {
    let listener = listener.clone();
    let callback = Closure::wrap(
      Box::new(move |_event: web_sys::Event| listener.call()) as Box<dyn FnMut(web_sys::Event)>
    );
    element.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
    callback.forget();
    Ok(())
  }

  fn append_child(&mut self, parent: &web_sys::Node, child: &web_sys::Node) -> Result<(), JsValue> {
    parent.append_child(child).map(|_| ())
  }

  fn set_id(&mut self, element: &web_sys::Node, id: &str) -> Result<(), JsValue> {
    as_element(element)?.set_id(id);
    Ok(())
  }

  fn set_class_name(&mut self, element: &web_sys::Node, class_name: &str) -> Result<(), JsValue> {
    as_element(element)?.set_class_name(class_name);
    Ok(())
  }
}

fn missing_document() -> JsValue {
  js_sys::Error::new("no document available").into()
}

fn element(name: &str, selector: &str, content: &str) -> Result<Node, JsValue> {
  lmth::create_element(name, selector, content, ())
    .map_err(|error| js_sys::Error::new(&error.to_string()).into())
}

/// Materializes `nodes` into the current document and appends them to `parent`.
pub fn mount(parent: &web_sys::Node, nodes: &[Node]) -> Result<(), JsValue> {
  let mut document = HostDocument::ambient().ok_or_else(missing_document)?;
  lmth::append_list_to_dom(parent, nodes, &mut document)
}

#[wasm_bindgen]
pub fn render_html(name: &str, selector: &str, content: &str) -> Result<String, JsValue> {
  Ok(element(name, selector, content)?.render())
}

#[wasm_bindgen]
pub fn describe(name: &str, selector: &str, content: &str) -> Result<String, JsValue> {
  let node = element(name, selector, content)?;
  serde_json::to_string(&node).map_err(|error| js_sys::Error::new(&error.to_string()).into())
}

/// Creates an element and appends it to the element with id `parent`.
#[wasm_bindgen]
pub fn append(parent: &str, name: &str, selector: &str, content: &str) -> Result<(), JsValue> {
  let mut document = HostDocument::ambient().ok_or_else(missing_document)?;
  let target: web_sys::Node = document
    .document
    .get_element_by_id(parent)
    .ok_or_else(|| JsValue::from(js_sys::Error::new(&format!("no element with id {}", parent))))?
    .into();
  let node = element(name, selector, content)?;
  lmth::append_list_to_dom(&target, &[node], &mut document)
}
