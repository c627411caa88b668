//! Build markup trees with plain function calls, then render them to HTML
//! text or materialize them through a host document.
//!
//! ```
//! use lmth::{attrs, el};
//!
//! let page = el!(ul, ".menu", (), [el!(li, (), "Home"), el!(li, (), "About")]);
//! assert_eq!(
//!   page.render(),
//!   r#"<ul class="menu"><li>Home</li><li>About</li></ul>"#
//! );
//!
//! let field = el!(input, attrs!(id = "q", required = true));
//! assert_eq!(field.render(), r#"<input id="q" required="required">"#);
//! ```

#[macro_use]
extern crate pest_derive;
extern crate pest;

#[macro_use]
pub mod macros;
pub mod args;
pub mod attributes;
pub mod elements;
pub mod error;
pub mod model;
pub mod registry;
pub mod render;
pub mod selector;
pub mod transform;

pub use args::Arg;
pub use error::Error;
pub use model::{Attributes, Child, Listener, Node, Style, Tree, Value};
pub use registry::{create_element, Constructor, Registry, RegistryConfig, ELEMENTS, VOID_ELEMENTS};
pub use render::html::BOOLEAN_ATTRIBUTES;
pub use render::{append_list_to_dom, materialize, render, render_list, Document};
pub use transform::{to_list, transform, traverse};
