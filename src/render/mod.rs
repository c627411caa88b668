pub mod dom;
pub mod html;

pub use dom::{append_list_to_dom, materialize, Document};
pub use html::{render, render_list};
