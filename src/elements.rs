//! One constructor per standard tag name.
//!
//! Each constructor takes the attributes, content and children arguments in
//! any of the shapes accepted by [`crate::args::resolve`]. Pass `()` for an
//! unused position, or use the [`el!`](crate::el) macro.

use crate::args::Arg;
use crate::model::Node;
use crate::registry::{self, Registry};

fn standard(name: &str, one: Arg, two: Arg, three: Arg) -> Node {
  let is_void = Registry::standard()
    .is_void(name)
    .unwrap_or_else(|| registry::is_void_element(name));
  registry::build(name, is_void, one, two, three)
}

macro_rules! elements {
  ($($name:ident),+ $(,)?) => {
    /// Names of the tags with a constructor in this module.
    pub static NAMES: &[&str] = &[$(stringify!($name)),+];

    $(
      #[doc = concat!("Builds a `<", stringify!($name), ">` element.")]
      pub fn $name(one: impl Into<Arg>, two: impl Into<Arg>, three: impl Into<Arg>) -> Node {
        standard(stringify!($name), one.into(), two.into(), three.into())
      }
    )+
  };
}

elements!(
  a, abbr, acronym, address, applet, area, article, aside, audio, b, base, basefont, bdi, bdo,
  bgsound, big, blink, blockquote, body, br, button, canvas, caption, center, cite, code, col,
  colgroup, command, content, data, datalist, dd, del, details, dfn, dialog, dir, div, dl, dt,
  element, em, embed, fieldset, figcaption, figure, font, footer, form, frame, frameset, h1, h2, h3,
  h4, h5, h6, head, header, hgroup, hr, html, i, iframe, image, img, input, ins, isindex, kbd,
  keygen, label, legend, li, link, listing, main, map, mark, marquee, menu, menuitem, meta, meter,
  multicol, nav, nobr, noembed, noframes, noscript, object, ol, optgroup, option, output, p, param,
  picture, plaintext, pre, progress, q, rp, rt, rtc, ruby, s, samp, script, section, select,
  shadow, small, source, spacer, span, strike, strong, style, sub, summary, sup, table, tbody, td,
  template, textarea, tfoot, th, thead, time, title, tr, track, tt, u, ul, var, video, wbr, xmp,
);
