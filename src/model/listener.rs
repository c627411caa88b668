use serde::{Serialize, Serializer};
use std::fmt;
use std::rc::Rc;

/// A shared reference to an event callback.
///
/// Two listeners are equal only when they point at the same callback, so a
/// cloned listener compares equal to its source while two identical closures
/// do not.
#[derive(Clone)]
pub struct Listener(Rc<dyn Fn()>);

impl Listener {
  pub fn new<F: Fn() + 'static>(callback: F) -> Self {
    Listener(Rc::new(callback))
  }

  pub fn call(&self) {
    (self.0)()
  }
}

impl PartialEq for Listener {
  fn eq(&self, other: &Self) -> bool {
    Rc::ptr_eq(&self.0, &other.0)
  }
}

impl fmt::Debug for Listener {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "Listener({:p})", Rc::as_ptr(&self.0) as *const ())
  }
}

// Function references have no data representation; encode them as `null`.
impl Serialize for Listener {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: Serializer,
  {
    serializer.serialize_unit()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::cell::Cell;

  #[test]
  fn equality_is_identity() {
    let a = Listener::new(|| ());
    let b = Listener::new(|| ());
    assert_eq!(a, a.clone());
    assert_ne!(a, b);
  }

  #[test]
  fn call_invokes_callback() {
    let count = Rc::new(Cell::new(0));
    let counter = count.clone();
    let listener = Listener::new(move || counter.set(counter.get() + 1));
    listener.call();
    listener.clone().call();
    assert_eq!(count.get(), 2);
  }
}
