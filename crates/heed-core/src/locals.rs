//! # Composition locals
//!
//! Thread-local values that a subtree of composition can override without
//! threading them through every call:
//!
//! ```rust
//! use heed_core::*;
//!
//! #[derive(Clone, Default, PartialEq, Debug)]
//! struct Accent(u8);
//!
//! assert_eq!(local::<Accent>(), Accent(0));
//! with_local(Accent(3), || {
//!     assert_eq!(local::<Accent>(), Accent(3));
//! });
//! assert_eq!(local::<Accent>(), Accent(0));
//! ```
//!
//! Higher-level crates wrap these in typed helpers (e.g. `with_alert_strings`).

use std::any::{Any, TypeId};
use std::cell::RefCell;
use std::collections::HashMap;

thread_local! {
    static LOCALS_STACK: RefCell<Vec<HashMap<TypeId, Box<dyn Any>>>> = RefCell::new(Vec::new());
}

/// Provide `value` to everything `f` composes.
pub fn with_local<T: Any + Clone, R>(value: T, f: impl FnOnce() -> R) -> R {
    with_locals_frame(|| {
        set_local_boxed(TypeId::of::<T>(), Box::new(value));
        f()
    })
}

/// Innermost provided value, or `None` outside any provider.
pub fn try_local<T: Any + Clone>() -> Option<T> {
    LOCALS_STACK.with(|st| {
        for frame in st.borrow().iter().rev() {
            if let Some(v) = frame.get(&TypeId::of::<T>())
                && let Some(t) = v.downcast_ref::<T>()
            {
                return Some(t.clone());
            }
        }
        None
    })
}

// Getter with default if not set
pub fn local<T: Any + Clone + Default>() -> T {
    try_local().unwrap_or_default()
}

fn with_locals_frame<R>(f: impl FnOnce() -> R) -> R {
    // Non-panicking frame guard (ensures pop on unwind)
    struct Guard;
    impl Drop for Guard {
        fn drop(&mut self) {
            LOCALS_STACK.with(|st| {
                st.borrow_mut().pop();
            });
        }
    }
    LOCALS_STACK.with(|st| st.borrow_mut().push(HashMap::new()));
    let _guard = Guard;
    f()
}

fn set_local_boxed(t: TypeId, v: Box<dyn Any>) {
    LOCALS_STACK.with(|st| {
        if let Some(top) = st.borrow_mut().last_mut() {
            top.insert(t, v);
        }
    });
}
