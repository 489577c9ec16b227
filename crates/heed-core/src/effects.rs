use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Cleanup guard. Cloning shares the same cleanup; it runs at most once.
#[derive(Clone)]
pub struct Dispose(Rc<RefCell<Option<Box<dyn FnOnce()>>>>);

impl Dispose {
    pub fn new(f: impl FnOnce() + 'static) -> Self {
        Self(Rc::new(RefCell::new(Some(Box::new(f)))))
    }

    /// Runs at most once (safe to call multiple times).
    pub fn run(&self) {
        // Take before calling so the cleanup may touch this guard again.
        let f = self.0.borrow_mut().take();
        if let Some(f) = f {
            f()
        }
    }

    /// True until the cleanup has run.
    pub fn is_pending(&self) -> bool {
        self.0.borrow().is_some()
    }
}

impl fmt::Debug for Dispose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Dispose").field(&self.is_pending()).finish()
    }
}

/// Runs `f()` immediately and returns its `Dispose`.
///
/// When called inside a [`Scope`](crate::Scope), the cleanup is also
/// registered with that scope.
pub fn effect<F>(f: F) -> Dispose
where
    F: FnOnce() -> Dispose + 'static,
{
    let d = f();

    if let Some(scope) = crate::scope::current_scope() {
        let d2 = d.clone();
        scope.add_disposer(move || d2.run());
    }

    d
}
