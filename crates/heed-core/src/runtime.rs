use std::any::Any;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::scope::Scope;

thread_local! {
    static COMPOSER: RefCell<Composer> = RefCell::new(Composer::default());
}

#[derive(Default)]
struct Composer {
    slots: Vec<Box<dyn Any>>,
    cursor: usize,
    keyed_slots: HashMap<String, Box<dyn Any>>,
}

/// Drives repeated composition passes over one root scope.
///
/// Each [`frame`](Composition::frame) rewinds the slot cursor, so the Nth
/// `remember` call of a pass returns the value stored by the Nth call of the
/// first pass. Values live until [`dispose`](Composition::dispose).
pub struct Composition {
    scope: Scope,
    frames: u64,
}

impl Default for Composition {
    fn default() -> Self {
        Self::new()
    }
}

impl Composition {
    pub fn new() -> Self {
        Self {
            scope: Scope::new(),
            frames: 0,
        }
    }

    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    /// Number of completed passes.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn frame<R>(&mut self, build: impl FnOnce() -> R) -> R {
        COMPOSER.with(|c| c.borrow_mut().cursor = 0);
        let out = self.scope.run(build);
        self.frames += 1;
        out
    }

    /// Runs scope cleanups and forgets every remembered value.
    pub fn dispose(self) {
        self.scope.dispose();
        let dropped = COMPOSER.with(|c| {
            let mut c = c.borrow_mut();
            c.cursor = 0;
            (
                std::mem::take(&mut c.slots),
                std::mem::take(&mut c.keyed_slots),
            )
        });
        // Values may run their own Drop logic; do it outside the borrow.
        drop(dropped);
    }
}

/// Slot-based remember (sequential composition only)
pub fn remember<T: 'static>(init: impl FnOnce() -> T) -> Rc<T> {
    let cursor = COMPOSER.with(|c| {
        let mut c = c.borrow_mut();
        let cursor = c.cursor;
        c.cursor += 1;
        cursor
    });

    let existing = COMPOSER.with(|c| {
        let c = c.borrow();
        c.slots
            .get(cursor)
            .map(|slot| slot.downcast_ref::<Rc<T>>().cloned())
    });

    match existing {
        Some(Some(rc)) => rc,
        Some(None) => {
            log::warn!(
                "remember: slot {} type changed; replacing. \
                 If this is due to conditional composition, prefer remember_with_key.",
                cursor
            );
            let rc: Rc<T> = Rc::new(init());
            COMPOSER.with(|c| c.borrow_mut().slots[cursor] = Box::new(rc.clone()));
            rc
        }
        None => {
            // `init` runs unborrowed; it must not call `remember` itself.
            let rc: Rc<T> = Rc::new(init());
            COMPOSER.with(|c| c.borrow_mut().slots.push(Box::new(rc.clone())));
            rc
        }
    }
}

/// Key-based remember
pub fn remember_with_key<T: 'static>(key: impl Into<String>, init: impl FnOnce() -> T) -> Rc<T> {
    let key = key.into();

    let existing = COMPOSER.with(|c| {
        c.borrow()
            .keyed_slots
            .get(&key)
            .map(|slot| slot.downcast_ref::<Rc<T>>().cloned())
    });

    match existing {
        Some(Some(rc)) => return rc,
        Some(None) => log::warn!(
            "remember_with_key: key '{}' reused with a different type; replacing.",
            key
        ),
        None => {}
    }

    let rc: Rc<T> = Rc::new(init());
    COMPOSER.with(|c| c.borrow_mut().keyed_slots.insert(key, Box::new(rc.clone())));
    rc
}
