use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use slotmap::{SlotMap, new_key_type};

use crate::Dispose;

new_key_type! {
    /// Handle returned by [`Signal::subscribe`].
    pub struct SubId;
}

type Subscriber<T> = Rc<dyn Fn(&T)>;

/// Observable, cloneable handle to a single value.
///
/// Writes notify every subscriber synchronously. The internal borrow is
/// released before any subscriber runs, so a subscriber may read or write any
/// signal (this one included). Each subscriber receives the value current at
/// the moment it is called, not the value that started the notification.
pub struct Signal<T: 'static>(Rc<RefCell<Inner<T>>>);

struct Inner<T> {
    value: T,
    subs: SlotMap<SubId, Subscriber<T>>,
}

impl<T> Clone for Signal<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T: fmt::Debug> fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.0.borrow();
        f.debug_struct("Signal")
            .field("value", &inner.value)
            .field("subscribers", &inner.subs.len())
            .finish()
    }
}

impl<T> Signal<T> {
    pub fn new(value: T) -> Self {
        Self(Rc::new(RefCell::new(Inner {
            value,
            subs: SlotMap::with_key(),
        })))
    }

    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.0.borrow().value.clone()
    }

    /// Borrow the value without cloning it.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.0.borrow().value)
    }

    pub fn set(&self, v: T)
    where
        T: Clone,
    {
        self.0.borrow_mut().value = v;
        self.notify();
    }

    pub fn update<F: FnOnce(&mut T)>(&self, f: F)
    where
        T: Clone,
    {
        f(&mut self.0.borrow_mut().value);
        self.notify();
    }

    pub fn subscribe(&self, f: impl Fn(&T) + 'static) -> SubId {
        self.0.borrow_mut().subs.insert(Rc::new(f))
    }

    /// Returns `false` if `id` was already removed.
    pub fn unsubscribe(&self, id: SubId) -> bool {
        self.0.borrow_mut().subs.remove(id).is_some()
    }

    /// Subscribe and get a [`Dispose`] that removes the subscription when run.
    ///
    /// The guard holds the signal weakly, so it never keeps the value alive.
    pub fn watch(&self, f: impl Fn(&T) + 'static) -> Dispose {
        let id = self.subscribe(f);
        let weak = self.downgrade();
        Dispose::new(move || {
            if let Some(sig) = weak.upgrade() {
                sig.unsubscribe(id);
            }
        })
    }

    pub fn subscriber_count(&self) -> usize {
        self.0.borrow().subs.len()
    }

    pub fn downgrade(&self) -> WeakSignal<T> {
        WeakSignal(Rc::downgrade(&self.0))
    }

    /// True if both handles point at the same slot.
    pub fn ptr_eq(&self, other: &Signal<T>) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    fn notify(&self)
    where
        T: Clone,
    {
        let subs: Vec<(SubId, Subscriber<T>)> = self
            .0
            .borrow()
            .subs
            .iter()
            .map(|(id, s)| (id, s.clone()))
            .collect();
        for (id, s) in subs {
            // An earlier subscriber may have removed this one.
            let value = {
                let inner = self.0.borrow();
                if !inner.subs.contains_key(id) {
                    continue;
                }
                inner.value.clone()
            };
            s(&value);
        }
    }
}

/// Non-owning handle to a [`Signal`].
pub struct WeakSignal<T: 'static>(Weak<RefCell<Inner<T>>>);

impl<T> Clone for WeakSignal<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T> WeakSignal<T> {
    pub fn upgrade(&self) -> Option<Signal<T>> {
        self.0.upgrade().map(Signal)
    }
}

pub fn signal<T>(t: T) -> Signal<T> {
    Signal::new(t)
}
