//! # Presenting alerts from a slot
//!
//! The owner of a screen keeps one [`AlertSlot`] and writes configurations
//! into it. An [`AlertController`] watches that slot and keeps a separate
//! "is shown" flag in sync:
//!
//! | Slot change | Flag |
//! |---|---|
//! | empty → configuration | `false` → `true` |
//! | configuration → empty | `true` → `false` |
//! | configuration → configuration with another id | `true` → `false` → `true` |
//! | same id written again | unchanged |
//!
//! The flag can also drop to `false` on its own (a button was pressed, the
//! platform dismissed the modal). That never clears the slot; the owner
//! decides when to do that.
//!
//! ```rust
//! use heed_alert::*;
//! use heed_core::signal;
//!
//! let slot: AlertSlot = signal(None);
//! let controller = AlertController::new(&slot);
//!
//! slot.set(Some(AlertConfiguration::specific("Saved", "All changes are stored.")));
//! assert!(controller.is_shown());
//!
//! slot.set(None);
//! assert!(!controller.is_shown());
//! ```

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use heed_core::{Dispose, Signal, WeakSignal, signal};

use crate::render::{AlertEvent, AlertFrame, AlertHost};
use crate::{AlertConfiguration, AlertId};

/// Owner-held "current configuration". `None` means no alert.
pub type AlertSlot = Signal<Option<AlertConfiguration>>;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Presentation {
    #[default]
    Hidden,
    Shown,
}

/// Most recent visibility change made by a controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    Presented(AlertId),
    /// Torn down and shown again with new content.
    Replaced { from: AlertId, to: AlertId },
    Dismissed(AlertId),
}

/// Outcome of a renderer event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection {
    /// The action's callback ran and the alert was hidden.
    Invoked,
    /// Dismiss-only: no callback was attached, or the implicit OK was chosen.
    Dismissed,
    Ignored(IgnoredReason),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IgnoredReason {
    /// Nothing is on screen.
    NotShown,
    /// `len` counts the buttons on screen, including an implicit OK.
    OutOfRange { index: usize, len: usize },
}

/// Drives one modal alert from an [`AlertSlot`].
///
/// Replacing a live configuration with a different one hides and reshows the
/// modal, since most native alert layers cannot retarget a modal in place.
/// That can look abrupt; prefer clearing the slot before showing something
/// else when the old alert may still be visible.
///
/// Dropping the controller detaches it from the slot.
pub struct AlertController {
    inner: Rc<Shared>,
    subscription: Dispose,
}

struct Shared {
    slot: WeakSignal<Option<AlertConfiguration>>,
    shown: Signal<bool>,
    state: RefCell<State>,
}

#[derive(Default)]
struct State {
    /// Id of the slot value last reacted to, not the last one written.
    processed: Option<AlertId>,
    /// Kept after hiding so a renderer can finish closing it.
    current: Option<AlertConfiguration>,
    last_transition: Option<Transition>,
    presentations: u64,
}

impl AlertController {
    /// Attach to `slot`. If it already holds a configuration, that
    /// configuration is shown immediately.
    pub fn new(slot: &AlertSlot) -> Self {
        let inner = Rc::new(Shared {
            slot: slot.downgrade(),
            shown: signal(false),
            state: RefCell::new(State::default()),
        });

        let weak: Weak<Shared> = Rc::downgrade(&inner);
        let subscription = slot.watch(move |_| {
            if let Some(inner) = weak.upgrade() {
                inner.reconcile();
            }
        });

        inner.reconcile();

        Self {
            inner,
            subscription,
        }
    }

    pub fn is_shown(&self) -> bool {
        self.inner.shown.get()
    }

    pub fn presentation(&self) -> Presentation {
        if self.is_shown() {
            Presentation::Shown
        } else {
            Presentation::Hidden
        }
    }

    /// Last configuration the controller reacted to. Still available after
    /// the alert hides; `None` only before anything was shown.
    pub fn current(&self) -> Option<AlertConfiguration> {
        self.inner.state.borrow().current.clone()
    }

    pub fn last_transition(&self) -> Option<Transition> {
        self.inner.state.borrow().last_transition
    }

    /// How many times the flag went from hidden to shown.
    pub fn presentation_count(&self) -> u64 {
        self.inner.state.borrow().presentations
    }

    /// Observe the shown flag. A replacement delivers `false` then `true`.
    pub fn watch_shown(&self, f: impl Fn(bool) + 'static) -> Dispose {
        self.inner.shown.watch(move |shown| f(*shown))
    }

    /// Re-read the slot and apply any pending change. Writes are normally
    /// observed as they happen; hosts that poll once per frame call this.
    pub fn reconcile(&self) {
        self.inner.reconcile();
    }

    /// Platform-level dismissal (escape, swipe, scrim tap). Leaves the slot
    /// untouched. Returns `false` if nothing was shown.
    pub fn dismiss(&self) -> bool {
        let Some(id) = self.visible_id() else {
            return false;
        };
        log::debug!("{id}: dismissed");
        self.inner.hide(id);
        true
    }

    /// The user picked the button at `index`. Runs that action's callback,
    /// if any, then hides the alert.
    ///
    /// With no actions the renderer shows a lone implicit OK, so index `0`
    /// is accepted and simply dismisses.
    pub fn select(&self, index: usize) -> Selection {
        let Some(config) = self.visible() else {
            log::warn!("alert selection {index} ignored: nothing is shown");
            return Selection::Ignored(IgnoredReason::NotShown);
        };

        let action = match config.action(index) {
            Some(action) => Some(action.clone()),
            None if config.actions().is_empty() && index == 0 => None,
            None => {
                let len = config.actions().len().max(1);
                log::warn!("{}: selection {index} out of range ({len} buttons)", config.id());
                return Selection::Ignored(IgnoredReason::OutOfRange { index, len });
            }
        };

        let invoked = action.as_ref().is_some_and(|a| a.invoke());
        log::debug!(
            "{}: selected {index} ({})",
            config.id(),
            if invoked { "callback" } else { "dismiss only" }
        );

        // The callback may have put something newer on screen; only hide
        // the configuration this selection belonged to.
        if self.visible_id() == Some(config.id()) {
            self.inner.hide(config.id());
        }

        if invoked {
            Selection::Invoked
        } else {
            Selection::Dismissed
        }
    }

    /// Route an event reported by the renderer.
    pub fn handle(&self, event: AlertEvent) -> Selection {
        match event {
            AlertEvent::Selected(index) => self.select(index),
            AlertEvent::Dismissed => {
                if self.dismiss() {
                    Selection::Dismissed
                } else {
                    Selection::Ignored(IgnoredReason::NotShown)
                }
            }
        }
    }

    /// Push the current state into `host`.
    pub fn drive(&self, host: &mut impl AlertHost) {
        match self.visible() {
            Some(config) => host.present(&AlertFrame::new(&config)),
            None => host.dismiss(),
        }
    }

    /// Stop observing the slot. The flag keeps its last value.
    pub fn detach(&self) {
        self.subscription.run();
    }

    pub fn is_attached(&self) -> bool {
        self.subscription.is_pending()
    }

    pub(crate) fn subscription(&self) -> Dispose {
        self.subscription.clone()
    }

    fn visible(&self) -> Option<AlertConfiguration> {
        if self.is_shown() { self.current() } else { None }
    }

    fn visible_id(&self) -> Option<AlertId> {
        if !self.is_shown() {
            return None;
        }
        self.inner.state.borrow().current.as_ref().map(|c| c.id())
    }
}

impl Drop for AlertController {
    fn drop(&mut self) {
        self.subscription.run();
    }
}

impl Shared {
    fn reconcile(&self) {
        let Some(slot) = self.slot.upgrade() else {
            return;
        };
        // Always the slot's value now, never the value that triggered the
        // notification: nested writes must not resurrect an older alert.
        let next = slot.with(|v| v.clone());
        let next_id = next.as_ref().map(AlertConfiguration::id);

        let mut state = self.state.borrow_mut();
        if state.processed == next_id {
            return;
        }
        state.processed = next_id;

        match next {
            None => {
                let shown_id = state.current.as_ref().map(|c| c.id());
                drop(state);
                if let Some(id) = shown_id.filter(|_| self.shown.get()) {
                    log::debug!("{id}: slot cleared");
                    self.hide(id);
                }
            }
            Some(config) => {
                let to = config.id();
                let from = state
                    .current
                    .as_ref()
                    .map(|c| c.id())
                    .filter(|_| self.shown.get());
                state.current = Some(config);
                drop(state);

                if let Some(from) = from {
                    log::debug!("{from}: replaced by {to}");
                    self.hide(from);
                }

                // A shown-flag watcher may have written the slot while the
                // old alert went down; that write has already been applied.
                let mut state = self.state.borrow_mut();
                if state.processed != Some(to) {
                    return;
                }
                state.presentations += 1;
                state.last_transition = Some(match from {
                    Some(from) => Transition::Replaced { from, to },
                    None => Transition::Presented(to),
                });
                drop(state);

                if from.is_none() {
                    log::debug!("{to}: presented");
                }
                self.shown.set(true);
            }
        }
    }

    fn hide(&self, id: AlertId) {
        self.state.borrow_mut().last_transition = Some(Transition::Dismissed(id));
        self.shown.set(false);
    }
}
