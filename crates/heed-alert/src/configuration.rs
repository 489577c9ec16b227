use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::{AlertAction, IntoActions, list::Actions};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of one constructed [`AlertConfiguration`].
///
/// Freshly drawn on every construction; clones share it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AlertId(u64);

impl AlertId {
    fn next() -> Self {
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for AlertId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "alert#{}", self.0)
    }
}

/// Immutable description of one alert.
///
/// Put it in an [`AlertSlot`](crate::AlertSlot) to show it. Two
/// configurations built from the same title, message and actions are still
/// distinct presentations because each construction gets a new [`AlertId`].
#[derive(Clone, PartialEq, Eq)]
pub struct AlertConfiguration {
    id: AlertId,
    title: String,
    message: String,
    actions: Actions,
}

impl AlertConfiguration {
    pub fn new(
        title: impl Into<String>,
        message: impl Into<String>,
        actions: impl IntoActions,
    ) -> Self {
        Self {
            id: AlertId::next(),
            title: title.into(),
            message: message.into(),
            actions: actions.into_actions(),
        }
    }

    pub fn id(&self) -> AlertId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Display order. Empty means the renderer shows a lone "OK".
    pub fn actions(&self) -> &[AlertAction] {
        &self.actions
    }

    pub fn action(&self, index: usize) -> Option<&AlertAction> {
        self.actions.get(index)
    }

    /// Same title, message and actions, ignoring identity.
    pub fn same_content(&self, other: &AlertConfiguration) -> bool {
        self.title == other.title && self.message == other.message && self.actions == other.actions
    }
}

impl fmt::Debug for AlertConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlertConfiguration")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("message", &self.message)
            .field("actions", &self.actions.as_slice())
            .finish()
    }
}
