use std::fmt;
use std::rc::Rc;

/// Zero-argument side effect run when an action is selected.
pub type Callback = Rc<dyn Fn()>;

/// Semantic category of an action.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ActionRole {
    #[default]
    None,
    /// Dismiss without side effects.
    Cancel,
    Destructive,
}

/// One selectable response within an alert.
///
/// Either a [`role`](Self::role) or [`is_primary`](Self::is_primary) carries
/// the emphasis, never both: [`with_role`](Self::with_role) clears the primary
/// flag and [`with_emphasis`](Self::with_emphasis) forces `ActionRole::None`.
///
/// Equality ignores the callback.
#[derive(Clone)]
pub struct AlertAction {
    title: String,
    role: ActionRole,
    is_primary: bool,
    callback: Option<Callback>,
}

impl AlertAction {
    pub fn with_role(title: impl Into<String>, role: ActionRole, callback: Option<Callback>) -> Self {
        Self {
            title: title.into(),
            role,
            is_primary: false,
            callback,
        }
    }

    pub fn with_emphasis(
        title: impl Into<String>,
        is_primary: bool,
        callback: Option<Callback>,
    ) -> Self {
        Self {
            title: title.into(),
            role: ActionRole::None,
            is_primary,
            callback,
        }
    }

    /// Emphasized default/confirm action.
    pub fn primary(title: impl Into<String>, on_select: impl Fn() + 'static) -> Self {
        Self::with_emphasis(title, true, Some(Rc::new(on_select)))
    }

    pub fn plain(title: impl Into<String>, on_select: impl Fn() + 'static) -> Self {
        Self::with_emphasis(title, false, Some(Rc::new(on_select)))
    }

    pub fn cancel(title: impl Into<String>, callback: Option<Callback>) -> Self {
        Self::with_role(title, ActionRole::Cancel, callback)
    }

    pub fn destructive(title: impl Into<String>, on_select: impl Fn() + 'static) -> Self {
        Self::with_role(title, ActionRole::Destructive, Some(Rc::new(on_select)))
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn role(&self) -> ActionRole {
        self.role
    }

    pub fn is_primary(&self) -> bool {
        self.is_primary
    }

    pub fn callback(&self) -> Option<&Callback> {
        self.callback.as_ref()
    }

    /// False for dismiss-only actions.
    pub fn has_callback(&self) -> bool {
        self.callback.is_some()
    }

    /// Runs the callback if there is one; returns whether it ran.
    pub(crate) fn invoke(&self) -> bool {
        match &self.callback {
            Some(cb) => {
                cb();
                true
            }
            None => false,
        }
    }
}

impl PartialEq for AlertAction {
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title
            && self.role == other.role
            && self.is_primary == other.is_primary
    }
}

impl Eq for AlertAction {}

impl fmt::Debug for AlertAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlertAction")
            .field("title", &self.title)
            .field("role", &self.role)
            .field("is_primary", &self.is_primary)
            .field("callback", &self.callback.as_ref().map(|_| "<callback>"))
            .finish()
    }
}
