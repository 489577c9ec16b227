//! Ordered, conditional action lists.
//!
//! ```rust
//! use heed_alert::*;
//!
//! let include_cancel = true;
//! let actions = (
//!     AlertAction::primary("Save", || {}),
//!     include_cancel.then(|| AlertAction::cancel("Cancel", None)),
//! )
//!     .into_actions();
//! assert_eq!(actions.len(), 2);
//! ```

use smallvec::SmallVec;

use crate::AlertAction;

/// Inline storage for the common case of at most three buttons.
pub type Actions = SmallVec<[AlertAction; 3]>;

pub trait IntoActions {
    fn into_actions(self) -> Actions;
}

impl IntoActions for AlertAction {
    fn into_actions(self) -> Actions {
        smallvec::smallvec![self]
    }
}

impl<T: IntoActions> IntoActions for Option<T> {
    fn into_actions(self) -> Actions {
        self.map(IntoActions::into_actions).unwrap_or_default()
    }
}

impl IntoActions for Vec<AlertAction> {
    fn into_actions(self) -> Actions {
        Actions::from_vec(self)
    }
}

impl IntoActions for Actions {
    fn into_actions(self) -> Actions {
        self
    }
}

impl<const N: usize> IntoActions for [AlertAction; N] {
    fn into_actions(self) -> Actions {
        self.into_iter().collect()
    }
}

impl IntoActions for () {
    fn into_actions(self) -> Actions {
        Actions::new()
    }
}

// Tuple implementations
macro_rules! impl_into_actions_tuple {
    ($($idx:tt $t:ident),+) => {
        impl<$($t: IntoActions),+> IntoActions for ($($t,)+) {
            fn into_actions(self) -> Actions {
                let mut v = Actions::new();
                $(v.extend(self.$idx.into_actions());)+
                v
            }
        }
    };
}

impl_into_actions_tuple!(0 A);
impl_into_actions_tuple!(0 A, 1 B);
impl_into_actions_tuple!(0 A, 1 B, 2 C);
impl_into_actions_tuple!(0 A, 1 B, 2 C, 3 D);
impl_into_actions_tuple!(0 A, 1 B, 2 C, 3 D, 4 E);
impl_into_actions_tuple!(0 A, 1 B, 2 C, 3 D, 4 E, 5 F);
