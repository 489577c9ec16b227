//! Ready-made configurations for the alerts most screens need.
//!
//! Texts and labels come from [`alert_strings`](crate::alert_strings), so a
//! surrounding [`with_alert_strings`](crate::with_alert_strings) localizes
//! everything built here.

use std::fmt;
use std::rc::Rc;

use crate::strings::fill;
use crate::{AlertAction, AlertConfiguration, Callback, alert_strings};

/// Device capability an alert can ask the user about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PermissionKind {
    Camera,
    Microphone,
    PhotoLibrary,
    Location,
    Contacts,
    Calendar,
    Notifications,
    Bluetooth,
}

impl PermissionKind {
    pub const COUNT: usize = 8;

    pub const ALL: [PermissionKind; Self::COUNT] = [
        PermissionKind::Camera,
        PermissionKind::Microphone,
        PermissionKind::PhotoLibrary,
        PermissionKind::Location,
        PermissionKind::Contacts,
        PermissionKind::Calendar,
        PermissionKind::Notifications,
        PermissionKind::Bluetooth,
    ];

    /// Position in [`ALL`](Self::ALL).
    pub fn index(self) -> usize {
        self as usize
    }

    /// English name, the default for
    /// [`AlertStrings::permission_names`](crate::AlertStrings::permission_names).
    pub fn feature_name(self) -> &'static str {
        match self {
            PermissionKind::Camera => "Camera",
            PermissionKind::Microphone => "Microphone",
            PermissionKind::PhotoLibrary => "Photo Library",
            PermissionKind::Location => "Location",
            PermissionKind::Contacts => "Contacts",
            PermissionKind::Calendar => "Calendar",
            PermissionKind::Notifications => "Notifications",
            PermissionKind::Bluetooth => "Bluetooth",
        }
    }
}

impl fmt::Display for PermissionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.feature_name())
    }
}

fn retry_and_cancel(retry: Callback, cancel: Option<Callback>) -> [AlertAction; 2] {
    let strings = alert_strings();
    [
        AlertAction::with_emphasis(strings.retry, true, Some(retry)),
        AlertAction::cancel(strings.cancel, cancel),
    ]
}

impl AlertConfiguration {
    /// Offline notice. With `retry`: Retry (primary) and Cancel; without: the
    /// implicit OK.
    pub fn no_network(retry: Option<Callback>) -> Self {
        let strings = alert_strings();
        Self::new(
            strings.no_network_title,
            strings.no_network_message,
            retry.map(|retry| retry_and_cancel(retry, None)),
        )
    }

    pub fn unknown_error(retry: Option<Callback>) -> Self {
        let strings = alert_strings();
        Self::new(
            strings.unknown_error_title,
            strings.unknown_error_message,
            retry.map(|retry| retry_and_cancel(retry, None)),
        )
    }

    /// Caller text, implicit OK.
    pub fn specific(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(title, message, ())
    }

    pub fn specific_with_retry(
        title: impl Into<String>,
        message: impl Into<String>,
        retry: impl Fn() + 'static,
    ) -> Self {
        Self::new(title, message, retry_and_cancel(Rc::new(retry), None))
    }

    pub fn specific_with_retry_and_cancel(
        title: impl Into<String>,
        message: impl Into<String>,
        retry: impl Fn() + 'static,
        cancel: impl Fn() + 'static,
    ) -> Self {
        Self::new(
            title,
            message,
            retry_and_cancel(Rc::new(retry), Some(Rc::new(cancel))),
        )
    }

    pub fn specific_with_primary(
        title: impl Into<String>,
        message: impl Into<String>,
        primary: AlertAction,
        includes_cancel: bool,
    ) -> Self {
        let cancel = includes_cancel.then(|| AlertAction::cancel(alert_strings().cancel, None));
        Self::new(title, message, (primary, cancel))
    }

    pub fn specific_with_actions(
        title: impl Into<String>,
        message: impl Into<String>,
        primary: AlertAction,
        secondary: AlertAction,
        includes_cancel: bool,
    ) -> Self {
        let cancel = includes_cancel.then(|| AlertAction::cancel(alert_strings().cancel, None));
        Self::new(title, message, (primary, secondary, cancel))
    }

    /// Close (cancel role, runs `dismiss`) followed by "Open Settings"
    /// (primary, runs `open_settings`).
    pub fn permissions_denied(
        kind: PermissionKind,
        dismiss: Option<Callback>,
        open_settings: impl Fn() + 'static,
    ) -> Self {
        let strings = alert_strings();
        let name = strings.permission_name(kind).to_string();
        Self::new(
            fill(&strings.permission_denied_title, &name),
            fill(&strings.permission_denied_message, &name),
            (
                AlertAction::cancel(strings.close, dismiss),
                AlertAction::primary(strings.open_settings, open_settings),
            ),
        )
    }

    /// Nothing the user can change: a single OK carrying `dismiss`, or the
    /// implicit OK when there is no callback.
    pub fn permissions_restricted(kind: PermissionKind, dismiss: Option<Callback>) -> Self {
        let strings = alert_strings();
        let name = strings.permission_name(kind).to_string();
        let ok = strings.ok;
        Self::new(
            fill(&strings.permission_restricted_title, &name),
            fill(&strings.permission_restricted_message, &name),
            dismiss.map(|cb| AlertAction::cancel(ok, Some(cb))),
        )
    }
}
