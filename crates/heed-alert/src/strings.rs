//! # Alert labels
//!
//! Every label and text the factory catalog produces comes from the
//! [`AlertStrings`] in effect. Override them for a subtree with
//! [`with_alert_strings`]:
//!
//! ```rust
//! use heed_alert::*;
//!
//! let strings = AlertStrings {
//!     retry: "Nochmal".into(),
//!     ..AlertStrings::default()
//! };
//! let alert = with_alert_strings(strings, || {
//!     AlertConfiguration::no_network(Some(std::rc::Rc::new(|| {})))
//! });
//! assert_eq!(alert.actions()[0].title(), "Nochmal");
//! ```
//!
//! Permission texts take the feature name as their only placeholder, `{}`;
//! the names themselves live in [`AlertStrings::permission_names`].

use heed_core::{local, with_local};

use crate::PermissionKind;

/// Labels and catalog texts used by factories and renderers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlertStrings {
    /// Implicit dismiss label when a configuration has no actions.
    pub ok: String,
    pub cancel: String,
    pub retry: String,
    pub close: String,
    pub open_settings: String,

    pub no_network_title: String,
    pub no_network_message: String,
    pub unknown_error_title: String,
    pub unknown_error_message: String,

    /// `{}` is replaced with the feature name.
    pub permission_denied_title: String,
    pub permission_denied_message: String,
    pub permission_restricted_title: String,
    pub permission_restricted_message: String,
    /// Feature names in [`PermissionKind::ALL`] order.
    pub permission_names: [String; PermissionKind::COUNT],
}

impl Default for AlertStrings {
    fn default() -> Self {
        Self {
            ok: "OK".into(),
            cancel: "Cancel".into(),
            retry: "Retry".into(),
            close: "Close".into(),
            open_settings: "Open Settings".into(),

            no_network_title: "No network connection".into(),
            no_network_message: "You appear to be offline. Check your connection and try again."
                .into(),
            unknown_error_title: "Something went wrong".into(),
            unknown_error_message: "An unknown error occurred. Please try again.".into(),

            permission_denied_title: "{} Access Denied".into(),
            permission_denied_message:
                "Allow access to {} in Settings to use this feature.".into(),
            permission_restricted_title: "{} Access Restricted".into(),
            permission_restricted_message:
                "Access to {} is restricted on this device and cannot be changed here."
                    .into(),
            permission_names: PermissionKind::ALL.map(|kind| kind.feature_name().to_string()),
        }
    }
}

impl AlertStrings {
    /// German labels, used by the console demo.
    pub fn german() -> Self {
        Self {
            ok: "OK".into(),
            cancel: "Abbrechen".into(),
            retry: "Erneut versuchen".into(),
            close: "Schließen".into(),
            open_settings: "Einstellungen öffnen".into(),

            no_network_title: "Keine Netzwerkverbindung".into(),
            no_network_message: "Du scheinst offline zu sein. Prüfe deine Verbindung.".into(),
            unknown_error_title: "Etwas ist schiefgelaufen".into(),
            unknown_error_message: "Ein unbekannter Fehler ist aufgetreten.".into(),

            permission_denied_title: "Zugriff auf {} verweigert".into(),
            permission_denied_message:
                "Erlaube den Zugriff auf {} in den Einstellungen, um diese Funktion zu nutzen."
                    .into(),
            permission_restricted_title: "Zugriff auf {} eingeschränkt".into(),
            permission_restricted_message:
                "Der Zugriff auf {} ist auf diesem Gerät eingeschränkt.".into(),
            permission_names: [
                "Kamera",
                "Mikrofon",
                "Fotomediathek",
                "Standort",
                "Kontakte",
                "Kalender",
                "Mitteilungen",
                "Bluetooth",
            ]
            .map(String::from),
        }
    }
}

impl AlertStrings {
    pub fn permission_name(&self, kind: PermissionKind) -> &str {
        &self.permission_names[kind.index()]
    }
}

pub(crate) fn fill(template: &str, feature: &str) -> String {
    template.replacen("{}", feature, 1)
}

pub fn with_alert_strings<R>(strings: AlertStrings, f: impl FnOnce() -> R) -> R {
    with_local(strings, f)
}

/// Strings in effect, or the English defaults.
pub fn alert_strings() -> AlertStrings {
    local::<AlertStrings>()
}
