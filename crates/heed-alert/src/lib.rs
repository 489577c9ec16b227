//! # Declarative alerts
//!
//! Describe an alert as a value, put it in a slot, and let an
//! [`AlertController`] decide when the modal appears and disappears:
//!
//! ```rust
//! use std::{cell::Cell, rc::Rc};
//!
//! use heed_alert::*;
//! use heed_core::signal;
//!
//! let retried = Rc::new(Cell::new(false));
//! let slot: AlertSlot = signal(None);
//! let controller = AlertController::new(&slot);
//!
//! slot.set(Some(AlertConfiguration::no_network(Some(Rc::new({
//!     let retried = retried.clone();
//!     move || retried.set(true)
//! })))));
//!
//! let frame = AlertFrame::new(&controller.current().unwrap());
//! assert_eq!(frame.buttons[0].label, "Retry");
//!
//! assert_eq!(controller.select(0), Selection::Invoked);
//! assert!(retried.get());
//! assert!(!controller.is_shown());
//! ```
//!
//! - [`AlertConfiguration`] / [`AlertAction`] — the immutable description.
//! - [`IntoActions`] — build action lists from optional pieces.
//! - [`catalog`] — stock alerts (offline, unknown error, permissions).
//! - [`AlertStrings`] — labels, overridable per subtree.
//! - [`render`] — the contract a renderer implements.

pub mod action;
pub mod catalog;
pub mod compose;
pub mod configuration;
pub mod controller;
pub mod list;
pub mod render;
pub mod strings;


pub use action::*;
pub use catalog::PermissionKind;
pub use compose::*;
pub use configuration::*;
pub use controller::*;
pub use list::*;
pub use render::*;
pub use strings::{AlertStrings, alert_strings, with_alert_strings};
