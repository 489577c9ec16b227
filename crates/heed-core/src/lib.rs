//! # Signals, scopes and remembered state
//!
//! `heed-core` is the small reactive runtime the alert layer sits on:
//!
//! - `Signal<T>` — observable value with explicit subscriptions.
//! - `Dispose` / `effect` — cleanup guards, registered with the current `Scope`.
//! - `Composition` + `remember*` — values that survive repeated composition
//!   passes.
//! - `with_local` / `local` — composition locals.
//!
//! ## Signals
//!
//! ```rust
//! use heed_core::*;
//!
//! let count = signal(0);
//! count.set(1);
//! count.update(|v| *v += 1);
//! assert_eq!(count.get(), 2);
//! ```
//!
//! Subscribers run synchronously on every write:
//!
//! ```rust
//! use heed_core::*;
//! use std::{cell::Cell, rc::Rc};
//!
//! let seen = Rc::new(Cell::new(0));
//! let count = signal(0);
//! let guard = count.watch({
//!     let seen = seen.clone();
//!     move |v| seen.set(*v)
//! });
//! count.set(7);
//! guard.run();
//! count.set(9);
//! assert_eq!(seen.get(), 7);
//! ```
//!
//! ## Remembered state
//!
//! ```rust
//! use heed_core::*;
//!
//! let mut composition = Composition::new();
//! let first = composition.frame(|| remember(|| signal(1)));
//! first.set(5);
//! let again = composition.frame(|| remember(|| signal(1)));
//! assert_eq!(again.get(), 5);
//! composition.dispose();
//! ```
//!
//! `remember` is order-based; `remember_with_key` is key-based and stable
//! across conditional branches.

pub mod effects;
pub mod locals;
pub mod runtime;
pub mod scope;
pub mod signal;

mod tests;

pub use effects::*;
pub use locals::*;
pub use runtime::*;
pub use scope::*;
pub use signal::*;
