//! Entity actions: status/stage transitions, extra actions and delete
//!
//! - `registry` / `extra` / `delete` — what backend call a click maps to
//! - `dispatcher` — runs the call and reports the result through a host
//! - `controller` / `view` — Leptos binding and the rendered controls

pub mod controller;
pub mod delete;
pub mod dispatcher;
pub mod error;
pub mod extra;
pub mod registry;
pub mod view;

pub use controller::{ActionController, LeptosHost};
pub use dispatcher::{ActionDispatcher, DispatchHost, DispatchOutcome};
pub use error::DispatchError;
pub use extra::ExtraAction;
pub use view::{DeleteButton, StatusActions};
