//! Form controller
//!
//! Drives the submit and reset transitions of the suggestion form against
//! an injected host UI and observer.

mod controller;
mod form_state;
mod host;
mod observer;

pub use controller::FormController;
pub use form_state::{FormPhase, FormState};
pub use host::{Button, FormHost};
pub use observer::{FormEvent, FormObserver, LogObserver};
