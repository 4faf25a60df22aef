//! Time-of-day suggestion lookup
//!
//! A fixed table maps each recognized time-of-day label to a meal
//! suggestion. `resolve` normalizes raw user input and looks it up.

mod resolver;
mod table;

pub use resolver::{Suggestion, resolve};
pub use table::{SUGGESTION_TABLE, TableEntry, TimeOfDay, labels_listing, lookup};
