pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod form;
pub mod input;
pub mod layout;
pub mod logging;
pub mod suggestion;
pub mod widgets;

mod test_utils;
