//! BodyComp-rs library: application logic for the body composition calculator.

pub mod app;
pub mod config;
pub mod errors;
pub mod logging;
pub mod version;
