//! # bodycomp-tui
//!
//! Interactive terminal form using ratatui with Elm architecture.

pub mod fields;
pub mod footer;
pub mod form;
pub mod header;
pub mod keymap;
pub mod model;
pub mod results;
pub mod styles;

pub use form::FormState;
pub use keymap::KeyAction;
pub use model::TuiApp;
