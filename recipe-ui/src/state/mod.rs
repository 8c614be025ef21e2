//! State Management
//!
//! Page state and the remote operations that change it.

pub mod global;

pub use global::{provide_ui_state, UiState};
