//! Folio UI Components
//!
//! Presentational Dioxus components for the portfolio sidebar. They take
//! plain props and callbacks; state and side effects live with the caller.
//!
//! ## Look
//!
//! - Dark card surface with a thin light border
//! - Outline buttons that fill on hover
//! - A glowing person icon with a tilted "feeling lucky" tooltip

pub mod components;

pub use components::*;
