//! Reusable sidebar components
//!
//! Class names match the rules in the desktop app's global stylesheet.

mod button;
mod person_icon;
mod tooltip;

pub use button::*;
pub use person_icon::*;
pub use tooltip::*;
