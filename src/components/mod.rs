//! UI Components for Folio.
//!
//! Stateful sidebar components wired to the sidebar services.

mod navigation_list;
mod profile_card;

pub use navigation_list::NavigationList;
pub use profile_card::ProfileCard;
