//! Folio Core Library
//!
//! State, motion and analytics behind a portfolio page's sidebar: the
//! profile card with its pointer-following tooltip, and the navigation
//! list that scrolls the page to named sections.
//!
//! ## Overview
//!
//! Nothing in this crate renders. The Dioxus front end owns a
//! [`ProfileCardState`] per card and a [`NavigationList`] built from the
//! [`SiteConfig`], and passes in the two outward-facing capabilities:
//!
//! - [`Analytics`]: fire-and-forget event tracking
//! - [`Browser`]: opening links and scrolling to sections
//!
//! ## Quick Start
//!
//! ```
//! use folio_core::{LinkPool, MemoryAnalytics, MemoryBrowser, NavigationList, ProfileCardState, SiteConfig};
//!
//! let config = SiteConfig::default();
//! let analytics = MemoryAnalytics::new();
//! let browser = MemoryBrowser::new();
//!
//! let mut card = ProfileCardState::new();
//! card.pointer_enter(&analytics);
//! card.pointer_move(80.0, 100.0);
//! card.tick(1.0 / 60.0);
//! assert!(card.tooltip_style().is_some());
//!
//! let links = LinkPool::new(config.links.clone());
//! card.click(&links, &analytics, &browser);
//!
//! let nav = NavigationList::new(config.routes.clone());
//! nav.activate(0, &analytics, &browser);
//! assert_eq!(browser.scrolled(), vec!["section-about".to_string()]);
//! ```

pub mod analytics;
pub mod browser;
pub mod card;
pub mod config;
pub mod error;
pub mod links;
pub mod motion;
pub mod navigation;
pub mod types;

// Re-exports
pub use analytics::{
    Analytics, FanoutAnalytics, JsonlAnalytics, MemoryAnalytics, TrackedEvent, TracingAnalytics,
    TrackingEvent,
};
pub use browser::{Browser, BrowserCall, MemoryBrowser};
pub use card::{ProfileCardState, TooltipStyle, ROTATE_MAP, TRANSLATE_X_MAP};
pub use config::SiteConfig;
pub use error::{FolioError, FolioResult};
pub use links::LinkPool;
pub use navigation::{navigate_to, NavigationList};
pub use types::{section_anchor, ProfileInfo, Route};
