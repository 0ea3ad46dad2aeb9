//! Sidebar context provider for Folio.
//!
//! Provides the site configuration and the outward-facing services to all
//! components via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_context_provider(|| services.clone());
//!
//! // In child components
//! let services = use_sidebar_services();
//! services.analytics.track(event);
//! ```

use std::sync::{Arc, OnceLock};

use dioxus::prelude::*;
use folio_core::{Analytics, Browser, LinkPool, SiteConfig};

/// Everything the sidebar reaches outside itself for.
///
/// Built once in `main` and shared by reference; cloning only bumps the
/// reference counts.
#[derive(Clone)]
pub struct SidebarServices {
    /// Static display configuration
    pub config: Arc<SiteConfig>,
    /// Event tracking sink
    pub analytics: Arc<dyn Analytics>,
    /// Link opening and section scrolling
    pub browser: Arc<dyn Browser>,
    /// Links the person icon picks from
    pub links: Arc<LinkPool>,
}

impl SidebarServices {
    pub fn new(
        config: SiteConfig,
        analytics: Arc<dyn Analytics>,
        browser: Arc<dyn Browser>,
        links: LinkPool,
    ) -> Self {
        Self {
            config: Arc::new(config),
            analytics,
            browser,
            links: Arc::new(links),
        }
    }
}

/// Services set from the command line before launch
static SERVICES: OnceLock<SidebarServices> = OnceLock::new();

/// Install the services for this process. Later calls are ignored.
pub fn install_services(services: SidebarServices) {
    if SERVICES.set(services).is_err() {
        tracing::warn!("Sidebar services already installed");
    }
}

/// Services installed at startup, or defaults when launched without them.
pub fn get_services() -> SidebarServices {
    SERVICES.get().cloned().unwrap_or_else(|| {
        let config = SiteConfig::default();
        let links = LinkPool::new(config.links.clone());
        SidebarServices::new(
            config,
            Arc::new(folio_core::TracingAnalytics),
            Arc::new(crate::browser::EvalBrowser),
            links,
        )
    })
}

/// Hook to access the sidebar services from context.
pub fn use_sidebar_services() -> SidebarServices {
    use_context::<SidebarServices>()
}

/// Hook to access the site configuration.
pub fn use_site_config() -> Arc<SiteConfig> {
    use_sidebar_services().config
}
