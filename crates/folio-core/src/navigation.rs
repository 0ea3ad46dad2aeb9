//! Left-hand navigation list

use crate::analytics::{Analytics, TrackingEvent};
use crate::browser::Browser;
use crate::types::Route;

/// Ordered set of navigation buttons, one per route.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NavigationList {
    routes: Vec<Route>,
}

impl NavigationList {
    pub fn new(routes: Vec<Route>) -> Self {
        Self { routes }
    }

    /// Routes in display order
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Button labels in display order
    pub fn labels(&self) -> Vec<&str> {
        self.routes.iter().map(|r| r.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Click the button at `index`. Returns the anchor scrolled to, or
    /// `None` for an out-of-range index.
    pub fn activate(
        &self,
        index: usize,
        analytics: &dyn Analytics,
        browser: &dyn Browser,
    ) -> Option<String> {
        let route = self.routes.get(index)?;
        Some(navigate_to(route, analytics, browser))
    }
}

/// Scroll to `route`'s section and record the click.
pub fn navigate_to(route: &Route, analytics: &dyn Analytics, browser: &dyn Browser) -> String {
    let anchor = route.anchor();
    browser.scroll_into_view(&anchor);
    analytics.track(TrackingEvent::ClickedOnLeftNavigationRoute {
        name: route.name.clone(),
    });
    tracing::debug!(route = %route.name, anchor = %anchor, "Navigating to section");
    anchor
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::MemoryAnalytics;
    use crate::browser::MemoryBrowser;

    fn list() -> NavigationList {
        NavigationList::new(vec![Route::new("About"), Route::new("Projects")])
    }

    #[test]
    fn labels_in_order() {
        assert_eq!(list().labels(), vec!["About", "Projects"]);
        assert_eq!(list().len(), 2);
    }

    #[test]
    fn activate_scrolls_and_tracks() {
        let analytics = MemoryAnalytics::new();
        let browser = MemoryBrowser::new();

        let anchor = list().activate(1, &analytics, &browser);

        assert_eq!(anchor.as_deref(), Some("section-projects"));
        assert_eq!(browser.scrolled(), vec!["section-projects".to_string()]);
        assert_eq!(
            analytics.events(),
            vec![TrackingEvent::ClickedOnLeftNavigationRoute { name: "Projects".into() }]
        );
    }

    #[test]
    fn activate_out_of_range_does_nothing() {
        let analytics = MemoryAnalytics::new();
        let browser = MemoryBrowser::new();

        assert!(list().activate(5, &analytics, &browser).is_none());
        assert!(analytics.is_empty());
        assert!(browser.calls().is_empty());
    }

    #[test]
    fn empty_list() {
        let nav = NavigationList::default();
        assert!(nav.is_empty());
        assert!(nav.labels().is_empty());
    }
}
