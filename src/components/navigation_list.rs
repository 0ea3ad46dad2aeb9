//! Navigation List Component
//!
//! One outline button per route; clicking scrolls the page to the
//! route's section and records the click.

use dioxus::prelude::*;
use folio_core::{navigate_to, Route};
use folio_ui::{Button, ButtonVariant};

use crate::context::use_sidebar_services;

/// Vertical list of section buttons
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     NavigationList { routes: config.routes.clone() }
/// }
/// ```
#[component]
pub fn NavigationList(
    /// Routes in display order
    routes: Vec<Route>,
) -> Element {
    let services = use_sidebar_services();

    rsx! {
        nav { class: "sidebar-nav", "aria-label": "Page sections",
            for route in routes.iter() {
                {
                    let route_clone = route.clone();
                    let services = services.clone();
                    rsx! {
                        Button {
                            key: "{route.name}",
                            variant: ButtonVariant::Outline,
                            class: Some("nav-button".to_string()),
                            onclick: move |_: ()| {
                                navigate_to(&route_clone, &*services.analytics, &*services.browser);
                            },
                            "{route.name}"
                        }
                    }
                }
            }
        }
    }
}
