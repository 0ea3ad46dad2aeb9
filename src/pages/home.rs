//! Home page - sidebar on the left, one section per route on the right.

use dioxus::prelude::*;

use crate::components::ProfileCard;
use crate::context::use_site_config;

/// Home page component.
///
/// Every route gets a section whose id is the route's anchor, so the
/// navigation buttons always have something to scroll to.
#[component]
pub fn Home() -> Element {
    let config = use_site_config();

    rsx! {
        div { class: "page",
            ProfileCard {}

            main { class: "page-content",
                for route in config.routes.iter() {
                    section {
                        key: "{route.name}",
                        id: route.anchor(),
                        class: "page-section",
                        h2 { class: "section-title", "{route.name}" }
                        if let Some(summary) = &route.summary {
                            p { class: "section-summary", "{summary}" }
                        }
                    }
                }
            }
        }
    }
}
