//! Profile Card Component
//!
//! Person icon with a pointer-following tooltip, the profile name and
//! occupation, and the navigation list underneath.

use std::time::{Duration, Instant};

use dioxus::prelude::*;
use folio_core::ProfileCardState;
use folio_ui::{HoverHighlight, LuckyTooltip, PersonIcon};

use super::NavigationList;
use crate::context::{use_sidebar_services, use_site_config};

/// Frame interval of the spring animation loop (~60 Hz)
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Width of the icon hit box before it has been measured (px).
///
/// 112px frame minus 2px border and 8px padding on each side.
const DEFAULT_HITBOX_WIDTH: f64 = 92.0;

/// Sidebar profile card
///
/// Hovering the icon shows a tooltip that tilts and drifts with the
/// pointer through a damped spring; clicking it opens a random link.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     aside { class: "sidebar",
///         ProfileCard {}
///     }
/// }
/// ```
#[component]
pub fn ProfileCard() -> Element {
    let config = use_site_config();
    let services = use_sidebar_services();

    let mut card = use_signal(ProfileCardState::new);
    let mut hitbox_width = use_signal(|| DEFAULT_HITBOX_WIDTH);

    // Advance the springs while anything is still moving
    use_future(move || async move {
        let mut last_frame = Instant::now();
        loop {
            tokio::time::sleep(FRAME_INTERVAL).await;
            let now = Instant::now();
            let dt = now.duration_since(last_frame).as_secs_f64();
            last_frame = now;

            if !card.peek().is_settled() {
                card.write().tick(dt);
            }
        }
    });

    let on_enter = {
        let analytics = services.analytics.clone();
        move |_: MouseEvent| card.write().pointer_enter(&*analytics)
    };

    let on_leave = {
        let analytics = services.analytics.clone();
        move |_: MouseEvent| card.write().pointer_leave(&*analytics)
    };

    let on_move = move |evt: MouseEvent| {
        if !card.peek().is_hovered() {
            return;
        }
        let x = evt.element_coordinates().x;
        card.write().pointer_move(x, hitbox_width());
    };

    let on_click = {
        let services = services.clone();
        move |_: MouseEvent| {
            let link = card
                .peek()
                .click(&services.links, &*services.analytics, &*services.browser);
            if link.is_empty() {
                tracing::warn!("Link pool is empty, opened a blank target");
            }
        }
    };

    let on_mounted = move |evt: MountedEvent| async move {
        match evt.get_client_rect().await {
            Ok(rect) if rect.size.width > 0.0 => hitbox_width.set(rect.size.width),
            Ok(_) => {}
            Err(e) => tracing::debug!("Could not measure icon: {:?}", e),
        }
    };

    let hovered = card.read().is_hovered();
    let tooltip = card.read().tooltip_style();
    let info = &config.initial_information;

    rsx! {
        aside { class: "sidebar-card",
            div { class: "sidebar-card__profile",
                div { class: "person-frame",
                    div {
                        class: "person-hitbox",
                        onmounted: on_mounted,
                        onmouseenter: on_enter,
                        onmouseleave: on_leave,
                        onmousemove: on_move,
                        onclick: on_click,

                        if let Some(style) = tooltip {
                            LuckyTooltip { style }
                            HoverHighlight {}
                        }

                        PersonIcon { glowing: hovered }
                    }
                }

                h1 { class: "profile-name", "{info.name}" }
                h2 { class: "profile-occupation", "{info.occupation}" }
            }

            NavigationList { routes: config.routes.clone() }
        }
    }
}
