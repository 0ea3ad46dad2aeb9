//! Lucky Tooltip
//!
//! The tilted bubble above the person icon, and the highlight that
//! covers the icon while it is hovered.

use dioxus::prelude::*;
use folio_core::TooltipStyle;

/// Tooltip headline
pub const LUCKY_TITLE: &str = "Are you feeling lucky today?";

/// Tooltip sub-line
pub const LUCKY_SUBTITLE: &str = "Click to feel even more lucky...";

/// Properties for the LuckyTooltip component
#[derive(Clone, PartialEq, Props)]
pub struct LuckyTooltipProps {
    /// Frame transform from the card's springs
    pub style: TooltipStyle,
}

/// Tooltip bubble positioned above its (relatively positioned) parent.
///
/// Opacity, slide, scale, drift and tilt all come from `style`; the caller
/// re-renders it every animation frame.
#[component]
pub fn LuckyTooltip(props: LuckyTooltipProps) -> Element {
    let css = props.style.to_css();

    rsx! {
        div {
            class: "lucky-tooltip",
            role: "tooltip",
            style: "{css}",
            div { class: "lucky-tooltip__accent lucky-tooltip__accent--emerald" }
            div { class: "lucky-tooltip__accent lucky-tooltip__accent--sky" }
            p { class: "lucky-tooltip__title", "{LUCKY_TITLE}" }
            p { class: "lucky-tooltip__subtitle", "{LUCKY_SUBTITLE}" }
        }
    }
}

/// Ring and tint over the icon; fades in through CSS.
#[component]
pub fn HoverHighlight() -> Element {
    rsx! {
        span { class: "hover-highlight", "aria-hidden": "true" }
    }
}
