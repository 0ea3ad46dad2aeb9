//! Person Icon
//!
//! Standing figure drawn as an inline SVG (24×24 stroke icon).

use dioxus::prelude::*;

/// Properties for the PersonIcon component
#[derive(Clone, PartialEq, Props)]
pub struct PersonIconProps {
    /// Adds the glow effect
    #[props(default = false)]
    pub glowing: bool,
}

/// CSS class for the icon in its current state
pub fn person_icon_class(glowing: bool) -> &'static str {
    if glowing {
        "person-icon glowing-person-icon"
    } else {
        "person-icon"
    }
}

/// Standing person, filling its container.
#[component]
pub fn PersonIcon(props: PersonIconProps) -> Element {
    rsx! {
        svg {
            class: person_icon_class(props.glowing),
            xmlns: "http://www.w3.org/2000/svg",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            circle { cx: "12", cy: "5", r: "1" }
            path { d: "m9 20 3-6 3 6" }
            path { d: "m6 8 6 2 6-2" }
            path { d: "M12 10v4" }
        }
    }
}
