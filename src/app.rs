use dioxus::prelude::*;

use crate::context::get_services;
use crate::pages::Home;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles and the sidebar services.
#[component]
pub fn App() -> Element {
    use_context_provider(get_services);

    rsx! {
        style { {GLOBAL_STYLES} }
        Home {}
    }
}
