//! Side effects the sidebar asks of its host page

use parking_lot::Mutex;

/// Page-level effects: opening links and scrolling to sections.
///
/// Both calls are fire-and-forget. A missing scroll target or an empty
/// URL is the host's problem to ignore, never an error for the caller.
pub trait Browser: Send + Sync {
    /// Open `url` in a new browsing context (`_blank`).
    fn open_in_new_tab(&self, url: &str);

    /// Smooth-scroll the element with id `element_id` into view.
    fn scroll_into_view(&self, element_id: &str);
}

/// A recorded [`Browser`] request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowserCall {
    OpenInNewTab(String),
    ScrollIntoView(String),
}

/// Records requests instead of performing them.
#[derive(Debug, Default)]
pub struct MemoryBrowser {
    calls: Mutex<Vec<BrowserCall>>,
}

impl MemoryBrowser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of requests, oldest first
    pub fn calls(&self) -> Vec<BrowserCall> {
        self.calls.lock().clone()
    }

    pub fn opened(&self) -> Vec<String> {
        self.calls
            .lock()
            .iter()
            .filter_map(|call| match call {
                BrowserCall::OpenInNewTab(url) => Some(url.clone()),
                BrowserCall::ScrollIntoView(_) => None,
            })
            .collect()
    }

    pub fn scrolled(&self) -> Vec<String> {
        self.calls
            .lock()
            .iter()
            .filter_map(|call| match call {
                BrowserCall::ScrollIntoView(id) => Some(id.clone()),
                BrowserCall::OpenInNewTab(_) => None,
            })
            .collect()
    }
}

impl Browser for MemoryBrowser {
    fn open_in_new_tab(&self, url: &str) {
        self.calls.lock().push(BrowserCall::OpenInNewTab(url.to_string()));
    }

    fn scroll_into_view(&self, element_id: &str) {
        self.calls
            .lock()
            .push(BrowserCall::ScrollIntoView(element_id.to_string()));
    }
}
