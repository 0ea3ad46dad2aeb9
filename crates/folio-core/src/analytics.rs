//! Analytics tracking
//!
//! Components never talk to a global client. An [`Analytics`] trait object
//! is built once at startup and handed to whatever needs to record events.
//!
//! Three sinks ship with the crate:
//! - [`TracingAnalytics`]: emits each event as a `tracing` record
//! - [`JsonlAnalytics`]: appends events to a JSONL file
//! - [`MemoryAnalytics`]: keeps events in memory (tests, debugging)
//!
//! [`FanoutAnalytics`] forwards to several sinks at once.

use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Tracing target used for analytics records
pub const ANALYTICS_TARGET: &str = "folio::analytics";

/// Events the sidebar reports
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackingEvent {
    /// Pointer entered or left the person icon
    HoveredOnPersonIcon { is_hovered: bool },
    /// Person icon clicked; `link` is the target that was opened
    ClickedOnPersonIcon { link: String },
    /// A navigation button was clicked
    ClickedOnLeftNavigationRoute { name: String },
}

impl TrackingEvent {
    /// Wire name of the event
    pub fn name(&self) -> &'static str {
        match self {
            TrackingEvent::HoveredOnPersonIcon { .. } => "hovered_on_person_icon",
            TrackingEvent::ClickedOnPersonIcon { .. } => "clicked_on_person_icon",
            TrackingEvent::ClickedOnLeftNavigationRoute { .. } => {
                "clicked_on_left_navigation_route"
            }
        }
    }

    /// JSON payload, keyed the way the collector expects
    pub fn payload(&self) -> Value {
        match self {
            TrackingEvent::HoveredOnPersonIcon { is_hovered } => json!({ "isHovered": is_hovered }),
            TrackingEvent::ClickedOnPersonIcon { link } => json!({ "link": link }),
            TrackingEvent::ClickedOnLeftNavigationRoute { name } => json!({ "name": name }),
        }
    }
}

/// Fire-and-forget event recorder.
///
/// Implementations must not fail the caller; sink errors are logged.
pub trait Analytics: Send + Sync {
    fn track(&self, event: TrackingEvent);
}

impl<T: Analytics + ?Sized> Analytics for Arc<T> {
    fn track(&self, event: TrackingEvent) {
        (**self).track(event)
    }
}

/// Logs every event through `tracing` at info level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingAnalytics;

impl Analytics for TracingAnalytics {
    fn track(&self, event: TrackingEvent) {
        tracing::info!(
            target: ANALYTICS_TARGET,
            event = event.name(),
            payload = %event.payload(),
            "Tracked event"
        );
    }
}

/// One line of the analytics log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackedEvent {
    /// RFC 3339 timestamp with millisecond precision
    pub ts: String,
    pub event: String,
    pub payload: Value,
}

impl TrackedEvent {
    fn now(event: &TrackingEvent) -> Self {
        Self {
            ts: chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
            event: event.name().to_string(),
            payload: event.payload(),
        }
    }
}

/// Appends events to a JSONL file, one object per line.
pub struct JsonlAnalytics {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlAnalytics {
    /// Open (or create) the log file in append mode, creating parent dirs.
    pub fn open(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new().create(true).append(true).open(&path)?;

        Ok(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write(&self, entry: &TrackedEvent) -> std::io::Result<()> {
        let line = serde_json::to_string(entry)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

        let mut writer = self.writer.lock();
        writeln!(writer, "{}", line)?;
        writer.flush()
    }
}

impl Analytics for JsonlAnalytics {
    fn track(&self, event: TrackingEvent) {
        if let Err(e) = self.write(&TrackedEvent::now(&event)) {
            tracing::warn!(path = %self.path.display(), "Failed to write analytics event: {}", e);
        }
    }
}

/// Keeps every event in memory.
#[derive(Debug, Default)]
pub struct MemoryAnalytics {
    events: Mutex<Vec<TrackingEvent>>,
}

impl MemoryAnalytics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of recorded events, oldest first
    pub fn events(&self) -> Vec<TrackingEvent> {
        self.events.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }

    pub fn clear(&self) {
        self.events.lock().clear();
    }
}

impl Analytics for MemoryAnalytics {
    fn track(&self, event: TrackingEvent) {
        self.events.lock().push(event);
    }
}

/// Forwards each event to every inner sink.
#[derive(Default)]
pub struct FanoutAnalytics {
    sinks: Vec<Arc<dyn Analytics>>,
}

impl FanoutAnalytics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, sink: Arc<dyn Analytics>) -> Self {
        self.sinks.push(sink);
        self
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }
}

impl Analytics for FanoutAnalytics {
    fn track(&self, event: TrackingEvent) {
        for sink in &self.sinks {
            sink.track(event.clone());
        }
    }
}
