//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::cell::Cell;
use std::fmt;
use std::sync::{Arc, Mutex};

use nix::errno::Errno;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::Layer;
use vrf_ext::Connection;

/// Connection whose bound-device query is scripted by the test.
pub struct FakeConnection {
    number: u64,
    reply: Result<Vec<u8>, Errno>,
    queries: Cell<usize>,
}

impl FakeConnection {
    /// A socket bound to `device`. An empty name means the default VRF.
    pub fn bound_to(device: &str) -> Self {
        Self {
            number: 7,
            reply: Ok(device.as_bytes().to_vec()),
            queries: Cell::new(0),
        }
    }

    /// A socket whose query fails with `errno`.
    pub fn failing(errno: Errno) -> Self {
        Self {
            number: 7,
            reply: Err(errno),
            queries: Cell::new(0),
        }
    }

    /// Number of bound-device queries made so far.
    pub fn queries(&self) -> usize {
        self.queries.get()
    }
}

impl Connection for FakeConnection {
    fn number(&self) -> u64 {
        self.number
    }

    fn bound_device(&self, buf: &mut [u8]) -> Result<usize, Errno> {
        self.queries.set(self.queries.get() + 1);
        let name = self.reply.as_ref().map_err(|errno| *errno)?;
        let len = name.len().min(buf.len());
        buf[..len].copy_from_slice(&name[..len]);
        Ok(len)
    }
}

/// One captured tracing event.
#[derive(Debug, Clone)]
pub struct Captured {
    pub level: Level,
    pub message: String,
    pub fields: Vec<(String, String)>,
}

impl Captured {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Default)]
struct FieldVisitor {
    message: String,
    fields: Vec<(String, String)>,
}

impl Visit for FieldVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{:?}", value);
        } else {
            self.fields
                .push((field.name().to_string(), format!("{:?}", value)));
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.fields
            .push((field.name().to_string(), value.to_string()));
    }
}

#[derive(Clone, Default)]
struct CaptureLayer {
    events: Arc<Mutex<Vec<Captured>>>,
}

impl<S: Subscriber> Layer<S> for CaptureLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);
        self.events.lock().unwrap().push(Captured {
            level: *event.metadata().level(),
            message: visitor.message,
            fields: visitor.fields,
        });
    }
}

/// Runs `f` with a subscriber that records every event, and returns them.
pub fn capture_logs<T>(f: impl FnOnce() -> T) -> (T, Vec<Captured>) {
    let layer = CaptureLayer::default();
    let events = Arc::clone(&layer.events);
    let subscriber = tracing_subscriber::registry().with(layer);

    let out = tracing::subscriber::with_default(subscriber, f);
    let events = events.lock().unwrap().clone();
    (out, events)
}

/// Events at `level` only.
pub fn at_level(events: &[Captured], level: Level) -> Vec<&Captured> {
    events.iter().filter(|e| e.level == level).collect()
}
