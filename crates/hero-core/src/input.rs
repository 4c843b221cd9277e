//! Pointer signal plumbing between event listeners and the animation driver.

use glam::Vec2;

/// Latest pointer data read by the animation driver at tick start.
///
/// `pointer` is the raw offset from the viewport center in CSS pixels; the
/// driver scales and smooths it into a target rotation.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputSignal {
    pub pointer: Vec2,
}

/// Coalescing throttle: at most one value is released per fixed window, and
/// a later push within the same window replaces the pending one (latest
/// wins, earlier samples are dropped rather than queued).
#[derive(Clone, Debug)]
pub struct Throttled<T> {
    interval_ms: f64,
    last_emit_ms: Option<f64>,
    pending: Option<T>,
}

impl<T> Throttled<T> {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            last_emit_ms: None,
            pending: None,
        }
    }

    /// Record a sample; overwrites any sample already pending.
    pub fn push(&mut self, value: T) {
        self.pending = Some(value);
    }

    /// Release the pending sample if the window has elapsed.
    /// The first sample ever pushed releases immediately.
    pub fn take_ready(&mut self, now_ms: f64) -> Option<T> {
        self.pending.as_ref()?;
        match self.last_emit_ms {
            Some(last) if now_ms - last < self.interval_ms => None,
            _ => {
                self.last_emit_ms = Some(now_ms);
                self.pending.take()
            }
        }
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }
}
