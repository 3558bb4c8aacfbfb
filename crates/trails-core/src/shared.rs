//! Lock-guarded tracker handle for hosts that read trails off the input thread.

use crate::clock::Clock;
use crate::contact::{RawContact, TouchId};
use crate::tracker::{FrameReport, TrailSnapshot, TrailTracker};
use crate::trail::TrailPoint;
use parking_lot::Mutex;
use std::sync::Arc;

/// Cloneable handle around one tracker. Every call takes the single lock
/// once, so a reader sees the store either before or after a `clear`,
/// never part-way through it.
pub struct SharedTracker<C: Clock> {
    inner: Arc<Mutex<TrailTracker<C>>>,
}

impl<C: Clock> Clone for SharedTracker<C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<C: Clock> SharedTracker<C> {
    pub fn new(tracker: TrailTracker<C>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(tracker)),
        }
    }

    pub fn observe(&self, frame: &[RawContact]) -> FrameReport {
        self.inner.lock().observe(frame)
    }

    pub fn clear(&self) {
        self.inner.lock().clear();
    }

    pub fn segments_for(&self, id: TouchId) -> Vec<(TrailPoint, TrailPoint)> {
        self.inner.lock().segments_for(id)
    }

    pub fn active_count(&self) -> usize {
        self.inner.lock().active_count()
    }

    pub fn snapshot(&self) -> TrailSnapshot {
        self.inner.lock().snapshot()
    }

    /// Run `f` with exclusive access, for multi-step reads that must agree.
    pub fn with<R>(&self, f: impl FnOnce(&mut TrailTracker<C>) -> R) -> R {
        f(&mut self.inner.lock())
    }
}
