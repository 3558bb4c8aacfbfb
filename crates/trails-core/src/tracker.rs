//! Per-contact trail store with time-based decay.
//!
//! `observe` is called once per rendering frame with every active contact.
//! Each frame appends one point per contact, ages out old points across the
//! whole store, and forgets contacts that have been both missing and empty
//! for longer than the inactivity timeout. Everything else is a read.

use crate::clock::{Clock, MonotonicClock};
use crate::config::TrackerConfig;
use crate::constants::INLINE_CONTACTS;
use crate::contact::{RawContact, TouchId};
use crate::error::ConfigError;
use crate::palette::hue_for_ordinal;
use crate::trail::{AgedPoint, Trail, TrailPoint};
use fnv::FnvHashMap;
use smallvec::SmallVec;

#[derive(Clone, Debug)]
struct TrailEntry {
    trail: Trail,
    last_seen_ms: u64,
    ordinal: u64,
}

/// What one `observe` call did, for logging and status displays.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameReport {
    pub accepted: usize,
    pub rejected: usize,
    pub created: usize,
    pub removed: usize,
    pub active: usize,
}

/// Render-ready view of a single trail.
#[derive(Clone, Debug, PartialEq)]
pub struct TrailView {
    pub id: TouchId,
    pub ordinal: u64,
    pub hue: f32,
    pub points: Vec<TrailPoint>,
}

/// Consistent copy of the whole store at one instant, ordered by ordinal.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TrailSnapshot {
    pub now_ms: u64,
    pub trails: Vec<TrailView>,
}

impl TrailSnapshot {
    pub fn active_count(&self) -> usize {
        self.trails.iter().filter(|t| !t.points.is_empty()).count()
    }
}

pub struct TrailTracker<C: Clock = MonotonicClock> {
    config: TrackerConfig,
    clock: C,
    store: FnvHashMap<TouchId, TrailEntry>,
    next_ordinal: u64,
    // latest instant `observe` has stamped; trails never go back past it
    last_now_ms: u64,
}

impl TrailTracker<MonotonicClock> {
    pub fn new(config: TrackerConfig) -> Result<Self, ConfigError> {
        Self::with_clock(config, MonotonicClock::new())
    }
}

impl<C: Clock> TrailTracker<C> {
    pub fn with_clock(config: TrackerConfig, clock: C) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            clock,
            store: FnvHashMap::default(),
            next_ordinal: 0,
            last_now_ms: 0,
        })
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Swap in new settings. Existing trails were keyed and aged under the
    /// old settings, so the store starts over.
    pub fn reconfigure(&mut self, config: TrackerConfig) -> Result<(), ConfigError> {
        config.validate()?;
        self.config = config;
        self.clear();
        Ok(())
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn now_ms(&self) -> u64 {
        self.clock.now_ms()
    }

    /// Feed one frame of contacts. Pass an empty slice when nothing touches.
    ///
    /// A clock reading older than the previous frame's is clamped up to it,
    /// so timestamps within a trail stay non-decreasing.
    pub fn observe(&mut self, frame: &[RawContact]) -> FrameReport {
        let now = self.clock.now_ms().max(self.last_now_ms);
        self.last_now_ms = now;
        let mode = self.config.identity_mode;
        let mut report = FrameReport::default();
        let mut seen: SmallVec<[TouchId; INLINE_CONTACTS]> = SmallVec::new();

        for (slot, raw) in frame.iter().enumerate() {
            let sample = match raw.validate() {
                Ok(s) => s,
                Err(e) => {
                    log::warn!("[trails] skipping contact: {}", e);
                    report.rejected += 1;
                    continue;
                }
            };
            let id = sample.touch_id(mode, slot);
            let next_ordinal = &mut self.next_ordinal;
            let created = &mut report.created;
            let entry = self.store.entry(id).or_insert_with(|| {
                let ordinal = *next_ordinal;
                *next_ordinal += 1;
                *created += 1;
                log::debug!("[trails] new contact {} (ordinal {})", id, ordinal);
                TrailEntry {
                    trail: Trail::new(),
                    last_seen_ms: now,
                    ordinal,
                }
            });
            entry.trail.push(TrailPoint {
                x: sample.pos.x,
                y: sample.pos.y,
                timestamp_ms: now,
            });
            entry.last_seen_ms = now;
            report.accepted += 1;
            if !seen.contains(&id) {
                seen.push(id);
            }
        }

        let max_age = self.config.max_age_ms;
        let timeout = self.config.inactivity_timeout_ms;
        let before = self.store.len();
        self.store.retain(|id, entry| {
            entry.trail.expire(now, max_age);
            if seen.contains(id) {
                return true;
            }
            let stale = now.saturating_sub(entry.last_seen_ms) >= timeout;
            let keep = !(stale && entry.trail.is_empty());
            if !keep {
                log::debug!("[trails] dropped contact {}", id);
            }
            keep
        });
        report.removed = before - self.store.len();
        report.active = self.active_count();
        report
    }

    /// Consecutive point pairs of one trail, oldest to newest.
    pub fn segments_for(&self, id: TouchId) -> Vec<(TrailPoint, TrailPoint)> {
        self.store
            .get(&id)
            .map(|e| e.trail.segments().collect())
            .unwrap_or_default()
    }

    /// Forget every contact at once.
    pub fn clear(&mut self) {
        let n = self.store.len();
        self.store.clear();
        log::info!("[trails] cleared {} contact(s)", n);
    }

    /// Contacts that still have at least one live point.
    pub fn active_count(&self) -> usize {
        self.store.values().filter(|e| !e.trail.is_empty()).count()
    }

    /// Entries in the store, including empty ones still inside the grace period.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn contains(&self, id: TouchId) -> bool {
        self.store.contains_key(&id)
    }

    pub fn trail(&self, id: TouchId) -> Option<&Trail> {
        self.store.get(&id).map(|e| &e.trail)
    }

    /// Ids ordered by first appearance.
    pub fn ids(&self) -> Vec<TouchId> {
        let mut ids: Vec<(u64, TouchId)> =
            self.store.iter().map(|(id, e)| (e.ordinal, *id)).collect();
        ids.sort_unstable();
        ids.into_iter().map(|(_, id)| id).collect()
    }

    pub fn ordinal_of(&self, id: TouchId) -> Option<u64> {
        self.store.get(&id).map(|e| e.ordinal)
    }

    pub fn hue_for(&self, id: TouchId) -> Option<f32> {
        self.ordinal_of(id)
            .map(|o| hue_for_ordinal(o, self.config.hue_step_degrees))
    }

    /// `(x, y, age)` samples for one trail, oldest first.
    pub fn aged_points(&self, id: TouchId) -> Vec<AgedPoint> {
        let now = self.clock.now_ms();
        self.store
            .get(&id)
            .map(|e| e.trail.aged(now).collect())
            .unwrap_or_default()
    }

    pub fn snapshot(&self) -> TrailSnapshot {
        let step = self.config.hue_step_degrees;
        let mut trails: Vec<TrailView> = self
            .store
            .iter()
            .map(|(id, e)| TrailView {
                id: *id,
                ordinal: e.ordinal,
                hue: hue_for_ordinal(e.ordinal, step),
                points: e.trail.points().copied().collect(),
            })
            .collect();
        trails.sort_unstable_by_key(|t| t.ordinal);
        TrailSnapshot {
            now_ms: self.clock.now_ms(),
            trails,
        }
    }
}
