use crate::script::ScriptFrame;
use serde::Serialize;
use trails_core::{ConfigError, ManualClock, TrackerConfig, TrailTracker};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrailLine {
    pub id: u64,
    pub hue: f32,
    pub points: usize,
    pub segments: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameLine {
    pub frame: usize,
    pub t_ms: u64,
    pub reset: bool,
    pub accepted: usize,
    pub rejected: usize,
    pub created: usize,
    pub removed: usize,
    pub active: usize,
    pub trails: Vec<TrailLine>,
}

impl std::fmt::Display for FrameLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "frame {:>5} t={:>7}ms active={} +{} -{}",
            self.frame, self.t_ms, self.active, self.created, self.removed
        )?;
        if self.rejected > 0 {
            write!(f, " rejected={}", self.rejected)?;
        }
        if self.reset {
            f.write_str(" [reset]")?;
        }
        for t in &self.trails {
            write!(f, " #{}:{}pt@{:.0}", t.id, t.points, t.hue)?;
        }
        Ok(())
    }
}

/// Drives a tracker through frames on a manual clock pinned to each frame's time.
pub struct Replay {
    clock: ManualClock,
    tracker: TrailTracker<ManualClock>,
}

impl Replay {
    pub fn new(config: TrackerConfig) -> Result<Self, ConfigError> {
        let clock = ManualClock::new(0);
        let tracker = TrailTracker::with_clock(config, clock.clone())?;
        Ok(Self { clock, tracker })
    }

    pub fn step(&mut self, index: usize, frame: &ScriptFrame) -> FrameLine {
        self.clock.set(frame.t_ms);
        if frame.reset {
            self.tracker.clear();
        }
        let report = self.tracker.observe(&frame.contacts());
        let trails = self
            .tracker
            .snapshot()
            .trails
            .into_iter()
            .map(|v| TrailLine {
                id: v.id.0,
                hue: v.hue,
                points: v.points.len(),
                segments: self.tracker.segments_for(v.id).len(),
            })
            .collect();
        FrameLine {
            frame: index,
            t_ms: frame.t_ms,
            reset: frame.reset,
            accepted: report.accepted,
            rejected: report.rejected,
            created: report.created,
            removed: report.removed,
            active: report.active,
            trails,
        }
    }

    #[cfg(test)]
    pub fn run(&mut self, frames: &[ScriptFrame]) -> Vec<FrameLine> {
        frames
            .iter()
            .enumerate()
            .map(|(i, f)| self.step(i, f))
            .collect()
    }

    #[cfg(test)]
    pub fn tracker(&self) -> &TrailTracker<ManualClock> {
        &self.tracker
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::parse;

    #[test]
    fn replays_the_basic_scenarios() {
        let frames = parse(
            r#"[
                { "tMs": 0,    "touches": [{ "id": 1, "x": 0, "y": 0 }, { "id": 2, "x": 5, "y": 5 }] },
                { "tMs": 50,   "touches": [{ "id": 1, "x": 10, "y": 0 }] },
                { "tMs": 2150, "touches": [] }
            ]"#,
        )
        .unwrap();
        let mut replay = Replay::new(TrackerConfig::default()).unwrap();
        let lines = replay.run(&frames);

        assert_eq!(lines[0].created, 2);
        assert_eq!(lines[1].active, 2);
        assert_eq!(lines[1].trails[0].segments, 1);
        assert_eq!(lines[2].removed, 2);
        assert_eq!(lines[2].active, 0);
        assert!(replay.tracker().is_empty());
    }

    #[test]
    fn reset_clears_before_the_frame_is_observed() {
        let frames = parse(
            r#"[
                { "tMs": 0,  "touches": [{ "id": 1, "x": 0, "y": 0 }] },
                { "tMs": 16, "touches": [{ "id": 2, "x": 1, "y": 1 }], "reset": true }
            ]"#,
        )
        .unwrap();
        let mut replay = Replay::new(TrackerConfig::default()).unwrap();
        let lines = replay.run(&frames);
        assert_eq!(lines[1].active, 1);
        assert_eq!(lines[1].trails.len(), 1);
        assert_eq!(lines[1].trails[0].id, 2);
        assert!(lines[1].to_string().contains("[reset]"));
    }
}
