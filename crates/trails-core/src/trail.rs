use glam::Vec2;
use std::collections::VecDeque;

/// One recorded position. Immutable once created.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailPoint {
    pub x: f32,
    pub y: f32,
    pub timestamp_ms: u64,
}

impl TrailPoint {
    #[inline]
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    #[inline]
    pub fn age_ms(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.timestamp_ms)
    }
}

/// Point as seen by a renderer at a given instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AgedPoint {
    pub x: f32,
    pub y: f32,
    pub age_ms: u64,
}

/// Points of one contact, oldest first.
///
/// Points are only ever appended with the current time, so timestamps are
/// non-decreasing and expired points always form a prefix.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Trail {
    points: VecDeque<TrailPoint>,
}

impl Trail {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, point: TrailPoint) {
        debug_assert!(self
            .points
            .back()
            .map_or(true, |last| last.timestamp_ms <= point.timestamp_ms));
        self.points.push_back(point);
    }

    /// Drop every point with `now - ts >= max_age_ms`. Returns how many went.
    pub fn expire(&mut self, now_ms: u64, max_age_ms: u64) -> usize {
        let mut dropped = 0;
        while let Some(front) = self.points.front() {
            if front.age_ms(now_ms) < max_age_ms {
                break;
            }
            self.points.pop_front();
            dropped += 1;
        }
        dropped
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn newest(&self) -> Option<&TrailPoint> {
        self.points.back()
    }

    pub fn points(&self) -> impl ExactSizeIterator<Item = &TrailPoint> + '_ {
        self.points.iter()
    }

    /// Consecutive pairs, oldest to newest.
    pub fn segments(&self) -> impl Iterator<Item = (TrailPoint, TrailPoint)> + '_ {
        self.points
            .iter()
            .zip(self.points.iter().skip(1))
            .map(|(a, b)| (*a, *b))
    }

    pub fn aged(&self, now_ms: u64) -> impl Iterator<Item = AgedPoint> + '_ {
        self.points.iter().map(move |p| AgedPoint {
            x: p.x,
            y: p.y,
            age_ms: p.age_ms(now_ms),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(x: f32, t: u64) -> TrailPoint {
        TrailPoint {
            x,
            y: 0.0,
            timestamp_ms: t,
        }
    }

    #[test]
    fn expire_drops_only_the_old_prefix() {
        let mut trail = Trail::new();
        for t in [0, 500, 1000, 1999, 2000] {
            trail.push(pt(t as f32, t));
        }
        // At 2000 the point from t=0 is exactly max_age old and must go.
        assert_eq!(trail.expire(2000, 2000), 1);
        assert_eq!(trail.len(), 4);
        assert_eq!(trail.points().next().unwrap().timestamp_ms, 500);
        assert_eq!(trail.expire(3999, 2000), 3);
        assert_eq!(trail.len(), 1);
    }

    #[test]
    fn segments_pair_neighbours_in_order() {
        let mut trail = Trail::new();
        trail.push(pt(0.0, 0));
        assert_eq!(trail.segments().count(), 0);
        trail.push(pt(1.0, 10));
        trail.push(pt(2.0, 20));
        let segs: Vec<_> = trail.segments().map(|(a, b)| (a.x, b.x)).collect();
        assert_eq!(segs, vec![(0.0, 1.0), (1.0, 2.0)]);
    }

    #[test]
    fn aged_reports_age_relative_to_now() {
        let mut trail = Trail::new();
        trail.push(pt(0.0, 100));
        trail.push(pt(1.0, 150));
        let ages: Vec<u64> = trail.aged(200).map(|p| p.age_ms).collect();
        assert_eq!(ages, vec![100, 50]);
    }
}
