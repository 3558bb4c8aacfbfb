use crate::config::IdentityMode;
use crate::error::{Axis, ContactError};
use glam::Vec2;

/// Opaque key for one contact across frames.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TouchId(pub u64);

impl std::fmt::Display for TouchId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Contact record as handed over by the host input layer, before validation.
///
/// Coordinates are optional because host touch lists do not guarantee them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RawContact {
    pub id: u64,
    pub x: Option<f64>,
    pub y: Option<f64>,
}

impl RawContact {
    pub fn new(id: u64, x: f64, y: f64) -> Self {
        Self {
            id,
            x: Some(x),
            y: Some(y),
        }
    }

    pub fn validate(&self) -> Result<TouchSample, ContactError> {
        let x = coordinate(self.id, Axis::X, self.x)?;
        let y = coordinate(self.id, Axis::Y, self.y)?;
        Ok(TouchSample {
            id: self.id,
            pos: Vec2::new(x, y),
        })
    }
}

fn coordinate(id: u64, axis: Axis, value: Option<f64>) -> Result<f32, ContactError> {
    let v = value.ok_or(ContactError::MissingCoordinate { id, axis })?;
    if !v.is_finite() {
        return Err(ContactError::NonFiniteCoordinate { id, axis, value: v });
    }
    Ok(v as f32)
}

/// A validated contact: finite coordinates, device id still attached.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchSample {
    pub id: u64,
    pub pos: Vec2,
}

impl TouchSample {
    /// Key this sample is filed under. `slot` is the record's position in the
    /// frame's input sequence.
    #[inline]
    pub fn touch_id(&self, mode: IdentityMode, slot: usize) -> TouchId {
        match mode {
            IdentityMode::Persistent => TouchId(self.id),
            IdentityMode::Slot => TouchId(slot as u64),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_accepts_finite_coordinates() {
        let s = RawContact::new(7, 12.5, -3.0).validate().unwrap();
        assert_eq!(s.id, 7);
        assert_eq!(s.pos, Vec2::new(12.5, -3.0));
    }

    #[test]
    fn validate_reports_missing_axis() {
        let raw = RawContact {
            id: 3,
            x: Some(1.0),
            y: None,
        };
        assert_eq!(
            raw.validate(),
            Err(ContactError::MissingCoordinate { id: 3, axis: Axis::Y })
        );
    }

    #[test]
    fn validate_reports_non_finite_axis() {
        let raw = RawContact::new(4, f64::NAN, 0.0);
        assert!(matches!(
            raw.validate(),
            Err(ContactError::NonFiniteCoordinate { id: 4, axis: Axis::X, .. })
        ));
        let raw = RawContact::new(4, 0.0, f64::INFINITY);
        assert!(raw.validate().is_err());
    }

    #[test]
    fn touch_id_follows_identity_mode() {
        let s = RawContact::new(42, 0.0, 0.0).validate().unwrap();
        assert_eq!(s.touch_id(IdentityMode::Persistent, 3), TouchId(42));
        assert_eq!(s.touch_id(IdentityMode::Slot, 3), TouchId(3));
    }
}
