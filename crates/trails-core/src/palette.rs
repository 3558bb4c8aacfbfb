use crate::constants::TIMESTAMP_HUE_RATE;

/// How a renderer colors trail segments.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StrokeHue {
    /// One stable hue per contact, from its first-seen ordinal.
    #[default]
    PerIdentity,
    /// Hue cycles with the newer point's timestamp, independent of contact.
    Timestamp,
}

#[inline]
pub fn hue_for_ordinal(ordinal: u64, step_degrees: f32) -> f32 {
    let h = ((ordinal as f64) * step_degrees as f64).rem_euclid(360.0);
    h as f32
}

#[inline]
pub fn hue_for_timestamp(timestamp_ms: u64) -> f32 {
    ((timestamp_ms as f64 * TIMESTAMP_HUE_RATE) % 360.0) as f32
}

/// Convert hue (degrees), saturation and brightness (both 0..=100) to RGB in 0..=1.
pub fn hsb_to_rgb(hue: f32, saturation: f32, brightness: f32) -> [f32; 3] {
    let h = hue.rem_euclid(360.0) / 60.0;
    let s = (saturation / 100.0).clamp(0.0, 1.0);
    let v = (brightness / 100.0).clamp(0.0, 1.0);
    let c = v * s;
    let x = c * (1.0 - ((h % 2.0) - 1.0).abs());
    let m = v - c;
    let (r, g, b) = match h as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    [r + m, g + m, b + m]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: [f32; 3], b: [f32; 3]) -> bool {
        a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() < 1e-4)
    }

    #[test]
    fn ordinal_hue_wraps_at_360() {
        assert_eq!(hue_for_ordinal(0, 90.0), 0.0);
        assert_eq!(hue_for_ordinal(3, 90.0), 270.0);
        assert_eq!(hue_for_ordinal(4, 90.0), 0.0);
        assert!((hue_for_ordinal(5, 137.5) - 327.5).abs() < 1e-3);
    }

    #[test]
    fn timestamp_hue_cycles_every_3600_ms() {
        assert_eq!(hue_for_timestamp(0), 0.0);
        assert!((hue_for_timestamp(1800) - 180.0).abs() < 1e-3);
        assert!(hue_for_timestamp(3600).abs() < 1e-3);
    }

    #[test]
    fn hsb_primaries() {
        assert!(close(hsb_to_rgb(0.0, 100.0, 100.0), [1.0, 0.0, 0.0]));
        assert!(close(hsb_to_rgb(120.0, 100.0, 100.0), [0.0, 1.0, 0.0]));
        assert!(close(hsb_to_rgb(240.0, 100.0, 100.0), [0.0, 0.0, 1.0]));
        assert!(close(hsb_to_rgb(360.0, 100.0, 100.0), [1.0, 0.0, 0.0]));
        assert!(close(hsb_to_rgb(42.0, 0.0, 50.0), [0.5, 0.5, 0.5]));
    }
}
