use thiserror::Error;

/// Rejected tracker configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("max_age_ms must be greater than zero")]
    ZeroMaxAge,
    #[error("hue_step_degrees must be finite, got {0}")]
    NonFiniteHueStep(f32),
}

/// A single contact record that could not be turned into a trail point.
///
/// These never abort a frame; the tracker skips the record and keeps going.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ContactError {
    #[error("contact {id} is missing its {axis} coordinate")]
    MissingCoordinate { id: u64, axis: Axis },
    #[error("contact {id} has a non-finite {axis} coordinate ({value})")]
    NonFiniteCoordinate { id: u64, axis: Axis, value: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::X => f.write_str("x"),
            Axis::Y => f.write_str("y"),
        }
    }
}
