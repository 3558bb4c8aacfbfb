use crate::constants::{DEFAULT_HUE_STEP_DEGREES, INACTIVITY_TIMEOUT_MS, MAX_AGE_MS};
use crate::error::ConfigError;

/// How a contact record is turned into a [`TouchId`](crate::TouchId).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IdentityMode {
    /// Key trails by the device-assigned contact id. Stable while a finger
    /// stays down, regardless of which other fingers lift.
    #[default]
    Persistent,
    /// Key trails by the contact's position in the frame. Matches sketches
    /// that index `touches[i]` directly; trails jump between fingers when
    /// they lift out of landing order.
    Slot,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TrackerConfig {
    pub max_age_ms: u64,
    pub inactivity_timeout_ms: u64,
    pub hue_step_degrees: f32,
    pub identity_mode: IdentityMode,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            max_age_ms: MAX_AGE_MS,
            inactivity_timeout_ms: INACTIVITY_TIMEOUT_MS,
            hue_step_degrees: DEFAULT_HUE_STEP_DEGREES,
            identity_mode: IdentityMode::Persistent,
        }
    }
}

impl TrackerConfig {
    pub fn with_max_age_ms(mut self, max_age_ms: u64) -> Self {
        self.max_age_ms = max_age_ms;
        self
    }

    pub fn with_inactivity_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.inactivity_timeout_ms = timeout_ms;
        self
    }

    pub fn with_hue_step_degrees(mut self, step: f32) -> Self {
        self.hue_step_degrees = step;
        self
    }

    pub fn with_identity_mode(mut self, mode: IdentityMode) -> Self {
        self.identity_mode = mode;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_age_ms == 0 {
            return Err(ConfigError::ZeroMaxAge);
        }
        if !self.hue_step_degrees.is_finite() {
            return Err(ConfigError::NonFiniteHueStep(self.hue_step_degrees));
        }
        Ok(())
    }
}
