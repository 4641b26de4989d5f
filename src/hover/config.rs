//! Tracker configuration
//!
//! Passed from JavaScript as an optional plain object; every field has a
//! default so `{}` / `undefined` are both valid.

use serde::{Deserialize, Serialize};
use crate::error::HoverError;

/// Horizontal gap between the play control and the paragraph text, in px
pub const DEFAULT_PLAY_CONTROL_OFFSET: f64 = 40.0;

/// Text written into the measurement probe
pub const DEFAULT_SAMPLE_TEXT: &str = "Sample text";

/// Which candidate wins when several rectangles contain the pointer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchPolicy {
    /// Last match in list order (every match overwrites the previous one)
    #[default]
    Last,
    /// First match in list order; the scan stops there
    First,
}

/// What happens when the pointer moves off every candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeavePolicy {
    /// Keep the last published value
    #[default]
    Retain,
    /// Publish `null` once the pointer is over no candidate
    Clear,
}

/// Configuration for a hover tracker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TrackerConfig {
    /// Subtracted from the candidate's left edge when positioning the control
    pub play_control_offset: f64,

    pub match_policy: MatchPolicy,

    pub leave_policy: LeavePolicy,

    /// Text used when measuring the first-line height
    pub sample_text: String,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            play_control_offset: DEFAULT_PLAY_CONTROL_OFFSET,
            match_policy: MatchPolicy::default(),
            leave_policy: LeavePolicy::default(),
            sample_text: DEFAULT_SAMPLE_TEXT.to_string(),
        }
    }
}

impl TrackerConfig {
    pub fn validate(&self) -> Result<(), HoverError> {
        if !self.play_control_offset.is_finite() {
            return Err(HoverError::InvalidConfig(format!(
                "playControlOffset must be finite, got {}",
                self.play_control_offset
            )));
        }
        // An empty probe has no line box to measure
        if self.sample_text.is_empty() {
            return Err(HoverError::InvalidConfig(
                "sampleText must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
