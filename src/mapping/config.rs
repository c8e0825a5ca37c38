use crate::foundation::error::{DoorError, DoorResult};

/// Tunable constants for [`crate::ProgressMapper`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MappingConfig {
    /// Door zoom gained over the full scroll (`door_scale = 1 + k * p`).
    pub door_scale_gain: f64,
    /// Background zoom gained over the full scroll.
    pub background_scale_gain: f64,
    /// Upper bound on the background scale.
    pub background_scale_max: f64,
    /// Progress at which the door starts fading out.
    pub fade_threshold: f64,
    /// Progress at which the display switches to the raw video.
    pub fullscreen_threshold: f64,
}

impl Default for MappingConfig {
    fn default() -> Self {
        Self {
            door_scale_gain: 0.2,
            background_scale_gain: 0.3,
            background_scale_max: 1.5,
            fade_threshold: 0.9,
            fullscreen_threshold: 0.98,
        }
    }
}

impl MappingConfig {
    /// Check ranges and the ordering between the two thresholds.
    pub fn validate(&self) -> DoorResult<()> {
        let finite = [
            self.door_scale_gain,
            self.background_scale_gain,
            self.background_scale_max,
            self.fade_threshold,
            self.fullscreen_threshold,
        ]
        .iter()
        .all(|v| v.is_finite());
        if !finite {
            return Err(DoorError::validation("mapping values must be finite"));
        }
        if self.door_scale_gain < 0.0 {
            return Err(DoorError::validation("door_scale_gain must be >= 0"));
        }
        if self.background_scale_gain < 0.0 {
            return Err(DoorError::validation("background_scale_gain must be >= 0"));
        }
        if self.background_scale_max < 1.0 {
            return Err(DoorError::validation("background_scale_max must be >= 1"));
        }
        if !(0.0..1.0).contains(&self.fade_threshold) {
            return Err(DoorError::validation("fade_threshold must be in [0, 1)"));
        }
        if self.fullscreen_threshold < self.fade_threshold || self.fullscreen_threshold > 1.0 {
            return Err(DoorError::validation(
                "fullscreen_threshold must be in [fade_threshold, 1]",
            ));
        }
        Ok(())
    }
}
