use crate::{
    animation::ease::Ease,
    animation::tween::Tween,
    foundation::error::{DoorError, DoorResult},
};

/// Extra zoom applied to the fullscreen video near the end of the scroll.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FullscreenZoomConfig {
    /// Progress at which the zoom-in starts (and, going back, the zoom-out).
    pub trigger_progress: f64,
    /// Target scale once triggered.
    pub scale: f64,
    /// Tween length in seconds.
    pub duration_secs: f64,
    /// Tween curve.
    pub ease: Ease,
}

impl Default for FullscreenZoomConfig {
    fn default() -> Self {
        Self {
            trigger_progress: 0.95,
            scale: 1.05,
            duration_secs: 1.0,
            ease: Ease::POWER2_OUT,
        }
    }
}

impl FullscreenZoomConfig {
    /// Check ranges.
    pub fn validate(&self) -> DoorResult<()> {
        if !(0.0..=1.0).contains(&self.trigger_progress) {
            return Err(DoorError::validation(
                "fullscreen_zoom trigger_progress must be in [0, 1]",
            ));
        }
        if !self.scale.is_finite() || self.scale < 1.0 {
            return Err(DoorError::validation("fullscreen_zoom scale must be >= 1"));
        }
        if !self.duration_secs.is_finite() || self.duration_secs < 0.0 {
            return Err(DoorError::validation(
                "fullscreen_zoom duration_secs must be >= 0",
            ));
        }
        Ok(())
    }
}

/// Zoom tween toggled by crossing the trigger progress.
#[derive(Clone, Copy, Debug)]
pub struct FullscreenZoom {
    config: FullscreenZoomConfig,
    engaged: bool,
    tween: Tween,
}

impl FullscreenZoom {
    /// Resting at scale 1.
    pub fn new(config: FullscreenZoomConfig) -> Self {
        Self {
            config,
            engaged: false,
            tween: Tween::at_rest(1.0, config.ease),
        }
    }

    /// React to a new progress value.
    pub fn observe(&mut self, progress: f64) {
        let engaged = progress >= self.config.trigger_progress;
        if engaged == self.engaged {
            return;
        }
        self.engaged = engaged;
        let to = if engaged { self.config.scale } else { 1.0 };
        tracing::debug!(engaged, to, "fullscreen zoom retargeted");
        self.tween.retarget(to, self.config.duration_secs);
    }

    /// Advance the tween.
    pub fn tick(&mut self, dt_secs: f64) {
        self.tween.tick(dt_secs);
    }

    /// Current video scale.
    pub fn scale(&self) -> f64 {
        self.tween.value()
    }

    /// Whether the trigger has been crossed forward.
    pub fn is_engaged(&self) -> bool {
        self.engaged
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/zoom.rs"]
mod tests;
