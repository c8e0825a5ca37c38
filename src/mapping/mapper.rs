use crate::{
    foundation::error::{DoorError, DoorResult},
    foundation::math::finite_clamp,
    mapping::config::MappingConfig,
};

/// Everything the compositor needs for one draw, derived from scroll progress.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderParameters {
    /// Index into the frame set, always within `[0, N-1]`.
    pub frame_index: usize,
    /// Door sprite scale, `>= 1`.
    pub door_scale: f64,
    /// Global door opacity in `[0, 1]`.
    pub door_opacity: f64,
    /// Background zoom about the surface center, `>= 1`.
    pub background_scale: f64,
    /// Whether the raw video should replace the composited view.
    pub fullscreen: bool,
}

/// Pure mapping from scroll progress to [`RenderParameters`].
#[derive(Clone, Copy, Debug)]
pub struct ProgressMapper {
    frame_count: usize,
    config: MappingConfig,
}

impl ProgressMapper {
    /// Build a mapper for a frame set of `frame_count` bitmaps.
    pub fn new(frame_count: usize, config: MappingConfig) -> DoorResult<Self> {
        if frame_count == 0 {
            return Err(DoorError::validation("frame_count must be >= 1"));
        }
        config.validate()?;
        Ok(Self {
            frame_count,
            config,
        })
    }

    /// Number of frames this mapper distributes progress over.
    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    /// Constants in use.
    pub fn config(&self) -> &MappingConfig {
        &self.config
    }

    /// Map `progress` to render parameters.
    ///
    /// Values outside `[0, 1]` are clamped; NaN and infinities map as `0`.
    pub fn map(&self, progress: f64) -> RenderParameters {
        let p = sanitize_progress(progress);
        let c = &self.config;

        let last = (self.frame_count - 1) as f64;
        let frame_index = ((p * last).round().max(0.0) as usize).min(self.frame_count - 1);

        let door_scale = 1.0 + c.door_scale_gain * p;

        let door_opacity = if p < c.fade_threshold {
            1.0
        } else {
            (1.0 - (p - c.fade_threshold) / (1.0 - c.fade_threshold)).clamp(0.0, 1.0)
        };

        let background_scale = (1.0 + c.background_scale_gain * p).min(c.background_scale_max);

        RenderParameters {
            frame_index,
            door_scale,
            door_opacity,
            background_scale,
            fullscreen: p >= c.fullscreen_threshold,
        }
    }
}

/// Clamp progress into `[0, 1]`, treating non-finite input as `0`.
pub fn sanitize_progress(progress: f64) -> f64 {
    finite_clamp(progress, 0.0, 1.0, 0.0)
}

#[cfg(test)]
#[path = "../../tests/unit/mapping/mapper.rs"]
mod tests;
