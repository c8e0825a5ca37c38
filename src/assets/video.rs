use crate::{
    assets::decode::Bitmap,
    foundation::error::{DoorError, DoorResult},
};

/// Live background frames consumed by the compositor.
///
/// Each read returns whatever frame the source currently presents; the
/// compositor never drives playback beyond the startup request for muted
/// autoplay.
pub trait VideoSource {
    /// Currently presented frame, or `None` before the first frame exists.
    fn current_frame(&self) -> Option<&Bitmap>;

    /// Resume playback.
    fn play(&mut self);

    /// Freeze on the current frame.
    fn pause(&mut self);

    /// Set the mute flag.
    fn set_muted(&mut self, muted: bool);
}

/// Looping image-sequence video.
#[derive(Clone, Debug)]
pub struct LoopingVideo {
    frames: Vec<Bitmap>,
    fps: f64,
    position_secs: f64,
    playing: bool,
    muted: bool,
}

impl LoopingVideo {
    /// Build a paused, unmuted video over `frames` at `fps`.
    pub fn new(frames: Vec<Bitmap>, fps: f64) -> DoorResult<Self> {
        if !fps.is_finite() || fps <= 0.0 {
            return Err(DoorError::validation("video fps must be finite and > 0"));
        }
        Ok(Self {
            frames,
            fps,
            position_secs: 0.0,
            playing: false,
            muted: false,
        })
    }

    /// Advance the playhead by `dt_secs` while playing, wrapping at the end.
    pub fn advance(&mut self, dt_secs: f64) {
        if !self.playing || self.frames.is_empty() || !dt_secs.is_finite() || dt_secs <= 0.0 {
            return;
        }
        let duration = self.frames.len() as f64 / self.fps;
        self.position_secs = (self.position_secs + dt_secs).rem_euclid(duration);
    }

    /// Index of the presented frame.
    pub fn frame_index(&self) -> usize {
        if self.frames.is_empty() {
            return 0;
        }
        ((self.position_secs * self.fps).floor() as usize).min(self.frames.len() - 1)
    }

    /// Whether playback is running.
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Whether audio is muted.
    pub fn is_muted(&self) -> bool {
        self.muted
    }
}

impl VideoSource for LoopingVideo {
    fn current_frame(&self) -> Option<&Bitmap> {
        self.frames.get(self.frame_index())
    }

    fn play(&mut self) {
        self.playing = true;
    }

    fn pause(&mut self) {
        self.playing = false;
    }

    fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }
}

/// Ask a source for muted autoplay, the only playback request the player makes.
pub fn start_muted_autoplay(video: &mut dyn VideoSource) {
    video.set_muted(true);
    video.play();
    tracing::debug!("requested muted autoplay");
}

#[cfg(test)]
#[path = "../../tests/unit/assets/video.rs"]
mod tests;
