use crate::{
    assets::frames::FrameStore,
    assets::video::VideoSource,
    compose::compositor::Compositor,
    compose::surface::CompositeSurface,
    mapping::mapper::{ProgressMapper, RenderParameters, sanitize_progress},
    scroll::timeline::ScrollEvent,
    session::display::{DisplayMode, DisplayState},
    session::zoom::{FullscreenZoom, FullscreenZoomConfig},
};

/// What a render tick did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// The surface was fully redrawn.
    Drawn,
    /// Fullscreen mode; compositing was skipped.
    SkippedFullscreen,
    /// Frame or video not available yet; the surface was left untouched.
    NotReady,
}

/// Scroll-synchronized door player.
///
/// Progress events update the stored [`RenderParameters`]; render ticks
/// reuse the most recent ones, so video frames keep refreshing between
/// scroll events. Ticks run to completion on the caller's thread and a tick
/// that the caller drops is simply never drawn.
#[derive(Clone, Debug)]
pub struct ScrollPlayer {
    mapper: ProgressMapper,
    compositor: Compositor,
    progress: f64,
    params: RenderParameters,
    display: DisplayState,
    zoom: FullscreenZoom,
}

impl ScrollPlayer {
    /// Build a player resting at progress 0 in windowed mode.
    pub fn new(
        mapper: ProgressMapper,
        compositor: Compositor,
        zoom: FullscreenZoomConfig,
    ) -> Self {
        let params = mapper.map(0.0);
        Self {
            mapper,
            compositor,
            progress: 0.0,
            params,
            display: DisplayState::default(),
            zoom: FullscreenZoom::new(zoom),
        }
    }

    /// Feed one progress-source event.
    pub fn handle(&mut self, event: ScrollEvent) {
        match event {
            ScrollEvent::Update(p) => self.set_progress(p),
            ScrollEvent::Leave => {
                self.display.force(DisplayMode::Fullscreen, self.progress);
            }
            ScrollEvent::EnterBack => {
                self.display.force(DisplayMode::Windowed, self.progress);
            }
            ScrollEvent::Enter | ScrollEvent::LeaveBack => {
                tracing::trace!(?event, "boundary event without display effect");
            }
        }
    }

    /// Recompute parameters for `progress`.
    pub fn set_progress(&mut self, progress: f64) {
        let p = sanitize_progress(progress);
        self.progress = p;
        self.params = self.mapper.map(p);
        self.zoom.observe(p);
        self.display.apply_threshold(p, self.params.fullscreen);
    }

    /// Run one render tick.
    ///
    /// Advances the fullscreen zoom by `dt_secs`, then composites into
    /// `surface` unless the player is fullscreen or an input is missing.
    pub fn render_tick(
        &mut self,
        dt_secs: f64,
        frames: &dyn FrameStore,
        video: &dyn VideoSource,
        surface: &mut CompositeSurface,
    ) -> TickOutcome {
        self.zoom.tick(dt_secs);

        if self.display.mode() == DisplayMode::Fullscreen {
            return TickOutcome::SkippedFullscreen;
        }
        if !frames.is_ready() {
            tracing::trace!("frame store not ready");
            return TickOutcome::NotReady;
        }
        let Some(frame) = frames.get(self.params.frame_index) else {
            tracing::trace!(index = self.params.frame_index, "frame not ready");
            return TickOutcome::NotReady;
        };
        let Some(background) = video.current_frame() else {
            tracing::trace!("video frame not ready");
            return TickOutcome::NotReady;
        };

        self.compositor
            .render(frame, &self.params, background, surface);
        TickOutcome::Drawn
    }

    /// Draw the raw video with the fullscreen zoom, as shown in fullscreen mode.
    ///
    /// Returns `false` (surface untouched) when the video has no frame yet.
    pub fn present_fullscreen(
        &self,
        video: &dyn VideoSource,
        surface: &mut CompositeSurface,
    ) -> bool {
        let Some(background) = video.current_frame() else {
            return false;
        };
        self.compositor
            .draw_background(background, self.zoom.scale(), surface);
        true
    }

    /// Last applied progress.
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Parameters the next tick will use.
    pub fn params(&self) -> &RenderParameters {
        &self.params
    }

    /// Current display mode.
    pub fn mode(&self) -> DisplayMode {
        self.display.mode()
    }

    /// Current fullscreen video scale.
    pub fn zoom_scale(&self) -> f64 {
        self.zoom.scale()
    }

    /// Mapper in use.
    pub fn mapper(&self) -> &ProgressMapper {
        &self.mapper
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/player.rs"]
mod tests;
