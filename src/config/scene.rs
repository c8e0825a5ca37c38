use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use rayon::prelude::*;

use crate::{
    assets::decode::{Bitmap, load_image},
    assets::frames::FrameSet,
    assets::video::LoopingVideo,
    compose::compositor::Compositor,
    compose::sample::Sampling,
    foundation::core::{Canvas, Rgba8Premul},
    foundation::error::{DoorError, DoorResult},
    mapping::config::MappingConfig,
    mapping::mapper::ProgressMapper,
    scroll::timeline::{ScrollConfig, ScrollTimeline},
    session::player::ScrollPlayer,
    session::zoom::FullscreenZoomConfig,
};

/// JSON-facing description of a door scene.
///
/// Relative directories are resolved against the directory that holds the
/// config file (see [`SceneConfig::from_path`]).
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SceneConfig {
    /// Output surface size.
    pub canvas: Canvas,
    /// Door sprite frames.
    pub frames: FramesConfig,
    /// Looping background video.
    pub video: VideoConfig,
    /// Progress mapping constants.
    #[serde(default)]
    pub mapping: MappingConfig,
    /// Scroll region and scrub lag.
    #[serde(default)]
    pub scroll: ScrollConfig,
    /// Zoom applied to the fullscreen video.
    #[serde(default)]
    pub fullscreen_zoom: FullscreenZoomConfig,
    /// Straight-alpha fallback color.
    #[serde(default = "default_fill_rgba")]
    pub fill_rgba: [u8; 4],
    /// Texture filtering.
    #[serde(default)]
    pub sampling: Sampling,
}

/// Numbered frame files, e.g. `Comp_00001.png`.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FramesConfig {
    /// Directory holding the frames.
    pub dir: PathBuf,
    /// File name prefix.
    #[serde(default = "default_prefix")]
    pub prefix: String,
    /// Zero-padded width of the frame number.
    #[serde(default = "default_digits")]
    pub digits: usize,
    /// File extension without the dot.
    #[serde(default = "default_extension")]
    pub extension: String,
    /// Number of the first file.
    #[serde(default = "default_first_number")]
    pub first_number: u32,
    /// Number of frames.
    #[serde(default = "default_count")]
    pub count: usize,
}

/// Directory of images played back as a looping video.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VideoConfig {
    /// Directory holding the video frames, played in file-name order.
    pub dir: PathBuf,
    /// Playback rate.
    #[serde(default = "default_fps")]
    pub fps: f64,
    /// Request muted autoplay at startup.
    #[serde(default = "default_true")]
    pub autoplay_muted: bool,
}

fn default_fill_rgba() -> [u8; 4] {
    [0, 0, 0, 255]
}

fn default_prefix() -> String {
    "Comp_".to_string()
}

fn default_digits() -> usize {
    5
}

fn default_extension() -> String {
    "png".to_string()
}

fn default_first_number() -> u32 {
    1
}

fn default_count() -> usize {
    37
}

fn default_fps() -> f64 {
    30.0
}

fn default_true() -> bool {
    true
}

impl FramesConfig {
    /// Frame file paths in order, resolved against `root`.
    pub fn paths(&self, root: &Path) -> Vec<PathBuf> {
        let dir = root.join(&self.dir);
        (0..self.count)
            .map(|i| {
                let n = u64::from(self.first_number) + i as u64;
                dir.join(format!(
                    "{}{:0width$}.{}",
                    self.prefix,
                    n,
                    self.extension,
                    width = self.digits
                ))
            })
            .collect()
    }
}

impl SceneConfig {
    /// Parse a scene from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> DoorResult<Self> {
        serde_json::from_reader(r).map_err(|e| DoorError::serde(format!("parse scene JSON: {e}")))
    }

    /// Parse a scene from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> DoorResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            DoorError::validation(format!("open scene JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check every section.
    pub fn validate(&self) -> DoorResult<()> {
        self.canvas.validate()?;
        if self.frames.count == 0 {
            return Err(DoorError::validation("frames count must be >= 1"));
        }
        if self.frames.extension.is_empty() {
            return Err(DoorError::validation("frames extension must not be empty"));
        }
        if !self.video.fps.is_finite() || self.video.fps <= 0.0 {
            return Err(DoorError::validation("video fps must be finite and > 0"));
        }
        if self.fill_rgba[3] != 255 {
            return Err(DoorError::validation("fill_rgba must be opaque (alpha 255)"));
        }
        self.mapping.validate()?;
        self.scroll.validate()?;
        self.fullscreen_zoom.validate()?;
        Ok(())
    }

    /// Compositor configured with this scene's fill and filtering.
    ///
    /// The fill is always opaque; its alpha is ignored here and rejected by
    /// [`SceneConfig::validate`].
    pub fn compositor(&self) -> Compositor {
        let [r, g, b, _] = self.fill_rgba;
        Compositor::new(Rgba8Premul::from_straight_rgba(r, g, b, 255), self.sampling)
    }

    /// Player over `frame_count` frames.
    pub fn player(&self) -> DoorResult<ScrollPlayer> {
        let mapper = ProgressMapper::new(self.frames.count, self.mapping)?;
        Ok(ScrollPlayer::new(
            mapper,
            self.compositor(),
            self.fullscreen_zoom,
        ))
    }

    /// Progress source over the configured scroll region.
    pub fn timeline(&self) -> DoorResult<ScrollTimeline> {
        ScrollTimeline::new(self.scroll)
    }

    /// Decode the door frames; per-frame failures are logged, not returned.
    pub fn load_frames(&self, root: &Path) -> DoorResult<FrameSet> {
        FrameSet::load_all(&self.frames.paths(root))
    }

    /// Decode the background video frames.
    ///
    /// Unreadable images are logged and skipped; an unreadable directory is
    /// an error.
    #[tracing::instrument(skip(self))]
    pub fn load_video(&self, root: &Path) -> DoorResult<LoopingVideo> {
        let dir = root.join(&self.video.dir);
        let mut paths: Vec<PathBuf> = std::fs::read_dir(&dir)
            .map_err(|e| DoorError::asset(format!("read video dir '{}': {e}", dir.display())))?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| is_image_path(p))
            .collect();
        paths.sort();

        let frames: Vec<Bitmap> = paths
            .par_iter()
            .map(|p| load_image(p))
            .collect::<Vec<_>>()
            .into_iter()
            .filter_map(|res| match res {
                Ok(bmp) => Some(bmp),
                Err(e) => {
                    tracing::warn!(error = %e, "skipping video frame");
                    None
                }
            })
            .collect();
        tracing::debug!(frames = frames.len(), "video frames loaded");

        LoopingVideo::new(frames, self.video.fps)
    }
}

fn is_image_path(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| {
            matches!(
                e.to_ascii_lowercase().as_str(),
                "png" | "jpg" | "jpeg" | "webp" | "bmp"
            )
        })
        .unwrap_or(false)
}

#[cfg(test)]
#[path = "../../tests/unit/config/scene.rs"]
mod tests;
