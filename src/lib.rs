//! doorscroll composites a scroll-driven door animation over a looping
//! background video.
//!
//! A sprite sheet of a door opening is drawn on top of the video so the
//! video shows only through the door's transparent regions. As scroll
//! progress approaches the end of the region the door zooms, fades out and
//! the view hands over to the raw fullscreen video.
//!
//! # Pipeline overview
//!
//! 1. **Progress**: a [`ProgressSource`] (e.g. [`ScrollTimeline`]) reports
//!    progress in `[0, 1]` plus region boundary events.
//! 2. **Map**: [`ProgressMapper`] turns progress into [`RenderParameters`]
//!    (frame index, door scale/opacity, background zoom, fullscreen flag).
//! 3. **Composite**: every render tick, [`Compositor`] masks the background
//!    through the sprite's alpha and draws the sprite on top into a
//!    [`CompositeSurface`].
//!
//! [`ScrollPlayer`] ties these together and owns the windowed/fullscreen
//! state machine.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: mapping and compositing are pure; identical inputs
//!   give identical pixels.
//! - **No IO in the render loop**: decoding is front-loaded in [`FrameSet`]
//!   and [`SceneConfig::load_video`].
//! - **Premultiplied RGBA8** end-to-end.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod assets;
mod compose;
mod config;
mod foundation;
mod mapping;
mod scroll;
mod session;

pub use animation::ease::Ease;
pub use animation::tween::Tween;
pub use assets::decode::{Bitmap, decode_image, load_image};
pub use assets::frames::{FrameSet, FrameStore, LoadFailure, LoadReport};
pub use assets::video::{LoopingVideo, VideoSource, start_muted_autoplay};
pub use compose::compositor::{Compositor, door_rect};
pub use compose::pixel::{PremulRgba8, mask, over};
pub use compose::sample::{Sampling, sample};
pub use compose::surface::CompositeSurface;
pub use config::scene::{FramesConfig, SceneConfig, VideoConfig};
pub use foundation::core::{Affine, Canvas, Point, Rect, Rgba8Premul, Vec2};
pub use foundation::error::{DoorError, DoorResult};
pub use mapping::config::MappingConfig;
pub use mapping::mapper::{ProgressMapper, RenderParameters, sanitize_progress};
pub use scroll::timeline::{
    ProgressSource, ScrollConfig, ScrollEvent, ScrollListener, ScrollTimeline, Subscription,
};
pub use session::display::{DisplayMode, DisplayState};
pub use session::player::{ScrollPlayer, TickOutcome};
pub use session::zoom::{FullscreenZoom, FullscreenZoomConfig};
