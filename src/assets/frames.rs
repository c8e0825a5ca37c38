use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::{
    assets::decode::{Bitmap, load_image},
    foundation::error::{DoorError, DoorResult},
};

/// Indexed bitmap lookup used by the render loop.
pub trait FrameStore {
    /// Number of slots (loaded or not).
    fn len(&self) -> usize;

    /// Whether the store has no slots at all.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the store can serve frames at all.
    fn is_ready(&self) -> bool;

    /// Bitmap at `index`, or `None` when that slot is not ready.
    fn get(&self, index: usize) -> Option<&Bitmap>;
}

/// One asset that could not be turned into a frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadFailure {
    /// Slot index the asset was meant to fill.
    pub index: usize,
    /// Source path.
    pub path: PathBuf,
    /// Human-readable reason.
    pub reason: String,
}

/// Outcome of [`FrameSet::load_all`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Number of slots that hold a bitmap.
    pub loaded: usize,
    /// Per-asset failures, ordered by index.
    pub failed: Vec<LoadFailure>,
}

/// Ordered, immutable set of equally sized door frames.
#[derive(Clone, Debug)]
pub struct FrameSet {
    slots: Vec<Option<Bitmap>>,
    size: Option<(u32, u32)>,
    report: LoadReport,
}

impl FrameSet {
    /// Build a frame set from in-memory bitmaps; `None` marks a missing slot.
    ///
    /// All present bitmaps must share one size.
    pub fn from_bitmaps(slots: Vec<Option<Bitmap>>) -> DoorResult<Self> {
        if slots.is_empty() {
            return Err(DoorError::validation("frame set must have at least one slot"));
        }
        let mut size = None;
        for (i, bmp) in slots.iter().enumerate() {
            let Some(bmp) = bmp else { continue };
            let dims = (bmp.width(), bmp.height());
            match size {
                None => size = Some(dims),
                Some(s) if s != dims => {
                    return Err(DoorError::validation(format!(
                        "frame {i} is {}x{}, expected {}x{}",
                        dims.0, dims.1, s.0, s.1
                    )));
                }
                Some(_) => {}
            }
        }
        let report = LoadReport {
            loaded: slots.iter().filter(|s| s.is_some()).count(),
            failed: Vec::new(),
        };
        Ok(Self {
            slots,
            size,
            report,
        })
    }

    /// Decode every path in parallel.
    ///
    /// A failing asset is logged and leaves its slot empty; the remaining
    /// assets are still loaded. Bitmaps whose size differs from the first
    /// loaded frame are rejected the same way.
    #[tracing::instrument(skip(paths), fields(count = paths.len()))]
    pub fn load_all(paths: &[PathBuf]) -> DoorResult<Self> {
        if paths.is_empty() {
            return Err(DoorError::validation("frame set must have at least one path"));
        }

        let decoded: Vec<DoorResult<Bitmap>> =
            paths.par_iter().map(|p| load_image(p.as_path())).collect();

        let mut slots = Vec::with_capacity(paths.len());
        let mut failed = Vec::new();
        let mut size: Option<(u32, u32)> = None;

        for (index, (path, res)) in paths.iter().zip(decoded).enumerate() {
            let bmp = match res {
                Ok(bmp) => bmp,
                Err(e) => {
                    failed.push(fail(index, path, e.to_string()));
                    slots.push(None);
                    continue;
                }
            };
            let dims = (bmp.width(), bmp.height());
            match size {
                Some(s) if s != dims => {
                    let reason = format!(
                        "frame is {}x{}, expected {}x{}",
                        dims.0, dims.1, s.0, s.1
                    );
                    failed.push(fail(index, path, reason));
                    slots.push(None);
                }
                _ => {
                    size = Some(dims);
                    slots.push(Some(bmp));
                }
            }
        }

        let report = LoadReport {
            loaded: slots.iter().filter(|s| s.is_some()).count(),
            failed,
        };
        tracing::debug!(
            loaded = report.loaded,
            failed = report.failed.len(),
            "frame set loaded"
        );
        Ok(Self {
            slots,
            size,
            report,
        })
    }

    /// Shared frame size, if any frame loaded.
    pub fn frame_size(&self) -> Option<(u32, u32)> {
        self.size
    }

    /// What happened during loading.
    pub fn report(&self) -> &LoadReport {
        &self.report
    }
}

fn fail(index: usize, path: &Path, reason: String) -> LoadFailure {
    tracing::warn!(index, path = %path.display(), %reason, "failed to load frame");
    LoadFailure {
        index,
        path: path.to_path_buf(),
        reason,
    }
}

impl FrameStore for FrameSet {
    fn len(&self) -> usize {
        self.slots.len()
    }

    fn is_ready(&self) -> bool {
        self.report.loaded > 0
    }

    fn get(&self, index: usize) -> Option<&Bitmap> {
        self.slots.get(index).and_then(Option::as_ref)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/frames.rs"]
mod tests;
