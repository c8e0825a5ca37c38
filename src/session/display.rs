/// Which view is presented.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DisplayMode {
    /// Composited canvas visible.
    #[default]
    Windowed,
    /// Raw video visible, compositing paused.
    Fullscreen,
}

impl DisplayMode {
    fn from_flag(fullscreen: bool) -> Self {
        if fullscreen {
            Self::Fullscreen
        } else {
            Self::Windowed
        }
    }
}

/// Windowed/fullscreen state machine.
///
/// Threshold results switch the mode directly. A boundary override switches
/// immediately and holds only while progress stays at the value it arrived
/// with. The first update that moves on in the crossing direction (rising
/// after a forward exit, falling after a backward re-entry) releases it, so
/// the same progress always maps to the same mode in both scroll directions.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DisplayState {
    mode: DisplayMode,
    held: Option<Hold>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Hold {
    mode: DisplayMode,
    at: f64,
}

impl Hold {
    fn released_by(&self, progress: f64) -> bool {
        match self.mode {
            DisplayMode::Fullscreen => progress > self.at,
            DisplayMode::Windowed => progress < self.at,
        }
    }
}

impl DisplayState {
    /// Current mode.
    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    /// Whether an override is still holding the mode.
    pub fn is_overridden(&self) -> bool {
        self.held.is_some()
    }

    /// Apply the threshold result for `progress`; returns the new mode if it changed.
    pub fn apply_threshold(&mut self, progress: f64, fullscreen: bool) -> Option<DisplayMode> {
        if let Some(hold) = self.held {
            if !hold.released_by(progress) {
                return None;
            }
            tracing::debug!(mode = ?hold.mode, progress, "boundary override released");
            self.held = None;
        }
        self.set(DisplayMode::from_flag(fullscreen))
    }

    /// Force a mode from an explicit boundary event seen at `progress`;
    /// returns the new mode if it changed.
    pub fn force(&mut self, mode: DisplayMode, progress: f64) -> Option<DisplayMode> {
        self.held = Some(Hold { mode, at: progress });
        self.set(mode)
    }

    fn set(&mut self, mode: DisplayMode) -> Option<DisplayMode> {
        if self.mode == mode {
            return None;
        }
        tracing::debug!(from = ?self.mode, to = ?mode, "display mode changed");
        self.mode = mode;
        Some(mode)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/display.rs"]
mod tests;
