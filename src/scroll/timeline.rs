use crate::{
    animation::ease::Ease,
    animation::tween::Tween,
    foundation::error::{DoorError, DoorResult},
    mapping::mapper::sanitize_progress,
};

/// Notification from a progress source.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScrollEvent {
    /// Reported progress changed.
    Update(f64),
    /// Scrolled forward into the region from before its start.
    Enter,
    /// Scrolled forward past the end of the region.
    Leave,
    /// Scrolled backward into the region from past its end.
    EnterBack,
    /// Scrolled backward out through the start of the region.
    LeaveBack,
}

/// Handle returned by [`ProgressSource::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

/// Callback invoked for every event.
pub type ScrollListener = Box<dyn FnMut(ScrollEvent)>;

/// Anything that reports scroll progress in `[0, 1]` with change notifications.
pub trait ProgressSource {
    /// Register a listener.
    fn subscribe(&mut self, listener: ScrollListener) -> Subscription;

    /// Remove a listener; returns whether it was registered.
    fn unsubscribe(&mut self, subscription: Subscription) -> bool;

    /// Most recently reported progress.
    fn progress(&self) -> f64;
}

/// Scroll region bounds and scrub lag.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScrollConfig {
    /// Scroll offset where progress is 0.
    pub start: f64,
    /// Scroll offset where progress is 1.
    pub end: f64,
    /// Seconds the reported progress takes to catch up; 0 tracks directly.
    pub scrub_secs: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            start: 0.0,
            end: 1.0,
            scrub_secs: 1.0,
        }
    }
}

impl ScrollConfig {
    /// Check that the region is non-empty and the lag is sane.
    pub fn validate(&self) -> DoorResult<()> {
        if !self.start.is_finite() || !self.end.is_finite() {
            return Err(DoorError::validation("scroll start/end must be finite"));
        }
        if self.end <= self.start {
            return Err(DoorError::validation("scroll end must be > start"));
        }
        if !self.scrub_secs.is_finite() || self.scrub_secs < 0.0 {
            return Err(DoorError::validation("scroll scrub_secs must be >= 0"));
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Region {
    Before,
    Inside,
    After,
}

/// In-process progress source driven by a scroll offset.
///
/// Boundary events fire as soon as the offset crosses the region edges.
/// Progress updates fire when the reported value changes, either directly
/// from [`ScrollTimeline::set_scroll`] or, when scrubbing, from
/// [`ScrollTimeline::tick`].
pub struct ScrollTimeline {
    config: ScrollConfig,
    scroll: f64,
    region: Region,
    reported: Tween,
    last_emitted: f64,
    listeners: Vec<(Subscription, ScrollListener)>,
    next_id: u64,
}

impl std::fmt::Debug for ScrollTimeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollTimeline")
            .field("config", &self.config)
            .field("scroll", &self.scroll)
            .field("region", &self.region)
            .field("progress", &self.last_emitted)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl ScrollTimeline {
    /// Start at the top of the region with progress 0.
    pub fn new(config: ScrollConfig) -> DoorResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            scroll: config.start,
            region: Region::Inside,
            reported: Tween::at_rest(0.0, Ease::POWER2_OUT),
            last_emitted: 0.0,
            listeners: Vec::new(),
            next_id: 0,
        })
    }

    /// Region bounds and lag in use.
    pub fn config(&self) -> &ScrollConfig {
        &self.config
    }

    /// Current scroll offset.
    pub fn scroll(&self) -> f64 {
        self.scroll
    }

    /// Progress implied by the scroll offset, before any scrub lag.
    pub fn raw_progress(&self) -> f64 {
        sanitize_progress((self.scroll - self.config.start) / (self.config.end - self.config.start))
    }

    /// Move the scroll offset. Non-finite offsets are ignored.
    pub fn set_scroll(&mut self, offset: f64) {
        if !offset.is_finite() {
            tracing::trace!(offset, "ignoring non-finite scroll offset");
            return;
        }
        self.scroll = offset;

        let next = self.region_of(offset);
        for ev in boundary_events(self.region, next) {
            self.emit(*ev);
        }
        self.region = next;

        let raw = self.raw_progress();
        if self.config.scrub_secs > 0.0 {
            self.reported.retarget(raw, self.config.scrub_secs);
        } else {
            self.reported = Tween::at_rest(raw, Ease::POWER2_OUT);
            self.emit_progress();
        }
    }

    /// Advance the scrub lag by `dt_secs`.
    pub fn tick(&mut self, dt_secs: f64) {
        self.reported.tick(dt_secs);
        self.emit_progress();
    }

    /// Whether the reported progress has caught up with the scroll offset.
    pub fn is_settled(&self) -> bool {
        self.reported.is_done()
    }

    fn region_of(&self, offset: f64) -> Region {
        if offset < self.config.start {
            Region::Before
        } else if offset > self.config.end {
            Region::After
        } else {
            Region::Inside
        }
    }

    fn emit_progress(&mut self) {
        let p = sanitize_progress(self.reported.value());
        if p != self.last_emitted {
            self.last_emitted = p;
            self.emit(ScrollEvent::Update(p));
        }
    }

    fn emit(&mut self, ev: ScrollEvent) {
        if !matches!(ev, ScrollEvent::Update(_)) {
            tracing::debug!(?ev, scroll = self.scroll, "scroll boundary crossed");
        }
        for (_, listener) in &mut self.listeners {
            listener(ev);
        }
    }
}

fn boundary_events(from: Region, to: Region) -> &'static [ScrollEvent] {
    use Region::*;
    use ScrollEvent::*;
    match (from, to) {
        (Before, Inside) => &[Enter],
        (Before, After) => &[Enter, Leave],
        (Inside, After) => &[Leave],
        (Inside, Before) => &[LeaveBack],
        (After, Inside) => &[EnterBack],
        (After, Before) => &[EnterBack, LeaveBack],
        (Before, Before) | (Inside, Inside) | (After, After) => &[],
    }
}

impl ProgressSource for ScrollTimeline {
    fn subscribe(&mut self, listener: ScrollListener) -> Subscription {
        let sub = Subscription(self.next_id);
        self.next_id += 1;
        self.listeners.push((sub, listener));
        sub
    }

    fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(s, _)| *s != subscription);
        self.listeners.len() != before
    }

    fn progress(&self) -> f64 {
        self.last_emitted
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/timeline.rs"]
mod tests;
