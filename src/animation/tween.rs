use crate::animation::ease::Ease;

/// Scalar tween that can be retargeted mid-flight.
///
/// Retargeting restarts from the current value, so the output never jumps.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    from: f64,
    to: f64,
    elapsed: f64,
    duration: f64,
    ease: Ease,
}

impl Tween {
    /// A tween resting at `value`.
    pub fn at_rest(value: f64, ease: Ease) -> Self {
        Self {
            from: value,
            to: value,
            elapsed: 0.0,
            duration: 0.0,
            ease,
        }
    }

    /// Start moving toward `to` over `duration_secs`.
    ///
    /// A non-positive duration jumps straight to `to`.
    pub fn retarget(&mut self, to: f64, duration_secs: f64) {
        let current = self.value();
        self.from = current;
        self.to = to;
        self.elapsed = 0.0;
        self.duration = if duration_secs.is_finite() {
            duration_secs.max(0.0)
        } else {
            0.0
        };
    }

    /// Advance time; negative or non-finite steps are ignored.
    pub fn tick(&mut self, dt_secs: f64) -> f64 {
        if dt_secs.is_finite() && dt_secs > 0.0 {
            self.elapsed = (self.elapsed + dt_secs).min(self.duration);
        }
        self.value()
    }

    /// Current value.
    pub fn value(&self) -> f64 {
        if self.is_done() {
            return self.to;
        }
        let t = self.elapsed / self.duration;
        self.from + (self.to - self.from) * self.ease.apply(t)
    }

    /// Destination value.
    pub fn target(&self) -> f64 {
        self.to
    }

    /// Whether the tween has reached its target.
    pub fn is_done(&self) -> bool {
        self.duration <= 0.0 || self.elapsed >= self.duration
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/tween.rs"]
mod tests;
