use std::{fmt, str::FromStr};

use crate::foundation::error::DoorError;

/// Easing curve for tweens, named like scroll-animation eases.
///
/// `powerN` raises time to the `N + 1`th power, so `power1` is quadratic and
/// `power2` cubic, up to `power4`. Accepted names are `none`/`linear`,
/// `powerN` (same as `powerN.out`), `powerN.in`, `powerN.out` and
/// `powerN.inOut`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Ease {
    power: u8,
    phase: Phase,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    In,
    Out,
    InOut,
}

const MAX_POWER: u8 = 4;

impl Ease {
    /// Constant speed.
    pub const LINEAR: Self = Self::new(0, Phase::Out);
    /// Quadratic deceleration.
    pub const POWER1_OUT: Self = Self::new(1, Phase::Out);
    /// Cubic deceleration.
    pub const POWER2_OUT: Self = Self::new(2, Phase::Out);
    /// Quartic deceleration.
    pub const POWER3_OUT: Self = Self::new(3, Phase::Out);

    const fn new(power: u8, phase: Phase) -> Self {
        Self { power, phase }
    }

    /// Map normalized time to normalized value; `t` is clamped to `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = if t.is_nan() { 1.0 } else { t.clamp(0.0, 1.0) };
        let k = i32::from(self.power) + 1;
        match self.phase {
            Phase::In => t.powi(k),
            Phase::Out => 1.0 - (1.0 - t).powi(k),
            Phase::InOut => {
                if t < 0.5 {
                    (2.0 * t).powi(k) / 2.0
                } else {
                    1.0 - (2.0 - 2.0 * t).powi(k) / 2.0
                }
            }
        }
    }
}

impl Default for Ease {
    fn default() -> Self {
        Self::POWER2_OUT
    }
}

impl fmt::Display for Ease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.power == 0 {
            return f.write_str("none");
        }
        let phase = match self.phase {
            Phase::In => "in",
            Phase::Out => "out",
            Phase::InOut => "inOut",
        };
        write!(f, "power{}.{phase}", self.power)
    }
}

impl FromStr for Ease {
    type Err = DoorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if matches!(s, "none" | "linear") {
            return Ok(Self::LINEAR);
        }
        let bad = || DoorError::validation(format!("unknown ease '{s}'"));
        let rest = s.strip_prefix("power").ok_or_else(bad)?;
        let (digits, phase) = match rest.split_once('.') {
            None => (rest, Phase::Out),
            Some((d, "in")) => (d, Phase::In),
            Some((d, "out")) => (d, Phase::Out),
            Some((d, "inOut")) => (d, Phase::InOut),
            Some(_) => return Err(bad()),
        };
        let power: u8 = digits.parse().map_err(|_| bad())?;
        if !(1..=MAX_POWER).contains(&power) {
            return Err(bad());
        }
        Ok(Self::new(power, phase))
    }
}

impl TryFrom<String> for Ease {
    type Error = DoorError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Ease> for String {
    fn from(e: Ease) -> Self {
        e.to_string()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
