use crate::error::ConfigError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Named ease-out curves for heart motion.
///
/// Each maps `[0, 1]` onto `[0, 1]`, is non-decreasing, and satisfies
/// `apply(0) == 0` and `apply(1) == 1`. Higher powers decelerate more sharply.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub enum Easing {
    #[default]
    EaseOutQuad,
    EaseOutCubic,
    EaseOutQuart,
    EaseOutQuint,
}

impl Easing {
    pub const ALL: [Easing; 4] = [
        Easing::EaseOutQuad,
        Easing::EaseOutCubic,
        Easing::EaseOutQuart,
        Easing::EaseOutQuint,
    ];

    /// Name used in the page configuration (`EASING`).
    pub fn name(self) -> &'static str {
        match self {
            Easing::EaseOutQuad => "easeOutQuad",
            Easing::EaseOutCubic => "easeOutCubic",
            Easing::EaseOutQuart => "easeOutQuart",
            Easing::EaseOutQuint => "easeOutQuint",
        }
    }

    fn power(self) -> i32 {
        match self {
            Easing::EaseOutQuad => 2,
            Easing::EaseOutCubic => 3,
            Easing::EaseOutQuart => 4,
            Easing::EaseOutQuint => 5,
        }
    }

    /// Eased progress for linear progress `t` (clamped to `[0, 1]`).
    #[inline]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        1.0 - (1.0 - t).powi(self.power())
    }
}

impl FromStr for Easing {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Easing::ALL
            .into_iter()
            .find(|e| e.name() == s)
            .ok_or_else(|| ConfigError::UnknownEasing(s.to_string()))
    }
}

impl From<Easing> for String {
    fn from(value: Easing) -> Self {
        value.name().to_string()
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
