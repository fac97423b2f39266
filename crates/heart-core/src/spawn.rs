use crate::config::HeartConfig;
use crate::constants::MOBILE_BREAKPOINT_PX;
use glam::DVec2;
use rand::seq::SliceRandom;
use rand::Rng;

/// Static look of a heart, fixed at spawn.
#[derive(Clone, Debug, PartialEq)]
pub struct HeartVisual {
    pub position: DVec2,
    pub color: String,
    /// Edge length in CSS pixels.
    pub size: f64,
}

impl HeartVisual {
    /// Random palette color and size within the configured bounds.
    pub fn random<R: Rng + ?Sized>(position: DVec2, config: &HeartConfig, rng: &mut R) -> Self {
        let color = config
            .heart_colors
            .choose(rng)
            .cloned()
            .unwrap_or_default();
        let bounds = &config.heart_size;
        let size = bounds.min + rng.gen::<f64>() * (bounds.max - bounds.min);
        Self {
            position,
            color,
            size,
        }
    }
}

/// Hearts per activation for a viewport of `viewport_width` CSS pixels.
#[inline]
pub fn heart_count(config: &HeartConfig, viewport_width: f64) -> u32 {
    if viewport_width < MOBILE_BREAKPOINT_PX {
        config.heart_count.mobile
    } else {
        config.heart_count.desktop
    }
}
