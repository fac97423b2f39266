use crate::config::MoveRange;
use crate::easing::Easing;
use glam::DVec2;
use rand::Rng;

/// Rendered state of a heart for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeartFrame {
    pub position: DVec2,
    pub opacity: f64,
}

/// Outcome of advancing a heart to a timestamp.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Step {
    Animating(HeartFrame),
    /// Terminal: the heart's duration has elapsed.
    Removed,
}

/// Fixed motion plan of one heart: where it starts, where it is heading and
/// when it was spawned.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeartMotion {
    pub start: DVec2,
    pub target: DVec2,
    pub created_ms: f64,
}

impl HeartMotion {
    /// Pick a random target: horizontally within `±range.x/2`, vertically up
    /// to `range.y` above the start (screen y grows downward, so never down).
    pub fn random<R: Rng + ?Sized>(
        start: DVec2,
        range: &MoveRange,
        created_ms: f64,
        rng: &mut R,
    ) -> Self {
        let dx = (rng.gen::<f64>() - 0.5) * range.x;
        let dy = -rng.gen::<f64>() * range.y;
        Self {
            start,
            target: start + DVec2::new(dx, dy),
            created_ms,
        }
    }

    pub fn step(&self, now_ms: f64, duration_ms: f64, easing: Easing) -> Step {
        let elapsed = now_ms - self.created_ms;
        if elapsed >= duration_ms {
            return Step::Removed;
        }
        let progress = (elapsed / duration_ms).max(0.0);
        let eased = easing.apply(progress);
        Step::Animating(HeartFrame {
            position: self.start.lerp(self.target, eased),
            opacity: 1.0 - eased,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn plan() -> HeartMotion {
        HeartMotion {
            start: DVec2::new(100.0, 100.0),
            target: DVec2::new(140.0, 20.0),
            created_ms: 1000.0,
        }
    }

    #[test]
    fn starts_at_spawn_point_fully_opaque() {
        let Step::Animating(f) = plan().step(1000.0, 1000.0, Easing::EaseOutQuad) else {
            panic!("expected animating at t=0");
        };
        assert_eq!(f.position, DVec2::new(100.0, 100.0));
        assert_eq!(f.opacity, 1.0);
    }

    #[test]
    fn midway_follows_eased_progress() {
        let Step::Animating(f) = plan().step(1500.0, 1000.0, Easing::EaseOutQuad) else {
            panic!("expected animating at t=0.5");
        };
        // easeOutQuad(0.5) = 0.75
        assert!((f.position.x - 130.0).abs() < 1e-9);
        assert!((f.position.y - 40.0).abs() < 1e-9);
        assert!((f.opacity - 0.25).abs() < 1e-9);
    }

    #[test]
    fn removed_once_duration_elapses() {
        let p = plan();
        assert!(matches!(p.step(1999.0, 1000.0, Easing::EaseOutQuint), Step::Animating(_)));
        assert_eq!(p.step(2000.0, 1000.0, Easing::EaseOutQuint), Step::Removed);
        assert_eq!(p.step(5000.0, 1000.0, Easing::EaseOutQuint), Step::Removed);
    }

    #[test]
    fn timestamps_before_spawn_hold_the_start() {
        let Step::Animating(f) = plan().step(900.0, 1000.0, Easing::EaseOutCubic) else {
            panic!("expected animating");
        };
        assert_eq!(f.position, plan().start);
        assert_eq!(f.opacity, 1.0);
    }

    #[test]
    fn random_targets_stay_in_range_and_never_move_down() {
        let mut rng = StdRng::seed_from_u64(7);
        let range = MoveRange { x: 100.0, y: 100.0 };
        let start = DVec2::new(50.0, 60.0);
        for _ in 0..500 {
            let m = HeartMotion::random(start, &range, 0.0, &mut rng);
            let d = m.target - start;
            assert!(d.x >= -50.0 && d.x <= 50.0, "dx {}", d.x);
            assert!(d.y <= 0.0 && d.y >= -100.0, "dy {}", d.y);
        }
    }
}
