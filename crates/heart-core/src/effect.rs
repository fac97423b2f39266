use crate::clock::Clock;
use crate::config::HeartConfig;
use crate::error::LayerError;
use crate::layer::HeartLayer;
use crate::motion::{HeartMotion, Step};
use crate::spawn::{heart_count, HeartVisual};
use glam::DVec2;
use rand::rngs::StdRng;
use smallvec::SmallVec;
use std::collections::BTreeMap;

/// Creation-ordered heart identifier. Later spawns compare greater.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HeartId(pub u64);

struct HeartTask<N> {
    node: N,
    motion: HeartMotion,
}

/// Heart spawner, animator and overflow trimmer over a [`HeartLayer`].
///
/// Every live heart is an independent task in a registry keyed by
/// [`HeartId`], so iteration order is creation order regardless of how the
/// layer stores its nodes. Typical usage:
/// - `activate(point, viewport_width)` on each click or touch
/// - `tick()` once per animation frame while `live() > 0`
pub struct HeartEffect<L: HeartLayer, C: Clock> {
    config: HeartConfig,
    layer: L,
    clock: C,
    rng: StdRng,
    next_id: u64,
    live: BTreeMap<HeartId, HeartTask<L::Node>>,
}

impl<L: HeartLayer, C: Clock> HeartEffect<L, C> {
    pub fn new(config: HeartConfig, layer: L, clock: C, rng: StdRng) -> Self {
        Self {
            config,
            layer,
            clock,
            rng,
            next_id: 0,
            live: BTreeMap::new(),
        }
    }

    pub fn layer(&self) -> &L {
        &self.layer
    }

    /// Number of hearts still animating.
    pub fn live(&self) -> usize {
        self.live.len()
    }

    /// Live heart ids, oldest first.
    pub fn ids(&self) -> impl Iterator<Item = HeartId> + '_ {
        self.live.keys().copied()
    }

    pub fn motion(&self, id: HeartId) -> Option<&HeartMotion> {
        self.live.get(&id).map(|t| &t.motion)
    }

    /// Spawn one batch of hearts at `point` and trim the overflow.
    ///
    /// Returns how many hearts were created.
    pub fn activate(&mut self, point: DVec2, viewport_width: f64) -> Result<usize, LayerError> {
        let count = heart_count(&self.config, viewport_width) as usize;
        let now = self.clock.now_ms();

        let mut nodes: SmallVec<[L::Node; 8]> = SmallVec::with_capacity(count);
        let mut motions: SmallVec<[HeartMotion; 8]> = SmallVec::with_capacity(count);
        for _ in 0..count {
            let visual = HeartVisual::random(point, &self.config, &mut self.rng);
            match self.layer.create(&visual) {
                Ok(node) => nodes.push(node),
                Err(e) => {
                    self.discard(&nodes);
                    return Err(e);
                }
            }
            motions.push(HeartMotion::random(
                point,
                &self.config.move_range,
                now,
                &mut self.rng,
            ));
        }

        if let Err(e) = self.layer.append_batch(&nodes) {
            self.discard(&nodes);
            return Err(e);
        }
        for (node, motion) in nodes.into_iter().zip(motions) {
            let id = HeartId(self.next_id);
            self.next_id += 1;
            self.live.insert(id, HeartTask { node, motion });
        }
        log::debug!(
            "[spawn] {} hearts at ({:.0},{:.0}); live={}",
            count,
            point.x,
            point.y,
            self.live.len()
        );

        self.trim();
        Ok(count)
    }

    /// Advance every live heart to the current time, removing finished ones.
    ///
    /// Returns the number of hearts still animating.
    pub fn tick(&mut self) -> usize {
        let now = self.clock.now_ms();
        let duration = self.config.animation_duration;
        let easing = self.config.easing;

        let mut finished: SmallVec<[HeartId; 8]> = SmallVec::new();
        for (id, task) in &self.live {
            match task.motion.step(now, duration, easing) {
                Step::Animating(frame) => self.layer.update(&task.node, &frame),
                Step::Removed => finished.push(*id),
            }
        }
        for id in finished {
            if let Some(task) = self.live.remove(&id) {
                self.layer.remove(&task.node);
            }
        }
        self.live.len()
    }

    /// Evict the oldest hearts until the container holds at most
    /// `max_hearts`. Returns how many were evicted.
    pub fn trim(&mut self) -> usize {
        let excess = self.layer.count().saturating_sub(self.config.max_hearts);
        let mut evicted = 0;
        while evicted < excess {
            let Some((_, task)) = self.live.pop_first() else {
                break;
            };
            self.layer.remove(&task.node);
            evicted += 1;
        }
        if evicted > 0 {
            log::debug!("[trim] evicted {} oldest hearts", evicted);
        }
        evicted
    }

    fn discard(&mut self, nodes: &[L::Node]) {
        for node in nodes {
            self.layer.remove(node);
        }
    }
}
