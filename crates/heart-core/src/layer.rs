use crate::error::LayerError;
use crate::motion::HeartFrame;
use crate::spawn::HeartVisual;
use glam::DVec2;

/// Minimal rendering capability the effect needs from its overlay container.
///
/// Nodes must keep the order they were appended in; `count` reports the
/// container's current membership.
pub trait HeartLayer {
    type Node;

    /// Build a detached node for `visual`.
    fn create(&mut self, visual: &HeartVisual) -> Result<Self::Node, LayerError>;
    /// Attach nodes to the container in one batch, preserving slice order.
    fn append_batch(&mut self, nodes: &[Self::Node]) -> Result<(), LayerError>;
    fn update(&mut self, node: &Self::Node, frame: &HeartFrame);
    fn remove(&mut self, node: &Self::Node);
    fn count(&self) -> usize;
}

/// A node held by [`MemoryLayer`].
#[derive(Clone, Debug, PartialEq)]
pub struct MemoryNode {
    pub id: u64,
    pub visual: HeartVisual,
    pub position: DVec2,
    pub opacity: f64,
}

/// In-memory container used by tests and headless callers.
#[derive(Debug, Default)]
pub struct MemoryLayer {
    next_id: u64,
    detached: Vec<MemoryNode>,
    attached: Vec<MemoryNode>,
    /// Number of `append_batch` calls that attached at least one node.
    pub batches: usize,
}

impl MemoryLayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attached nodes in container order.
    pub fn nodes(&self) -> &[MemoryNode] {
        &self.attached
    }

    pub fn node(&self, id: u64) -> Option<&MemoryNode> {
        self.attached.iter().find(|n| n.id == id)
    }
}

impl HeartLayer for MemoryLayer {
    type Node = u64;

    fn create(&mut self, visual: &HeartVisual) -> Result<u64, LayerError> {
        let id = self.next_id;
        self.next_id += 1;
        self.detached.push(MemoryNode {
            id,
            visual: visual.clone(),
            position: visual.position,
            opacity: 1.0,
        });
        Ok(id)
    }

    fn append_batch(&mut self, nodes: &[u64]) -> Result<(), LayerError> {
        let mut moved = 0;
        for id in nodes {
            let idx = self
                .detached
                .iter()
                .position(|n| n.id == *id)
                .ok_or_else(|| LayerError(format!("node {id} was not created by this layer")))?;
            self.attached.push(self.detached.remove(idx));
            moved += 1;
        }
        if moved > 0 {
            self.batches += 1;
        }
        Ok(())
    }

    fn update(&mut self, node: &u64, frame: &HeartFrame) {
        if let Some(n) = self.attached.iter_mut().find(|n| n.id == *node) {
            n.position = frame.position;
            n.opacity = frame.opacity;
        }
    }

    fn remove(&mut self, node: &u64) {
        self.attached.retain(|n| n.id != *node);
        self.detached.retain(|n| n.id != *node);
    }

    fn count(&self) -> usize {
        self.attached.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visual() -> HeartVisual {
        HeartVisual {
            position: DVec2::new(3.0, 4.0),
            color: "#fff".into(),
            size: 12.0,
        }
    }

    #[test]
    fn created_nodes_are_not_counted_until_appended() {
        let mut layer = MemoryLayer::new();
        let a = layer.create(&visual()).unwrap();
        let b = layer.create(&visual()).unwrap();
        assert_eq!(layer.count(), 0);
        layer.append_batch(&[a, b]).unwrap();
        assert_eq!(layer.count(), 2);
        assert_eq!(layer.batches, 1);
        assert_eq!(layer.nodes()[0].id, a);
    }

    #[test]
    fn appending_unknown_node_fails() {
        let mut layer = MemoryLayer::new();
        assert!(layer.append_batch(&[42]).is_err());
    }

    #[test]
    fn update_and_remove() {
        let mut layer = MemoryLayer::new();
        let a = layer.create(&visual()).unwrap();
        layer.append_batch(&[a]).unwrap();
        layer.update(
            &a,
            &HeartFrame {
                position: DVec2::new(9.0, 1.0),
                opacity: 0.5,
            },
        );
        let n = layer.node(a).unwrap();
        assert_eq!(n.position, DVec2::new(9.0, 1.0));
        assert_eq!(n.opacity, 0.5);
        layer.remove(&a);
        assert_eq!(layer.count(), 0);
        assert!(layer.node(a).is_none());
    }
}
