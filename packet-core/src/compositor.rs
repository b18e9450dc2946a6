//! Scene ownership and the per-frame pipeline.
//!
//! A frame is driven from outside in two calls:
//! 1. [`Compositor::step`] (or just [`Compositor::update`]) advances the
//!    physics: pairwise forces, integration, then packet motion.
//! 2. [`Compositor::render`] recentres the viewport on the nodes and draws
//!    everything through a [`Surface`].

use glam::Vec2;
use rand::{SeedableRng, rngs::StdRng};

use crate::{
    color::Color,
    config::SimConfig,
    easing::jitter,
    entity::{Entity, Packet, PositionLookup, PositionSnapshot, Repulsion},
    labels::LabelResolver,
    surface::{Surface, TextAlign, TextBaseline},
    traffic::TrafficEvent,
    types::NodeId,
};

const ORIGIN_MARKER_RADIUS: f32 = 2.0;

/// Live counters reported by [`Compositor::render`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub nodes: usize,
    pub packets: usize,
}

/// Owns every node and the viewport that follows them.
#[derive(Debug)]
pub struct Compositor {
    /// Nodes in insertion order. Handles increase monotonically, so the
    /// list stays sorted by id.
    nodes: Vec<(NodeId, Entity)>,
    next_id: u64,
    /// Smoothed viewport centre in world coordinates.
    pub view: Vec2,
    pub zoom: f32,
    pub cfg: SimConfig,
    rng: StdRng,
}

impl Default for Compositor {
    fn default() -> Self {
        Self::new(SimConfig::default())
    }
}

impl Compositor {
    pub fn new(cfg: SimConfig) -> Self {
        Self {
            nodes: Vec::new(),
            next_id: 0,
            view: Vec2::ZERO,
            zoom: cfg.zoom,
            rng: StdRng::seed_from_u64(cfg.seed),
            cfg,
        }
    }

    pub fn add(&mut self, entity: Entity) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        tracing::debug!(%id, label = %entity.label, "node added");
        self.nodes.push((id, entity));
        id
    }

    /// Removes a node. Unknown handles leave the scene untouched.
    ///
    /// Packets still heading for the removed node keep flying until they
    /// time out.
    pub fn remove(&mut self, id: NodeId) -> Option<Entity> {
        match self.index_of(id) {
            Some(i) => Some(self.nodes.remove(i).1),
            None => {
                tracing::warn!(%id, "remove of unknown node ignored");
                None
            }
        }
    }

    /// Drops every node and recentres the view.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.view = Vec2::ZERO;
    }

    fn index_of(&self, id: NodeId) -> Option<usize> {
        self.nodes.binary_search_by_key(&id, |(nid, _)| *nid).ok()
    }

    pub fn get(&self, id: NodeId) -> Option<&Entity> {
        self.index_of(id).map(|i| &self.nodes[i].1)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Entity> {
        self.index_of(id).map(|i| &mut self.nodes[i].1)
    }

    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Entity)> {
        self.nodes.iter().map(|(id, e)| (*id, e))
    }

    /// First node whose label equals `label`.
    pub fn find_by_label(&self, label: &str) -> Option<NodeId> {
        self.nodes
            .iter()
            .find(|(_, e)| e.label == label)
            .map(|(id, _)| *id)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Packets in flight across all nodes.
    pub fn packet_count(&self) -> usize {
        self.nodes.iter().map(|(_, e)| e.packets.len()).sum()
    }

    pub fn stats(&self) -> FrameStats {
        FrameStats {
            nodes: self.node_count(),
            packets: self.packet_count(),
        }
    }

    pub fn snapshot(&self) -> PositionSnapshot {
        self.nodes.iter().map(|(id, e)| (*id, e.pos)).collect()
    }

    /// Mean node position, or `None` when there is nothing to average.
    pub fn centroid(&self) -> Option<Vec2> {
        if self.nodes.is_empty() {
            return None;
        }
        let sum: Vec2 = self.nodes.iter().map(|(_, e)| e.pos).sum();
        Some(sum / self.nodes.len() as f32)
    }

    /// Sends a packet from `from` to `to` using the compositor's rng.
    pub fn send(&mut self, from: NodeId, to: NodeId, size: Option<f32>) -> Option<&mut Packet> {
        let i = self.index_of(from)?;
        Some(self.nodes[i].1.send(to, size, &mut self.rng))
    }

    /// Returns the node labelled `label`, creating it near the view if needed.
    pub fn ensure_node(&mut self, label: &str) -> NodeId {
        if let Some(id) = self.find_by_label(label) {
            return id;
        }
        let spread = self.cfg.spawn_spread;
        let pos = self.view
            + Vec2::new(
                jitter(spread, &mut self.rng),
                jitter(spread, &mut self.rng),
            );
        self.add(Entity::new(pos, label))
    }

    /// Shows one observed packet: endpoints by label, colour by transport.
    pub fn ingest(&mut self, event: &TrafficEvent) -> Option<&mut Packet> {
        let src = self.ensure_node(&event.src);
        let dest = self.ensure_node(&event.dest);
        let color = event.transport.color(&self.cfg.palette);

        let packet = self.send(src, dest, event.size())?;
        packet.set_color(color);
        Some(packet)
    }

    fn repulsion(&self) -> Repulsion {
        Repulsion {
            spread: self.cfg.spread,
            force: self.cfg.repel_force,
            max_spread: self.cfg.max_spread,
        }
    }

    /// Accumulates pairwise forces into every node's accumulator.
    ///
    /// All nodes repel each other within the spread; the two ends of every
    /// in-flight packet attract each other. Positions are read from a
    /// snapshot, so the result does not depend on node order.
    pub fn apply_forces(&mut self, dt: f32) {
        let positions: Vec<(NodeId, Vec2)> =
            self.nodes.iter().map(|(id, e)| (*id, e.pos)).collect();
        let params = self.repulsion();

        for (i, (_, node)) in self.nodes.iter_mut().enumerate() {
            for (j, &(_, other)) in positions.iter().enumerate() {
                if i != j {
                    node.react(dt, other, &params);
                }
            }
        }

        let links: Vec<(NodeId, NodeId)> = self
            .nodes
            .iter()
            .flat_map(|(id, e)| e.packets.iter().map(move |p| (*id, p.target)))
            .collect();
        let snapshot: PositionSnapshot = positions.into_iter().collect();

        for (from, to) in links {
            let (Some(from_pos), Some(to_pos)) =
                (snapshot.position_of(from), snapshot.position_of(to))
            else {
                continue;
            };
            if let Some(sender) = self.get_mut(from) {
                sender.attract(dt, to_pos);
            }
            if let Some(receiver) = self.get_mut(to) {
                receiver.attract(dt, from_pos);
            }
        }
    }

    /// Moves nodes by their accumulated force and damps it.
    pub fn integrate(&mut self, dt: f32) {
        let damping = self.cfg.damping;
        for (_, node) in &mut self.nodes {
            node.integrate(dt, damping);
        }
    }

    /// Advances every node's packets against a snapshot of node positions.
    ///
    /// Returns the number of packets retired this frame.
    pub fn update(&mut self, dt: f32) -> usize {
        let snapshot = self.snapshot();
        let clamp = self.cfg.clamp_ease;
        self.nodes
            .iter_mut()
            .map(|(_, node)| node.update_with(dt, &snapshot, clamp))
            .sum()
    }

    /// One full physics frame: forces, integration, packet motion.
    pub fn step(&mut self, dt: f32) -> usize {
        let _span = tracing::info_span!("compositor_step", nodes = self.nodes.len()).entered();
        self.apply_forces(dt);
        self.integrate(dt);
        let retired = self.update(dt);
        tracing::trace!(retired, in_flight = self.packet_count(), "step complete");
        retired
    }

    /// Draws one frame and returns the live counters shown in the overlay.
    ///
    /// The viewport eases toward the node centroid; with no nodes it stays
    /// where it was.
    pub fn render<S, L>(&mut self, surface: &mut S, labels: &L) -> FrameStats
    where
        S: Surface + ?Sized,
        L: LabelResolver + ?Sized,
    {
        let size = surface.size();
        surface.clear();

        if let Some(mean) = self.centroid()
            && mean.is_finite()
        {
            self.view += (mean - self.view) * self.cfg.view_smoothing;
        }

        surface.save();
        surface.set_text_align(TextAlign::Center, TextBaseline::Middle);
        surface.translate(size / 2.0);
        surface.scale(self.zoom);
        surface.translate(-self.view);

        for (_, node) in &self.nodes {
            node.render(surface, labels);
        }

        surface.set_fill(Color::GREEN);
        surface.fill_circle(Vec2::ZERO, ORIGIN_MARKER_RADIUS);
        surface.restore();

        let stats = self.stats();
        surface.text(
            &format!(
                "Nodes: {}\nPackets in flight: {}",
                stats.nodes, stats.packets
            ),
            Vec2::new(size.x - size.x / 5.0, size.y - size.y / 5.0),
        );
        stats
    }
}

impl PositionLookup for Compositor {
    fn position_of(&self, id: NodeId) -> Option<Vec2> {
        self.get(id).map(|e| e.pos)
    }
}
