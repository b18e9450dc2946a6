//! Nodes, the packets they send, and the per-frame physics on them.

use std::collections::HashMap;

use glam::Vec2;
use rand::Rng;

use crate::{
    color::Color,
    easing::{jitter, packet_ease},
    labels::LabelResolver,
    surface::{BlendMode, Surface},
    types::NodeId,
};

/// Radius of every ordinary node.
pub const NODE_RADIUS: f32 = 40.0;
/// Size used when a send carries no usable size.
pub const DEFAULT_PACKET_SIZE: f32 = 100.0;
/// Packets older than this are evicted even if they never arrived.
pub const MAX_PACKET_LIFE: u32 = 1000;
/// Upper bound (exclusive) of the random starting life of a packet.
pub const LIFE_JITTER: u32 = 50;
/// Arrival threshold, compared against half the remaining delta per axis.
pub const ARRIVAL_HALF_DELTA: f32 = 4.0;

const ATTRACT_NEAR_D2: f32 = 100.0;
const ATTRACT_FLOOR_D2: f32 = 10_000.0;
const ATTRACT_TARGET: f32 = 1000.0;
const ATTRACT_MASS: f32 = 100.0;
const REPEL_SCALE: f32 = 100.0;
const VELOCITY_SNAP: f32 = 0.001;
const DEBUG_VECTOR_SCALE: f32 = 10.0;
const LABEL_GAP: f32 = 12.0;

/// Resolves a node handle to its current position.
pub trait PositionLookup {
    fn position_of(&self, id: NodeId) -> Option<Vec2>;
}

impl<F> PositionLookup for F
where
    F: Fn(NodeId) -> Option<Vec2>,
{
    fn position_of(&self, id: NodeId) -> Option<Vec2> {
        self(id)
    }
}

/// Read-only copy of node positions taken before a physics pass.
#[derive(Debug, Clone, Default)]
pub struct PositionSnapshot {
    positions: HashMap<NodeId, Vec2>,
}

impl FromIterator<(NodeId, Vec2)> for PositionSnapshot {
    fn from_iter<I: IntoIterator<Item = (NodeId, Vec2)>>(iter: I) -> Self {
        Self {
            positions: iter.into_iter().collect(),
        }
    }
}

impl PositionLookup for PositionSnapshot {
    fn position_of(&self, id: NodeId) -> Option<Vec2> {
        self.positions.get(&id).copied()
    }
}

/// Parameters of the short-range repulsion in [`Entity::react`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Repulsion {
    /// Pairs farther apart than this are left alone.
    pub spread: f32,
    pub force: f32,
    /// Optional hard ceiling on the interaction distance.
    pub max_spread: Option<f32>,
}

impl Default for Repulsion {
    fn default() -> Self {
        Self {
            spread: 150.0,
            force: 1000.0,
            max_spread: None,
        }
    }
}

/// A labelled circle in the scene. Packets reuse it as their body.
#[derive(Debug, Clone)]
pub struct Entity {
    pub pos: Vec2,
    /// Last explicitly set position; the integrator leaves it alone.
    pub prev_pos: Vec2,
    pub radius: f32,
    pub label: String,
    /// Force accumulator written by [`Entity::react`] and [`Entity::attract`].
    pub vel: Vec2,
    pub color: Option<Color>,
    /// Outline colour used when `color` is unset.
    pub rim: Option<Color>,
    /// Packets in flight from this entity, oldest first.
    pub packets: Vec<Packet>,
}

/// A unit of traffic travelling from its owner toward `target`.
#[derive(Debug, Clone)]
pub struct Packet {
    pub body: Entity,
    pub target: NodeId,
    /// Frames lived so far, starting from a small random offset.
    pub life: u32,
}

impl Packet {
    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.body.pos
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.body.radius
    }

    pub fn set_color(&mut self, color: Color) {
        self.body.color = Some(color);
    }

    /// True once the packet is within the arrival threshold of `target_pos`.
    fn has_arrived(&self, target_pos: Vec2) -> bool {
        let half = (target_pos - self.body.pos).abs() / 2.0;
        half.x <= ARRIVAL_HALF_DELTA && half.y <= ARRIVAL_HALF_DELTA
    }
}

/// Maps a raw send size to something the radius formula accepts.
///
/// Missing, zero and non-finite sizes fall back to [`DEFAULT_PACKET_SIZE`];
/// anything below 1 is raised to 1.
pub fn normalize_size(size: Option<f32>) -> f32 {
    match size {
        Some(s) if s.is_finite() && s != 0.0 => {
            if s < 1.0 {
                tracing::debug!(size = s, "packet size below 1, clamping");
                1.0
            } else {
                s
            }
        }
        _ => DEFAULT_PACKET_SIZE,
    }
}

/// Radius of a packet of `size`: `5 * max(log10(size), 0.5)`.
#[inline]
pub fn packet_radius(size: f32) -> f32 {
    5.0 * size.max(1.0).log10().max(0.5)
}

impl Entity {
    pub fn new(pos: Vec2, label: impl Into<String>) -> Self {
        Self {
            pos,
            prev_pos: pos,
            radius: NODE_RADIUS,
            label: label.into(),
            vel: Vec2::ZERO,
            color: None,
            rim: None,
            packets: Vec::new(),
        }
    }

    /// Nodes are identified by their label.
    pub fn id(&self) -> &str {
        &self.label
    }

    pub fn set_position(&mut self, pos: Vec2) {
        self.pos = pos;
        self.prev_pos = pos;
    }

    /// Launches a packet toward `target` and returns it for further styling.
    ///
    /// The packet starts within two radii of this entity's centre and its
    /// radius grows with the logarithm of `size`.
    pub fn send(
        &mut self,
        target: NodeId,
        size: Option<f32>,
        rng: &mut impl Rng,
    ) -> &mut Packet {
        let spread = self.radius * 4.0;
        let start = self.pos + Vec2::new(jitter(spread, rng), jitter(spread, rng));

        let mut body = Entity::new(start, "");
        body.radius = packet_radius(normalize_size(size));

        let life = rng.random_range(0..LIFE_JITTER);
        self.packets.push(Packet { body, target, life });

        let last = self.packets.len() - 1;
        &mut self.packets[last]
    }

    /// Moves every outgoing packet one frame closer to its target.
    ///
    /// Returns the number of packets retired this frame.
    pub fn update(&mut self, dt: f32, targets: &impl PositionLookup) -> usize {
        self.update_with(dt, targets, false)
    }

    /// [`Entity::update`] with control over clamping of the ease factor.
    ///
    /// Targets are looked up afresh every frame, so packets chase moving
    /// nodes. A target that no longer resolves leaves the packet where it is
    /// until it times out.
    pub fn update_with(
        &mut self,
        _dt: f32,
        targets: &impl PositionLookup,
        clamp_ease: bool,
    ) -> usize {
        let before = self.packets.len();

        self.packets.retain_mut(|p| {
            let target_pos = targets.position_of(p.target);

            if let Some(tp) = target_pos {
                let k = packet_ease(p.life, clamp_ease);
                p.body.pos += (tp - p.body.pos) * k;
            }
            p.life = p.life.saturating_add(1);

            let arrived = target_pos.is_some_and(|tp| p.has_arrived(tp));
            !(arrived || p.life > MAX_PACKET_LIFE)
        });

        let retired = before - self.packets.len();
        if retired > 0 {
            tracing::trace!(label = %self.label, retired, "packets retired");
        }
        retired
    }

    /// Accumulates a repulsive impulse away from `other`.
    ///
    /// Coincident points and pairs outside the spread are ignored.
    pub fn react(&mut self, dt: f32, other: Vec2, params: &Repulsion) {
        let delta = other - self.pos;
        let d2 = delta.length_squared();
        if d2 == 0.0 {
            return;
        }
        if d2 > params.spread * params.spread {
            return;
        }
        if let Some(max) = params.max_spread
            && d2 > max * max
        {
            return;
        }

        let d = d2.sqrt();
        let f = params.force / d2;
        self.vel -= delta / d * f * dt * REPEL_SCALE;
    }

    /// Accumulates an attractive impulse toward `other`.
    ///
    /// Pairs closer than 10 units are treated as if 100 units apart, so the
    /// pull stays bounded at close range.
    pub fn attract(&mut self, dt: f32, other: Vec2) {
        let delta = other - self.pos;
        let mut d2 = delta.length_squared();
        if d2 == 0.0 {
            return;
        }
        let dir = delta / d2.sqrt();
        if d2 < ATTRACT_NEAR_D2 {
            d2 = ATTRACT_FLOOR_D2;
        }

        let pull = ATTRACT_TARGET / d2 * ATTRACT_MASS;
        self.vel += dir * pull * dt;
    }

    /// Applies the accumulated force to the position, then damps it.
    pub fn integrate(&mut self, dt: f32, damping: f32) {
        self.pos += self.vel * dt;

        self.vel *= (1.0 - damping * dt).max(0.0);
        if self.vel.x.abs() < VELOCITY_SNAP {
            self.vel.x = 0.0;
        }
        if self.vel.y.abs() < VELOCITY_SNAP {
            self.vel.y = 0.0;
        }
    }

    /// Draws this entity, its packets, its label and its force vector.
    pub fn render<S, L>(&self, surface: &mut S, labels: &L)
    where
        S: Surface + ?Sized,
        L: LabelResolver + ?Sized,
    {
        surface.save();
        surface.set_blend(BlendMode::Lighter);

        match self.color {
            Some(color) => {
                surface.set_fill(color);
                surface.fill_circle(self.pos, self.radius);
            }
            None => {
                surface.set_stroke(self.rim.unwrap_or(Color::WHITE));
                surface.stroke_circle(self.pos, self.radius);
            }
        }

        for packet in &self.packets {
            packet.body.render(surface, labels);
        }

        if !self.label.is_empty() {
            let text = labels.display(&self.label);
            surface.text(&text, self.pos + Vec2::new(0.0, self.radius + LABEL_GAP));
        }

        surface.set_stroke(Color::RED);
        surface.line(self.pos, self.pos + self.vel * DEBUG_VECTOR_SCALE);

        surface.restore();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::labels::{LabelTable, RawLabels};
    use crate::surface::{DrawCommand, RecordingSurface};
    use rand::{SeedableRng, rngs::StdRng};

    const TARGET: NodeId = NodeId(1);

    fn fixed(pos: Vec2) -> impl Fn(NodeId) -> Option<Vec2> {
        move |id| (id == TARGET).then_some(pos)
    }

    fn nowhere(_: NodeId) -> Option<Vec2> {
        None
    }

    fn packet_at(pos: Vec2, life: u32) -> Packet {
        let mut body = Entity::new(pos, "");
        body.radius = 10.0;
        Packet {
            body,
            target: TARGET,
            life,
        }
    }

    #[test]
    fn new_entity_has_node_defaults() {
        let e = Entity::new(Vec2::new(3.0, 4.0), "A");
        assert_eq!(e.pos, Vec2::new(3.0, 4.0));
        assert_eq!(e.prev_pos, e.pos);
        assert_eq!(e.radius, NODE_RADIUS);
        assert_eq!(e.id(), "A");
        assert_eq!(e.vel, Vec2::ZERO);
        assert!(e.color.is_none() && e.rim.is_none());
        assert!(e.packets.is_empty());
    }

    #[test]
    fn set_position_updates_previous_position() {
        let mut e = Entity::new(Vec2::ZERO, "");
        e.set_position(Vec2::new(5.0, 6.0));
        assert_eq!(e.prev_pos, Vec2::new(5.0, 6.0));

        e.vel = Vec2::new(10.0, 0.0);
        e.integrate(1.0, 0.0);
        assert_eq!(e.pos, Vec2::new(15.0, 6.0));
        assert_eq!(e.prev_pos, Vec2::new(5.0, 6.0));
    }

    #[test]
    fn send_spawns_jittered_packet_with_log_radius() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut e = Entity::new(Vec2::new(100.0, -50.0), "A");

        for _ in 0..200 {
            let p = e.send(TARGET, Some(100.0), &mut rng);
            assert!((p.radius() - 10.0).abs() < 1e-5);
            assert_eq!(p.target, TARGET);
            assert!(p.life < LIFE_JITTER);
            let off = (p.pos() - Vec2::new(100.0, -50.0)).abs();
            assert!(off.x <= 2.0 * NODE_RADIUS && off.y <= 2.0 * NODE_RADIUS);
        }
        assert_eq!(e.packets.len(), 200);
    }

    #[test]
    fn send_falls_back_and_clamps_bad_sizes() {
        assert_eq!(normalize_size(None), DEFAULT_PACKET_SIZE);
        assert_eq!(normalize_size(Some(0.0)), DEFAULT_PACKET_SIZE);
        assert_eq!(normalize_size(Some(f32::NAN)), DEFAULT_PACKET_SIZE);
        assert_eq!(normalize_size(Some(-20.0)), 1.0);
        assert_eq!(normalize_size(Some(0.25)), 1.0);

        let mut rng = StdRng::seed_from_u64(2);
        let mut e = Entity::new(Vec2::ZERO, "A");
        assert!((e.send(TARGET, None, &mut rng).radius() - 10.0).abs() < 1e-5);
        assert_eq!(e.send(TARGET, Some(-5.0), &mut rng).radius(), 2.5);
    }

    #[test]
    fn packet_radius_is_floored_and_non_decreasing() {
        let mut prev = packet_radius(1.0);
        assert_eq!(prev, 2.5);
        let mut size = 1.0_f32;
        while size < 1.0e6 {
            let r = packet_radius(size);
            assert!(r >= 0.0);
            assert!(r >= prev, "radius shrank at size={size}");
            prev = r;
            size *= 1.37;
        }
        assert!((packet_radius(1000.0) - 15.0).abs() < 1e-5);
    }

    #[test]
    fn send_returns_packet_for_recolouring() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut e = Entity::new(Vec2::ZERO, "A");
        e.send(TARGET, Some(10.0), &mut rng).set_color(Color::GREEN);
        assert_eq!(e.packets[0].body.color, Some(Color::GREEN));
    }

    #[test]
    fn life_increases_by_one_per_update() {
        let mut e = Entity::new(Vec2::ZERO, "A");
        e.packets.push(packet_at(Vec2::ZERO, 0));
        let target = fixed(Vec2::new(1.0e6, 0.0));

        for expected in 1..=20 {
            e.update(1.0, &target);
            assert_eq!(e.packets.len(), 1);
            assert_eq!(e.packets[0].life, expected);
        }
    }

    #[test]
    fn first_frame_at_life_zero_does_not_move() {
        let mut e = Entity::new(Vec2::ZERO, "A");
        e.packets.push(packet_at(Vec2::new(10.0, 10.0), 0));

        e.update(1.0, &fixed(Vec2::new(500.0, 10.0)));
        assert_eq!(e.packets[0].pos(), Vec2::new(10.0, 10.0));
        assert_eq!(e.packets[0].life, 1);
    }

    #[test]
    fn packet_is_removed_in_the_frame_it_arrives() {
        let mut rng = StdRng::seed_from_u64(5);
        let target_pos = Vec2::new(300.0, 40.0);
        let target = fixed(target_pos);

        for _ in 0..50 {
            let mut e = Entity::new(Vec2::ZERO, "A");
            e.send(TARGET, None, &mut rng);

            for _ in 0..=MAX_PACKET_LIFE {
                if e.packets.is_empty() {
                    break;
                }
                e.update(1.0, &target);
                for p in &e.packets {
                    let d = (target_pos - p.pos()).abs();
                    assert!(
                        d.x > 8.0 || d.y > 8.0,
                        "packet within arrival range but not removed: {d:?}"
                    );
                }
            }
            assert!(e.packets.is_empty());
        }
    }

    #[test]
    fn dangling_target_times_out() {
        let mut rng = StdRng::seed_from_u64(6);
        let mut e = Entity::new(Vec2::ZERO, "A");
        e.send(NodeId(99), None, &mut rng);
        let start = e.packets[0].pos();

        let mut frames = 0;
        while !e.packets.is_empty() {
            e.update(1.0, &nowhere);
            frames += 1;
            if let Some(p) = e.packets.first() {
                assert_eq!(p.pos(), start);
            }
            assert!(frames <= MAX_PACKET_LIFE + 1);
        }
        assert!(frames > MAX_PACKET_LIFE - LIFE_JITTER);
    }

    #[test]
    fn distant_packet_is_gone_by_frame_1001() {
        let mut e = Entity::new(Vec2::ZERO, "A");
        e.packets.push(packet_at(Vec2::ZERO, 0));

        let target = fixed(Vec2::new(1000.0, 0.0));
        for _ in 0..=MAX_PACKET_LIFE {
            e.update(1.0, &target);
        }
        assert!(e.packets.is_empty());
    }

    #[test]
    fn distance_to_static_target_never_grows_during_ease() {
        let mut rng = StdRng::seed_from_u64(7);

        for trial in 0..64 {
            let target_pos = Vec2::new(
                rng.random_range(-2000.0..2000.0),
                rng.random_range(-2000.0..2000.0),
            );
            let target = fixed(target_pos);
            let mut e = Entity::new(Vec2::ZERO, "A");
            e.send(TARGET, Some(rng.random_range(1.0..10_000.0)), &mut rng);

            let mut dist = (target_pos - e.packets[0].pos()).length();
            while let Some(p) = e.packets.first() {
                if p.life > 200 {
                    break;
                }
                e.update(1.0, &target);
                if let Some(p) = e.packets.first() {
                    let now = (target_pos - p.pos()).length();
                    assert!(now <= dist, "trial {trial}: distance grew {dist} -> {now}");
                    dist = now;
                }
            }
        }
    }

    #[test]
    fn packets_chase_a_moving_target() {
        let mut e = Entity::new(Vec2::ZERO, "A");
        e.packets.push(packet_at(Vec2::ZERO, 100));

        e.update(1.0, &fixed(Vec2::new(100.0, 0.0)));
        let after_first = e.packets[0].pos();
        assert!(after_first.x > 0.0 && after_first.y == 0.0);

        e.update(1.0, &fixed(Vec2::new(after_first.x, 500.0)));
        assert!(e.packets[0].pos().y > 0.0);
    }

    #[test]
    fn clamped_ease_never_overshoots() {
        let mut e = Entity::new(Vec2::ZERO, "A");
        e.packets.push(packet_at(Vec2::ZERO, 300));

        let target_pos = Vec2::new(1000.0, 1000.0);
        let target = fixed(target_pos);

        let mut unclamped = e.clone();
        unclamped.update_with(1.0, &target, false);
        assert!(unclamped.packets[0].pos().x > target_pos.x);

        e.update_with(1.0, &target, true);
        assert!(e.packets.is_empty(), "clamped packet lands on target");
    }

    #[test]
    fn update_does_not_move_the_sender() {
        let mut rng = StdRng::seed_from_u64(8);
        let mut e = Entity::new(Vec2::new(1.0, 2.0), "A");
        e.vel = Vec2::new(3.0, 3.0);
        e.send(TARGET, None, &mut rng);
        e.update(1.0, &fixed(Vec2::new(400.0, 0.0)));
        assert_eq!(e.pos, Vec2::new(1.0, 2.0));
        assert_eq!(e.vel, Vec2::new(3.0, 3.0));
    }

    #[test]
    fn react_ignores_coincident_points() {
        let mut a = Entity::new(Vec2::new(5.0, 5.0), "A");
        let mut b = Entity::new(Vec2::new(5.0, 5.0), "B");
        let params = Repulsion::default();
        a.react(1.0, b.pos, &params);
        b.react(1.0, a.pos, &params);
        assert_eq!(a.vel, Vec2::ZERO);
        assert_eq!(b.vel, Vec2::ZERO);
    }

    #[test]
    fn react_pushes_apart_within_spread_only() {
        let params = Repulsion::default();

        let mut a = Entity::new(Vec2::ZERO, "A");
        a.react(0.5, Vec2::new(100.0, 0.0), &params);
        // force / d2 * dt * 100 = 1000 / 10000 * 0.5 * 100
        assert!((a.vel.x + 5.0).abs() < 1e-5);
        assert_eq!(a.vel.y, 0.0);

        let mut far = Entity::new(Vec2::ZERO, "A");
        far.react(1.0, Vec2::new(151.0, 0.0), &params);
        assert_eq!(far.vel, Vec2::ZERO);
    }

    #[test]
    fn react_honours_max_spread_ceiling() {
        let params = Repulsion {
            max_spread: Some(100.0),
            ..Repulsion::default()
        };
        let mut a = Entity::new(Vec2::ZERO, "A");
        a.react(1.0, Vec2::new(120.0, 0.0), &params);
        assert_eq!(a.vel, Vec2::ZERO);

        a.react(1.0, Vec2::new(90.0, 0.0), &params);
        assert!(a.vel.x < 0.0);
    }

    #[test]
    fn attract_ignores_coincident_points() {
        let mut a = Entity::new(Vec2::ZERO, "A");
        a.attract(1.0, Vec2::ZERO);
        assert_eq!(a.vel, Vec2::ZERO);
    }

    #[test]
    fn attract_substitutes_far_distance_when_too_close() {
        // d2 = 50
        let mut near = Entity::new(Vec2::ZERO, "A");
        near.attract(1.0, Vec2::new(5.0, 5.0));

        // d2 = 10000
        let mut far = Entity::new(Vec2::ZERO, "B");
        far.attract(1.0, Vec2::new(100.0, 0.0));

        assert!((near.vel.length() - far.vel.length()).abs() < 1e-5);
        assert!((far.vel.x - 10.0).abs() < 1e-5);
        assert!(near.vel.x > 0.0 && near.vel.y > 0.0);
    }

    #[test]
    fn attract_falls_off_with_square_distance() {
        let mut a = Entity::new(Vec2::ZERO, "A");
        a.attract(1.0, Vec2::new(0.0, -200.0));
        assert!((a.vel.y + 2.5).abs() < 1e-5);
    }

    #[test]
    fn integrate_damps_and_snaps_small_velocities() {
        let mut e = Entity::new(Vec2::ZERO, "A");
        e.vel = Vec2::new(10.0, 0.0005);
        e.integrate(0.5, 0.4);
        assert!((e.pos.x - 5.0).abs() < 1e-5);
        assert!((e.vel.x - 8.0).abs() < 1e-5);
        assert_eq!(e.vel.y, 0.0);

        // A damping step longer than 1/damping stops the entity instead of reversing it.
        e.integrate(10.0, 0.4);
        assert_eq!(e.vel, Vec2::ZERO);
    }

    #[test]
    fn render_outlines_uncoloured_and_fills_coloured() {
        let mut s = RecordingSurface::new(100.0, 100.0);
        let mut e = Entity::new(Vec2::new(1.0, 1.0), "");
        e.render(&mut s, &RawLabels);
        assert!(matches!(
            s.commands[0],
            DrawCommand::StrokeCircle { color, blend: BlendMode::Lighter, .. } if color == Color::WHITE
        ));

        s.commands.clear();
        e.rim = Some(Color::GREEN);
        e.render(&mut s, &RawLabels);
        assert!(matches!(
            s.commands[0],
            DrawCommand::StrokeCircle { color, .. } if color == Color::GREEN
        ));

        s.commands.clear();
        e.color = Some(Color::RED);
        e.render(&mut s, &RawLabels);
        assert!(matches!(
            s.commands[0],
            DrawCommand::FillCircle { color, radius, .. } if color == Color::RED && radius == NODE_RADIUS
        ));
        assert_eq!(s.save_depth(), 0);
    }

    #[test]
    fn render_draws_packets_label_and_debug_vector() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut e = Entity::new(Vec2::ZERO, "10.0.0.1");
        e.vel = Vec2::new(1.0, -2.0);
        e.send(TARGET, None, &mut rng);
        e.send(TARGET, None, &mut rng).set_color(Color::GREEN);

        let mut labels = LabelTable::new();
        labels.insert("10.0.0.1", "router");

        let mut s = RecordingSurface::new(100.0, 100.0);
        e.render(&mut s, &labels);

        let circles = s
            .commands
            .iter()
            .filter(|c| {
                matches!(
                    c,
                    DrawCommand::StrokeCircle { .. } | DrawCommand::FillCircle { .. }
                )
            })
            .count();
        assert_eq!(circles, 3);

        assert!(s.commands.iter().any(|c| matches!(
            c,
            DrawCommand::Text { text, at, .. } if text == "router" && *at == Vec2::new(0.0, 52.0)
        )));

        // Each packet body also draws its (zero) force vector.
        assert!(s.commands.iter().any(|c| matches!(
            c,
            DrawCommand::Line { from, to, color, .. }
                if *from == Vec2::ZERO && *to == Vec2::new(10.0, -20.0) && *color == Color::RED
        )));
    }

    #[test]
    fn render_skips_empty_label() {
        let mut s = RecordingSurface::new(100.0, 100.0);
        Entity::new(Vec2::ZERO, "").render(&mut s, &RawLabels);
        assert_eq!(s.texts().count(), 0);
    }
}
