// Pure simulation state for the blueprint background.
//
// No platform APIs here: the field owns its RNG and advances one frame per
// explicit `step()` call, so the whole thing runs (and is tested) on the
// host while the wasm side only schedules and draws.

use glam::Vec2;
use rand::prelude::*;

use super::config::FieldConfig;
use super::constants::*;

#[derive(Clone, Debug)]
pub struct Node {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    pub tag: Option<&'static str>,
    pub tag_alpha: f32,
    pub tag_dir: f32,
}

/// A data pulse travelling along the connection between two nodes, referenced
/// by index. Indices never dangle: any operation that replaces the node set
/// clears the bursts with it.
#[derive(Clone, Copy, Debug)]
pub struct Burst {
    pub a: usize,
    pub b: usize,
    pub progress: f32,
    pub speed: f32,
}

impl Burst {
    /// Endpoints of the drawn segment, from `max(0, progress - tail)` to
    /// `progress`, between the referenced nodes' *current* positions; bursts
    /// track live node motion rather than a frozen path.
    pub fn span(&self, nodes: &[Node]) -> (Vec2, Vec2) {
        let p1 = nodes[self.a].pos;
        let p2 = nodes[self.b].pos;
        let tail = (self.progress - BURST_TAIL).max(0.0);
        (p1 + (p2 - p1) * tail, p1 + (p2 - p1) * self.progress)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Pointer {
    pub pos: Option<Vec2>,
    pub radius: f32,
}

impl Default for Pointer {
    fn default() -> Self {
        Self {
            pos: None,
            radius: POINTER_RADIUS,
        }
    }
}

/// A node pair close enough to draw, with the line alpha already resolved.
#[derive(Clone, Copy, Debug)]
pub struct Connection {
    pub a: usize,
    pub b: usize,
    pub alpha: f32,
}

/// Line opacity as a linear function of distance: `CONNECTION_ALPHA_MAX` at
/// zero, 0 at `max_dist`.
#[inline]
pub fn connection_alpha(dist: f32, max_dist: f32) -> f32 {
    (1.0 - dist / max_dist) * CONNECTION_ALPHA_MAX
}

pub struct BlueprintField {
    pub config: FieldConfig,
    width: f32,
    height: f32,
    pub nodes: Vec<Node>,
    pub bursts: Vec<Burst>,
    pub pointer: Pointer,
    rng: StdRng,
}

impl BlueprintField {
    pub fn new(config: FieldConfig, width: f32, height: f32, seed: u64) -> Self {
        let mut field = Self {
            config,
            width,
            height,
            nodes: Vec::new(),
            bursts: Vec::new(),
            pointer: Pointer::default(),
            rng: StdRng::seed_from_u64(seed),
        };
        field.spawn_nodes();
        field
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Full state reset on viewport change: the node set is regenerated
    /// wholesale and all bursts are dropped with it.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.bursts.clear();
        self.spawn_nodes();
    }

    fn spawn_nodes(&mut self) {
        let tags = self.config.tags;
        self.nodes.clear();
        self.nodes.reserve(self.config.node_count);
        for _ in 0..self.config.node_count {
            let pos = Vec2::new(
                self.rng.gen::<f32>() * self.width,
                self.rng.gen::<f32>() * self.height,
            );
            let vel = Vec2::new(
                (self.rng.gen::<f32>() - 0.5) * self.config.node_speed,
                (self.rng.gen::<f32>() - 0.5) * self.config.node_speed,
            );
            let size = NODE_SIZE_MIN + self.rng.gen::<f32>() * (NODE_SIZE_MAX - NODE_SIZE_MIN);
            let tag = if !tags.is_empty() && self.rng.gen::<f32>() < TAG_PROBABILITY {
                Some(tags[self.rng.gen_range(0..tags.len())])
            } else {
                None
            };
            // Start inside the oscillation band so the alpha invariant holds
            // from the first frame.
            let tag_alpha =
                TAG_ALPHA_MIN + self.rng.gen::<f32>() * (TAG_ALPHA_MAX - TAG_ALPHA_MIN);
            self.nodes.push(Node {
                pos,
                vel,
                size,
                tag,
                tag_alpha,
                tag_dir: 1.0,
            });
        }
    }

    pub fn set_pointer(&mut self, pos: Vec2) {
        self.pointer.pos = Some(pos);
    }

    pub fn clear_pointer(&mut self) {
        self.pointer.pos = None;
    }

    /// Advance the simulation by one frame.
    pub fn step(&mut self) {
        self.step_nodes();
        self.spawn_bursts();
        self.step_bursts();
    }

    fn step_nodes(&mut self) {
        for node in &mut self.nodes {
            node.pos += node.vel;
            // Reflect without clamping; a fast node may sit outside the
            // surface for a frame before the flipped velocity brings it back.
            if node.pos.x < 0.0 || node.pos.x > self.width {
                node.vel.x = -node.vel.x;
            }
            if node.pos.y < 0.0 || node.pos.y > self.height {
                node.vel.y = -node.vel.y;
            }
            if node.tag.is_some() {
                node.tag_alpha += TAG_ALPHA_STEP * node.tag_dir;
                if node.tag_alpha >= TAG_ALPHA_MAX {
                    node.tag_alpha = TAG_ALPHA_MAX;
                    node.tag_dir = -1.0;
                } else if node.tag_alpha <= TAG_ALPHA_MIN {
                    node.tag_alpha = TAG_ALPHA_MIN;
                    node.tag_dir = 1.0;
                }
            }
        }
    }

    fn spawn_bursts(&mut self) {
        let max_dist = self.config.connection_dist;
        for i in 0..self.nodes.len() {
            for j in (i + 1)..self.nodes.len() {
                let dist = self.nodes[i].pos.distance(self.nodes[j].pos);
                if dist < max_dist && self.rng.gen::<f64>() < self.config.burst_frequency {
                    let speed =
                        BURST_SPEED_MIN + self.rng.gen::<f32>() * (BURST_SPEED_MAX - BURST_SPEED_MIN);
                    self.bursts.push(Burst {
                        a: i,
                        b: j,
                        progress: 0.0,
                        speed,
                    });
                }
            }
        }
    }

    fn step_bursts(&mut self) {
        for burst in &mut self.bursts {
            burst.progress += burst.speed;
        }
        // Retire in the same pass that would otherwise draw out of range: a
        // burst is never observable at progress >= 1.
        self.bursts.retain(|b| b.progress < 1.0);
    }

    /// Recompute the proximity pairs for the renderer. The O(n²) scan over
    /// ~80 nodes is cheap enough to run twice per frame (once here, once for
    /// burst spawning) and keeps `step()` free of draw concerns.
    pub fn connections(&self) -> Vec<Connection> {
        let max_dist = self.config.connection_dist;
        let mut out = Vec::new();
        for i in 0..self.nodes.len() {
            for j in (i + 1)..self.nodes.len() {
                let dist = self.nodes[i].pos.distance(self.nodes[j].pos);
                if dist < max_dist {
                    out.push(Connection {
                        a: i,
                        b: j,
                        alpha: connection_alpha(dist, max_dist),
                    });
                }
            }
        }
        out
    }
}
