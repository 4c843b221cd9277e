//! Per-tick evolution of the hero scene.
//!
//! [`HeroScene`] is the single session object: constructed once at startup,
//! owned by the frame loop, torn down with it. All mutable animation state
//! lives here rather than in module-level globals, so multiple independent
//! scenes can coexist and teardown is just dropping the value.

use glam::{Vec2, Vec3};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::SceneConfig;
use crate::constants::*;
use crate::input::InputSignal;
use crate::scene::{
    build_connections, build_data_streams, build_network_nodes, build_orbs, build_particles,
    build_wave_rings, ConnectionEdge, CoreMesh, DataStream, HologramCube, NetworkNode, Orb,
    ParticleField, WaveRing,
};

pub struct HeroScene {
    pub config: SceneConfig,
    pub nodes: Vec<NetworkNode>,
    pub edges: Vec<ConnectionEdge>,
    pub orbs: Vec<Orb>,
    pub core: CoreMesh,
    pub cube: HologramCube,
    pub rings: Vec<WaveRing>,
    pub streams: Vec<DataStream>,
    pub particles: ParticleField,
    /// Rotation of the network group; y spins continuously, x/z follow the
    /// smoothed pointer signal.
    pub network_rotation: Vec3,
    pub target_rotation: Vec2,
    /// Shared opacity of all connection edges, pulsed by wall-clock time.
    pub edge_opacity: f32,
    frame_count: u64,
}

impl HeroScene {
    /// Build every entity once from the resolved config.
    pub fn new(config: SceneConfig, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let nodes = build_network_nodes(&config, &mut rng);
        let edges = build_connections(&config, &nodes, &mut rng);
        let orbs = build_orbs(&config, &mut rng);
        let rings = build_wave_rings(&config);
        let streams = build_data_streams(&config);
        let particles = build_particles(&config, &mut rng);
        log::info!(
            "hero scene built: tier={:?} nodes={} edges={} orbs={} rings={} streams={} particles={}",
            config.tier,
            nodes.len(),
            edges.len(),
            orbs.len(),
            rings.len(),
            streams.len(),
            particles.positions.len()
        );
        Self {
            config,
            nodes,
            edges,
            orbs,
            core: CoreMesh::default(),
            cube: HologramCube::default(),
            rings,
            streams,
            particles,
            network_rotation: Vec3::ZERO,
            target_rotation: Vec2::ZERO,
            edge_opacity: EDGE_PULSE_BASE,
            frame_count: 0,
        }
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Advance one display tick. Returns `true` when entity state was
    /// actually updated; on Low tier only every `update_interval`-th tick
    /// mutates state. The caller renders regardless of the return value --
    /// frame-skip gates updates, never rendering.
    pub fn tick(&mut self, now_sec: f64, input: &InputSignal) -> bool {
        self.frame_count += 1;
        if self.frame_count % self.config.update_interval != 0 {
            return false;
        }
        self.update(now_sec, input);
        true
    }

    fn update(&mut self, now_sec: f64, input: &InputSignal) {
        // Exponentially chase the pointer-derived target; never snap.
        let target = input.pointer * POINTER_ROTATION_SCALE;
        self.target_rotation += (target - self.target_rotation) * ROTATION_SMOOTHING;

        self.network_rotation.y += NETWORK_SPIN_PER_TICK;
        self.network_rotation.x = self.target_rotation.y;
        self.network_rotation.z = self.target_rotation.x;

        // Node drift with an elastic bounce off the radial band. The bounce
        // is a sign-flip heuristic, not a collision response.
        for node in &mut self.nodes {
            node.position += node.velocity * NODE_SPEED_DAMPING;
            let distance = node.position.length();
            if !(BOUNCE_MIN_RADIUS..=BOUNCE_MAX_RADIUS).contains(&distance) {
                node.velocity = -node.velocity;
            }
        }

        // Edge pulse runs on wall-clock time, independent of node motion;
        // edges themselves stay where construction put them.
        self.edge_opacity = EDGE_PULSE_BASE
            + ((now_sec * EDGE_PULSE_RATE).sin() as f32) * EDGE_PULSE_AMPLITUDE;

        self.core.rotation.x += CORE_ROT_X_PER_TICK;
        self.core.rotation.y += CORE_ROT_Y_PER_TICK;
        self.core.inner_rotation.x -= CORE_ROT_Y_PER_TICK;
        self.core.inner_rotation.y -= CORE_ROT_X_PER_TICK;
        self.core.scale =
            1.0 + ((now_sec * CORE_PULSE_RATE).sin() as f32) * CORE_PULSE_AMPLITUDE;

        self.cube.rotation.x += CUBE_ROT_X_PER_TICK;
        self.cube.rotation.y += CUBE_ROT_Y_PER_TICK;

        for orb in &mut self.orbs {
            orb.angle += orb.orbit_speed;
            orb.spin += orb.spin_speed;
        }

        for ring in &mut self.rings {
            if ring.progress(now_sec) > RING_RELAUNCH_PROGRESS {
                ring.start_time = now_sec;
            }
        }

        for stream in &mut self.streams {
            stream.rotation_z += STREAM_ROT_PER_TICK;
            stream.offset += STREAM_OFFSET_PER_TICK;
            if stream.offset > STREAM_OFFSET_WRAP {
                stream.offset = 0.0;
            }
        }
    }
}
