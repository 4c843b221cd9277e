//! Procedural construction of every hero entity.
//!
//! Construction runs once per session from the resolved [`SceneConfig`] and
//! a seeded RNG; entity lists keep a fixed cardinality afterwards. Nothing
//! here touches a clock or a platform API.

use glam::Vec3;
use rand::prelude::*;

use crate::config::SceneConfig;
use crate::constants::*;
use crate::palette::hsl_to_rgb;

/// One point of the neural network cloud.
#[derive(Clone, Copy, Debug)]
pub struct NetworkNode {
    pub position: Vec3,
    pub velocity: Vec3,
    pub color: Vec3,
}

/// A line between two nodes whose distance was below threshold at build
/// time. Endpoints are a snapshot: the edge does not follow its nodes as
/// they drift (topology and geometry are frozen at construction).
#[derive(Clone, Copy, Debug)]
pub struct ConnectionEdge {
    pub a: u32,
    pub b: u32,
    pub start: Vec3,
    pub end: Vec3,
    pub color: Vec3,
    /// Normalized proximity at build time; closer pairs are brighter.
    pub intensity: f32,
}

/// A floating body orbiting the scene center.
#[derive(Clone, Copy, Debug)]
pub struct Orb {
    pub angle: f32,
    pub radius: f32,
    pub z: f32,
    pub orbit_speed: f32,
    pub spin: f32,
    pub spin_speed: f32,
    pub size: f32,
    pub bob_phase: f32,
    pub color: Vec3,
    pub wireframe: bool,
}

impl Orb {
    /// Cartesian position derived from the current orbit angle, with the
    /// vertical bob applied from wall-clock time.
    pub fn position(&self, now_sec: f64) -> Vec3 {
        let bob = ((now_sec * ORB_BOB_RATE + self.bob_phase as f64).sin() as f32)
            * ORB_BOB_AMPLITUDE;
        Vec3::new(
            self.angle.cos() * self.radius,
            self.angle.sin() * self.radius + bob,
            self.z,
        )
    }
}

/// Central wireframe icosahedron with a counter-rotating inner shell.
#[derive(Clone, Copy, Debug)]
pub struct CoreMesh {
    pub rotation: Vec3,
    pub inner_rotation: Vec3,
    pub scale: f32,
}

impl Default for CoreMesh {
    fn default() -> Self {
        Self {
            rotation: Vec3::ZERO,
            inner_rotation: Vec3::ZERO,
            scale: 1.0,
        }
    }
}

/// Decorative wireframe cube, rotation-only.
#[derive(Clone, Copy, Debug, Default)]
pub struct HologramCube {
    pub rotation: Vec3,
}

/// A perpetually-looping expanding ring pulse. Never destroyed; relaunches
/// itself once its progress passes the completion threshold.
#[derive(Clone, Copy, Debug)]
pub struct WaveRing {
    pub start_time: f64,
    pub duration: f64,
}

impl WaveRing {
    /// Progress in \[0, 1), periodic in `duration` for any `now`.
    pub fn progress(&self, now_sec: f64) -> f64 {
        (now_sec - self.start_time).rem_euclid(self.duration) / self.duration
    }

    pub fn scale(&self, now_sec: f64) -> f32 {
        1.0 + self.progress(now_sec) as f32 * RING_SCALE_SPAN
    }

    pub fn opacity(&self, now_sec: f64) -> f32 {
        (1.0 - self.progress(now_sec) as f32) * RING_BASE_OPACITY
    }
}

/// Helical strip of points with a flowing brightness offset.
#[derive(Clone, Debug)]
pub struct DataStream {
    pub points: Vec<Vec3>,
    pub colors: Vec<Vec3>,
    pub rotation_z: f32,
    pub offset: f32,
}

/// Purely decorative background point cloud; no connections, no motion.
#[derive(Clone, Debug, Default)]
pub struct ParticleField {
    pub positions: Vec<Vec3>,
    pub colors: Vec<Vec3>,
}

/// Sample a point uniformly over the unit sphere surface.
///
/// phi = acos(2u - 1) compensates for the shrinking circumference toward
/// the poles; sampling phi uniformly instead would clump points there.
pub fn sample_unit_sphere(rng: &mut impl Rng) -> Vec3 {
    let theta = rng.gen::<f32>() * std::f32::consts::TAU;
    let phi = (2.0 * rng.gen::<f32>() - 1.0).acos();
    Vec3::new(
        phi.sin() * theta.cos(),
        phi.sin() * theta.sin(),
        phi.cos(),
    )
}

pub fn build_network_nodes(config: &SceneConfig, rng: &mut impl Rng) -> Vec<NetworkNode> {
    (0..config.network_nodes)
        .map(|_| {
            let radius = NODE_RADIUS_BASE + rng.gen::<f32>() * NODE_RADIUS_SPAN;
            let position = sample_unit_sphere(rng) * radius;
            let color = hsl_to_rgb(
                NODE_HUE_BASE + rng.gen::<f32>() * NODE_HUE_SPAN,
                1.0,
                NODE_LIGHTNESS_BASE + rng.gen::<f32>() * NODE_LIGHTNESS_SPAN,
            );
            let velocity = Vec3::new(
                (rng.gen::<f32>() - 0.5) * NODE_VELOCITY_RANGE,
                (rng.gen::<f32>() - 0.5) * NODE_VELOCITY_RANGE,
                (rng.gen::<f32>() - 0.5) * NODE_VELOCITY_RANGE,
            );
            NetworkNode {
                position,
                velocity,
                color,
            }
        })
        .collect()
}

/// Build the connection graph from a snapshot of node positions.
///
/// Index-ascending half-matrix scan so each unordered pair is considered at
/// most once; the per-node and global caps bound what is otherwise an
/// O(N^2) edge count. N stays in the tens-to-hundreds range, so the scan
/// itself is left unaccelerated on purpose.
pub fn build_connections(
    config: &SceneConfig,
    nodes: &[NetworkNode],
    rng: &mut impl Rng,
) -> Vec<ConnectionEdge> {
    let mut edges = Vec::with_capacity(config.max_connections);
    'outer: for i in 0..nodes.len() {
        let mut per_node = 0usize;
        for j in (i + 1)..nodes.len() {
            if per_node >= config.max_connections_per_node {
                break;
            }
            if edges.len() >= config.max_connections {
                break 'outer;
            }
            let distance = nodes[i].position.distance(nodes[j].position);
            if distance < config.connection_distance {
                let intensity = 1.0 - distance / config.connection_distance;
                let color = hsl_to_rgb(
                    NODE_HUE_BASE + rng.gen::<f32>() * EDGE_HUE_SPAN,
                    1.0,
                    0.3 + intensity * 0.4,
                );
                edges.push(ConnectionEdge {
                    a: i as u32,
                    b: j as u32,
                    start: nodes[i].position,
                    end: nodes[j].position,
                    color,
                    intensity,
                });
                per_node += 1;
            }
        }
    }
    edges
}

pub fn build_orbs(config: &SceneConfig, rng: &mut impl Rng) -> Vec<Orb> {
    (0..config.orb_count)
        .map(|i| {
            let angle = i as f32 / config.orb_count.max(1) as f32 * std::f32::consts::TAU;
            Orb {
                angle,
                radius: ORB_RADIUS_BASE + rng.gen::<f32>() * ORB_RADIUS_SPAN,
                z: (rng.gen::<f32>() - 0.5) * ORB_Z_SPAN,
                orbit_speed: ORB_ORBIT_SPEED_BASE + rng.gen::<f32>() * ORB_ORBIT_SPEED_SPAN,
                spin: 0.0,
                spin_speed: (rng.gen::<f32>() - 0.5) * ORB_SPIN_RANGE,
                size: ORB_SIZE_BASE + rng.gen::<f32>() * ORB_SIZE_SPAN,
                bob_phase: rng.gen::<f32>() * std::f32::consts::TAU,
                color: hsl_to_rgb(0.5 + rng.gen::<f32>() * 0.3, 1.0, 0.6),
                wireframe: rng.gen::<f32>() > 0.5,
            }
        })
        .collect()
}

/// Rings start staggered so their pulse cycles stay out of phase.
pub fn build_wave_rings(config: &SceneConfig) -> Vec<WaveRing> {
    let count = if config.enable_waves {
        config.wave_rings
    } else {
        0
    };
    (0..count)
        .map(|i| WaveRing {
            start_time: -(i as f64) * RING_DURATION_SEC / count.max(1) as f64,
            duration: RING_DURATION_SEC,
        })
        .collect()
}

pub fn build_data_streams(config: &SceneConfig) -> Vec<DataStream> {
    let count = if config.enable_data_flow {
        config.data_streams
    } else {
        0
    };
    (0..count)
        .map(|i| {
            let phase = i as f32 * std::f32::consts::TAU / count.max(1) as f32;
            let mut points = Vec::with_capacity(STREAM_SAMPLES);
            let mut colors = Vec::with_capacity(STREAM_SAMPLES);
            for j in 0..STREAM_SAMPLES {
                let t = j as f32 / STREAM_SAMPLES as f32;
                let angle = t * std::f32::consts::TAU * 2.0 + phase;
                let radius =
                    STREAM_RADIUS_BASE + (t * std::f32::consts::TAU).sin() * STREAM_RADIUS_WOBBLE;
                points.push(Vec3::new(
                    angle.cos() * radius,
                    angle.sin() * radius,
                    (t - 0.5) * STREAM_DEPTH,
                ));
                colors.push(hsl_to_rgb(0.5 + i as f32 * 0.15, 1.0, 0.5 + t * 0.3));
            }
            DataStream {
                points,
                colors,
                rotation_z: 0.0,
                offset: i as f32 * STREAM_OFFSET_WRAP / count.max(1) as f32,
            }
        })
        .collect()
}

pub fn build_particles(config: &SceneConfig, rng: &mut impl Rng) -> ParticleField {
    let mut field = ParticleField {
        positions: Vec::with_capacity(config.background_particles),
        colors: Vec::with_capacity(config.background_particles),
    };
    for _ in 0..config.background_particles {
        field.positions.push(Vec3::new(
            (rng.gen::<f32>() - 0.5) * PARTICLE_EXTENT,
            (rng.gen::<f32>() - 0.5) * PARTICLE_EXTENT,
            (rng.gen::<f32>() - 0.5) * PARTICLE_EXTENT,
        ));
        field.colors.push(hsl_to_rgb(
            PARTICLE_HUE_BASE + rng.gen::<f32>() * PARTICLE_HUE_SPAN,
            PARTICLE_SATURATION,
            0.5,
        ));
    }
    field
}
