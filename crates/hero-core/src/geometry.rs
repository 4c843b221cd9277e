//! CPU-side geometry emission.
//!
//! Each frame the scene is flattened into two GPU-ready lists: instanced
//! point sprites and line-list vertices. Entity counts are fixed for the
//! session, so renderers size their buffers once from
//! [`SceneConfig::point_capacity`] / [`SceneConfig::line_vertex_capacity`].

use std::sync::OnceLock;

use glam::{EulerRot, Mat3, Vec3};

use crate::animate::HeroScene;
use crate::constants::*;

pub const ICOSAHEDRON_EDGES: usize = 30;
pub const OCTAHEDRON_EDGES: usize = 12;
pub const CUBE_EDGES: usize = 12;

// Fixed theme colors for the decorative meshes
const CORE_COLOR: Vec3 = Vec3::new(0.0, 1.0, 1.0);
const CORE_OPACITY: f32 = 0.6;
const CORE_INNER_COLOR: Vec3 = Vec3::new(0.5, 0.0, 1.0);
const CORE_INNER_OPACITY: f32 = 0.3;
const CUBE_COLOR: Vec3 = Vec3::new(0.0, 0.36, 1.0);
const CUBE_OPACITY: f32 = 0.5;
const RING_COLOR: Vec3 = Vec3::new(0.0, 0.6, 1.0);
const NODE_OPACITY: f32 = 0.9;
const STREAM_OPACITY: f32 = 0.8;

/// One instanced point sprite (quad scaled by `size`, circular mask in the
/// fragment stage).
#[repr(C)]
#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PointInstance {
    pub pos: [f32; 3],
    pub size: f32,
    pub color: [f32; 4],
}

/// One vertex of the line list; segments are consecutive vertex pairs.
#[repr(C)]
#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LineVertex {
    pub pos: [f32; 3],
    pub color: [f32; 4],
}

#[derive(Default)]
pub struct FrameGeometry {
    pub points: Vec<PointInstance>,
    pub lines: Vec<LineVertex>,
}

impl FrameGeometry {
    pub fn with_capacity(points: usize, line_vertices: usize) -> Self {
        Self {
            points: Vec::with_capacity(points),
            lines: Vec::with_capacity(line_vertices),
        }
    }

    pub fn push_point(&mut self, pos: Vec3, size: f32, color: Vec3, alpha: f32) {
        self.points.push(PointInstance {
            pos: pos.to_array(),
            size,
            color: [color.x, color.y, color.z, alpha],
        });
    }

    pub fn push_line(&mut self, a: Vec3, b: Vec3, color: Vec3, alpha: f32) {
        let color = [color.x, color.y, color.z, alpha];
        self.lines.push(LineVertex {
            pos: a.to_array(),
            color,
        });
        self.lines.push(LineVertex {
            pos: b.to_array(),
            color,
        });
    }
}

pub fn icosahedron_vertices() -> [Vec3; 12] {
    let phi = (1.0 + 5.0_f32.sqrt()) / 2.0;
    let verts = [
        Vec3::new(-1.0, phi, 0.0),
        Vec3::new(1.0, phi, 0.0),
        Vec3::new(-1.0, -phi, 0.0),
        Vec3::new(1.0, -phi, 0.0),
        Vec3::new(0.0, -1.0, phi),
        Vec3::new(0.0, 1.0, phi),
        Vec3::new(0.0, -1.0, -phi),
        Vec3::new(0.0, 1.0, -phi),
        Vec3::new(phi, 0.0, -1.0),
        Vec3::new(phi, 0.0, 1.0),
        Vec3::new(-phi, 0.0, -1.0),
        Vec3::new(-phi, 0.0, 1.0),
    ];
    verts.map(|v| v.normalize())
}

pub fn octahedron_vertices() -> [Vec3; 6] {
    [
        Vec3::X,
        Vec3::NEG_X,
        Vec3::Y,
        Vec3::NEG_Y,
        Vec3::Z,
        Vec3::NEG_Z,
    ]
}

/// Derive the wireframe of a regular polyhedron by connecting every
/// shortest-distance vertex pair (the shared edge length).
pub fn wireframe_edges(verts: &[Vec3]) -> Vec<[usize; 2]> {
    let mut min_d = f32::MAX;
    for i in 0..verts.len() {
        for j in (i + 1)..verts.len() {
            min_d = min_d.min(verts[i].distance(verts[j]));
        }
    }
    let mut edges = Vec::new();
    for i in 0..verts.len() {
        for j in (i + 1)..verts.len() {
            if verts[i].distance(verts[j]) < min_d * 1.01 {
                edges.push([i, j]);
            }
        }
    }
    edges
}

fn icosahedron() -> &'static (Vec<Vec3>, Vec<[usize; 2]>) {
    static CACHE: OnceLock<(Vec<Vec3>, Vec<[usize; 2]>)> = OnceLock::new();
    CACHE.get_or_init(|| {
        let verts = icosahedron_vertices().to_vec();
        let edges = wireframe_edges(&verts);
        (verts, edges)
    })
}

fn octahedron() -> &'static (Vec<Vec3>, Vec<[usize; 2]>) {
    static CACHE: OnceLock<(Vec<Vec3>, Vec<[usize; 2]>)> = OnceLock::new();
    CACHE.get_or_init(|| {
        let verts = octahedron_vertices().to_vec();
        let edges = wireframe_edges(&verts);
        (verts, edges)
    })
}

fn emit_wireframe(
    geo: &mut FrameGeometry,
    shape: &(Vec<Vec3>, Vec<[usize; 2]>),
    center: Vec3,
    rotation: Mat3,
    scale: f32,
    color: Vec3,
    alpha: f32,
) {
    for [a, b] in &shape.1 {
        geo.push_line(
            center + rotation * (shape.0[*a] * scale),
            center + rotation * (shape.0[*b] * scale),
            color,
            alpha,
        );
    }
}

fn euler(v: Vec3) -> Mat3 {
    Mat3::from_euler(EulerRot::XYZ, v.x, v.y, v.z)
}

impl HeroScene {
    /// Flatten the current state into renderable point/line lists, applying
    /// the network group rotation and all time-based visual modulation.
    pub fn frame_geometry(&self, now_sec: f64) -> FrameGeometry {
        let mut geo = FrameGeometry::with_capacity(
            self.config.point_capacity(),
            self.config.line_vertex_capacity(),
        );
        let group = euler(self.network_rotation);

        for node in &self.nodes {
            geo.push_point(
                group * node.position,
                self.config.node_point_size,
                node.color,
                NODE_OPACITY,
            );
        }

        // Edges render from their build-time snapshot, only the group
        // rotation and the shared pulse opacity vary per frame.
        for edge in &self.edges {
            geo.push_line(
                group * edge.start,
                group * edge.end,
                edge.color,
                self.edge_opacity,
            );
        }

        // Background particles live outside the rotating network group.
        for (pos, color) in self
            .particles
            .positions
            .iter()
            .zip(self.particles.colors.iter())
        {
            geo.push_point(*pos, PARTICLE_SIZE, *color, PARTICLE_OPACITY);
        }

        let core_rot = euler(self.core.rotation);
        emit_wireframe(
            &mut geo,
            icosahedron(),
            Vec3::ZERO,
            core_rot,
            CORE_RADIUS * self.core.scale,
            CORE_COLOR,
            CORE_OPACITY,
        );
        // Inner shell rotates relative to the outer one, like a child mesh.
        emit_wireframe(
            &mut geo,
            icosahedron(),
            Vec3::ZERO,
            core_rot * euler(self.core.inner_rotation),
            CORE_INNER_RADIUS * self.core.scale,
            CORE_INNER_COLOR,
            CORE_INNER_OPACITY,
        );

        self.emit_cube(&mut geo);
        self.emit_orbs(&mut geo, now_sec);
        self.emit_rings(&mut geo, now_sec);
        self.emit_streams(&mut geo);

        geo
    }

    fn emit_cube(&self, geo: &mut FrameGeometry) {
        let rot = euler(self.cube.rotation);
        let h = CUBE_HALF_EXTENT;
        let corners: [Vec3; 8] = [
            Vec3::new(-h, -h, -h),
            Vec3::new(h, -h, -h),
            Vec3::new(h, h, -h),
            Vec3::new(-h, h, -h),
            Vec3::new(-h, -h, h),
            Vec3::new(h, -h, h),
            Vec3::new(h, h, h),
            Vec3::new(-h, h, h),
        ];
        const EDGES: [[usize; 2]; CUBE_EDGES] = [
            [0, 1],
            [1, 2],
            [2, 3],
            [3, 0],
            [4, 5],
            [5, 6],
            [6, 7],
            [7, 4],
            [0, 4],
            [1, 5],
            [2, 6],
            [3, 7],
        ];
        for [a, b] in EDGES {
            geo.push_line(rot * corners[a], rot * corners[b], CUBE_COLOR, CUBE_OPACITY);
        }
    }

    fn emit_orbs(&self, geo: &mut FrameGeometry, now_sec: f64) {
        for orb in &self.orbs {
            let pos = orb.position(now_sec);
            if orb.wireframe {
                let rot = Mat3::from_euler(
                    EulerRot::XYZ,
                    orb.spin,
                    orb.spin * ORB_SPIN_Y_FACTOR,
                    0.0,
                );
                emit_wireframe(geo, octahedron(), pos, rot, orb.size, orb.color, 0.8);
            } else {
                geo.push_point(pos, orb.size * 2.0, orb.color, 0.8);
            }
        }
    }

    fn emit_rings(&self, geo: &mut FrameGeometry, now_sec: f64) {
        let segments = self.config.geometry_detail.max(3);
        for ring in &self.rings {
            let radius = RING_BASE_RADIUS * ring.scale(now_sec);
            let alpha = ring.opacity(now_sec);
            for s in 0..segments {
                let a0 = s as f32 / segments as f32 * std::f32::consts::TAU;
                let a1 = (s + 1) as f32 / segments as f32 * std::f32::consts::TAU;
                geo.push_line(
                    Vec3::new(a0.cos() * radius, a0.sin() * radius, 0.0),
                    Vec3::new(a1.cos() * radius, a1.sin() * radius, 0.0),
                    RING_COLOR,
                    alpha,
                );
            }
        }
    }

    fn emit_streams(&self, geo: &mut FrameGeometry) {
        for stream in &self.streams {
            let rot = Mat3::from_rotation_z(stream.rotation_z);
            for (j, (pos, color)) in stream.points.iter().zip(stream.colors.iter()).enumerate() {
                // Flow highlight: a bright window sweeps along the strip as
                // the offset advances.
                let cycle = (j as f32 * 2.0 + stream.offset).rem_euclid(STREAM_OFFSET_WRAP)
                    / STREAM_OFFSET_WRAP;
                let boost = 1.0 + (1.0 - cycle) * 0.8;
                geo.push_point(rot * *pos, STREAM_POINT_SIZE, *color * boost, STREAM_OPACITY);
            }
        }
    }
}
