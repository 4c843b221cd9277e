//! Tier-derived scene parameters.
//!
//! All tier-dependent behavior is table-driven from this one bundle so that
//! construction and update code never branch on device signals directly.

use crate::constants::STREAM_SAMPLES;
use crate::geometry::{CUBE_EDGES, ICOSAHEDRON_EDGES, OCTAHEDRON_EDGES};
use crate::quality::QualityTier;

/// Immutable per-session configuration derived from the quality tier.
#[derive(Clone, Debug)]
pub struct SceneConfig {
    pub tier: QualityTier,
    /// Point count of the neural network cloud.
    pub network_nodes: usize,
    /// Euclidean distance below which two nodes are connected at build time.
    pub connection_distance: f32,
    /// Global cap on connection edges.
    pub max_connections: usize,
    /// Per-node cap applied during the half-matrix scan.
    pub max_connections_per_node: usize,
    pub orb_count: usize,
    pub background_particles: usize,
    pub wave_rings: usize,
    pub data_streams: usize,
    /// Subdivision detail for rings and other curved wireframes.
    pub geometry_detail: u32,
    pub node_point_size: f32,
    /// Process animation state only on every Nth tick (rendering is never
    /// skipped). 1 outside Low.
    pub update_interval: u64,
    pub enable_bloom: bool,
    pub enable_waves: bool,
    pub enable_data_flow: bool,
    /// Cap applied to the device pixel ratio when sizing the surface.
    pub max_pixel_ratio: f32,
}

impl SceneConfig {
    /// Pure tier -> parameter mapping; no randomness, no re-sampling.
    pub fn for_tier(tier: QualityTier) -> Self {
        use QualityTier::*;
        let low = matches!(tier, Low);
        Self {
            tier,
            network_nodes: match tier {
                High => 100,
                Medium => 60,
                Low => 40,
            },
            connection_distance: 180.0,
            max_connections: match tier {
                High => 120,
                Medium => 80,
                Low => 50,
            },
            max_connections_per_node: match tier {
                High => 5,
                Medium => 4,
                Low => 3,
            },
            orb_count: match tier {
                High => 6,
                Medium => 4,
                Low => 3,
            },
            background_particles: match tier {
                High => 200,
                Medium => 100,
                Low => 50,
            },
            wave_rings: if low { 0 } else { 3 },
            data_streams: if low { 0 } else { 3 },
            geometry_detail: match tier {
                High => 16,
                Medium => 12,
                Low => 8,
            },
            node_point_size: match tier {
                High => 6.0,
                Medium => 5.0,
                Low => 4.0,
            },
            update_interval: if low { 2 } else { 1 },
            enable_bloom: !low,
            enable_waves: !low,
            enable_data_flow: !low,
            max_pixel_ratio: match tier {
                High => 2.0,
                Medium => 1.5,
                Low => 1.0,
            },
        }
    }

    /// Upper bound on point instances emitted per frame; entity lists have
    /// fixed cardinality so renderers can size buffers once.
    pub fn point_capacity(&self) -> usize {
        self.network_nodes
            + self.background_particles
            + self.data_streams * STREAM_SAMPLES
            + self.orb_count
    }

    /// Upper bound on line vertices emitted per frame (two per segment).
    pub fn line_vertex_capacity(&self) -> usize {
        let polyhedra =
            2 * ICOSAHEDRON_EDGES + CUBE_EDGES + self.orb_count * OCTAHEDRON_EDGES;
        let rings = self.wave_rings * self.geometry_detail as usize;
        2 * (self.max_connections + polyhedra + rings)
    }
}
