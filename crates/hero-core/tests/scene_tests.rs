// Procedural construction of scene entities.

use fnv::FnvHashSet;
use hero_core::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn high_config() -> SceneConfig {
    SceneConfig::for_tier(QualityTier::High)
}

#[test]
fn sphere_samples_are_unit_length() {
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..500 {
        let v = sample_unit_sphere(&mut rng);
        assert!((v.length() - 1.0).abs() < 1e-4, "not on unit sphere: {v:?}");
    }
}

#[test]
fn sphere_samples_cover_both_hemispheres() {
    let mut rng = StdRng::seed_from_u64(2);
    let mut above = 0;
    let mut below = 0;
    for _ in 0..1000 {
        if sample_unit_sphere(&mut rng).z > 0.0 {
            above += 1;
        } else {
            below += 1;
        }
    }
    // z = cos(phi) is uniform on [-1, 1], so expect a rough 50/50 split.
    assert!(above > 350 && below > 350, "split {above}/{below}");
}

#[test]
fn sphere_z_coordinate_is_uniform() {
    // A uniform-phi sampler would pass the hemisphere split above while
    // piling samples near the poles; the binned histogram of z catches it.
    const DRAWS: usize = 20_000;
    const BINS: usize = 10;
    let mut rng = StdRng::seed_from_u64(7);
    let mut counts = [0usize; BINS];
    for _ in 0..DRAWS {
        let z = sample_unit_sphere(&mut rng).z;
        let bin = (((z + 1.0) / 2.0 * BINS as f32) as usize).min(BINS - 1);
        counts[bin] += 1;
    }
    for (i, &count) in counts.iter().enumerate() {
        let fraction = count as f32 / DRAWS as f32;
        assert!(
            (fraction - 0.1).abs() < 0.02,
            "bin {i} holds fraction {fraction}, expected 0.1"
        );
    }
}

#[test]
fn nodes_lie_in_radius_band() {
    let config = high_config();
    let mut rng = StdRng::seed_from_u64(3);
    let nodes = build_network_nodes(&config, &mut rng);
    assert_eq!(nodes.len(), config.network_nodes);
    for node in &nodes {
        let r = node.position.length();
        assert!(
            (199.9..=350.1).contains(&r),
            "node radius {r} outside [200, 350]"
        );
        for c in node.velocity.to_array() {
            assert!(c.abs() <= 0.25, "velocity component {c} out of range");
        }
    }
}

#[test]
fn construction_is_deterministic_for_a_seed() {
    let config = high_config();
    let a = HeroScene::new(config.clone(), 99);
    let b = HeroScene::new(config, 99);
    assert_eq!(a.nodes.len(), b.nodes.len());
    for (na, nb) in a.nodes.iter().zip(b.nodes.iter()) {
        assert_eq!(na.position, nb.position);
        assert_eq!(na.velocity, nb.velocity);
    }
    assert_eq!(a.edges.len(), b.edges.len());
    for (ea, eb) in a.edges.iter().zip(b.edges.iter()) {
        assert_eq!((ea.a, ea.b), (eb.a, eb.b));
    }
}

#[test]
fn connections_respect_distance_and_caps() {
    let config = high_config();
    let mut rng = StdRng::seed_from_u64(4);
    let nodes = build_network_nodes(&config, &mut rng);
    let edges = build_connections(&config, &nodes, &mut rng);

    assert!(edges.len() <= config.max_connections);
    let mut seen: FnvHashSet<(u32, u32)> = FnvHashSet::default();
    let mut per_node = vec![0usize; nodes.len()];
    for edge in &edges {
        assert!(edge.a < edge.b, "pair not ordered: {} {}", edge.a, edge.b);
        assert!(seen.insert((edge.a, edge.b)), "duplicate pair {edge:?}");
        per_node[edge.a as usize] += 1;
        let d = nodes[edge.a as usize]
            .position
            .distance(nodes[edge.b as usize].position);
        assert!(d < config.connection_distance);
        assert!(edge.intensity > 0.0 && edge.intensity <= 1.0);
        // Snapshot endpoints match the nodes as built.
        assert_eq!(edge.start, nodes[edge.a as usize].position);
        assert_eq!(edge.end, nodes[edge.b as usize].position);
    }
    // The per-node cap only bounds edges initiated by the lower index.
    for (i, &n) in per_node.iter().enumerate() {
        assert!(
            n <= config.max_connections_per_node,
            "node {i} initiated {n} edges"
        );
    }
}

#[test]
fn orbs_are_evenly_spaced_around_the_circle() {
    let config = high_config();
    let mut rng = StdRng::seed_from_u64(5);
    let orbs = build_orbs(&config, &mut rng);
    assert_eq!(orbs.len(), config.orb_count);
    let step = std::f32::consts::TAU / config.orb_count as f32;
    for (i, orb) in orbs.iter().enumerate() {
        assert!((orb.angle - i as f32 * step).abs() < 1e-5);
        assert!(orb.radius >= 300.0 && orb.radius <= 500.0);
        assert!(orb.z.abs() <= 200.0);
    }
}

#[test]
fn wave_rings_start_staggered() {
    let config = high_config();
    let rings = build_wave_rings(&config);
    assert_eq!(rings.len(), config.wave_rings);
    let now = 0.0;
    let mut progresses: Vec<f64> = rings.iter().map(|r| r.progress(now)).collect();
    progresses.sort_by(|x, y| x.partial_cmp(y).unwrap());
    for pair in progresses.windows(2) {
        assert!(
            (pair[1] - pair[0] - 1.0 / rings.len() as f64).abs() < 1e-9,
            "rings not evenly out of phase: {progresses:?}"
        );
    }
}

#[test]
fn wave_ring_progress_is_periodic_and_bounded() {
    let ring = WaveRing {
        start_time: 0.0,
        duration: 3.0,
    };
    for i in 0..200 {
        let now = i as f64 * 0.37;
        let p = ring.progress(now);
        assert!((0.0..1.0).contains(&p), "progress {p} at t={now}");
        assert!(ring.scale(now) >= 1.0 && ring.scale(now) <= 4.0);
        assert!(ring.opacity(now) >= 0.0 && ring.opacity(now) <= 0.6);
    }
    // Same phase one full period later.
    assert!((ring.progress(1.0) - ring.progress(4.0)).abs() < 1e-9);
}

#[test]
fn data_streams_have_fixed_sample_count_and_staggered_offsets() {
    let config = high_config();
    let streams = build_data_streams(&config);
    assert_eq!(streams.len(), config.data_streams);
    for stream in &streams {
        assert_eq!(stream.points.len(), 50);
        assert_eq!(stream.colors.len(), 50);
    }
    for pair in streams.windows(2) {
        assert!(pair[0].offset != pair[1].offset, "offsets not staggered");
    }
}

#[test]
fn low_tier_builds_no_rings_or_streams() {
    let low = SceneConfig::for_tier(QualityTier::Low);
    assert!(build_wave_rings(&low).is_empty());
    assert!(build_data_streams(&low).is_empty());
}

#[test]
fn particles_fill_the_bounding_cube() {
    let config = high_config();
    let mut rng = StdRng::seed_from_u64(6);
    let field = build_particles(&config, &mut rng);
    assert_eq!(field.positions.len(), config.background_particles);
    assert_eq!(field.colors.len(), config.background_particles);
    for p in &field.positions {
        for c in p.to_array() {
            assert!(c.abs() <= 1000.0, "particle coordinate {c} out of cube");
        }
    }
}
