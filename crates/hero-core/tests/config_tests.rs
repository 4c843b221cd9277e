// Tier to scene-parameter resolution.

use hero_core::{HeroScene, QualityTier, SceneConfig};

#[test]
fn tier_monotonicity_of_counts() {
    let high = SceneConfig::for_tier(QualityTier::High);
    let medium = SceneConfig::for_tier(QualityTier::Medium);
    let low = SceneConfig::for_tier(QualityTier::Low);

    assert!(high.network_nodes > medium.network_nodes);
    assert!(medium.network_nodes > low.network_nodes);
    assert!(high.max_connections > medium.max_connections);
    assert!(medium.max_connections > low.max_connections);
    assert!(high.background_particles > medium.background_particles);
    assert!(medium.background_particles > low.background_particles);
    assert!(high.orb_count > medium.orb_count);
}

#[test]
fn low_tier_disables_heavy_features() {
    let low = SceneConfig::for_tier(QualityTier::Low);
    assert!(!low.enable_bloom);
    assert!(!low.enable_waves);
    assert!(!low.enable_data_flow);
    assert_eq!(low.wave_rings, 0);
    assert_eq!(low.data_streams, 0);
    assert_eq!(low.update_interval, 2);
    assert_eq!(low.max_pixel_ratio, 1.0);
}

#[test]
fn non_low_tiers_update_every_tick() {
    assert_eq!(SceneConfig::for_tier(QualityTier::High).update_interval, 1);
    assert_eq!(
        SceneConfig::for_tier(QualityTier::Medium).update_interval,
        1
    );
}

#[test]
fn high_tier_parameter_values() {
    let high = SceneConfig::for_tier(QualityTier::High);
    assert_eq!(high.network_nodes, 100);
    assert_eq!(high.max_connections, 120);
    assert_eq!(high.max_connections_per_node, 5);
    assert_eq!(high.orb_count, 6);
    assert_eq!(high.background_particles, 200);
    assert_eq!(high.wave_rings, 3);
    assert_eq!(high.data_streams, 3);
    assert_eq!(high.max_pixel_ratio, 2.0);
    assert!(high.enable_bloom);
}

#[test]
fn resolution_is_deterministic() {
    let a = SceneConfig::for_tier(QualityTier::Medium);
    let b = SceneConfig::for_tier(QualityTier::Medium);
    assert_eq!(a.network_nodes, b.network_nodes);
    assert_eq!(a.max_connections, b.max_connections);
    assert_eq!(a.geometry_detail, b.geometry_detail);
}

#[test]
fn emitted_geometry_fits_declared_capacities() {
    for tier in [QualityTier::High, QualityTier::Medium, QualityTier::Low] {
        let config = SceneConfig::for_tier(tier);
        let scene = HeroScene::new(config.clone(), 7);
        let geo = scene.frame_geometry(1.25);
        assert!(
            geo.points.len() <= config.point_capacity(),
            "{tier:?}: {} points over capacity {}",
            geo.points.len(),
            config.point_capacity()
        );
        assert!(
            geo.lines.len() <= config.line_vertex_capacity(),
            "{tier:?}: {} line vertices over capacity {}",
            geo.lines.len(),
            config.line_vertex_capacity()
        );
        assert_eq!(geo.lines.len() % 2, 0, "line list must pair up");
    }
}
