// Per-tick animation driver behavior.

use glam::Vec2;
use hero_core::*;

fn scene(tier: QualityTier) -> HeroScene {
    HeroScene::new(SceneConfig::for_tier(tier), 42)
}

#[test]
fn every_tick_updates_on_high_tier() {
    let mut s = scene(QualityTier::High);
    let input = InputSignal::default();
    for i in 0..10 {
        assert!(s.tick(i as f64 / 60.0, &input), "tick {i} skipped");
    }
    assert_eq!(s.frame_count(), 10);
}

#[test]
fn low_tier_skips_every_other_update_but_state_survives() {
    let mut s = scene(QualityTier::Low);
    let input = InputSignal::default();

    // First tick (frame 1) is a skip with interval 2, second is an update.
    assert!(!s.tick(0.0, &input));
    let rot_after_skip = s.network_rotation;
    assert_eq!(rot_after_skip.y, 0.0, "skipped tick must not mutate state");
    assert!(s.tick(1.0 / 60.0, &input));
    assert!(s.network_rotation.y > 0.0);

    // Rendering still works on a skipped frame.
    assert!(!s.tick(2.0 / 60.0, &input));
    let geo = s.frame_geometry(2.0 / 60.0);
    assert!(!geo.points.is_empty());
}

#[test]
fn network_spin_accumulates_per_update() {
    let mut s = scene(QualityTier::High);
    let input = InputSignal::default();
    for i in 0..100 {
        s.tick(i as f64 / 60.0, &input);
    }
    assert!((s.network_rotation.y - 100.0 * 0.0005).abs() < 1e-5);
}

#[test]
fn pointer_rotation_converges_smoothly() {
    let mut s = scene(QualityTier::High);
    let input = InputSignal {
        pointer: Vec2::new(400.0, -200.0),
    };
    let target = input.pointer * 0.0001;

    s.tick(0.0, &input);
    let first = s.target_rotation;
    // One step moves 5% of the way, never snaps.
    assert!((first.x - target.x * 0.05).abs() < 1e-7);
    assert!(first.length() < target.length());

    for i in 1..500 {
        s.tick(i as f64 / 60.0, &input);
    }
    assert!(
        (s.target_rotation - target).length() < target.length() * 0.01,
        "did not converge: {:?} vs {:?}",
        s.target_rotation,
        target
    );
    // Pointer x maps to z tilt, pointer y to x tilt.
    assert_eq!(s.network_rotation.z, s.target_rotation.x);
    assert_eq!(s.network_rotation.x, s.target_rotation.y);
}

#[test]
fn nodes_bounce_off_the_radial_band() {
    let mut s = scene(QualityTier::High);
    // Force a node just inside the outer bound, moving outward.
    s.nodes[0].position = glam::Vec3::new(399.9, 0.0, 0.0);
    s.nodes[0].velocity = glam::Vec3::new(1.0, 0.0, 0.0);
    let input = InputSignal::default();
    s.tick(0.0, &input);
    assert_eq!(
        s.nodes[0].velocity,
        glam::Vec3::new(-1.0, 0.0, 0.0),
        "outward velocity should flip at the band edge"
    );

    // And inward past the inner bound.
    s.nodes[1].position = glam::Vec3::new(150.2, 0.0, 0.0);
    s.nodes[1].velocity = glam::Vec3::new(-1.0, 0.0, 0.0);
    s.tick(1.0 / 60.0, &input);
    assert_eq!(s.nodes[1].velocity, glam::Vec3::new(1.0, 0.0, 0.0));
}

#[test]
fn edges_stay_frozen_while_nodes_drift() {
    let mut s = scene(QualityTier::High);
    assert!(!s.edges.is_empty(), "seed should produce edges");
    let before: Vec<_> = s.edges.iter().map(|e| (e.start, e.end)).collect();
    let input = InputSignal::default();
    for i in 0..300 {
        s.tick(i as f64 / 60.0, &input);
    }
    assert!(s.nodes.iter().any(|n| n.velocity.length() > 0.0));
    for (edge, (start, end)) in s.edges.iter().zip(before) {
        assert_eq!(edge.start, start, "edge endpoint drifted");
        assert_eq!(edge.end, end);
    }
}

#[test]
fn edge_opacity_pulses_within_band() {
    let mut s = scene(QualityTier::High);
    let input = InputSignal::default();
    let mut lo = f32::MAX;
    let mut hi = f32::MIN;
    for i in 0..600 {
        s.tick(i as f64 / 60.0, &input);
        lo = lo.min(s.edge_opacity);
        hi = hi.max(s.edge_opacity);
    }
    // base 0.3, amplitude 0.2
    assert!(lo >= 0.1 - 1e-4 && lo < 0.15, "low bound {lo}");
    assert!(hi <= 0.5 + 1e-4 && hi > 0.45, "high bound {hi}");
}

#[test]
fn rings_relaunch_near_completion() {
    let mut s = scene(QualityTier::High);
    let input = InputSignal::default();
    // Drive one ring to the end of its cycle.
    s.rings[0].start_time = 0.0;
    let near_end = 0.96 * s.rings[0].duration;
    s.tick(near_end, &input);
    assert_eq!(
        s.rings[0].start_time, near_end,
        "ring should relaunch past 95% progress"
    );
    assert!(s.rings[0].progress(near_end) < 0.01);
}

#[test]
fn stream_offset_wraps() {
    let mut s = scene(QualityTier::High);
    let input = InputSignal::default();
    s.streams[0].offset = 99.5;
    s.tick(0.0, &input);
    assert_eq!(s.streams[0].offset, 0.0);
}

#[test]
fn core_scale_pulses_around_unity() {
    let mut s = scene(QualityTier::High);
    let input = InputSignal::default();
    let mut lo = f32::MAX;
    let mut hi = f32::MIN;
    for i in 0..700 {
        s.tick(i as f64 / 60.0, &input);
        lo = lo.min(s.core.scale);
        hi = hi.max(s.core.scale);
    }
    assert!(lo >= 0.9 - 1e-4 && hi <= 1.1 + 1e-4, "scale band [{lo}, {hi}]");
}
