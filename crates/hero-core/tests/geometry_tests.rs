// Wireframe derivation, color conversion, camera.

use hero_core::palette::hsl_to_rgb;
use hero_core::*;

#[test]
fn icosahedron_wireframe_has_thirty_edges() {
    let verts = icosahedron_vertices();
    for v in &verts {
        assert!((v.length() - 1.0).abs() < 1e-5);
    }
    assert_eq!(wireframe_edges(&verts).len(), ICOSAHEDRON_EDGES);
}

#[test]
fn octahedron_wireframe_has_twelve_edges() {
    assert_eq!(
        wireframe_edges(&octahedron_vertices()).len(),
        OCTAHEDRON_EDGES
    );
}

#[test]
fn hsl_primaries() {
    let red = hsl_to_rgb(0.0, 1.0, 0.5);
    assert!((red.x - 1.0).abs() < 1e-5 && red.y < 1e-5 && red.z < 1e-5);
    let green = hsl_to_rgb(1.0 / 3.0, 1.0, 0.5);
    assert!(green.y > 0.999 && green.x < 1e-4 && green.z < 1e-4);
    let blue = hsl_to_rgb(2.0 / 3.0, 1.0, 0.5);
    assert!(blue.z > 0.999 && blue.x < 1e-4 && blue.y < 1e-4);
}

#[test]
fn hsl_extremes_and_hue_wrap() {
    let white = hsl_to_rgb(0.42, 1.0, 1.0);
    assert!(white.min_element() > 0.999);
    let black = hsl_to_rgb(0.42, 1.0, 0.0);
    assert!(black.max_element() < 1e-5);
    // Hue is periodic in 1.
    let a = hsl_to_rgb(0.2, 0.7, 0.5);
    let b = hsl_to_rgb(1.2, 0.7, 0.5);
    assert!((a - b).length() < 1e-5);
}

#[test]
fn zero_saturation_is_gray() {
    let gray = hsl_to_rgb(0.6, 0.0, 0.37);
    assert!((gray.x - 0.37).abs() < 1e-5);
    assert!((gray.y - 0.37).abs() < 1e-5);
    assert!((gray.z - 0.37).abs() < 1e-5);
}

#[test]
fn camera_tracks_viewport_aspect() {
    let mut cam = Camera::hero_default(1920, 1080);
    assert!((cam.aspect - 1920.0 / 1080.0).abs() < 1e-6);
    cam.set_viewport(800, 600);
    assert!((cam.aspect - 800.0 / 600.0).abs() < 1e-6);
    // Degenerate sizes clamp instead of dividing by zero.
    cam.set_viewport(0, 0);
    assert_eq!(cam.aspect, 1.0);
}

#[test]
fn view_proj_places_origin_in_front_of_camera() {
    let cam = Camera::hero_default(1000, 1000);
    let m = glam::Mat4::from_cols_array_2d(&cam.view_proj());
    let clip = m * glam::Vec4::new(0.0, 0.0, 0.0, 1.0);
    let ndc_z = clip.z / clip.w;
    assert!(clip.w > 0.0, "origin behind camera");
    assert!((0.0..=1.0).contains(&ndc_z), "origin outside depth range");
}
