pub mod animate;
pub mod camera;
pub mod config;
pub mod constants;
pub mod geometry;
pub mod input;
pub mod palette;
pub mod quality;
pub mod scene;

// Shaders bundled as string constants
pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");
pub static POST_WGSL: &str = include_str!("../shaders/post.wgsl");

pub use animate::*;
pub use camera::*;
pub use config::*;
pub use constants::*;
pub use geometry::*;
pub use input::*;
pub use quality::*;
pub use scene::*;
