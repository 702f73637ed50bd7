pub mod camera;
pub mod color;
pub mod constants;
pub mod drag;
pub mod ease;
pub mod geometry;
pub mod orbit;
pub mod scene;
pub mod timeline;
pub mod viewport;

pub use constants::*;
pub use geometry::SphereMesh;
pub use scene::{Draw, FrameSnapshot, InputEvent, Scene};
pub use viewport::ViewportSize;

// Shaders bundled as string constants
pub static SPHERE_WGSL: &str = include_str!("../../shaders/sphere.wgsl");
