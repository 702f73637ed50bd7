// Page wiring: selectors for the elements the app drives.
pub const CANVAS_SELECTOR: &str = ".webgl";
pub const NAV_SELECTOR: &str = "nav";
pub const TITLE_SELECTOR: &str = ".title";

// Renderer clear color (linear)
pub const CLEAR_COLOR: [f64; 4] = [0.0, 0.0, 0.0, 1.0];

// Depth buffer format for the scene pass
pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;
