// Scene layout and interaction tuning shared by the platform-free model.

// Sphere
pub const SPHERE_RADIUS: f32 = 3.0;
pub const SPHERE_WIDTH_SEGMENTS: u32 = 64;
pub const SPHERE_HEIGHT_SEGMENTS: u32 = 64;
pub const SPHERE_BASE_COLOR: [u8; 3] = [0x28, 0x7A, 0xB8]; // #287AB8
pub const SPHERE_ROUGHNESS: f32 = 0.5;
pub const SPHERE_METALNESS: f32 = 0.0;

// Point light
pub const LIGHT_POSITION: [f32; 3] = [0.0, 10.0, 10.0];
pub const LIGHT_COLOR: [f32; 3] = [1.0, 1.0, 1.0];
pub const LIGHT_INTENSITY: f32 = 200.0;
pub const LIGHT_DISTANCE: f32 = 100.0; // cutoff; 0 disables the window

// Camera
pub const CAMERA_FOV_DEG: f32 = 45.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 100.0;
pub const CAMERA_Z: f32 = 20.0;

// Backing store pixels per CSS pixel
pub const RENDER_PIXEL_RATIO: f32 = 2.0;

// Orbit controls
pub const ORBIT_DAMPING_FACTOR: f32 = 0.05; // fraction of pending rotation applied per reference frame
pub const ORBIT_REFERENCE_FPS: f32 = 60.0;
pub const ORBIT_ROTATE_SPEED: f32 = 1.0;
pub const ORBIT_AUTO_ROTATE_SPEED: f32 = 5.0; // turns per minute
pub const ORBIT_ZOOM_SPEED: f32 = 1.0;
pub const ORBIT_MIN_DISTANCE: f32 = 0.0;
pub const ORBIT_MAX_DISTANCE: f32 = f32::INFINITY;

// Color drag
pub const DRAG_BLUE_CHANNEL: u8 = 150;
pub const COLOR_TWEEN_SEC: f32 = 0.5;

// Entrance timeline
pub const TIMELINE_DEFAULT_SEC: f32 = 0.9;
pub const NAV_OFFSET_FROM_PERCENT: f32 = -100.0;

// Frame delta smoothing for backgrounded tabs
pub const LAG_THRESHOLD_SEC: f32 = 0.5;
pub const LAG_ADJUSTED_SEC: f32 = 1.0 / 30.0;
