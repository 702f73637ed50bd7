use super::camera::PerspectiveCamera;
use super::color::Rgb8;
use super::constants::*;
use super::drag::ColorDrag;
use super::orbit::{OrbitConfig, OrbitControls};
use super::timeline::{Timeline, TimelineProperty};
use super::viewport::ViewportSize;
use glam::{Mat4, Vec3};
use smallvec::SmallVec;

/// Host input, already reduced to what the scene needs.
///
/// Pointer coordinates are page pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    PointerDown { x: f32, y: f32 },
    PointerMove { x: f32, y: f32 },
    PointerUp,
    Wheel { delta_y: f32 },
    Resize { width: u32, height: u32 },
}

#[derive(Clone, Copy, Debug)]
pub struct Material {
    /// sRGB-encoded base color, each channel in [0, 1].
    pub color: Vec3,
    pub roughness: f32,
    pub metalness: f32,
}

#[derive(Clone, Copy, Debug)]
pub struct PointLight {
    pub position: Vec3,
    pub color: Vec3,
    pub intensity: f32,
    pub distance: f32,
}

/// Everything the renderer needs to draw one frame.
#[derive(Clone, Copy, Debug)]
pub struct FrameSnapshot {
    pub view_proj: Mat4,
    pub model: Mat4,
    pub eye: Vec3,
    pub material: Material,
    pub light: PointLight,
    /// Backing-store size of the output surface in device pixels.
    pub surface_size: (u32, u32),
}

/// Output surface for the render loop.
pub trait Draw {
    type Error;
    fn draw(&mut self, frame: &FrameSnapshot) -> Result<(), Self::Error>;
}

/// Style changes for page elements produced by the entrance timeline.
pub type StyleUpdates = SmallVec<[(TimelineProperty, f32); 4]>;

/// Treat long stalls (hidden tab, debugger) as a single short frame.
#[inline]
pub fn smooth_frame_dt(dt_sec: f32) -> f32 {
    if !dt_sec.is_finite() || dt_sec < 0.0 {
        0.0
    } else if dt_sec > LAG_THRESHOLD_SEC {
        LAG_ADJUSTED_SEC
    } else {
        dt_sec
    }
}

/// Owning context for the single-sphere scene.
///
/// All mutable state lives here and is only touched from the page's event
/// and animation-frame callbacks.
pub struct Scene {
    viewport: ViewportSize,
    pixel_ratio: f32,
    surface_size: (u32, u32),
    pub camera: PerspectiveCamera,
    pub controls: OrbitControls,
    pub drag: ColorDrag,
    pub material: Material,
    pub light: PointLight,
    pub mesh_scale: Vec3,
    timeline: Timeline,
}

impl Scene {
    pub fn new(viewport: ViewportSize, pixel_ratio: f32) -> Self {
        Self::with_orbit(viewport, pixel_ratio, OrbitConfig::default())
    }

    pub fn with_orbit(viewport: ViewportSize, pixel_ratio: f32, orbit: OrbitConfig) -> Self {
        let base = Rgb8::from_array(SPHERE_BASE_COLOR).to_unit();
        Self {
            viewport,
            pixel_ratio,
            surface_size: viewport.scaled(pixel_ratio),
            camera: PerspectiveCamera::scene_default(viewport.aspect()),
            controls: OrbitControls::new(orbit, Vec3::ZERO),
            drag: ColorDrag::new(base, COLOR_TWEEN_SEC),
            material: Material {
                color: base,
                roughness: SPHERE_ROUGHNESS,
                metalness: SPHERE_METALNESS,
            },
            light: PointLight {
                position: Vec3::from(LIGHT_POSITION),
                color: Vec3::from(LIGHT_COLOR),
                intensity: LIGHT_INTENSITY,
                distance: LIGHT_DISTANCE,
            },
            mesh_scale: Vec3::ONE,
            timeline: Timeline::entrance(),
        }
    }

    #[inline]
    pub fn viewport(&self) -> ViewportSize {
        self.viewport
    }

    #[inline]
    pub fn surface_size(&self) -> (u32, u32) {
        self.surface_size
    }

    #[inline]
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn handle(&mut self, ev: InputEvent) {
        match ev {
            InputEvent::PointerDown { x, y } => {
                self.drag.pointer_down();
                self.controls.begin_rotate(x, y);
            }
            InputEvent::PointerMove { x, y } => {
                self.controls
                    .rotate_to(x, y, self.viewport.height() as f32);
                self.drag
                    .pointer_move(x, y, &self.viewport, self.material.color);
            }
            InputEvent::PointerUp => {
                self.drag.pointer_up();
                self.controls.end_rotate();
            }
            InputEvent::Wheel { delta_y } => self.controls.wheel(delta_y),
            InputEvent::Resize { width, height } => self.resize(width, height),
        }
    }

    /// Viewport, camera lens and surface size change together, so the next
    /// snapshot never pairs a new surface with an old aspect ratio.
    fn resize(&mut self, width: u32, height: u32) {
        self.viewport = ViewportSize::new(width, height);
        self.camera.aspect = self.viewport.aspect();
        self.camera.update_projection_matrix();
        self.surface_size = self.viewport.scaled(self.pixel_ratio);
        log::debug!(
            "[resize] {}x{} surface={}x{}",
            self.viewport.width(),
            self.viewport.height(),
            self.surface_size.0,
            self.surface_size.1
        );
    }

    /// Step the color tween and the entrance timeline.
    ///
    /// Mesh scale is applied here; page-element styles are returned for the
    /// host to apply.
    pub fn tick_animations(&mut self, dt_sec: f32) -> StyleUpdates {
        if let Some(c) = self.drag.advance(dt_sec) {
            self.material.color = c;
        }
        let mut styles = StyleUpdates::new();
        let mesh_scale = &mut self.mesh_scale;
        self.timeline.advance(dt_sec, |property, value| match property {
            TimelineProperty::ObjectScale => *mesh_scale = Vec3::splat(value),
            _ => styles.push((property, value)),
        });
        styles
    }

    #[inline]
    pub fn advance_camera(&mut self, dt_sec: f32) {
        self.controls.advance(&mut self.camera, dt_sec);
    }

    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot {
            view_proj: self.camera.view_projection(),
            model: Mat4::from_scale(self.mesh_scale),
            eye: self.camera.position,
            material: self.material,
            light: self.light,
            surface_size: self.surface_size,
        }
    }

    /// One loop iteration: advance the controls, then draw.
    pub fn render_frame<D: Draw>(&mut self, dt_sec: f32, out: &mut D) -> Result<(), D::Error> {
        self.advance_camera(dt_sec);
        out.draw(&self.snapshot())
    }
}
