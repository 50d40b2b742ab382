use std::ops::Range;

use glam::*;

use crate::Viewport;

/// A trait for cameras that can be used to project points onto a viewport.
pub trait CameraTrait {
    /// Get the view matrix.
    fn view(&self) -> Mat4;

    /// Get the projection matrix.
    fn projection(&self, aspect_ratio: f32) -> Mat4;
}

/// A camera.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// The position of the camera.
    pub pos: Vec3,
    /// The z range of the camera.
    pub z: Range<f32>,
    /// The vertical FOV.
    pub vertical_fov: f32,
    /// The pitch.
    pub pitch: f32,
    /// The yaw.
    pub yaw: f32,
}

impl Camera {
    /// Up direction.
    pub const UP: Vec3 = Vec3::Y;

    /// The pitch limit.
    pub const PITCH_LIMIT: Range<f32> =
        -std::f32::consts::FRAC_PI_2 + 1e-6..std::f32::consts::FRAC_PI_2 - 1e-6;

    /// Create a new camera.
    pub fn new(z: Range<f32>, vertical_fov: f32) -> Self {
        Self {
            pos: Vec3::ZERO,
            z,
            vertical_fov,
            pitch: 0.0,
            yaw: 0.0,
        }
    }

    /// Place the camera at `pos` facing `target`.
    pub fn look_at(mut self, pos: Vec3, target: Vec3) -> Self {
        let dir = (target - pos).normalize_or(Vec3::Z);

        self.pos = pos;
        self.pitch = dir
            .y
            .asin()
            .clamp(Self::PITCH_LIMIT.start, Self::PITCH_LIMIT.end);
        self.yaw = dir.x.atan2(dir.z).rem_euclid(2.0 * std::f32::consts::PI);
        self
    }

    /// Get the forward vector.
    pub fn get_forward(&self) -> Vec3 {
        Vec3::new(
            self.pitch.cos() * self.yaw.sin(),
            self.pitch.sin(),
            self.pitch.cos() * self.yaw.cos(),
        )
    }
}

impl CameraTrait for Camera {
    fn view(&self) -> Mat4 {
        Mat4::look_to_rh(self.pos, self.get_forward(), Self::UP)
    }

    fn projection(&self, aspect_ratio: f32) -> Mat4 {
        Mat4::perspective_rh(self.vertical_fov, aspect_ratio, self.z.start, self.z.end)
    }
}

/// A camera bound to a viewport region.
///
/// Projects into region coordinates with the origin at the bottom left and Y pointing up.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportCamera<C: CameraTrait = Camera> {
    /// The camera.
    pub camera: C,
    /// The size of the viewport region in pixels.
    pub size: UVec2,
}

impl<C: CameraTrait> ViewportCamera<C> {
    /// Create a new viewport camera.
    pub fn new(camera: C, size: UVec2) -> Self {
        Self { camera, size }
    }
}

impl<C: CameraTrait> Viewport for ViewportCamera<C> {
    fn project(&self, world: Vec3) -> Option<Vec2> {
        if self.size.cmpeq(UVec2::ZERO).any() {
            return None;
        }

        let size = self.size.as_vec2();
        let clip = self.camera.projection(size.x / size.y) * self.camera.view() * world.extend(1.0);
        if clip.w <= 0.0 {
            return None;
        }

        let ndc = clip.xy() / clip.w;
        let pos = (ndc + Vec2::ONE) * 0.5 * size;

        pos.is_finite().then_some(pos)
    }
}
