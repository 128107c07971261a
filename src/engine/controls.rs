// First-person pointer-lock look controls.
//
// Camera model:
//   - Position is the player's eye point, mutated only here
//   - Yaw/pitch from raw mouse deltas while the cursor is captured
//   - move_forward/move_right translate parallel to the ground plane along
//     the yaw-rotated axes, so looking up or down does not tilt movement
//   - Right-handed, camera looks down -Z at yaw 0

use glam::{EulerRot, Mat4, Quat, Vec3};

pub struct PointerLockControls {
    /// Eye position in world space.
    pub position: Vec3,

    /// Horizontal rotation in radians (0 = looking along -Z).
    yaw: f32,

    /// Elevation in radians, clamped just short of straight up/down so the
    /// view matrix never degenerates.
    pitch: f32,

    /// Vertical field of view in radians.
    pub fov: f32,
    aspect: f32,
    pub near: f32,
    pub far: f32,

    /// Radians of rotation per pixel of mouse motion.
    pub sensitivity: f32,
}

const PITCH_LIMIT: f32 = std::f32::consts::FRAC_PI_2 - 0.01;

impl PointerLockControls {
    pub fn new(position: Vec3, aspect: f32) -> Self {
        Self {
            position,
            yaw: 0.0,
            pitch: 0.0,
            fov: 75.0_f32.to_radians(),
            aspect,
            near: 0.1,
            far: 1000.0,
            sensitivity: 0.002,
        }
    }

    /// Apply a raw mouse motion delta (pixels). Moving the mouse right turns
    /// right, moving it up looks up.
    pub fn rotate(&mut self, dx: f32, dy: f32) {
        self.yaw -= dx * self.sensitivity;
        self.pitch = (self.pitch - dy * self.sensitivity).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Move `distance` along the camera's forward axis projected onto the
    /// ground plane. Positive distance moves toward where the camera faces.
    pub fn move_forward(&mut self, distance: f32) {
        let forward = Vec3::new(-self.yaw.sin(), 0.0, -self.yaw.cos());
        self.position += forward * distance;
    }

    /// Move `distance` along the camera's right axis on the ground plane.
    pub fn move_right(&mut self, distance: f32) {
        let right = Vec3::new(self.yaw.cos(), 0.0, -self.yaw.sin());
        self.position += right * distance;
    }

    /// Full camera orientation (yaw then pitch, no roll). Used to rotate
    /// camera-local movement deltas into world space.
    pub fn orientation(&self) -> Quat {
        Quat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, 0.0)
    }

    /// World-space direction the camera is looking.
    pub fn forward(&self) -> Vec3 {
        self.orientation() * Vec3::NEG_Z
    }

    /// Update the projection aspect ratio after a window resize.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.forward(), Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far)
    }

    /// Combined view-projection matrix ready to upload to the GPU.
    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn default_orientation_looks_down_negative_z() {
        let controls = PointerLockControls::new(Vec3::new(0.0, 1.6, 5.0), 16.0 / 9.0);
        let fwd = controls.forward();
        assert_relative_eq!(fwd.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(fwd.y, 0.0, epsilon = 1e-6);
        assert_relative_eq!(fwd.z, -1.0, epsilon = 1e-6);
    }

    #[test]
    fn pitch_is_clamped() {
        let mut controls = PointerLockControls::new(Vec3::ZERO, 1.0);
        controls.rotate(0.0, -100_000.0);
        assert!(controls.pitch() < std::f32::consts::FRAC_PI_2);
        controls.rotate(0.0, 100_000.0);
        assert!(controls.pitch() > -std::f32::consts::FRAC_PI_2);
    }

    #[test]
    fn movement_is_planar_even_when_pitched() {
        let mut controls = PointerLockControls::new(Vec3::new(0.0, 1.6, 0.0), 1.0);
        controls.rotate(0.0, -200.0); // look up
        controls.move_forward(1.0);
        assert_relative_eq!(controls.position.y, 1.6, epsilon = 1e-6);
        assert!(controls.position.z < 0.0);
    }

    #[test]
    fn move_right_follows_yaw() {
        let mut controls = PointerLockControls::new(Vec3::ZERO, 1.0);
        // Yaw +90 degrees faces -X, so "right" is -Z
        controls.yaw = std::f32::consts::FRAC_PI_2;
        controls.move_right(1.0);
        assert_relative_eq!(controls.position.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(controls.position.z, -1.0, epsilon = 1e-6);
    }

    #[test]
    fn set_viewport_recomputes_aspect() {
        let mut controls = PointerLockControls::new(Vec3::ZERO, 1.0);
        controls.set_viewport(1920, 1080);
        assert_relative_eq!(controls.aspect(), 1920.0 / 1080.0, epsilon = 1e-6);

        // Degenerate sizes are ignored
        controls.set_viewport(0, 1080);
        assert_relative_eq!(controls.aspect(), 1920.0 / 1080.0, epsilon = 1e-6);
    }

    #[test]
    fn view_projection_is_finite() {
        let controls = PointerLockControls::new(Vec3::new(0.0, 1.6, 5.0), 1280.0 / 720.0);
        let vp = controls.view_projection();
        for col in 0..4 {
            assert!(vp.col(col).is_finite());
        }
    }
}
