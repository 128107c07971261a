// Player movement: held WASD keys to camera-relative motion.
//
// The delta is built in camera-local space with a fixed per-axis step, then
// rotated into world space by the camera orientation and handed to the
// pointer-lock controls as planar move_right/move_forward distances.
// Intentionally no diagonal normalization: holding two keys moves sqrt(2)
// times faster than one. See DESIGN.md.

use glam::Vec3;
use winit::keyboard::KeyCode;

use super::controls::PointerLockControls;
use super::input::InputState;

/// Step length in world units per frame per held movement key.
pub const MOVE_SPEED: f32 = 0.1;

/// Camera-local movement delta from the currently held keys.
/// -Z is forward, +X is right; each held key contributes a full step.
pub fn movement_delta(input: &InputState) -> Vec3 {
    let mut delta = Vec3::ZERO;
    if input.is_key_held(KeyCode::KeyW) {
        delta.z -= MOVE_SPEED;
    }
    if input.is_key_held(KeyCode::KeyS) {
        delta.z += MOVE_SPEED;
    }
    if input.is_key_held(KeyCode::KeyA) {
        delta.x -= MOVE_SPEED;
    }
    if input.is_key_held(KeyCode::KeyD) {
        delta.x += MOVE_SPEED;
    }
    delta
}

/// Per-frame movement update. Rotates the local delta into world space and
/// forwards it to the controls (forward uses the negated Z component, since
/// the camera looks down -Z).
pub fn handle_movement(input: &InputState, controls: &mut PointerLockControls) {
    let world = controls.orientation() * movement_delta(input);
    controls.move_right(world.x);
    controls.move_forward(-world.z);
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn input_with(keys: &[KeyCode]) -> InputState {
        let mut input = InputState::new();
        for &key in keys {
            input.key_pressed(key, false);
        }
        input
    }

    #[test]
    fn forward_key_moves_along_camera_forward() {
        let input = input_with(&[KeyCode::KeyW]);
        let mut controls = PointerLockControls::new(Vec3::new(0.0, 1.6, 5.0), 1.0);

        let delta = movement_delta(&input);
        assert_relative_eq!(delta.z, -MOVE_SPEED, epsilon = 1e-6);
        assert_relative_eq!(delta.x, 0.0, epsilon = 1e-6);

        handle_movement(&input, &mut controls);
        // At identity orientation the world delta is forward * MOVE_SPEED
        let expected = Vec3::new(0.0, 1.6, 5.0) + Vec3::NEG_Z * MOVE_SPEED;
        assert_relative_eq!(controls.position.x, expected.x, epsilon = 1e-6);
        assert_relative_eq!(controls.position.y, expected.y, epsilon = 1e-6);
        assert_relative_eq!(controls.position.z, expected.z, epsilon = 1e-6);
    }

    #[test]
    fn opposing_keys_cancel() {
        let input = input_with(&[KeyCode::KeyW, KeyCode::KeyS]);
        assert_eq!(movement_delta(&input), Vec3::ZERO);
    }

    #[test]
    fn diagonal_step_is_unnormalized() {
        let input = input_with(&[KeyCode::KeyW, KeyCode::KeyD]);
        let mut controls = PointerLockControls::new(Vec3::ZERO, 1.0);
        handle_movement(&input, &mut controls);

        // Known characteristic: two held keys move sqrt(2) faster
        assert_relative_eq!(
            controls.position.length(),
            MOVE_SPEED * std::f32::consts::SQRT_2,
            epsilon = 1e-6
        );
    }

    #[test]
    fn strafe_key_moves_along_camera_right() {
        let input = input_with(&[KeyCode::KeyD]);
        let mut controls = PointerLockControls::new(Vec3::ZERO, 1.0);
        handle_movement(&input, &mut controls);
        assert_relative_eq!(controls.position.x, MOVE_SPEED, epsilon = 1e-6);
        assert_relative_eq!(controls.position.z, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn no_keys_no_motion() {
        let input = InputState::new();
        let mut controls = PointerLockControls::new(Vec3::new(1.0, 1.6, 2.0), 1.0);
        handle_movement(&input, &mut controls);
        assert_eq!(controls.position, Vec3::new(1.0, 1.6, 2.0));
    }
}
