// Scene bootstrap: world contents created once before the frame loop.
//
// The scene owns the ECS world holding renderable entities plus the two
// lights. The flashlight is head-mounted: its pose is re-derived from the
// camera every frame by the renderer, so only its visibility lives here.

use bevy_ecs::prelude::*;
use glam::Vec3;

use super::chase::{CHASE_SPEED, STOP_DISTANCE};
use super::components::{ChaseAgent, Color, Transform};

/// Half-size of the square ground plane (world units).
pub const FLOOR_HALF_SIZE: f32 = 25.0;

/// Eye-level spawn position of the player camera.
pub const PLAYER_START: Vec3 = Vec3::new(0.0, 1.6, 5.0);

/// Where the enemy cube spawns, resting on the floor.
pub const ENEMY_START: Vec3 = Vec3::new(0.0, 0.5, -5.0);

/// Constant low-intensity light applied to every surface.
pub struct AmbientLight {
    pub color: Vec3,
}

/// Cone light rigidly attached to the player's camera.
/// Visibility is the only attribute mutated after bootstrap.
pub struct SpotLight {
    pub color: Vec3,
    pub intensity: f32,
    /// Maximum reach of the beam; no contribution beyond this distance.
    pub range: f32,
    /// Half-angle of the outer cone in radians.
    pub angle: f32,
    /// Fraction of the cone over which the beam softens to zero, 0..1.
    pub penumbra: f32,
    pub visible: bool,
}

impl SpotLight {
    /// Cosine of the outer cone angle (zero intensity outside).
    pub fn cos_outer(&self) -> f32 {
        self.angle.cos()
    }

    /// Cosine of the inner cone angle (full intensity inside).
    pub fn cos_inner(&self) -> f32 {
        (self.angle * (1.0 - self.penumbra)).cos()
    }
}

pub struct Scene {
    pub world: World,
    pub ambient: AmbientLight,
    pub flashlight: SpotLight,
    pub floor_color: Color,
}

impl Scene {
    /// Build the world: one red enemy cube chasing the player, a dark floor,
    /// dim ambient light, and the flashlight. Called exactly once at startup.
    pub fn build() -> Self {
        let mut world = World::new();

        world.spawn((
            Transform::from_position(ENEMY_START),
            Color::rgb(1.0, 0.0, 0.0),
            ChaseAgent {
                speed: CHASE_SPEED,
                stop_distance: STOP_DISTANCE,
            },
        ));

        Self {
            world,
            ambient: AmbientLight {
                color: Vec3::splat(0.125), // 0x202020
            },
            flashlight: SpotLight {
                color: Vec3::ONE,
                intensity: 3.0,
                range: 30.0,
                angle: std::f32::consts::FRAC_PI_8,
                penumbra: 0.3,
                visible: true,
            },
            floor_color: Color::rgb(0.067, 0.067, 0.067), // 0x111111
        }
    }
}
