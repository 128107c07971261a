// Core ECS components for the scene
// Entities are spawned once at bootstrap and live for the whole session

use bevy_ecs::prelude::*;
use glam::Vec3;

/// Position of an entity in 3D space
#[derive(Component, Debug, Clone, Copy)]
pub struct Transform {
    pub position: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
        }
    }
}

impl Transform {
    pub fn from_position(position: Vec3) -> Self {
        Self { position }
    }
}

/// RGB color for rendering
#[derive(Component, Debug, Clone, Copy)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

/// Marks an entity that steers toward the player every frame.
///
/// `speed` is the step length in world units per frame. The entity stops
/// once within `stop_distance` of the player; no overlap resolution beyond
/// that.
#[derive(Component, Debug, Clone, Copy)]
pub struct ChaseAgent {
    pub speed: f32,
    pub stop_distance: f32,
}
