// Engine modules: scene state, input, player and enemy behavior, meshes

pub mod chase;
pub mod components;
pub mod controls;
pub mod input;
pub mod mesh;
pub mod player;
pub mod scene;

pub use components::*;
