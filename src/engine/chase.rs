// Enemy steering: move toward the player, stop when close.
//
// A pure per-frame rule over current relative geometry. No pathfinding, no
// acceleration, no obstacle avoidance; at any distance the agent closes at a
// constant step per frame.

use bevy_ecs::prelude::*;
use glam::Vec3;

use super::components::{ChaseAgent, Transform};

/// Step length in world units per frame.
pub const CHASE_SPEED: f32 = 0.02;

/// The agent stops moving once within this distance of its target.
pub const STOP_DISTANCE: f32 = 1.0;

/// One steering step: advance `position` toward `target` by `speed` if the
/// separation exceeds `stop_distance`, otherwise stay put. The chase vector
/// is full 3D, so a grounded agent drifts upward toward the eye point once
/// close enough; this matches the demo's intended behavior.
pub fn chase_step(position: Vec3, target: Vec3, speed: f32, stop_distance: f32) -> Vec3 {
    let to_target = target - position;
    let distance = to_target.length();
    if distance > stop_distance {
        position + to_target / distance * speed
    } else {
        position
    }
}

/// Per-frame system: step every chase agent toward the player's position.
pub fn chase_system(world: &mut World, player_position: Vec3) {
    let mut query = world.query::<(&mut Transform, &ChaseAgent)>();
    for (mut transform, agent) in query.iter_mut(world) {
        transform.position = chase_step(
            transform.position,
            player_position,
            agent.speed,
            agent.stop_distance,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn steps_along_normalized_direction() {
        let enemy = Vec3::new(0.0, 0.5, -5.0);
        let player = Vec3::new(0.0, 1.6, 5.0);

        let next = chase_step(enemy, player, CHASE_SPEED, STOP_DISTANCE);
        let expected = enemy + (player - enemy).normalize() * CHASE_SPEED;

        assert_relative_eq!(next.x, expected.x, epsilon = 1e-6);
        assert_relative_eq!(next.y, expected.y, epsilon = 1e-6);
        assert_relative_eq!(next.z, expected.z, epsilon = 1e-6);
    }

    #[test]
    fn distance_strictly_decreases() {
        let player = Vec3::new(3.0, 1.6, -7.0);
        let mut enemy = Vec3::new(-10.0, 0.5, 12.0);

        let mut prev = enemy.distance(player);
        for _ in 0..100 {
            enemy = chase_step(enemy, player, CHASE_SPEED, STOP_DISTANCE);
            let d = enemy.distance(player);
            assert!(d < prev);
            prev = d;
        }
    }

    #[test]
    fn holds_position_inside_stop_distance() {
        let player = Vec3::new(0.0, 1.6, 0.0);
        let enemy = player + Vec3::new(0.3, -0.5, 0.4); // well within 1 unit

        assert_eq!(chase_step(enemy, player, CHASE_SPEED, STOP_DISTANCE), enemy);
    }

    #[test]
    fn holds_position_exactly_at_stop_distance() {
        let player = Vec3::ZERO;
        let enemy = Vec3::new(STOP_DISTANCE, 0.0, 0.0);

        assert_eq!(chase_step(enemy, player, CHASE_SPEED, STOP_DISTANCE), enemy);
    }

    #[test]
    fn converges_without_overshooting_into_the_player() {
        let player = Vec3::new(0.0, 1.6, 0.0);
        let mut enemy = Vec3::new(0.0, 0.5, -5.0);

        for _ in 0..2000 {
            enemy = chase_step(enemy, player, CHASE_SPEED, STOP_DISTANCE);
        }
        let d = enemy.distance(player);
        // Settles just inside the stop ring, never on top of the player
        assert!(d <= STOP_DISTANCE);
        assert!(d > STOP_DISTANCE - CHASE_SPEED - 1e-4);
    }

    #[test]
    fn system_moves_every_chase_agent() {
        let mut world = World::new();
        let start = Vec3::new(0.0, 0.5, -5.0);
        let entity = world
            .spawn((
                Transform::from_position(start),
                ChaseAgent {
                    speed: CHASE_SPEED,
                    stop_distance: STOP_DISTANCE,
                },
            ))
            .id();

        let player = Vec3::new(0.0, 1.6, 5.0);
        chase_system(&mut world, player);

        let moved = world.get::<Transform>(entity).unwrap().position;
        assert!(moved.distance(player) < start.distance(player));
    }
}
