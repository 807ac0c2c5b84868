//! Move sequencer: scramble and reset requests at the caller boundary.
use bevy::prelude::*;
use rand::Rng;

use crate::utils::config::CubeSettings;
use crate::utils::constants::game_constants::SCRAMBLE_MOVE_FACTOR;
use crate::utils::cube;
use crate::utils::objects::{
    Axis, MoveQueue, RandomGen, RotationState, SliceMove, SpinDirection,
};

/// True while a rotation is running or moves are still pending. Scramble,
/// reset and resize requests are all rejected in that window.
pub fn is_busy(rotation: &RotationState, queue: &MoveQueue) -> bool {
    rotation.is_locked() || !queue.pending.is_empty()
}

/// Number of scramble moves for a cube of size `n`.
pub fn scramble_len(n: usize) -> usize {
    SCRAMBLE_MOVE_FACTOR * n * n
}

/// Draws one uniformly random slice move: independent choices of axis,
/// layer and direction. Redundant or cancelling pairs are accepted.
pub fn random_move(rng: &mut impl Rng, n: usize) -> SliceMove {
    SliceMove {
        axis: Axis::ALL[rng.random_range(0..Axis::ALL.len())],
        layer: rng.random_range(0..n),
        direction: if rng.random_bool(0.5) {
            SpinDirection::Clockwise
        } else {
            SpinDirection::CounterClockwise
        },
    }
}

/// Queues a full scramble of `scramble_len(n)` random moves, consumed one
/// per completed rotation. Dropped outright while a rotation is in flight;
/// the in-flight rotation is unaffected. Returns whether moves were queued.
pub fn queue_scramble(
    queue: &mut MoveQueue,
    rotation: &RotationState,
    random_gen: &mut RandomGen,
    n: usize,
) -> bool {
    if is_busy(rotation, queue) {
        debug!("scramble request dropped: rotation in progress");
        return false;
    }
    for _ in 0..scramble_len(n) {
        let slice_move = random_move(&mut random_gen.random_gen, n);
        queue.pending.push_back(slice_move);
    }
    crate::log!("Scrambling with {} moves", scramble_len(n));
    true
}

/// The system's only "solve": a full registry rebuild at size `n`,
/// discarding all rotation history. There is no move inversion and no
/// solving algorithm behind this on purpose.
pub fn reset(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
    existing: impl Iterator<Item = Entity>,
    root: Entity,
    settings: &CubeSettings,
    n: usize,
) {
    cube::rebuild_cube(commands, meshes, materials, existing, root, settings, n);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::objects::ActiveRotation;

    #[test]
    fn scramble_length_scales_with_the_squared_size() {
        assert_eq!(scramble_len(2), 12);
        assert_eq!(scramble_len(3), 27);
        assert_eq!(scramble_len(10), 300);
    }

    #[test]
    fn random_moves_stay_within_bounds() {
        let mut random_gen = RandomGen::from_seed(7);
        for _ in 0..500 {
            let slice_move = random_move(&mut random_gen.random_gen, 5);
            assert!(slice_move.layer < 5);
        }
    }

    #[test]
    fn scramble_queues_the_exact_move_count() {
        let mut queue = MoveQueue::default();
        let rotation = RotationState::default();
        let mut random_gen = RandomGen::from_seed(1);
        assert!(queue_scramble(&mut queue, &rotation, &mut random_gen, 4));
        assert_eq!(queue.pending.len(), scramble_len(4));
    }

    #[test]
    fn scramble_is_dropped_while_the_lock_is_held() {
        let mut queue = MoveQueue::default();
        let rotation = RotationState {
            active: Some(ActiveRotation {
                pivot: Entity::PLACEHOLDER,
                axis: Axis::X,
                direction: SpinDirection::Clockwise,
                elapsed: 0.0,
                base_rotation: Quat::IDENTITY,
            }),
        };
        let mut random_gen = RandomGen::from_seed(1);
        assert!(!queue_scramble(&mut queue, &rotation, &mut random_gen, 3));
        assert!(queue.pending.is_empty());
    }

    #[test]
    fn scramble_is_dropped_while_moves_are_pending() {
        let mut queue = MoveQueue::default();
        queue.pending.push_back(SliceMove {
            axis: Axis::Z,
            layer: 0,
            direction: SpinDirection::Clockwise,
        });
        let rotation = RotationState::default();
        let mut random_gen = RandomGen::from_seed(1);
        assert!(!queue_scramble(&mut queue, &rotation, &mut random_gen, 3));
        assert_eq!(queue.pending.len(), 1);
    }

    #[test]
    fn seeded_scrambles_are_reproducible() {
        let mut a = RandomGen::from_seed(42);
        let mut b = RandomGen::from_seed(42);
        for _ in 0..50 {
            assert_eq!(random_move(&mut a.random_gen, 6), random_move(&mut b.random_gen, 6));
        }
    }
}
