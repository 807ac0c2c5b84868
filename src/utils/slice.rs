//! Slice selector: finds the pieces currently occupying one layer.
use bevy::prelude::*;

use crate::utils::constants::cube_constants::PIECE_SIZE;
use crate::utils::cube::centered_coord;
use crate::utils::objects::Axis;

/// Matching tolerance for slice membership, derived from the piece spacing
/// so it stays valid if the gap changes. It has to absorb float drift from
/// repeatedly baked rotations while staying well under half the distance
/// between adjacent layers.
pub fn slice_tolerance(gap: f32) -> f32 {
    (PIECE_SIZE + gap) * 0.1
}

/// Root-local target coordinate of `layer` on an axis, using the same
/// centering formula the registry builds with so indices and coordinates
/// stay consistent across rebuilds of different sizes.
pub fn target_coord(layer: usize, n: usize, gap: f32) -> f32 {
    centered_coord(layer, n, gap)
}

/// Selects every piece whose current root-local position lies in the slice
/// `(axis, layer)`.
///
/// Membership goes by spatial position, never by the stored grid
/// coordinate: after a few baked rotations the build-time coordinate is
/// stale relative to the cube's orientation, but the piece transform is
/// always ground truth. An empty result is a legal degenerate outcome, not
/// an error.
pub fn select<'a>(
    axis: Axis,
    layer: usize,
    n: usize,
    gap: f32,
    pieces: impl Iterator<Item = (Entity, &'a Transform)>,
) -> Vec<Entity> {
    let target = target_coord(layer, n, gap);
    let tolerance = slice_tolerance(gap);
    pieces
        .filter(|(_, transform)| (axis.component(transform.translation) - target).abs() < tolerance)
        .map(|(entity, _)| entity)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::cube::{centered_position, grid_coords, piece_count};
    use std::collections::HashSet;

    const GAP: f32 = 0.05;

    /// A freshly built piece set as (entity, transform) pairs.
    fn fresh_pieces(world: &mut World, n: usize) -> Vec<(Entity, Transform)> {
        grid_coords(n)
            .into_iter()
            .map(|grid| {
                let transform = Transform::from_translation(centered_position(grid, n, GAP));
                (world.spawn_empty().id(), transform)
            })
            .collect()
    }

    fn select_ids(pieces: &[(Entity, Transform)], axis: Axis, layer: usize, n: usize) -> Vec<Entity> {
        select(axis, layer, n, GAP, pieces.iter().map(|(e, t)| (*e, t)))
    }

    #[test]
    fn every_layer_selects_exactly_n_squared_pieces() {
        let mut world = World::new();
        for n in 2..=10 {
            let pieces = fresh_pieces(&mut world, n);
            for axis in Axis::ALL {
                for layer in 0..n {
                    let slice = select_ids(&pieces, axis, layer, n);
                    assert_eq!(slice.len(), n * n, "size {n}, {axis:?} layer {layer}");
                }
            }
        }
    }

    #[test]
    fn layers_of_one_axis_partition_the_piece_set() {
        let mut world = World::new();
        let n = 4;
        let pieces = fresh_pieces(&mut world, n);
        for axis in Axis::ALL {
            let mut seen = HashSet::new();
            for layer in 0..n {
                for entity in select_ids(&pieces, axis, layer, n) {
                    assert!(seen.insert(entity), "{axis:?} layer {layer} overlaps");
                }
            }
            assert_eq!(seen.len(), piece_count(n));
        }
    }

    #[test]
    fn selection_is_idempotent_without_intervening_rotation() {
        let mut world = World::new();
        let pieces = fresh_pieces(&mut world, 3);
        let first = select_ids(&pieces, Axis::Y, 1, 3);
        let second = select_ids(&pieces, Axis::Y, 1, 3);
        assert_eq!(first, second);
    }

    #[test]
    fn drifted_pieces_still_match_their_layer() {
        let mut world = World::new();
        let n = 3;
        let mut pieces = fresh_pieces(&mut world, n);
        // Simulate accumulated float error from many baked rotations.
        for (_, transform) in &mut pieces {
            transform.translation += Vec3::splat(3e-4);
        }
        for layer in 0..n {
            assert_eq!(select_ids(&pieces, Axis::X, layer, n).len(), n * n);
        }
    }

    #[test]
    fn mismatched_geometry_selects_nothing() {
        let mut world = World::new();
        let pieces = fresh_pieces(&mut world, 3);
        // Layer index far outside the built geometry: a legal no-op.
        let slice = select(Axis::X, 7, 8, GAP, pieces.iter().map(|(e, t)| (*e, t)));
        assert!(slice.is_empty());
    }

    #[test]
    fn tolerance_stays_under_half_the_layer_spacing() {
        for gap in [0.0, 0.05, 0.5] {
            assert!(slice_tolerance(gap) > 0.0);
            assert!(slice_tolerance(gap) < (PIECE_SIZE + gap) / 2.0);
        }
    }
}
