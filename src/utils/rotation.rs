//! Pivot rotation controller: animates one slice rotation at a time.
//!
//! A rotation runs through a fixed sequence: pop the next pending move,
//! select its slice, hand the slice's pieces to a fresh pivot entity
//! without moving anything on screen, ease the pivot through a quarter
//! turn, then hand the pieces back to the cube root with the rotation baked
//! into their transforms. `RotationState::active` is the lock; while it is
//! held no second rotation starts and no rebuild may run.
use bevy::math::curve::{Curve, EaseFunction};
use bevy::prelude::*;
use std::f32::consts::FRAC_PI_2;

use crate::utils::config::CubeSettings;
use crate::utils::objects::{
    ActiveRotation, CubeRoot, CubeState, Cubie, MoveQueue, RotationPivot, RotationState,
};
use crate::utils::slice;

/// Plugin wiring the rotation state machine into the frame loop.
pub struct RotationPlugin;

impl Plugin for RotationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<RotationState>()
            .init_resource::<MoveQueue>()
            // Commit before pump, so a finished rotation's successor can
            // start within the same frame (the queue is consumed one move
            // per completion).
            .add_systems(Update, (advance_rotation, start_next_move).chain());
    }
}

/// Re-parents `piece` under `new_parent`, recomputing its local transform
/// so its world transform is unchanged. The hierarchy has no primitive that
/// preserves world transforms on re-parent, so this is an explicit
/// two-step ownership transfer.
pub fn attach_preserving_world(
    commands: &mut Commands,
    piece: Entity,
    piece_world: GlobalTransform,
    new_parent: Entity,
    new_parent_world: &GlobalTransform,
) {
    let local = piece_world.reparented_to(new_parent_world);
    commands.entity(piece).insert((local, ChildOf(new_parent)));
}

/// Starts the next pending move when no rotation is in flight.
///
/// Selection yielding zero pieces is a degenerate success: the move
/// completes on the spot without ever taking the lock, and its successor
/// runs on the next frame.
pub fn start_next_move(
    mut commands: Commands,
    mut rotation: ResMut<RotationState>,
    mut queue: ResMut<MoveQueue>,
    mut cube_state: ResMut<CubeState>,
    settings: Res<CubeSettings>,
    root_query: Query<&Transform, With<CubeRoot>>,
    pieces: Query<(Entity, &Transform), With<Cubie>>,
) {
    if rotation.is_locked() {
        return;
    }
    let Some(slice_move) = queue.pending.pop_front() else {
        return;
    };
    cube_state.is_changed = true;

    let Ok(root_transform) = root_query.single() else {
        return;
    };

    let selected = slice::select(
        slice_move.axis,
        slice_move.layer,
        cube_state.size,
        settings.piece_gap,
        pieces.iter(),
    );
    if selected.is_empty() {
        warn!(
            "no pieces found for slice {:?}, layer {}",
            slice_move.axis, slice_move.layer
        );
        return;
    }

    // The pivot copies the root's full transform so it rotates about the
    // same world point the pieces currently sit in.
    let pivot_transform = *root_transform;
    let pivot = commands
        .spawn((RotationPivot, pivot_transform, Visibility::default()))
        .id();

    // Pure ownership transfer: every selected piece keeps its world
    // transform to the last bit that float math allows.
    let root_world = GlobalTransform::from(*root_transform);
    let pivot_world = GlobalTransform::from(pivot_transform);
    for &piece in &selected {
        let Ok((_, piece_transform)) = pieces.get(piece) else {
            continue;
        };
        let piece_world = root_world * *piece_transform;
        attach_preserving_world(&mut commands, piece, piece_world, pivot, &pivot_world);
    }

    rotation.active = Some(ActiveRotation {
        pivot,
        axis: slice_move.axis,
        direction: slice_move.direction,
        elapsed: 0.0,
        base_rotation: pivot_transform.rotation,
    });
}

/// Drives the in-flight rotation every frame and commits it when done.
///
/// The pivot's orientation is interpolated with an ease-in/ease-out curve
/// and lands on exactly +-90 degrees; on completion every piece is handed
/// back to the root with its world transform preserved, which bakes the
/// quarter turn permanently into the piece transforms. The pivot is then
/// despawned and the lock released.
pub fn advance_rotation(
    mut commands: Commands,
    time: Res<Time>,
    mut rotation: ResMut<RotationState>,
    settings: Res<CubeSettings>,
    root_query: Query<(Entity, &Transform), (With<CubeRoot>, Without<RotationPivot>)>,
    mut pivot_query: Query<&mut Transform, With<RotationPivot>>,
    pieces: Query<(Entity, &Transform, &ChildOf), (With<Cubie>, Without<RotationPivot>)>,
) {
    let Some(active) = rotation.active.as_mut() else {
        return;
    };
    let Ok(mut pivot_transform) = pivot_query.get_mut(active.pivot) else {
        return;
    };

    active.elapsed += time.delta_secs();
    let progress = (active.elapsed / settings.animation_duration_secs).min(1.0);
    let finished = progress >= 1.0;

    let quarter_turn = FRAC_PI_2 * active.direction.signum();
    let angle = if finished {
        // No overshoot and no residue: the end value is exact.
        quarter_turn
    } else {
        quarter_turn * EaseFunction::QuadraticInOut.sample_clamped(progress)
    };
    pivot_transform.rotation =
        active.base_rotation * Quat::from_axis_angle(active.axis.unit(), angle);

    if !finished {
        return;
    }

    let pivot = active.pivot;
    let Ok((root, root_transform)) = root_query.single() else {
        return;
    };

    // Commit: bake the rotation by handing each piece back to the root with
    // its (now rotated) world transform preserved.
    let root_world = GlobalTransform::from(*root_transform);
    let pivot_world = GlobalTransform::from(*pivot_transform);
    for (piece, piece_transform, child_of) in &pieces {
        if child_of.parent() != pivot {
            continue;
        }
        let piece_world = pivot_world * *piece_transform;
        attach_preserving_world(&mut commands, piece, piece_world, root, &root_world);
    }

    // The pieces above are re-parented before this despawn is applied, so
    // the pivot dies childless.
    commands.entity(pivot).despawn();
    rotation.active = None;
}
