//! Keyboard boundary: scramble, solve/reset, and cube size changes.
//!
//! This is the only place requests enter the core, and the only place the
//! size is validated: everything behind it assumes N is already in range.
use bevy::prelude::*;

use crate::log;
use crate::utils::config::CubeSettings;
use crate::utils::constants::cube_constants::{MAX_CUBE_SIZE, MIN_CUBE_SIZE};
use crate::utils::cube;
use crate::utils::objects::{
    CameraOrbit, CubeRoot, CubeState, Cubie, MoveQueue, RandomGen, RotationState,
};
use crate::utils::sequencer;

/// Plugin for handling inputs
pub struct InputsPlugin;

impl Plugin for InputsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, handle_keyboard_input);
    }
}

/// SPACE scrambles, R solves (a full rebuild, not a solver), Up/Down grow
/// and shrink the cube within `[MIN_CUBE_SIZE, MAX_CUBE_SIZE]`.
///
/// Every request defers to the rotation lock: while a rotation is in
/// flight or moves are pending, scrambles are dropped and rebuilds are
/// rejected, and the status line keeps showing the actual size.
pub fn handle_keyboard_input(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut cube_state: ResMut<CubeState>,
    rotation: Res<RotationState>,
    mut queue: ResMut<MoveQueue>,
    mut random_gen: ResMut<RandomGen>,
    mut orbit: ResMut<CameraOrbit>,
    settings: Res<CubeSettings>,
    pieces: Query<Entity, With<Cubie>>,
    root_query: Query<Entity, With<CubeRoot>>,
    mut camera_query: Query<&mut Transform, With<Camera3d>>,
) {
    if keyboard.just_pressed(KeyCode::Space) {
        if sequencer::queue_scramble(&mut queue, &rotation, &mut random_gen, cube_state.size) {
            cube_state.is_changed = true;
        }
        return;
    }

    let wants_reset = keyboard.just_pressed(KeyCode::KeyR);
    let size_step: isize = if keyboard.just_pressed(KeyCode::ArrowUp) {
        1
    } else if keyboard.just_pressed(KeyCode::ArrowDown) {
        -1
    } else {
        0
    };
    if !wants_reset && size_step == 0 {
        return;
    }

    if sequencer::is_busy(&rotation, &queue) {
        debug!("rebuild request dropped: rotation in progress");
        return;
    }

    // Clamp at the boundary; the core never re-validates.
    let new_size = (cube_state.size as isize + size_step)
        .clamp(MIN_CUBE_SIZE as isize, MAX_CUBE_SIZE as isize) as usize;
    if !wants_reset && new_size == cube_state.size {
        return;
    }

    let Ok(root) = root_query.single() else {
        return;
    };
    cube_state.size = new_size;
    cube_state.is_changed = true;

    sequencer::reset(
        &mut commands,
        &mut meshes,
        &mut materials,
        pieces.iter(),
        root,
        &settings,
        new_size,
    );
    if let Ok(mut camera_transform) = camera_query.single_mut() {
        cube::fit_camera_to_cube(&mut orbit, &mut camera_transform, new_size, settings.piece_gap);
    }
    log!("Cube rebuilt at size {}", new_size);
}
