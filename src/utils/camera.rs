use crate::utils::constants::camera_3d_constants::{CAMERA_3D_SPEED_X, CAMERA_3D_SPEED_Z};
use crate::utils::objects::CameraOrbit;
use bevy::prelude::*;

pub struct Camera3dOrbitPlugin;

impl Plugin for Camera3dOrbitPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraOrbit>()
            .add_systems(Update, camera_3d_orbit_inputs);
    }
}

/// Orbiting 3D Camera System
/// Rotates around the cube with A/D and zooms in/out with W/S. The radius
/// range comes from the `CameraOrbit` resource, rescaled on every rebuild.
pub fn camera_3d_orbit_inputs(
    keyboard: Res<ButtonInput<KeyCode>>,
    timer: Res<Time>,
    orbit: Res<CameraOrbit>,
    mut camera_query: Query<&mut Transform, With<Camera3d>>,
) {
    let Ok(mut transform) = camera_query.single_mut() else {
        return;
    };

    let speed = CAMERA_3D_SPEED_X * timer.delta_secs();
    let zoom_speed = CAMERA_3D_SPEED_Z * timer.delta_secs();

    let mut yaw = transform.translation.x.atan2(transform.translation.z);
    let mut radius = transform.translation.xz().length();

    // Handle Inputs
    let left = keyboard.pressed(KeyCode::ArrowLeft) || keyboard.pressed(KeyCode::KeyA);
    let right = keyboard.pressed(KeyCode::ArrowRight) || keyboard.pressed(KeyCode::KeyD);
    let zoom_in = keyboard.pressed(KeyCode::KeyW);
    let zoom_out = keyboard.pressed(KeyCode::KeyS);

    let changed = left || right || zoom_in || zoom_out;

    if left {
        yaw += speed;
    }
    if right {
        yaw -= speed;
    }

    if zoom_in {
        radius -= zoom_speed;
    }
    if zoom_out {
        radius += zoom_speed;
    }

    // Clamp zoom range
    radius = radius.clamp(orbit.min_radius, orbit.max_radius);

    // Recompute the position on the orbit circle, keeping the height.
    if changed {
        transform.translation = Vec3::new(
            radius * yaw.sin(),
            transform.translation.y,
            radius * yaw.cos(),
        );
    }

    // Make the camera look at the cube's center
    transform.look_at(Vec3::ZERO, Vec3::Y);
}
