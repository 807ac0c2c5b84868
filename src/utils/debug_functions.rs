//! Debug functions for the game.
use bevy::{prelude::*, window::*};

use crate::utils::objects::RotationPivot;

pub struct DebugFunctionsPlugin;

impl Plugin for DebugFunctionsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, (toggle_vsync, visualize_pivot));
    }
}

/// Toggles VSync when the 'V' key is pressed.
fn toggle_vsync(input: Res<ButtonInput<KeyCode>>, mut window: Query<&mut Window>) {
    if input.just_pressed(KeyCode::KeyV) {
        let Ok(mut window) = window.single_mut() else {
            return;
        };

        window.present_mode = if matches!(window.present_mode, PresentMode::AutoVsync) {
            PresentMode::AutoNoVsync
        } else {
            PresentMode::AutoVsync
        };

        info!("PRESENT_MODE: {:?}", window.present_mode);
    }
}

/// Draws the active rotation pivot's axes when toggled with the 'P' key.
fn visualize_pivot(
    mut gizmos: Gizmos,
    query: Query<&GlobalTransform, With<RotationPivot>>,
    input: Res<ButtonInput<KeyCode>>,
    mut show_pivot: Local<bool>,
) {
    if input.just_pressed(KeyCode::KeyP) {
        *show_pivot = !*show_pivot;
        info!("Pivot visualization: {}", *show_pivot);
    }

    if *show_pivot {
        for transform in &query {
            gizmos.axes(*transform, 2.0);
        }
    }
}
