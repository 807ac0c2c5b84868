use bevy::prelude::*;

use rubiks_cube_3d::plugins::my_plugin::CubeGamePlugin;

/// Main application function
fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "NxNxN Cube".into(),
                fit_canvas_to_parent: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(CubeGamePlugin)
        .run();
}
