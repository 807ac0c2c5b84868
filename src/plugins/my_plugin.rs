use bevy::prelude::*;

use crate::utils::camera::Camera3dOrbitPlugin;
use crate::utils::debug_functions::DebugFunctionsPlugin;
use crate::utils::inputs::InputsPlugin;
use crate::utils::rotation::RotationPlugin;
use crate::utils::setup::SetupPlugin;

/// Plugins
pub struct CubeGamePlugin;

impl Plugin for CubeGamePlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            SetupPlugin,
            RotationPlugin,
            InputsPlugin,
            Camera3dOrbitPlugin,
            DebugFunctionsPlugin,
        ));
    }
}
