use bevy::prelude::*;

use crate::log;
use crate::utils::config::CubeSettings;
use crate::utils::cube;
use crate::utils::objects::{
    CameraOrbit, CubeRoot, CubeState, MoveQueue, RandomGen, UiEntity,
};

/// Plugin for handling setup
pub struct SetupPlugin;

impl Plugin for SetupPlugin {
    fn build(&self, app: &mut App) {
        let settings = CubeSettings::load();
        app.insert_resource(CubeState {
            size: settings.initial_size,
            is_changed: true,
        })
        .insert_resource(RandomGen::from_seed(settings.seed))
        .insert_resource(settings)
        .add_systems(Startup, setup)
        .add_systems(Update, status_ui);
    }
}

/// Systems
pub fn setup(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    settings: Res<CubeSettings>,
    cube_state: Res<CubeState>,
    mut orbit: ResMut<CameraOrbit>,
) {
    commands.insert_resource(ClearColor(Color::srgb(0.13, 0.13, 0.13)));

    // Light
    commands.spawn((
        DirectionalLight {
            illuminance: 8_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(5.0, 10.0, 7.5).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    // Ambient light
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 100.0, // Bevy 0.17.0 uses a 0-100 scale here
        affects_lightmapped_meshes: true,
    });

    // Cube root; every piece hangs off this while idle. Slice moves rotate
    // subsets of its children, never the root itself.
    let root = commands
        .spawn((CubeRoot, Transform::default(), Visibility::default()))
        .id();
    cube::rebuild_cube(
        &mut commands,
        &mut meshes,
        &mut materials,
        std::iter::empty(),
        root,
        &settings,
        cube_state.size,
    );

    // Camera, placed to fit the freshly built cube
    let mut camera_transform = Transform::default();
    cube::fit_camera_to_cube(
        &mut orbit,
        &mut camera_transform,
        cube_state.size,
        settings.piece_gap,
    );
    commands.spawn((Camera3d::default(), camera_transform));

    log!("🧊 {0}x{0}x{0} cube ready", cube_state.size);
    log!("⌨️  SPACE: scramble | R: solve | Up/Down: size | A/D: orbit | W/S: zoom");
}

/// Redraws the status line whenever the cube state changes (rebuild,
/// scramble progress, size change).
pub fn status_ui(
    mut commands: Commands,
    mut cube_state: ResMut<CubeState>,
    queue: Res<MoveQueue>,
    query: Query<Entity, With<UiEntity>>,
) {
    if !cube_state.is_changed {
        return;
    }
    cube_state.is_changed = false;

    // Clear old UI
    for entity in &query {
        commands.entity(entity).despawn();
    }

    let status_text = if queue.pending.is_empty() {
        format!(
            "{0}x{0}x{0} cube | SPACE: Scramble | R: Solve | Up/Down: Size",
            cube_state.size
        )
    } else {
        format!(
            "{0}x{0}x{0} cube | Scrambling... {1} moves left",
            cube_state.size,
            queue.pending.len()
        )
    };

    commands.spawn((
        Text::new(status_text),
        TextFont {
            font_size: 24.0,
            ..default()
        },
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(10.0),
            left: Val::Px(10.0),
            ..default()
        },
        UiEntity,
    ));

    // Instructions
    commands.spawn((
        Text::new("A/D: Orbit | W/S: Zoom"),
        TextFont {
            font_size: 18.0,
            ..default()
        },
        TextColor(Color::srgb(0.8, 0.8, 0.8)),
        Node {
            position_type: PositionType::Absolute,
            bottom: Val::Px(10.0),
            left: Val::Px(10.0),
            ..default()
        },
        UiEntity,
    ));
}
