// Constants used in the game, structured into modules.

/// 3D camera
pub mod camera_3d_constants {
    // Orbit and zoom speeds in radians/s and units/s.
    pub const CAMERA_3D_SPEED_X: f32 = 2.0;
    pub const CAMERA_3D_SPEED_Z: f32 = 8.0;

    // Fallback radius range for the camera's orbit, before the first build.
    pub const CAMERA_3D_MIN_RADIUS: f32 = 3.0;
    pub const CAMERA_3D_MAX_RADIUS: f32 = 20.0;

    // Orbit radius range as factors of the cube's space diagonal.
    pub const ORBIT_MIN_DIAGONAL_FACTOR: f32 = 0.8;
    pub const ORBIT_MAX_DIAGONAL_FACTOR: f32 = 3.0;

    // Starting camera position as factors of the cube's space diagonal.
    pub const CAMERA_START_DIAGONAL_FACTOR_XY: f32 = 1.0;
    pub const CAMERA_START_DIAGONAL_FACTOR_Z: f32 = 1.2;
}

/// Cube pieces and layout
pub mod cube_constants {
    use bevy::prelude::Color;

    // Edge length of one piece.
    pub const PIECE_SIZE: f32 = 1.0;

    // Size bounds, enforced at the input boundary before reaching the core.
    pub const MIN_CUBE_SIZE: usize = 2;
    pub const MAX_CUBE_SIZE: usize = 10;
    pub const DEFAULT_CUBE_SIZE: usize = 3;

    // Sticker colors, one per outward axis direction.
    pub const COLOR_RIGHT: Color = Color::srgb(0.0, 0.50, 0.0); // +X green
    pub const COLOR_LEFT: Color = Color::srgb(0.0, 0.0, 1.0); // -X blue
    pub const COLOR_UP: Color = Color::srgb(1.0, 1.0, 1.0); // +Y white
    pub const COLOR_DOWN: Color = Color::srgb(1.0, 1.0, 0.0); // -Y yellow
    pub const COLOR_FRONT: Color = Color::srgb(1.0, 0.0, 0.0); // +Z red
    pub const COLOR_BACK: Color = Color::srgb(1.0, 0.65, 0.0); // -Z orange

    // Dark gray for faces pointing into the cube.
    pub const COLOR_INNER: Color = Color::srgb(0.10, 0.10, 0.10);
}

/// Generic game constants
pub mod game_constants {
    // Gap between adjacent pieces.
    pub const DEFAULT_PIECE_GAP: f32 = 0.05;

    // Duration of one slice rotation.
    pub const DEFAULT_ANIMATION_DURATION_SECS: f32 = 0.3;

    // A scramble issues SCRAMBLE_MOVE_FACTOR * N^2 moves.
    pub const SCRAMBLE_MOVE_FACTOR: usize = 3;

    // Seed for the random number generator.
    pub const SEED: u64 = 69;
}
