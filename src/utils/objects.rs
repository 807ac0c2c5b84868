// This file defines the various objects, resources, and components used in the game.
use bevy::prelude::*;
use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;
use std::collections::VecDeque;

use crate::utils::constants::camera_3d_constants::{CAMERA_3D_MAX_RADIUS, CAMERA_3D_MIN_RADIUS};
use crate::utils::constants::game_constants::SEED;

/// The three rotation axes of the cube, in the cube root's local frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Unit vector along the axis.
    pub fn unit(self) -> Vec3 {
        match self {
            Axis::X => Vec3::X,
            Axis::Y => Vec3::Y,
            Axis::Z => Vec3::Z,
        }
    }

    /// The component of `v` along the axis.
    pub fn component(self, v: Vec3) -> f32 {
        match self {
            Axis::X => v.x,
            Axis::Y => v.y,
            Axis::Z => v.z,
        }
    }
}

/// Turn direction of a slice move, seen looking down the positive axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpinDirection {
    Clockwise,
    CounterClockwise,
}

impl SpinDirection {
    /// Sign of the rotation angle.
    pub fn signum(self) -> f32 {
        match self {
            SpinDirection::Clockwise => 1.0,
            SpinDirection::CounterClockwise => -1.0,
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            SpinDirection::Clockwise => SpinDirection::CounterClockwise,
            SpinDirection::CounterClockwise => SpinDirection::Clockwise,
        }
    }
}

/// One slice rotation request: a quarter turn of `layer` about `axis`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SliceMove {
    pub axis: Axis,
    /// 0-based layer position along the axis, in `[0, N)`.
    pub layer: usize,
    pub direction: SpinDirection,
}

/// Components
/// A single visible piece of the cube.
#[derive(Component)]
pub struct Cubie {
    /// Grid coordinate assigned at build time. Sticker colors derive from
    /// it; after the first baked rotation the transform is the ground truth
    /// for where the piece is, not this.
    pub grid: UVec3,
}

/// The container all pieces hang off while idle. Slice moves never rotate
/// the root itself, only subsets of its children.
#[derive(Component)]
pub struct CubeRoot;

/// Ephemeral rotation anchor. Owns the pieces of exactly one slice for the
/// lifetime of one animation, then despawns.
#[derive(Component)]
pub struct RotationPivot;

/// A component that marks an entity as a UI entity.
#[derive(Component)]
pub struct UiEntity;

/// Resources
/// A resource that holds the current cube configuration.
#[derive(Resource)]
pub struct CubeState {
    /// Current cube size N.
    pub size: usize,
    /// A flag indicating that the UI needs a redraw.
    pub is_changed: bool,
}

/// The in-flight slice rotation. `active.is_some()` is the animation lock:
/// no second rotation may start, and no rebuild may run, while it is held.
#[derive(Resource, Default)]
pub struct RotationState {
    pub active: Option<ActiveRotation>,
}

impl RotationState {
    pub fn is_locked(&self) -> bool {
        self.active.is_some()
    }
}

/// Book-keeping for one rotation, from pivot creation to commit.
pub struct ActiveRotation {
    pub pivot: Entity,
    pub axis: Axis,
    pub direction: SpinDirection,
    /// Wall-clock time spent animating so far.
    pub elapsed: f32,
    /// Pivot orientation at attach time; the eased angle composes onto it.
    pub base_rotation: Quat,
}

/// Pending moves, consumed one per completed rotation.
#[derive(Resource, Default)]
pub struct MoveQueue {
    pub pending: VecDeque<SliceMove>,
}

/// Orbit radius range for the camera, derived from the cube diagonal on
/// every rebuild.
#[derive(Resource)]
pub struct CameraOrbit {
    pub min_radius: f32,
    pub max_radius: f32,
}

impl Default for CameraOrbit {
    fn default() -> Self {
        Self {
            min_radius: CAMERA_3D_MIN_RADIUS,
            max_radius: CAMERA_3D_MAX_RADIUS,
        }
    }
}

/// A resource for random number generation.
#[derive(Resource)]
pub struct RandomGen {
    pub random_gen: ChaCha8Rng,
}

impl RandomGen {
    // Creates a new `RandomGen` from a given seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            random_gen: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomGen {
    // Creates a new `RandomGen` with the default seed.
    fn default() -> Self {
        Self {
            random_gen: ChaCha8Rng::seed_from_u64(SEED),
        }
    }
}
