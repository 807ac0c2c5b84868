//! Piece registry: grid layout, sticker colors, and (re)building the piece set.
use bevy::mesh::{Indices, PrimitiveTopology};
use bevy::prelude::*;

use crate::utils::config::CubeSettings;
use crate::utils::constants::camera_3d_constants::{
    CAMERA_START_DIAGONAL_FACTOR_XY, CAMERA_START_DIAGONAL_FACTOR_Z, ORBIT_MAX_DIAGONAL_FACTOR,
    ORBIT_MIN_DIAGONAL_FACTOR,
};
use crate::utils::constants::cube_constants::*;
use crate::utils::objects::{CameraOrbit, Cubie};

/// All grid coordinates of an NxNxN cube, skipping the strict interior for
/// N > 2. Interior pieces are never visible and no slice query needs them.
pub fn grid_coords(n: usize) -> Vec<UVec3> {
    let mut coords = Vec::with_capacity(piece_count(n));
    let interior = |i: usize| i > 0 && i < n - 1;
    for x in 0..n {
        for y in 0..n {
            for z in 0..n {
                if n > 2 && interior(x) && interior(y) && interior(z) {
                    continue;
                }
                coords.push(UVec3::new(x as u32, y as u32, z as u32));
            }
        }
    }
    coords
}

/// Number of pieces with the interior elided: N^3 - (N-2)^3.
pub fn piece_count(n: usize) -> usize {
    n.pow(3) - n.saturating_sub(2).pow(3)
}

/// Edge length of the whole cube, gaps included.
pub fn cube_span(n: usize, gap: f32) -> f32 {
    n as f32 * PIECE_SIZE + (n - 1) as f32 * gap
}

/// Root-local coordinate of grid index `i` along one axis. The cube is
/// centered on the root's origin, so index 0 sits at minus the offset.
pub fn centered_coord(i: usize, n: usize, gap: f32) -> f32 {
    let offset = (cube_span(n, gap) - PIECE_SIZE) / 2.0;
    i as f32 * (PIECE_SIZE + gap) - offset
}

/// Root-local position of a grid coordinate.
pub fn centered_position(grid: UVec3, n: usize, gap: f32) -> Vec3 {
    Vec3::new(
        centered_coord(grid.x as usize, n, gap),
        centered_coord(grid.y as usize, n, gap),
        centered_coord(grid.z as usize, n, gap),
    )
}

/// Sticker colors of a piece, ordered +X, -X, +Y, -Y, +Z, -Z.
/// A face is puzzle-colored iff the piece sits on the matching outer layer
/// of its *build-time* grid; everything else is the neutral interior color.
/// Colors never change after creation. A cube is "solved" by rebuilding.
pub fn face_colors(grid: UVec3, n: usize) -> [Color; 6] {
    let last = (n - 1) as u32;
    [
        if grid.x == last { COLOR_RIGHT } else { COLOR_INNER },
        if grid.x == 0 { COLOR_LEFT } else { COLOR_INNER },
        if grid.y == last { COLOR_UP } else { COLOR_INNER },
        if grid.y == 0 { COLOR_DOWN } else { COLOR_INNER },
        if grid.z == last { COLOR_FRONT } else { COLOR_INNER },
        if grid.z == 0 { COLOR_BACK } else { COLOR_INNER },
    ]
}

/// Outward normals in the same order as `face_colors`.
const FACE_NORMALS: [Vec3; 6] = [
    Vec3::X,
    Vec3::NEG_X,
    Vec3::Y,
    Vec3::NEG_Y,
    Vec3::Z,
    Vec3::NEG_Z,
];

/// Builds a cuboid mesh with one solid color per face, baked in as vertex
/// colors so a single white material renders all six stickers.
pub fn cubie_mesh(colors: &[Color; 6]) -> Mesh {
    let h = PIECE_SIZE / 2.0;
    let mut positions = Vec::with_capacity(24);
    let mut normals = Vec::with_capacity(24);
    let mut uvs = Vec::with_capacity(24);
    let mut vertex_colors = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(36);

    for (face, color) in colors.iter().enumerate() {
        let normal = FACE_NORMALS[face];
        // Tangent basis chosen so the quad winds counter-clockwise as seen
        // from outside the cube.
        let up_hint = if normal.y.abs() > 0.5 { Vec3::Z } else { Vec3::Y };
        let right = up_hint.cross(normal).normalize();
        let up = normal.cross(right);

        let base = positions.len() as u32;
        for (u, v) in [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)] {
            positions.push((normal * h + right * (u * h) + up * (v * h)).to_array());
            normals.push(normal.to_array());
            uvs.push([(u + 1.0) / 2.0, (v + 1.0) / 2.0]);
            vertex_colors.push(color.to_linear().to_f32_array());
        }
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    let mut mesh = Mesh::new(PrimitiveTopology::TriangleList, Default::default());
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, normals);
    mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, uvs);
    mesh.insert_attribute(Mesh::ATTRIBUTE_COLOR, vertex_colors);
    mesh.insert_indices(Indices::U32(indices));
    mesh
}

/// Despawns every existing piece and builds a fresh NxNxN piece set as
/// children of the cube root, centered on its origin.
///
/// Must only run while no rotation is active; a rotation in flight would be
/// left holding despawned pieces. The caller boundary guarantees that and
/// that `n` is already within bounds.
pub fn rebuild_cube(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
    existing: impl Iterator<Item = Entity>,
    root: Entity,
    settings: &CubeSettings,
    n: usize,
) {
    for entity in existing {
        commands.entity(entity).despawn();
    }

    // One shared material; the per-face colors live in the meshes.
    let material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        perceptual_roughness: 0.3,
        metallic: 0.1,
        ..default()
    });

    for grid in grid_coords(n) {
        commands.spawn((
            Mesh3d(meshes.add(cubie_mesh(&face_colors(grid, n)))),
            MeshMaterial3d(material.clone()),
            Transform::from_translation(centered_position(grid, n, settings.piece_gap)),
            Cubie { grid },
            ChildOf(root),
        ));
    }
}

/// Repositions the camera and rescales its orbit range to fit the cube.
pub fn fit_camera_to_cube(
    orbit: &mut CameraOrbit,
    camera_transform: &mut Transform,
    n: usize,
    gap: f32,
) {
    let diagonal = 3.0_f32.sqrt() * cube_span(n, gap);
    orbit.min_radius = diagonal * ORBIT_MIN_DIAGONAL_FACTOR;
    orbit.max_radius = diagonal * ORBIT_MAX_DIAGONAL_FACTOR;

    camera_transform.translation = Vec3::new(
        diagonal * CAMERA_START_DIAGONAL_FACTOR_XY,
        diagonal * CAMERA_START_DIAGONAL_FACTOR_XY,
        diagonal * CAMERA_START_DIAGONAL_FACTOR_Z,
    );
    camera_transform.look_at(Vec3::ZERO, Vec3::Y);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn piece_count_matches_generated_coords() {
        for n in 2..=10 {
            assert_eq!(grid_coords(n).len(), piece_count(n), "size {n}");
        }
        // The classic cases.
        assert_eq!(piece_count(2), 8);
        assert_eq!(piece_count(3), 26);
        assert_eq!(piece_count(10), 488);
    }

    #[test]
    fn grid_coords_are_unique() {
        for n in 2..=10 {
            let coords = grid_coords(n);
            let mut seen: Vec<UVec3> = coords.clone();
            seen.sort_unstable_by_key(|c| (c.x, c.y, c.z));
            seen.dedup();
            assert_eq!(seen.len(), coords.len(), "size {n}");
        }
    }

    #[test]
    fn size_two_keeps_every_piece() {
        assert_eq!(grid_coords(2).len(), 8);
    }

    #[test]
    fn centering_matches_the_reference_geometry() {
        // N=3, gap 0.05: span 3.10, offset 1.05, corner piece at -1.05.
        let gap = 0.05;
        assert!((cube_span(3, gap) - 3.10).abs() < 1e-6);
        assert!((centered_coord(0, 3, gap) + 1.05).abs() < 1e-6);
        let corner = centered_position(UVec3::ZERO, 3, gap);
        assert!((corner - Vec3::splat(-1.05)).length() < 1e-6);
    }

    #[test]
    fn centering_is_symmetric() {
        for n in 2..=10 {
            let lo = centered_coord(0, n, 0.05);
            let hi = centered_coord(n - 1, n, 0.05);
            assert!((lo + hi).abs() < 1e-5, "size {n}");
        }
    }

    #[test]
    fn corner_edge_and_center_sticker_counts() {
        let colored = |grid, n| {
            face_colors(grid, n)
                .iter()
                .filter(|c| **c != COLOR_INNER)
                .count()
        };
        // N=3: corners carry 3 stickers, edges 2, face centers 1.
        assert_eq!(colored(UVec3::new(0, 0, 0), 3), 3);
        assert_eq!(colored(UVec3::new(1, 0, 0), 3), 2);
        assert_eq!(colored(UVec3::new(1, 1, 0), 3), 1);
        // N=2 is all corners.
        for grid in grid_coords(2) {
            assert_eq!(colored(grid, 2), 3);
        }
    }

    #[test]
    fn sticker_colors_follow_the_outer_layer_rule() {
        let colors = face_colors(UVec3::new(2, 0, 1), 3);
        assert_eq!(colors[0], COLOR_RIGHT); // x == N-1
        assert_eq!(colors[1], COLOR_INNER); // x != 0
        assert_eq!(colors[2], COLOR_INNER); // y != N-1
        assert_eq!(colors[3], COLOR_DOWN); // y == 0
        assert_eq!(colors[4], COLOR_INNER); // z strictly inside
        assert_eq!(colors[5], COLOR_INNER);
    }

    #[test]
    fn cubie_mesh_has_six_quads() {
        let mesh = cubie_mesh(&face_colors(UVec3::ZERO, 3));
        assert_eq!(mesh.count_vertices(), 24);
        assert_eq!(mesh.indices().map(|i| i.len()), Some(36));
    }
}
