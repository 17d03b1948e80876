//! Maps grid indices to world positions, re-anchored by the camera's pan.

use bevy::prelude::*;

use super::{CellGrid, GridCell};

/// Modulo re-anchor for one axis. Lies in `(-2·pitch, 0]` for any camera value.
pub fn wrap_offset(camera: f32, pitch: f32) -> f32 {
    (camera % pitch) - pitch
}

/// Center of cell `(0, 0)` with the grid centered on the origin.
pub fn grid_origin(grid: &CellGrid) -> Vec2 {
    let p = grid.pitch;
    Vec2::new(
        -(grid.count_x as f32 * p) / 2.0 + p / 2.0,
        -(grid.count_y as f32 * p) / 2.0 + p / 2.0,
    )
}

pub fn cell_position(grid: &CellGrid, cell: &GridCell, camera: Vec2, depth: f32) -> Vec3 {
    let p = grid.pitch;
    let start = grid_origin(grid);
    Vec3::new(
        start.x + cell.x_index as f32 * p + wrap_offset(camera.x, p),
        start.y + cell.y_index as f32 * p + wrap_offset(camera.y, p),
        depth,
    )
}

/// Positions for every cell in `grid`, keyed by cell id.
pub fn cell_positions(
    grid: &CellGrid,
    camera: Vec2,
    depth: f32,
) -> impl Iterator<Item = (u32, Vec3)> + '_ {
    let p = grid.pitch;
    let start = grid_origin(grid);
    let wrap = Vec2::new(wrap_offset(camera.x, p), wrap_offset(camera.y, p));
    grid.cells.iter().map(move |cell| {
        let pos = Vec3::new(
            start.x + cell.x_index as f32 * p + wrap.x,
            start.y + cell.y_index as f32 * p + wrap.y,
            depth,
        );
        (cell.id, pos)
    })
}
