//! Checkerboard grid generation: which cells exist for a given viewport.

mod positioner;

use bevy::prelude::*;

pub use positioner::{cell_position, cell_positions, grid_origin, wrap_offset};

/// Extra columns beyond the visible width so panning never shows a seam.
pub const MARGIN_X: u32 = 4;
/// Extra rows beyond the visible height.
pub const MARGIN_Y: u32 = 6;
/// Floor applied to degenerate pitches before any division.
pub const MIN_PITCH: f32 = 0.01;

/// Visible area of the render surface in world units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportExtent {
    pub width: f32,
    pub height: f32,
}

impl ViewportExtent {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Extent of the plane `distance` units in front of a perspective camera.
    pub fn from_perspective(fov_y: f32, aspect_ratio: f32, distance: f32) -> Self {
        let height = 2.0 * distance.abs() * (fov_y * 0.5).tan();
        Self {
            width: height * aspect_ratio,
            height,
        }
    }

    fn sanitized(self) -> Self {
        let clean = |v: f32| if v.is_finite() { v.max(0.0) } else { 0.0 };
        Self {
            width: clean(self.width),
            height: clean(self.height),
        }
    }
}

/// One member of the checkerboard. `id` is stable until the grid is regenerated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridCell {
    pub x_index: u32,
    pub y_index: u32,
    pub id: u32,
}

/// Cube size, gap and the z plane the backdrop is drawn on.
#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct GridLayout {
    pub cell_size: f32,
    pub spacing: f32,
    pub depth: f32,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            cell_size: 1.0,
            spacing: 0.8,
            depth: -3.0,
        }
    }
}

impl GridLayout {
    /// Distance between adjacent cell centers, never below [`MIN_PITCH`].
    pub fn pitch(&self) -> f32 {
        sanitize_pitch(self.cell_size + self.spacing)
    }
}

pub fn sanitize_pitch(pitch: f32) -> f32 {
    if pitch.is_finite() && pitch >= MIN_PITCH {
        pitch
    } else {
        MIN_PITCH
    }
}

/// The generated index range and its checkerboard members.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CellGrid {
    pub cells: Vec<GridCell>,
    pub count_x: u32,
    pub count_y: u32,
    pub pitch: f32,
}

impl CellGrid {
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Builds the checkerboard covering `extent` plus the fixed margins.
pub fn generate(extent: ViewportExtent, pitch: f32) -> CellGrid {
    let extent = extent.sanitized();
    let pitch = sanitize_pitch(pitch);

    let count_x = (extent.width / pitch).ceil() as u32 + MARGIN_X;
    let count_y = (extent.height / pitch).ceil() as u32 + MARGIN_Y;

    let mut cells = Vec::with_capacity((count_x as usize * count_y as usize).div_ceil(2));
    let mut next_id = 0u32;
    for x_index in 0..count_x {
        for y_index in 0..count_y {
            if (x_index + y_index) % 2 == 0 {
                cells.push(GridCell {
                    x_index,
                    y_index,
                    id: next_id,
                });
                next_id += 1;
            }
        }
    }

    CellGrid {
        cells,
        count_x,
        count_y,
        pitch,
    }
}

/// Memoized grid, regenerated only when the viewport or pitch changes.
#[derive(Resource, Default)]
pub struct GridCache {
    key: Option<(ViewportExtent, f32)>,
    grid: CellGrid,
}

impl GridCache {
    /// Returns true when the grid was regenerated (all previous ids are void).
    pub fn refresh(&mut self, extent: ViewportExtent, pitch: f32) -> bool {
        let key = (extent, sanitize_pitch(pitch));
        if self.key == Some(key) {
            return false;
        }
        self.grid = generate(key.0, key.1);
        self.key = Some(key);
        true
    }

    pub fn grid(&self) -> &CellGrid {
        &self.grid
    }

    pub fn extent(&self) -> Option<ViewportExtent> {
        self.key.map(|(extent, _)| extent)
    }
}
