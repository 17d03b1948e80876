//! Glass cube entities: one per checkerboard cell, respawned on resize.

use bevy::prelude::*;

use crate::grid::{cell_position, cell_positions, GridCache, GridCell, GridLayout};
use crate::scene::hover::{HitBox, HoverState};
use crate::scene::materials::{glass_material, BASE_GRAY};
use crate::scene::visuals::CellVisuals;
use crate::scene::{BackdropCamera, BackdropViewport};

/// Radians per second on both spin axes.
pub const SPIN_RATE: f32 = 0.5;

/// A rotating glass cube bound to one grid cell.
#[derive(Component, Clone, Copy, Debug)]
pub struct GlassCell {
    pub cell: GridCell,
    pub spin: Vec2,
}

impl GlassCell {
    pub fn new(cell: GridCell) -> Self {
        Self {
            cell,
            spin: Vec2::ZERO,
        }
    }

    /// Advances both axes by elapsed time so the speed is refresh-rate independent.
    pub fn advance(&mut self, delta_secs: f32) {
        self.spin += Vec2::splat(delta_secs * SPIN_RATE);
    }

    pub fn rotation(&self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.spin.x, self.spin.y, 0.0)
    }
}

/// Mesh and at-rest material shared by every cell.
#[derive(Resource, Clone)]
pub struct CellAssets {
    pub mesh: Handle<Mesh>,
    pub base_material: Handle<StandardMaterial>,
}

impl CellAssets {
    pub fn new(
        meshes: &mut Assets<Mesh>,
        materials: &mut Assets<StandardMaterial>,
        layout: &GridLayout,
    ) -> Self {
        let size = layout.cell_size.max(0.0);
        Self {
            mesh: meshes.add(Cuboid::new(size, size, size)),
            base_material: materials.add(glass_material(BASE_GRAY)),
        }
    }
}

/// Regenerates the grid when the viewport or layout changed and respawns
/// the cells. Hover state does not survive a regeneration.
#[allow(clippy::too_many_arguments)]
pub fn rebuild_grid(
    mut commands: Commands,
    viewport: Res<BackdropViewport>,
    layout: Res<GridLayout>,
    assets: Res<CellAssets>,
    mut cache: ResMut<GridCache>,
    mut visuals: ResMut<CellVisuals>,
    mut hover: ResMut<HoverState>,
    cameras: Query<&Transform, With<BackdropCamera>>,
    existing: Query<Entity, With<GlassCell>>,
) {
    let Some(extent) = viewport.0 else {
        return;
    };
    if !cache.refresh(extent, layout.pitch()) {
        return;
    }

    for entity in &existing {
        commands.entity(entity).despawn();
    }
    visuals.reset();
    hover.clear();

    let camera = cameras
        .get_single()
        .map(|t| t.translation.truncate())
        .unwrap_or(Vec2::ZERO);
    let grid = cache.grid();
    let half = Vec3::splat(layout.cell_size.max(0.0) / 2.0);

    for (cell, (_, position)) in grid
        .cells
        .iter()
        .zip(cell_positions(grid, camera, layout.depth))
    {
        let glass = GlassCell::new(*cell);
        commands.spawn((
            glass,
            HitBox(half),
            Mesh3d(assets.mesh.clone()),
            MeshMaterial3d(assets.base_material.clone()),
            Transform::from_translation(position).with_rotation(glass.rotation()),
        ));
    }

    debug!(
        "backdrop grid regenerated: {}x{} indices, {} cells",
        grid.count_x,
        grid.count_y,
        grid.len()
    );
}

/// Re-applies the wrap offset whenever the camera moved.
pub fn sync_cell_positions(
    cameras: Query<Ref<Transform>, With<BackdropCamera>>,
    cache: Res<GridCache>,
    layout: Res<GridLayout>,
    mut cells: Query<(&GlassCell, &mut Transform), Without<BackdropCamera>>,
) {
    let Ok(camera) = cameras.get_single() else {
        return;
    };
    if !camera.is_changed() && !cache.is_changed() {
        return;
    }

    let grid = cache.grid();
    let pan = camera.translation.truncate();
    for (glass, mut transform) in &mut cells {
        transform.translation = cell_position(grid, &glass.cell, pan, layout.depth);
    }
}

pub fn spin_cells(time: Res<Time>, mut cells: Query<(&mut GlassCell, &mut Transform)>) {
    let delta = time.delta_secs();
    if delta == 0.0 {
        return;
    }
    for (mut glass, mut transform) in &mut cells {
        glass.advance(delta);
        transform.rotation = glass.rotation();
    }
}
