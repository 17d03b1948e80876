//! Per-cell hover colour, stored in one arena keyed by cell id.

use std::collections::HashMap;

use bevy::prelude::*;

use crate::scene::cells::{CellAssets, GlassCell};
use crate::scene::materials::{glass_material, BASE_GRAY};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellVisualState {
    pub hovered: bool,
    pub color: Color,
}

impl Default for CellVisualState {
    fn default() -> Self {
        Self {
            hovered: false,
            color: BASE_GRAY,
        }
    }
}

/// Hover state for every live cell. Cells absent from the map are at rest.
#[derive(Resource, Default, Debug)]
pub struct CellVisuals {
    states: HashMap<u32, CellVisualState>,
}

impl CellVisuals {
    pub fn enter(&mut self, id: u32, color: Color) {
        self.states.insert(
            id,
            CellVisualState {
                hovered: true,
                color,
            },
        );
    }

    pub fn exit(&mut self, id: u32) {
        self.states.remove(&id);
    }

    pub fn state(&self, id: u32) -> CellVisualState {
        self.states.get(&id).copied().unwrap_or_default()
    }

    pub fn color_of(&self, id: u32) -> Color {
        self.state(id).color
    }

    pub fn hovered_count(&self) -> usize {
        self.states.len()
    }

    /// Forgets every cell; called when the grid is regenerated.
    pub fn reset(&mut self) {
        self.states.clear();
    }
}

/// Swaps hovered cells onto their own material and back to the shared one on exit.
pub fn apply_cell_colors(
    visuals: Res<CellVisuals>,
    assets: Res<CellAssets>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut cells: Query<(&GlassCell, &mut MeshMaterial3d<StandardMaterial>)>,
) {
    for (cell, mut material) in &mut cells {
        let state = visuals.state(cell.cell.id);
        let is_shared = material.0 == assets.base_material;
        match (state.hovered, is_shared) {
            (true, true) => {
                material.0 = materials.add(glass_material(state.color));
            }
            (false, false) => {
                materials.remove(&material.0);
                material.0 = assets.base_material.clone();
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GridCell;
    use crate::scene::materials::GLASS_OPACITY;

    fn color_app() -> (App, Entity, Handle<StandardMaterial>) {
        let mut app = App::new();
        app.init_resource::<Assets<StandardMaterial>>()
            .init_resource::<CellVisuals>()
            .add_systems(Update, apply_cell_colors);

        let base = app
            .world_mut()
            .resource_mut::<Assets<StandardMaterial>>()
            .add(glass_material(BASE_GRAY));
        app.insert_resource(CellAssets {
            mesh: Handle::default(),
            base_material: base.clone(),
        });

        let cell = GridCell {
            x_index: 0,
            y_index: 0,
            id: 5,
        };
        let entity = app
            .world_mut()
            .spawn((GlassCell::new(cell), MeshMaterial3d(base.clone())))
            .id();
        (app, entity, base)
    }

    fn material_of(app: &App, entity: Entity) -> Handle<StandardMaterial> {
        app.world()
            .get::<MeshMaterial3d<StandardMaterial>>(entity)
            .unwrap()
            .0
            .clone()
    }

    #[test]
    fn hovered_cell_shows_its_colour_and_returns_to_shared_gray() {
        let (mut app, entity, base) = color_app();
        let hover = Color::srgb_u8(200, 30, 90);

        app.world_mut().resource_mut::<CellVisuals>().enter(5, hover);
        app.update();

        let own = material_of(&app, entity);
        assert_ne!(own, base);
        let shown = app
            .world()
            .resource::<Assets<StandardMaterial>>()
            .get(&own)
            .unwrap()
            .base_color;
        assert_eq!(shown, hover.with_alpha(GLASS_OPACITY));

        app.world_mut().resource_mut::<CellVisuals>().exit(5);
        app.update();

        assert_eq!(material_of(&app, entity), base);
        let materials = app.world().resource::<Assets<StandardMaterial>>();
        assert!(materials.get(&own).is_none());
        assert_eq!(materials.get(&base).unwrap().base_color, BASE_GRAY.with_alpha(GLASS_OPACITY));
    }

    #[test]
    fn other_cells_keep_the_shared_material() {
        let (mut app, entity, base) = color_app();
        app.world_mut()
            .resource_mut::<CellVisuals>()
            .enter(6, Color::srgb_u8(1, 2, 3));
        app.update();

        assert_eq!(material_of(&app, entity), base);
    }

    #[test]
    fn enter_then_exit_restores_base_gray() {
        let mut visuals = CellVisuals::default();
        let hover = Color::srgb_u8(12, 200, 40);

        assert_eq!(visuals.color_of(3), BASE_GRAY);
        visuals.enter(3, hover);
        assert_eq!(visuals.color_of(3), hover);
        assert!(visuals.state(3).hovered);

        visuals.exit(3);
        assert_eq!(visuals.state(3), CellVisualState::default());
        assert_eq!(visuals.color_of(3), BASE_GRAY);
    }

    #[test]
    fn cells_do_not_share_hover_state() {
        let mut visuals = CellVisuals::default();
        visuals.enter(1, Color::srgb_u8(1, 2, 3));
        assert_eq!(visuals.color_of(2), BASE_GRAY);
        assert_eq!(visuals.hovered_count(), 1);

        visuals.reset();
        assert_eq!(visuals.hovered_count(), 0);
        assert_eq!(visuals.color_of(1), BASE_GRAY);
    }
}
