//! Backdrop scene: camera, lights, frame ordering and the viewport extent.

pub(crate) mod cells;
pub(crate) mod hover;
pub(crate) mod materials;
pub(crate) mod reveal;
pub(crate) mod visuals;

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::grid::{GridCache, GridLayout, ViewportExtent};

pub use cells::{rebuild_grid, spin_cells, sync_cell_positions, CellAssets, GlassCell, SPIN_RATE};
pub use hover::{hover_pick_system, HitBox, HoverState, HoverTarget};
pub use materials::BASE_GRAY;
pub use reveal::{reveal_cube_plugin, RevealClicked, RevealCube};
pub use visuals::{apply_cell_colors, CellVisualState, CellVisuals};

pub const CAMERA_DISTANCE: f32 = 10.0;
pub const CAMERA_FOV_DEGREES: f32 = 50.0;

/// Marker for the camera whose pan drives the backdrop.
#[derive(Component, Default)]
pub struct BackdropCamera;

/// Frame phases, in order: layout, UI, pointer picking, panning, animation.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum BackdropSet {
    Layout,
    Ui,
    Pointer,
    Pan,
    Animate,
}

/// Who already claimed the pointer this frame.
#[derive(Resource, Default, Debug)]
pub struct PointerCapture {
    /// The pointer is over the CV panel.
    pub over_ui: bool,
    /// The left press was handled by a 3D object and must not start a drag.
    pub consumed_press: bool,
}

impl PointerCapture {
    pub fn blocks_press(&self) -> bool {
        self.over_ui || self.consumed_press
    }
}

/// Current visible extent at the origin plane; `None` until a window exists.
#[derive(Resource, Default, Debug, Clone, Copy, PartialEq)]
pub struct BackdropViewport(pub Option<ViewportExtent>);

pub fn backdrop_plugin(app: &mut App) {
    app.configure_sets(
        Update,
        (
            BackdropSet::Layout,
            BackdropSet::Ui,
            BackdropSet::Pointer,
            BackdropSet::Pan,
            BackdropSet::Animate,
        )
            .chain(),
    )
    .init_resource::<GridLayout>()
    .init_resource::<GridCache>()
    .init_resource::<BackdropViewport>()
    .init_resource::<CellVisuals>()
    .init_resource::<HoverState>()
    .init_resource::<PointerCapture>()
    .add_systems(Startup, setup_scene)
    .add_systems(
        Update,
        (
            (
                reset_pointer_capture,
                update_viewport_extent,
                rebuild_grid.run_if(
                    resource_changed::<BackdropViewport>.or(resource_changed::<GridLayout>),
                ),
            )
                .chain()
                .in_set(BackdropSet::Layout),
            hover_pick_system.in_set(BackdropSet::Pointer),
            (
                sync_cell_positions,
                spin_cells,
                apply_cell_colors.run_if(resource_changed::<CellVisuals>),
            )
                .in_set(BackdropSet::Animate),
        ),
    );
}

pub fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    layout: Res<GridLayout>,
) {
    commands.insert_resource(CellAssets::new(&mut meshes, &mut materials, &layout));
    commands.spawn((
        BackdropCamera,
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: CAMERA_FOV_DEGREES.to_radians(),
            ..default()
        }),
        Transform::from_xyz(0., 0., CAMERA_DISTANCE),
    ));
    commands.spawn((
        DirectionalLight {
            illuminance: 4_000.0,
            ..default()
        },
        Transform::from_xyz(3., 8., 5.).looking_at(Vec3::ZERO, Vec3::Y),
    ));
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 600.0,
    });
}

fn reset_pointer_capture(mut capture: ResMut<PointerCapture>) {
    *capture = PointerCapture::default();
}

/// Derives the world-space extent from the window aspect and camera frustum.
/// Only writes the resource on an actual change so the grid stays memoized.
pub fn update_viewport_extent(
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Projection, &Transform), With<BackdropCamera>>,
    mut viewport: ResMut<BackdropViewport>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    let Ok((projection, transform)) = cameras.get_single() else {
        return;
    };
    let (width, height) = (window.width(), window.height());
    if width <= 0.0 || height <= 0.0 {
        return;
    }
    let Projection::Perspective(perspective) = projection else {
        return;
    };

    let extent =
        ViewportExtent::from_perspective(perspective.fov, width / height, transform.translation.z);
    viewport.set_if_neq(BackdropViewport(Some(extent)));
}
