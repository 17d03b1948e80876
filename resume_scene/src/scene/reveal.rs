//! "Open résumé" cube: bobs in place, grows and glows on hover, toggles the
//! CV panel on click.

use bevy::prelude::*;
use bevy::window::{PrimaryWindow, SystemCursorIcon};
use bevy::winit::cursor::CursorIcon;

use crate::motion::{bob_offset, ease_toward};
use crate::scene::hover::{HitBox, HoverState};
use crate::scene::materials::{glow, random_color, reveal_cube_material};
use crate::scene::{BackdropCamera, BackdropSet, PointerCapture};

/// Placement relative to the camera's pan; `z` is absolute.
pub const REVEAL_OFFSET: Vec3 = Vec3::new(-3.2, -0.4, 2.0);
pub const REVEAL_SIZE: f32 = 0.9;
pub const BOB_SPEED: f32 = 1.6;
pub const BOB_AMPLITUDE: f32 = 0.15;
pub const HOVER_SCALE: f32 = 1.25;
pub const SCALE_EASING: f32 = 0.15;
const IDLE_SPIN: f32 = 0.4;

#[derive(Component, Debug, Clone)]
pub struct RevealCube {
    pub hovered: bool,
    pub scale: f32,
    pub target_scale: f32,
    pub glow: Option<Color>,
}

impl Default for RevealCube {
    fn default() -> Self {
        Self {
            hovered: false,
            scale: 1.0,
            target_scale: 1.0,
            glow: None,
        }
    }
}

impl RevealCube {
    pub fn hover_enter(&mut self, color: Color) {
        self.hovered = true;
        self.target_scale = HOVER_SCALE;
        self.glow = Some(color);
    }

    pub fn hover_exit(&mut self) {
        self.hovered = false;
        self.target_scale = 1.0;
        self.glow = None;
    }

    pub fn ease_scale(&mut self) {
        self.scale = ease_toward(self.scale, self.target_scale, SCALE_EASING);
    }
}

/// Sent when the reveal cube is clicked. The panel owns what happens next.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealClicked;

pub fn reveal_cube_plugin(app: &mut App) {
    app.add_event::<RevealClicked>()
        .add_systems(Startup, spawn_reveal_cube)
        .add_systems(
            Update,
            (
                (
                    reveal_hover_system.run_if(resource_changed::<HoverState>),
                    reveal_click_system,
                )
                    .in_set(BackdropSet::Pointer)
                    .after(crate::scene::hover::hover_pick_system),
                animate_reveal_cube.in_set(BackdropSet::Animate),
            ),
        );
}

pub fn spawn_reveal_cube(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        RevealCube::default(),
        HitBox(Vec3::splat(REVEAL_SIZE / 2.0)),
        Mesh3d(meshes.add(Cuboid::from_length(REVEAL_SIZE))),
        MeshMaterial3d(materials.add(reveal_cube_material())),
        Transform::from_translation(REVEAL_OFFSET),
    ));
}

/// Applies hover enter/exit: scale target, glow and the window cursor.
pub fn reveal_hover_system(
    mut commands: Commands,
    hover: Res<HoverState>,
    windows: Query<Entity, With<PrimaryWindow>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut cubes: Query<(&mut RevealCube, &MeshMaterial3d<StandardMaterial>)>,
) {
    let over = hover.is_over_reveal_cube();
    for (mut cube, material) in &mut cubes {
        if cube.hovered == over {
            continue;
        }
        if over {
            cube.hover_enter(random_color(&mut rand::thread_rng()));
        } else {
            cube.hover_exit();
        }
        if let Some(mat) = materials.get_mut(&material.0) {
            mat.emissive = cube.glow.map(glow).unwrap_or(LinearRgba::BLACK);
        }

        let icon = if over {
            SystemCursorIcon::Pointer
        } else {
            SystemCursorIcon::Default
        };
        if let Ok(window) = windows.get_single() {
            commands.entity(window).insert(CursorIcon::System(icon));
        }
    }
}

/// A press on the cube toggles the panel and is not passed on to the pan controller.
pub fn reveal_click_system(
    mouse: Res<ButtonInput<MouseButton>>,
    hover: Res<HoverState>,
    mut capture: ResMut<PointerCapture>,
    mut clicks: EventWriter<RevealClicked>,
) {
    if !mouse.just_pressed(MouseButton::Left) || capture.over_ui {
        return;
    }
    if hover.is_over_reveal_cube() {
        capture.consumed_press = true;
        clicks.send(RevealClicked);
    }
}

pub fn animate_reveal_cube(
    time: Res<Time>,
    cameras: Query<&Transform, (With<BackdropCamera>, Without<RevealCube>)>,
    mut cubes: Query<(&mut RevealCube, &mut Transform)>,
) {
    let pan_y = cameras
        .get_single()
        .map(|t| t.translation.y)
        .unwrap_or_default();
    let bob = bob_offset(time.elapsed_secs(), BOB_SPEED, BOB_AMPLITUDE);

    for (mut cube, mut transform) in &mut cubes {
        cube.ease_scale();
        transform.translation = Vec3::new(
            REVEAL_OFFSET.x,
            pan_y + REVEAL_OFFSET.y + bob,
            REVEAL_OFFSET.z,
        );
        transform.scale = Vec3::splat(cube.scale);
        transform.rotate_y(time.delta_secs() * IDLE_SPIN);
    }
}
