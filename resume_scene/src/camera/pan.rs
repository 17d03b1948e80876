//! Drag-to-pan: pointer drags move a target height the camera eases toward.

use bevy::prelude::*;
use bevy::window::{CursorMoved, PrimaryWindow, WindowFocused};

use crate::motion::ease_toward;
use crate::scene::{BackdropCamera, BackdropSet, PointerCapture};

pub const DEFAULT_DRAG_SENSITIVITY: f32 = 0.02;
pub const CAMERA_EASING: f32 = 0.1;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragState {
    Idle,
    Dragging { last_y: f32 },
}

/// Owns the drag state and the camera's target height.
///
/// Written by pointer input between frames, read by [`camera_ease_system`]
/// every frame. Removing the resource unsubscribes the input systems.
#[derive(Resource, Clone, Debug)]
pub struct PanController {
    state: DragState,
    target_y: f32,
    sensitivity: f32,
    easing: f32,
}

impl Default for PanController {
    fn default() -> Self {
        Self::new(DEFAULT_DRAG_SENSITIVITY)
    }
}

impl PanController {
    pub fn new(sensitivity: f32) -> Self {
        Self {
            state: DragState::Idle,
            target_y: 0.0,
            sensitivity,
            easing: CAMERA_EASING,
        }
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    pub fn target_y(&self) -> f32 {
        self.target_y
    }

    pub fn sensitivity(&self) -> f32 {
        self.sensitivity
    }

    /// Screen-space `y` of the press (top-down, like window cursor positions).
    pub fn pointer_down(&mut self, y: f32) {
        self.state = DragState::Dragging { last_y: y };
    }

    pub fn pointer_move(&mut self, y: f32) {
        let DragState::Dragging { last_y } = self.state else {
            return;
        };
        self.target_y += (y - last_y) * self.sensitivity;
        self.state = DragState::Dragging { last_y: y };
    }

    pub fn pointer_up(&mut self) {
        self.state = DragState::Idle;
    }

    /// Drops any drag in progress; the target is kept so the camera still settles.
    pub fn release(&mut self) {
        self.pointer_up();
    }

    /// Next camera height for one frame of smoothing.
    pub fn step(&self, current_y: f32) -> f32 {
        ease_toward(current_y, self.target_y, self.easing)
    }
}

pub fn pan_camera_plugin(app: &mut App) {
    app.init_resource::<PanController>()
        .add_systems(
            Update,
            (
                pan_input_system.in_set(BackdropSet::Pan),
                camera_ease_system.in_set(BackdropSet::Pan).after(pan_input_system),
            )
                .run_if(resource_exists::<PanController>),
        )
        .add_systems(Last, unmount_pan_controller.run_if(on_event::<AppExit>));
}

/// Releases any drag and removes the controller; input systems stop running.
/// Runs on `AppExit`; callers tearing the scene down earlier can schedule it too.
pub fn unmount_pan_controller(mut commands: Commands, pan: Option<ResMut<PanController>>) {
    if let Some(mut pan) = pan {
        pan.release();
        commands.remove_resource::<PanController>();
        debug!("pan controller unmounted");
    }
}

fn pan_input_system(
    mouse: Res<ButtonInput<MouseButton>>,
    mut cursor_moves: EventReader<CursorMoved>,
    mut focus_events: EventReader<WindowFocused>,
    windows: Query<&Window, With<PrimaryWindow>>,
    capture: Res<PointerCapture>,
    mut pan: ResMut<PanController>,
) {
    if mouse.just_pressed(MouseButton::Left) && !capture.blocks_press() {
        let cursor = windows.get_single().ok().and_then(Window::cursor_position);
        if let Some(cursor) = cursor {
            pan.pointer_down(cursor.y);
        }
    }

    for moved in cursor_moves.read() {
        pan.pointer_move(moved.position.y);
    }

    // A release anywhere ends the drag, as does losing focus mid-drag.
    let focus_lost = focus_events.read().any(|event| !event.focused);
    if mouse.just_released(MouseButton::Left) || focus_lost {
        pan.pointer_up();
    }
}

fn camera_ease_system(
    pan: Res<PanController>,
    mut cameras: Query<&mut Transform, With<BackdropCamera>>,
) {
    let Ok(mut transform) = cameras.get_single_mut() else {
        return;
    };
    let next = pan.step(transform.translation.y);
    if next != transform.translation.y {
        transform.translation.y = next;
    }
}
