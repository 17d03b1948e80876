mod pan;

pub use pan::{
    pan_camera_plugin, unmount_pan_controller, DragState, PanController, CAMERA_EASING,
    DEFAULT_DRAG_SENSITIVITY,
};
