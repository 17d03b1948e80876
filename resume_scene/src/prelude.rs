//! Minimal prelude for SDK consumers.

pub use crate::camera::{DragState, PanController};
pub use crate::config::{scene_config, SceneConfig};
pub use crate::error::SceneError;
pub use crate::grid::{cell_position, generate, CellGrid, GridLayout, ViewportExtent};
pub use crate::scene::{RevealClicked, BackdropCamera};
pub use crate::sdk::ResumeSceneBuilder;
pub use crate::ui::{ContentTable, Language};
