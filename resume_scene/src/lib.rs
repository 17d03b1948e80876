//! Résumé page over an animated backdrop of glass cubes.
//!
//! Library root: grid math, camera pan, scene systems, CV panel and the SDK builder.

pub mod camera;
pub mod config;
pub mod error;
pub mod grid;
pub mod motion;
pub mod scene;
pub mod ui;

pub mod prelude;
pub mod sdk;

pub use config::SceneConfig;
pub use error::SceneError;
pub use grid::{CellGrid, GridCell, GridLayout, ViewportExtent};
pub use sdk::ResumeSceneBuilder;
