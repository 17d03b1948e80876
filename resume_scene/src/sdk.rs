//! SDK entry points and builder for composing the résumé scene app.

use bevy::prelude::*;

use crate::camera::{pan_camera_plugin, PanController};
use crate::config::{self, SceneConfig};
use crate::grid::GridLayout;
use crate::scene::{backdrop_plugin, reveal_cube_plugin};
use crate::ui::{panel_plugin, ActiveLanguage, Language, PanelVisibility};

/// Builder for constructing the résumé app with customizable plugins.
pub struct ResumeSceneBuilder {
    config: SceneConfig,
    window_title: String,
    window_resolution: (f32, f32),
    clear_color: Color,
    enable_panel: bool,
}

impl Default for ResumeSceneBuilder {
    fn default() -> Self {
        Self {
            config: SceneConfig::default(),
            window_title: "Résumé".to_string(),
            window_resolution: (1280.0, 720.0),
            clear_color: Color::srgb_u8(0xe0, 0xf4, 0xfc),
            enable_panel: true,
        }
    }
}

impl ResumeSceneBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from the environment (`RESUME_LANG`, `BACKDROP_*`, `RESUME_REVEAL_CUBE`).
    pub fn from_env() -> Self {
        Self::default().config(config::scene_config())
    }

    pub fn config(mut self, config: SceneConfig) -> Self {
        self.config = config;
        self
    }

    pub fn language(mut self, language: Language) -> Self {
        self.config.language = language;
        self
    }

    pub fn layout(mut self, layout: GridLayout) -> Self {
        self.config.layout = layout;
        self
    }

    pub fn drag_sensitivity(mut self, sensitivity: f32) -> Self {
        self.config.drag_sensitivity = sensitivity;
        self
    }

    pub fn window_title(mut self, title: impl Into<String>) -> Self {
        self.window_title = title.into();
        self
    }

    pub fn window_resolution(mut self, width: f32, height: f32) -> Self {
        self.window_resolution = (width, height);
        self
    }

    pub fn clear_color(mut self, color: Color) -> Self {
        self.clear_color = color;
        self
    }

    /// Background only; the scene renders the same without the CV panel.
    pub fn disable_panel(mut self) -> Self {
        self.enable_panel = false;
        self
    }

    pub fn disable_reveal_cube(mut self) -> Self {
        self.config.reveal_cube = false;
        self
    }

    pub fn scene_config(&self) -> &SceneConfig {
        &self.config
    }

    /// Build the Bevy app with the selected configuration and plugins.
    pub fn build(self) -> App {
        let mut app = App::new();
        app.add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: self.window_title,
                resolution: self.window_resolution.into(),
                ..default()
            }),
            ..default()
        }));
        self::install(&mut app, self.config, self.clear_color, self.enable_panel);
        app
    }
}

/// Adds the scene's resources and plugins to an app that already has its
/// window and render plugins.
pub fn install(app: &mut App, config: SceneConfig, clear_color: Color, enable_panel: bool) {
    app.insert_resource(ClearColor(clear_color))
        .insert_resource(config.layout)
        .insert_resource(PanController::new(config.drag_sensitivity))
        .add_plugins(backdrop_plugin)
        .add_plugins(pan_camera_plugin);

    if config.reveal_cube {
        app.add_plugins(reveal_cube_plugin);
    }
    if enable_panel {
        // With a reveal cube the panel starts closed and the cube opens it.
        app.insert_resource(PanelVisibility(!config.reveal_cube))
            .insert_resource(ActiveLanguage(config.language))
            .add_plugins(panel_plugin);
    }

    info!(
        "résumé scene: language {}, pitch {:.2}, reveal cube {}",
        config.language,
        config.layout.pitch(),
        config.reveal_cube
    );
}
