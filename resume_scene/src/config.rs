//! Env parsing and defaults for the scene.

use bevy::prelude::*;

use crate::camera::DEFAULT_DRAG_SENSITIVITY;
use crate::error::SceneError;
use crate::grid::GridLayout;
use crate::ui::Language;

const LANG_VAR: &str = "RESUME_LANG";
const CELL_SIZE_VAR: &str = "BACKDROP_CELL_SIZE";
const SPACING_VAR: &str = "BACKDROP_SPACING";
const DRAG_VAR: &str = "BACKDROP_DRAG_SENSITIVITY";
const REVEAL_VAR: &str = "RESUME_REVEAL_CUBE";

/// Settings resolved from the environment, with defaults for anything unset.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    pub language: Language,
    pub layout: GridLayout,
    pub drag_sensitivity: f32,
    pub reveal_cube: bool,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            language: Language::default(),
            layout: GridLayout::default(),
            drag_sensitivity: DEFAULT_DRAG_SENSITIVITY,
            reveal_cube: true,
        }
    }
}

/// Reads every variable, logging and skipping the ones that don't parse.
pub fn scene_config() -> SceneConfig {
    let mut config = SceneConfig::default();

    match read_language() {
        Ok(Some(language)) => config.language = language,
        Ok(None) => {}
        Err(err) => warn!("{err}; using {}", config.language),
    }
    apply(&mut config.layout.cell_size, read_positive(CELL_SIZE_VAR));
    apply(&mut config.layout.spacing, read_non_negative(SPACING_VAR));
    apply(&mut config.drag_sensitivity, read_positive(DRAG_VAR));
    apply(&mut config.reveal_cube, read_flag(REVEAL_VAR));

    config
}

fn apply<T: std::fmt::Debug>(slot: &mut T, value: Result<Option<T>, SceneError>) {
    match value {
        Ok(Some(value)) => *slot = value,
        Ok(None) => {}
        Err(err) => warn!("{err}; keeping default {slot:?}"),
    }
}

fn read_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|raw| !raw.trim().is_empty())
}

fn read_language() -> Result<Option<Language>, SceneError> {
    read_var(LANG_VAR).map(|raw| raw.parse()).transpose()
}

fn read_number(key: &'static str) -> Result<Option<f32>, SceneError> {
    let Some(raw) = read_var(key) else {
        return Ok(None);
    };
    match raw.trim().parse::<f32>() {
        Ok(value) if value.is_finite() => Ok(Some(value)),
        _ => Err(SceneError::InvalidNumber { key, value: raw }),
    }
}

fn read_positive(key: &'static str) -> Result<Option<f32>, SceneError> {
    match read_number(key)? {
        Some(value) if value <= 0.0 => Err(SceneError::OutOfRange { key, value }),
        other => Ok(other),
    }
}

fn read_non_negative(key: &'static str) -> Result<Option<f32>, SceneError> {
    match read_number(key)? {
        Some(value) if value < 0.0 => Err(SceneError::OutOfRange { key, value }),
        other => Ok(other),
    }
}

fn read_flag(key: &'static str) -> Result<Option<bool>, SceneError> {
    let Some(raw) = read_var(key) else {
        return Ok(None);
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(Some(true)),
        "0" | "false" | "no" | "off" => Ok(Some(false)),
        _ => Err(SceneError::InvalidFlag { key, value: raw }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Mutex, OnceLock};

    static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

    fn lock_env() -> std::sync::MutexGuard<'static, ()> {
        ENV_LOCK
            .get_or_init(|| Mutex::new(()))
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    struct EnvGuard {
        snapshot: Vec<(&'static str, Option<String>)>,
    }

    impl EnvGuard {
        fn capture(keys: &[&'static str]) -> Self {
            let snapshot = keys
                .iter()
                .map(|&key| (key, std::env::var(key).ok()))
                .collect();
            for key in keys {
                std::env::remove_var(key);
            }
            Self { snapshot }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for (key, value) in &self.snapshot {
                match value {
                    Some(val) => std::env::set_var(key, val),
                    None => std::env::remove_var(key),
                }
            }
        }
    }

    const ENV_KEYS: [&str; 5] = [LANG_VAR, CELL_SIZE_VAR, SPACING_VAR, DRAG_VAR, REVEAL_VAR];

    #[test]
    fn defaults_when_nothing_is_set() {
        let _lock = lock_env();
        let _guard = EnvGuard::capture(&ENV_KEYS);

        assert_eq!(scene_config(), SceneConfig::default());
    }

    #[test]
    fn env_values_override_defaults() {
        let _lock = lock_env();
        let _guard = EnvGuard::capture(&ENV_KEYS);

        std::env::set_var(LANG_VAR, "en");
        std::env::set_var(CELL_SIZE_VAR, "1.5");
        std::env::set_var(SPACING_VAR, "0");
        std::env::set_var(DRAG_VAR, "0.05");
        std::env::set_var(REVEAL_VAR, "off");

        let config = scene_config();

        assert_eq!(config.language, Language::En);
        assert_eq!(config.layout.cell_size, 1.5);
        assert_eq!(config.layout.spacing, 0.0);
        assert_eq!(config.drag_sensitivity, 0.05);
        assert!(!config.reveal_cube);
    }

    #[test]
    fn invalid_values_fall_back_to_defaults() {
        let _lock = lock_env();
        let _guard = EnvGuard::capture(&ENV_KEYS);

        std::env::set_var(LANG_VAR, "fr");
        std::env::set_var(CELL_SIZE_VAR, "-2");
        std::env::set_var(SPACING_VAR, "wide");
        std::env::set_var(DRAG_VAR, "NaN");
        std::env::set_var(REVEAL_VAR, "maybe");

        assert_eq!(scene_config(), SceneConfig::default());
    }

    #[test]
    fn read_errors_name_the_variable() {
        let _lock = lock_env();
        let _guard = EnvGuard::capture(&ENV_KEYS);

        std::env::set_var(CELL_SIZE_VAR, "0");
        let err = read_positive(CELL_SIZE_VAR).unwrap_err();
        assert!(err.to_string().starts_with(CELL_SIZE_VAR));

        std::env::set_var(REVEAL_VAR, "   ");
        assert!(read_flag(REVEAL_VAR).unwrap().is_none());
    }
}
