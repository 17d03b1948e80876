/// Errors raised while reading configuration or the résumé content.
///
/// None of these stop the scene: configuration falls back to defaults and a
/// content failure only removes the CV panel.
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    #[error("{key}: expected a number, got {value:?}")]
    InvalidNumber { key: &'static str, value: String },
    #[error("{key}: out of range, got {value}")]
    OutOfRange { key: &'static str, value: f32 },
    #[error("{key}: expected true or false, got {value:?}")]
    InvalidFlag { key: &'static str, value: String },
    #[error("unknown language {0:?} (expected \"es\" or \"en\")")]
    UnknownLanguage(String),
    #[error("invalid résumé content: {0}")]
    Content(#[from] serde_json::Error),
}
