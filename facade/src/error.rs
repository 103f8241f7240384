//! Error types for widget construction and the host runtime.

use thiserror::Error;

/// Construction-time widget failures. Widgets cannot function without
/// their DOM contract, so these surface immediately instead of degrading.
#[derive(Debug, Error)]
pub enum WidgetError {
    #[error("required marker `{0}` not found in widget subtree")]
    MissingMarker(&'static str),
    #[error("validation rule `{name}` is not registered")]
    UnknownRule { name: String },
    #[error("preset data: {0}")]
    PresetData(#[from] serde_json::Error),
}

/// Host runtime failures.
#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("terminal io: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Widget(#[from] WidgetError),
}
