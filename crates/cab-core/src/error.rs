use thiserror::Error;

/// Failure to interpret a textual id coming from the page (data attributes, routes).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown zone id {0:?}")]
    UnknownZone(String),
    #[error("unknown sub-panel number {0:?}")]
    UnknownSubPanel(String),
    #[error("unknown material id {0:?}")]
    UnknownMaterial(String),
    #[error("unknown view mode {0:?}")]
    UnknownViewMode(String),
    #[error("unknown tuning parameter {0:?}")]
    UnknownTuningParam(String),
    #[error("unknown control {0}={1:?}")]
    UnknownControl(String, String),
}
