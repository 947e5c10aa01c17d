use thiserror::Error;

/// Reasons the engine declines to produce a record.
///
/// Missing or malformed content never fails a field; it only leaves the
/// field at its default. The single refusal is input too short to be a
/// document at all.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Insufficient text: {found} characters, at least {required} required")]
    InsufficientText { found: usize, required: usize },
}
