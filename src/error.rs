use thiserror::Error;

/// Errors raised by the posture engine
///
/// Missing landmarks and degenerate geometry are not errors: the affected
/// dimension is skipped and the frame yields fewer feedback items.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("Unknown exercise mode: {0}")]
    UnknownExerciseMode(String),

    #[error("Invalid pose: expected at most {max} landmarks, got {count}")]
    InvalidPose { count: usize, max: usize },

    #[error("Invalid engine configuration: {0}")]
    InvalidConfig(String),
}
