use crate::models::{Assessment, ExerciseMode, Pose};

/// Classifier for one exercise
///
/// Implementations are stateless: the same pose always yields the same
/// assessment, and nothing carries over between frames.
pub trait PostureEvaluator: Send + Sync {
    /// Exercise this evaluator understands
    fn mode(&self) -> ExerciseMode;

    /// Measure and classify one pose
    fn assess(&self, pose: &Pose) -> Assessment;
}

/// Where a measured value falls relative to its thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    /// Strictly above the error threshold
    Error,
    /// Strictly below the good threshold
    Good,
    /// Neither; no feedback is emitted for this dimension
    Middle,
}

/// Classify a value; both thresholds are exclusive
pub fn classify(value: f32, good_below: f32, error_above: f32) -> Band {
    if value > error_above {
        Band::Error
    } else if value < good_below {
        Band::Good
    } else {
        Band::Middle
    }
}
