/// Posture Engine
///
/// Entry point for per-frame evaluation. The engine only holds immutable
/// configuration, so one instance can be shared across threads and every
/// call is independent of the previous one.

use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::models::{Assessment, ExerciseMode, FeedbackItem, Pose};
use crate::services::evaluator::PostureEvaluator;
use crate::services::pushup_evaluator::PushUpEvaluator;
use crate::services::squat_evaluator::SquatEvaluator;

/// Posture engine
#[derive(Debug, Clone)]
pub struct PostureEngine {
    squat: SquatEvaluator,
    pushup: PushUpEvaluator,
}

impl PostureEngine {
    /// Create an engine with default thresholds
    pub fn new() -> Self {
        Self::build(&EngineConfig::default())
    }

    /// Create an engine with custom configuration
    pub fn with_config(config: &EngineConfig) -> Result<Self, EngineError> {
        config.validate()?;

        Ok(Self::build(config))
    }

    fn build(config: &EngineConfig) -> Self {
        Self {
            squat: SquatEvaluator::with_config(config),
            pushup: PushUpEvaluator::with_config(config),
        }
    }

    /// Evaluator for an exercise mode
    pub fn evaluator(&self, mode: ExerciseMode) -> &dyn PostureEvaluator {
        match mode {
            ExerciseMode::Squat => &self.squat,
            ExerciseMode::PushUp => &self.pushup,
        }
    }

    /// Measure and classify one pose
    pub fn assess(&self, pose: &Pose, mode: ExerciseMode) -> Assessment {
        self.evaluator(mode).assess(pose)
    }

    /// Ordered feedback for one pose
    pub fn evaluate(&self, pose: &Pose, mode: ExerciseMode) -> Vec<FeedbackItem> {
        self.assess(pose, mode).feedback
    }

    /// Evaluate with a mode given by name, failing on unknown modes
    pub fn evaluate_named(&self, pose: &Pose, mode: &str) -> Result<Vec<FeedbackItem>, EngineError> {
        let mode: ExerciseMode = mode.parse()?;

        Ok(self.evaluate(pose, mode))
    }
}

impl Default for PostureEngine {
    fn default() -> Self {
        Self::new()
    }
}
