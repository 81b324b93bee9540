/// Squat form evaluator
///
/// Checks two independent dimensions per frame:
/// - knee bend: mean hip-knee-ankle angle of both legs
/// - back lean: mean shoulder-over-hip deviation from vertical
///
/// Each dimension emits at most one item, knee first. Values between the
/// good and error thresholds emit nothing.

use crate::config::{EngineConfig, SquatThresholds};
use crate::models::{
    Assessment, ExerciseMode, FeedbackItem, JointIssue, JointMeasurement, MeasurementKind, Pose,
    PoseLandmark,
};
use crate::services::evaluator::{classify, Band, PostureEvaluator};
use crate::services::geometry::{angle_between_points, vertical_angle};

pub const KNEE_ERROR_MESSAGE: &str = "Bend your knees more for a proper squat depth";
pub const KNEE_GOOD_MESSAGE: &str = "Good squat depth";
pub const BACK_ERROR_MESSAGE: &str = "Keep your back more upright, you're leaning too far forward";
pub const BACK_GOOD_MESSAGE: &str = "Good back position";

/// Squat evaluator
#[derive(Debug, Clone)]
pub struct SquatEvaluator {
    thresholds: SquatThresholds,
    min_visibility: f32,
}

impl SquatEvaluator {
    /// Create an evaluator with default thresholds
    pub fn new() -> Self {
        Self::with_config(&EngineConfig::default())
    }

    pub fn with_config(config: &EngineConfig) -> Self {
        Self {
            thresholds: config.squat.clone(),
            min_visibility: config.min_visibility,
        }
    }

    /// Mean knee angle of both legs, if all six leg landmarks are usable
    pub fn knee_angle(&self, pose: &Pose) -> Option<f32> {
        let get = |lm| pose.get_valid(lm, self.min_visibility);

        let left = angle_between_points(
            get(PoseLandmark::LeftHip)?,
            get(PoseLandmark::LeftKnee)?,
            get(PoseLandmark::LeftAnkle)?,
        );
        let right = angle_between_points(
            get(PoseLandmark::RightHip)?,
            get(PoseLandmark::RightKnee)?,
            get(PoseLandmark::RightAnkle)?,
        );

        Some((left + right) / 2.0)
    }

    /// Mean torso lean of both sides, if shoulders and hips are usable
    pub fn back_angle(&self, pose: &Pose) -> Option<f32> {
        let get = |lm| pose.get_valid(lm, self.min_visibility);

        let left = vertical_angle(get(PoseLandmark::LeftShoulder)?, get(PoseLandmark::LeftHip)?);
        let right = vertical_angle(
            get(PoseLandmark::RightShoulder)?,
            get(PoseLandmark::RightHip)?,
        );

        Some((left + right) / 2.0)
    }
}

impl Default for SquatEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl PostureEvaluator for SquatEvaluator {
    fn mode(&self) -> ExerciseMode {
        ExerciseMode::Squat
    }

    fn assess(&self, pose: &Pose) -> Assessment {
        let mut assessment = Assessment::new(ExerciseMode::Squat);
        let t = &self.thresholds;

        match self.knee_angle(pose) {
            Some(knee_angle) => {
                assessment
                    .measurements
                    .push(JointMeasurement::new(MeasurementKind::KneeAngle, knee_angle));

                match classify(knee_angle, t.knee_good_below, t.knee_error_above) {
                    Band::Error => assessment
                        .feedback
                        .push(FeedbackItem::error(KNEE_ERROR_MESSAGE, JointIssue::Knees)),
                    Band::Good => assessment
                        .feedback
                        .push(FeedbackItem::positive(KNEE_GOOD_MESSAGE)),
                    Band::Middle => {}
                }
            }
            None => tracing::trace!("Skipping squat knee check, leg landmarks missing"),
        }

        match self.back_angle(pose) {
            Some(back_angle) => {
                assessment
                    .measurements
                    .push(JointMeasurement::new(MeasurementKind::BackAngle, back_angle));

                match classify(back_angle, t.back_good_below, t.back_error_above) {
                    Band::Error => assessment
                        .feedback
                        .push(FeedbackItem::error(BACK_ERROR_MESSAGE, JointIssue::Back)),
                    Band::Good => assessment
                        .feedback
                        .push(FeedbackItem::positive(BACK_GOOD_MESSAGE)),
                    Band::Middle => {}
                }
            }
            None => tracing::trace!("Skipping squat back check, torso landmarks missing"),
        }

        tracing::debug!(
            knee_angle = ?assessment.measurement(MeasurementKind::KneeAngle),
            back_angle = ?assessment.measurement(MeasurementKind::BackAngle),
            items = assessment.feedback.len(),
            "Evaluated squat posture"
        );

        assessment
    }
}
