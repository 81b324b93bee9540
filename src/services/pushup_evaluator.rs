/// Push-up form evaluator
///
/// Elbow depth uses the same middle-band policy as the squat checks, but the
/// back alignment check has no middle band: whenever it can be measured it
/// reports either an error or a positive confirmation.

use crate::config::{EngineConfig, PushUpThresholds};
use crate::models::{
    Assessment, ExerciseMode, FeedbackItem, JointIssue, JointMeasurement, MeasurementKind, Pose,
    PoseLandmark,
};
use crate::services::evaluator::{classify, Band, PostureEvaluator};
use crate::services::geometry::{alignment_deviation, angle_between_points, midpoint};

pub const ELBOW_ERROR_MESSAGE: &str =
    "Lower your chest more, your elbows should bend to about 90 degrees";
pub const ELBOW_GOOD_MESSAGE: &str = "Good depth on your push-up";
pub const BACK_ERROR_MESSAGE: &str = "Keep your back straight, avoid sagging your hips";
pub const BACK_GOOD_MESSAGE: &str = "Good back alignment";

/// Push-up evaluator
#[derive(Debug, Clone)]
pub struct PushUpEvaluator {
    thresholds: PushUpThresholds,
    min_visibility: f32,
}

impl PushUpEvaluator {
    /// Create an evaluator with default thresholds
    pub fn new() -> Self {
        Self::with_config(&EngineConfig::default())
    }

    pub fn with_config(config: &EngineConfig) -> Self {
        Self {
            thresholds: config.pushup.clone(),
            min_visibility: config.min_visibility,
        }
    }

    /// Mean elbow angle of both arms
    pub fn elbow_angle(&self, pose: &Pose) -> Option<f32> {
        let get = |lm| pose.get_valid(lm, self.min_visibility);

        let left = angle_between_points(
            get(PoseLandmark::LeftShoulder)?,
            get(PoseLandmark::LeftElbow)?,
            get(PoseLandmark::LeftWrist)?,
        );
        let right = angle_between_points(
            get(PoseLandmark::RightShoulder)?,
            get(PoseLandmark::RightElbow)?,
            get(PoseLandmark::RightWrist)?,
        );

        Some((left + right) / 2.0)
    }

    /// Straightness of the shoulders-hips-ankles chain, using the midpoint of
    /// each left/right pair
    pub fn back_alignment(&self, pose: &Pose) -> Option<f32> {
        let get = |lm| pose.get_valid(lm, self.min_visibility);

        let shoulders = midpoint(
            get(PoseLandmark::LeftShoulder)?,
            get(PoseLandmark::RightShoulder)?,
        );
        let hips = midpoint(get(PoseLandmark::LeftHip)?, get(PoseLandmark::RightHip)?);
        let ankles = midpoint(
            get(PoseLandmark::LeftAnkle)?,
            get(PoseLandmark::RightAnkle)?,
        );

        alignment_deviation(shoulders, hips, ankles)
    }
}

impl Default for PushUpEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl PostureEvaluator for PushUpEvaluator {
    fn mode(&self) -> ExerciseMode {
        ExerciseMode::PushUp
    }

    fn assess(&self, pose: &Pose) -> Assessment {
        let mut assessment = Assessment::new(ExerciseMode::PushUp);
        let t = &self.thresholds;

        match self.elbow_angle(pose) {
            Some(elbow_angle) => {
                assessment
                    .measurements
                    .push(JointMeasurement::new(MeasurementKind::ElbowAngle, elbow_angle));

                match classify(elbow_angle, t.elbow_good_below, t.elbow_error_above) {
                    Band::Error => assessment
                        .feedback
                        .push(FeedbackItem::error(ELBOW_ERROR_MESSAGE, JointIssue::Elbows)),
                    Band::Good => assessment
                        .feedback
                        .push(FeedbackItem::positive(ELBOW_GOOD_MESSAGE)),
                    Band::Middle => {}
                }
            }
            None => tracing::trace!("Skipping push-up elbow check, arm landmarks missing"),
        }

        match self.back_alignment(pose) {
            Some(deviation) => {
                assessment
                    .measurements
                    .push(JointMeasurement::new(MeasurementKind::BackAlignment, deviation));

                if deviation > t.back_deviation_error_above {
                    assessment
                        .feedback
                        .push(FeedbackItem::error(BACK_ERROR_MESSAGE, JointIssue::Back));
                } else {
                    assessment
                        .feedback
                        .push(FeedbackItem::positive(BACK_GOOD_MESSAGE));
                }
            }
            None => tracing::trace!(
                "Skipping push-up back check, landmarks missing or body points coincide"
            ),
        }

        tracing::debug!(
            elbow_angle = ?assessment.measurement(MeasurementKind::ElbowAngle),
            back_alignment = ?assessment.measurement(MeasurementKind::BackAlignment),
            items = assessment.feedback.len(),
            "Evaluated push-up posture"
        );

        assessment
    }
}
