/// Per-frame assessment models
///
/// An assessment carries the measured values next to the feedback derived
/// from them, so callers can plot or log the raw geometry.

use serde::{Deserialize, Serialize};

use super::exercise::ExerciseMode;
use super::feedback::FeedbackItem;

/// What a measurement describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeasurementKind {
    /// Mean hip-knee-ankle angle in degrees
    KneeAngle,
    /// Mean torso deviation from vertical in degrees
    BackAngle,
    /// Mean shoulder-elbow-wrist angle in degrees
    ElbowAngle,
    /// Shoulder-hip-ankle straightness (0 straight, 1 folded)
    BackAlignment,
}

impl std::fmt::Display for MeasurementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MeasurementKind::KneeAngle => write!(f, "knee_angle"),
            MeasurementKind::BackAngle => write!(f, "back_angle"),
            MeasurementKind::ElbowAngle => write!(f, "elbow_angle"),
            MeasurementKind::BackAlignment => write!(f, "back_alignment"),
        }
    }
}

/// One measured value used for classification
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JointMeasurement {
    pub kind: MeasurementKind,
    pub value: f32,
}

impl JointMeasurement {
    pub fn new(kind: MeasurementKind, value: f32) -> Self {
        Self { kind, value }
    }
}

/// Result of evaluating one pose
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub mode: ExerciseMode,
    /// Measurements that could be taken, in dimension order
    pub measurements: Vec<JointMeasurement>,
    /// Ordered feedback for the frame
    pub feedback: Vec<FeedbackItem>,
}

impl Assessment {
    pub fn new(mode: ExerciseMode) -> Self {
        Self {
            mode,
            measurements: Vec::new(),
            feedback: Vec::new(),
        }
    }

    /// Get a measurement by kind
    pub fn measurement(&self, kind: MeasurementKind) -> Option<f32> {
        self.measurements
            .iter()
            .find(|m| m.kind == kind)
            .map(|m| m.value)
    }

    pub fn has_errors(&self) -> bool {
        self.feedback.iter().any(|item| item.is_error)
    }
}
