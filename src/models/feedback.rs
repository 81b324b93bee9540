use serde::{Deserialize, Serialize};

use super::landmark::PoseLandmark;

/// Body region a feedback item concerns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JointIssue {
    Knees,
    Back,
    Elbows,
}

impl std::fmt::Display for JointIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JointIssue::Knees => write!(f, "knees"),
            JointIssue::Back => write!(f, "back"),
            JointIssue::Elbows => write!(f, "elbows"),
        }
    }
}

impl JointIssue {
    /// Landmarks a visualizer highlights for this issue
    pub fn landmarks(&self) -> &'static [PoseLandmark] {
        use PoseLandmark::*;

        match self {
            Self::Knees => &[LeftKnee, RightKnee],
            Self::Back => &[LeftShoulder, RightShoulder, LeftHip, RightHip],
            Self::Elbows => &[LeftElbow, RightElbow],
        }
    }

    /// Skeleton segments a visualizer highlights for this issue
    pub fn segments(&self) -> &'static [(PoseLandmark, PoseLandmark)] {
        use PoseLandmark::*;

        match self {
            Self::Knees => &[
                (LeftHip, LeftKnee),
                (LeftKnee, LeftAnkle),
                (RightHip, RightKnee),
                (RightKnee, RightAnkle),
            ],
            Self::Back => &[
                (LeftShoulder, LeftHip),
                (RightShoulder, RightHip),
                (LeftShoulder, RightShoulder),
                (LeftHip, RightHip),
            ],
            Self::Elbows => &[
                (LeftShoulder, LeftElbow),
                (LeftElbow, LeftWrist),
                (RightShoulder, RightElbow),
                (RightElbow, RightWrist),
            ],
        }
    }

    pub fn all() -> [JointIssue; 3] {
        [Self::Knees, Self::Back, Self::Elbows]
    }
}

/// One diagnostic message for a frame
///
/// `is_error == false` is a positive confirmation ("good depth"), not the
/// absence of an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackItem {
    pub message: String,
    pub is_error: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub joint_issue: Option<JointIssue>,
}

impl FeedbackItem {
    /// Form error tied to a body region
    pub fn error(message: impl Into<String>, joint_issue: JointIssue) -> Self {
        Self {
            message: message.into(),
            is_error: true,
            joint_issue: Some(joint_issue),
        }
    }

    /// Positive confirmation
    pub fn positive(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_error: false,
            joint_issue: None,
        }
    }
}
