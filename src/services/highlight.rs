/// Highlight Map
///
/// Translates a frame's feedback into what a visualizer should mark: flagged
/// landmarks, flagged skeleton segments and one marker anchor per issue.
/// Only error items with a joint issue contribute.

use std::collections::HashSet;

use crate::models::{FeedbackItem, JointIssue, Landmark, Pose, PoseLandmark};

/// Skeleton segments drawn for a body
pub const POSE_CONNECTIONS: [(PoseLandmark, PoseLandmark); 12] = [
    // Torso
    (PoseLandmark::LeftShoulder, PoseLandmark::RightShoulder),
    (PoseLandmark::RightShoulder, PoseLandmark::RightHip),
    (PoseLandmark::RightHip, PoseLandmark::LeftHip),
    (PoseLandmark::LeftHip, PoseLandmark::LeftShoulder),
    // Right arm
    (PoseLandmark::RightShoulder, PoseLandmark::RightElbow),
    (PoseLandmark::RightElbow, PoseLandmark::RightWrist),
    // Left arm
    (PoseLandmark::LeftShoulder, PoseLandmark::LeftElbow),
    (PoseLandmark::LeftElbow, PoseLandmark::LeftWrist),
    // Right leg
    (PoseLandmark::RightHip, PoseLandmark::RightKnee),
    (PoseLandmark::RightKnee, PoseLandmark::RightAnkle),
    // Left leg
    (PoseLandmark::LeftHip, PoseLandmark::LeftKnee),
    (PoseLandmark::LeftKnee, PoseLandmark::LeftAnkle),
];

/// Issues flagged for one frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighlightMap {
    issues: HashSet<JointIssue>,
}

impl HighlightMap {
    pub fn from_feedback(feedback: &[FeedbackItem]) -> Self {
        let issues = feedback
            .iter()
            .filter(|item| item.is_error)
            .filter_map(|item| item.joint_issue)
            .collect();

        Self { issues }
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn has_issue(&self, issue: JointIssue) -> bool {
        self.issues.contains(&issue)
    }

    /// Flagged issues in a stable order
    pub fn issues(&self) -> Vec<JointIssue> {
        JointIssue::all()
            .into_iter()
            .filter(|issue| self.issues.contains(issue))
            .collect()
    }

    pub fn is_landmark_flagged(&self, landmark: PoseLandmark) -> bool {
        self.issues
            .iter()
            .any(|issue| issue.landmarks().contains(&landmark))
    }

    /// Check a segment in either direction
    pub fn is_segment_flagged(&self, a: PoseLandmark, b: PoseLandmark) -> bool {
        self.issues.iter().any(|issue| {
            issue
                .segments()
                .iter()
                .any(|&(x, y)| (x == a && y == b) || (x == b && y == a))
        })
    }

    /// Flagged landmarks in detector order
    pub fn flagged_landmarks(&self) -> Vec<PoseLandmark> {
        PoseLandmark::all()
            .iter()
            .copied()
            .filter(|&lm| self.is_landmark_flagged(lm))
            .collect()
    }

    /// Drawn skeleton segments that belong to a flagged issue
    pub fn flagged_connections(&self) -> Vec<(PoseLandmark, PoseLandmark)> {
        POSE_CONNECTIONS
            .iter()
            .copied()
            .filter(|&(a, b)| self.is_segment_flagged(a, b))
            .collect()
    }
}

/// Marker position for an issue: the mean of the issue's landmarks
///
/// Knees and elbows anchor between the pair, back anchors at the centroid of
/// shoulders and hips. `None` if any of those landmarks is missing.
pub fn issue_anchor(pose: &Pose, issue: JointIssue) -> Option<Landmark> {
    let points = issue
        .landmarks()
        .iter()
        .map(|&lm| pose.get(lm).filter(|p| p.is_finite()))
        .collect::<Option<Vec<_>>>()?;

    let n = points.len() as f32;
    let (x, y, z) = points.iter().fold((0.0, 0.0, 0.0), |(x, y, z), p| {
        (x + p.x, y + p.y, z + p.z)
    });

    Some(Landmark::new(x / n, y / n, z / n))
}
