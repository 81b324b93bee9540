/// Body landmark models
///
/// This module provides the per-frame landmark representation produced by an
/// external 33-point pose detector, and the named index table shared by the
/// evaluators and any downstream visualizer.

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Single body landmark in normalized frame space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    /// X coordinate (normalized 0-1 of frame width)
    pub x: f32,
    /// Y coordinate (normalized 0-1 of frame height, growing downward)
    pub y: f32,
    /// Relative depth
    #[serde(default)]
    pub z: f32,
    /// Detection visibility (0-1), when the detector reports one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<f32>,
}

impl Landmark {
    /// Create a landmark without a visibility score
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self {
            x,
            y,
            z,
            visibility: None,
        }
    }

    /// Attach a visibility score
    pub fn with_visibility(mut self, visibility: f32) -> Self {
        self.visibility = Some(visibility);
        self
    }

    /// All coordinates are finite numbers
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Check if the landmark is usable at the given visibility threshold.
    /// A landmark without a visibility score counts as visible.
    pub fn is_valid(&self, min_visibility: f32) -> bool {
        self.is_finite() && self.visibility.map_or(true, |v| v >= min_visibility)
    }
}

/// MediaPipe pose landmark indices (33-point topology)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(usize)]
pub enum PoseLandmark {
    Nose = 0,
    LeftEyeInner = 1,
    LeftEye = 2,
    LeftEyeOuter = 3,
    RightEyeInner = 4,
    RightEye = 5,
    RightEyeOuter = 6,
    LeftEar = 7,
    RightEar = 8,
    MouthLeft = 9,
    MouthRight = 10,
    LeftShoulder = 11,
    RightShoulder = 12,
    LeftElbow = 13,
    RightElbow = 14,
    LeftWrist = 15,
    RightWrist = 16,
    LeftPinky = 17,
    RightPinky = 18,
    LeftIndex = 19,
    RightIndex = 20,
    LeftThumb = 21,
    RightThumb = 22,
    LeftHip = 23,
    RightHip = 24,
    LeftKnee = 25,
    RightKnee = 26,
    LeftAnkle = 27,
    RightAnkle = 28,
    LeftHeel = 29,
    RightHeel = 30,
    LeftFootIndex = 31,
    RightFootIndex = 32,
}

impl PoseLandmark {
    pub const COUNT: usize = 33;

    const ALL: [PoseLandmark; PoseLandmark::COUNT] = [
        Self::Nose,
        Self::LeftEyeInner,
        Self::LeftEye,
        Self::LeftEyeOuter,
        Self::RightEyeInner,
        Self::RightEye,
        Self::RightEyeOuter,
        Self::LeftEar,
        Self::RightEar,
        Self::MouthLeft,
        Self::MouthRight,
        Self::LeftShoulder,
        Self::RightShoulder,
        Self::LeftElbow,
        Self::RightElbow,
        Self::LeftWrist,
        Self::RightWrist,
        Self::LeftPinky,
        Self::RightPinky,
        Self::LeftIndex,
        Self::RightIndex,
        Self::LeftThumb,
        Self::RightThumb,
        Self::LeftHip,
        Self::RightHip,
        Self::LeftKnee,
        Self::RightKnee,
        Self::LeftAnkle,
        Self::RightAnkle,
        Self::LeftHeel,
        Self::RightHeel,
        Self::LeftFootIndex,
        Self::RightFootIndex,
    ];

    /// Position in the detector's landmark sequence
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Get landmark name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Nose => "nose",
            Self::LeftEyeInner => "left_eye_inner",
            Self::LeftEye => "left_eye",
            Self::LeftEyeOuter => "left_eye_outer",
            Self::RightEyeInner => "right_eye_inner",
            Self::RightEye => "right_eye",
            Self::RightEyeOuter => "right_eye_outer",
            Self::LeftEar => "left_ear",
            Self::RightEar => "right_ear",
            Self::MouthLeft => "mouth_left",
            Self::MouthRight => "mouth_right",
            Self::LeftShoulder => "left_shoulder",
            Self::RightShoulder => "right_shoulder",
            Self::LeftElbow => "left_elbow",
            Self::RightElbow => "right_elbow",
            Self::LeftWrist => "left_wrist",
            Self::RightWrist => "right_wrist",
            Self::LeftPinky => "left_pinky",
            Self::RightPinky => "right_pinky",
            Self::LeftIndex => "left_index",
            Self::RightIndex => "right_index",
            Self::LeftThumb => "left_thumb",
            Self::RightThumb => "right_thumb",
            Self::LeftHip => "left_hip",
            Self::RightHip => "right_hip",
            Self::LeftKnee => "left_knee",
            Self::RightKnee => "right_knee",
            Self::LeftAnkle => "left_ankle",
            Self::RightAnkle => "right_ankle",
            Self::LeftHeel => "left_heel",
            Self::RightHeel => "right_heel",
            Self::LeftFootIndex => "left_foot_index",
            Self::RightFootIndex => "right_foot_index",
        }
    }

    /// Get all landmark indices in detector order
    pub fn all() -> &'static [PoseLandmark] {
        &Self::ALL
    }
}

/// All landmarks of one detected body in one frame
///
/// Slots may be empty: detectors drop landmarks, and a short sequence is
/// treated as missing its tail.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Option<Landmark>>", into = "Vec<Option<Landmark>>")]
pub struct Pose {
    landmarks: Vec<Option<Landmark>>,
}

impl Pose {
    /// Build a pose from a detector sequence of at most 33 slots
    pub fn new(landmarks: Vec<Option<Landmark>>) -> Result<Self, EngineError> {
        if landmarks.len() > PoseLandmark::COUNT {
            return Err(EngineError::InvalidPose {
                count: landmarks.len(),
                max: PoseLandmark::COUNT,
            });
        }

        Ok(Self { landmarks })
    }

    /// Build a pose where every slot is present
    pub fn from_landmarks(landmarks: Vec<Landmark>) -> Result<Self, EngineError> {
        Self::new(landmarks.into_iter().map(Some).collect())
    }

    /// Get landmark by name, if the detector reported it
    pub fn get(&self, landmark: PoseLandmark) -> Option<&Landmark> {
        self.landmarks.get(landmark.index())?.as_ref()
    }

    /// Get landmark by name if it is finite and visible enough to measure
    pub fn get_valid(&self, landmark: PoseLandmark, min_visibility: f32) -> Option<&Landmark> {
        self.get(landmark).filter(|lm| lm.is_valid(min_visibility))
    }

    /// Replace or clear one slot, growing the sequence if needed
    pub fn set(&mut self, landmark: PoseLandmark, value: Option<Landmark>) {
        let index = landmark.index();
        if self.landmarks.len() <= index {
            self.landmarks.resize(index + 1, None);
        }
        self.landmarks[index] = value;
    }

    /// Number of slots reported by the detector
    pub fn len(&self) -> usize {
        self.landmarks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.landmarks.is_empty()
    }

    /// Number of slots holding a landmark
    pub fn present_count(&self) -> usize {
        self.landmarks.iter().filter(|lm| lm.is_some()).count()
    }

    pub fn landmarks(&self) -> &[Option<Landmark>] {
        &self.landmarks
    }
}

impl TryFrom<Vec<Option<Landmark>>> for Pose {
    type Error = EngineError;

    fn try_from(landmarks: Vec<Option<Landmark>>) -> Result<Self, Self::Error> {
        Self::new(landmarks)
    }
}

impl From<Pose> for Vec<Option<Landmark>> {
    fn from(pose: Pose) -> Self {
        pose.landmarks
    }
}
