use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::EngineError;

/// Exercise types the posture engine can evaluate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseMode {
    Squat,
    #[serde(rename = "pushup", alias = "push-up")]
    PushUp,
}

impl std::fmt::Display for ExerciseMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExerciseMode::Squat => write!(f, "squat"),
            ExerciseMode::PushUp => write!(f, "pushup"),
        }
    }
}

impl FromStr for ExerciseMode {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "squat" | "squats" => Ok(ExerciseMode::Squat),
            "pushup" | "push-up" | "push_up" | "pushups" | "push-ups" => Ok(ExerciseMode::PushUp),
            _ => Err(EngineError::UnknownExerciseMode(s.to_string())),
        }
    }
}

impl ExerciseMode {
    pub fn all() -> [ExerciseMode; 2] {
        [Self::Squat, Self::PushUp]
    }

    /// Short coaching cue shown next to the feedback list
    pub fn cue(&self) -> &'static str {
        match self {
            Self::Squat => "Perform slow, controlled squats with proper form.",
            Self::PushUp => "Perform slow, controlled push-ups with proper form.",
        }
    }
}
