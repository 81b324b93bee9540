/// Frame Driver
///
/// Caller-side loop state for feeding detector results to the engine:
/// - runs the engine only when the frame timestamp changed
/// - never invokes the engine for frames without a detected pose
/// - replaces the current feedback wholesale on every evaluated frame
///
/// The engine itself stays stateless; all retained state lives here.

use serde::{Deserialize, Serialize};

use crate::models::{ExerciseMode, FeedbackItem, Pose};
use crate::services::posture_engine::PostureEngine;

/// One detector result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameInput {
    /// Video time of the frame in milliseconds
    pub timestamp_ms: u64,
    /// Detected bodies; only the first is evaluated
    #[serde(default)]
    pub poses: Vec<Pose>,
}

impl FrameInput {
    pub fn new(timestamp_ms: u64, poses: Vec<Pose>) -> Self {
        Self { timestamp_ms, poses }
    }
}

/// What happened to a frame
#[derive(Debug, Clone, PartialEq)]
pub enum FrameOutcome {
    /// Evaluated; carries the new feedback list
    Evaluated(Vec<FeedbackItem>),
    /// Same timestamp as the last processed frame
    Stale,
    /// Detector found nobody; previous feedback kept
    NoPose,
}

/// Frame counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DriverStats {
    pub evaluated: usize,
    pub stale: usize,
    pub no_pose: usize,
}

/// Frame driver
#[derive(Debug, Clone)]
pub struct FrameDriver {
    engine: PostureEngine,
    mode: ExerciseMode,
    last_timestamp_ms: Option<u64>,
    current_feedback: Vec<FeedbackItem>,
    stats: DriverStats,
}

impl FrameDriver {
    pub fn new(engine: PostureEngine, mode: ExerciseMode) -> Self {
        Self {
            engine,
            mode,
            last_timestamp_ms: None,
            current_feedback: Vec::new(),
            stats: DriverStats::default(),
        }
    }

    pub fn mode(&self) -> ExerciseMode {
        self.mode
    }

    /// Switch exercise; takes effect from the next frame
    pub fn set_mode(&mut self, mode: ExerciseMode) {
        if mode != self.mode {
            tracing::info!(from = %self.mode, to = %mode, "Switching exercise mode");
            self.mode = mode;
        }
    }

    /// Feedback of the most recent evaluated frame
    pub fn current_feedback(&self) -> &[FeedbackItem] {
        &self.current_feedback
    }

    pub fn stats(&self) -> DriverStats {
        self.stats
    }

    /// Process one detector result
    pub fn process(&mut self, frame: &FrameInput) -> FrameOutcome {
        if self.last_timestamp_ms == Some(frame.timestamp_ms) {
            self.stats.stale += 1;
            tracing::trace!(timestamp_ms = frame.timestamp_ms, "Skipping stale frame");
            return FrameOutcome::Stale;
        }
        self.last_timestamp_ms = Some(frame.timestamp_ms);

        let Some(pose) = frame.poses.first() else {
            self.stats.no_pose += 1;
            tracing::trace!(timestamp_ms = frame.timestamp_ms, "No pose detected");
            return FrameOutcome::NoPose;
        };

        let feedback = self.engine.evaluate(pose, self.mode);
        self.current_feedback = feedback.clone();
        self.stats.evaluated += 1;

        FrameOutcome::Evaluated(feedback)
    }

    /// Forget the last timestamp and current feedback, and zero the stats
    pub fn reset(&mut self) {
        self.last_timestamp_ms = None;
        self.current_feedback.clear();
        self.stats = DriverStats::default();
    }
}
