// Library exports for the form coach posture engine
// Binaries and integration tests go through these modules

pub mod config;
pub mod error;
pub mod models;
pub mod services;

pub use config::EngineConfig;
pub use error::EngineError;
pub use models::{ExerciseMode, FeedbackItem, JointIssue, Landmark, Pose, PoseLandmark};
pub use services::{FrameDriver, PostureEngine};
