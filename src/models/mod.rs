pub mod assessment;
pub mod exercise;
pub mod feedback;
pub mod landmark;

pub use assessment::{Assessment, JointMeasurement, MeasurementKind};
pub use exercise::ExerciseMode;
pub use feedback::{FeedbackItem, JointIssue};
pub use landmark::{Landmark, Pose, PoseLandmark};
