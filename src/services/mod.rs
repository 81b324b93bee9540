pub mod evaluator;
pub mod frame_driver;
pub mod geometry;
pub mod highlight;
pub mod posture_engine;
pub mod pushup_evaluator;
pub mod squat_evaluator;

pub use evaluator::{Band, PostureEvaluator};
pub use frame_driver::{DriverStats, FrameDriver, FrameInput, FrameOutcome};
pub use highlight::{issue_anchor, HighlightMap, POSE_CONNECTIONS};
pub use posture_engine::PostureEngine;
pub use pushup_evaluator::PushUpEvaluator;
pub use squat_evaluator::SquatEvaluator;
