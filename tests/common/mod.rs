// Shared fixtures for the posture engine test suite
#![allow(dead_code)]

use form_coach::models::{Landmark, Pose, PoseLandmark};
use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize test logging
pub fn init_test_logging() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter("debug")
            .with_test_writer()
            .init();
    });
}

/// Point at `length` from `origin`, rotated `degrees` clockwise on screen
/// from straight up
fn offset(origin: (f32, f32), degrees: f32, length: f32) -> (f32, f32) {
    let radians = degrees.to_radians();
    (
        origin.0 + length * radians.sin(),
        origin.1 - length * radians.cos(),
    )
}

fn set(pose: &mut Pose, landmark: PoseLandmark, point: (f32, f32)) {
    pose.set(landmark, Some(Landmark::new(point.0, point.1, 0.0)));
}

/// Pose generators for exercise scenarios
pub struct PoseFixtures;

impl PoseFixtures {
    /// Side-on squat with the given knee angle and torso lean (degrees),
    /// identical on both sides
    pub fn squat(knee_angle: f32, back_angle: f32) -> Pose {
        let mut pose = Pose::default();

        for (x, hip, knee, ankle, shoulder) in [
            (
                0.45,
                PoseLandmark::LeftHip,
                PoseLandmark::LeftKnee,
                PoseLandmark::LeftAnkle,
                PoseLandmark::LeftShoulder,
            ),
            (
                0.55,
                PoseLandmark::RightHip,
                PoseLandmark::RightKnee,
                PoseLandmark::RightAnkle,
                PoseLandmark::RightShoulder,
            ),
        ] {
            let hip_point = (x, 0.5);
            let knee_point = (x, 0.7);

            set(&mut pose, hip, hip_point);
            set(&mut pose, knee, knee_point);
            // The thigh points straight up from the knee, so the shin
            // direction alone sets the knee angle
            set(&mut pose, ankle, offset(knee_point, knee_angle, 0.2));
            set(&mut pose, shoulder, offset(hip_point, back_angle, 0.25));
        }

        pose
    }

    /// Push-up with the given elbow angle (degrees) and shoulder-hip-ankle
    /// alignment deviation in [0, 1]
    pub fn pushup(elbow_angle: f32, deviation: f32) -> Pose {
        let mut pose = Pose::default();

        let cos_bend = 1.0 - 2.0 * deviation;
        let sin_bend = (1.0 - cos_bend * cos_bend).max(0.0).sqrt();
        let shoulders = (0.2, 0.5);
        let hips = (0.5, 0.5);
        let ankles = (hips.0 + 0.3 * cos_bend, hips.1 + 0.3 * sin_bend);

        for (dy, shoulder, elbow, wrist, hip, ankle) in [
            (
                -0.02,
                PoseLandmark::LeftShoulder,
                PoseLandmark::LeftElbow,
                PoseLandmark::LeftWrist,
                PoseLandmark::LeftHip,
                PoseLandmark::LeftAnkle,
            ),
            (
                0.02,
                PoseLandmark::RightShoulder,
                PoseLandmark::RightElbow,
                PoseLandmark::RightWrist,
                PoseLandmark::RightHip,
                PoseLandmark::RightAnkle,
            ),
        ] {
            let shoulder_point = (shoulders.0, shoulders.1 + dy);
            let elbow_point = (shoulder_point.0, shoulder_point.1 + 0.12);

            set(&mut pose, shoulder, shoulder_point);
            set(&mut pose, elbow, elbow_point);
            set(&mut pose, wrist, offset(elbow_point, elbow_angle, 0.12));
            set(&mut pose, hip, (hips.0, hips.1 + dy));
            set(&mut pose, ankle, (ankles.0, ankles.1 + dy));
        }

        pose
    }

    /// Full 33-landmark pose with every slot filled, starting from a squat
    pub fn complete_squat(knee_angle: f32, back_angle: f32) -> Pose {
        let mut pose = Self::squat(knee_angle, back_angle);
        for &lm in PoseLandmark::all() {
            if pose.get(lm).is_none() {
                set(&mut pose, lm, (0.5, 0.2));
            }
        }
        pose
    }
}
