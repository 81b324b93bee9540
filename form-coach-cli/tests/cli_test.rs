use assert_cmd::Command;
use form_coach::services::FrameInput;
use form_coach::{Landmark, Pose, PoseLandmark};
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Upright stance: straight legs, vertical torso
fn standing_pose() -> Pose {
    let mut pose = Pose::default();
    for (x, shoulder, hip, knee, ankle) in [
        (
            0.45,
            PoseLandmark::LeftShoulder,
            PoseLandmark::LeftHip,
            PoseLandmark::LeftKnee,
            PoseLandmark::LeftAnkle,
        ),
        (
            0.55,
            PoseLandmark::RightShoulder,
            PoseLandmark::RightHip,
            PoseLandmark::RightKnee,
            PoseLandmark::RightAnkle,
        ),
    ] {
        pose.set(shoulder, Some(Landmark::new(x, 0.25, 0.0)));
        pose.set(hip, Some(Landmark::new(x, 0.5, 0.0)));
        pose.set(knee, Some(Landmark::new(x, 0.7, 0.0)));
        pose.set(ankle, Some(Landmark::new(x, 0.9, 0.0)));
    }
    pose
}

fn frame_line(timestamp_ms: u64, poses: Vec<Pose>) -> String {
    serde_json::to_string(&FrameInput::new(timestamp_ms, poses)).unwrap()
}

struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    fn write_frames(&self, lines: &[String]) -> String {
        let path = self.dir.path().join("frames.jsonl");
        fs::write(&path, lines.join("\n")).unwrap();
        path.to_string_lossy().into_owned()
    }

    fn config_path(&self) -> std::path::PathBuf {
        self.dir.path().join("config.toml")
    }

    fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("form-coach").unwrap();
        cmd.env("FORM_COACH_CONFIG", self.config_path());
        cmd.env_remove("RUST_LOG");
        cmd
    }
}

#[test]
fn test_help_command() {
    let mut cmd = Command::cargo_bin("form-coach").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("exercise form feedback"))
        .stdout(predicate::str::contains("evaluate"))
        .stdout(predicate::str::contains("inspect"));
}

#[test]
fn test_version_command() {
    let mut cmd = Command::cargo_bin("form-coach").unwrap();
    cmd.arg("--version");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("0.1.0"));
}

#[test]
fn test_completions_command() {
    let mut cmd = Command::cargo_bin("form-coach").unwrap();
    cmd.arg("completions").arg("bash");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("complete -F _form__coach"));
}

#[test]
fn test_evaluate_text_output() {
    let fixture = Fixture::new();
    let input = fixture.write_frames(&[
        frame_line(0, vec![standing_pose()]),
        frame_line(0, vec![standing_pose()]),
        frame_line(33, vec![]),
        frame_line(66, vec![Pose::default()]),
    ]);

    fixture
        .command()
        .args(["evaluate", "--mode", "squat", "--no-color", "--input", &input])
        .assert()
        .success()
        .stdout(predicate::str::contains("✗ Bend your knees more for a proper squat depth"))
        .stdout(predicate::str::contains("✓ Good back position"))
        .stdout(predicate::str::contains("Stand in position to begin evaluation."))
        .stdout(predicate::str::contains("Frames read:  4"))
        .stdout(predicate::str::contains("Evaluated:    2"))
        .stdout(predicate::str::contains("Stale:        1"))
        .stdout(predicate::str::contains("No pose:      1"));
}

#[test]
fn test_evaluate_json_output() {
    let fixture = Fixture::new();
    let input = fixture.write_frames(&[frame_line(10, vec![standing_pose()])]);

    let output = fixture
        .command()
        .args(["evaluate", "--json", "--input", &input])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<serde_json::Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["timestamp_ms"], 10);
    assert_eq!(lines[0]["feedback"][0]["isError"], true);
    assert_eq!(lines[0]["feedback"][0]["jointIssue"], "knees");
    assert_eq!(lines[0]["feedback"][1]["message"], "Good back position");
    assert_eq!(lines[1]["summary"]["errors"]["knees"], 1);
}

#[test]
fn test_evaluate_counts_malformed_lines() {
    let fixture = Fixture::new();
    let input = fixture.write_frames(&[
        "{ not a frame".to_string(),
        frame_line(5, vec![standing_pose()]),
    ]);

    fixture
        .command()
        .args(["evaluate", "--no-color", "--input", &input])
        .assert()
        .success()
        .stdout(predicate::str::contains("Malformed:    1"))
        .stdout(predicate::str::contains("Evaluated:    1"))
        .stderr(predicate::str::contains("Skipping malformed frame"));
}

#[test]
fn test_evaluate_reads_stdin() {
    let fixture = Fixture::new();

    fixture
        .command()
        .args(["evaluate", "--mode", "pushup", "--json", "--no-summary"])
        .write_stdin(frame_line(1, vec![Pose::default()]))
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"{"timestamp_ms":1,"feedback":[]}"#));
}

#[test]
fn test_unknown_mode_fails() {
    let fixture = Fixture::new();

    fixture
        .command()
        .args(["evaluate", "--mode", "plank"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("plank"));
}

#[test]
fn test_missing_input_file_fails() {
    let fixture = Fixture::new();
    let missing = fixture.dir.path().join("absent.jsonl");

    fixture
        .command()
        .args(["evaluate", "--input"])
        .arg(&missing)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open input file"));
}

#[test]
fn test_inspect_prints_measurements() {
    let fixture = Fixture::new();
    let input = fixture.write_frames(&[
        frame_line(0, vec![]),
        frame_line(40, vec![standing_pose()]),
    ]);

    fixture
        .command()
        .args(["inspect", "--frame", "1", "--input", &input])
        .assert()
        .success()
        .stdout(predicate::str::contains("knee_angle"))
        .stdout(predicate::str::contains("back_angle"))
        .stdout(predicate::str::contains("left_knee, right_knee"))
        .stdout(predicate::str::contains("Form: needs correction"));
}

#[test]
fn test_inspect_json_reports_errors() {
    let fixture = Fixture::new();
    let input = fixture.write_frames(&[
        frame_line(0, vec![standing_pose()]),
        frame_line(33, vec![Pose::default()]),
    ]);

    for (frame, expected) in [("0", true), ("1", false)] {
        let output = fixture
            .command()
            .args(["inspect", "--json", "--frame", frame, "--input", &input])
            .output()
            .unwrap();
        assert!(output.status.success());

        let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(value["has_errors"], expected);
    }
}

#[test]
fn test_inspect_frame_out_of_range() {
    let fixture = Fixture::new();
    let input = fixture.write_frames(&[frame_line(0, vec![])]);

    fixture
        .command()
        .args(["inspect", "--frame", "3", "--input", &input])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no frame 3"));
}

#[test]
fn test_config_init_and_show() {
    let fixture = Fixture::new();

    fixture
        .command()
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Configuration initialized at:"));
    assert!(fixture.config_path().exists());

    fixture
        .command()
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Use --force to overwrite"));

    fixture
        .command()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("knee_error_above = 150.0"));
}

#[test]
fn test_config_thresholds_change_feedback() {
    let fixture = Fixture::new();
    fs::write(
        fixture.config_path(),
        "[engine.squat]\nknee_error_above = 181.0\nknee_good_below = 80.0\n",
    )
    .unwrap();
    let input = fixture.write_frames(&[frame_line(0, vec![standing_pose()])]);

    fixture
        .command()
        .args(["evaluate", "--no-color", "--no-summary", "--input", &input])
        .assert()
        .success()
        .stdout(predicate::str::contains("Good back position"))
        .stdout(predicate::str::contains("Bend your knees").not());
}
