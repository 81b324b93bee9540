use anyhow::Result;
use colored::Colorize;
use form_coach::models::{Assessment, ExerciseMode, FeedbackItem, JointIssue};
use form_coach::services::{issue_anchor, DriverStats, HighlightMap};
use form_coach::Pose;
use serde::Serialize;

use crate::config::OutputFormat;

pub const EMPTY_FEEDBACK: &str = "Stand in position to begin evaluation.";

/// Error items per joint issue over a replay
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IssueCounts {
    pub knees: usize,
    pub back: usize,
    pub elbows: usize,
}

impl IssueCounts {
    pub fn record(&mut self, feedback: &[FeedbackItem]) {
        for issue in feedback
            .iter()
            .filter(|item| item.is_error)
            .filter_map(|item| item.joint_issue)
        {
            match issue {
                JointIssue::Knees => self.knees += 1,
                JointIssue::Back => self.back += 1,
                JointIssue::Elbows => self.elbows += 1,
            }
        }
    }

    pub fn get(&self, issue: JointIssue) -> usize {
        match issue {
            JointIssue::Knees => self.knees,
            JointIssue::Back => self.back,
            JointIssue::Elbows => self.elbows,
        }
    }
}

/// End-of-replay totals
#[derive(Debug, Clone, Default, Serialize)]
pub struct ReplaySummary {
    pub mode: String,
    pub frames_read: usize,
    pub evaluated: usize,
    pub stale: usize,
    pub no_pose: usize,
    pub malformed: usize,
    pub errors: IssueCounts,
}

impl ReplaySummary {
    pub fn new(mode: ExerciseMode, frames_read: usize, malformed: usize, stats: DriverStats, errors: IssueCounts) -> Self {
        Self {
            mode: mode.to_string(),
            frames_read,
            evaluated: stats.evaluated,
            stale: stats.stale,
            no_pose: stats.no_pose,
            malformed,
            errors,
        }
    }
}

#[derive(Serialize)]
struct FrameLine<'a> {
    timestamp_ms: u64,
    feedback: &'a [FeedbackItem],
}

#[derive(Serialize)]
struct SummaryLine<'a> {
    summary: &'a ReplaySummary,
}

/// Terminal printer for evaluation results
pub struct Printer {
    format: OutputFormat,
}

impl Printer {
    pub fn new(format: OutputFormat, color: bool) -> Self {
        if !color {
            colored::control::set_override(false);
        }

        Self { format }
    }

    pub fn print_header(&self, mode: ExerciseMode) {
        if self.format == OutputFormat::Text {
            println!("{} {}", "Exercise:".bold(), mode);
            println!("{}", mode.cue().dimmed());
            println!();
        }
    }

    pub fn print_frame(&self, timestamp_ms: u64, feedback: &[FeedbackItem]) -> Result<()> {
        match self.format {
            OutputFormat::Json => {
                let line = serde_json::to_string(&FrameLine {
                    timestamp_ms,
                    feedback,
                })?;
                println!("{}", line);
            }
            OutputFormat::Text => {
                println!("{}", format!("[{} ms]", timestamp_ms).cyan());
                if feedback.is_empty() {
                    println!("  {}", EMPTY_FEEDBACK.dimmed());
                }
                for item in feedback {
                    println!("  {}", format_item(item));
                }
            }
        }

        Ok(())
    }

    pub fn print_summary(&self, summary: &ReplaySummary) -> Result<()> {
        match self.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string(&SummaryLine { summary })?);
            }
            OutputFormat::Text => {
                println!();
                println!("{}", "Summary".bold());
                println!("────────────────────────────────");
                println!("Frames read:  {}", summary.frames_read);
                println!("Evaluated:    {}", summary.evaluated);
                println!("Stale:        {}", summary.stale);
                println!("No pose:      {}", summary.no_pose);
                println!("Malformed:    {}", summary.malformed);
                println!();
                println!("Errors by joint:");
                for issue in JointIssue::all() {
                    println!("  {:<8} {}", issue.to_string(), summary.errors.get(issue));
                }
            }
        }

        Ok(())
    }

    /// Measurements, feedback and highlight markers for one frame
    pub fn print_assessment(&self, timestamp_ms: u64, pose: &Pose, assessment: &Assessment) -> Result<()> {
        let highlights = HighlightMap::from_feedback(&assessment.feedback);

        if self.format == OutputFormat::Json {
            let anchors: Vec<_> = highlights
                .issues()
                .into_iter()
                .map(|issue| serde_json::json!({ "issue": issue, "anchor": issue_anchor(pose, issue) }))
                .collect();
            let flagged: Vec<&str> = highlights
                .flagged_landmarks()
                .iter()
                .map(|lm| lm.name())
                .collect();

            let value = serde_json::json!({
                "timestamp_ms": timestamp_ms,
                "assessment": assessment,
                "has_errors": assessment.has_errors(),
                "flagged_landmarks": flagged,
                "anchors": anchors,
            });
            println!("{}", serde_json::to_string(&value)?);
            return Ok(());
        }

        println!("{} {} ms ({})", "Frame".bold(), timestamp_ms, assessment.mode);
        println!("Landmarks present: {}", pose.present_count());
        println!();

        println!("{}", "Measurements".bold());
        if assessment.measurements.is_empty() {
            println!("  {}", "none (required landmarks missing)".dimmed());
        }
        for m in &assessment.measurements {
            println!("  {:<16} {:.3}", m.kind.to_string(), m.value);
        }
        println!();

        println!("{}", "Feedback".bold());
        if assessment.feedback.is_empty() {
            println!("  {}", EMPTY_FEEDBACK.dimmed());
        }
        for item in &assessment.feedback {
            println!("  {}", format_item(item));
        }
        println!();

        if assessment.has_errors() {
            println!("{}", "Form: needs correction".red());
        } else {
            println!("{}", "Form: ok".green());
        }

        if !highlights.is_empty() {
            println!();
            println!("{}", "Highlights".bold());
            for issue in highlights.issues() {
                let names: Vec<&str> = issue.landmarks().iter().map(|lm| lm.name()).collect();
                match issue_anchor(pose, issue) {
                    Some(anchor) => println!(
                        "  {:<8} {} @ ({:.3}, {:.3})",
                        issue.to_string(),
                        names.join(", "),
                        anchor.x,
                        anchor.y
                    ),
                    None => println!("  {:<8} {}", issue.to_string(), names.join(", ")),
                }
            }
        }

        Ok(())
    }
}

fn format_item(item: &FeedbackItem) -> String {
    if item.is_error {
        format!("{} {}", "✗".red().bold(), item.message.red())
    } else {
        format!("{} {}", "✓".green().bold(), item.message.green())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_counts_only_count_errors() {
        let mut counts = IssueCounts::default();
        counts.record(&[
            FeedbackItem::error("bend", JointIssue::Knees),
            FeedbackItem::positive("Good back position"),
            FeedbackItem::error("lean", JointIssue::Back),
        ]);
        counts.record(&[FeedbackItem::error("bend", JointIssue::Knees)]);

        assert_eq!(counts.get(JointIssue::Knees), 2);
        assert_eq!(counts.get(JointIssue::Back), 1);
        assert_eq!(counts.get(JointIssue::Elbows), 0);
    }

    #[test]
    fn test_format_item_keeps_message() {
        colored::control::set_override(false);
        let line = format_item(&FeedbackItem::error("Keep your back straight", JointIssue::Back));
        assert_eq!(line, "✗ Keep your back straight");
    }

    #[test]
    fn test_summary_json_shape() {
        let summary = ReplaySummary::new(
            ExerciseMode::PushUp,
            4,
            1,
            DriverStats {
                evaluated: 2,
                stale: 1,
                no_pose: 1,
            },
            IssueCounts {
                knees: 0,
                back: 2,
                elbows: 1,
            },
        );
        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(value["mode"], "pushup");
        assert_eq!(value["errors"]["back"], 2);
        assert_eq!(value["malformed"], 1);
    }
}
