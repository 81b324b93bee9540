use anyhow::{Context, Result};
use clap::Args;
use form_coach::services::{FrameDriver, FrameOutcome};
use form_coach::{ExerciseMode, PostureEngine};

use crate::config::{Config, OutputFormat};
use crate::input::{open_input, FrameReader};
use crate::output::{IssueCounts, Printer, ReplaySummary};

#[derive(Args)]
pub struct EvaluateCommand {
    /// Exercise to evaluate (squat, pushup)
    #[arg(short, long, default_value = "squat")]
    mode: ExerciseMode,

    /// JSON-lines frame file, or "-" for stdin
    #[arg(short, long, default_value = "-")]
    input: String,

    /// Print one JSON object per frame
    #[arg(long)]
    json: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Skip the end-of-replay summary
    #[arg(long)]
    no_summary: bool,
}

impl EvaluateCommand {
    pub async fn execute(self, config: &Config) -> Result<()> {
        let engine =
            PostureEngine::with_config(&config.engine).context("Invalid engine configuration")?;
        let mut driver = FrameDriver::new(engine, self.mode);

        let format = if self.json {
            OutputFormat::Json
        } else {
            config.output.format
        };
        let printer = Printer::new(format, config.output.color && !self.no_color);

        let mut reader = FrameReader::new(open_input(&self.input).await?);
        let mut errors = IssueCounts::default();

        tracing::debug!(mode = %self.mode, input = %self.input, "Starting replay");
        printer.print_header(self.mode);

        while let Some((_, frame)) = reader.next_frame().await? {
            match driver.process(&frame) {
                FrameOutcome::Evaluated(feedback) => {
                    errors.record(&feedback);
                    printer.print_frame(frame.timestamp_ms, &feedback)?;
                }
                FrameOutcome::Stale | FrameOutcome::NoPose => {}
            }
        }

        if config.output.show_summary && !self.no_summary {
            let summary = ReplaySummary::new(
                self.mode,
                reader.frames_read(),
                reader.malformed(),
                driver.stats(),
                errors,
            );
            printer.print_summary(&summary)?;
        }

        Ok(())
    }
}
