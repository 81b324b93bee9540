use anyhow::{bail, Context, Result};
use clap::Args;
use form_coach::{ExerciseMode, PostureEngine};

use crate::config::{Config, OutputFormat};
use crate::input::{open_input, FrameReader};
use crate::output::Printer;

#[derive(Args)]
pub struct InspectCommand {
    /// Exercise to evaluate (squat, pushup)
    #[arg(short, long, default_value = "squat")]
    mode: ExerciseMode,

    /// JSON-lines frame file, or "-" for stdin
    #[arg(short, long, default_value = "-")]
    input: String,

    /// Zero-based index among well-formed frames
    #[arg(short, long, default_value = "0")]
    frame: usize,

    /// Print the assessment as JSON
    #[arg(long)]
    json: bool,
}

impl InspectCommand {
    pub async fn execute(self, config: &Config) -> Result<()> {
        let engine =
            PostureEngine::with_config(&config.engine).context("Invalid engine configuration")?;

        let mut reader = FrameReader::new(open_input(&self.input).await?);
        let mut index = 0;

        let frame = loop {
            match reader.next_frame().await? {
                Some((_, frame)) if index == self.frame => break frame,
                Some(_) => index += 1,
                None => bail!("Input has only {} frame(s), no frame {}", index, self.frame),
            }
        };

        let format = if self.json {
            OutputFormat::Json
        } else {
            config.output.format
        };
        let printer = Printer::new(format, config.output.color);

        let Some(pose) = frame.poses.first() else {
            if format == OutputFormat::Json {
                println!("{}", serde_json::json!({ "timestamp_ms": frame.timestamp_ms, "assessment": null }));
            } else {
                println!("Frame {} ms: no pose detected", frame.timestamp_ms);
            }
            return Ok(());
        };

        let assessment = engine.assess(pose, self.mode);
        printer.print_assessment(frame.timestamp_ms, pose, &assessment)
    }
}
