/// Frame replay input
///
/// Reads detector results as JSON lines, one `FrameInput` per line. Blank
/// lines are ignored; malformed lines are reported with their line number,
/// counted and skipped.

use anyhow::{Context, Result};
use form_coach::services::FrameInput;
use tokio::fs::File;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines};

/// Open a file, or stdin for "-"
pub async fn open_input(input: &str) -> Result<Box<dyn AsyncBufRead + Unpin + Send>> {
    if input == "-" {
        return Ok(Box::new(BufReader::new(tokio::io::stdin())));
    }

    let file = File::open(input)
        .await
        .with_context(|| format!("Failed to open input file: {}", input))?;

    Ok(Box::new(BufReader::new(file)))
}

/// Parse one line; `Ok(None)` for blank lines
pub fn parse_frame(line: &str) -> Result<Option<FrameInput>, serde_json::Error> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    serde_json::from_str(line).map(Some)
}

/// Line-oriented frame reader
pub struct FrameReader<R> {
    lines: Lines<R>,
    line_number: usize,
    frames_read: usize,
    malformed: usize,
}

impl<R: AsyncBufRead + Unpin> FrameReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_number: 0,
            frames_read: 0,
            malformed: 0,
        }
    }

    /// Next well-formed frame with its line number
    pub async fn next_frame(&mut self) -> Result<Option<(usize, FrameInput)>> {
        while let Some(line) = self
            .lines
            .next_line()
            .await
            .context("Failed to read input")?
        {
            self.line_number += 1;

            match parse_frame(&line) {
                Ok(Some(frame)) => {
                    self.frames_read += 1;
                    return Ok(Some((self.line_number, frame)));
                }
                Ok(None) => continue,
                Err(e) => {
                    self.malformed += 1;
                    tracing::warn!(line = self.line_number, error = %e, "Skipping malformed frame");
                }
            }
        }

        Ok(None)
    }

    pub fn frames_read(&self) -> usize {
        self.frames_read
    }

    pub fn malformed(&self) -> usize {
        self.malformed
    }
}
