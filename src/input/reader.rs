use anyhow::{Context, Result, bail};
use std::io::{self, Read};

const MAX_INPUT_SIZE: usize = 1024 * 1024; // 1MB

/// Reads a question piped on stdin for one-shot mode.
pub struct InputReader;

impl InputReader {
    /// Reads stdin to the end and trims it.
    pub fn read_question() -> Result<String> {
        let question = Self::read_limited(io::stdin().lock())?;
        let question = question.trim();

        if question.is_empty() {
            bail!(
                "No question given\n\n\
                 Pass it as an argument: stockq ask \"show me the highest closing price\"\n\
                 or pipe it on stdin."
            );
        }
        Ok(question.to_string())
    }

    fn read_limited(mut reader: impl Read) -> Result<String> {
        let mut buffer = Vec::new();
        let mut chunk = [0u8; 8192];

        loop {
            let bytes_read = reader
                .read(&mut chunk)
                .context("Failed to read from stdin")?;

            if bytes_read == 0 {
                break;
            }

            buffer.extend_from_slice(&chunk[..bytes_read]);

            if buffer.len() > MAX_INPUT_SIZE {
                bail!(
                    "Error: Input size ({:.1} MB) exceeds maximum allowed size (1 MB).",
                    buffer.len() as f64 / 1024.0 / 1024.0
                );
            }
        }

        String::from_utf8(buffer).context("Input is not valid UTF-8")
    }
}
