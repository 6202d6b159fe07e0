use std::fs;
use std::path::Path;

use crate::error::ModalizerError;

/// Read a UTF-8 transcript and split it into lines.
pub fn read_transcript(path: &Path) -> Result<Vec<String>, ModalizerError> {
    let content = fs::read_to_string(path).map_err(|source| ModalizerError::ReadTranscript {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(split_lines(&content))
}

/// One entry per line, terminators (`\n` or `\r\n`) removed.
pub fn split_lines(content: &str) -> Vec<String> {
    content.lines().map(str::to_string).collect()
}
