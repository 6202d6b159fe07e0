use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::ModalizerError;
use crate::report::TranscriptReport;

/// Saves the report to a JSON file, replacing any existing file.
pub fn save_report(report: &TranscriptReport, file_path: &Path) -> Result<(), ModalizerError> {
    let write_error = |source| ModalizerError::WriteReport {
        path: file_path.to_path_buf(),
        source,
    };

    let file = File::create(file_path).map_err(write_error)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, report)?;
    writer.flush().map_err(write_error)?;
    Ok(())
}
