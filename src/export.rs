use crate::error::{Result, SurveyError};
use crate::survey::Judgment;
use std::path::{Path, PathBuf};

pub const HEADER: [&str; 3] = ["word", "emotion", "intensity"];

/// Writes judgments to a CSV file, replacing whatever was there.
pub struct ResultExporter {
    path: PathBuf,
}

impl ResultExporter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Export in insertion order. Returns the written path.
    ///
    /// The judgments are only borrowed, so a failed export can be retried.
    pub fn export(&self, judgments: &[Judgment]) -> Result<PathBuf> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir).map_err(|source| SurveyError::Io {
                path: dir.to_path_buf(),
                source,
            })?;
        }

        self.write_rows(judgments).map_err(|source| SurveyError::Export {
            path: self.path.clone(),
            source,
        })?;

        tracing::info!(path = %self.path.display(), rows = judgments.len(), "results exported");
        Ok(self.path.clone())
    }

    fn write_rows(&self, judgments: &[Judgment]) -> std::result::Result<(), csv::Error> {
        // Header written explicitly so an empty export still has it.
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&self.path)?;
        writer.write_record(HEADER)?;
        for judgment in judgments {
            writer.serialize(judgment)?;
        }
        writer.flush()?;
        Ok(())
    }
}
