use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SurveyError {
    /// Confirm pressed on the intensity page with nothing chosen.
    #[error("请选择情感程度 (please select intensity)")]
    IntensityNotSelected,

    #[error("Intensity must be between 1 and 5, got {0}")]
    InvalidIntensity(u8),

    #[error("Failed to create output directory {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write results to {}: {source}", .path.display())]
    Export {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

pub type Result<T> = std::result::Result<T, SurveyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_names_directory() {
        let err = SurveyError::Io {
            path: PathBuf::from("results"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("results"));
        assert!(msg.contains("denied"));
    }
}
