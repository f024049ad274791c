use std::path::PathBuf;

use thiserror::Error;

use super::options::OutputFormat;

/// Everything that can stop a preview or conversion.
///
/// The first three are detected before dcraw is launched.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Unsupported output format: {0}")]
    InvalidOptions(OutputFormat),

    #[error("Please select a raw image first")]
    MissingSource,

    #[error("Please select the path to dcraw first")]
    MissingExecutable,

    #[error("Could not launch {}: {source}", executable.display())]
    LaunchFailure {
        executable: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("dcraw exited with status {0}")]
    ExecutionFailed(i32),

    /// The process ended without an exit code (e.g. killed by a signal).
    #[error("dcraw terminated without an exit status")]
    ExecutionUnknown,
}

impl ConvertError {
    /// Whether dcraw was never started.
    pub fn is_pre_launch(&self) -> bool {
        matches!(
            self,
            ConvertError::InvalidOptions(_)
                | ConvertError::MissingSource
                | ConvertError::MissingExecutable
                | ConvertError::LaunchFailure { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_problem() {
        assert_eq!(
            ConvertError::InvalidOptions(OutputFormat::Psd).to_string(),
            "Unsupported output format: PSD"
        );
        assert_eq!(ConvertError::ExecutionFailed(2).to_string(), "dcraw exited with status 2");

        let launch = ConvertError::LaunchFailure {
            executable: PathBuf::from("/opt/dcraw"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(launch.to_string().starts_with("Could not launch /opt/dcraw"));
        assert!(launch.is_pre_launch());
        assert!(!ConvertError::ExecutionFailed(1).is_pre_launch());
    }
}
