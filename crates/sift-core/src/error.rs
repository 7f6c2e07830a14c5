use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the ipsift crates.
#[derive(Error, Debug)]
pub enum SiftError {
    /// The input log could not be opened or read from disk.
    #[error("Failed to read log file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV report file could not be created.
    #[error("Failed to write report {path}: {source}")]
    ReportWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A CSV record could not be serialized.
    #[error("Failed to serialize CSV record: {0}")]
    Csv(#[from] csv::Error),

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Catch-all for errors from third-party crates via `anyhow`.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience alias used throughout the ipsift crates.
pub type Result<T> = std::result::Result<T, SiftError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_file_read() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = SiftError::FileRead {
            path: PathBuf::from("/some/server.log"),
            source: io_err,
        };
        let msg = err.to_string();
        assert!(msg.contains("Failed to read log file"));
        assert!(msg.contains("/some/server.log"));
        assert!(msg.contains("no such file"));
    }

    #[test]
    fn test_error_display_report_write() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = SiftError::ReportWrite {
            path: PathBuf::from("/some/server.log.csv"),
            source: io_err,
        };
        let msg = err.to_string();
        assert!(msg.contains("Failed to write report"));
        assert!(msg.contains("/some/server.log.csv"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "eof");
        let err: SiftError = io_err.into();
        assert!(err.to_string().contains("eof"));
    }

    #[test]
    fn test_error_from_anyhow() {
        let err: SiftError = anyhow::anyhow!("something else").into();
        assert_eq!(err.to_string(), "something else");
    }
}
