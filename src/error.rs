use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Not in a recognized repository context: {0}")]
    Context(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("GitHub API error: {0}")]
    Api(String),

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to write report to {}: {source}", path.display())]
    Export {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV encoding error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn is_user_error(&self) -> bool {
        matches!(self, Error::Context(_) | Error::Validation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_single_line() {
        let err = Error::Api("HTTP 404: Not Found".to_string());
        assert_eq!(err.to_string(), "GitHub API error: HTTP 404: Not Found");
        assert!(!err.is_user_error());

        let err = Error::Validation("repository must be owner/name".to_string());
        assert!(err.is_user_error());
        assert!(!err.to_string().contains('\n'));
    }

    #[test]
    fn test_export_error_names_path() {
        let err = Error::Export {
            path: PathBuf::from("out/report.csv"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing directory"),
        };
        assert_eq!(
            err.to_string(),
            "Failed to write report to out/report.csv: missing directory"
        );
    }
}
