use std::path::PathBuf;
use thiserror::Error;

/// Failures callers need to tell apart from plain I/O errors
#[derive(Error, Debug)]
pub enum CambiumError {
    /// Invalid or missing command-line argument
    #[error("{0}")]
    Usage(String),

    #[error("invalid inventory: {0}")]
    InvalidInventory(String),

    #[error("copy verification failed: {} does not match its source", path.display())]
    CopyVerification { path: PathBuf },
}

impl CambiumError {
    pub fn not_a_directory(path: &std::path::Path) -> Self {
        Self::Usage(format!("{} is not a directory", path.display()))
    }

    pub fn not_a_file(path: &std::path::Path) -> Self {
        Self::Usage(format!("{} is not a file", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_usage_message() {
        let err = CambiumError::not_a_directory(Path::new("/missing/job"));
        assert_eq!(err.to_string(), "/missing/job is not a directory");
    }

    #[test]
    fn test_verification_message_names_path() {
        let err = CambiumError::CopyVerification {
            path: PathBuf::from("out/01-admin/rfi/a.pdf"),
        };
        assert!(err.to_string().contains("out/01-admin/rfi/a.pdf"));
    }

    #[test]
    fn test_downcast_through_anyhow() {
        let err: anyhow::Error = CambiumError::Usage("bad".into()).into();
        assert!(matches!(
            err.downcast_ref::<CambiumError>(),
            Some(CambiumError::Usage(_))
        ));
    }
}
