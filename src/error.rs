use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid page URL \"{input}\": {reason}")]
    InvalidUrl { input: String, reason: String },

    #[error(
        "Unknown source \"{input}\" (expected one of: {})",
        crate::source::registry::accepted_names()
    )]
    UnknownSource { input: String },

    #[error("{0}")]
    Storage(#[from] StorageError),
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("No storage location available (home directory not found)")]
    NoLocation,

    #[error("Failed to access storage file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Corrupt storage file: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_error_display_url() {
        let e = AppError::InvalidUrl {
            input: "::nope".to_string(),
            reason: "relative URL without a base".to_string(),
        };
        assert_eq!(
            e.to_string(),
            r#"Invalid page URL "::nope": relative URL without a base"#
        );
    }

    #[test]
    fn app_error_display_unknown_source() {
        let e = AppError::UnknownSource {
            input: "sideways".to_string(),
        };
        assert_eq!(
            e.to_string(),
            r#"Unknown source "sideways" (expected one of: local, fork, mine, self, upstream, origin, official, main)"#
        );
    }

    #[test]
    fn storage_error_no_location() {
        assert_eq!(
            StorageError::NoLocation.to_string(),
            "No storage location available (home directory not found)"
        );
    }

    #[test]
    fn app_error_from_storage_error() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let app: AppError = StorageError::from(io).into();
        assert_eq!(app.to_string(), "Failed to access storage file: denied");
    }
}
