use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackupError {
    #[error("Local I/O error on '{path}': {source}")]
    LocalIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Crypto setup failed: {message}")]
    CryptoSetup { message: String },

    #[error("Remote storage error during {operation}: {message}")]
    RemoteStorage { operation: String, message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ('{value}'): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    LocalIo,
    Crypto,
    RemoteStorage,
    Config,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Informational; the run still counts as a success.
    Low,
    /// Transient; the next scheduled run may succeed unchanged.
    Medium,
    /// The run failed; operator attention needed.
    High,
    /// Misconfiguration; no run can succeed until it is fixed.
    Critical,
}

impl BackupError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            BackupError::LocalIo { .. } | BackupError::Io(_) => ErrorCategory::LocalIo,
            BackupError::CryptoSetup { .. } => ErrorCategory::Crypto,
            BackupError::RemoteStorage { .. } => ErrorCategory::RemoteStorage,
            BackupError::ConfigError { .. }
            | BackupError::InvalidConfigValueError { .. }
            | BackupError::MissingConfigError { .. } => ErrorCategory::Config,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::LocalIo => ErrorSeverity::High,
            ErrorCategory::RemoteStorage => ErrorSeverity::Medium,
            ErrorCategory::Crypto | ErrorCategory::Config => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            BackupError::LocalIo { path, .. } => {
                format!("Check that '{}' exists, is readable, and the disk is not full", path)
            }
            BackupError::Io(_) => "Check local disk space and permissions".to_string(),
            BackupError::CryptoSetup { .. } => {
                "Provide a base64-encoded 32-byte key (and, if pinned, a 16-byte IV)".to_string()
            }
            BackupError::RemoteStorage { operation, .. } => format!(
                "Verify credentials, network access, and container permissions, then retry the {}",
                operation
            ),
            BackupError::ConfigError { .. }
            | BackupError::InvalidConfigValueError { .. }
            | BackupError::MissingConfigError { .. } => {
                "Review the configuration values and run again".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::LocalIo => format!("Could not read or write a local file: {}", self),
            ErrorCategory::Crypto => format!("Encryption could not be set up: {}", self),
            ErrorCategory::RemoteStorage => format!("Cloud storage operation failed: {}", self),
            ErrorCategory::Config => format!("Configuration problem: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, BackupError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crypto_errors_are_critical() {
        let err = BackupError::CryptoSetup {
            message: "bad key".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Crypto);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
    }

    #[test]
    fn remote_errors_are_retryable() {
        let err = BackupError::RemoteStorage {
            operation: "upload".to_string(),
            message: "503".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert!(err.recovery_suggestion().contains("upload"));
    }

    #[test]
    fn local_io_keeps_path_context() {
        let err = BackupError::LocalIo {
            path: "/tmp/missing.bak".to_string(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(err.to_string().contains("/tmp/missing.bak"));
        assert_eq!(err.severity(), ErrorSeverity::High);
    }
}
