//! Error types for rigpreset.
//!
//! Fallible operations across the workspace return [`Result<T>`], which
//! uses [`Error`] as the error type. Most validation failures in the preset
//! layer are absorbed at the point of detection (rejected setter, coerced
//! zero) and never surface here; the variants below cover the dispatcher
//! and the backing store, where the caller genuinely needs to know.

/// The error type for all rigpreset operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The requested rig name is not in the supported-model registry.
    ///
    /// Returned by the dispatcher when the active interface section names
    /// a rig the workspace has no backend for. Dispatcher state is left
    /// unchanged.
    #[error("rig not supported: {0}")]
    UnsupportedRig(String),

    /// The backend rejected the serial port parameters.
    ///
    /// The backend remains instantiated so a later initialize with
    /// corrected parameters can retry without re-creating it.
    #[error("port configuration error: {0}")]
    PortConfig(String),

    /// An invalid parameter was read from the active interface section
    /// (e.g. a non-numeric baud rate).
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// An underlying I/O error from the backing store file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A convenience `Result` alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_unsupported_rig() {
        let e = Error::UnsupportedRig("FT-1000".into());
        assert_eq!(e.to_string(), "rig not supported: FT-1000");
    }

    #[test]
    fn error_display_port_config() {
        let e = Error::PortConfig("port busy".into());
        assert_eq!(e.to_string(), "port configuration error: port busy");
    }

    #[test]
    fn error_display_invalid_parameter() {
        let e = Error::InvalidParameter("baud rate 'fast'".into());
        assert_eq!(e.to_string(), "invalid parameter: baud rate 'fast'");
    }

    #[test]
    fn error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read only");
        let e: Error = io_err.into();
        assert!(matches!(e, Error::Io(_)));
        assert!(e.to_string().contains("read only"));
    }

    #[test]
    fn error_implements_std_error() {
        fn assert_std_error<T: std::error::Error>() {}
        assert_std_error::<Error>();
    }
}
