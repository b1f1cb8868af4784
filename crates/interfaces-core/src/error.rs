//! Error types with rich context

use thiserror::Error;

use crate::host::ViewerId;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed error raised by a host collaborator
pub type HostError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Error types organized by layer
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ─────────────────────────────────────────────────────────────
    // Grid Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Position ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    #[error("Slot {slot} is outside a container of {size} slots")]
    SlotOutOfBounds { slot: usize, size: usize },

    // ─────────────────────────────────────────────────────────────
    // Interface Definition Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Interface must have at least one row, got {rows}")]
    InvalidRows { rows: usize },

    #[error("Interface grid of {width}x{rows} exceeds the addressable slot range")]
    GridTooLarge { width: usize, rows: usize },

    #[error("Unknown interface: {name}")]
    UnknownInterface { name: String },

    // ─────────────────────────────────────────────────────────────
    // View Construction Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Transformation #{index} failed: {source}")]
    Transformation {
        index: usize,
        #[source]
        source: Box<Error>,
    },

    #[error("Transform error: {message}")]
    Transform { message: String },

    // ─────────────────────────────────────────────────────────────
    // Host Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to open view for viewer {viewer}: {source}")]
    HostOpen {
        viewer: ViewerId,
        #[source]
        source: HostError,
    },

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn out_of_bounds(x: usize, y: usize, width: usize, height: usize) -> Self {
        Self::OutOfBounds {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a [`Error::Transform`] error, for use inside transformations.
    pub fn transform(message: impl Into<String>) -> Self {
        Self::Transform {
            message: message.into(),
        }
    }

    pub fn transformation(index: usize, source: Error) -> Self {
        Self::Transformation {
            index,
            source: Box::new(source),
        }
    }

    pub fn host_open(viewer: ViewerId, source: impl Into<HostError>) -> Self {
        Self::HostOpen {
            viewer,
            source: source.into(),
        }
    }

    pub fn grid_too_large(width: usize, rows: usize) -> Self {
        Self::GridTooLarge { width, rows }
    }

    pub fn unknown_interface(name: impl Into<String>) -> Self {
        Self::UnknownInterface { name: name.into() }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Check if this is a recoverable error
    ///
    /// Only host-open failures are: the view stays intact and `open()` may be
    /// called again.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::HostOpen { .. })
    }

    /// Check if this error comes from incorrect interface or transformation
    /// authoring rather than from runtime host state
    pub fn is_programming_error(&self) -> bool {
        match self {
            Error::OutOfBounds { .. }
            | Error::SlotOutOfBounds { .. }
            | Error::InvalidRows { .. }
            | Error::GridTooLarge { .. } => true,
            Error::Transformation { source, .. } => source.is_programming_error(),
            _ => false,
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Context Extensions
// ─────────────────────────────────────────────────────────────────

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", context.into(), err);
            err
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", f(), err);
            err
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = Error::out_of_bounds(9, 0, 9, 3);
        assert_eq!(err.to_string(), "Position (9, 0) is outside the 9x3 grid");

        let err = Error::InvalidRows { rows: 0 };
        assert!(err.to_string().contains("at least one row"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_transformation_error_wraps_source() {
        let err = Error::transformation(2, Error::transform("no stock"));
        assert_eq!(
            err.to_string(),
            "Transformation #2 failed: Transform error: no stock"
        );

        let source = std::error::Error::source(&err).map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("Transform error: no stock"));
    }

    #[test]
    fn test_host_open_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotConnected, "session gone");
        let err = Error::host_open(ViewerId::new("steve"), io_err);
        assert!(err.to_string().contains("steve"));
        assert!(err.to_string().contains("session gone"));
    }

    #[test]
    fn test_error_is_recoverable() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotConnected, "gone");
        assert!(Error::host_open(ViewerId::new("alex"), io_err).is_recoverable());
        assert!(!Error::out_of_bounds(0, 9, 9, 1).is_recoverable());
        assert!(!Error::transform("boom").is_recoverable());
    }

    #[test]
    fn test_error_is_programming_error() {
        assert!(Error::out_of_bounds(0, 9, 9, 1).is_programming_error());
        assert!(Error::InvalidRows { rows: 0 }.is_programming_error());
        assert!(Error::transformation(0, Error::out_of_bounds(0, 3, 9, 3)).is_programming_error());
        assert!(!Error::transformation(0, Error::transform("db offline")).is_programming_error());
        assert!(!Error::config("bad").is_programming_error());
    }

    #[test]
    fn test_result_context_keeps_error() {
        let io: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "read-only",
        ));
        let err = io.context("Failed to create log directory").unwrap_err();
        assert!(matches!(err, Error::Io(_)));

        let ok: Result<u8> = Ok(3);
        assert_eq!(ok.context("unused").unwrap(), 3);
    }

    #[test]
    fn test_error_constructors() {
        let _ = Error::transform("test");
        let _ = Error::unknown_interface("shop");
        let _ = Error::config("test");
    }
}
