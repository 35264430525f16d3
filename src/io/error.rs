//! Error types and failure classification for panel rendering operations

use std::fmt;
use std::path::PathBuf;

/// Broad failure classes used to decide how a caller should react
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Inputs violate a documented precondition (shapes, ranges, sizes)
    Precondition,
    /// A best-effort resource such as a font could not be acquired
    ResourceUnavailable,
    /// Reading, decoding or encoding an image failed
    Io,
    /// An internal buffer did not have the shape it was built for
    Internal,
}

/// Main error type for all panel rendering operations
#[derive(Debug)]
pub enum PanelError {
    /// Two images that must share a coordinate system have different shapes
    ShapeMismatch {
        /// Operation that required matching shapes
        operation: &'static str,
        /// Expected (height, width)
        expected: (usize, usize),
        /// Actual (height, width)
        actual: (usize, usize),
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Image data is empty or holds values outside the [0, 1] intensity range
    InvalidImageData {
        /// Name of the offending image
        name: String,
        /// Description of what's wrong with the data
        reason: String,
    },

    /// A font resource could not be loaded
    FontUnavailable {
        /// Location of the font resource
        path: PathBuf,
        /// Why loading failed
        reason: String,
    },

    /// Failed to load an input image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to encode the composite into the output format
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// The output location could not be prepared or replaced
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Internal buffer computation produced an invalid result
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },
}

impl PanelError {
    /// Classify the error into one of the broad failure kinds
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::ShapeMismatch { .. }
            | Self::InvalidParameter { .. }
            | Self::InvalidImageData { .. } => ErrorKind::Precondition,
            // File system failures only arise from an unwritable output location
            Self::FontUnavailable { .. } | Self::FileSystem { .. } => {
                ErrorKind::ResourceUnavailable
            }
            Self::ImageLoad { .. } | Self::ImageExport { .. } => ErrorKind::Io,
            Self::Computation { .. } => ErrorKind::Internal,
        }
    }
}

impl fmt::Display for PanelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShapeMismatch {
                operation,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Shape mismatch in {operation}: expected {}x{}, got {}x{}",
                    expected.0, expected.1, actual.0, actual.1
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::InvalidImageData { name, reason } => {
                write!(f, "Invalid image data in '{name}': {reason}")
            }
            Self::FontUnavailable { path, reason } => {
                write!(f, "Font unavailable at '{}': {reason}", path.display())
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Computation { operation, reason } => {
                write!(f, "Computation error in {operation}: {reason}")
            }
        }
    }
}

impl std::error::Error for PanelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for panel rendering results
pub type Result<T> = std::result::Result<T, PanelError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> PanelError {
    PanelError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a shape mismatch error for the named operation
pub const fn shape_mismatch(
    operation: &'static str,
    expected: (usize, usize),
    actual: (usize, usize),
) -> PanelError {
    PanelError::ShapeMismatch {
        operation,
        expected,
        actual,
    }
}

/// Create a computation error
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> PanelError {
    PanelError::Computation {
        operation,
        reason: reason.to_string(),
    }
}
