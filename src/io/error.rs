//! Error types for panel generation, descriptor decoding and rendering

use std::fmt;
use std::path::PathBuf;

/// Main error type for all panel operations
#[derive(Debug)]
pub enum AlgorithmError {
    /// Generation parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// The vertex walk could not reach the terminal corner
    ///
    /// The neighbor restriction guarantees a path on every rectangular grid,
    /// so seeing this means the search itself is broken, or every attempt
    /// ran out of budget.
    PathExhausted {
        /// Vertex grid dimensions (columns, rows)
        vertex_dimensions: (usize, usize),
        /// Number of search attempts made
        attempts: usize,
    },

    /// Descriptor string does not follow the placement grammar
    InvalidDescriptor {
        /// Description of what's wrong with the descriptor
        reason: String,
    },

    /// Palette entry is not a known color name, hex code or RGB triple
    InvalidColor {
        /// The offending color name
        name: String,
    },

    /// Failed to load an icon image from the filesystem
    IconLoad {
        /// Path to the icon file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to save a rendered panel to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for AlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::PathExhausted {
                vertex_dimensions,
                attempts,
            } => {
                write!(
                    f,
                    "No vertex path found on a {}x{} vertex grid after {attempts} attempt(s)",
                    vertex_dimensions.0, vertex_dimensions.1
                )
            }
            Self::InvalidDescriptor { reason } => {
                write!(f, "Invalid descriptor: {reason}")
            }
            Self::InvalidColor { name } => {
                write!(f, "Syntax error for color with name \"{name}\"")
            }
            Self::IconLoad { path, source } => {
                write!(f, "Failed to load icon '{}': {source}", path.display())
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
        }
    }
}

impl std::error::Error for AlgorithmError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::IconLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for panel results
pub type Result<T> = std::result::Result<T, AlgorithmError>;

impl From<std::io::Error> for AlgorithmError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> AlgorithmError {
    AlgorithmError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid descriptor error
pub fn invalid_descriptor(reason: &impl ToString) -> AlgorithmError {
    AlgorithmError::InvalidDescriptor {
        reason: reason.to_string(),
    }
}
