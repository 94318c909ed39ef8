//! Error types for solver preconditions and file handling
//!
//! Search exhaustion is not an error: the solver reports it as `Ok(None)`.
//! Everything here is either a malformed input caught before any search
//! starts or a failure talking to the filesystem.

use std::fmt;
use std::path::PathBuf;

/// Main error type for all crate operations
#[derive(Debug)]
pub enum TilingError {
    /// The tile catalog contains no tiles
    EmptyCatalog,

    /// Wall description does not describe a usable wall
    InvalidWall {
        /// Description of what's wrong with the wall
        reason: String,
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

    /// An edge references a vertex that is not part of the graph
    UnknownVertex {
        /// Debug rendering of the offending vertex
        vertex: String,
    },

    /// Graph is too large for an exponential enumeration
    GraphTooLarge {
        /// Number of vertices in the graph
        vertices: usize,
        /// Largest supported vertex count
        limit: usize,
    },

    /// Textual input (maze, blueprint, network) could not be parsed
    Parse {
        /// What was being parsed
        what: &'static str,
        /// Description of the failure
        reason: String,
    },

    /// Failed to read or decode a problem file
    ProblemLoad {
        /// Path to the problem file
        path: PathBuf,
        /// Underlying decoding error
        source: serde_json::Error,
    },

    /// Failed to save a rendered wall to disk
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

impl fmt::Display for TilingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCatalog => write!(f, "Tile catalog is empty"),
            Self::InvalidWall { reason } => write!(f, "Invalid wall: {reason}"),
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::UnknownVertex { vertex } => {
                write!(f, "Edge references unknown vertex {vertex}")
            }
            Self::GraphTooLarge { vertices, limit } => {
                write!(
                    f,
                    "Graph has {vertices} vertices, enumeration supports at most {limit}"
                )
            }
            Self::Parse { what, reason } => write!(f, "Failed to parse {what}: {reason}"),
            Self::ProblemLoad { path, source } => {
                write!(f, "Failed to load problem '{}': {source}", path.display())
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

impl std::error::Error for TilingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ProblemLoad { source, .. } => Some(source),
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for crate results
pub type Result<T> = std::result::Result<T, TilingError>;

impl From<std::io::Error> for TilingError {
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
) -> TilingError {
    TilingError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid wall error
pub fn invalid_wall(reason: &impl ToString) -> TilingError {
    TilingError::InvalidWall {
        reason: reason.to_string(),
    }
}

/// Create a parse error
pub fn parse_error(what: &'static str, reason: &impl ToString) -> TilingError {
    TilingError::Parse {
        what,
        reason: reason.to_string(),
    }
}
