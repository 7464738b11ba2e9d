//! Error types for voxfield_grid.

use core::fmt;

use thiserror::Error;
use voxfield_core::CoreError;

use crate::channel::ElementKind;

/// Why a channel could not be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelFault {
    /// No channel is registered under the name.
    Missing,
    /// The channel exists but stores a different element kind.
    KindMismatch {
        /// Kind the caller asked for.
        expected: ElementKind,
        /// Kind the channel actually stores.
        found: ElementKind,
    },
}

impl fmt::Display for ChannelFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChannelFault::Missing => write!(f, "no such channel"),
            ChannelFault::KindMismatch { expected, found } => {
                write!(f, "expected {} elements, channel stores {}", expected, found)
            }
        }
    }
}

/// Errors that can occur during grid operations.
///
/// All of them signal caller misuse; a failed call leaves the grid unchanged.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GridError {
    /// Channel is unknown or stores a different element kind.
    #[error("invalid channel '{name}': {fault}")]
    InvalidChannel {
        /// The channel name that was addressed.
        name: String,
        /// What was wrong with it.
        fault: ChannelFault,
    },

    /// Coordinate or linear hash outside the grid.
    #[error("index out of range: {0}")]
    IndexOutOfRange(CoreError),

    /// Element kind tag outside `bool`, `int`, `float`, `vector3`.
    #[error("unsupported element type '{tag}'")]
    UnsupportedElementType {
        /// The rejected tag.
        tag: String,
    },

    /// Grid constructed with a non-positive dimension.
    #[error("{0}")]
    InvalidExtent(CoreError),

    /// Cell size with a non-positive or non-finite component.
    #[error("invalid cell size ({x}, {y}, {z}): every component must be positive and finite")]
    InvalidCellSize {
        /// X component.
        x: f32,
        /// Y component.
        y: f32,
        /// Z component.
        z: f32,
    },

    /// Supplied channel data does not match the grid's cell count.
    #[error("invalid channel size: expected {expected} values, got {got}")]
    InvalidChannelSize {
        /// The grid's cell count.
        expected: usize,
        /// Number of values supplied.
        got: usize,
    },
}

impl GridError {
    pub(crate) fn missing(name: &str) -> Self {
        GridError::InvalidChannel {
            name: name.to_owned(),
            fault: ChannelFault::Missing,
        }
    }

    pub(crate) fn kind_mismatch(name: &str, expected: ElementKind, found: ElementKind) -> Self {
        GridError::InvalidChannel {
            name: name.to_owned(),
            fault: ChannelFault::KindMismatch { expected, found },
        }
    }

    /// True for `InvalidChannel` errors.
    pub fn is_invalid_channel(&self) -> bool {
        matches!(self, GridError::InvalidChannel { .. })
    }

    /// True for `IndexOutOfRange` errors.
    pub fn is_index_out_of_range(&self) -> bool {
        matches!(self, GridError::IndexOutOfRange(_))
    }
}

impl From<CoreError> for GridError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidExtent { .. } => GridError::InvalidExtent(err),
            CoreError::IndexOutOfRange { .. } | CoreError::HashOutOfRange { .. } => {
                GridError::IndexOutOfRange(err)
            }
        }
    }
}

/// Result type for grid operations.
pub type Result<T> = std::result::Result<T, GridError>;
