//! Error types for CAM type resolution.

use thiserror::Error;

use crate::types::{CamOp, DType};

/// Errors that can occur while resolving CAM kernel types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CamError {
    /// The data type has no native kernel counterpart.
    #[error("data type {0} is not supported")]
    UnsupportedType(DType),

    /// The operation needs inputs that were not supplied.
    #[error("could not determine resulting data type for CAM operation {0}")]
    InvalidOperationState(CamOp),

    /// Text that does not name any known data type.
    #[error("unknown data type: {0:?}")]
    UnknownDType(String),
}

/// Result type for CAM type resolution.
pub type Result<T> = std::result::Result<T, CamError>;
