use std::fmt;

use super::dtype::DType;
use super::scalar::HasDType;
use crate::error::{CamError, Result};

/// All supported operations on CAMs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CamOp {
    /// Get the match value for each row.
    Match,
    /// Count the number of mismatches per row.
    ///
    /// For TCAMs this is the hamming distance.
    CountMismatches,
    /// Get the match value per row and reduce each query down to a single
    /// value, picked from a vector of values adjacent to the CAM.
    ReduceSum,
}

impl CamOp {
    /// Every operation, in declaration order.
    pub const ALL: [CamOp; 3] = [CamOp::Match, CamOp::CountMismatches, CamOp::ReduceSum];

    /// Whether the op is a reduction.
    #[inline]
    pub const fn is_reduction(self) -> bool {
        matches!(self, CamOp::ReduceSum)
    }

    /// The resulting dtype of the op.
    ///
    /// For a reduction this is the element type of the values that are
    /// reduced over, which must then be supplied.
    ///
    /// # Errors
    ///
    /// [`CamError::InvalidOperationState`] if the op is a reduction and
    /// `reduction_values` is `None`.
    pub fn result_dtype<V>(self, reduction_values: Option<&V>) -> Result<DType>
    where
        V: HasDType + ?Sized,
    {
        match self {
            CamOp::Match => Ok(DType::Int8),
            CamOp::CountMismatches => Ok(DType::Int64),
            CamOp::ReduceSum => reduction_values
                .map(|values| values.dtype())
                .ok_or(CamError::InvalidOperationState(self)),
        }
    }

    /// Upper-case name, as used in kernel names and diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            CamOp::Match => "MATCH",
            CamOp::CountMismatches => "COUNT_MISMATCHES",
            CamOp::ReduceSum => "REDUCE_SUM",
        }
    }
}

impl fmt::Display for CamOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
