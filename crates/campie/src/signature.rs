//! Kernel signature resolution.
//!
//! A [`KernelSignature`] gathers everything the kernel generator needs to
//! know about one `(variant, op, dtype)` combination, resolved and validated
//! up front so code generation itself cannot pick a wrong type.

use tracing::{debug, warn};

use crate::error::Result;
use crate::types::{CamOp, CamVariant, DType, HasDType, NumericType};

/// Fully resolved types and widths for one CAM kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KernelSignature {
    variant: CamVariant,
    op: CamOp,
    input: NumericType,
    result: NumericType,
}

impl KernelSignature {
    /// Resolve the signature of `op` on a `variant` CAM storing `input` values.
    ///
    /// Computes C-level types for the CAM contents and for the result, and the
    /// cell encoding width.
    ///
    /// # Errors
    ///
    /// - [`CamError::UnsupportedType`](crate::CamError::UnsupportedType) if
    ///   `input` or the element type of `reduction_values` has no C counterpart
    /// - [`CamError::InvalidOperationState`](crate::CamError::InvalidOperationState)
    ///   if `op` is a reduction and `reduction_values` is `None`
    ///
    /// # Example
    ///
    /// ```
    /// use campie::{CamOp, CamVariant, DType, KernelSignature};
    ///
    /// let weights = vec![1.0f64, 0.5];
    /// let sig = KernelSignature::resolve(
    ///     CamVariant::Acam,
    ///     CamOp::ReduceSum,
    ///     DType::Float32,
    ///     Some(&weights),
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(sig.input_ctype(), "float");
    /// assert_eq!(sig.result_ctype(), "double");
    /// assert_eq!(sig.cell_encoding_width(), 2);
    /// ```
    pub fn resolve<V>(
        variant: CamVariant,
        op: CamOp,
        input: impl Into<DType>,
        reduction_values: Option<&V>,
    ) -> Result<Self>
    where
        V: HasDType + ?Sized,
    {
        let input = NumericType::try_from(input.into())?;
        let result = NumericType::try_from(op.result_dtype(reduction_values)?)?;

        if input == NumericType::UInt8 || result == NumericType::UInt8 {
            warn!(
                %variant,
                %op,
                "uint8 shares the `char` C type with int8; unsigned arithmetic is not guaranteed"
            );
        }

        let sig = Self {
            variant,
            op,
            input,
            result,
        };
        debug!(
            %variant,
            %op,
            input = %input,
            result = %result,
            cell_encoding_width = sig.cell_encoding_width(),
            "resolved CAM kernel signature"
        );
        Ok(sig)
    }

    /// Start a request for `op` on a `variant` CAM.
    ///
    /// Lets a reduction's values be attached before the input type is known.
    pub fn request(variant: CamVariant, op: CamOp) -> SignatureRequest {
        SignatureRequest {
            variant,
            op,
            reduction: None,
        }
    }

    pub fn variant(&self) -> CamVariant {
        self.variant
    }

    pub fn op(&self) -> CamOp {
        self.op
    }

    /// Data type of the stored CAM and of the queries.
    pub fn input(&self) -> NumericType {
        self.input
    }

    /// Data type of the operation's output.
    pub fn result(&self) -> NumericType {
        self.result
    }

    pub fn cell_encoding_width(&self) -> usize {
        self.variant.cell_encoding_width()
    }

    pub fn is_reduction(&self) -> bool {
        self.op.is_reduction()
    }

    /// C type of the CAM contents.
    pub fn input_ctype(&self) -> &'static str {
        self.input.ctype()
    }

    /// C type of the output.
    pub fn result_ctype(&self) -> &'static str {
        self.result.ctype()
    }

    /// Stored elements in one CAM row of `columns` logical cells.
    pub fn row_elements(&self, columns: usize) -> usize {
        columns * self.cell_encoding_width()
    }

    /// Kernel entry point name, e.g. `acam_match_float32`.
    pub fn kernel_name(&self) -> String {
        format!(
            "{}_{}_{}",
            self.variant.name().to_ascii_lowercase(),
            self.op.name().to_ascii_lowercase(),
            self.input
        )
    }

    /// Preprocessor definitions for the kernel template.
    pub fn defines(&self) -> Vec<(&'static str, String)> {
        vec![
            ("T_INPUT", self.input_ctype().to_string()),
            ("T_RESULT", self.result_ctype().to_string()),
            ("CELL_WIDTH", self.cell_encoding_width().to_string()),
            ("IS_REDUCTION", u8::from(self.is_reduction()).to_string()),
        ]
    }

    /// [`defines`](Self::defines) as `-DNAME=value` compiler options.
    pub fn compile_options(&self) -> Vec<String> {
        self.defines()
            .into_iter()
            .map(|(name, value)| format!("-D{name}={value}"))
            .collect()
    }
}

/// Builder for a [`KernelSignature`].
///
/// # Example
///
/// ```
/// use campie::{CamOp, CamVariant, DType, KernelSignature};
///
/// let counts = [1u32, 2, 3];
/// let sig = KernelSignature::request(CamVariant::Tcam, CamOp::ReduceSum)
///     .reduce_over(&counts)
///     .resolve(DType::Int8)
///     .unwrap();
/// assert_eq!(sig.result_ctype(), "unsigned int");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignatureRequest {
    variant: CamVariant,
    op: CamOp,
    reduction: Option<DType>,
}

impl SignatureRequest {
    /// Attach the values a reduction sums over.
    ///
    /// Only their element type is kept.
    pub fn reduce_over<V: HasDType + ?Sized>(mut self, values: &V) -> Self {
        self.reduction = Some(values.dtype());
        self
    }

    /// Resolve the signature for CAM contents of type `input`.
    pub fn resolve(self, input: impl Into<DType>) -> Result<KernelSignature> {
        KernelSignature::resolve(self.variant, self.op, input, self.reduction.as_ref())
    }
}
