//! CAM variant, operation and data type definitions.
//!
//! This module defines the closed vocabularies a CAM kernel dispatcher works
//! with, and the pure functions that resolve one into another.
//!
//! # CAM Variants
//!
//! A CAM is stored as a plain numeric array. Depending on the variant, a
//! single logical cell occupies one or more consecutive elements of a row:
//!
//! | Variant | Cell contents | Encoding width |
//! |---------|---------------|----------------|
//! | [`CamVariant::Acam`] | lower and upper bound | 2 |
//! | [`CamVariant::AcamDouble`] | one value | 1 |
//! | [`CamVariant::Tcam`] | 0, 1 or don't-care | 1 |
//!
//! # CAM Operations
//!
//! | Operation | Output per query | Result type |
//! |-----------|------------------|-------------|
//! | [`CamOp::Match`] | match flag per row | `int8` |
//! | [`CamOp::CountMismatches`] | mismatch count per row | `int64` |
//! | [`CamOp::ReduceSum`] | sum of values of matching rows | element type of the values |
//!
//! # Data Types
//!
//! [`DType`] tags every scalar kind a caller may present. The ten kernel
//! supported ones form [`NumericType`]; each maps to the spelling a kernel
//! source template expects:
//!
//! ```rust
//! use campie::types::{native_type_name, DType};
//!
//! assert_eq!(native_type_name(DType::UInt32).unwrap(), "unsigned int");
//! assert_eq!(native_type_name(DType::Int8).unwrap(), native_type_name(DType::UInt8).unwrap());
//! assert!(native_type_name(DType::Float16).is_err());
//! ```
//!
//! # Rust Scalars
//!
//! [`CamScalar`] ties Rust primitive types to their tag at compile time, and
//! [`HasDType`] lets host buffers stand in as reduction values:
//!
//! ```rust
//! use campie::types::{CamOp, DType};
//!
//! let weights = vec![0.5f64, 1.5, 2.0];
//! assert_eq!(CamOp::ReduceSum.result_dtype(Some(&weights)).unwrap(), DType::Float64);
//! ```

mod dtype;
mod op;
mod scalar;
mod variant;

pub use dtype::{is_float_type, native_type_name, DType, NumericType};
pub use op::CamOp;
pub use scalar::{CamScalar, HasDType};
pub use variant::CamVariant;
