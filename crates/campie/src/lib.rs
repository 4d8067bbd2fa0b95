//! Type resolution for content-addressable memory (CAM) kernels.
//!
//! CAMs are simulated as plain numeric arrays and queried by parallel device
//! kernels. This crate decides, for a CAM variant, an operation and the data
//! types involved:
//!
//! - how many array elements encode one logical CAM cell
//!   ([`CamVariant::cell_encoding_width`])
//! - the data type an operation produces ([`CamOp::result_dtype`])
//! - the C type a kernel template must be instantiated with
//!   ([`native_type_name`])
//!
//! It does not generate kernel source, allocate device memory, or launch
//! anything; it is the contract the kernel generator is driven by.
//!
//! # Quick Start
//!
//! ```
//! use campie::{native_type_name, CamOp, CamVariant, DType};
//!
//! assert_eq!(CamVariant::Acam.cell_encoding_width(), 2);
//! assert_eq!(CamOp::Match.result_dtype::<[f32]>(None).unwrap(), DType::Int8);
//!
//! let weights = [1.0f64, 2.0, 3.0];
//! let out = CamOp::ReduceSum.result_dtype(Some(&weights[..])).unwrap();
//! assert_eq!(native_type_name(out).unwrap(), "double");
//! ```
//!
//! # Kernel Signatures
//!
//! [`KernelSignature`] resolves and validates every type at once:
//!
//! ```
//! use campie::{CamOp, CamVariant, KernelSignature, NumericType};
//!
//! let sig = KernelSignature::request(CamVariant::Tcam, CamOp::CountMismatches)
//!     .resolve(NumericType::UInt8)
//!     .unwrap();
//! assert_eq!(sig.compile_options(), vec![
//!     "-DT_INPUT=char",
//!     "-DT_RESULT=long",
//!     "-DCELL_WIDTH=1",
//!     "-DIS_REDUCTION=0",
//! ]);
//! ```
//!
//! # Features
//!
//! - `cuda`: `LaunchConfiguration` converts into `cudarc::driver::LaunchConfig`
//! - `metal`: `LaunchConfiguration::to_metal` for `dispatch_thread_groups`
//!
//! All lookups are pure functions over immutable tables and may be called
//! from any thread.

mod error;
pub mod launch;
pub mod signature;
pub mod types;

pub use error::{CamError, Result};
pub use launch::{Dimensions, LaunchConfiguration};
pub use signature::{KernelSignature, SignatureRequest};
pub use types::{
    is_float_type, native_type_name, CamOp, CamScalar, CamVariant, DType, HasDType, NumericType,
};
