//! Python bindings for CAM type resolution.
//!
//! This module exposes the campie resolution layer to the Python simulator,
//! so kernels are generated from the same tables the Rust side uses.
//!
//! ## Features
//!
//! - `cuda`: Enable `cudarc` launch configuration interop in the core crate

use numpy::{PyUntypedArray, PyUntypedArrayMethods};
use pyo3::exceptions::{PyTypeError, PyValueError};
use pyo3::prelude::*;

// Use fully qualified path to avoid naming conflict with the pymodule
use ::campie::{CamError, CamOp, CamVariant, DType, KernelSignature};

fn to_py_err(err: CamError) -> PyErr {
    match err {
        CamError::UnsupportedType(_) => PyTypeError::new_err(err.to_string()),
        CamError::InvalidOperationState(_) | CamError::UnknownDType(_) => {
            PyValueError::new_err(err.to_string())
        }
    }
}

/// Normalize anything `numpy.dtype` accepts and return its name.
///
/// Type classes (`np.float32`), dtype instances (`arr.dtype`) and strings
/// all end up as the same dtype object, so they resolve identically.
/// `None` names no type and yields `None`, although `numpy.dtype(None)` is
/// `float64`.
fn dtype_name(obj: &Bound<'_, PyAny>) -> PyResult<Option<String>> {
    if obj.is_none() {
        return Ok(None);
    }
    let numpy = obj.py().import_bound("numpy")?;
    let descr = numpy.getattr("dtype")?.call1((obj,))?;
    descr.getattr("name")?.extract().map(Some)
}

fn extract_dtype(obj: &Bound<'_, PyAny>) -> PyResult<DType> {
    let name = dtype_name(obj)?.unwrap_or_else(|| "None".to_string());
    name.parse::<DType>()
        .map_err(|_| PyTypeError::new_err(format!("data type {} is not supported", name)))
}

fn array_dtype(array: &Bound<'_, PyUntypedArray>) -> PyResult<DType> {
    extract_dtype(array.dtype().as_any())
}

fn to_numpy_dtype<'py>(py: Python<'py>, dtype: DType) -> PyResult<Bound<'py, PyAny>> {
    py.import_bound("numpy")?
        .getattr("dtype")?
        .call1((dtype.name(),))
}

/// All supported variants of CAMs.
#[pyclass(name = "CamVariant", eq, eq_int, frozen)]
#[derive(Clone, Copy, PartialEq)]
#[allow(non_camel_case_types, clippy::upper_case_acronyms)]
enum PyCamVariant {
    ACAM,
    ACAM_DOUBLE,
    TCAM,
}

impl From<PyCamVariant> for CamVariant {
    fn from(variant: PyCamVariant) -> Self {
        match variant {
            PyCamVariant::ACAM => CamVariant::Acam,
            PyCamVariant::ACAM_DOUBLE => CamVariant::AcamDouble,
            PyCamVariant::TCAM => CamVariant::Tcam,
        }
    }
}

#[pymethods]
impl PyCamVariant {
    /// The amount of elements in a CAM row used to encode a single CAM cell.
    #[getter]
    fn cell_encoding_width(&self) -> usize {
        CamVariant::from(*self).cell_encoding_width()
    }
}

/// All supported operations on CAMs.
#[pyclass(name = "CamOp", eq, eq_int, frozen)]
#[derive(Clone, Copy, PartialEq)]
#[allow(non_camel_case_types, clippy::upper_case_acronyms)]
enum PyCamOp {
    MATCH,
    COUNT_MISMATCHES,
    REDUCE_SUM,
}

impl From<PyCamOp> for CamOp {
    fn from(op: PyCamOp) -> Self {
        match op {
            PyCamOp::MATCH => CamOp::Match,
            PyCamOp::COUNT_MISMATCHES => CamOp::CountMismatches,
            PyCamOp::REDUCE_SUM => CamOp::ReduceSum,
        }
    }
}

#[pymethods]
impl PyCamOp {
    /// Whether the op is a reduction.
    #[getter]
    fn is_reduction(&self) -> bool {
        CamOp::from(*self).is_reduction()
    }

    /// The resulting dtype of the op.
    ///
    /// For a reduction, this is the dtype of the values reduced over,
    /// returned unchanged.
    ///
    /// Raises:
    ///     ValueError: if the op is a reduction and no values are given
    #[pyo3(signature = (reduction_values=None))]
    fn result_dtype<'py>(
        &self,
        py: Python<'py>,
        reduction_values: Option<&Bound<'py, PyUntypedArray>>,
    ) -> PyResult<Bound<'py, PyAny>> {
        let op = CamOp::from(*self);
        match reduction_values {
            // Passed through as-is, including dtypes kernels cannot handle.
            Some(values) if op.is_reduction() => Ok(values.dtype().into_any()),
            _ => {
                let dtype = op.result_dtype::<DType>(None).map_err(to_py_err)?;
                to_numpy_dtype(py, dtype)
            }
        }
    }
}

/// Converts a NumPy dtype to the name of its counterpart in C.
///
/// Args:
///     dtype: Anything accepted by `numpy.dtype`
///
/// Raises:
///     TypeError: if the dtype is not supported
#[pyfunction]
fn dtype_to_ctype(dtype: &Bound<'_, PyAny>) -> PyResult<&'static str> {
    ::campie::native_type_name(extract_dtype(dtype)?).map_err(to_py_err)
}

/// Determines whether a given data type is a floating point type.
#[pyfunction]
fn is_float_type(dtype: &Bound<'_, PyAny>) -> PyResult<bool> {
    Ok(dtype_name(dtype)?
        .and_then(|name| name.parse::<DType>().ok())
        .map(::campie::is_float_type)
        .unwrap_or(false))
}

/// Compiler options (`-DNAME=value`) for a CAM kernel template.
///
/// Args:
///     variant: The CAM variant
///     op: The CAM operation
///     dtype: dtype of the stored CAM and the queries
///     reduction_values: Values reduced over, required for reductions
#[pyfunction]
#[pyo3(signature = (variant, op, dtype, reduction_values=None))]
fn compile_options(
    variant: PyCamVariant,
    op: PyCamOp,
    dtype: &Bound<'_, PyAny>,
    reduction_values: Option<&Bound<'_, PyUntypedArray>>,
) -> PyResult<Vec<String>> {
    let values = reduction_values.map(array_dtype).transpose()?;
    let sig = KernelSignature::resolve(
        variant.into(),
        op.into(),
        extract_dtype(dtype)?,
        values.as_ref(),
    )
    .map_err(to_py_err)?;
    Ok(sig.compile_options())
}

/// Whether the extension was built with CUDA interop.
#[pyfunction]
fn cuda_enabled() -> bool {
    cfg!(feature = "cuda")
}

/// campie Python module (native Rust extension).
#[pymodule]
fn _core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyCamVariant>()?;
    m.add_class::<PyCamOp>()?;

    m.add_function(wrap_pyfunction!(dtype_to_ctype, m)?)?;
    m.add_function(wrap_pyfunction!(is_float_type, m)?)?;
    m.add_function(wrap_pyfunction!(compile_options, m)?)?;
    m.add_function(wrap_pyfunction!(cuda_enabled, m)?)?;

    Ok(())
}
