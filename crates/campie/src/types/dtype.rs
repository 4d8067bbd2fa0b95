use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;

use crate::error::{CamError, Result};

/// Scalar data type tag, spelled the way NumPy names its dtypes.
///
/// This covers more than kernels can handle, so that whatever type a caller
/// presents can be named in an error. Use [`NumericType`] for the supported
/// subset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DType {
    Bool,
    Int8,
    Int16,
    Int32,
    Int64,
    UInt8,
    UInt16,
    UInt32,
    UInt64,
    Float16,
    Float32,
    Float64,
    Complex64,
    Complex128,
}

impl DType {
    /// Every tag, in declaration order.
    pub const ALL: [DType; 14] = [
        DType::Bool,
        DType::Int8,
        DType::Int16,
        DType::Int32,
        DType::Int64,
        DType::UInt8,
        DType::UInt16,
        DType::UInt32,
        DType::UInt64,
        DType::Float16,
        DType::Float32,
        DType::Float64,
        DType::Complex64,
        DType::Complex128,
    ];

    /// NumPy name of the type.
    pub const fn name(self) -> &'static str {
        match self {
            DType::Bool => "bool",
            DType::Int8 => "int8",
            DType::Int16 => "int16",
            DType::Int32 => "int32",
            DType::Int64 => "int64",
            DType::UInt8 => "uint8",
            DType::UInt16 => "uint16",
            DType::UInt32 => "uint32",
            DType::UInt64 => "uint64",
            DType::Float16 => "float16",
            DType::Float32 => "float32",
            DType::Float64 => "float64",
            DType::Complex64 => "complex64",
            DType::Complex128 => "complex128",
        }
    }

    /// Size of one element in bytes.
    pub const fn itemsize(self) -> usize {
        match self {
            DType::Bool | DType::Int8 | DType::UInt8 => 1,
            DType::Int16 | DType::UInt16 | DType::Float16 => 2,
            DType::Int32 | DType::UInt32 | DType::Float32 => 4,
            DType::Int64 | DType::UInt64 | DType::Float64 | DType::Complex64 => 8,
            DType::Complex128 => 16,
        }
    }

    /// Whether this is a signed integer type.
    pub const fn is_signed_int(self) -> bool {
        matches!(self, DType::Int8 | DType::Int16 | DType::Int32 | DType::Int64)
    }

    /// Whether this is an unsigned integer type.
    pub const fn is_unsigned_int(self) -> bool {
        matches!(
            self,
            DType::UInt8 | DType::UInt16 | DType::UInt32 | DType::UInt64
        )
    }

    /// Whether kernels can be generated for this type.
    pub fn is_supported(self) -> bool {
        NumericType::try_from(self).is_ok()
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Spellings accepted by [`DType::from_str`]: NumPy names and NumPy array
/// protocol codes.
static DTYPE_ALIASES: Lazy<HashMap<&'static str, DType>> = Lazy::new(|| {
    let mut aliases: HashMap<&'static str, DType> =
        DType::ALL.iter().map(|&dtype| (dtype.name(), dtype)).collect();
    aliases.extend([
        ("?", DType::Bool),
        ("b1", DType::Bool),
        ("i1", DType::Int8),
        ("i2", DType::Int16),
        ("i4", DType::Int32),
        ("i8", DType::Int64),
        ("u1", DType::UInt8),
        ("u2", DType::UInt16),
        ("u4", DType::UInt32),
        ("u8", DType::UInt64),
        ("f2", DType::Float16),
        ("f4", DType::Float32),
        ("f8", DType::Float64),
        ("c8", DType::Complex64),
        ("c16", DType::Complex128),
    ]);
    aliases
});

impl FromStr for DType {
    type Err = CamError;

    /// Parses a dtype name.
    ///
    /// Accepts NumPy names (`"float32"`) and array protocol codes (`"<f4"`).
    /// Codes count bytes, so `"i8"` and `"u8"` name `int64` and `uint64`;
    /// Rust spellings such as `"u16"` or `"f32"` are rejected. Use
    /// [`CamScalar::DTYPE`](super::CamScalar::DTYPE) to tag Rust types.
    /// A leading byte order mark (`<`, `>`, `=`, `|`) is ignored.
    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().trim_start_matches(['<', '>', '=', '|']);
        DTYPE_ALIASES
            .get(name)
            .copied()
            .ok_or_else(|| CamError::UnknownDType(s.to_string()))
    }
}

/// The numeric types kernels can be generated for: the floating point and
/// integer types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericType {
    Float32,
    Float64,
    Int8,
    Int16,
    Int32,
    Int64,
    UInt8,
    UInt16,
    UInt32,
    UInt64,
}

impl NumericType {
    /// Every supported type.
    pub const ALL: [NumericType; 10] = [
        NumericType::Float32,
        NumericType::Float64,
        NumericType::Int8,
        NumericType::Int16,
        NumericType::Int32,
        NumericType::Int64,
        NumericType::UInt8,
        NumericType::UInt16,
        NumericType::UInt32,
        NumericType::UInt64,
    ];

    /// Name of the counterpart of this type in C.
    ///
    /// Both 8-bit integer types map to `char`.
    pub const fn ctype(self) -> &'static str {
        match self {
            NumericType::Float32 => "float",
            NumericType::Float64 => "double",
            NumericType::Int8 => "char",
            NumericType::Int16 => "short",
            NumericType::Int32 => "int",
            NumericType::Int64 => "long",
            NumericType::UInt8 => "char",
            NumericType::UInt16 => "unsigned short",
            NumericType::UInt32 => "unsigned int",
            NumericType::UInt64 => "unsigned long",
        }
    }

    /// Whether this is a floating point type.
    pub const fn is_float(self) -> bool {
        matches!(self, NumericType::Float32 | NumericType::Float64)
    }
}

impl From<NumericType> for DType {
    fn from(ty: NumericType) -> Self {
        match ty {
            NumericType::Float32 => DType::Float32,
            NumericType::Float64 => DType::Float64,
            NumericType::Int8 => DType::Int8,
            NumericType::Int16 => DType::Int16,
            NumericType::Int32 => DType::Int32,
            NumericType::Int64 => DType::Int64,
            NumericType::UInt8 => DType::UInt8,
            NumericType::UInt16 => DType::UInt16,
            NumericType::UInt32 => DType::UInt32,
            NumericType::UInt64 => DType::UInt64,
        }
    }
}

impl TryFrom<DType> for NumericType {
    type Error = CamError;

    fn try_from(dtype: DType) -> Result<Self> {
        match dtype {
            DType::Float32 => Ok(NumericType::Float32),
            DType::Float64 => Ok(NumericType::Float64),
            DType::Int8 => Ok(NumericType::Int8),
            DType::Int16 => Ok(NumericType::Int16),
            DType::Int32 => Ok(NumericType::Int32),
            DType::Int64 => Ok(NumericType::Int64),
            DType::UInt8 => Ok(NumericType::UInt8),
            DType::UInt16 => Ok(NumericType::UInt16),
            DType::UInt32 => Ok(NumericType::UInt32),
            DType::UInt64 => Ok(NumericType::UInt64),
            DType::Bool
            | DType::Float16
            | DType::Complex64
            | DType::Complex128 => Err(CamError::UnsupportedType(dtype)),
        }
    }
}

impl fmt::Display for NumericType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&DType::from(*self), f)
    }
}

/// Converts a data type to the name of its counterpart in C.
///
/// Accepts a [`DType`] tag or an already validated [`NumericType`]; both
/// spellings of one type resolve to the same name.
///
/// # Errors
///
/// [`CamError::UnsupportedType`] for types outside [`NumericType`].
pub fn native_type_name(dtype: impl Into<DType>) -> Result<&'static str> {
    NumericType::try_from(dtype.into()).map(NumericType::ctype)
}

/// Determines whether a given data type is a floating point type.
///
/// Only `float32` and `float64` count; `float16` is not a kernel float.
pub fn is_float_type(dtype: impl Into<DType>) -> bool {
    matches!(dtype.into(), DType::Float32 | DType::Float64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ctype_table() {
        let expected = [
            (DType::Float32, "float"),
            (DType::Float64, "double"),
            (DType::Int8, "char"),
            (DType::Int16, "short"),
            (DType::Int32, "int"),
            (DType::Int64, "long"),
            (DType::UInt8, "char"),
            (DType::UInt16, "unsigned short"),
            (DType::UInt32, "unsigned int"),
            (DType::UInt64, "unsigned long"),
        ];
        for (dtype, ctype) in expected {
            assert_eq!(native_type_name(dtype).unwrap(), ctype, "{dtype}");
        }
    }

    #[test]
    fn test_unsupported_types_are_rejected() {
        for dtype in [DType::Bool, DType::Float16, DType::Complex64, DType::Complex128] {
            assert_eq!(
                native_type_name(dtype).unwrap_err(),
                CamError::UnsupportedType(dtype)
            );
            assert!(!dtype.is_supported());
        }
    }

    #[test]
    fn test_exactly_ten_supported() {
        let supported: Vec<_> = DType::ALL.into_iter().filter(|d| d.is_supported()).collect();
        assert_eq!(supported.len(), NumericType::ALL.len());
        for ty in NumericType::ALL {
            assert_eq!(NumericType::try_from(DType::from(ty)).unwrap(), ty);
        }
    }

    #[test]
    fn test_tag_and_numeric_resolve_alike() {
        for ty in NumericType::ALL {
            assert_eq!(native_type_name(ty).unwrap(), native_type_name(DType::from(ty)).unwrap());
            assert_eq!(is_float_type(ty), is_float_type(DType::from(ty)));
        }
    }

    #[test]
    fn test_is_float_type() {
        assert!(is_float_type(DType::Float32));
        assert!(is_float_type(DType::Float64));
        assert!(!is_float_type(DType::Float16));
        assert!(!is_float_type(DType::Complex128));
        let floats = NumericType::ALL.into_iter().filter(|t| t.is_float()).count();
        assert_eq!(floats, 2);
    }

    #[test]
    fn test_parse_names_and_codes() {
        assert_eq!("float32".parse::<DType>().unwrap(), DType::Float32);
        assert_eq!("<f8".parse::<DType>().unwrap(), DType::Float64);
        assert_eq!("|u1".parse::<DType>().unwrap(), DType::UInt8);
        assert_eq!("<i8".parse::<DType>().unwrap(), DType::Int64);
        assert_eq!("u8".parse::<DType>().unwrap(), DType::UInt64);
        assert_eq!("c16".parse::<DType>().unwrap(), DType::Complex128);
        assert_eq!(
            "object".parse::<DType>().unwrap_err(),
            CamError::UnknownDType("object".to_string())
        );
    }

    #[test]
    fn test_rust_spellings_rejected() {
        for name in ["i16", "i32", "i64", "u16", "u32", "u64", "f16", "f32", "f64"] {
            assert_eq!(
                name.parse::<DType>().unwrap_err(),
                CamError::UnknownDType(name.to_string())
            );
        }
    }

    #[test]
    fn test_display_parses_back() {
        for dtype in DType::ALL {
            assert_eq!(dtype.to_string().parse::<DType>().unwrap(), dtype);
        }
    }

    #[test]
    fn test_integer_signedness_and_size() {
        assert!(DType::Int16.is_signed_int());
        assert!(!DType::UInt16.is_signed_int());
        assert!(DType::UInt64.is_unsigned_int());
        assert!(!DType::Float64.is_unsigned_int());
        assert_eq!(DType::Complex128.itemsize(), 16);
        assert_eq!(DType::UInt8.itemsize(), 1);
    }
}
