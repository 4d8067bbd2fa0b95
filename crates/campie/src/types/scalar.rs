use super::dtype::{DType, NumericType};

/// Trait for Rust scalar types that can be stored in a CAM or reduced over.
pub trait CamScalar: Copy + Send + Sync + 'static {
    /// Kernel data type of this scalar.
    const NUMERIC_TYPE: NumericType;

    /// Tag of this scalar.
    const DTYPE: DType;
}

macro_rules! impl_cam_scalar {
    ($($scalar:ty => $numeric:ident),* $(,)?) => {
        $(
            impl CamScalar for $scalar {
                const NUMERIC_TYPE: NumericType = NumericType::$numeric;
                const DTYPE: DType = DType::$numeric;
            }
        )*
    };
}

impl_cam_scalar! {
    f32 => Float32,
    f64 => Float64,
    i8 => Int8,
    i16 => Int16,
    i32 => Int32,
    i64 => Int64,
    u8 => UInt8,
    u16 => UInt16,
    u32 => UInt32,
    u64 => UInt64,
}

/// An array-like value that reports its element data type.
///
/// Reduction values are only inspected for their type, never read.
pub trait HasDType {
    /// Element data type.
    fn dtype(&self) -> DType;
}

impl HasDType for DType {
    fn dtype(&self) -> DType {
        *self
    }
}

impl HasDType for NumericType {
    fn dtype(&self) -> DType {
        DType::from(*self)
    }
}

impl<T: CamScalar> HasDType for [T] {
    fn dtype(&self) -> DType {
        T::DTYPE
    }
}

impl<T: CamScalar, const N: usize> HasDType for [T; N] {
    fn dtype(&self) -> DType {
        T::DTYPE
    }
}

impl<T: CamScalar> HasDType for Vec<T> {
    fn dtype(&self) -> DType {
        T::DTYPE
    }
}

impl<A: HasDType + ?Sized> HasDType for &A {
    fn dtype(&self) -> DType {
        (**self).dtype()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_tags_agree() {
        fn check<T: CamScalar>() {
            assert_eq!(DType::from(T::NUMERIC_TYPE), T::DTYPE);
            assert_eq!(T::DTYPE.itemsize(), std::mem::size_of::<T>());
        }
        check::<f32>();
        check::<f64>();
        check::<i8>();
        check::<i16>();
        check::<i32>();
        check::<i64>();
        check::<u8>();
        check::<u16>();
        check::<u32>();
        check::<u64>();
    }

    #[test]
    fn test_empty_buffers_still_report_type() {
        let empty: Vec<i32> = Vec::new();
        assert_eq!(empty.dtype(), DType::Int32);
        assert_eq!(empty.as_slice().dtype(), DType::Int32);
        assert_eq!([0u8; 0].dtype(), DType::UInt8);
    }

    #[test]
    fn test_references_forward() {
        let values = [1.5f32, 2.5];
        let borrowed: &[f32] = &values;
        assert_eq!((&borrowed).dtype(), DType::Float32);
    }
}
