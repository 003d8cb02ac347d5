use rand::Rng;

use crate::{DType, Error, Result};
// Optional half-precision types
#[cfg(feature = "bfloat")]
use half::bf16;
#[cfg(feature = "half")]
use half::f16;

/// Dispatch random fills based on the data type.
pub trait RandDispatch {
    /// Fill the slice with `lower + (upper - lower) * u`, `u` uniform in `[0, 1)`.
    /// Integral types truncate the drawn value toward zero.
    fn fill_with_uniform<R: Rng + ?Sized>(
        rng: &mut R,
        slice: &mut [Self],
        lower: f64,
        upper: f64,
    ) -> Result<()>
    where
        Self: Sized;
}

macro_rules! rand_uniform {
    ($rt:ident) => {
        impl RandDispatch for $rt {
            fn fill_with_uniform<R: Rng + ?Sized>(
                rng: &mut R,
                slice: &mut [Self],
                lower: f64,
                upper: f64,
            ) -> Result<()> {
                let span = upper - lower;
                for x in slice.iter_mut() {
                    *x = (span * rng.gen::<f64>() + lower) as $rt;
                }
                Ok(())
            }
        }
    };
}

rand_uniform!(u8);
rand_uniform!(u32);
rand_uniform!(i32);
rand_uniform!(i64);
rand_uniform!(f32);
rand_uniform!(f64);

macro_rules! rand_uniform_half {
    ($rt:ident) => {
        impl RandDispatch for $rt {
            fn fill_with_uniform<R: Rng + ?Sized>(
                rng: &mut R,
                slice: &mut [Self],
                lower: f64,
                upper: f64,
            ) -> Result<()> {
                let span = upper - lower;
                for x in slice.iter_mut() {
                    *x = $rt::from_f64_const(span * rng.gen::<f64>() + lower);
                }
                Ok(())
            }
        }
    };
}

#[cfg(feature = "half")]
rand_uniform_half!(f16);
#[cfg(feature = "bfloat")]
rand_uniform_half!(bf16);

// bool: unsupported
impl RandDispatch for bool {
    fn fill_with_uniform<R: Rng + ?Sized>(
        _rng: &mut R,
        _slice: &mut [Self],
        _lower: f64,
        _upper: f64,
    ) -> Result<()> {
        Err(Error::TypeMismatch {
            op: "random",
            dtype: <bool as DType>::NAME,
        }
        .bt())
    }
}
