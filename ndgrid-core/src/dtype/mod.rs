use std::{
    fmt::Debug,
    ops::{Add, Div, Mul, Sub},
};

#[cfg(feature = "bfloat")]
use half::bf16;
#[cfg(feature = "half")]
use half::f16;

pub use self::rand::RandDispatch;

mod rand;

/// Type which can be square-rooted.
pub trait Sqrtable {
    fn sqrt(&self) -> Self
    where
        Self: Sized;
}

impl Sqrtable for f32 {
    fn sqrt(&self) -> Self
    where
        Self: Sized,
    {
        f32::sqrt(*self)
    }
}

impl Sqrtable for f64 {
    fn sqrt(&self) -> Self
    where
        Self: Sized,
    {
        f64::sqrt(*self)
    }
}

#[cfg(feature = "bfloat")]
impl Sqrtable for bf16 {
    fn sqrt(&self) -> Self
    where
        Self: Sized,
    {
        bf16::from_f64_const(self.to_f64_const().sqrt())
    }
}

#[cfg(feature = "half")]
impl Sqrtable for f16 {
    fn sqrt(&self) -> Self
    where
        Self: Sized,
    {
        f16::from_f64_const(self.to_f64_const().sqrt())
    }
}

/// Marker trait for array element kinds.
pub trait DType: Debug + Copy + PartialEq + Send + Sync + RandDispatch + 'static {
    const ZERO: Self;
    const ONE: Self;
    const NAME: &'static str;
}

/// Element kinds supporting arithmetic. There is no impl for `bool`.
pub trait NumericDType:
    DType + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self> + Div<Output = Self>
{
    fn to_f64(&self) -> f64;
    fn from_f64(x: f64) -> Self;

    /// `self / rhs`, or `None` where the quotient is undefined for this kind
    /// (integer division by zero or overflow).
    fn checked_quotient(self, rhs: Self) -> Option<Self>;
}

/// Floating point element kinds.
pub trait FloatDType: NumericDType + Sqrtable {
    fn powf(self, exp: Self) -> Self;
}

impl DType for bool {
    const ZERO: bool = false;
    const ONE: bool = true;
    const NAME: &'static str = "bool";
}

macro_rules! dtype {
    ($rt:ident, $zero:expr, $one:expr) => {
        impl DType for $rt {
            const ZERO: $rt = $zero;
            const ONE: $rt = $one;
            const NAME: &'static str = stringify!($rt);
        }
    };
    ($rt:ident, $zero:expr, $one:expr, INTEGRAL) => {
        dtype!($rt, $zero, $one);
        impl NumericDType for $rt {
            fn to_f64(&self) -> f64 {
                *self as f64
            }
            fn from_f64(x: f64) -> Self {
                x as $rt
            }
            fn checked_quotient(self, rhs: Self) -> Option<Self> {
                self.checked_div(rhs)
            }
        }
    };
    ($rt:ident, $zero:expr, $one:expr, FLOAT) => {
        dtype!($rt, $zero, $one);
        impl NumericDType for $rt {
            fn to_f64(&self) -> f64 {
                *self as f64
            }
            fn from_f64(x: f64) -> Self {
                x as $rt
            }
            fn checked_quotient(self, rhs: Self) -> Option<Self> {
                Some(self / rhs)
            }
        }
        impl FloatDType for $rt {
            fn powf(self, exp: Self) -> Self {
                $rt::powf(self, exp)
            }
        }
    };
}

dtype!(u8, 0u8, 1u8, INTEGRAL);
dtype!(u32, 0u32, 1u32, INTEGRAL);
dtype!(i32, 0i32, 1i32, INTEGRAL);
dtype!(i64, 0i64, 1i64, INTEGRAL);
dtype!(f32, 0f32, 1f32, FLOAT);
dtype!(f64, 0f64, 1f64, FLOAT);

macro_rules! half_dtype {
    ($rt:ident) => {
        impl DType for $rt {
            const ZERO: $rt = $rt::from_f64_const(0.0);
            const ONE: $rt = $rt::from_f64_const(1.0);
            const NAME: &'static str = stringify!($rt);
        }
        impl NumericDType for $rt {
            fn to_f64(&self) -> f64 {
                self.to_f64_const()
            }
            fn from_f64(x: f64) -> Self {
                Self::from_f64_const(x)
            }
            fn checked_quotient(self, rhs: Self) -> Option<Self> {
                Some(self / rhs)
            }
        }
        impl FloatDType for $rt {
            fn powf(self, exp: Self) -> Self {
                Self::from_f64(self.to_f64().powf(exp.to_f64()))
            }
        }
    };
}

#[cfg(feature = "half")]
half_dtype!(f16);
#[cfg(feature = "bfloat")]
half_dtype!(bf16);
