use std::ops::{Add, Div, Mul, Sub};

use crate::{layout::Layout, Error, FloatDType, NumericDType, Result, StridedArray};

impl<T: NumericDType> StridedArray<T> {
    fn zip_map(&self, rhs: &Self, op: &'static str, f: impl Fn(T, T) -> T) -> Result<Self> {
        self.layout().ensure_same_shape(rhs.layout(), op)?;
        let storage = self
            .as_slice()
            .iter()
            .zip(rhs.as_slice())
            .map(|(&l, &r)| f(l, r))
            .collect();
        Ok(Self::from_layout(self.layout().clone(), storage))
    }

    fn map(&self, f: impl Fn(T) -> T) -> Self {
        let storage = self.as_slice().iter().map(|&x| f(x)).collect();
        Self::from_layout(self.layout().clone(), storage)
    }

    /// Combine two 1-D arrays of lengths `m` and `n` into an `m x n` array
    /// with `[i, j] = f(self[i], rhs[j])`.
    fn outer(&self, rhs: &Self, op: &'static str, f: impl Fn(T, T) -> Option<T>) -> Result<Self> {
        if self.ndim() != 1 || rhs.ndim() != 1 {
            return Err(Error::shape_mismatch(op, self.shape(), rhs.shape()));
        }
        let layout = Layout::new(&[self.count(), rhs.count()])?;
        let mut storage = Vec::with_capacity(layout.count());
        for &l in self.as_slice() {
            for &r in rhs.as_slice() {
                storage.push(f(l, r).ok_or_else(|| Error::Domain { op }.bt())?);
            }
        }
        Ok(Self::from_layout(layout, storage))
    }

    pub fn add(&self, rhs: &Self) -> Result<Self> {
        self.zip_map(rhs, "add", |l, r| l + r)
    }

    pub fn sub(&self, rhs: &Self) -> Result<Self> {
        self.zip_map(rhs, "sub", |l, r| l - r)
    }

    pub fn mul(&self, rhs: &Self) -> Result<Self> {
        self.zip_map(rhs, "mul", |l, r| l * r)
    }

    /// Fails with `Domain` if an integral divisor is zero.
    pub fn div(&self, rhs: &Self) -> Result<Self> {
        self.layout().ensure_same_shape(rhs.layout(), "div")?;
        let storage = self
            .as_slice()
            .iter()
            .zip(rhs.as_slice())
            .map(|(&l, &r)| l.checked_quotient(r))
            .collect::<Option<Vec<T>>>()
            .ok_or_else(|| Error::Domain { op: "div" }.bt())?;
        Ok(Self::from_layout(self.layout().clone(), storage))
    }

    pub fn add_scalar(&self, v: T) -> Self {
        self.map(|x| x + v)
    }

    pub fn sub_scalar(&self, v: T) -> Self {
        self.map(|x| x - v)
    }

    pub fn mul_scalar(&self, v: T) -> Self {
        self.map(|x| x * v)
    }

    pub fn div_scalar(&self, v: T) -> Result<Self> {
        let storage = self
            .as_slice()
            .iter()
            .map(|&x| x.checked_quotient(v))
            .collect::<Option<Vec<T>>>()
            .ok_or_else(|| Error::Domain { op: "div_scalar" }.bt())?;
        Ok(Self::from_layout(self.layout().clone(), storage))
    }

    pub fn add_transpose(&self, rhs: &Self) -> Result<Self> {
        self.outer(rhs, "add_transpose", |l, r| Some(l + r))
    }

    pub fn sub_transpose(&self, rhs: &Self) -> Result<Self> {
        self.outer(rhs, "sub_transpose", |l, r| Some(l - r))
    }

    pub fn mul_transpose(&self, rhs: &Self) -> Result<Self> {
        self.outer(rhs, "mul_transpose", |l, r| Some(l * r))
    }

    pub fn div_transpose(&self, rhs: &Self) -> Result<Self> {
        self.outer(rhs, "div_transpose", |l, r| l.checked_quotient(r))
    }

    /// Sum over the last dimension, which is dropped from the output shape.
    pub fn sum(&self) -> Result<Self> {
        let shape = self.shape();
        if shape.len() < 2 {
            return Err(Error::shape_mismatch("sum", shape, &[]));
        }
        let last = shape[shape.len() - 1];
        let layout = Layout::new(&shape[..shape.len() - 1])?;
        let storage = self
            .as_slice()
            .chunks_exact(last)
            .map(|row| row.iter().fold(T::ZERO, |acc, &x| acc + x))
            .collect();
        Ok(Self::from_layout(layout, storage))
    }
}

impl<T: FloatDType> StridedArray<T> {
    pub fn scale(&self, factor: T) -> Self {
        self.map(|x| factor * x)
    }

    pub fn power(&self, exp: T) -> Self {
        self.map(|x| x.powf(exp))
    }

    pub fn reciprocal(&self) -> Self {
        self.map(|x| T::ONE / x)
    }
}

macro_rules! binary_op {
    ($trait:ident, $fn:ident) => {
        impl<T: NumericDType> $trait for &StridedArray<T> {
            type Output = Result<StridedArray<T>>;
            fn $fn(self, rhs: Self) -> Self::Output {
                StridedArray::$fn(self, rhs)
            }
        }
    };
}

binary_op!(Add, add);
binary_op!(Mul, mul);
binary_op!(Sub, sub);
binary_op!(Div, div);
