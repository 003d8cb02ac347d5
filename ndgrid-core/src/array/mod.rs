use std::ops::Range;

use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::{
    bail,
    layout::{IndicesInOrder, Layout},
    DType, Error, FloatDType, Mask, Result,
};

mod ops;

/// An owned, row-major N dimensional array.
///
/// The flat buffer always holds exactly `count()` elements and is never
/// shared with another array; slicing copies.
#[derive(Debug, Clone, PartialEq)]
pub struct StridedArray<T: DType> {
    layout: Layout,
    storage: Vec<T>,
}

impl<T: DType> StridedArray<T> {
    /// Create an array of the given shape filled with `T::ZERO`.
    pub fn new(shape: &[usize]) -> Result<Self> {
        Self::full(shape, T::ZERO)
    }

    /// Create an array filled with some value.
    pub fn full(shape: &[usize], v: T) -> Result<Self> {
        let layout = Layout::new(shape)?;
        let storage = vec![v; layout.count()];
        Ok(Self { layout, storage })
    }

    /// Wrap a row-major buffer. Its length must equal the product of `shape`.
    pub fn from_vec(shape: &[usize], content: Vec<T>) -> Result<Self> {
        let layout = Layout::new(shape)?;
        if content.len() != layout.count() {
            return Err(Error::size_mismatch(layout.count(), content.len()));
        }
        Ok(Self {
            layout,
            storage: content,
        })
    }

    pub(crate) fn from_layout(layout: Layout, storage: Vec<T>) -> Self {
        debug_assert_eq!(layout.count(), storage.len());
        Self { layout, storage }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn shape(&self) -> &[usize] {
        self.layout.shape()
    }

    pub fn strides(&self) -> &[usize] {
        self.layout.strides()
    }

    pub fn count(&self) -> usize {
        self.layout.count()
    }

    pub fn ndim(&self) -> usize {
        self.layout.ndim()
    }

    /// The flat row-major buffer.
    pub fn as_slice(&self) -> &[T] {
        &self.storage
    }

    pub fn into_vec(self) -> Vec<T> {
        self.storage
    }

    pub fn indices_from_index(&self, index: usize) -> Result<Vec<usize>> {
        self.layout.indices_from_index(index)
    }

    pub fn index_from_indices(&self, indices: &[usize]) -> Result<usize> {
        self.layout.index_from_indices(indices)
    }

    pub fn indices_in_order(&self) -> IndicesInOrder<'_> {
        self.layout.indices_in_order()
    }

    pub fn get(&self, indices: &[usize]) -> Result<T> {
        let index = self.layout.index_from_indices(indices)?;
        Ok(self.storage[index])
    }

    pub fn set(&mut self, indices: &[usize], value: T) -> Result<()> {
        let index = self.layout.index_from_indices(indices)?;
        self.storage[index] = value;
        Ok(())
    }

    /// Flat runs covered by `ranges`, see [`Layout::slice_runs`].
    pub fn slice_runs(&self, ranges: &[Range<usize>]) -> Result<Vec<Range<usize>>> {
        self.layout.slice_runs(ranges)
    }

    /// Copy the sub-box selected by one half-open range per dimension.
    pub fn slice(&self, ranges: &[Range<usize>]) -> Result<Self> {
        let runs = self.slice_runs(ranges).map_err(Error::slice)?;
        let shape: Vec<usize> = ranges.iter().map(|r| r.len()).collect();
        let layout = Layout::new(&shape).map_err(Error::slice)?;

        let mut buffer = Vec::with_capacity(layout.count());
        for run in runs {
            buffer.extend_from_slice(&self.storage[run]);
        }
        if buffer.len() != layout.count() {
            return Err(Error::slice(Error::size_mismatch(
                layout.count(),
                buffer.len(),
            )));
        }
        Ok(Self::from_layout(layout, buffer))
    }

    pub fn fill(&mut self, v: T) {
        self.storage.iter_mut().for_each(|x| *x = v);
    }

    pub fn zeros(&mut self) {
        self.fill(T::ZERO)
    }

    pub fn ones(&mut self) {
        self.fill(T::ONE)
    }

    /// Fill with uniform values in `[lower, upper)` drawn from the thread rng.
    pub fn random(&mut self, lower: f64, upper: f64) -> Result<()> {
        self.random_with(&mut rand::thread_rng(), lower, upper)
    }

    pub fn random_with<R: Rng + ?Sized>(&mut self, rng: &mut R, lower: f64, upper: f64) -> Result<()> {
        T::fill_with_uniform(rng, &mut self.storage, lower, upper)
    }

    /// Write `value` at every `[i, i]` of a square matrix.
    pub fn set_diagonal(&mut self, value: T) -> Result<()> {
        let shape = self.shape();
        if shape.len() != 2 || shape[0] != shape[1] {
            return Err(Error::shape_mismatch("set_diagonal", shape, &[]));
        }
        let step = self.strides()[0] + 1;
        self.storage
            .iter_mut()
            .step_by(step)
            .for_each(|x| *x = value);
        Ok(())
    }

    /// Index vectors and values at every true position of `mask`, row-major.
    pub fn apply_mask(&self, mask: &Mask) -> Result<(Vec<Vec<usize>>, Vec<T>)> {
        self.layout.ensure_same_shape(mask.layout(), "apply_mask")?;
        let mut indices = Vec::new();
        let mut values = Vec::new();
        for ((idx, &selected), &v) in self
            .indices_in_order()
            .zip(mask.as_slice())
            .zip(&self.storage)
        {
            if selected {
                indices.push(idx);
                values.push(v);
            }
        }
        Ok((indices, values))
    }

    /// Overwrite every true position of `mask` with `value`.
    pub fn set_for_mask(&mut self, mask: &Mask, value: T) -> Result<()> {
        self.layout.ensure_same_shape(mask.layout(), "set_for_mask")?;
        for (x, &selected) in self.storage.iter_mut().zip(mask.as_slice()) {
            if selected {
                *x = value;
            }
        }
        Ok(())
    }

    /// Overwrite every true position of `mask` with the element of `other` at
    /// the same position.
    pub fn set_from_mask(&mut self, mask: &Mask, other: &StridedArray<T>) -> Result<()> {
        self.layout.ensure_same_shape(mask.layout(), "set_from_mask")?;
        self.layout.ensure_same_shape(&other.layout, "set_from_mask")?;
        for ((x, &selected), &v) in self
            .storage
            .iter_mut()
            .zip(mask.as_slice())
            .zip(&other.storage)
        {
            if selected {
                *x = v;
            }
        }
        Ok(())
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.storage
    }
}

impl<T: FloatDType> StridedArray<T> {
    /// Fill with samples from a normal distribution. `std` must be finite and
    /// non-negative.
    pub fn random_normal(&mut self, mean: f64, std: f64) -> Result<()> {
        self.random_normal_with(&mut rand::thread_rng(), mean, std)
    }

    pub fn random_normal_with<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        mean: f64,
        std: f64,
    ) -> Result<()> {
        if !(std >= 0.0 && std.is_finite()) {
            bail!(
                "random_normal: standard deviation must be finite and non-negative, got {}",
                std
            );
        }
        let normal = Normal::new(mean, std).map_err(Error::msg)?;
        for x in self.storage.iter_mut() {
            *x = T::from_f64(normal.sample(rng));
        }
        Ok(())
    }
}
