use std::ops::Not;

use crate::{
    layout::{IndicesInOrder, Layout},
    DType, Error, Result, StridedArray,
};

/// A boolean overlay with the same shape as the array it selects from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    layout: Layout,
    storage: Vec<bool>,
}

impl Mask {
    /// An all-false mask.
    pub fn new(shape: &[usize]) -> Result<Self> {
        let layout = Layout::new(shape)?;
        let storage = vec![false; layout.count()];
        Ok(Self { layout, storage })
    }

    pub fn from_vec(shape: &[usize], content: Vec<bool>) -> Result<Self> {
        let layout = Layout::new(shape)?;
        if content.len() != layout.count() {
            return Err(Error::size_mismatch(layout.count(), content.len()));
        }
        Ok(Self {
            layout,
            storage: content,
        })
    }

    /// Apply `predicate` to every element of `array`.
    pub fn compare<T: DType>(array: &StridedArray<T>, predicate: impl Fn(T) -> bool) -> Self {
        let storage = array.as_slice().iter().map(|&x| predicate(x)).collect();
        Self {
            layout: array.layout().clone(),
            storage,
        }
    }

    /// Apply `predicate` pairwise to two arrays of the same shape.
    pub fn compare_with<T: DType>(
        lhs: &StridedArray<T>,
        rhs: &StridedArray<T>,
        predicate: impl Fn(T, T) -> bool,
    ) -> Result<Self> {
        lhs.layout().ensure_same_shape(rhs.layout(), "compare")?;
        let storage = lhs
            .as_slice()
            .iter()
            .zip(rhs.as_slice())
            .map(|(&l, &r)| predicate(l, r))
            .collect();
        Ok(Self {
            layout: lhs.layout().clone(),
            storage,
        })
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

    pub fn as_slice(&self) -> &[bool] {
        &self.storage
    }

    pub fn get(&self, indices: &[usize]) -> Result<bool> {
        let index = self.layout.index_from_indices(indices)?;
        Ok(self.storage[index])
    }

    pub fn set(&mut self, indices: &[usize], value: bool) -> Result<()> {
        let index = self.layout.index_from_indices(indices)?;
        self.storage[index] = value;
        Ok(())
    }

    pub fn indices_in_order(&self) -> IndicesInOrder<'_> {
        self.layout.indices_in_order()
    }

    /// Number of selected positions.
    pub fn count_true(&self) -> usize {
        self.storage.iter().filter(|&&s| s).count()
    }

    /// Index vectors of every selected position, row-major.
    pub fn nonzero(&self) -> Vec<Vec<usize>> {
        self.indices_in_order()
            .zip(&self.storage)
            .filter_map(|(idx, &s)| s.then_some(idx))
            .collect()
    }

    fn zip_with(&self, other: &Mask, op: &'static str, f: impl Fn(bool, bool) -> bool) -> Result<Self> {
        self.layout.ensure_same_shape(&other.layout, op)?;
        let storage = self
            .storage
            .iter()
            .zip(&other.storage)
            .map(|(&l, &r)| f(l, r))
            .collect();
        Ok(Self {
            layout: self.layout.clone(),
            storage,
        })
    }

    pub fn logical_and(&self, other: &Mask) -> Result<Self> {
        self.zip_with(other, "logical_and", |l, r| l && r)
    }

    pub fn logical_or(&self, other: &Mask) -> Result<Self> {
        self.zip_with(other, "logical_or", |l, r| l || r)
    }

    pub fn logical_not(&self) -> Self {
        Self {
            layout: self.layout.clone(),
            storage: self.storage.iter().map(|s| !s).collect(),
        }
    }
}

impl Not for &Mask {
    type Output = Mask;

    fn not(self) -> Mask {
        self.logical_not()
    }
}
