use std::ops::Range;

use crate::{Error, Result};

/// Compute default (contiguous) strides for a tensor of given shape, along with
/// the element count. `None` if the count does not fit in `usize`.
pub(crate) fn contiguous_strides(shape: &[usize]) -> Option<(Vec<usize>, usize)> {
    let mut strides = Vec::with_capacity(shape.len());
    let mut acc: usize = 1;
    // Iterate dims in reverse to accumulate products
    for dim in shape.iter().rev() {
        strides.push(acc);
        acc = acc.checked_mul(*dim)?;
    }
    strides.reverse();
    Some((strides, acc))
}

/// Row-major shape bookkeeping shared by [`crate::StridedArray`] and [`crate::Mask`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Layout {
    shape: Vec<usize>,
    strides: Vec<usize>,
    count: usize,
}

impl Layout {
    /// Shapes must have at least one dimension, no zero-sized dimension, and an
    /// element count that fits in `usize`.
    pub fn new(shape: &[usize]) -> Result<Self> {
        if shape.is_empty() || shape.contains(&0) {
            return Err(Error::shape_mismatch("layout", shape, &[]));
        }
        let (strides, count) = contiguous_strides(shape)
            .ok_or_else(|| Error::shape_mismatch("layout", shape, &[]))?;
        Ok(Self {
            shape: shape.to_vec(),
            strides,
            count,
        })
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    pub fn strides(&self) -> &[usize] {
        &self.strides
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    /// Fails with `ShapeMismatch` unless both layouts have the same shape.
    pub(crate) fn ensure_same_shape(&self, other: &Layout, op: &'static str) -> Result<()> {
        if self.shape != other.shape {
            return Err(Error::shape_mismatch(op, &self.shape, &other.shape));
        }
        Ok(())
    }

    /// Decompose a flat offset into per-dimension indices, most significant first.
    pub fn indices_from_index(&self, index: usize) -> Result<Vec<usize>> {
        if index >= self.count {
            return Err(Error::invalid_index(index, self.count));
        }
        let mut remainder = index;
        let indices = self
            .strides
            .iter()
            .map(|stride| {
                let idx = remainder / stride;
                remainder -= idx * stride;
                idx
            })
            .collect();
        Ok(indices)
    }

    pub fn index_from_indices(&self, indices: &[usize]) -> Result<usize> {
        if indices.len() != self.shape.len() {
            return Err(Error::shape_mismatch("index", &self.shape, indices));
        }
        let mut index = 0;
        for ((&idx, &size), &stride) in indices.iter().zip(&self.shape).zip(&self.strides) {
            if idx >= size {
                return Err(Error::invalid_index(idx, size));
            }
            index += idx * stride;
        }
        if index >= self.count {
            return Err(Error::size_mismatch(self.count, index));
        }
        Ok(index)
    }

    /// Every index vector in row-major order.
    pub fn indices_in_order(&self) -> IndicesInOrder<'_> {
        IndicesInOrder {
            shape: &self.shape,
            current: vec![0; self.shape.len()],
            remaining: self.count,
        }
    }

    /// The flat spans covered by a box of per-dimension ranges, coalesced into
    /// maximal contiguous runs in ascending order.
    pub fn slice_runs(&self, ranges: &[Range<usize>]) -> Result<Vec<Range<usize>>> {
        if ranges.len() != self.shape.len() {
            let lens: Vec<usize> = ranges.iter().map(|r| r.len()).collect();
            return Err(Error::shape_mismatch("slice", &self.shape, &lens));
        }
        for (range, &size) in ranges.iter().zip(&self.shape) {
            if range.is_empty() {
                return Err(Error::invalid_index(range.start, range.end));
            }
            if range.end > size {
                return Err(Error::invalid_index(range.end, size));
            }
        }

        let mut offsets: Vec<usize> = ranges[0].clone().map(|i| i * self.strides[0]).collect();
        for (range, &stride) in ranges.iter().zip(&self.strides).skip(1) {
            let mut refined = Vec::with_capacity(offsets.len() * range.len());
            for offset in &offsets {
                refined.extend(range.clone().map(|i| offset + i * stride));
            }
            offsets = refined;
        }

        let mut runs = Vec::new();
        let mut current = offsets[0]..offsets[0] + 1;
        for &offset in &offsets[1..] {
            if offset == current.end {
                current.end += 1;
            } else {
                runs.push(current);
                current = offset..offset + 1;
            }
        }
        runs.push(current);
        Ok(runs)
    }
}

/// Mixed-radix odometer over the index space of a shape, last dimension fastest.
pub struct IndicesInOrder<'a> {
    shape: &'a [usize],
    current: Vec<usize>,
    remaining: usize,
}

impl Iterator for IndicesInOrder<'_> {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let out = self.current.clone();
        for pos in (0..self.shape.len()).rev() {
            self.current[pos] += 1;
            if self.current[pos] < self.shape[pos] {
                break;
            }
            self.current[pos] = 0;
        }
        Some(out)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for IndicesInOrder<'_> {}
