use std::sync::Arc;

use crate::{layout::Layout, EngineConfig, Error, FloatDType, Result, StridedArray};

use super::{chunk::partition, WorkerPool};

fn euclidean<T: FloatDType>(lhs: &[T], rhs: &[T]) -> T {
    lhs.iter()
        .zip(rhs)
        .fold(T::ZERO, |acc, (&l, &r)| {
            let d = l - r;
            acc + d * d
        })
        .sqrt()
}

/// All-pairs Euclidean distances between the tuples (last dimension) of two
/// arrays.
#[derive(Debug, Clone)]
pub struct PairwiseDistanceEngine {
    pool: Arc<WorkerPool>,
}

impl PairwiseDistanceEngine {
    pub fn new(config: &EngineConfig) -> Result<Self> {
        Ok(Self::with_pool(Arc::new(WorkerPool::new(config)?)))
    }

    pub fn with_pool(pool: Arc<WorkerPool>) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &Arc<WorkerPool> {
        &self.pool
    }

    /// Distance between every tuple of `a` and every tuple of `b`.
    ///
    /// The output shape is the leading shape of `a` followed by the leading
    /// shape of `b` (`[1]` if both are 1-D), with `a`'s tuples outermost.
    ///
    /// The larger operand is split into `num_chunks` chunks and each tuple of
    /// the smaller operand is held fixed against them in turn, one batch per
    /// fixed tuple. When `a` is the larger side the distances come out
    /// `b`-major and are transposed back before returning.
    pub fn cdist<T: FloatDType>(
        &self,
        a: &StridedArray<T>,
        b: &StridedArray<T>,
        num_chunks: usize,
    ) -> Result<StridedArray<T>> {
        let (a_shape, b_shape) = (a.shape(), b.shape());
        let width = a_shape[a_shape.len() - 1];
        let b_width = b_shape[b_shape.len() - 1];
        if width != b_width {
            return Err(Error::LastDimensionMismatch {
                lhs: width,
                rhs: b_width,
            }
            .bt());
        }

        let mut out_shape: Vec<usize> = a_shape[..a_shape.len() - 1].to_vec();
        out_shape.extend_from_slice(&b_shape[..b_shape.len() - 1]);
        if out_shape.is_empty() {
            out_shape.push(1);
        }
        let layout = Layout::new(&out_shape)?;

        let (a_tuples, b_tuples) = (a.count() / width, b.count() / width);
        let reverse = a_tuples > b_tuples;
        let (fixed, chunked) = if reverse {
            (b.as_slice(), a.as_slice())
        } else {
            (a.as_slice(), b.as_slice())
        };
        let (n_fixed, n_chunked) = (fixed.len() / width, chunked.len() / width);
        let chunks = partition(n_chunked, num_chunks);
        tracing::debug!(
            a_tuples,
            b_tuples,
            width,
            chunks = chunks.len(),
            reverse,
            "dispatching cdist"
        );

        let mut computed = Vec::with_capacity(a_tuples * b_tuples);
        for group in 0..n_fixed {
            let tuple = &fixed[group * width..(group + 1) * width];
            let blocks = self.pool.run_indexed(chunks.len(), |idx| {
                Ok(chunks[idx]
                    .clone()
                    .map(|t| euclidean(tuple, &chunked[t * width..(t + 1) * width]))
                    .collect::<Vec<T>>())
            })?;
            tracing::trace!(group, "cdist group complete");
            for block in blocks {
                computed.extend(block);
            }
        }

        // computed[b * a_tuples + a] holds the distance of (a, b) when reversed.
        let distances = if reverse {
            (0..a_tuples)
                .flat_map(|ai| (0..b_tuples).map(move |bi| (ai, bi)))
                .map(|(ai, bi)| computed[bi * a_tuples + ai])
                .collect()
        } else {
            computed
        };
        if distances.len() != layout.count() {
            return Err(Error::size_mismatch(layout.count(), distances.len()));
        }
        Ok(StridedArray::from_layout(layout, distances))
    }
}
