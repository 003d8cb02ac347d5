use std::{ops::Range, sync::Arc};

use crate::{DType, EngineConfig, Error, Result, StridedArray};

use super::{chunk::partition, WorkerPool};

/// Chunked, parallel elementwise transforms over the flat buffer of an array.
#[derive(Debug, Clone)]
pub struct ElementwiseEngine {
    pool: Arc<WorkerPool>,
}

impl ElementwiseEngine {
    pub fn new(config: &EngineConfig) -> Result<Self> {
        Ok(Self::with_pool(Arc::new(WorkerPool::new(config)?)))
    }

    /// Share an existing pool, e.g. with a [`crate::PairwiseDistanceEngine`].
    pub fn with_pool(pool: Arc<WorkerPool>) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &Arc<WorkerPool> {
        &self.pool
    }

    pub fn apply_unary<T, F>(
        &self,
        a: &StridedArray<T>,
        num_chunks: usize,
        op: F,
    ) -> Result<StridedArray<T>>
    where
        T: DType,
        F: Fn(T) -> T + Sync,
    {
        self.try_apply_unary(a, num_chunks, |x| Ok(op(x)))
    }

    /// Like [`Self::apply_unary`], but the transform may fail. The error of the
    /// lowest failing chunk is returned and no array is produced.
    pub fn try_apply_unary<T, F>(
        &self,
        a: &StridedArray<T>,
        num_chunks: usize,
        op: F,
    ) -> Result<StridedArray<T>>
    where
        T: DType,
        F: Fn(T) -> Result<T> + Sync,
    {
        let src = a.as_slice();
        let chunks = partition(src.len(), num_chunks);
        tracing::debug!(
            len = src.len(),
            chunks = chunks.len(),
            dtype = T::NAME,
            "dispatching unary batch"
        );
        let blocks = self.pool.run_indexed(chunks.len(), |idx| {
            src[chunks[idx].clone()]
                .iter()
                .map(|&x| op(x))
                .collect::<Result<Vec<T>>>()
        })?;
        Ok(StridedArray::from_layout(a.layout().clone(), blocks.concat()))
    }

    pub fn apply_binary<T, F>(
        &self,
        a: &StridedArray<T>,
        b: &StridedArray<T>,
        num_chunks: usize,
        op: F,
    ) -> Result<StridedArray<T>>
    where
        T: DType,
        F: Fn(T, T) -> T + Sync,
    {
        self.try_apply_binary(a, b, num_chunks, |l, r| Ok(op(l, r)))
    }

    pub fn try_apply_binary<T, F>(
        &self,
        a: &StridedArray<T>,
        b: &StridedArray<T>,
        num_chunks: usize,
        op: F,
    ) -> Result<StridedArray<T>>
    where
        T: DType,
        F: Fn(T, T) -> Result<T> + Sync,
    {
        a.layout().ensure_same_shape(b.layout(), "apply_binary")?;
        let (lhs, rhs) = (a.as_slice(), b.as_slice());
        let chunks = partition(lhs.len(), num_chunks);
        tracing::debug!(
            len = lhs.len(),
            chunks = chunks.len(),
            dtype = T::NAME,
            "dispatching binary batch"
        );
        let blocks = self.pool.run_indexed(chunks.len(), |idx| {
            let chunk = chunks[idx].clone();
            lhs[chunk.clone()]
                .iter()
                .zip(&rhs[chunk])
                .map(|(&l, &r)| op(l, r))
                .collect::<Result<Vec<T>>>()
        })?;
        Ok(StridedArray::from_layout(a.layout().clone(), blocks.concat()))
    }

    /// In place `a[box] = op(a[box], b)` for the sub-box of `a` selected by
    /// `ranges`; `b` must have the shape of the sub-box. Runs on the calling
    /// thread, one contiguous run at a time.
    pub fn apply_binary_in_slice<T, F>(
        &self,
        a: &mut StridedArray<T>,
        ranges: &[Range<usize>],
        b: &StridedArray<T>,
        op: F,
    ) -> Result<()>
    where
        T: DType,
        F: Fn(T, T) -> T,
    {
        let runs = a.slice_runs(ranges)?;
        let box_shape: Vec<usize> = ranges.iter().map(|r| r.len()).collect();
        if box_shape != b.shape() {
            return Err(Error::shape_mismatch(
                "apply_binary_in_slice",
                &box_shape,
                b.shape(),
            ));
        }

        let rhs = b.as_slice();
        let dst = a.as_mut_slice();
        let mut accum = 0;
        for run in runs {
            let len = run.len();
            for (x, &r) in dst[run].iter_mut().zip(&rhs[accum..accum + len]) {
                *x = op(*x, r);
            }
            accum += len;
        }
        Ok(())
    }
}
