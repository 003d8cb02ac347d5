//! Chunked parallel execution on top of a [`WorkerPool`].

mod cdist;
mod chunk;
mod elementwise;
mod pool;

pub use cdist::PairwiseDistanceEngine;
pub use chunk::partition;
pub use elementwise::ElementwiseEngine;
pub use pool::WorkerPool;
