//! ndgrid is a small N dimensional array engine with a hand-built parallel compute layer.
//!
//! Arrays are owned, row-major [`StridedArray`]s. Selections are expressed with a same-shaped
//! boolean [`Mask`]. Elementwise transforms and all-pairs distances run in chunks on an explicit
//! [`WorkerPool`], and results are always reassembled in chunk order.
//!
//! Element kinds are checked at compile time: arithmetic needs [`NumericDType`], and
//! `scale`/`power`/`reciprocal`/`cdist` need [`FloatDType`].
//!
//! ## What can you do with it?
//! ```
//! use std::sync::Arc;
//! use ndgrid_core::{
//!     ElementwiseEngine, EngineConfig, Mask, PairwiseDistanceEngine, StridedArray, WorkerPool,
//! };
//!
//! let a = StridedArray::<f64>::from_vec(&[3, 3], (0..9).map(f64::from).collect()).unwrap();
//! assert_eq!(a.sum().unwrap().as_slice(), &[3.0, 12.0, 21.0]);
//!
//! let corner = a.slice(&[0..2, 1..3]).unwrap();
//! assert_eq!(corner.as_slice(), &[1.0, 2.0, 4.0, 5.0]);
//!
//! let mask = Mask::compare(&a, |x| x > 6.0);
//! assert_eq!(mask.nonzero(), vec![vec![2, 1], vec![2, 2]]);
//!
//! let pool = Arc::new(WorkerPool::new(&EngineConfig::default().with_num_threads(2)).unwrap());
//! let elementwise = ElementwiseEngine::with_pool(pool.clone());
//! let doubled = elementwise.apply_unary(&a, 4, |x| 2.0 * x).unwrap();
//! assert_eq!(doubled.get(&[2, 2]).unwrap(), 16.0);
//!
//! let points = StridedArray::<f64>::from_vec(&[2, 3], vec![0., 0., 0., 3., 4., 0.]).unwrap();
//! let origin = StridedArray::<f64>::from_vec(&[1, 3], vec![0., 0., 0.]).unwrap();
//! let dist = PairwiseDistanceEngine::with_pool(pool).cdist(&points, &origin, 2).unwrap();
//! assert_eq!(dist.shape(), &[2, 1]);
//! assert_eq!(dist.as_slice(), &[0.0, 5.0]);
//! ```

mod array;
mod config;
mod dtype;
mod engine;
mod error;
mod layout;
mod mask;

pub use array::StridedArray;
pub use config::{EngineConfig, NUM_THREADS_ENV};
pub use dtype::{DType, FloatDType, NumericDType, RandDispatch, Sqrtable};
pub use engine::{partition, ElementwiseEngine, PairwiseDistanceEngine, WorkerPool};
pub use error::{Error, Result};
pub use layout::{IndicesInOrder, Layout};
pub use mask::Mask;
