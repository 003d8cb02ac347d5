use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::{bail, EngineConfig, Result};

/// A fixed-size set of worker threads executing indexed batches of tasks.
///
/// Every task of a batch owns exactly one result slot, so no state is shared
/// between workers and results are recovered by task index, never by the
/// order in which workers finish.
pub struct WorkerPool {
    pool: ThreadPool,
}

impl WorkerPool {
    pub fn new(config: &EngineConfig) -> Result<Self> {
        let prefix = config.thread_name.clone();
        let pool = ThreadPoolBuilder::new()
            .num_threads(config.num_threads.max(1))
            .thread_name(move |i| format!("{prefix}-{i}"))
            .build()?;
        tracing::debug!(
            num_threads = pool.current_num_threads(),
            thread_name = %config.thread_name,
            "built worker pool"
        );
        Ok(Self { pool })
    }

    pub fn num_threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Run `task(0) .. task(n_tasks - 1)` concurrently and block until all of
    /// them are done. The results are returned in task index order; the first
    /// failing task (by index) fails the batch.
    pub fn run_indexed<R, F>(&self, n_tasks: usize, task: F) -> Result<Vec<R>>
    where
        R: Send,
        F: Fn(usize) -> Result<R> + Sync,
    {
        let mut slots: Vec<Option<Result<R>>> = Vec::with_capacity(n_tasks);
        slots.resize_with(n_tasks, || None);

        let task = &task;
        self.pool.scope(|s| {
            for (idx, slot) in slots.iter_mut().enumerate() {
                s.spawn(move |_| *slot = Some(task(idx)));
            }
        });

        let mut results = Vec::with_capacity(n_tasks);
        for (idx, slot) in slots.into_iter().enumerate() {
            match slot {
                Some(res) => results.push(res?),
                None => bail!("task {} finished without a result", idx),
            }
        }
        Ok(results)
    }
}

impl std::fmt::Debug for WorkerPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorkerPool")
            .field("num_threads", &self.num_threads())
            .finish()
    }
}
