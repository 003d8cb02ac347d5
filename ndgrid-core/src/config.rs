/// Environment variable overriding the default worker count.
pub const NUM_THREADS_ENV: &str = "NDGRID_NUM_THREADS";

const DEFAULT_THREAD_NAME: &str = "ndgrid-worker";

/// Construction parameters for a [`crate::WorkerPool`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Number of worker threads in the pool.
    pub num_threads: usize,
    /// Prefix of the worker thread names, suffixed with `-{index}`.
    pub thread_name: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            num_threads: num_cpus::get(),
            thread_name: DEFAULT_THREAD_NAME.to_string(),
        }
    }
}

impl EngineConfig {
    /// The default config, with the worker count taken from
    /// `NDGRID_NUM_THREADS` when it holds a positive integer.
    pub fn from_env() -> Self {
        let config = Self::default();
        match std::env::var(NUM_THREADS_ENV)
            .ok()
            .and_then(|v| v.trim().parse::<usize>().ok())
        {
            Some(n) if n > 0 => config.with_num_threads(n),
            _ => config,
        }
    }

    #[must_use]
    pub fn with_num_threads(mut self, num_threads: usize) -> Self {
        self.num_threads = num_threads.max(1);
        self
    }

    #[must_use]
    pub fn with_thread_name(mut self, thread_name: impl Into<String>) -> Self {
        self.thread_name = thread_name.into();
        self
    }
}
