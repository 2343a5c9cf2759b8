//! Runtime utilities for CPU and parallelism detection.

use anyhow::{Context, Result};
use tracing::{debug, warn};

/// Get number of available CPU cores.
///
/// Returns the number of available parallelism units (typically CPU cores),
/// falling back to 4 if detection fails.
pub fn num_cpus() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(4)
}

/// Run `f` inside a dedicated rayon pool of `threads` workers.
///
/// Parallel iterators started from `f` use this pool instead of the global one.
pub fn run_in_pool<T, F>(threads: usize, f: F) -> Result<T>
where
    F: FnOnce() -> Result<T> + Send,
    T: Send,
{
    if threads == 0 {
        anyhow::bail!("threads must be at least 1");
    }
    if threads > num_cpus() {
        warn!(threads, cpus = num_cpus(), "more threads requested than CPUs available");
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .context("Failed to build thread pool")?;

    debug!(threads, "running in dedicated pool");
    pool.install(f)
}
