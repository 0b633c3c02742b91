// ABOUTME: Runs synchronous store I/O on tokio's blocking pool.
// ABOUTME: A task that panics or is cancelled surfaces as a StoreError::Io.

use std::io;

use qaforge_store::StoreError;

/// Run a store operation on the blocking pool and wait for it.
pub(crate) async fn run_blocking<T, F>(op: F) -> Result<T, StoreError>
where
    F: FnOnce() -> Result<T, StoreError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(op)
        .await
        .map_err(|e| StoreError::Io(io::Error::other(e)))?
}
