//! Bounded-concurrency driver shared by the export and import phases.
//!
//! Invariants:
//! - At most `limit` futures are in flight; a limit of 0 is treated as 1.
//! - A slot is refilled as soon as any in-flight future completes, so a
//!   fast item never waits behind a slow one.
//! - Everything runs on the calling task; nothing is spawned.
//! - Outputs arrive in completion order. Callers that need configuration
//!   order must carry an index and sort.

use std::future::Future;

use futures::stream::{self, StreamExt};

/// Run `task` for every item with at most `limit` futures in flight.
pub async fn run_bounded<I, T, F, Fut>(items: I, limit: usize, task: F) -> Vec<Fut::Output>
where
    I: IntoIterator<Item = T>,
    F: FnMut(T) -> Fut,
    Fut: Future,
{
    stream::iter(items)
        .map(task)
        .buffer_unordered(limit.max(1))
        .collect()
        .await
}
