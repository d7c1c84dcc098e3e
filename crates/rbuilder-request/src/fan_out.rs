//! Parallel execution of independent requests.

use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc;
use std::thread;

use tracing::{debug, debug_span, warn};

use crate::error::{Result, TransportError};
use crate::request::Request;

/// Execute every request concurrently, one thread each, and return the
/// outcomes in input order.
///
/// A failing request does not affect the others. A request that panics
/// yields a transport error in its own slot.
pub fn execute_all<T, I>(requests: I) -> Vec<Result<T>>
where
    I: IntoIterator<Item = Request<T>>,
    T: Send,
{
    let requests: Vec<Request<T>> = requests.into_iter().collect();
    let count = requests.len();
    let span = debug_span!("request.fan_out", count);
    let _guard = span.enter();

    let (tx, rx) = mpsc::channel();
    thread::scope(|scope| {
        for (index, request) in requests.into_iter().enumerate() {
            let tx = tx.clone();
            let span = &span;
            scope.spawn(move || {
                let outcome = span.in_scope(|| {
                    panic::catch_unwind(AssertUnwindSafe(|| request.object())).unwrap_or_else(
                        |_| {
                            warn!(index, "request panicked");
                            Err(TransportError::other("request panicked").into())
                        },
                    )
                });
                // The receiver outlives the scope.
                let _ = tx.send((index, outcome));
            });
        }
    });
    drop(tx);

    let mut outcomes: Vec<(usize, Result<T>)> = rx.into_iter().collect();
    outcomes.sort_by_key(|(index, _)| *index);
    let failures = outcomes.iter().filter(|(_, outcome)| outcome.is_err()).count();
    debug!(count, failures, "fan-out complete");

    outcomes.into_iter().map(|(_, outcome)| outcome).collect()
}

/// [`execute_all`], keeping only the successful payloads in input order.
pub fn execute_all_successful<T, I>(requests: I) -> Vec<T>
where
    I: IntoIterator<Item = Request<T>>,
    T: Send,
{
    execute_all(requests).into_iter().filter_map(Result::ok).collect()
}
