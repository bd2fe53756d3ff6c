//! Cancellable execution of a single upstream call
//!
//! [`execute`] runs the network exchange on its own task so a deadline or
//! an explicit cancel can preempt it from the caller's flow. Whichever side
//! loses the race is still driven to completion: an aborted caller waits
//! for the background task to finish before returning, so no task, body or
//! connection outlives the call boundary.

use crate::error::SearchError;
use crate::network::UpstreamResponse;
use std::future::Future;
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tokio::time::{sleep_until, Instant};
use tracing::debug;

/// Why an [`AbortSignal`] fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbortReason {
    DeadlineExceeded,
    Canceled,
}

impl From<AbortReason> for SearchError {
    fn from(reason: AbortReason) -> Self {
        match reason {
            AbortReason::DeadlineExceeded => SearchError::DeadlineExceeded,
            AbortReason::Canceled => SearchError::Canceled,
        }
    }
}

/// The trigger half of an abort scope.
///
/// Dropping the handle releases the scope without cancelling it; the
/// deadline keeps counting on its own.
#[derive(Debug, Clone)]
pub struct AbortHandle {
    trigger: watch::Sender<bool>,
}

impl AbortHandle {
    /// Cancel the invocation this handle is scoped to.
    pub fn cancel(&self) {
        let _ = self.trigger.send(true);
    }
}

/// Composite deadline + explicit-cancel signal for one invocation.
///
/// One-shot: a signal belongs to exactly one [`execute`] call and is torn
/// down when that call returns.
#[derive(Debug)]
pub struct AbortSignal {
    deadline: Instant,
    cancelled: watch::Receiver<bool>,
}

impl AbortSignal {
    /// Create a fresh scope with the given time budget.
    pub fn with_timeout(budget: Duration) -> (AbortSignal, AbortHandle) {
        let (trigger, cancelled) = watch::channel(false);
        let signal = AbortSignal {
            deadline: Instant::now() + budget,
            cancelled,
        };
        (signal, AbortHandle { trigger })
    }

    /// Resolve once the signal fires, reporting which trigger won.
    async fn fired(&mut self) -> AbortReason {
        if *self.cancelled.borrow() {
            return AbortReason::Canceled;
        }
        loop {
            tokio::select! {
                _ = sleep_until(self.deadline) => return AbortReason::DeadlineExceeded,
                changed = self.cancelled.changed() => match changed {
                    Ok(()) if *self.cancelled.borrow() => return AbortReason::Canceled,
                    Ok(()) => continue,
                    // Handle dropped: only the deadline can fire now.
                    Err(_) => {
                        sleep_until(self.deadline).await;
                        return AbortReason::DeadlineExceeded;
                    }
                },
            }
        }
    }
}

/// Run one upstream call under an abort signal.
///
/// The call and the handler run together on a spawned task; their combined
/// outcome comes back over a single-slot channel, so the task never blocks
/// on the handoff even when the caller has already returned on the signal
/// branch. The race has two exits:
///
/// - handler first: its outcome is returned as-is and the signal is dropped;
/// - signal first: the signal's reason is returned, but only after the
///   spawned task has been joined, with the signal's error taking precedence
///   over whatever the handler produced.
///
/// Either way the handler runs to completion exactly once.
pub async fn execute<T, C, H>(mut signal: AbortSignal, call: C, handler: H) -> Result<T, SearchError>
where
    T: Send + 'static,
    C: Future<Output = Result<UpstreamResponse, SearchError>> + Send + 'static,
    H: FnOnce(Result<UpstreamResponse, SearchError>) -> Result<T, SearchError> + Send + 'static,
{
    let (tx, mut rx) = mpsc::channel(1);
    let task = tokio::spawn(async move {
        let _ = tx.send(handler(call.await)).await;
    });

    tokio::select! {
        reason = signal.fired() => {
            debug!(?reason, "abort signal fired before the upstream call completed");
            // Drain the in-flight call before surfacing the abort.
            let _ = task.await;
            Err(reason.into())
        }
        outcome = rx.recv() => match outcome {
            Some(result) => result,
            // The sender dropped without a value: the task panicked.
            None => match task.await {
                Err(err) if err.is_panic() => std::panic::resume_unwind(err.into_panic()),
                _ => Err(SearchError::Canceled),
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::Arc;

    fn ok_response() -> Result<UpstreamResponse, SearchError> {
        Ok(UpstreamResponse {
            status: 200,
            text: "{}".to_string(),
        })
    }

    #[tokio::test]
    async fn test_handler_completes_first() {
        let (signal, _abort) = AbortSignal::with_timeout(Duration::from_secs(5));

        let result = execute(signal, async { ok_response() }, |response| {
            response.map(|r| r.status)
        })
        .await;

        assert_eq!(result.unwrap(), 200);
    }

    #[tokio::test]
    async fn test_handler_error_passes_through() {
        let (signal, _abort) = AbortSignal::with_timeout(Duration::from_secs(5));

        let result: Result<u16, _> =
            execute(signal, async { ok_response() }, |_| Err(SearchError::Upstream(503))).await;

        assert!(matches!(result, Err(SearchError::Upstream(503))));
    }

    #[tokio::test]
    async fn test_deadline_wins_but_handler_still_runs() {
        let (signal, _abort) = AbortSignal::with_timeout(Duration::from_millis(20));
        let finished = Arc::new(AtomicBool::new(false));
        let flag = finished.clone();

        let result: Result<u16, _> = execute(
            signal,
            async {
                tokio::time::sleep(Duration::from_millis(80)).await;
                ok_response()
            },
            move |response| {
                flag.store(true, Ordering::SeqCst);
                response.map(|r| r.status)
            },
        )
        .await;

        assert!(matches!(result, Err(SearchError::DeadlineExceeded)));
        // The in-flight call was drained before execute returned.
        assert!(finished.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_explicit_cancel_wins() {
        let (signal, abort) = AbortSignal::with_timeout(Duration::from_secs(5));
        let finished = Arc::new(AtomicBool::new(false));
        let flag = finished.clone();

        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(10)).await;
            abort.cancel();
        });

        let result: Result<u16, _> = execute(
            signal,
            async {
                tokio::time::sleep(Duration::from_millis(60)).await;
                ok_response()
            },
            move |response| {
                flag.store(true, Ordering::SeqCst);
                response.map(|r| r.status)
            },
        )
        .await;

        assert!(matches!(result, Err(SearchError::Canceled)));
        assert!(finished.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_handler_runs_exactly_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();

        let (signal, _abort) = AbortSignal::with_timeout(Duration::from_millis(20));
        let _: Result<(), _> = execute(
            signal,
            async {
                tokio::time::sleep(Duration::from_millis(50)).await;
                ok_response()
            },
            move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok(())
            },
        )
        .await;

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_dropped_handle_leaves_deadline_armed() {
        let (signal, abort) = AbortSignal::with_timeout(Duration::from_millis(20));
        drop(abort);

        let result: Result<u16, _> = execute(
            signal,
            async {
                tokio::time::sleep(Duration::from_millis(80)).await;
                ok_response()
            },
            |response| response.map(|r| r.status),
        )
        .await;

        assert!(matches!(result, Err(SearchError::DeadlineExceeded)));
    }
}
