use crate::fetch::{FetchError, FetchState};
use std::{
    future::Future,
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
};
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// One fetch operation's state machine: `Idle → Loading → {Ready, Failed}`,
/// re-entering `Loading` whenever the input fingerprint changes.
///
/// Only the most recently triggered fetch may publish a terminal state. A
/// superseded fetch is cancelled outright, and a resolution that races past
/// the cancellation is rejected by a generation check, so the machine is
/// last-triggered-wins rather than last-resolved-wins.
pub struct FetchLifecycle<I, T> {
    fingerprint: Option<I>,
    generation: Arc<AtomicU64>,
    in_flight: Option<CancellationToken>,
    state: watch::Sender<FetchState<T>>,
}

impl<I, T> FetchLifecycle<I, T>
where
    I: PartialEq,
    T: Clone + Send + Sync + 'static,
{
    #[must_use]
    pub fn new() -> Self {
        let (state, _) = watch::channel(FetchState::Idle);
        Self {
            fingerprint: None,
            generation: Arc::new(AtomicU64::new(0)),
            in_flight: None,
            state,
        }
    }

    #[must_use]
    pub fn state(&self) -> FetchState<T> {
        self.state.borrow().clone()
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<FetchState<T>> {
        self.state.subscribe()
    }

    /// Starts `fetch`, unless `input` equals the current fingerprint, in
    /// which case nothing happens and the in-flight or terminal state stays.
    pub fn trigger<F>(&mut self, input: I, fetch: F)
    where
        F: Future<Output = Result<T, FetchError>> + Send + 'static,
    {
        if self.fingerprint.as_ref() == Some(&input) {
            return;
        }
        self.fingerprint = Some(input);

        let generation = self.generation.fetch_add(1, Ordering::AcqRel) + 1;
        if let Some(superseded) = self.in_flight.take() {
            superseded.cancel();
        }
        let token = CancellationToken::new();
        self.in_flight = Some(token.clone());

        self.state.send_replace(FetchState::Loading);

        let current = Arc::clone(&self.generation);
        let state = self.state.clone();
        tokio::spawn(async move {
            let outcome = tokio::select! {
                () = token.cancelled() => {
                    debug!(generation, "Fetch superseded before resolution");
                    return;
                }
                outcome = fetch => outcome,
            };

            let next = match outcome {
                Ok(value) => FetchState::Ready(value),
                Err(error) => FetchState::Failed(error),
            };

            // The generation check runs under the channel lock, so a stale
            // resolution can never overwrite a newer trigger's state.
            state.send_if_modified(|slot| {
                if current.load(Ordering::Acquire) == generation {
                    *slot = next;
                    true
                } else {
                    debug!(generation, "Discarding a stale fetch resolution");
                    false
                }
            });
        });
    }
}

impl<I, T> Default for FetchLifecycle<I, T>
where
    I: PartialEq,
    T: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}
