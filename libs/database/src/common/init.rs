use futures::FutureExt;
use futures::future::{BoxFuture, Shared};
use std::future::Future;
use std::sync::Arc;
use tokio::sync::Mutex;

type InFlight<T, E> = Shared<BoxFuture<'static, Result<T, Arc<E>>>>;

/// Deduplicated, retryable lazy initialization of a shared value.
///
/// Concurrent callers racing through [`get_or_try_init`](Self::get_or_try_init)
/// before the value exists converge on a single in-flight initialization
/// future; every caller observes that one attempt's result. A failed attempt
/// is discarded so the next caller starts a fresh one instead of reusing the
/// rejected future.
///
/// This is the primitive behind [`crate::mongodb::ConnectionCache`]; it is
/// generic so the dedup semantics can be tested without a live database.
pub struct InitCache<T, E> {
    state: Mutex<State<T, E>>,
}

struct State<T, E> {
    value: Option<T>,
    inflight: Option<InFlight<T, E>>,
}

impl<T, E> InitCache<T, E>
where
    T: Clone + Send + 'static,
    E: Send + Sync + 'static,
{
    pub fn new() -> Self {
        Self {
            state: Mutex::new(State {
                value: None,
                inflight: None,
            }),
        }
    }

    /// Return the cached value, or initialize it with `init`.
    ///
    /// - Cached value present: returned immediately, `init` is never called.
    /// - Initialization in flight: awaits the existing attempt's result.
    /// - Otherwise: runs `init`, publishing it as the in-flight attempt.
    ///
    /// Errors are wrapped in `Arc` so every waiter on the same attempt can
    /// receive them.
    pub async fn get_or_try_init<F, Fut>(&self, init: F) -> Result<T, Arc<E>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>> + Send + 'static,
    {
        let attempt = {
            let mut state = self.state.lock().await;
            if let Some(value) = &state.value {
                return Ok(value.clone());
            }
            match &state.inflight {
                Some(fut) => fut.clone(),
                None => {
                    let fut: InFlight<T, E> =
                        init().map(|r| r.map_err(Arc::new)).boxed().shared();
                    state.inflight = Some(fut.clone());
                    fut
                }
            }
        };

        // Awaited outside the lock so waiters do not serialize on the mutex.
        let result = attempt.clone().await;

        let mut state = self.state.lock().await;
        if let Ok(value) = &result {
            state.value.get_or_insert_with(|| value.clone());
        }
        // Retire only our own attempt; a racer may already have started a
        // fresh one after observing the failure.
        if let Some(current) = &state.inflight {
            if current.ptr_eq(&attempt) {
                state.inflight = None;
            }
        }

        result
    }

    /// Return the cached value without initializing.
    pub async fn get(&self) -> Option<T> {
        self.state.lock().await.value.clone()
    }

    /// Drop the cached value and any in-flight attempt.
    pub async fn clear(&self) {
        let mut state = self.state.lock().await;
        state.value = None;
        state.inflight = None;
    }
}

impl<T, E> Default for InitCache<T, E>
where
    T: Clone + Send + 'static,
    E: Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}
