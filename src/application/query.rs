use crate::domain::async_data::{AsyncData, AsyncResult};
use crate::domain::ports::QueryClientHandle;
use crate::error::ErrorKind;
use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::watch;
use tracing::debug;

/// Observable lifecycle cell around one query document.
///
/// Starts `NotAsked`. Every `run` moves it to `Loading` immediately and to
/// `Done` once the transport settles. When a newer `run` has started in the
/// meantime, the older settlement is dropped so it never overwrites the newer
/// request's state.
pub struct Query<V, T> {
    client: QueryClientHandle<V, T>,
    state: Arc<watch::Sender<AsyncResult<T, ErrorKind>>>,
    generation: Arc<AtomicU64>,
}

impl<V, T> Query<V, T>
where
    V: Send + 'static,
    T: Clone + Send + Sync + 'static,
{
    pub fn new(client: QueryClientHandle<V, T>) -> Self {
        let (state, _) = watch::channel(AsyncData::NotAsked);
        Self {
            client,
            state: Arc::new(state),
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<AsyncResult<T, ErrorKind>> {
        self.state.subscribe()
    }

    pub fn current(&self) -> AsyncResult<T, ErrorKind> {
        self.state.borrow().clone()
    }

    /// Starts a request. The cell is `Loading` as soon as this returns; the
    /// returned future settles it.
    pub fn run(
        &self,
        variables: V,
    ) -> impl Future<Output = AsyncResult<T, ErrorKind>> + Send + 'static {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.state.send_replace(AsyncData::Loading);
        debug!(generation, "query loading");

        let client = self.client.clone();
        let state = self.state.clone();
        let latest = self.generation.clone();

        async move {
            let done = AsyncData::Done(client.query(variables).await);
            let applied = state.send_if_modified(|current| {
                if latest.load(Ordering::SeqCst) == generation {
                    *current = done.clone();
                    true
                } else {
                    false
                }
            });
            if applied {
                debug!(generation, ok = done.is_ok(), "query settled");
            } else {
                debug!(generation, "superseded query settlement dropped");
            }
            done
        }
    }
}
