use crate::domain::deferred::Deferred;
use crate::domain::notification::Notification;
use crate::domain::payment::InitiateCreditTransfersData;
use crate::domain::ports::{Navigator, Notifier, QueryClient, TransferMutation};
use crate::domain::route::Route;
use crate::domain::transfer::TransferRequest;
use crate::error::ErrorKind;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Mutation port answering from a queue of prepared responses.
///
/// Records every request it receives. Runs out with an internal error.
#[derive(Default)]
pub struct ScriptedMutation {
    responses: Mutex<VecDeque<Result<InitiateCreditTransfersData, ErrorKind>>>,
    requests: Mutex<Vec<TransferRequest>>,
}

impl ScriptedMutation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, response: Result<InitiateCreditTransfersData, ErrorKind>) {
        lock(&self.responses).push_back(response);
    }

    pub fn requests(&self) -> Vec<TransferRequest> {
        lock(&self.requests).clone()
    }
}

impl TransferMutation for ScriptedMutation {
    fn initiate_credit_transfers(
        &self,
        input: TransferRequest,
    ) -> Deferred<InitiateCreditTransfersData, ErrorKind> {
        lock(&self.requests).push(input);
        let response = lock(&self.responses)
            .pop_front()
            .unwrap_or_else(|| Err(ErrorKind::Internal("no scripted response left".to_string())));
        Deferred::ready(response)
    }
}

/// Query port settling every request with the same result.
pub struct StaticQuery<T> {
    result: Result<T, ErrorKind>,
    calls: Mutex<usize>,
}

impl<T> StaticQuery<T> {
    pub fn new(result: Result<T, ErrorKind>) -> Self {
        Self {
            result,
            calls: Mutex::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        *lock(&self.calls)
    }
}

#[async_trait]
impl<V, T> QueryClient<V, T> for StaticQuery<T>
where
    V: Send + 'static,
    T: Clone + Send + Sync,
{
    async fn query(&self, _variables: V) -> Result<T, ErrorKind> {
        *lock(&self.calls) += 1;
        self.result.clone()
    }
}

/// Navigator that remembers where it was sent.
pub struct RecordingNavigator {
    origin: String,
    replaced: Mutex<Vec<Route>>,
    assigned: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn new(origin: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            replaced: Mutex::new(Vec::new()),
            assigned: Mutex::new(Vec::new()),
        }
    }

    pub fn replaced(&self) -> Vec<Route> {
        lock(&self.replaced).clone()
    }

    pub fn assigned(&self) -> Vec<String> {
        lock(&self.assigned).clone()
    }
}

impl Navigator for RecordingNavigator {
    fn origin(&self) -> String {
        self.origin.clone()
    }

    fn replace(&self, route: Route) {
        lock(&self.replaced).push(route);
    }

    fn assign(&self, url: &str) {
        lock(&self.assigned).push(url.to_string());
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    shown: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shown(&self) -> Vec<Notification> {
        lock(&self.shown).clone()
    }
}

impl Notifier for RecordingNotifier {
    fn show(&self, notification: Notification) {
        lock(&self.shown).push(notification);
    }
}
