use super::deferred::Deferred;
use super::notification::Notification;
use super::payment::InitiateCreditTransfersData;
use super::route::Route;
use super::transfer::TransferRequest;
use crate::error::ErrorKind;
use async_trait::async_trait;
use std::sync::Arc;

/// Executes the `initiateCreditTransfers` mutation.
pub trait TransferMutation: Send + Sync {
    fn initiate_credit_transfers(
        &self,
        input: TransferRequest,
    ) -> Deferred<InitiateCreditTransfersData, ErrorKind>;
}

/// Executes one query document with variables `V`, settling to `T`.
#[async_trait]
pub trait QueryClient<V, T>: Send + Sync {
    async fn query(&self, variables: V) -> Result<T, ErrorKind>;
}

pub trait Navigator: Send + Sync {
    /// Origin of the running dashboard, e.g. `https://bank.example`.
    fn origin(&self) -> String;
    /// In-app navigation that replaces the current history entry.
    fn replace(&self, route: Route);
    /// Full redirect to an external URL. The current view is abandoned.
    fn assign(&self, url: &str);
}

pub trait Notifier: Send + Sync {
    fn show(&self, notification: Notification);
}

pub trait ErrorTranslator: Send + Sync {
    fn translate(&self, error: &ErrorKind) -> String;
}

pub type TransferMutationHandle = Arc<dyn TransferMutation>;
pub type QueryClientHandle<V, T> = Arc<dyn QueryClient<V, T>>;
pub type NavigatorHandle = Arc<dyn Navigator>;
pub type NotifierHandle = Arc<dyn Notifier>;
pub type ErrorTranslatorHandle = Arc<dyn ErrorTranslator>;
