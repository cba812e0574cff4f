use futures::future::{BoxFuture, FutureExt};
use std::future::{Future, IntoFuture};

/// A pending `Result` with combinators applied once it settles.
///
/// Mutation ports hand one of these back; callers chain transformations and
/// taps and finally `.await` it.
pub struct Deferred<T, E> {
    inner: BoxFuture<'static, Result<T, E>>,
}

impl<T, E> Deferred<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    pub fn new<F>(future: F) -> Self
    where
        F: Future<Output = Result<T, E>> + Send + 'static,
    {
        Self {
            inner: future.boxed(),
        }
    }

    /// An already settled value.
    pub fn ready(result: Result<T, E>) -> Self {
        Self::new(futures::future::ready(result))
    }

    pub fn map_ok<U, F>(self, f: F) -> Deferred<U, E>
    where
        U: Send + 'static,
        F: FnOnce(T) -> U + Send + 'static,
    {
        Deferred::new(self.inner.map(|result| result.map(f)))
    }

    /// Chains a fallible transformation of the success value.
    pub fn and_then_result<U, F>(self, f: F) -> Deferred<U, E>
    where
        U: Send + 'static,
        F: FnOnce(T) -> Result<U, E> + Send + 'static,
    {
        Deferred::new(self.inner.map(|result| result.and_then(f)))
    }

    pub fn map_err<E2, F>(self, f: F) -> Deferred<T, E2>
    where
        E2: Send + 'static,
        F: FnOnce(E) -> E2 + Send + 'static,
    {
        Deferred::new(self.inner.map(|result| result.map_err(f)))
    }

    /// Observes the success value without altering it.
    pub fn tap_ok<F>(self, f: F) -> Self
    where
        F: FnOnce(&T) + Send + 'static,
    {
        Self::new(self.inner.map(|result| {
            if let Ok(value) = &result {
                f(value);
            }
            result
        }))
    }

    /// Observes the error without altering it.
    pub fn tap_error<F>(self, f: F) -> Self
    where
        F: FnOnce(&E) + Send + 'static,
    {
        Self::new(self.inner.map(|result| {
            if let Err(error) = &result {
                f(error);
            }
            result
        }))
    }
}

impl<T, E> IntoFuture for Deferred<T, E> {
    type Output = Result<T, E>;
    type IntoFuture = BoxFuture<'static, Result<T, E>>;

    fn into_future(self) -> Self::IntoFuture {
        self.inner
    }
}
