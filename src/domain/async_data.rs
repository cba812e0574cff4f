/// Lifecycle of a network-backed value.
///
/// A request moves `NotAsked -> Loading -> Done` and a new request restarts at
/// `Loading`. No value is retained while loading.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AsyncData<T> {
    #[default]
    NotAsked,
    Loading,
    Done(T),
}

/// The shape every query cell exposes: a lifecycle around a transport result.
pub type AsyncResult<T, E> = AsyncData<Result<T, E>>;

impl<T> AsyncData<T> {
    pub fn is_not_asked(&self) -> bool {
        matches!(self, AsyncData::NotAsked)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, AsyncData::Loading)
    }

    pub fn is_done(&self) -> bool {
        matches!(self, AsyncData::Done(_))
    }

    pub fn as_ref(&self) -> AsyncData<&T> {
        match self {
            AsyncData::NotAsked => AsyncData::NotAsked,
            AsyncData::Loading => AsyncData::Loading,
            AsyncData::Done(value) => AsyncData::Done(value),
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> AsyncData<U> {
        match self {
            AsyncData::NotAsked => AsyncData::NotAsked,
            AsyncData::Loading => AsyncData::Loading,
            AsyncData::Done(value) => AsyncData::Done(f(value)),
        }
    }

    /// Returns the settled value, if any.
    pub fn into_done(self) -> Option<T> {
        match self {
            AsyncData::Done(value) => Some(value),
            AsyncData::NotAsked | AsyncData::Loading => None,
        }
    }

    /// Whether moving from `self` to `next` respects the lifecycle.
    ///
    /// `Done -> Loading` is only legal as the start of a new request, which is
    /// why it is accepted here; `Done -> Done` and anything back to `NotAsked`
    /// are not.
    pub fn can_transition_to<U>(&self, next: &AsyncData<U>) -> bool {
        matches!(
            (self, next),
            (AsyncData::NotAsked, AsyncData::Loading)
                | (AsyncData::Loading, AsyncData::Done(_))
                | (AsyncData::Done(_), AsyncData::Loading)
        )
    }
}

impl<T, E> AsyncData<Result<T, E>> {
    pub fn is_ok(&self) -> bool {
        matches!(self, AsyncData::Done(Ok(_)))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, AsyncData::Done(Err(_)))
    }

    /// Maps the success value, leaving errors and pending states untouched.
    pub fn map_ok<U, F: FnOnce(T) -> U>(self, f: F) -> AsyncData<Result<U, E>> {
        self.map(|result| result.map(f))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_not_asked() {
        let data: AsyncData<u8> = AsyncData::default();
        assert!(data.is_not_asked());
        assert!(!data.is_loading());
        assert!(!data.is_done());
    }

    #[test]
    fn test_lifecycle_transitions() {
        let not_asked: AsyncData<u8> = AsyncData::NotAsked;
        let loading: AsyncData<u8> = AsyncData::Loading;
        let done = AsyncData::Done(1u8);

        assert!(not_asked.can_transition_to(&loading));
        assert!(loading.can_transition_to(&done));
        assert!(done.can_transition_to(&loading));

        assert!(!not_asked.can_transition_to(&done));
        assert!(!done.can_transition_to(&AsyncData::Done(2u8)));
        assert!(!loading.can_transition_to(&not_asked));
        assert!(!done.can_transition_to(&not_asked));
    }

    #[test]
    fn test_map_ok_keeps_errors() {
        let ok: AsyncResult<u8, String> = AsyncData::Done(Ok(2));
        let err: AsyncResult<u8, String> = AsyncData::Done(Err("down".to_string()));

        assert_eq!(ok.map_ok(|v| v * 2), AsyncData::Done(Ok(4)));
        assert_eq!(
            err.clone().map_ok(|v| v * 2),
            AsyncData::Done(Err("down".to_string()))
        );
        assert!(err.is_error());
        assert!(!AsyncResult::<u8, String>::Loading.is_ok());
    }

    #[test]
    fn test_into_done() {
        assert_eq!(AsyncData::Done(3).into_done(), Some(3));
        assert_eq!(AsyncData::<u8>::Loading.into_done(), None);
        assert_eq!(AsyncData::Done("x").as_ref().into_done(), Some(&"x"));
    }
}
