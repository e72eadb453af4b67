use longform_store::StoreError;
use thiserror::Error;

#[derive(Clone, Eq, PartialEq, Debug, Error)]
pub enum FetchError {
    #[error("The requested post was not found.")]
    NotFound,
    #[error("Failed to retrieve posts: {0}")]
    Retrieval(String),
}

impl From<StoreError> for FetchError {
    fn from(value: StoreError) -> Self {
        FetchError::Retrieval(value.to_string())
    }
}

/// Display state of one fetch operation. Exactly one variant is active at a
/// time: a failure clears previous data and a success clears a previous
/// failure.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub enum FetchState<T> {
    #[default]
    Idle,
    Loading,
    Ready(T),
    Failed(FetchError),
}

impl<T> FetchState<T> {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    #[must_use]
    pub fn data(&self) -> Option<&T> {
        if let FetchState::Ready(data) = self {
            Some(data)
        } else {
            None
        }
    }

    #[must_use]
    pub fn error(&self) -> Option<&FetchError> {
        if let FetchState::Failed(error) = self {
            Some(error)
        } else {
            None
        }
    }
}
