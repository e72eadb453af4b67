use crate::{
    fetch::{FetchError, FetchState},
    lifecycle::FetchLifecycle,
};
use longform_common::model::post::{Post, PostId};
use longform_store::PostStore;
use std::sync::Arc;
use tokio::sync::watch;

/// Single-post view keyed on the requested id.
pub struct PostLookup<S> {
    store: Arc<S>,
    lifecycle: FetchLifecycle<PostId, Post>,
}

impl<S> PostLookup<S>
where
    S: PostStore + Send + Sync + 'static,
{
    #[must_use]
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            lifecycle: FetchLifecycle::new(),
        }
    }

    /// Fetches the post unless `id` is already the current fingerprint.
    /// An absent post is a [`FetchError::NotFound`] failure, never a success.
    pub fn look_up(&mut self, id: PostId) {
        let store = Arc::clone(&self.store);
        let requested = id.clone();
        self.lifecycle.trigger(id, async move {
            match store.fetch_post(&requested).await {
                Ok(Some(post)) => Ok(post),
                Ok(None) => Err(FetchError::NotFound),
                Err(error) => Err(error.into()),
            }
        });
    }

    #[must_use]
    pub fn state(&self) -> FetchState<Post> {
        self.lifecycle.state()
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<FetchState<Post>> {
        self.lifecycle.subscribe()
    }
}
