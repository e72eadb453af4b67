use crate::{fetch::FetchState, lifecycle::FetchLifecycle};
use longform_common::{
    model::post::{Post, PostId},
    related::{DEFAULT_RELATED_LIMIT, related_posts},
};
use longform_store::PostStore;
use std::sync::Arc;
use tokio::sync::watch;

/// Related-content suggestions for the post being read, keyed on its id.
///
/// While the collection is loading or the fetch failed the view is empty and
/// the surface renders nothing — there is no empty-state placeholder for
/// related content.
pub struct RelatedLookup<S> {
    store: Arc<S>,
    limit: usize,
    lifecycle: FetchLifecycle<PostId, Arc<[Post]>>,
}

impl<S> RelatedLookup<S>
where
    S: PostStore + Send + Sync + 'static,
{
    #[must_use]
    pub fn new(store: Arc<S>) -> Self {
        Self::with_limit(store, DEFAULT_RELATED_LIMIT)
    }

    #[must_use]
    pub fn with_limit(store: Arc<S>, limit: usize) -> Self {
        Self {
            store,
            limit,
            lifecycle: FetchLifecycle::new(),
        }
    }

    pub fn for_post(&mut self, current: &Post) {
        let store = Arc::clone(&self.store);
        let current = current.clone();
        let limit = self.limit;
        self.lifecycle.trigger(current.id.clone(), async move {
            let all = store.list_posts().await?;
            Ok(related_posts(&current, &all, limit).into())
        });
    }

    /// The ranked suggestions, or an empty slice until they are ready.
    #[must_use]
    pub fn current(&self) -> Arc<[Post]> {
        match self.lifecycle.state() {
            FetchState::Ready(posts) => posts,
            FetchState::Idle | FetchState::Loading | FetchState::Failed(_) => Arc::default(),
        }
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<FetchState<Arc<[Post]>>> {
        self.lifecycle.subscribe()
    }
}
