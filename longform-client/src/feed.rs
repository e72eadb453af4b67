use crate::{
    fetch::{FetchError, FetchState},
    lifecycle::FetchLifecycle,
    memo::FilterMemo,
};
use longform_common::{filter::Category, model::post::Post};
use longform_store::PostStore;
use std::sync::Arc;
use tokio::sync::watch;

/// The browsing surface's list view: one post-collection fetch plus the
/// memoized search/category derivation over it.
///
/// Changing the query or the category never refetches; only the derived view
/// is recomputed. After a failure no stale items are redisplayed — the error
/// owns the view.
pub struct FilteredFeed<S> {
    store: Arc<S>,
    list: FetchLifecycle<(), Arc<[Post]>>,
    query: String,
    category: Category,
    memo: FilterMemo,
}

/// What the surface renders.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct FeedView {
    pub items: Arc<[Post]>,
    pub loading: bool,
    pub error: Option<FetchError>,
}

impl<S> FilteredFeed<S>
where
    S: PostStore + Send + Sync + 'static,
{
    /// Creates the feed and starts loading the collection immediately.
    #[must_use]
    pub fn new(store: Arc<S>) -> Self {
        let mut feed = Self {
            store,
            list: FetchLifecycle::new(),
            query: String::new(),
            category: Category::All,
            memo: FilterMemo::new(),
        };
        feed.load();
        feed
    }

    // The collection has no input identity, so the fingerprint is the unit
    // value and the fetch runs exactly once per feed.
    fn load(&mut self) {
        let store = Arc::clone(&self.store);
        self.list.trigger((), async move { Ok(store.list_posts().await?) });
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn set_category(&mut self, category: Category) {
        self.category = category;
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<FetchState<Arc<[Post]>>> {
        self.list.subscribe()
    }

    /// Derives the current view. Re-deriving with unchanged inputs returns
    /// the identical items slice.
    pub fn view(&mut self) -> FeedView {
        match self.list.state() {
            FetchState::Ready(posts) => FeedView {
                items: self.memo.filtered(&posts, &self.query, &self.category),
                loading: false,
                error: None,
            },
            FetchState::Failed(error) => FeedView {
                items: Arc::default(),
                loading: false,
                error: Some(error),
            },
            FetchState::Idle | FetchState::Loading => FeedView {
                items: Arc::default(),
                loading: true,
                error: None,
            },
        }
    }
}
