use longform_common::{
    filter::{Category, filter_posts},
    model::post::Post,
};
use std::sync::Arc;

/// Single-entry cache for the derived post list.
///
/// The fingerprint is the snapshot's identity plus the query and category
/// values; an unchanged fingerprint returns the identical derivation instead
/// of recomputing it.
#[derive(Default)]
pub struct FilterMemo {
    entry: Option<MemoEntry>,
}

struct MemoEntry {
    posts: Arc<[Post]>,
    query: String,
    category: Category,
    output: Arc<[Post]>,
}

impl FilterMemo {
    #[must_use]
    pub fn new() -> Self {
        Self { entry: None }
    }

    pub fn filtered(
        &mut self,
        posts: &Arc<[Post]>,
        query: &str,
        category: &Category,
    ) -> Arc<[Post]> {
        if let Some(entry) = &self.entry {
            let unchanged = Arc::ptr_eq(&entry.posts, posts)
                && entry.query == query
                && entry.category == *category;
            if unchanged {
                return Arc::clone(&entry.output);
            }
        }

        let output: Arc<[Post]> = filter_posts(posts, query, category).into();
        self.entry = Some(MemoEntry {
            posts: Arc::clone(posts),
            query: query.to_owned(),
            category: category.clone(),
            output: Arc::clone(&output),
        });

        output
    }
}

#[cfg(test)]
mod tests {
    use crate::memo::FilterMemo;
    use longform_common::{
        filter::Category,
        model::{Id, post::Post},
    };
    use std::sync::Arc;

    fn snapshot() -> Arc<[Post]> {
        vec![
            Post {
                id: Id::new("a").unwrap(),
                title: "Understanding Async Rust".to_owned(),
                ..Post::default()
            },
            Post {
                id: Id::new("b").unwrap(),
                title: "CSS Grid in Practice".to_owned(),
                ..Post::default()
            },
        ]
        .into()
    }

    #[test]
    fn unchanged_fingerprint_returns_the_identical_derivation() {
        let mut memo = FilterMemo::new();
        let posts = snapshot();

        let first = memo.filtered(&posts, "css", &Category::All);
        let second = memo.filtered(&posts, "css", &Category::All);

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first.len(), 1);
    }

    #[test]
    fn changed_query_recomputes() {
        let mut memo = FilterMemo::new();
        let posts = snapshot();

        let css = memo.filtered(&posts, "css", &Category::All);
        let rust = memo.filtered(&posts, "rust", &Category::All);

        assert_eq!(css[0].id.get(), "b");
        assert_eq!(rust[0].id.get(), "a");
    }

    #[test]
    fn a_new_snapshot_invalidates_the_cache() {
        let mut memo = FilterMemo::new();
        let posts = snapshot();

        let first = memo.filtered(&posts, "", &Category::All);

        // Equal contents, different snapshot identity.
        let replacement = snapshot();
        let second = memo.filtered(&replacement, "", &Category::All);

        assert_eq!(first, second);
        assert!(!Arc::ptr_eq(&first, &second));
    }
}
