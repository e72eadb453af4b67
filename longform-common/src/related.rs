use crate::model::post::Post;

pub const DEFAULT_RELATED_LIMIT: usize = 3;

/// Ranks `all` by tag overlap with `current` and returns the top `limit`.
///
/// The current post is excluded by id. Zero-overlap candidates are kept, so
/// the result only comes up short when fewer candidates exist. An empty
/// result is a no-content outcome, not an error.
#[must_use]
pub fn related_posts(current: &Post, all: &[Post], limit: usize) -> Vec<Post> {
    let mut scored: Vec<(usize, &Post)> = all
        .iter()
        .filter(|candidate| candidate.id != current.id)
        .map(|candidate| (shared_tag_count(&current.tags, &candidate.tags), candidate))
        .collect();

    // Stable sort: equal scores keep collection order.
    scored.sort_by(|(a, _), (b, _)| b.cmp(a));

    scored
        .into_iter()
        .take(limit)
        .map(|(_, post)| post.clone())
        .collect()
}

/// Naive pairwise overlap: for each of the current post's tags, every
/// case-insensitively equal candidate tag counts. Duplicate tags on either
/// side raise the score.
fn shared_tag_count(current: &[String], candidate: &[String]) -> usize {
    current
        .iter()
        .map(|tag| {
            let tag = tag.to_lowercase();
            candidate
                .iter()
                .filter(|other| other.to_lowercase() == tag)
                .count()
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use crate::{
        model::{Id, post::Post},
        related::{DEFAULT_RELATED_LIMIT, related_posts, shared_tag_count},
    };

    fn post(id: &str, tags: &[&str]) -> Post {
        Post {
            id: Id::new(id).unwrap(),
            tags: tags.iter().map(|&tag| tag.to_owned()).collect(),
            ..Post::default()
        }
    }

    #[test]
    fn ranks_by_descending_overlap() {
        let current = post("current", &["AI", "React"]);
        let all = vec![
            post("none", &["CSS"]),
            post("one", &["react", "Design"]),
            post("two", &["ai", "React"]),
        ];

        let related = related_posts(&current, &all, DEFAULT_RELATED_LIMIT);
        let ids: Vec<&str> = related.iter().map(|p| p.id.get()).collect();
        assert_eq!(ids, vec!["two", "one", "none"]);

        let top = related_posts(&current, &all, 1);
        let ids: Vec<&str> = top.iter().map(|p| p.id.get()).collect();
        assert_eq!(ids, vec!["two"]);
    }

    #[test]
    fn excludes_the_current_post_by_id() {
        let current = post("current", &["AI"]);
        let all = vec![current.clone(), post("other", &["AI"])];

        let related = related_posts(&current, &all, DEFAULT_RELATED_LIMIT);
        let ids: Vec<&str> = related.iter().map(|p| p.id.get()).collect();
        assert_eq!(ids, vec!["other"]);
    }

    #[test]
    fn ties_keep_collection_order() {
        let current = post("current", &["AI"]);
        let all = vec![
            post("first", &["AI"]),
            post("second", &["AI"]),
            post("third", &["AI"]),
        ];

        let related = related_posts(&current, &all, DEFAULT_RELATED_LIMIT);
        let ids: Vec<&str> = related.iter().map(|p| p.id.get()).collect();
        assert_eq!(ids, vec!["first", "second", "third"]);
    }

    #[test]
    fn zero_overlap_candidates_fill_up_to_the_limit() {
        let current = post("current", &["Rust"]);
        let all = vec![post("a", &["CSS"]), post("b", &["Design"])];

        let related = related_posts(&current, &all, DEFAULT_RELATED_LIMIT);
        assert_eq!(related.len(), 2);
    }

    #[test]
    fn no_candidates_yield_an_empty_result() {
        let current = post("current", &["Rust"]);

        assert!(related_posts(&current, &[], DEFAULT_RELATED_LIMIT).is_empty());
        assert!(related_posts(&current, &[current.clone()], DEFAULT_RELATED_LIMIT).is_empty());
    }

    #[test]
    fn duplicate_tags_inflate_the_score() {
        let tags = |tags: &[&str]| -> Vec<String> {
            tags.iter().map(|&tag| tag.to_owned()).collect()
        };

        // One occurrence per matching candidate tag, per current tag.
        assert_eq!(shared_tag_count(&tags(&["rust"]), &tags(&["Rust", "rust"])), 2);
        assert_eq!(shared_tag_count(&tags(&["rust", "Rust"]), &tags(&["rust"])), 2);
        assert_eq!(shared_tag_count(&tags(&["rust", "rust"]), &tags(&["rust", "rust"])), 4);
        assert_eq!(shared_tag_count(&tags(&["rust"]), &tags(&["css"])), 0);
    }
}
