use crate::model::post::Post;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Sentinel category name that disables category filtering.
pub const ALL_CATEGORY: &str = "All";

#[derive(Clone, Eq, PartialEq, Debug, Default, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    #[default]
    All,
    Named(String),
}

impl Category {
    /// Whether a post with these tags falls under the category.
    ///
    /// The match is a symmetric partial match: a tag counts when either side
    /// contains the other, case-insensitively ("CSS" matches the category
    /// "CSS Tricks" and the category "CSS" matches the tag "CSS Grid"). This
    /// looseness is load-bearing for the browsing surface and must not be
    /// tightened to equality.
    #[must_use]
    pub fn matches(&self, tags: &[String]) -> bool {
        match self {
            Category::All => true,
            Category::Named(name) => {
                let name = name.to_lowercase();
                tags.iter().any(|tag| {
                    let tag = tag.to_lowercase();
                    tag.contains(&name) || name.contains(&tag)
                })
            }
        }
    }
}

impl From<String> for Category {
    fn from(value: String) -> Self {
        if value == ALL_CATEGORY {
            Category::All
        } else {
            Category::Named(value)
        }
    }
}

impl From<&str> for Category {
    fn from(value: &str) -> Self {
        Category::from(value.to_owned())
    }
}

impl From<Category> for String {
    fn from(value: Category) -> Self {
        match value {
            Category::All => ALL_CATEGORY.to_owned(),
            Category::Named(name) => name,
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::All => f.write_str(ALL_CATEGORY),
            Category::Named(name) => f.write_str(name),
        }
    }
}

/// The derived post list: title substring match and category match composed
/// by conjunction, input order preserved.
///
/// A blank query disables title filtering; [`Category::All`] disables
/// category filtering. No match is an empty list, never an error.
#[must_use]
pub fn filter_posts(posts: &[Post], query: &str, category: &Category) -> Vec<Post> {
    let query = query.to_lowercase();
    let blank = query.trim().is_empty();

    posts
        .iter()
        .filter(|post| blank || post.title.to_lowercase().contains(&query))
        .filter(|post| category.matches(&post.tags))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::{
        filter::{Category, filter_posts},
        model::{Id, post::Post},
    };

    fn post(id: &str, title: &str, tags: &[&str]) -> Post {
        Post {
            id: Id::new(id).unwrap(),
            title: title.to_owned(),
            tags: tags.iter().map(|&tag| tag.to_owned()).collect(),
            ..Post::default()
        }
    }

    fn sample() -> Vec<Post> {
        vec![
            post("a", "Understanding Async Rust", &["Rust", "Concurrency"]),
            post("b", "CSS Grid in Practice", &["CSS", "Design"]),
            post("c", "An Introduction to AI Agents", &["AI", "Web Development"]),
        ]
    }

    #[test]
    fn blank_query_and_all_category_pass_through() {
        let posts = sample();

        assert_eq!(filter_posts(&posts, "", &Category::All), posts);
        assert_eq!(filter_posts(&posts, "   ", &Category::All), posts);
    }

    #[test]
    fn filtering_is_idempotent() {
        let posts = sample();
        let category = Category::from("Design");

        let once = filter_posts(&posts, "css", &category);
        let twice = filter_posts(&once, "css", &category);
        assert_eq!(once, twice);
    }

    #[test]
    fn query_matches_title_case_insensitively() {
        let posts = sample();

        let hits = filter_posts(&posts, "ASYNC", &Category::All);
        assert_eq!(hits, vec![posts[0].clone()]);
    }

    #[test]
    fn query_only_matches_titles() {
        let posts = sample();

        // "Concurrency" is a tag of post "a", not part of any title.
        assert!(filter_posts(&posts, "concurrency", &Category::All).is_empty());
    }

    #[test]
    fn exact_tag_category_includes_the_post() {
        let posts = sample();

        for post in &posts {
            for tag in &post.tags {
                let hits = filter_posts(&posts, "", &Category::from(tag.as_str()));
                assert!(hits.contains(post), "tag {tag} should include its post");
            }
        }
    }

    #[test]
    fn category_partial_match_works_in_both_directions() {
        let posts = sample();

        // Tag "CSS" is a substring of the category name.
        let hits = filter_posts(&posts, "", &Category::from("CSS Tricks"));
        assert_eq!(hits, vec![posts[1].clone()]);

        // Category "Web" is a substring of the tag "Web Development".
        let hits = filter_posts(&posts, "", &Category::from("Web"));
        assert_eq!(hits, vec![posts[2].clone()]);
    }

    #[test]
    fn query_and_category_compose_by_conjunction() {
        let posts = sample();

        // Category alone matches post "c"; the query rules it out.
        assert!(filter_posts(&posts, "css", &Category::from("AI")).is_empty());
        assert_eq!(
            filter_posts(&posts, "agents", &Category::from("AI")),
            vec![posts[2].clone()]
        );
    }

    #[test]
    fn empty_input_and_no_match_yield_empty_output() {
        assert!(filter_posts(&[], "anything", &Category::All).is_empty());
        assert!(filter_posts(&sample(), "zzz", &Category::All).is_empty());
    }

    #[test]
    fn category_sentinel_round_trips_through_serde() {
        let all: Category = serde_json::from_str("\"All\"").unwrap();
        assert_eq!(all, Category::All);
        assert_eq!(serde_json::to_string(&all).unwrap(), "\"All\"");

        let named: Category = serde_json::from_str("\"Design\"").unwrap();
        assert_eq!(named, Category::Named("Design".to_owned()));

        // The sentinel is matched exactly; a lowercase "all" is a real name.
        assert_eq!(
            Category::from("all"),
            Category::Named("all".to_owned())
        );
    }
}
