// src/utils/list_helper.rs

use serde::Serialize;

use crate::models::blog::Blog;

/// Per-author post count, as returned by `most_blogs`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorBlogs {
    pub author: String,
    pub blogs: usize,
}

/// Per-author like total, as returned by `most_likes`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorLikes {
    pub author: String,
    pub likes: i64,
}

/// Sum of likes across all blogs; 0 for an empty list.
pub fn total_likes(blogs: &[Blog]) -> i64 {
    blogs.iter().map(|blog| blog.likes).sum()
}

/// The blog with the most likes, or `None` for an empty list.
///
/// The fold replaces the running best whenever the current element has at
/// least as many likes, so the later element wins exact ties.
pub fn favorite_blog(blogs: &[Blog]) -> Option<&Blog> {
    blogs
        .iter()
        .reduce(|best, current| if current.likes >= best.likes { current } else { best })
}

/// The author with the most blogs, or `None` for an empty list.
///
/// Groups accumulate in first-seen author order and the same
/// later-wins-ties fold picks the winner.
pub fn most_blogs(blogs: &[Blog]) -> Option<AuthorBlogs> {
    group_by_author(blogs, |_| 1)
        .into_iter()
        .reduce(|best, current| if current.1 >= best.1 { current } else { best })
        .map(|(author, count)| AuthorBlogs {
            author,
            blogs: count as usize,
        })
}

/// The author with the highest cumulative likes, or `None` for an empty
/// list. Same grouping and tie-break rules as `most_blogs`.
pub fn most_likes(blogs: &[Blog]) -> Option<AuthorLikes> {
    group_by_author(blogs, |blog| blog.likes)
        .into_iter()
        .reduce(|best, current| if current.1 >= best.1 { current } else { best })
        .map(|(author, likes)| AuthorLikes { author, likes })
}

/// Accumulates a per-author sum of `weight`, keeping groups in the order
/// authors first appear. A Vec, not a map, so that order is deterministic.
fn group_by_author(blogs: &[Blog], weight: impl Fn(&Blog) -> i64) -> Vec<(String, i64)> {
    let mut groups: Vec<(String, i64)> = Vec::new();
    for blog in blogs {
        match groups.iter_mut().find(|(author, _)| *author == blog.author) {
            Some((_, sum)) => *sum += weight(blog),
            None => groups.push((blog.author.clone(), weight(blog))),
        }
    }
    groups
}
