// tests/list_helper_tests.rs

use bloglist_backend::models::blog::Blog;
use bloglist_backend::utils::list_helper::{
    AuthorBlogs, AuthorLikes, favorite_blog, most_blogs, most_likes, total_likes,
};
use uuid::Uuid;

fn blog(title: &str, author: &str, likes: i64) -> Blog {
    Blog {
        id: Uuid::new_v4(),
        title: title.to_string(),
        author: author.to_string(),
        url: "http://some.url".to_string(),
        likes,
        user_id: Uuid::new_v4(),
        comments: Vec::new(),
        created_at: chrono::Utc::now(),
    }
}

/// Same shape as the canonical fixture list: six blogs, three authors,
/// 15 likes in total.
fn fixture_blogs() -> Vec<Blog> {
    vec![
        blog("Title 1", "Author A", 1),
        blog("Title 2", "Author B", 2),
        blog("Title 3", "Author C", 3),
        blog("Title 4", "Author A", 4),
        blog("Title 5", "Author B", 5),
        blog("Title 6", "Author A", 0),
    ]
}

#[test]
fn total_likes_of_empty_list_is_zero() {
    assert_eq!(total_likes(&[]), 0);
}

#[test]
fn total_likes_of_single_blog_equals_its_likes() {
    let blogs = vec![blog("Go To Statement Considered Harmful", "Edsger W. Dijkstra", 5)];
    assert_eq!(total_likes(&blogs), 5);
}

#[test]
fn total_likes_sums_all_blogs() {
    assert_eq!(total_likes(&fixture_blogs()), 15);
}

#[test]
fn favorite_blog_returns_the_most_liked() {
    let blogs = fixture_blogs();
    let favorite = favorite_blog(&blogs).expect("non-empty list");
    assert_eq!(favorite.title, "Title 5");
    assert_eq!(favorite.author, "Author B");
    assert_eq!(favorite.likes, 5);
}

#[test]
fn favorite_blog_of_empty_list_is_none() {
    assert!(favorite_blog(&[]).is_none());
}

#[test]
fn favorite_blog_keeps_the_later_element_on_ties() {
    let blogs = vec![
        blog("first", "Author A", 1),
        blog("second", "Author A", 2),
        blog("third", "Author A", 2),
    ];
    let favorite = favorite_blog(&blogs).expect("non-empty list");
    assert_eq!(favorite.title, "third");
}

#[test]
fn most_blogs_returns_the_most_prolific_author() {
    assert_eq!(
        most_blogs(&fixture_blogs()),
        Some(AuthorBlogs {
            author: "Author A".to_string(),
            blogs: 3,
        })
    );
}

#[test]
fn most_blogs_prefers_the_later_group_on_ties() {
    let blogs = vec![
        blog("a1", "Author A", 0),
        blog("b1", "Author B", 0),
        blog("a2", "Author A", 0),
        blog("b2", "Author B", 0),
    ];
    assert_eq!(
        most_blogs(&blogs),
        Some(AuthorBlogs {
            author: "Author B".to_string(),
            blogs: 2,
        })
    );
}

#[test]
fn most_blogs_of_empty_list_is_none() {
    assert!(most_blogs(&[]).is_none());
}

#[test]
fn most_likes_returns_the_author_with_highest_like_total() {
    // Author A: 1 + 4 + 0 = 5, Author B: 2 + 5 = 7, Author C: 3
    assert_eq!(
        most_likes(&fixture_blogs()),
        Some(AuthorLikes {
            author: "Author B".to_string(),
            likes: 7,
        })
    );
}

#[test]
fn most_likes_of_empty_list_is_none() {
    assert!(most_likes(&[]).is_none());
}
