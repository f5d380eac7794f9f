use std::collections::BTreeSet;

use crate::model::forum::ForumPost;

/// Community activity as visible through the forum
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CommunityStats {
    pub posts: usize,
    pub likes: u64,
    pub authors: usize,
    /// Title and like count of the most liked post
    pub top_post: Option<(String, u32)>,
}

impl CommunityStats {
    pub fn from_posts(posts: &[ForumPost]) -> Self {
        let authors: BTreeSet<&str> = posts
            .iter()
            .filter_map(|post| post.user.as_ref())
            .map(|user| user.username.as_str())
            .collect();

        let top_post = posts
            .iter()
            .filter(|post| post.likes_count > 0)
            .max_by_key(|post| post.likes_count)
            .map(|post| (post.title.clone(), post.likes_count));

        Self {
            posts: posts.len(),
            likes: posts.iter().map(|post| u64::from(post.likes_count)).sum(),
            authors: authors.len(),
            top_post,
        }
    }
}
