use std::collections::BTreeMap;

use crate::client::error::Error;
use crate::model::forum::{ForumComment, ForumPost, NewComment, NewPost};

pub const MAX_TITLE_CHARS: usize = 100;

/// Bumps the like counter of post `id` in place. Returns false if the post is not listed.
pub fn record_like(posts: &mut [ForumPost], id: i64) -> bool {
    match posts.iter_mut().find(|post| post.id == id) {
        Some(post) => {
            post.likes_count = post.likes_count.saturating_add(1);
            true
        }
        None => false,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThreadToggle {
    Closed,
    /// `fetch` is set the first time a thread is opened
    Opened { fetch: bool },
}

/// Which comment thread is open, plus every thread loaded so far
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ForumThreads {
    open: Option<i64>,
    comments: BTreeMap<i64, Vec<ForumComment>>,
}

impl ForumThreads {
    pub fn open(&self) -> Option<i64> {
        self.open
    }

    pub fn is_open(&self, post_id: i64) -> bool {
        self.open == Some(post_id)
    }

    /// Opens the thread of `post_id`, or closes it when it is the open one
    pub fn toggle(&mut self, post_id: i64) -> ThreadToggle {
        if self.is_open(post_id) {
            self.open = None;
            return ThreadToggle::Closed;
        }

        self.open = Some(post_id);
        ThreadToggle::Opened {
            fetch: !self.comments.contains_key(&post_id),
        }
    }

    pub fn comments(&self, post_id: i64) -> &[ForumComment] {
        self.comments
            .get(&post_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn cache(&mut self, post_id: i64, comments: Vec<ForumComment>) {
        self.comments.insert(post_id, comments);
    }

    pub fn append(&mut self, post_id: i64, comment: ForumComment) {
        self.comments.entry(post_id).or_default().push(comment);
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
}

impl PostDraft {
    pub fn to_request(&self) -> Result<NewPost, Error> {
        let title = self.title.trim();
        let content = self.content.trim();

        if title.is_empty() || content.is_empty() {
            return Err(Error::Validation(
                "Title and content are required".to_string(),
            ));
        }
        if title.chars().count() > MAX_TITLE_CHARS {
            return Err(Error::Validation(format!(
                "Title must be at most {} characters",
                MAX_TITLE_CHARS
            )));
        }

        Ok(NewPost {
            title: title.to_string(),
            content: content.to_string(),
        })
    }
}

pub fn comment_request(content: &str) -> Result<NewComment, Error> {
    match content.trim() {
        "" => Err(Error::Validation("Comment cannot be empty".to_string())),
        content => Ok(NewComment {
            content: content.to_string(),
        }),
    }
}
