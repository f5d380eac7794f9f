use serde_json::json;

use crate::client::{
    api::{ApiClient, HttpTransport, Method},
    error::Error,
};
use crate::model::forum::{ForumComment, ForumPost, NewComment, NewPost};

impl<T: HttpTransport> ApiClient<T> {
    /// Newest posts first
    pub async fn list_posts(&self) -> Result<Vec<ForumPost>, Error> {
        self.fetch_json("forum posts", "/api/forum/posts").await
    }

    pub async fn create_post(&self, post: &NewPost) -> Result<ForumPost, Error> {
        self.mutate_json("create post", Method::Post, "/api/forum/posts", post)
            .await
    }

    pub async fn like_post(&self, post_id: i64) -> Result<(), Error> {
        let path = format!("/api/forum/posts/{}/like", post_id);

        self.mutate_discard("like post", Method::Post, &path, Some(&json!({})))
            .await
    }

    /// Oldest comments first
    pub async fn list_comments(&self, post_id: i64) -> Result<Vec<ForumComment>, Error> {
        let path = format!("/api/forum/posts/{}/comments", post_id);

        self.fetch_json("comments", &path).await
    }

    pub async fn add_comment(
        &self,
        post_id: i64,
        comment: &NewComment,
    ) -> Result<ForumComment, Error> {
        let path = format!("/api/forum/posts/{}/comments", post_id);

        self.mutate_json("add comment", Method::Post, &path, comment)
            .await
    }
}
