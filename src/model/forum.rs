use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthorDto {
    pub username: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForumPost {
    pub id: i64,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub likes_count: u32,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub user: Option<AuthorDto>,
}

impl ForumPost {
    pub fn author(&self) -> &str {
        self.user
            .as_ref()
            .map(|user| user.username.as_str())
            .unwrap_or("Anonymous")
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForumComment {
    pub id: i64,
    pub content: String,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub user: Option<AuthorDto>,
}

impl ForumComment {
    pub fn author(&self) -> &str {
        self.user
            .as_ref()
            .map(|user| user.username.as_str())
            .unwrap_or("Anonymous")
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewPost {
    pub title: String,
    pub content: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewComment {
    pub content: String,
}
