// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Community feed models: posts, comments, likes and the leaderboard.

use super::{id_or_object, not_blank, FileUpload};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Author of a post or comment (populated user reference).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Author {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub avatar: Option<String>,
    pub email: Option<String>,
}

/// A like on a post. The backend sends either the bare user id or the
/// populated user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Like {
    #[serde(deserialize_with = "id_or_object")]
    pub user_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    #[serde(alias = "_id")]
    pub id: String,
    pub user_id: Author,
    pub text: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

/// A community post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    #[serde(alias = "_id")]
    pub id: String,
    pub user_id: Author,
    pub post_title: String,
    #[serde(default)]
    pub description: String,
    /// Image URL
    pub image: Option<String>,
    #[serde(default)]
    pub likes: Vec<Like>,
    #[serde(default)]
    pub comments: Vec<Comment>,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

impl Post {
    /// Whether `user_id` appears in this post's like list.
    pub fn is_liked_by(&self, user_id: &str) -> bool {
        self.likes.iter().any(|like| like.user_id == user_id)
    }

    pub fn like_count(&self) -> usize {
        self.likes.len()
    }
}

/// Per-user activity counters shown on the leaderboard.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CommunityActivity {
    pub posts_created: u32,
    pub comments_made: u32,
    pub likes_given: u32,
    pub likes_received: u32,
}

/// Leaderboard row. Points are computed by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub avatar: Option<String>,
    #[serde(default)]
    pub points: i64,
    #[serde(default)]
    pub community_activity: CommunityActivity,
}

/// Community statistics. The backend shape is not fixed, so it is kept as JSON.
pub type CommunityStats = serde_json::Value;

/// Feed sort order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortBy {
    #[default]
    Latest,
    Oldest,
    MostLiked,
    MostCommented,
}

impl SortBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::Latest => "latest",
            SortBy::Oldest => "oldest",
            SortBy::MostLiked => "mostLiked",
            SortBy::MostCommented => "mostCommented",
        }
    }
}

/// Search and filter options for the community feed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostQuery {
    /// Use `/community/trending` instead of `/community/posts`
    pub trending: bool,
    pub search: String,
    pub author: String,
    pub has_image: bool,
    /// `YYYY-MM-DD`
    pub date_from: String,
    /// `YYYY-MM-DD`
    pub date_to: String,
    pub sort_by: SortBy,
    pub min_likes: u32,
}

impl PostQuery {
    pub fn path(&self) -> &'static str {
        if self.trending {
            "/community/trending"
        } else {
            "/community/posts"
        }
    }

    /// Query string pairs. Empty filters are left out entirely.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if !self.search.is_empty() {
            pairs.push(("search", self.search.clone()));
        }
        if !self.author.is_empty() {
            pairs.push(("author", self.author.clone()));
        }
        if self.has_image {
            pairs.push(("hasImage", "true".to_string()));
        }
        if !self.date_from.is_empty() {
            pairs.push(("dateFrom", self.date_from.clone()));
        }
        if !self.date_to.is_empty() {
            pairs.push(("dateTo", self.date_to.clone()));
        }
        pairs.push(("sortBy", self.sort_by.as_str().to_string()));
        if self.min_likes > 0 {
            pairs.push(("minLikes", self.min_likes.to_string()));
        }
        pairs
    }
}

/// New post form. Sent as multipart with an optional image.
#[derive(Debug, Clone, Validate)]
pub struct NewPost {
    #[validate(custom(function = "not_blank", message = "Title is required"))]
    pub title: String,
    #[validate(custom(function = "not_blank", message = "Description is required"))]
    pub description: String,
    pub image: Option<FileUpload>,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct CommentRequest<'a> {
    pub text: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PostsEnvelope {
    #[serde(default)]
    pub posts: Vec<Post>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LeaderboardEnvelope {
    #[serde(default)]
    pub leaderboard: Vec<LeaderboardEntry>,
}

/// Admin moderation listing. Older backend builds wrap the list in `data`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum AdminPostsEnvelope {
    Flat { posts: Vec<Post> },
    Nested { data: PostsEnvelope },
}

impl AdminPostsEnvelope {
    pub fn into_posts(self) -> Vec<Post> {
        match self {
            AdminPostsEnvelope::Flat { posts } => posts,
            AdminPostsEnvelope::Nested { data } => data.posts,
        }
    }
}
