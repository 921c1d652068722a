// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Community endpoints: feed, leaderboard, posts, likes and comments.

use super::api::{segment, ApiClient, Auth};
use crate::error::{ClientError, Result};
use crate::models::community::{CommentRequest, LeaderboardEnvelope, PostsEnvelope};
use crate::models::{
    first_validation_message, CommunityStats, LeaderboardEntry, MessageResponse, NewPost, Post,
    PostQuery,
};
use reqwest::multipart::Form;
use reqwest::Method;
use validator::Validate;

#[derive(Clone)]
pub struct CommunityService {
    api: ApiClient,
}

impl CommunityService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Feed posts (latest or trending) matching `query`.
    pub async fn posts(&self, query: &PostQuery) -> Result<Vec<Post>> {
        let envelope: PostsEnvelope = self
            .api
            .get_query(query.path(), &query.to_pairs(), Auth::Session)
            .await?;
        Ok(envelope.posts)
    }

    pub async fn leaderboard(&self) -> Result<Vec<LeaderboardEntry>> {
        let envelope: LeaderboardEnvelope = self
            .api
            .get_json("/community/leaderboard", Auth::Session)
            .await?;
        Ok(envelope.leaderboard)
    }

    pub async fn stats(&self) -> Result<CommunityStats> {
        self.api.get_json("/community/stats", Auth::Session).await
    }

    pub async fn create_post(&self, post: NewPost) -> Result<MessageResponse> {
        post.validate()
            .map_err(|e| ClientError::Validation(first_validation_message(&e, &["title"])))?;

        let mut form = Form::new()
            .text("post_title", post.title)
            .text("description", post.description);
        if let Some(image) = post.image {
            form = form.part("image", image.into_part());
        }

        let response = self
            .api
            .send_multipart(Method::POST, "/community/post", form, Auth::Session)
            .await?;
        tracing::info!("Community post created");
        Ok(response)
    }

    pub async fn delete_post(&self, post_id: &str) -> Result<MessageResponse> {
        let path = format!("/community/post/{}", segment(post_id));
        self.api.delete_json(&path, Auth::Session).await
    }

    pub async fn like(&self, post_id: &str) -> Result<MessageResponse> {
        let path = format!("/community/like/{}", segment(post_id));
        self.api.post_empty(&path, Auth::Session).await
    }

    pub async fn unlike(&self, post_id: &str) -> Result<MessageResponse> {
        let path = format!("/community/unlike/{}", segment(post_id));
        self.api.post_empty(&path, Auth::Session).await
    }

    pub async fn comment(&self, post_id: &str, text: &str) -> Result<MessageResponse> {
        let path = format!("/community/comment/{}", segment(post_id));
        self.api
            .post_json(&path, &CommentRequest { text }, Auth::Session)
            .await
    }

    pub async fn delete_comment(&self, comment_id: &str) -> Result<MessageResponse> {
        let path = format!("/community/comment/{}", segment(comment_id));
        self.api.delete_json(&path, Auth::Session).await
    }
}
