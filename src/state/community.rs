// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Local copy of the community feed with optimistic like/unlike.
//!
//! Each optimistic change is tracked as pending until the request settles.
//! A fresh server snapshot (for example from the background poller) has the
//! pending changes re-applied on top, so a poll landing mid-request cannot
//! undo what the user just did.

use crate::error::{ClientError, Result};
use crate::models::{Like, Post};
use std::collections::HashMap;

pub const ALREADY_LIKED: &str = "Post already liked";
pub const NOT_LIKED: &str = "You have not liked this post yet";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeOp {
    Like,
    Unlike,
}

impl LikeOp {
    fn inverse(self) -> Self {
        match self {
            LikeOp::Like => LikeOp::Unlike,
            LikeOp::Unlike => LikeOp::Like,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CommunityFeed {
    posts: Vec<Post>,
    user_id: Option<String>,
    pending: HashMap<String, LikeOp>,
}

impl CommunityFeed {
    pub fn new(user_id: Option<String>) -> Self {
        Self {
            user_id,
            ..Default::default()
        }
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    pub fn set_user_id(&mut self, user_id: Option<String>) {
        self.user_id = user_id;
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn post(&self, post_id: &str) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == post_id)
    }

    /// Like counts in feed order.
    pub fn like_counts(&self) -> Vec<usize> {
        self.posts.iter().map(Post::like_count).collect()
    }

    pub fn is_liked_by_me(&self, post_id: &str) -> bool {
        match (&self.user_id, self.post(post_id)) {
            (Some(me), Some(post)) => post.is_liked_by(me),
            _ => false,
        }
    }

    pub fn has_pending(&self, post_id: &str) -> bool {
        self.pending.contains_key(post_id)
    }

    /// Add the current user to the post's likes and mark it pending.
    pub fn begin_like(&mut self, post_id: &str) -> Result<()> {
        let me = self.user_id.clone().ok_or(ClientError::Unauthorized)?;
        if self.post(post_id).is_none() || self.is_liked_by_me(post_id) {
            return Err(ClientError::Validation(ALREADY_LIKED.to_string()));
        }

        self.apply(post_id, &me, LikeOp::Like);
        self.pending.insert(post_id.to_string(), LikeOp::Like);
        Ok(())
    }

    /// Remove the current user from the post's likes and mark it pending.
    pub fn begin_unlike(&mut self, post_id: &str) -> Result<()> {
        let me = self.user_id.clone().ok_or(ClientError::Unauthorized)?;
        if !self.is_liked_by_me(post_id) {
            return Err(ClientError::Validation(NOT_LIKED.to_string()));
        }

        self.apply(post_id, &me, LikeOp::Unlike);
        self.pending.insert(post_id.to_string(), LikeOp::Unlike);
        Ok(())
    }

    /// The server accepted the change; stop re-applying it.
    pub fn commit(&mut self, post_id: &str) {
        self.pending.remove(post_id);
    }

    /// The server rejected the change; undo it locally.
    pub fn revert(&mut self, post_id: &str) {
        let Some(op) = self.pending.remove(post_id) else {
            return;
        };
        if let Some(me) = self.user_id.clone() {
            self.apply(post_id, &me, op.inverse());
        }
    }

    /// Install a server snapshot, keeping pending optimistic changes.
    pub fn replace_posts(&mut self, posts: Vec<Post>) {
        self.posts = posts;

        let Some(me) = self.user_id.clone() else {
            return;
        };
        let pending: Vec<(String, LikeOp)> =
            self.pending.iter().map(|(id, op)| (id.clone(), *op)).collect();
        for (post_id, op) in pending {
            self.apply(&post_id, &me, op);
        }
    }

    pub fn remove_post(&mut self, post_id: &str) {
        self.posts.retain(|p| p.id != post_id);
        self.pending.remove(post_id);
    }

    /// Idempotent: liking keeps at most one entry per user.
    fn apply(&mut self, post_id: &str, user_id: &str, op: LikeOp) {
        let Some(post) = self.posts.iter_mut().find(|p| p.id == post_id) else {
            return;
        };
        match op {
            LikeOp::Like => {
                if !post.is_liked_by(user_id) {
                    post.likes.push(Like {
                        user_id: user_id.to_string(),
                    });
                }
            }
            LikeOp::Unlike => post.likes.retain(|l| l.user_id != user_id),
        }
    }
}
