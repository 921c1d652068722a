// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Community view orchestration.
//!
//! Likes are optimistic: the local feed changes first, the request follows,
//! and a failure reverts the change. A success schedules a silent
//! background refresh; [`CommunityController::settle`] waits for those.

use super::notifier::Notifier;
use crate::error::{ClientError, Result};
use crate::models::{CommunityStats, LeaderboardEntry, NewPost, PostQuery};
use crate::services::{AuthService, CommunityService};
use crate::state::{CommunityFeed, LikeOp};
use dashmap::DashSet;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::task::JoinSet;

pub const SUBSCRIPTION_EXPIRED: &str = "Subscription expired. Please renew to access community.";
pub const ACTION_IN_PROGRESS: &str = "Please wait, this post is still being updated";

/// Shared handle; clones drive the same feed.
#[derive(Clone)]
pub struct CommunityController {
    service: CommunityService,
    auth: AuthService,
    notifier: Arc<dyn Notifier>,
    feed: Arc<Mutex<CommunityFeed>>,
    leaderboard: Arc<Mutex<Vec<LeaderboardEntry>>>,
    stats: Arc<Mutex<Option<CommunityStats>>>,
    query: Arc<Mutex<PostQuery>>,
    in_flight: Arc<DashSet<String>>,
    reconcile: Arc<Mutex<JoinSet<()>>>,
}

/// Marks a post busy until dropped.
struct InFlight {
    set: Arc<DashSet<String>>,
    post_id: String,
}

impl InFlight {
    fn acquire(set: &Arc<DashSet<String>>, post_id: &str) -> Option<Self> {
        set.insert(post_id.to_string()).then(|| Self {
            set: Arc::clone(set),
            post_id: post_id.to_string(),
        })
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        self.set.remove(&self.post_id);
    }
}

impl CommunityController {
    pub fn new(service: CommunityService, auth: AuthService, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            service,
            auth,
            notifier,
            feed: Arc::new(Mutex::new(CommunityFeed::default())),
            leaderboard: Arc::new(Mutex::new(Vec::new())),
            stats: Arc::new(Mutex::new(None)),
            query: Arc::new(Mutex::new(PostQuery::default())),
            in_flight: Arc::new(DashSet::new()),
            reconcile: Arc::new(Mutex::new(JoinSet::new())),
        }
    }

    /// Fetch the current user, then the feed.
    pub async fn open(&self) -> Result<()> {
        match self.auth.profile().await {
            Ok(profile) => self.set_user_id(Some(profile.user.id)).await,
            Err(e) => tracing::warn!(error = %e, "Could not load current user"),
        }
        self.refresh(false).await
    }

    pub async fn set_user_id(&self, user_id: Option<String>) {
        self.feed.lock().await.set_user_id(user_id);
    }

    pub async fn set_query(&self, query: PostQuery) {
        *self.query.lock().await = query;
    }

    /// Snapshot of the local feed.
    pub async fn feed(&self) -> CommunityFeed {
        self.feed.lock().await.clone()
    }

    pub async fn leaderboard(&self) -> Vec<LeaderboardEntry> {
        self.leaderboard.lock().await.clone()
    }

    pub async fn stats(&self) -> Option<CommunityStats> {
        self.stats.lock().await.clone()
    }

    /// Reload posts, leaderboard and stats together.
    ///
    /// A silent refresh (poller, reconciliation) only reports an expired
    /// subscription; other failures are logged.
    pub async fn refresh(&self, silent: bool) -> Result<()> {
        let query = self.query.lock().await.clone();

        let loaded = tokio::try_join!(
            self.service.posts(&query),
            self.service.leaderboard(),
            self.service.stats(),
        );

        match loaded {
            Ok((posts, leaderboard, stats)) => {
                tracing::debug!(posts = posts.len(), silent, "Community refreshed");
                self.feed.lock().await.replace_posts(posts);
                *self.leaderboard.lock().await = leaderboard;
                *self.stats.lock().await = Some(stats);
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, silent, "Community refresh failed");
                if e.is_forbidden() {
                    self.notifier.error(SUBSCRIPTION_EXPIRED);
                } else if !silent {
                    self.notifier.error("Error loading community data");
                }
                Err(e)
            }
        }
    }

    pub async fn like(&self, post_id: &str) -> Result<()> {
        self.toggle_like(post_id, LikeOp::Like).await
    }

    pub async fn unlike(&self, post_id: &str) -> Result<()> {
        self.toggle_like(post_id, LikeOp::Unlike).await
    }

    async fn toggle_like(&self, post_id: &str, op: LikeOp) -> Result<()> {
        let (fallback, done) = match op {
            LikeOp::Like => ("Error liking post", "Post liked! (+1 point to author)"),
            LikeOp::Unlike => ("Error unliking post", "Post unliked (-1 point from author)"),
        };

        let Some(_guard) = InFlight::acquire(&self.in_flight, post_id) else {
            self.notifier.warning(ACTION_IN_PROGRESS);
            return Err(ClientError::Validation(ACTION_IN_PROGRESS.to_string()));
        };

        {
            let mut feed = self.feed.lock().await;
            let begun = match op {
                LikeOp::Like => feed.begin_like(post_id),
                LikeOp::Unlike => feed.begin_unlike(post_id),
            };
            if let Err(e) = begun {
                self.notifier.error(&e.server_message_or(fallback));
                return Err(e);
            }
        }

        let sent = match op {
            LikeOp::Like => self.service.like(post_id).await,
            LikeOp::Unlike => self.service.unlike(post_id).await,
        };

        match sent {
            Ok(_) => {
                self.feed.lock().await.commit(post_id);
                tracing::info!(post_id, ?op, "Like state updated");
                self.notifier.success(done);
                self.spawn_refresh().await;
                Ok(())
            }
            Err(e) => {
                self.feed.lock().await.revert(post_id);
                tracing::warn!(post_id, ?op, error = %e, "Like request failed, reverted");
                self.notifier.error(&e.server_message_or(fallback));
                Err(e)
            }
        }
    }

    pub async fn create_post(&self, post: NewPost) -> Result<()> {
        match self.service.create_post(post).await {
            Ok(_) => {
                self.notifier.success("Post created successfully! (+5 points)");
                self.reload_after_change().await;
                Ok(())
            }
            Err(e) => {
                self.notifier.error(&e.server_message_or("Error creating post"));
                Err(e)
            }
        }
    }

    pub async fn delete_post(&self, post_id: &str) -> Result<()> {
        match self.service.delete_post(post_id).await {
            Ok(_) => {
                self.feed.lock().await.remove_post(post_id);
                self.notifier.success("Post deleted (-5 points)");
                self.reload_after_change().await;
                Ok(())
            }
            Err(e) => {
                self.notifier.error("Error deleting post");
                Err(e)
            }
        }
    }

    /// Add a comment. Blank text is ignored without a request.
    pub async fn comment(&self, post_id: &str, text: &str) -> Result<()> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ClientError::Validation("Comment cannot be empty".to_string()));
        }

        match self.service.comment(post_id, text).await {
            Ok(_) => {
                self.notifier.success("Comment added! (+2 points)");
                self.reload_after_change().await;
                Ok(())
            }
            Err(e) => {
                self.notifier.error("Error adding comment");
                Err(e)
            }
        }
    }

    pub async fn delete_comment(&self, comment_id: &str) -> Result<()> {
        match self.service.delete_comment(comment_id).await {
            Ok(_) => {
                self.notifier.success("Comment deleted (-2 points)");
                self.reload_after_change().await;
                Ok(())
            }
            Err(e) => {
                self.notifier.error("Error deleting comment");
                Err(e)
            }
        }
    }

    /// Wait for background reconciliation refreshes to finish.
    pub async fn settle(&self) {
        let mut tasks = self.reconcile.lock().await;
        while let Some(joined) = tasks.join_next().await {
            if let Err(e) = joined {
                tracing::warn!(error = %e, "Reconciliation task failed");
            }
        }
    }

    /// Background refreshes spawned but not yet collected.
    pub async fn reconcile_backlog(&self) -> usize {
        self.reconcile.lock().await.len()
    }

    async fn spawn_refresh(&self) {
        let this = self.clone();
        let mut tasks = self.reconcile.lock().await;
        // Collect finished refreshes so the set stays small without settle()
        while let Some(joined) = tasks.try_join_next() {
            if let Err(e) = joined {
                tracing::warn!(error = %e, "Reconciliation task failed");
            }
        }
        tasks.spawn(async move {
            // Failures are already logged by refresh()
            let _ = this.refresh(true).await;
        });
    }

    /// Foreground reload after a post or comment change. The change itself
    /// already succeeded, so a failed reload only reports.
    async fn reload_after_change(&self) {
        let _ = self.refresh(false).await;
    }
}
