// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User lead view: browsing, unlocking and bulk unlocking.

use super::notifier::Notifier;
use crate::error::Result;
use crate::models::MessageResponse;
use crate::services::LeadsService;
use crate::state::{LeadBoard, LeadSelection, LeadTab, SelectOutcome};
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct LeadsController {
    service: LeadsService,
    notifier: Arc<dyn Notifier>,
    page_size: u32,
    board: Arc<Mutex<LeadBoard>>,
    selection: Arc<Mutex<LeadSelection>>,
}

impl LeadsController {
    pub fn new(
        service: LeadsService,
        notifier: Arc<dyn Notifier>,
        page_size: u32,
        select_limit: usize,
    ) -> Self {
        Self {
            service,
            notifier,
            page_size,
            board: Arc::new(Mutex::new(LeadBoard::new())),
            selection: Arc::new(Mutex::new(LeadSelection::new(select_limit))),
        }
    }

    pub async fn board(&self) -> LeadBoard {
        self.board.lock().await.clone()
    }

    pub async fn selection(&self) -> LeadSelection {
        self.selection.lock().await.clone()
    }

    pub async fn set_tab(&self, tab: LeadTab) {
        self.board.lock().await.tab = tab;
    }

    /// Load one page of all leads. Failures are logged and keep the old page.
    pub async fn load_all(&self, page: u32) -> Result<()> {
        match self.service.list(page, self.page_size).await {
            Ok(leads) => {
                tracing::debug!(page, count = leads.leads.len(), "Leads loaded");
                self.board.lock().await.set_all(page, leads);
                Ok(())
            }
            Err(e) => {
                tracing::warn!(page, error = %e, "Error loading leads");
                Err(e)
            }
        }
    }

    pub async fn load_accessed(&self, page: u32) -> Result<()> {
        match self.service.list_accessed(page, self.page_size).await {
            Ok(leads) => {
                tracing::debug!(page, count = leads.leads.len(), "Accessed leads loaded");
                self.board.lock().await.set_accessed(page, leads);
                Ok(())
            }
            Err(e) => {
                tracing::warn!(page, error = %e, "Error loading accessed leads");
                Err(e)
            }
        }
    }

    /// Reload both tabs at their current pages.
    pub async fn reload(&self) {
        let (all_page, accessed_page) = {
            let board = self.board.lock().await;
            (board.page(LeadTab::All), board.page(LeadTab::Accessed))
        };
        let _ = tokio::join!(self.load_all(all_page), self.load_accessed(accessed_page));
    }

    /// Toggle a lead in the bulk selection. Hitting the cap warns and leaves
    /// the selection unchanged.
    pub async fn toggle_select(&self, lead_id: &str, accessed: bool) -> SelectOutcome {
        let mut selection = self.selection.lock().await;
        let outcome = selection.toggle_id(lead_id, accessed);
        if outcome == SelectOutcome::LimitReached {
            self.notifier.warning(&selection.limit_message());
        }
        outcome
    }

    /// Add each id to the bulk selection. Ids already selected are skipped,
    /// so repeats never deselect. Returns the selection size.
    pub async fn select_many(&self, lead_ids: &[String]) -> usize {
        let mut selection = self.selection.lock().await;
        for id in lead_ids {
            if selection.contains(id) {
                continue;
            }
            if selection.toggle_id(id, false) == SelectOutcome::LimitReached {
                self.notifier.warning(&selection.limit_message());
                break;
            }
        }
        selection.len()
    }

    /// Unlock one lead.
    pub async fn access_one(&self, lead_id: &str) -> Result<MessageResponse> {
        match self.service.access(lead_id).await {
            Ok(response) => {
                self.notifier.success(&response.message_or("Lead accessed successfully"));
                self.reload().await;
                Ok(response)
            }
            Err(e) => {
                self.notifier.error(&e.user_message("Failed to access lead"));
                Err(e)
            }
        }
    }

    /// Unlock every selected lead in one request.
    ///
    /// Returns `Ok(None)` when nothing is selected. The selection is kept on
    /// failure so the user can retry.
    pub async fn bulk_access(&self) -> Result<Option<MessageResponse>> {
        let ids = self.selection.lock().await.ids().to_vec();
        if ids.is_empty() {
            return Ok(None);
        }

        match self.service.bulk_access(&ids).await {
            Ok(response) => {
                self.selection.lock().await.clear();
                self.notifier.success(&response.message_or("Leads accessed successfully"));
                self.reload().await;
                Ok(Some(response))
            }
            Err(e) => {
                tracing::warn!(count = ids.len(), error = %e, "Bulk access failed");
                self.notifier.error(&e.user_message("Failed to access leads"));
                Err(e)
            }
        }
    }
}
