//! Notification inbox mirror.

use crate::models::Notification;

#[derive(Debug, Clone, Default)]
pub struct NotificationInbox {
    unread: u64,
    items: Vec<Notification>,
}

impl NotificationInbox {
    pub fn unread(&self) -> u64 {
        self.unread
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    pub fn set_unread(&mut self, count: u64) {
        self.unread = count;
    }

    pub fn set_items(&mut self, items: Vec<Notification>) {
        self.items = items;
    }

    /// Local effect of a successful mark-all-read.
    pub fn mark_all_read(&mut self) {
        self.unread = 0;
        for item in &mut self.items {
            item.is_read = true;
        }
    }
}
