//! View orchestration: services plus local state plus user messages.

pub mod admin;
pub mod community;
pub mod dashboard;
pub mod leads;
pub mod notifier;
pub mod poller;

pub use admin::AdminController;
pub use community::CommunityController;
pub use dashboard::DashboardController;
pub use leads::LeadsController;
pub use notifier::{ChannelNotifier, Notice, NoticeLevel, Notifier, TracingNotifier};
pub use poller::Poller;
