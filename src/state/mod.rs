//! Client-side stores: transient copies of server state plus the local
//! bookkeeping the views need (optimistic likes, selections, filters).

pub mod community;
pub mod compose;
pub mod duplicates;
pub mod leads;
pub mod notifications;
pub mod tokens;
pub mod users;

pub use community::{CommunityFeed, LikeOp};
pub use compose::limit_words;
pub use duplicates::{duplicate_ids, AdminLeadFilter};
pub use leads::{LeadBoard, LeadFilter, LeadSelection, LeadTab, SelectOutcome};
pub use notifications::NotificationInbox;
pub use tokens::TokenDashboard;
pub use users::UserStats;
