//! chat_directory - Chat list data and controller
//!
//! The rosters are read-only sample data keyed by role; the controller
//! adds the session guard, the case-insensitive filter and the unread
//! aggregation on top.

pub mod controller;
pub mod samples;
pub mod summary;

// Re-export commonly used types
pub use controller::ChatListController;
pub use samples::roster_for;
pub use summary::ChatSummary;
