//! session_store - Key-value session persistence
//!
//! Models the prototype's browser local storage: a flat string key-value
//! store holding the session record under two well-known keys. The
//! `SessionRepository` is the only sanctioned way to touch those keys.

pub mod error;
pub mod record;
pub mod repository;
pub mod storage;

// Re-export commonly used types
pub use error::{Result, SessionError};
pub use record::SessionRecord;
pub use repository::{SessionRepository, USER_DATA_KEY, USER_TYPE_KEY};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
