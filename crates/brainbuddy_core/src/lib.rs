//! brainbuddy_core - Core types for the BrainBuddy flows
//!
//! This crate provides the foundational types used across the flow crates:
//! - `role` - UserRole and the persisted role literals
//! - `profile` - UserProfile, AuthMode and required-field checks
//! - `routes` - Navigation targets and the Navigator seam
//! - `config` - Ambient configuration (simulated delay, storage location)

pub mod config;
pub mod profile;
pub mod role;
pub mod routes;

// Re-export commonly used types
pub use config::AppConfig;
pub use profile::{AuthMode, UserProfile};
pub use role::UserRole;
pub use routes::{Navigator, RecordingNavigator, Route};
