//! Service layer modules.
//!
//! Lifecycle operations over the store, and the activity log observer that reacts to them.

pub mod activity_log;
pub mod lifecycle;

pub use activity_log::ActivityLog;
