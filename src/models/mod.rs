//! Data models for campus attendance

pub mod analytics;
pub mod classroom;
pub mod presence;
pub mod user;

// Re-export commonly used types
pub use classroom::Classroom;
pub use presence::{Presence, PresenceDetails};
pub use user::UserShort;
