//! Business services containing domain logic and use cases.

pub mod auth;

// Re-export commonly used types
pub use auth::{AuthManager, ExpirySweeper, SweeperHandle, TokenCodec, TokenData};
