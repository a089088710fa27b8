//! Error types for the CutCraft client.
//!
//! Each concern has its own error enum built on `thiserror`. None of them reach
//! the user as a raw `Display` string; components render
//! [`ApiError::user_message`] or a fixed status message instead and log the
//! underlying error.

pub mod api;
pub mod config;
pub mod storage;

pub use api::ApiError;
pub use config::ConfigError;
pub use storage::StorageError;
