//! Client state driven by the components.
//!
//! These types hold no Dioxus handles so every transition can be exercised in
//! plain unit tests; components keep them in signals and call into them from
//! event handlers.

pub mod auth;
pub mod contact;
pub mod remote;
pub mod session;
pub mod storage;
