//! HTTP inbound adapter exposing the contacts REST API.

pub mod avatars;
pub mod contacts;
pub mod error;
pub mod health;
pub mod oidc;
pub mod schemas;
pub mod session_config;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod validation;

pub use error::ApiResult;
