// Rust guideline compliant 2026-10-14

//! Shared application services for Folio.
//!
//! This crate provides reusable, non-CLI-specific helpers for site discovery,
//! the write-through content cache, admin sessions, and standardized
//! response envelopes.

pub mod auth;
pub mod cache;
pub mod error;
pub mod response;
pub mod site;

pub use auth::{current_user, hash_password, require_session, sign_in, sign_out, Session};
pub use cache::{Cached, ContentCache, SiteContent, Upload};
pub use error::{AppError, ErrorCode, Result};
pub use response::{ErrorEnvelope, SuccessEnvelope};
pub use site::SiteContext;
