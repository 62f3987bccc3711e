// Rust guideline compliant 2026-10-12

//! Folio Core Library
//!
//! This crate provides the foundational components for the Folio portfolio store:
//! - Escaped comma-list codec for list-valued fields
//! - Period formatting for experience and education timeframes
//! - Data models (Experience, Education, Organization, Project, Certificate, Contact)
//! - Document storage (one JSONL collection per section, locking, atomic writes)
//! - Blob storage for uploaded images
//! - Hash ID generation and resolution
//! - Error types and result handling

pub mod blob;
pub mod codec;
pub mod config;
pub mod error;
pub mod identity;
pub mod models;
pub mod period;
pub mod storage;

pub use blob::{BlobStore, FsBlobStore};
pub use codec::{decode, decode_str, encode};
pub use config::{Config, OutputFormat};
pub use error::{Error, Result};
pub use models::{
    BlobRef, Certificate, Contact, Education, Experience, Organization, Project, Record, Section,
};
pub use period::{calculate_period, calculate_short_period, Boundary, Duration, PeriodFormatter};
pub use storage::Storage;
