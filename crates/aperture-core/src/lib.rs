//! # aperture-core
//!
//! Core types, traits, and abstractions for the aperture media gateway.
//!
//! This crate provides the foundational data structures and trait definitions
//! that the provider and API crates depend on: the normalized asset model,
//! the retrieval envelope, the backend traits, and the shared error type.

pub mod defaults;
pub mod error;
pub mod logging;
pub mod models;
pub mod traits;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use models::{
    AssetQuery, AssetRecord, Dimensions, Group, RawAsset, RawContext, RetrievalResult, Strategy,
};
pub use traits::{DiagnosticsBackend, ListingBackend, SearchBackend};
