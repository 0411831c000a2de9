//! # aperture-provider
//!
//! Media provider client and the resilient Asset Retrieval Gateway.
//!
//! This crate provides:
//! - Explicit provider configuration (no ambient global client state)
//! - Cloudinary backend implementing the core search/listing/diagnostics
//!   traits with per-call timeouts
//! - Defensive normalization from loose provider records to
//!   [`aperture_core::AssetRecord`]
//! - The strategy cascade: search expression variants first, prefix listing
//!   as a fallback, structured not-found as the terminal empty outcome
//!
//! # Example
//!
//! ```rust,no_run
//! use aperture_core::AssetQuery;
//! use aperture_provider::{AssetGateway, CloudinaryBackend, ProviderConfig};
//!
//! #[tokio::main]
//! async fn main() -> aperture_core::Result<()> {
//!     let config = ProviderConfig::from_env()?;
//!     let gateway = AssetGateway::new(CloudinaryBackend::new(config)?);
//!     let result = gateway
//!         .retrieve(&AssetQuery::new(Some("landscape"), None))
//!         .await?;
//!     println!("{} assets via {}", result.count, result.strategy);
//!     Ok(())
//! }
//! ```

pub mod cloudinary;
pub mod config;
pub mod gateway;
pub mod normalize;

#[cfg(test)]
pub mod mock;

pub use cloudinary::CloudinaryBackend;
pub use config::ProviderConfig;
pub use gateway::{search_expressions, AssetGateway};
pub use normalize::normalize;
