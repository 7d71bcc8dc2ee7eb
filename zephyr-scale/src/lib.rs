//! # Zephyr Scale
//!
//! A Rust client and MCP (Model Context Protocol) tool surface for the
//! Zephyr Scale Cloud test-management REST API.
//!
//! ## Features
//!
//! - **Typed schemas**: validated wire-format structs for priorities,
//!   statuses, folders, test cases, steps, scripts, links, cycles and plans
//! - **REST client**: one async method per endpoint with a uniform error
//!   taxonomy (validation / not-found / upstream / transport)
//! - **MCP support**: a tool registry exposing every operation as a
//!   callable tool over the Model Context Protocol
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use zephyr_scale::{ZephyrClient, ZephyrConfig};
//!
//! # async fn example() -> zephyr_scale::Result<()> {
//! let config = ZephyrConfig::from_env()?;
//! let client = ZephyrClient::new(&config)?;
//!
//! let priority = client.get_priority(1).await?;
//! println!("{} (index {})", priority.name, priority.index);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

/// Configuration loaded from environment variables
pub mod config;

/// Unified error taxonomy for client and tool operations
pub mod error;

/// Wire-format schemas mirroring the Zephyr Scale Cloud REST API
pub mod schemas;

/// Field-level validation and input normalization
pub mod validation;

/// HTTP client for the Zephyr Scale Cloud REST API
pub mod client;

/// Model Context Protocol (MCP) server support
pub mod mcp;

// Re-export core types
pub use client::ZephyrClient;
pub use config::ZephyrConfig;
pub use error::{Result, ZephyrError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
