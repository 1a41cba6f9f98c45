#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]
// DefaultOpenAiClient is meant to be used through the CompletionPort trait,
// not its internal generic structure
#![allow(private_interfaces, private_bounds)]

mod client;
mod config;
mod error;
mod http;
mod models;
mod port;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::{DefaultOpenAiClient, OpenAiClient};

// Configuration
pub use config::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT, OpenAiClientConfig};

// Silence unused dev-dependency warnings
#[cfg(test)]
use tokio as _;
