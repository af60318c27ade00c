//! HTTP client for LLM completion providers.
//!
//! Wraps the Gemini and OpenRouter APIs behind one `complete` call that
//! converts every network, auth, and quota failure into a typed
//! `ProviderResponse` with `success == false`. Callers never see a raised
//! error from this boundary.

pub mod client;
pub mod config;
pub mod gemini;
pub mod openrouter;
pub mod provider;

pub use client::*;
pub use config::*;
pub use provider::*;
