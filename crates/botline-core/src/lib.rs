//! # botline-core
//!
//! Core types, traits, parameter builders, configuration, and error handling
//! for the botline Telegram Bot API client.

pub mod config;
pub mod envelope;
pub mod error;
pub mod markup;
pub mod media;
pub mod traits;
pub mod types;
