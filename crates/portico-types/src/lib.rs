//! Shared domain types for Portico.
//!
//! This crate contains the core domain types used across the Portico
//! services: the knowledge base snapshot, chat turns, form submissions,
//! transport errors, and configuration.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod chat;
pub mod config;
pub mod error;
pub mod knowledge;
pub mod submission;
