//! Business logic and transport ports for Portico.
//!
//! This crate defines the "ports" (transport and completion traits) that
//! the infrastructure layer implements, plus the pure responder, the chat
//! dispatcher, and the submission coordinator. It depends only on
//! `portico-types` -- never on `portico-infra` or any HTTP crate.

pub mod assistant;
pub mod chat;
pub mod responder;
pub mod submission;
