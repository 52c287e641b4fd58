//! Infrastructure implementations for Portico.
//!
//! Concrete adapters behind the ports defined in `portico-core`: the HTTP
//! completion client, the relay and datastore transports, the notification
//! relays, and the configuration loader.

pub mod config;
pub mod http;
