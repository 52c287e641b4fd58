//! Observability bootstrap for Portico.

pub mod tracing_setup;
