//! Contact-form submission pipeline.
//!
//! The coordinator walks an ordered chain of transports until one accepts
//! the submission, guarded by per-coordinator idempotency flags. Transport
//! implementations live in `portico-infra`; this module owns the ports and
//! the routing policy.

pub mod coordinator;
pub mod intake;
pub mod transport;

pub use coordinator::{AttemptPhase, SubmissionCoordinator, validate};
pub use intake::{SubmissionIntake, SubmissionSignal};
pub use transport::{BoxFormTransport, BoxNotifier, FormTransport, Notifier};
