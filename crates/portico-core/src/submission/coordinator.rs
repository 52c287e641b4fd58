//! Submission coordinator: ordered transport fallback with idempotency.
//!
//! `submit` is the single entry point for every submission trigger. The
//! idempotency flags are the sole deduplication mechanism: a second call
//! while one is in flight (or after one completed) is dropped, whichever
//! trigger path it came from.
//!
//! The fallback chain is an explicit ordered list of transports driven by
//! the [`AttemptPhase`] state machine: attempts are strictly sequential,
//! short-circuit on the first success, and aggregate every failure into
//! one diagnostic when the chain is exhausted.

use std::sync::{Arc, Mutex};

use portico_types::error::{SubmitError, ValidationError};
use portico_types::submission::{FormSubmission, SubmissionOutcome, TransportReceipt};

use super::transport::{BoxFormTransport, BoxNotifier};

/// Where a submission is in the fallback chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptPhase {
    /// No attempt started yet.
    Pending,
    /// Trying the transport at this chain index.
    Attempting(usize),
    /// A transport accepted the submission.
    Delivered,
    /// Every transport failed.
    Exhausted,
}

impl AttemptPhase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, AttemptPhase::Delivered | AttemptPhase::Exhausted)
    }
}

/// Per-coordinator idempotency flags.
///
/// `completed` is monotonic: once set it stays set until `reset` begins a
/// new user-initiated submission.
#[derive(Debug, Default)]
struct SubmissionFlags {
    in_progress: bool,
    completed: bool,
}

/// Check the fields the pipeline requires before any network attempt.
///
/// `name`, `email`, and `message` must be non-empty and the email must have
/// a plausible `local@domain` shape. The subject is optional (it was
/// defaulted at construction).
pub fn validate(submission: &FormSubmission) -> Result<(), ValidationError> {
    let mut missing = Vec::new();
    if submission.name.trim().is_empty() {
        missing.push("name".to_string());
    }
    if submission.email.trim().is_empty() {
        missing.push("email".to_string());
    }
    if submission.message.trim().is_empty() {
        missing.push("message".to_string());
    }
    if !missing.is_empty() {
        return Err(ValidationError::MissingFields(missing));
    }

    if !looks_like_email(&submission.email) {
        return Err(ValidationError::InvalidEmail(submission.email.clone()));
    }

    Ok(())
}

fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}

/// Drives one logical submission through the transport chain.
pub struct SubmissionCoordinator {
    transports: Vec<BoxFormTransport>,
    notifier: Option<Arc<BoxNotifier>>,
    flags: Mutex<SubmissionFlags>,
}

impl SubmissionCoordinator {
    /// Coordinator over an ordered transport chain (first entry is the
    /// primary).
    pub fn new(transports: Vec<BoxFormTransport>) -> Self {
        Self {
            transports,
            notifier: None,
            flags: Mutex::new(SubmissionFlags::default()),
        }
    }

    /// Attach the best-effort notifier fired when the succeeding transport
    /// does not notify server-side itself.
    pub fn with_notifier(mut self, notifier: BoxNotifier) -> Self {
        self.notifier = Some(Arc::new(notifier));
        self
    }

    pub fn is_in_progress(&self) -> bool {
        self.lock_flags().in_progress
    }

    pub fn is_completed(&self) -> bool {
        self.lock_flags().completed
    }

    /// Begin a new user-initiated submission: clears the `completed` flag.
    pub fn reset(&self) {
        self.lock_flags().completed = false;
    }

    /// Submit through the fallback chain.
    ///
    /// Idempotent per logical submission: returns
    /// [`SubmissionOutcome::Skipped`] without touching any transport when a
    /// submission is already in flight or completed. `in_progress` is
    /// cleared on every exit path.
    pub async fn submit(&self, submission: FormSubmission) -> SubmissionOutcome {
        {
            let mut flags = self.lock_flags();
            if flags.in_progress || flags.completed {
                tracing::debug!(
                    in_progress = flags.in_progress,
                    completed = flags.completed,
                    "duplicate submission trigger dropped"
                );
                return SubmissionOutcome::Skipped;
            }
            flags.in_progress = true;
        }

        let outcome = match validate(&submission) {
            Err(err) => {
                tracing::warn!(error = %err, "submission rejected before any transport attempt");
                SubmissionOutcome::Failed(SubmitError::Validation(err))
            }
            Ok(()) => self.run_chain(&submission).await,
        };

        let mut flags = self.lock_flags();
        if outcome.is_delivered() {
            flags.completed = true;
        }
        flags.in_progress = false;
        outcome
    }

    /// Walk the transport chain. Attempts are strictly sequential; the
    /// first success short-circuits the rest.
    async fn run_chain(&self, submission: &FormSubmission) -> SubmissionOutcome {
        let mut phase = AttemptPhase::Pending;
        let mut failures: Vec<String> = Vec::new();
        let mut receipt: Option<TransportReceipt> = None;

        while !phase.is_terminal() {
            phase = match phase {
                AttemptPhase::Pending => AttemptPhase::Attempting(0),
                AttemptPhase::Attempting(index) => match self.transports.get(index) {
                    None => AttemptPhase::Exhausted,
                    Some(transport) => {
                        tracing::debug!(transport = %transport.kind(), "attempting delivery");
                        match transport.deliver(submission).await {
                            Ok(accepted) => {
                                tracing::info!(
                                    transport = %accepted.transport,
                                    reference = accepted.reference.as_deref(),
                                    "submission delivered"
                                );
                                if !transport.handles_notification() {
                                    self.spawn_notification(submission.clone());
                                }
                                receipt = Some(accepted);
                                AttemptPhase::Delivered
                            }
                            Err(err) => {
                                tracing::warn!(
                                    transport = %transport.kind(),
                                    error = %err,
                                    "transport failed, trying next in chain"
                                );
                                failures.push(format!("{}: {err}", transport.kind()));
                                AttemptPhase::Attempting(index + 1)
                            }
                        }
                    }
                },
                terminal => terminal,
            };
        }

        match (phase, receipt) {
            (AttemptPhase::Delivered, Some(receipt)) => SubmissionOutcome::Delivered(receipt),
            _ => SubmissionOutcome::Failed(SubmitError::Exhausted {
                summary: failures.join("; "),
            }),
        }
    }

    /// Fire the notifier without awaiting it. Its outcome never affects
    /// the submission result.
    fn spawn_notification(&self, submission: FormSubmission) {
        let Some(notifier) = self.notifier.clone() else {
            return;
        };
        tokio::spawn(async move {
            notifier.notify(submission).await;
        });
    }

    fn lock_flags(&self) -> std::sync::MutexGuard<'_, SubmissionFlags> {
        self.flags.lock().expect("submission state lock poisoned")
    }
}
