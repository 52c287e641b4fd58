//! Submission intake channel.
//!
//! Two independent trigger paths can request a submission: the explicit
//! form-submit action, and the observer that notices a legacy,
//! non-intercepted submission succeeding. Both are producers on one mpsc
//! channel; a single consumer task feeds the coordinator's `submit` entry
//! point, whose idempotency guard is the sole deduplication mechanism.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use portico_types::submission::FormSubmission;

use super::coordinator::SubmissionCoordinator;

/// A submission request from one of the trigger paths.
#[derive(Debug)]
pub enum SubmissionSignal {
    /// The visitor pressed submit on the intercepted form.
    FormSubmitted(FormSubmission),
    /// A legacy transport was observed delivering the same form.
    LegacyDelivered(FormSubmission),
}

impl SubmissionSignal {
    fn origin(&self) -> &'static str {
        match self {
            SubmissionSignal::FormSubmitted(_) => "form",
            SubmissionSignal::LegacyDelivered(_) => "legacy",
        }
    }

    fn into_submission(self) -> FormSubmission {
        match self {
            SubmissionSignal::FormSubmitted(submission)
            | SubmissionSignal::LegacyDelivered(submission) => submission,
        }
    }
}

/// Producer handle for the intake channel. Clone one per trigger path.
#[derive(Clone)]
pub struct SubmissionIntake {
    sender: mpsc::Sender<SubmissionSignal>,
}

impl SubmissionIntake {
    /// Spawn the consumer task and return the producer handle.
    ///
    /// The task ends when every producer handle has been dropped.
    pub fn spawn(
        coordinator: Arc<SubmissionCoordinator>,
        capacity: usize,
    ) -> (Self, JoinHandle<()>) {
        let (sender, mut receiver) = mpsc::channel::<SubmissionSignal>(capacity);

        let handle = tokio::spawn(async move {
            while let Some(signal) = receiver.recv().await {
                let origin = signal.origin();
                let outcome = coordinator.submit(signal.into_submission()).await;
                tracing::debug!(
                    origin,
                    delivered = outcome.is_delivered(),
                    skipped = outcome.is_skipped(),
                    "submission signal processed"
                );
            }
        });

        (Self { sender }, handle)
    }

    /// Queue a signal. Returns false when the consumer has shut down.
    pub async fn send(&self, signal: SubmissionSignal) -> bool {
        self.sender.send(signal).await.is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::submission::transport::{BoxFormTransport, FormTransport};
    use portico_types::error::TransportError;
    use portico_types::submission::{TransportKind, TransportReceipt};
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingTransport {
        calls: Arc<AtomicUsize>,
    }

    impl FormTransport for CountingTransport {
        fn kind(&self) -> TransportKind {
            TransportKind::Relay
        }

        fn handles_notification(&self) -> bool {
            true
        }

        async fn deliver(
            &self,
            _submission: &FormSubmission,
        ) -> Result<TransportReceipt, TransportError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(TransportReceipt {
                transport: TransportKind::Relay,
                reference: None,
            })
        }
    }

    fn submission() -> FormSubmission {
        FormSubmission::new("A", "a@b.com", "", "hi")
    }

    #[tokio::test]
    async fn both_trigger_paths_feed_one_entry_point() {
        let calls = Arc::new(AtomicUsize::new(0));
        let coordinator = Arc::new(SubmissionCoordinator::new(vec![BoxFormTransport::new(
            CountingTransport {
                calls: calls.clone(),
            },
        )]));

        let (intake, handle) = SubmissionIntake::spawn(coordinator.clone(), 8);
        let legacy_observer = intake.clone();

        assert!(
            intake
                .send(SubmissionSignal::FormSubmitted(submission()))
                .await
        );
        assert!(
            legacy_observer
                .send(SubmissionSignal::LegacyDelivered(submission()))
                .await
        );

        drop(intake);
        drop(legacy_observer);
        handle.await.unwrap();

        // The guard deduplicated the redundant trigger: one attempt chain.
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(coordinator.is_completed());
    }

    #[tokio::test]
    async fn send_fails_after_consumer_shutdown() {
        let coordinator = Arc::new(SubmissionCoordinator::new(Vec::new()));
        let (intake, handle) = SubmissionIntake::spawn(coordinator, 1);

        handle.abort();
        let _ = handle.await;

        let accepted = intake
            .send(SubmissionSignal::FormSubmitted(submission()))
            .await;
        assert!(!accepted);
    }
}
