//! Transport and notifier ports for the submission pipeline.
//!
//! A transport is one concrete network path for delivering a form
//! submission. Adapters are thin request/response wrappers: no retries at
//! this layer -- retry and fallback policy live in the coordinator.

use std::future::Future;
use std::pin::Pin;

use portico_types::error::TransportError;
use portico_types::submission::{FormSubmission, TransportKind, TransportReceipt};

/// Port for one delivery path (RPITIT; implementations in `portico-infra`).
pub trait FormTransport: Send + Sync {
    fn kind(&self) -> TransportKind;

    /// Whether a successful delivery through this transport already
    /// notifies the site owner server-side. When false, the coordinator
    /// fires the best-effort notifier after delivery.
    fn handles_notification(&self) -> bool;

    fn deliver(
        &self,
        submission: &FormSubmission,
    ) -> impl Future<Output = Result<TransportReceipt, TransportError>> + Send;
}

/// Port for the best-effort side notification.
///
/// Infallible by contract: implementations swallow and log their own
/// failures. The coordinator never awaits the outcome.
pub trait Notifier: Send + Sync {
    fn notify(&self, submission: FormSubmission) -> impl Future<Output = ()> + Send;
}

/// Object-safe version of [`FormTransport`] with boxed futures.
pub trait FormTransportDyn: Send + Sync {
    fn kind(&self) -> TransportKind;

    fn handles_notification(&self) -> bool;

    fn deliver_boxed<'a>(
        &'a self,
        submission: &'a FormSubmission,
    ) -> Pin<Box<dyn Future<Output = Result<TransportReceipt, TransportError>> + Send + 'a>>;
}

impl<T: FormTransport> FormTransportDyn for T {
    fn kind(&self) -> TransportKind {
        FormTransport::kind(self)
    }

    fn handles_notification(&self) -> bool {
        FormTransport::handles_notification(self)
    }

    fn deliver_boxed<'a>(
        &'a self,
        submission: &'a FormSubmission,
    ) -> Pin<Box<dyn Future<Output = Result<TransportReceipt, TransportError>> + Send + 'a>> {
        Box::pin(self.deliver(submission))
    }
}

/// Type-erased transport, so the coordinator can hold an ordered chain of
/// heterogeneous transports.
pub struct BoxFormTransport {
    inner: Box<dyn FormTransportDyn + Send + Sync>,
}

impl BoxFormTransport {
    pub fn new<T: FormTransport + 'static>(transport: T) -> Self {
        Self {
            inner: Box::new(transport),
        }
    }

    pub fn kind(&self) -> TransportKind {
        self.inner.kind()
    }

    pub fn handles_notification(&self) -> bool {
        self.inner.handles_notification()
    }

    pub async fn deliver(
        &self,
        submission: &FormSubmission,
    ) -> Result<TransportReceipt, TransportError> {
        self.inner.deliver_boxed(submission).await
    }
}

/// Object-safe version of [`Notifier`] with boxed futures.
pub trait NotifierDyn: Send + Sync {
    fn notify_boxed(
        &self,
        submission: FormSubmission,
    ) -> Pin<Box<dyn Future<Output = ()> + Send + '_>>;
}

impl<T: Notifier> NotifierDyn for T {
    fn notify_boxed(
        &self,
        submission: FormSubmission,
    ) -> Pin<Box<dyn Future<Output = ()> + Send + '_>> {
        Box::pin(self.notify(submission))
    }
}

/// Type-erased notifier.
pub struct BoxNotifier {
    inner: Box<dyn NotifierDyn + Send + Sync>,
}

impl BoxNotifier {
    pub fn new<T: Notifier + 'static>(notifier: T) -> Self {
        Self {
            inner: Box::new(notifier),
        }
    }

    pub async fn notify(&self, submission: FormSubmission) {
        self.inner.notify_boxed(submission).await;
    }
}
