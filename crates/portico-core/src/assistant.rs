//! Remote completion client with local fallback.
//!
//! The [`CompletionBackend`] trait is the port for a remote text-completion
//! service; the HTTP implementation lives in `portico-infra`. An
//! [`Assistant`] wraps an optional backend and the knowledge base, and
//! absorbs every backend failure by answering with the local responder --
//! `answer` never fails and always produces a string.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use portico_types::error::TransportError;
use portico_types::knowledge::KnowledgeBase;

use crate::responder;

/// Port for a remote text-completion service.
///
/// Uses native async fn in traits (RPITIT). Implementations live in
/// `portico-infra`.
pub trait CompletionBackend: Send + Sync {
    /// Human-readable backend name for logging.
    fn name(&self) -> &str;

    /// Ask the remote service to answer `message` against `kb`.
    fn complete(
        &self,
        message: &str,
        kb: &KnowledgeBase,
    ) -> impl Future<Output = Result<String, TransportError>> + Send;
}

/// Object-safe version of [`CompletionBackend`] with boxed futures.
///
/// Exists solely to enable dynamic dispatch; a blanket implementation
/// covers every `CompletionBackend`.
pub trait CompletionBackendDyn: Send + Sync {
    fn name(&self) -> &str;

    fn complete_boxed<'a>(
        &'a self,
        message: &'a str,
        kb: &'a KnowledgeBase,
    ) -> Pin<Box<dyn Future<Output = Result<String, TransportError>> + Send + 'a>>;
}

impl<T: CompletionBackend> CompletionBackendDyn for T {
    fn name(&self) -> &str {
        CompletionBackend::name(self)
    }

    fn complete_boxed<'a>(
        &'a self,
        message: &'a str,
        kb: &'a KnowledgeBase,
    ) -> Pin<Box<dyn Future<Output = Result<String, TransportError>> + Send + 'a>> {
        Box::pin(self.complete(message, kb))
    }
}

/// Type-erased completion backend.
pub struct BoxCompletionBackend {
    inner: Box<dyn CompletionBackendDyn + Send + Sync>,
}

impl BoxCompletionBackend {
    /// Wrap a concrete backend in a type-erased box.
    pub fn new<T: CompletionBackend + 'static>(backend: T) -> Self {
        Self {
            inner: Box::new(backend),
        }
    }

    pub fn name(&self) -> &str {
        self.inner.name()
    }

    pub async fn complete(
        &self,
        message: &str,
        kb: &KnowledgeBase,
    ) -> Result<String, TransportError> {
        self.inner.complete_boxed(message, kb).await
    }
}

/// Answers chat messages, deferring to a remote completion service when one
/// is configured and falling back to the local responder otherwise.
pub struct Assistant {
    backend: Option<BoxCompletionBackend>,
    kb: Arc<KnowledgeBase>,
}

impl Assistant {
    /// Local-only assistant: every answer comes from the responder.
    pub fn local(kb: Arc<KnowledgeBase>) -> Self {
        Self { backend: None, kb }
    }

    /// Assistant that tries `backend` first.
    pub fn with_backend(kb: Arc<KnowledgeBase>, backend: BoxCompletionBackend) -> Self {
        Self {
            backend: Some(backend),
            kb,
        }
    }

    /// The knowledge base this assistant answers from.
    pub fn knowledge_base(&self) -> &KnowledgeBase {
        &self.kb
    }

    /// Answer a message. Infallible: any backend error, and any empty
    /// backend answer, resolves to the local responder.
    pub async fn answer(&self, message: &str) -> String {
        if let Some(backend) = &self.backend {
            match backend.complete(message, &self.kb).await {
                Ok(response) if !response.trim().is_empty() => return response,
                Ok(_) => {
                    tracing::debug!(
                        backend = backend.name(),
                        "empty completion response, answering locally"
                    );
                }
                Err(err) => {
                    tracing::warn!(
                        backend = backend.name(),
                        error = %err,
                        "completion backend failed, answering locally"
                    );
                }
            }
        }
        responder::respond(message, &self.kb)
    }
}
