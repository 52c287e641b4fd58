//! Front-end chat dispatcher.
//!
//! Owns one session's transcript and orchestrates a chat turn: append the
//! user turn, raise the typing indicator, ask the assistant, lower the
//! indicator, append the bot turn. The assistant is infallible, so the
//! dispatcher never surfaces an error -- a bot turn is always produced.
//!
//! Ordering guarantees within one turn: the user turn is appended before
//! the bot turn, and the typing indicator is lowered before the bot turn
//! is appended.

use portico_types::chat::ChatTurn;

use crate::assistant::Assistant;
use crate::responder;

/// Visibility of the chat widget. Toggling is idempotent per state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetState {
    Closed,
    Open,
}

/// UI feedback seam for the dispatcher.
///
/// Replaces the original DOM typing-indicator manipulation with an
/// explicit interface: the CLI drives a spinner through it, tests record
/// call order, and the default implementation does nothing.
pub trait ChatSurface: Send + Sync {
    fn typing_started(&self) {}
    fn typing_stopped(&self) {}
    fn turn_appended(&self, _turn: &ChatTurn) {}
}

/// Surface that ignores every signal.
pub struct NullSurface;

impl ChatSurface for NullSurface {}

/// Orchestrates chat turns for one session.
///
/// The transcript is owned exclusively by the dispatcher and is
/// append-only; it resets when a new dispatcher is constructed.
pub struct ChatDispatcher<S: ChatSurface = NullSurface> {
    assistant: Assistant,
    surface: S,
    transcript: Vec<ChatTurn>,
    state: WidgetState,
}

impl ChatDispatcher<NullSurface> {
    /// Dispatcher without UI feedback.
    pub fn new(assistant: Assistant) -> Self {
        Self::with_surface(assistant, NullSurface)
    }
}

impl<S: ChatSurface> ChatDispatcher<S> {
    /// Dispatcher that reports typing and transcript changes to `surface`.
    ///
    /// The session opens with the fixed welcome turn already in the
    /// transcript.
    pub fn with_surface(assistant: Assistant, surface: S) -> Self {
        let mut dispatcher = Self {
            assistant,
            surface,
            transcript: Vec::new(),
            state: WidgetState::Closed,
        };
        dispatcher.append(ChatTurn::bot(responder::welcome()));
        dispatcher
    }

    /// Show or hide the widget; returns the new state.
    pub fn toggle(&mut self) -> WidgetState {
        self.state = match self.state {
            WidgetState::Closed => WidgetState::Open,
            WidgetState::Open => WidgetState::Closed,
        };
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == WidgetState::Open
    }

    /// The ordered transcript so far.
    pub fn transcript(&self) -> &[ChatTurn] {
        &self.transcript
    }

    /// Run one chat turn. Empty (after trimming) input is a no-op.
    ///
    /// Returns the appended bot turn.
    pub async fn send_message(&mut self, text: &str) -> Option<&ChatTurn> {
        let message = text.trim();
        if message.is_empty() {
            return None;
        }

        self.append(ChatTurn::user(message));

        self.surface.typing_started();
        let answer = self.assistant.answer(message).await;
        self.surface.typing_stopped();

        self.append(ChatTurn::bot(answer));
        self.transcript.last()
    }

    fn append(&mut self, turn: ChatTurn) {
        self.surface.turn_appended(&turn);
        self.transcript.push(turn);
    }
}
