//! Chat-turn orchestration.

pub mod dispatcher;

pub use dispatcher::{ChatDispatcher, ChatSurface, NullSurface, WidgetState};
