//! Chat turn and wire types.
//!
//! A chat transcript is an ordered list of [`ChatTurn`]s owned by the chat
//! dispatcher for the lifetime of one session. Turns are appended, never
//! removed or edited.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use std::fmt;
use std::str::FromStr;

use crate::knowledge::KnowledgeBase;

/// Who produced a chat turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sender::User => write!(f, "user"),
            Sender::Bot => write!(f, "bot"),
        }
    }
}

impl FromStr for Sender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" => Ok(Sender::User),
            "bot" => Ok(Sender::Bot),
            other => Err(format!("invalid sender: '{other}'")),
        }
    }
}

/// A single turn in a chat transcript.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTurn {
    pub id: Uuid,
    pub sender: Sender,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatTurn {
    /// Build a user turn stamped with the current time.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            sender: Sender::User,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }

    /// Build a bot turn stamped with the current time.
    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            sender: Sender::Bot,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Request body for the `/chat` endpoint.
///
/// The optional knowledge base lets a client answer against its own
/// snapshot; when absent the server falls back to the builtin one.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatQuery {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub knowledge_base: Option<KnowledgeBase>,
}

/// Response body for the `/chat` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatAnswer {
    pub response: String,
}
