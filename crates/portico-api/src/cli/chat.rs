//! CLI chat commands: one-shot `ask` and the interactive `chat` loop.
//!
//! The interactive loop drives a `ChatDispatcher` with a spinner surface:
//! the indicatif spinner plays the role of the widget's typing indicator
//! and is cleared before the bot turn is printed.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::Result;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use portico_core::assistant::{Assistant, BoxCompletionBackend};
use portico_core::chat::{ChatDispatcher, ChatSurface};
use portico_infra::http::completion::HttpCompletionBackend;
use portico_types::config::PorticoConfig;
use portico_types::knowledge::KnowledgeBase;

/// Build the assistant: remote with local fallback, or local-only.
fn build_assistant(config: &PorticoConfig, local: bool) -> Assistant {
    let kb = Arc::new(KnowledgeBase::builtin());
    if local {
        Assistant::local(kb)
    } else {
        Assistant::with_backend(
            kb,
            BoxCompletionBackend::new(HttpCompletionBackend::new(config.api_base_url.clone())),
        )
    }
}

/// `portico ask <message>`
pub async fn ask(config: &PorticoConfig, message: &str, local: bool, json: bool) -> Result<()> {
    let assistant = build_assistant(config, local);
    let answer = assistant.answer(message).await;

    if json {
        let out = serde_json::json!({
            "message": message,
            "response": answer,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!();
        println!("{}", style(&answer).cyan());
        println!();
    }

    Ok(())
}

/// Typing indicator backed by an indicatif spinner.
struct SpinnerSurface {
    spinner: Mutex<Option<ProgressBar>>,
}

impl SpinnerSurface {
    fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }
}

impl ChatSurface for SpinnerSurface {
    fn typing_started(&self) {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::with_template("{spinner} {msg}").expect("static spinner template"),
        );
        bar.set_message("typing...");
        bar.enable_steady_tick(Duration::from_millis(80));
        *self.spinner.lock().expect("spinner lock poisoned") = Some(bar);
    }

    fn typing_stopped(&self) {
        if let Some(bar) = self.spinner.lock().expect("spinner lock poisoned").take() {
            bar.finish_and_clear();
        }
    }
}

/// `portico chat` -- interactive session. `exit` or `quit` leaves.
pub async fn run_chat(config: &PorticoConfig, local: bool) -> Result<()> {
    let assistant = build_assistant(config, local);
    let mut dispatcher = ChatDispatcher::with_surface(assistant, SpinnerSurface::new());
    dispatcher.toggle();

    println!();
    println!(
        "  {} {}",
        style("Portfolio Assistant").cyan().bold(),
        style("(type 'exit' to leave)").dim()
    );
    println!();
    if let Some(welcome) = dispatcher.transcript().first() {
        println!("{}", style(&welcome.text).cyan());
    }
    println!();

    loop {
        // dialoguer is synchronous; keep the runtime responsive.
        let input = tokio::task::spawn_blocking(|| {
            dialoguer::Input::<String>::new()
                .with_prompt("you")
                .allow_empty(true)
                .interact_text()
        })
        .await?;

        let line = match input {
            Ok(line) => line,
            // EOF / detached terminal ends the session.
            Err(_) => break,
        };

        let line = line.trim().to_string();
        if line.is_empty() {
            continue;
        }
        if line == "exit" || line == "quit" {
            break;
        }

        if let Some(reply) = dispatcher.send_message(&line).await {
            println!();
            println!("{}", style(&reply.text).cyan());
            println!();
        }
    }

    dispatcher.toggle();
    println!();
    println!("  {}", style("Session ended.").dim());

    Ok(())
}
