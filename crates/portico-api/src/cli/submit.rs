//! CLI submit command -- drives the full delivery pipeline.
//!
//! Builds the transport chain exactly as the site does: the relay first,
//! the direct datastore write as fallback, and the relay's notification
//! sub-endpoint as the best-effort notifier.

use anyhow::{Result, bail};
use console::style;

use portico_core::submission::coordinator::SubmissionCoordinator;
use portico_core::submission::transport::{BoxFormTransport, BoxNotifier};
use portico_infra::http::datastore::DatastoreTransport;
use portico_infra::http::relay::{RelayNotifier, RelayTransport};
use portico_types::config::PorticoConfig;
use portico_types::submission::{FormSubmission, SubmissionOutcome};

/// Build the site's standard coordinator from configuration.
pub fn build_coordinator(config: &PorticoConfig) -> SubmissionCoordinator {
    let transports = vec![
        BoxFormTransport::new(RelayTransport::new(config.api_base_url.clone())),
        BoxFormTransport::new(DatastoreTransport::new(&config.datastore)),
    ];

    SubmissionCoordinator::new(transports).with_notifier(BoxNotifier::new(RelayNotifier::new(
        config.api_base_url.clone(),
    )))
}

/// `portico submit --name .. --email .. --message ..`
pub async fn submit(
    config: &PorticoConfig,
    name: &str,
    email: &str,
    subject: &str,
    message: &str,
    json: bool,
) -> Result<()> {
    let coordinator = build_coordinator(config);
    let submission = FormSubmission::new(name, email, subject, message);

    let outcome = coordinator.submit(submission).await;

    match outcome {
        SubmissionOutcome::Delivered(receipt) => {
            if json {
                let out = serde_json::json!({
                    "delivered": true,
                    "transport": receipt.transport.to_string(),
                    "reference": receipt.reference,
                });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                println!();
                println!(
                    "  {} Message sent via {}",
                    style("*").green().bold(),
                    style(receipt.transport.to_string()).cyan()
                );
                if let Some(reference) = receipt.reference {
                    println!("  Reference: {reference}");
                }
                println!();
            }
            Ok(())
        }
        SubmissionOutcome::Skipped => {
            // A single CLI invocation has one trigger path; reaching this
            // would mean the coordinator was reused.
            bail!("a submission is already in flight");
        }
        SubmissionOutcome::Failed(err) => {
            if json {
                let out = serde_json::json!({
                    "delivered": false,
                    "error": err.to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                println!();
                println!(
                    "  {} Failed to send message. Please try again.",
                    style("x").red().bold()
                );
                println!("  {}", style(err.to_string()).dim());
                println!();
            }
            bail!("submission failed");
        }
    }
}
