//! Single-message dispatch command.

use crate::render;
use clap::Args;
use courier_channels::Router;
use courier_core::{Config, Message, MessageFormat};
use tracing::debug;

/// Send command arguments.
#[derive(Args)]
pub struct SendArgs {
    /// Channel key (whatsapp, telegram, facebook, instagram)
    pub channel: String,

    /// Message format (text, video, photo, file)
    pub format: MessageFormat,

    /// Recipient handle, phone number, or user id
    pub recipient: String,

    /// Message content (text, URL, or path)
    pub payload: String,

    /// Print the outcome as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run the send command.
pub async fn run(args: SendArgs, config: &Config) -> anyhow::Result<()> {
    let router = Router::from_config(config)?;
    let message = Message::with_format(args.format, args.payload);
    debug!("Sending {} message via {}", message.format(), args.channel);

    let outcome = router.dispatch(&args.channel, &message, &args.recipient).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        render::print_outcome(&outcome);
    }

    match outcome.failure() {
        Some(failure) => anyhow::bail!("Dispatch failed: {}", failure),
        None => Ok(()),
    }
}
