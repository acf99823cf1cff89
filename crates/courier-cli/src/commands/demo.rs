//! Demonstration run over the built-in channels.

use crate::render;
use clap::Args;
use courier_channels::Router;
use courier_core::{Config, Message};

/// Demo command arguments.
#[derive(Args)]
pub struct DemoArgs {
    /// Print outcomes as JSON lines
    #[arg(long)]
    pub json: bool,
}

/// The demo script: `(section, channel, message, recipient)`.
fn script() -> Vec<(&'static str, &'static str, Message, &'static str)> {
    let text = Message::text("Hello! This is a plain text message.");
    let video = Message::video("https://video.mp4");
    let photo = Message::photo("/path/to/image.jpg");
    let file = Message::file("/path/to/document.pdf");

    vec![
        ("TEXT", "whatsapp", text.clone(), "@client_wa"),
        ("TEXT", "telegram", text, "@client_tg"),
        ("MEDIA", "whatsapp", video, "@client_wa"),
        ("MEDIA", "facebook", photo, "user_facebook_id"),
        ("MEDIA", "instagram", file, "user_insta_handle"),
    ]
}

/// Run the demo command.
pub async fn run(args: DemoArgs, config: &Config) -> anyhow::Result<()> {
    let router = Router::from_config(config)?;
    let mut section = "";
    let mut failures = 0usize;

    for (heading, channel, message, recipient) in script() {
        if !args.json && heading != section {
            println!("\n=== {} ===", heading);
            section = heading;
        }

        let outcome = match router.dispatch(channel, &message, recipient).await {
            Ok(outcome) => outcome,
            Err(e) => {
                // Channel disabled in config
                eprintln!("skipping {}: {}", channel, e);
                continue;
            }
        };

        if !outcome.is_success() {
            failures += 1;
        }

        if args.json {
            println!("{}", serde_json::to_string(&outcome)?);
        } else {
            render::print_outcome(&outcome);
        }
    }

    if failures > 0 {
        anyhow::bail!("{} dispatch(es) failed", failures);
    }
    Ok(())
}
