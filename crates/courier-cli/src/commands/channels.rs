//! Channel listing command.

use courier_channels::Router;
use courier_core::Config;

/// Run the channels command.
pub fn run(config: &Config) -> anyhow::Result<()> {
    let router = Router::from_config(config)?;

    println!("Registered channels:\n");
    println!(
        "  {:<12} {:<20} {:>8} {:>12} {:>10}",
        "KEY", "NAME", "PREVIEW", "VIDEO WARN", "TEXT MAX"
    );
    println!("  {}", "-".repeat(66));

    for (key, adapter) in router.registry().iter() {
        let policy = adapter.policy();
        println!(
            "  {:<12} {:<20} {:>8} {:>12} {:>10}",
            key,
            adapter.channel_name(),
            policy.preview_length,
            policy.large_video_threshold,
            policy.text_max_length
        );
    }

    let disabled: Vec<&str> = config
        .channels
        .iter()
        .filter(|(_, c)| !c.enabled)
        .map(|(k, _)| k)
        .collect();
    if !disabled.is_empty() {
        println!("\n  disabled: {}", disabled.join(", "));
    }

    Ok(())
}
