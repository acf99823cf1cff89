//! Built-in channel adapters.
//!
//! Every adapter follows the same sequence (preview, support check, policy,
//! transmit) through [`deliver`]; only the provider message kinds, the
//! confirmation text and the policy defaults differ per channel.

mod facebook;
mod instagram;
mod telegram;
mod whatsapp;

pub use facebook::FacebookAdapter;
pub use instagram::InstagramAdapter;
pub use telegram::TelegramAdapter;
pub use whatsapp::WhatsAppAdapter;

use crate::outcome::{DispatchFailure, DispatchOutcome};
use crate::traits::{ChannelAdapter, Envelope};
use crate::transport::Transport;
use courier_core::Message;
use tracing::{debug, info, warn};

/// Run one send attempt on behalf of `adapter`.
pub(crate) async fn deliver(
    adapter: &dyn ChannelAdapter,
    transport: &dyn Transport,
    message: &Message,
    envelope: Envelope,
    recipient: &str,
) -> DispatchOutcome {
    let channel = adapter.channel_name();
    let format = message.format();
    let preview = adapter.policy().preview(message);

    if !adapter.supports(format) {
        debug!("{} does not support {} messages", channel, format);
        return DispatchOutcome::failed(
            channel,
            recipient,
            format,
            preview,
            DispatchFailure::UnsupportedFormat {
                channel: channel.to_string(),
                format,
            },
        );
    }

    let warnings = adapter.policy().inspect(message);
    for warning in &warnings {
        warn!(channel = %channel, recipient = %recipient, "{}", warning);
    }

    match transport.transmit(channel, &envelope, recipient).await {
        Ok(()) => {
            info!(
                channel = %channel,
                recipient = %recipient,
                format = %format,
                preview = %preview,
                "{}",
                envelope.note
            );
            DispatchOutcome::sent(channel, recipient, format, preview, envelope.note)
                .with_warnings(warnings)
        }
        Err(e) => {
            warn!(channel = %channel, recipient = %recipient, error = %e, "Send failed");
            DispatchOutcome::failed(
                channel,
                recipient,
                format,
                preview,
                DispatchFailure::Transport {
                    reason: e.to_string(),
                    retriable: e.is_retriable(),
                },
            )
            .with_warnings(warnings)
        }
    }
}
