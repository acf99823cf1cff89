//! End-to-end dispatch scenarios through the router.
//!
//! These tests build routers the way the CLI does and check outcomes
//! against a recording transport instead of printed output.

use courier_channels::{
    ChannelAdapter, ChannelError, ChannelPolicy, ChannelRegistryBuilder, DispatchFailure,
    DispatchOutcome, Envelope, Router, TelegramAdapter, TransportError,
};
use courier_core::{Config, Message, MessageFormat};
use courier_integration_tests::{FailingTransport, RecordingTransport};
use std::sync::Arc;

fn router() -> (Router, Arc<RecordingTransport>) {
    let transport = Arc::new(RecordingTransport::new());
    (Router::with_default_channels(transport.clone()), transport)
}

#[tokio::test]
async fn telegram_large_video_is_sent_with_warning() {
    let (router, transport) = router();

    let outcome = router
        .dispatch("telegram", &Message::video("x".repeat(1200)), "@client_tg")
        .await
        .unwrap();

    assert!(outcome.is_success());
    assert_eq!(outcome.warning().map(|w| w.tag()), Some("large video"));
    assert_eq!(outcome.format.to_string(), "Video");

    let sent = transport.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].channel, "Telegram");
    assert_eq!(sent[0].envelope.content.len(), 1200);
}

#[tokio::test]
async fn facebook_text_hello() {
    let (router, _) = router();

    let outcome = router
        .dispatch("facebook", &Message::text("hello"), "user_id")
        .await
        .unwrap();

    assert!(outcome.is_success());
    assert_eq!(outcome.format, MessageFormat::Text);
    assert!(outcome.warnings.is_empty());
}

#[tokio::test]
async fn myspace_is_unsupported() {
    let (router, transport) = router();

    let err = router
        .dispatch("myspace", &Message::text("hi"), "x")
        .await
        .unwrap_err();

    assert!(matches!(err, ChannelError::UnsupportedChannel(ref k) if k == "myspace"));
    assert!(transport.sent().is_empty());
}

#[tokio::test]
async fn format_is_reported_verbatim_everywhere() {
    let (router, transport) = router();

    for channel in ["whatsapp", "telegram", "facebook", "instagram"] {
        for format in MessageFormat::ALL {
            let message = Message::with_format(format, "payload");
            let outcome = router.dispatch(channel, &message, "r").await.unwrap();
            assert_eq!(outcome.format, format);
        }
    }

    let sent = transport.sent();
    assert_eq!(sent.len(), 16);
    assert!(sent.iter().all(|t| t.envelope.content == "payload"));
}

#[tokio::test]
async fn demo_sequence_reaches_every_provider() {
    let (router, transport) = router();

    let text = Message::text("Hello! This is a plain text message.");
    router.dispatch("whatsapp", &text, "@client_wa").await.unwrap();
    router.dispatch("telegram", &text, "@client_tg").await.unwrap();
    router
        .dispatch("whatsapp", &Message::video("https://video.mp4"), "@client_wa")
        .await
        .unwrap();
    router
        .dispatch("facebook", &Message::photo("/path/to/image.jpg"), "user_facebook_id")
        .await
        .unwrap();
    router
        .dispatch("instagram", &Message::file("/path/to/document.pdf"), "user_insta_handle")
        .await
        .unwrap();

    let kinds: Vec<(String, &str)> = transport
        .sent()
        .into_iter()
        .map(|t| (t.channel, t.envelope.kind))
        .collect();
    assert_eq!(
        kinds,
        vec![
            ("WhatsApp".to_string(), "text"),
            ("Telegram".to_string(), "sendMessage"),
            ("WhatsApp".to_string(), "video"),
            ("Facebook Messenger".to_string(), "image"),
            ("Instagram Direct".to_string(), "file"),
        ]
    );
}

#[tokio::test]
async fn transport_failures_are_outcomes_not_errors() {
    let router = Router::with_default_channels(Arc::new(FailingTransport(
        TransportError::Unavailable("provider down".to_string()),
    )));

    let outcome = router
        .dispatch("whatsapp", &Message::text("hi"), "@client_wa")
        .await
        .expect("channel resolves");

    assert!(!outcome.is_success());
    assert!(matches!(
        outcome.failure(),
        Some(DispatchFailure::Transport { retriable: true, .. })
    ));
}

#[tokio::test]
async fn config_thresholds_flow_into_adapters() {
    let mut config = Config::default();
    config.channels.whatsapp.large_video_threshold = 5;
    config.channels.instagram.enabled = false;

    let router = Router::with_transport(&config, Arc::new(RecordingTransport::new()));

    let outcome = router
        .dispatch("whatsapp", &Message::video("123456"), "@client_wa")
        .await
        .unwrap();
    assert!(outcome.has_warning("large video"));

    assert!(router
        .dispatch("instagram", &Message::text("hi"), "handle")
        .await
        .is_err());
}

/// A provider added without touching the router or the built-in adapters.
struct SmsAdapter {
    policy: ChannelPolicy,
}

#[async_trait::async_trait]
impl ChannelAdapter for SmsAdapter {
    fn channel_name(&self) -> &str {
        "SMS"
    }

    fn policy(&self) -> &ChannelPolicy {
        &self.policy
    }

    fn supports(&self, format: MessageFormat) -> bool {
        format == MessageFormat::Text
    }

    async fn send(&self, message: &Message, recipient: &str) -> DispatchOutcome {
        let preview = self.policy.preview(message);
        if !self.supports(message.format()) {
            return DispatchOutcome::failed(
                "SMS",
                recipient,
                message.format(),
                preview,
                DispatchFailure::UnsupportedFormat {
                    channel: "SMS".to_string(),
                    format: message.format(),
                },
            );
        }
        let envelope = Envelope::new(message, "sms", "queued");
        DispatchOutcome::sent("SMS", recipient, message.format(), preview, envelope.note)
    }
}

#[tokio::test]
async fn custom_adapter_registers_alongside_builtins() {
    let transport = Arc::new(RecordingTransport::new());
    let registry = ChannelRegistryBuilder::new()
        .register("telegram", Arc::new(TelegramAdapter::new(transport)))
        .unwrap()
        .register("SMS", Arc::new(SmsAdapter { policy: ChannelPolicy::new(160) }))
        .unwrap()
        .build();
    let router = Router::new(registry);

    let outcome = router.dispatch("sms", &Message::text("hi"), "+5511").await.unwrap();
    assert!(outcome.is_success());

    let outcome = router.dispatch("sms", &Message::photo("a.jpg"), "+5511").await.unwrap();
    assert!(matches!(
        outcome.failure(),
        Some(DispatchFailure::UnsupportedFormat { .. })
    ));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn shared_router_across_tasks() {
    let (router, transport) = router();
    let router = Arc::new(router);

    let handles: Vec<_> = (0..32)
        .map(|i| {
            let router = router.clone();
            tokio::spawn(async move {
                let channel = ["whatsapp", "telegram", "facebook", "instagram"][i % 4];
                router
                    .dispatch(channel, &Message::text(format!("msg {}", i)), "r")
                    .await
            })
        })
        .collect();

    for handle in handles {
        let outcome = handle.await.unwrap().unwrap();
        assert!(outcome.is_success());
    }
    assert_eq!(transport.sent().len(), 32);
}
