// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::consumer::FakeConsumer;
use pxb_core::{EventId, Framing};
use serde_json::json;
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;

/// A writer that captures log output for testing
#[derive(Clone, Default)]
struct CapturedLogs {
    logs: Arc<Mutex<Vec<u8>>>,
}

impl CapturedLogs {
    fn contents(&self) -> String {
        let logs = self.logs.lock().unwrap();
        String::from_utf8_lossy(&logs).to_string()
    }
}

impl std::io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.logs.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Run a closure with captured tracing output
fn with_tracing<T>(f: impl FnOnce() -> T) -> (String, T) {
    let logs = CapturedLogs::default();

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_writer(logs.clone())
        .with_ansi(false)
        .without_time()
        .finish();

    let result = tracing::subscriber::with_default(subscriber, f);
    (logs.contents(), result)
}

fn envelope() -> Envelope {
    Envelope::new(
        EventId(5),
        Category::from("enterBeacon"),
        json!({"type": "beacon"}),
        Framing::Detail,
    )
}

#[test]
fn traced_consumer_forwards_to_inner() {
    let fake = FakeConsumer::new("app");
    let traced = TracedConsumer::new(fake.clone());

    traced.deliver(&envelope()).unwrap();

    assert_eq!(fake.received_ids(), vec![5]);
    assert_eq!(traced.label(), "app");
}

#[test]
fn traced_consumer_logs_span_and_timing() {
    let (logs, result) = with_tracing(|| {
        let traced = TracedConsumer::new(FakeConsumer::new("webview"));
        traced.deliver(&envelope())
    });

    assert!(result.is_ok());
    assert!(
        logs.contains("consumer.deliver"),
        "Should log span name. Logs:\n{}",
        logs
    );
    assert!(
        logs.contains("webview"),
        "Should log consumer label. Logs:\n{}",
        logs
    );
    assert!(
        logs.contains("evt-5"),
        "Should log event id. Logs:\n{}",
        logs
    );
    assert!(
        logs.contains("elapsed_ms"),
        "Should log timing. Logs:\n{}",
        logs
    );
}

#[test]
fn traced_consumer_logs_failures() {
    let (logs, result) = with_tracing(|| {
        let fake = FakeConsumer::new("webview");
        fake.fail_with("webview gone");
        TracedConsumer::new(fake).deliver(&envelope())
    });

    assert!(result.is_err());
    assert!(
        logs.contains("delivery failed") && logs.contains("webview gone"),
        "Should log failure. Logs:\n{}",
        logs
    );
}

#[test]
fn traced_consumer_logs_registration() {
    let fake = FakeConsumer::new("webview");
    let (logs, ()) = with_tracing(|| {
        TracedConsumer::new(fake.clone()).on_registered(&Category::from("exitZone"));
    });

    assert!(logs.contains("consumer registered"), "Logs:\n{}", logs);
    assert_eq!(fake.registrations(), vec![Category::from("exitZone")]);
}
