//! Shared utilities for integration testing.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::time::Duration;

use chrono::NaiveDateTime;
use sleepy_server::config::{ListenerConfig, SleepyConfig};
use sleepy_server::http::{HttpServer, ServerError};
use sleepy_server::lifecycle::{startup, Shutdown};
use tokio::task::JoinHandle;

pub struct TestServer {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
    pub handle: JoinHandle<Result<(), ServerError>>,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

/// Start the server on an ephemeral loopback port.
pub async fn start_server(mut config: SleepyConfig) -> TestServer {
    config.listener = ListenerConfig {
        bind_address: "127.0.0.1:0".into(),
    };

    let listener = startup::bind(&config.listener).await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config);
    let server_shutdown = shutdown.subscribe();
    let handle = tokio::spawn(async move { server.run(listener, server_shutdown).await });

    TestServer {
        addr,
        shutdown,
        handle,
    }
}

pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .no_proxy()
        .timeout(Duration::from_secs(30))
        .build()
        .unwrap()
}

/// A parsed `Slept {delay} s from {start} to {end}` body.
#[derive(Debug)]
pub struct SleptBody {
    pub delay: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl SleptBody {
    pub fn window_ms(&self) -> i64 {
        (self.end - self.start).num_milliseconds()
    }
}

pub fn parse_body(body: &str) -> SleptBody {
    let rest = body.strip_prefix("Slept ").expect("body prefix");
    let (delay, rest) = rest.split_once(" s from ").expect("delay separator");
    let (start, end) = rest.split_once(" to ").expect("window separator");

    SleptBody {
        delay: delay.to_string(),
        start: parse_timestamp(start),
        end: parse_timestamp(end),
    }
}

fn parse_timestamp(s: &str) -> NaiveDateTime {
    assert_eq!(s.len(), "2024-01-01 00:00:00.000".len(), "timestamp {s:?}");
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.3f").expect("timestamp format")
}
