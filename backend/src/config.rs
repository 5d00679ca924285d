use std::net::SocketAddr;
use std::time::Duration;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Server-rendered heading that ticks once per second")]
pub struct Config {
    /// Address the HTTP server listens on
    #[arg(long, env = "TICKER_BIND", default_value = "0.0.0.0:8001")]
    pub bind: SocketAddr,
    /// Heading text before any tick
    #[arg(long, env = "TICKER_LABEL", default_value = "Hello World")]
    pub label: String,
    /// Document title of the page
    #[arg(long, env = "TICKER_TITLE", default_value = "Hello World")]
    pub title: String,
    /// Milliseconds between ticks
    #[arg(long, env = "TICKER_TICK_MS", default_value_t = 1000)]
    pub tick_ms: u64,
    /// Seconds between heartbeat pings to the browser
    #[arg(long, env = "TICKER_HEARTBEAT_SECS", default_value_t = 5)]
    pub heartbeat_secs: u64,
    /// Seconds of client silence before the session is dropped
    #[arg(long, env = "TICKER_CLIENT_TIMEOUT_SECS", default_value_t = 10)]
    pub client_timeout_secs: u64,
}

impl Config {
    pub fn view_settings(&self) -> ViewSettings {
        ViewSettings {
            label: self.label.clone(),
            title: self.title.clone(),
            tick_period: Duration::from_millis(self.tick_ms.max(1)),
            heartbeat_interval: Duration::from_secs(self.heartbeat_secs.max(1)),
            client_timeout: Duration::from_secs(self.client_timeout_secs.max(1)),
        }
    }
}

/// Per-view settings shared by every request handler.
#[derive(Debug, Clone)]
pub struct ViewSettings {
    pub label: String,
    pub title: String,
    pub tick_period: Duration,
    pub heartbeat_interval: Duration,
    pub client_timeout: Duration,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            label: "Hello World".to_string(),
            title: "Hello World".to_string(),
            tick_period: Duration::from_secs(1),
            heartbeat_interval: Duration::from_secs(5),
            client_timeout: Duration::from_secs(10),
        }
    }
}
