use clap::Parser;

/// Queue broadcast server
#[derive(Parser, Debug, Clone)]
#[command(name = "QueueBroadcastServer", version)]
pub struct Config {
    /// HTTP and WebSocket listen port
    #[arg(long, env = "QUEUE_PORT", default_value_t = 3000)]
    pub port: u16,

    /// Only cross-origin client allowed to connect
    #[arg(long, env = "QUEUE_CORS_ORIGIN", default_value = "http://localhost:5173")]
    pub cors_origin: String,

    /// Enables the newline-delimited JSON TCP transport on this port
    #[arg(long, env = "QUEUE_TCP_PORT")]
    pub tcp_port: Option<u16>,

    /// Tracing filter, e.g. `info` or `QueueBroadcastServer=debug`
    #[arg(long, env = "QUEUE_LOG", default_value = "debug")]
    pub log_level: String,
}
