use anyhow::Context;
use clap::{Parser, ValueEnum};
use core::net::SocketAddr;
use core::time::Duration;
use numerus::BatchSizePolicy;

/// Runtime configuration for the `numerus-server` binary.
///
/// All values are parsed from CLI arguments or environment variables (a `.env`
/// file is loaded first), with defaults suitable for local use.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "numerus-server",
    version,
    about = "An HTTP service converting integers to Roman numerals"
)]
pub struct CliArgs {
    /// Address to listen on.
    ///
    /// Example: "0.0.0.0:8080" or "127.0.0.1:3000"
    ///
    /// Environment variable: `SERVER_ADDR`
    #[arg(long, env = "SERVER_ADDR", default_value_t = String::from("0.0.0.0:8080"))]
    pub server_addr: String,

    /// Number of values encoded per concurrent chunk in range requests.
    ///
    /// `0` selects adaptive sizing, which derives the chunk width from the
    /// size of each requested range.
    ///
    /// Environment variable: `BATCH_SIZE`
    #[arg(long, env = "BATCH_SIZE", default_value_t = 0)]
    pub batch_size: usize,

    /// Upper bound, in milliseconds, on a single range conversion. In-flight
    /// chunk tasks are aborted when it elapses. `0` disables the timeout.
    ///
    /// Environment variable: `REQUEST_TIMEOUT_MS`
    #[arg(long, env = "REQUEST_TIMEOUT_MS", default_value_t = 30_000)]
    pub request_timeout_ms: u64,

    /// Console log output format.
    ///
    /// Environment variable: `LOG_FORMAT`
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Multi-line, human readable.
    Pretty,
    /// One JSON object per line.
    Json,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub server_addr: SocketAddr,
    pub batch_size: BatchSizePolicy,
    pub request_timeout: Option<Duration>,
    pub log_format: LogFormat,
}

impl TryFrom<CliArgs> for ServerConfig {
    type Error = anyhow::Error;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        let server_addr = args
            .server_addr
            .parse::<SocketAddr>()
            .with_context(|| {
                format!("SERVER_ADDR ({}) is not a socket address", args.server_addr)
            })?;

        let request_timeout =
            (args.request_timeout_ms > 0).then(|| Duration::from_millis(args.request_timeout_ms));

        Ok(Self {
            server_addr,
            batch_size: BatchSizePolicy::from_configured(args.batch_size),
            request_timeout,
            log_format: args.log_format,
        })
    }
}
