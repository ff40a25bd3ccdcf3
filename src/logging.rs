// ABOUTME: Structured logging setup for the heat-map engine's tracing events
// ABOUTME: Level, format, and detail flags come from defaults or TATAMI_LOG_* variables
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Tatami Training Analytics

//! Logging configuration with structured output
//!
//! The engine itself only emits `tracing` events; hosts that want them on
//! stdout initialize a subscriber through [`LoggingConfig`]. Library users
//! with their own subscriber skip this module entirely.

use anyhow::Result;
use serde_json::json;
use std::env;
use std::io;
use tracing::info;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use tatami_core::constants::service;

/// Logging configuration for hosts that let the engine own the subscriber
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Minimum level emitted (trace, debug, info, warn, error)
    pub level: String,
    /// Formatter wired into the fmt layer
    pub format: LogFormat,
    /// Attach source file and line number to each event
    pub include_location: bool,
    /// Attach thread ids and names to each event
    pub include_thread: bool,
    /// Emit span open/close events
    pub include_spans: bool,
    /// Service name reported at startup
    pub service_name: String,
    /// Service version reported at startup
    pub service_version: String,
    /// Deployment environment; production switches the detail flags on
    pub environment: String,
}

/// Output format for the fmt layer
#[derive(Debug, Clone)]
pub enum LogFormat {
    /// One `JSON` object per line, for log shippers
    Json,
    /// Multi-line human-readable output for development
    Pretty,
    /// Single-line output with minimal decoration
    Compact,
}

impl LogFormat {
    /// Map a format name from the environment; unknown names fall back to
    /// the development formatter.
    fn from_name(name: &str) -> Self {
        match name {
            "json" => Self::Json,
            "compact" => Self::Compact,
            _ => Self::Pretty,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Pretty,
            include_location: false,
            include_thread: false,
            include_spans: false,
            service_name: service::NAME.into(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            environment: "development".into(),
        }
    }
}

impl LoggingConfig {
    /// Read the configuration from environment variables
    ///
    /// `TATAMI_LOG` (falling back to `RUST_LOG`) sets the level,
    /// `TATAMI_LOG_FORMAT` the output format; production environments turn
    /// on location, thread, and span detail unless overridden.
    #[must_use]
    pub fn from_env() -> Self {
        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into());
        let production = environment == "production";

        Self {
            level: env_level(),
            format: env::var("TATAMI_LOG_FORMAT")
                .map_or(LogFormat::Pretty, |raw| LogFormat::from_name(&raw)),
            include_location: detail_flag("TATAMI_LOG_LOCATION", production),
            include_thread: detail_flag("TATAMI_LOG_THREAD", production),
            include_spans: detail_flag("TATAMI_LOG_SPANS", production),
            service_name: env::var("SERVICE_NAME").unwrap_or_else(|_| service::NAME.into()),
            service_version: env::var("SERVICE_VERSION")
                .unwrap_or_else(|_| env!("CARGO_PKG_VERSION").to_owned()),
            environment,
        }
    }

    /// Install the global tracing subscriber described by this configuration
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        let registry = tracing_subscriber::registry().with(self.build_filter());

        let span_events = if self.include_spans {
            FmtSpan::NEW | FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        };
        let detailed = fmt::layer()
            .with_target(true)
            .with_file(self.include_location)
            .with_line_number(self.include_location)
            .with_thread_ids(self.include_thread)
            .with_thread_names(self.include_thread)
            .with_span_events(span_events)
            .with_writer(io::stdout);

        match self.format {
            LogFormat::Json => registry.with(detailed.json()).try_init()?,
            LogFormat::Pretty => registry.with(detailed).try_init()?,
            LogFormat::Compact => {
                let minimal = fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_file(false)
                    .with_line_number(false)
                    .with_thread_ids(false)
                    .with_thread_names(false)
                    .with_span_events(FmtSpan::NONE)
                    .with_writer(io::stdout);
                registry.with(minimal).try_init()?;
            }
        }

        self.announce_startup();

        Ok(())
    }

    /// Base filter from `TATAMI_LOG`/`RUST_LOG`, with the engine crates
    /// pinned to the configured level even when the base directive quiets
    /// everything else.
    fn build_filter(&self) -> EnvFilter {
        let base = env::var("TATAMI_LOG")
            .or_else(|_| env::var("RUST_LOG"))
            .map_or_else(|_| EnvFilter::new(&self.level), EnvFilter::new);

        ["tatami_heatmap", "tatami_core"]
            .into_iter()
            .fold(base, |filter, target| {
                filter.add_directive(
                    format!("{target}={}", self.level)
                        .parse()
                        .unwrap_or_else(|_| tracing::Level::INFO.into()),
                )
            })
    }

    /// Emit a startup record describing the active logging setup
    fn announce_startup(&self) {
        info!(
            service.name = %self.service_name,
            service.version = %self.service_version,
            environment = %self.environment,
            log.level = %self.level,
            log.format = ?self.format,
            "Logging initialized"
        );

        let detail = json!({
            "service": format!("{} {}", self.service_name, self.service_version),
            "environment": self.environment,
            "level": self.level,
            "format": format!("{:?}", self.format),
            "location": self.include_location,
            "thread": self.include_thread,
            "spans": self.include_spans,
        });
        info!("Logging detail: {detail}");
    }
}

/// Level directive from `TATAMI_LOG`, then `RUST_LOG`, then `info`.
fn env_level() -> String {
    env::var("TATAMI_LOG")
        .or_else(|_| env::var("RUST_LOG"))
        .unwrap_or_else(|_| "info".into())
}

/// Detail flags switch on in production or when their variable is set.
fn detail_flag(var: &str, production: bool) -> bool {
    production || env::var(var).is_ok()
}

/// Initialize logging with default configuration
///
/// # Errors
///
/// Returns an error if logging initialization fails
pub fn init_default() -> Result<()> {
    LoggingConfig::default().init()
}

/// Initialize logging from environment
///
/// # Errors
///
/// Returns an error if logging initialization fails
pub fn init_from_env() -> Result<()> {
    LoggingConfig::from_env().init()
}
