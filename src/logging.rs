// ABOUTME: Logging configuration and structured logging setup for observability and debugging
// ABOUTME: Configures log levels, formatters, and output destinations
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright (c) 2025 Async Config Contributors

//! Production-ready logging configuration with structured output

use crate::errors::AppResult;
use std::env;
use std::io;
use tracing::info;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Output format (json, pretty, compact)
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Include thread information
    pub include_thread: bool,
    /// Include span information for tracing
    pub include_spans: bool,
    /// Service name for structured logging
    pub service_name: String,
    /// Service version
    pub service_version: String,
    /// Environment (development, staging, production)
    pub environment: String,
}

/// Log output format options
#[derive(Debug, Clone)]
pub enum LogFormat {
    /// `JSON` format for production logging
    Json,
    /// Pretty format for development
    Pretty,
    /// Compact format for space-constrained environments
    Compact,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Pretty,
            include_location: false,
            include_thread: false,
            include_spans: false,
            service_name: "dyncfg".into(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            environment: "development".into(),
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let level = env::var("RUST_LOG").unwrap_or_else(|_| "info".into());

        let format = match env::var("LOG_FORMAT").as_deref() {
            Ok("json") => LogFormat::Json,
            Ok("compact") => LogFormat::Compact,
            _ => LogFormat::Pretty,
        };

        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into());
        let is_production = environment == "production";

        Self {
            level,
            format,
            include_location: is_production || env::var("LOG_INCLUDE_LOCATION").is_ok(),
            include_thread: is_production || env::var("LOG_INCLUDE_THREAD").is_ok(),
            include_spans: is_production || env::var("LOG_INCLUDE_SPANS").is_ok(),
            service_name: env::var("SERVICE_NAME").unwrap_or_else(|_| "dyncfg".into()),
            service_version: env::var("SERVICE_VERSION")
                .unwrap_or_else(|_| env!("CARGO_PKG_VERSION").to_owned()),
            environment,
        }
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if the tracing subscriber fails to initialize
    pub fn init(&self) -> AppResult<()> {
        // Noise reduction applies regardless of the RUST_LOG setting
        let env_filter = env::var("RUST_LOG")
            .map_or_else(|_| EnvFilter::new(&self.level), EnvFilter::new)
            .add_directive(
                "sqlx=warn"
                    .parse()
                    .unwrap_or_else(|_| tracing::Level::WARN.into()),
            )
            .add_directive(
                format!("dyncfg={}", self.level)
                    .parse()
                    .unwrap_or_else(|_| tracing::Level::INFO.into()),
            );

        let registry = tracing_subscriber::registry().with(env_filter);

        match self.format {
            LogFormat::Json => {
                let json_layer = fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_thread_ids(self.include_thread)
                    .with_thread_names(self.include_thread)
                    .with_target(true)
                    .with_writer(io::stdout)
                    .with_span_events(if self.include_spans {
                        FmtSpan::NEW | FmtSpan::CLOSE
                    } else {
                        FmtSpan::NONE
                    })
                    .json();

                registry.with(json_layer).init();
            }
            LogFormat::Pretty => {
                let pretty_layer = fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_thread_ids(self.include_thread)
                    .with_thread_names(self.include_thread)
                    .with_target(true)
                    .with_writer(io::stdout)
                    .with_span_events(if self.include_spans {
                        FmtSpan::NEW | FmtSpan::CLOSE
                    } else {
                        FmtSpan::NONE
                    });

                registry.with(pretty_layer).init();
            }
            LogFormat::Compact => {
                let compact_layer = fmt::layer()
                    .compact()
                    .with_file(false)
                    .with_line_number(false)
                    .with_thread_ids(false)
                    .with_thread_names(false)
                    .with_target(false)
                    .with_writer(io::stdout)
                    .with_span_events(FmtSpan::NONE);

                registry.with(compact_layer).init();
            }
        }

        self.log_startup_info();

        Ok(())
    }

    /// Log structured startup information
    fn log_startup_info(&self) {
        info!(
            service.name = %self.service_name,
            service.version = %self.service_version,
            environment = %self.environment,
            log.level = %self.level,
            log.format = ?self.format,
            "dyncfg starting up"
        );
    }
}
