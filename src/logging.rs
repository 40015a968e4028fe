//! Logging Setup
//!
//! Installs the global tracing subscriber. Output goes to stderr so stdout
//! carries only the rendered page.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;

/// Initialize tracing from config; `RUST_LOG` takes precedence when set
pub fn init(config: &LoggingConfig, extra_directives: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(config, extra_directives)));

    let registry = tracing_subscriber::registry().with(filter);

    if config.format.eq_ignore_ascii_case("json") {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn default_directives(config: &LoggingConfig, extra: &str) -> String {
    let mut directives = format!("cryptolens={}", config.level);
    if !extra.is_empty() {
        directives.push(',');
        directives.push_str(extra);
    }
    directives
}
