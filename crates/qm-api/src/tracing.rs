//! Tracing and logging configuration for the service
//!
//! Development gets human-readable output, production gets JSON lines for
//! log aggregation. `RUST_LOG` always wins over the defaults below, e.g.
//! `RUST_LOG=qm_answer=trace` shows every skipped validation stage.

use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Environment;

/// Filter directives used when `RUST_LOG` is not set.
pub const fn default_directives(env: &Environment) -> &'static str {
    match env {
        Environment::Development => "debug,tower_http=debug",
        Environment::Production => "info,qm_answer=info,tower_http=info",
    }
}

/// Install the global subscriber for `env`.
///
/// Development: pretty output with file and line. Production: flattened
/// JSON events including the current span (request id, method, uri).
pub fn init_tracing(env: &Environment) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(env)));

    if env.is_development() {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_file(true)
                    .pretty()
                    .with_filter(env_filter),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(true)
                    .flatten_event(true)
                    .with_target(true)
                    .with_filter(env_filter),
            )
            .init();
    }

    tracing::info!(environment = ?env, "Tracing initialized");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives_parse() {
        for env in [Environment::Development, Environment::Production] {
            let directives = default_directives(&env);
            assert!(EnvFilter::try_new(directives).is_ok(), "{directives}");
        }
        assert!(default_directives(&Environment::Development).starts_with("debug"));
        assert!(default_directives(&Environment::Production).starts_with("info"));
    }
}
