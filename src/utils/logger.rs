use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter directive when neither `RUST_LOG` nor a configured level is present.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "monitoring_guide=debug"
    } else {
        "monitoring_guide=warn"
    }
}

/// Logs go to stderr so stdout only ever carries the rendered document.
pub fn init_cli_logger(verbose: bool, level: Option<&str>, json: bool) {
    let directive = match level {
        Some(level) if !verbose => level.to_string(),
        _ => default_directive(verbose).to_string(),
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));

    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .json(),
            )
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false)
                    .compact(),
            )
            .init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(true), "monitoring_guide=debug");
        assert_eq!(default_directive(false), "monitoring_guide=warn");
    }
}
