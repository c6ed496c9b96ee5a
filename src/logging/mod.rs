use tracing_subscriber::filter::Directive;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Log directive applied on top of `RUST_LOG`
pub fn default_directive(quiet: bool) -> &'static str {
    if quiet { "tabtip_win=error" } else { "tabtip_win=info" }
}

/// Initialize JSON logging on stderr.
///
/// When `quiet` is true, only error-level events are emitted. Library code
/// never calls this; it is the binary's job.
pub fn init_logging(quiet: bool) {
    let filter = match default_directive(quiet).parse::<Directive>() {
        Ok(directive) => EnvFilter::from_default_env().add_directive(directive),
        Err(_) => EnvFilter::from_default_env(),
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_current_span(false)
                .with_span_list(false),
        )
        .with(filter)
        .init();
}
