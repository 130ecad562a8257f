/// Configure tracing once at application startup for the entire process.
///
/// `RUST_LOG` wins when set; otherwise `default_filter` (from
/// `PRODUCT_REGISTRY_LOG_LEVEL`, `info` by default) is used.
///
/// ```bash
/// RUST_LOG=debug product_registry
/// RUST_LOG=product_registry::actor_framework=debug,info product_registry
/// ```
pub fn setup_tracing(default_filter: &str) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .compact()
        .init();
}
