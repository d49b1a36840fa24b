use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::adapter::config::AppConfig;

/// Installs the global subscriber. `RUST_LOG` wins; otherwise the level follows the env.
pub fn init_tracing(config: &AppConfig) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(config)));

    let registry = tracing_subscriber::registry().with(env_filter);

    if config.is_production() {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

fn default_directive(config: &AppConfig) -> &'static str {
    if config.is_production() {
        "user_intake=info,tower_http=info"
    } else {
        "user_intake=debug,tower_http=debug"
    }
}
