use crate::Environment;
use tracing::{debug, info};
use tracing_subscriber::{prelude::*, EnvFilter};

/// Install color-eyre with a project-standard configuration.
///
/// Call this early in main() before any fallible operations to ensure
/// colored error output. Safe to call multiple times.
pub fn install_color_eyre() {
    let _ = color_eyre::config::HookBuilder::default()
        .display_location_section(true)
        .display_env_section(false)
        .install();
}

/// Initialize tracing with environment-aware configuration.
///
/// - **Production** (`APP_ENV=production`): JSON format for log aggregation,
///   module targets hidden, `info` default level.
/// - **Development** (default): pretty-printed format, `debug` default level.
///
/// `RUST_LOG` overrides the default level in both environments. An
/// ErrorLayer is always installed so span traces are captured on errors.
///
/// Safe to call multiple times; re-initialization is silently skipped
/// (common in tests).
pub fn init_tracing(environment: &Environment) {
    let is_production = environment.is_production();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if is_production {
            EnvFilter::new("info,tower_http=info")
        } else {
            EnvFilter::new("debug,tower_http=debug")
        }
    });

    let result = if is_production {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(false)
                    .flatten_event(true),
            )
            .with(tracing_error::ErrorLayer::default())
            .with(filter)
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_file(false)
                    .with_line_number(false)
                    .pretty(),
            )
            .with(tracing_error::ErrorLayer::default())
            .with(filter)
            .try_init()
    };

    match result {
        Ok(_) => {
            info!("Tracing initialized. Environment: {:?}", environment);
        }
        Err(_) => {
            debug!("Tracing already initialized, skipping re-initialization");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_tracing_development() {
        let env = Environment::Development;
        init_tracing(&env);
    }

    #[test]
    fn test_init_tracing_multiple_calls() {
        let env = Environment::Development;
        init_tracing(&env);
        init_tracing(&env);
    }

    #[test]
    fn test_init_tracing_with_rust_log_env() {
        temp_env::with_var("RUST_LOG", Some("trace"), || {
            let env = Environment::Production;
            init_tracing(&env);
        });
    }
}
