/// Filter used outside production when `RUST_LOG` is unset.
pub const VERBOSE_DIRECTIVES: &str = "info,kazi=debug,tower_http=debug";
/// Filter used in production when `RUST_LOG` is unset.
pub const QUIET_DIRECTIVES: &str = "info,tower_http=info";

/// Configuration for tracing initialization.
pub struct TracingConfig {
    pub environment: String,
    pub json_format: bool,
    pub directives: String,
}

impl TracingConfig {
    pub fn new(environment: impl Into<String>) -> Self {
        Self {
            environment: environment.into(),
            ..Self::default()
        }
    }

    /// JSON output and a quieter filter unless `LOG_FORMAT` says otherwise.
    pub fn production(environment: impl Into<String>) -> Self {
        Self {
            environment: environment.into(),
            json_format: json_requested().unwrap_or(true),
            directives: QUIET_DIRECTIVES.to_string(),
        }
    }
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            environment: std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "local".to_string()),
            json_format: json_requested().unwrap_or(false),
            directives: VERBOSE_DIRECTIVES.to_string(),
        }
    }
}

fn json_requested() -> Option<bool> {
    std::env::var("LOG_FORMAT")
        .ok()
        .map(|format| format.eq_ignore_ascii_case("json"))
}
