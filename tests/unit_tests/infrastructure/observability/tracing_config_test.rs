use kazi::infrastructure::observability::{QUIET_DIRECTIVES, TracingConfig, VERBOSE_DIRECTIVES};

#[test]
fn given_explicit_environment_when_creating_config_then_uses_it() {
    let config = TracingConfig::new("Test");

    assert_eq!(config.environment, "Test");
}

#[test]
fn given_non_production_environment_when_creating_config_then_uses_verbose_filter() {
    let config = TracingConfig::new("Local");

    assert_eq!(config.directives, VERBOSE_DIRECTIVES);
}

#[test]
fn given_production_environment_when_creating_config_then_uses_quiet_filter() {
    let config = TracingConfig::production("Prod");

    assert_eq!(config.environment, "Prod");
    assert_eq!(config.directives, QUIET_DIRECTIVES);
}
