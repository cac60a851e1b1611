use vbridge_domain::coded::Coded;
use vbridge_domain::config::LoggingConfig;
use vbridge_logger::{Logger, LoggerError};

#[test]
fn console_config_installs_once_per_process() {
    let config = LoggingConfig {
        name: "console-host".to_owned(),
        level: "debug".to_owned(),
        env_filter: Some("vbridge_view_group=trace".to_owned()),
        ..LoggingConfig::default()
    };

    let logger = Logger::from_config(&config).expect("first install succeeds");
    assert!(!logger.writes_files());
    assert!(logger.guard().is_none());

    let err = Logger::from_config(&config).expect_err("global subscriber already set");
    assert!(matches!(err, LoggerError::Subscriber { .. }));
    assert_eq!(err.code(), "ERR_LOGGER_SUBSCRIBER");
}
