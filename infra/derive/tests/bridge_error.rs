use std::borrow::Cow;
use std::error::Error as _;
use vbridge_domain::coded::{Coded, CodedError};

#[vbridge_derive::bridge_error]
pub enum SensorError {
    #[code = "ERR_SENSOR_IO"]
    #[error("Sensor IO error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[code = "ERR_SENSOR_STATE"]
    #[error("Sensor state error{}: {message}", format_context(.context))]
    State { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[code = "ERR_SENSOR_INTERNAL"]
    #[error("Internal sensor error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn read_missing() -> Result<(), SensorError> {
    Err::<(), _>(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"))
        .context("reading sensor")?;
    Ok(())
}

#[test]
fn each_variant_reports_its_code() {
    let io = SensorError::from(std::io::Error::other("disk"));
    let state = SensorError::State { message: "stale".into(), context: None };
    let internal = SensorError::from(String::from("unexpected"));

    assert_eq!(io.code(), "ERR_SENSOR_IO");
    assert_eq!(state.code(), "ERR_SENSOR_STATE");
    assert_eq!(internal.code(), "ERR_SENSOR_INTERNAL");
}

#[test]
fn context_on_source_result_wraps_and_annotates() {
    let err = read_missing().expect_err("io error should propagate");
    assert!(matches!(err, SensorError::Io { .. }));
    assert_eq!(err.to_string(), "Sensor IO error (reading sensor): gone");
    assert!(err.source().is_some(), "io error is kept as the source");
}

#[test]
fn context_on_own_result_overwrites_context() {
    let res: Result<(), SensorError> = Err("bad".into());
    let err = res.context("while sampling").expect_err("still an error");
    assert_eq!(err.to_string(), "Internal sensor error (while sampling): bad");
}

#[test]
fn coded_errors_project_into_coded_error() {
    let coded = CodedError::from_coded(SensorError::State { message: "stale".into(), context: None });
    assert_eq!(coded.code(), "ERR_SENSOR_STATE");
    assert_eq!(coded.message(), Some("Sensor state error: stale"));
}
