use triage_session::logging::{init_logging, LogFormat};

#[test]
fn second_install_fails() {
    init_logging(LogFormat::Json).unwrap();
    let err = init_logging(LogFormat::Pretty).unwrap_err();
    assert!(err.to_string().starts_with("failed to install tracing subscriber"));
}
