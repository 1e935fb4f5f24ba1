//! Error Extension Tests

use std::io;

use vitrine_domain::error::{Error, Result};
use vitrine_infrastructure::error_ext::ErrorContext;

fn not_found() -> std::result::Result<(), io::Error> {
    Err(io::Error::new(io::ErrorKind::NotFound, "file not found"))
}

#[test]
fn test_io_context() {
    let result: Result<()> = not_found().io_context("failed to read products");

    match result {
        Err(Error::Io { message, source }) => {
            assert_eq!(message, "failed to read products: file not found");
            assert!(source.is_some());
        }
        other => panic!("Expected Io error, got {other:?}"),
    }
}

#[test]
fn test_config_context() {
    let result: Result<()> = not_found().config_context("bad config");
    assert!(matches!(result, Err(Error::Configuration { .. })));
}

#[test]
fn test_network_context() {
    let result: Result<()> = not_found().network_context("catalog unreachable");
    let err = result.unwrap_err();
    assert!(matches!(err, Error::Network { .. }));
    assert!(err.to_string().contains("catalog unreachable"));
}

#[test]
fn test_lazy_context_is_infrastructure() {
    let result: Result<()> = not_found().with_context(|| format!("step {}", 3));

    match result {
        Err(Error::Infrastructure { message, .. }) => assert!(message.starts_with("step 3: ")),
        other => panic!("Expected Infrastructure error, got {other:?}"),
    }
}

#[test]
fn test_context_passes_ok_through() {
    let result: Result<u32> = Ok::<u32, io::Error>(7).context("unused");
    assert_eq!(result.unwrap(), 7);
}
