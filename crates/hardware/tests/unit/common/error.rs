//! # Error Tests
//!
//! Verifies error messages and that the underlying I/O error is kept as the source.

use cisc16_core::common::SimError;
use std::error::Error;
use std::io;
use std::path::PathBuf;

#[test]
fn image_error_message_and_source() {
    let err = SimError::ImageUnavailable {
        path: PathBuf::from("os_nasm.bin"),
        source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
    };
    assert_eq!(
        err.to_string(),
        "could not read image 'os_nasm.bin': no such file"
    );
    assert!(err.is_image_error());
    assert_eq!(err.source().map(ToString::to_string).as_deref(), Some("no such file"));
}

#[test]
fn config_error_is_not_image_error() {
    let err = SimError::ConfigUnavailable {
        path: PathBuf::from("boot.json"),
        source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
    };
    assert!(!err.is_image_error());
    assert!(err.to_string().starts_with("could not read config 'boot.json'"));
}

#[test]
fn json_error_converts() {
    let json_err = serde_json::from_str::<u32>("x").unwrap_err();
    let err = SimError::from(json_err);
    assert!(err.to_string().starts_with("invalid config:"));
}
