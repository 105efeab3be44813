//! Shared test utilities for dxf-lite integration tests.
//!
//! Test crates import this via `mod common;`. DXF input is assembled with
//! [`builders::DxfBuilder`] rather than kept as sample files.

#![allow(dead_code)]

pub mod builders;

use dxf_lite::{DxfReader, DxfReaderConfiguration, Result, SectionsContainer};
use std::fs;
use std::io::Cursor;
use std::path::PathBuf;

/// Tolerance for floating point comparisons
pub const EPS: f64 = 1e-9;

/// Read a DXF document held in memory
pub fn read_dxf(text: &str) -> Result<SectionsContainer> {
    DxfReader::from_reader(Cursor::new(text.as_bytes().to_vec()))?.read()
}

/// Read with an explicit configuration
pub fn read_dxf_with(text: &str, config: DxfReaderConfiguration) -> Result<SectionsContainer> {
    DxfReader::from_reader(Cursor::new(text.as_bytes().to_vec()))?
        .with_configuration(config)
        .read()
}

/// Write `contents` to a file under the system temp directory.
pub fn write_temp_dxf(filename: &str, contents: &[u8]) -> PathBuf {
    let dir = std::env::temp_dir().join("dxf-lite-tests");
    fs::create_dir_all(&dir).expect("create temp dir");
    let path = dir.join(format!("{}_{}", std::process::id(), filename));
    fs::write(&path, contents).expect("write temp file");
    path
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPS,
        "expected {expected}, got {actual}"
    );
}
