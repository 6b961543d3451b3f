//! Basic functionality integration tests for ccp CLI.

#[path = "../common/mod.rs"]
mod common;

use assert_cmd::cargo::cargo_bin_cmd;
use common::{TestFixture, byte_pattern};
use predicates::prelude::*;
use std::fs;

#[test]
fn test_basic_file_copy() {
    let fx = TestFixture::new();
    let src = fx.write_source("test.txt", b"hello world");
    let dst = fx.dest_path("test.txt");

    let mut cmd = cargo_bin_cmd!("ccp");
    cmd.arg(&src)
        .arg(&dst)
        .assert()
        .success()
        .stdout(predicate::str::contains("Copying"))
        .stdout(predicate::str::contains("Successfully copied 11 bytes"));

    assert_eq!(fs::read_to_string(&dst).unwrap(), "hello world");
}

#[test]
fn test_copy_all_byte_values_in_two_chunks() {
    let fx = TestFixture::new();
    let data: Vec<u8> = (0..5).flat_map(|_| 0u8..=255).collect();
    let src = fx.write_source("bytes.bin", &data);
    let dst = fx.dest_path("bytes.bin");

    let mut cmd = cargo_bin_cmd!("ccp");
    cmd.arg(&src)
        .arg(&dst)
        .assert()
        .success()
        .stdout(predicate::str::contains("Successfully copied 1280 bytes"))
        .stdout(predicate::str::contains("in 2 chunks"))
        .stderr(predicate::str::contains("Read 1024 bytes"))
        .stderr(predicate::str::contains("Wrote 1024 bytes"))
        .stderr(predicate::str::contains("Read 256 bytes"))
        .stderr(predicate::str::contains("Wrote 256 bytes"));

    fx.assert_file_bytes(&dst, &data);
}

#[test]
fn test_progress_reports_milestones() {
    let fx = TestFixture::new();
    let src = fx.write_source("a.bin", &byte_pattern(10));
    let dst = fx.dest_path("a.bin");

    let mut cmd = cargo_bin_cmd!("ccp");
    cmd.arg(&src)
        .arg(&dst)
        .assert()
        .success()
        .stderr(predicate::str::contains("is open for reading"))
        .stderr(predicate::str::contains("is open for writing"))
        .stderr(predicate::str::contains("Copy completed"));
}

#[test]
fn test_quiet_mode() {
    let fx = TestFixture::new();
    let src = fx.write_source("test.bin", &byte_pattern(4000));
    let dst = fx.dest_path("test.bin");

    let mut cmd = cargo_bin_cmd!("ccp");
    cmd.arg("--quiet")
        .arg(&src)
        .arg(&dst)
        .assert()
        .success()
        .stdout(predicate::str::contains("Successfully copied 4000 bytes"))
        .stderr(predicate::str::contains("Read").not());

    fx.assert_file_bytes(&dst, &byte_pattern(4000));
}

#[test]
fn test_overwrite_existing_file() {
    let fx = TestFixture::new();
    let src = fx.write_source("test.txt", b"new");
    let dst = fx.dest_path("test.txt");
    fs::write(&dst, "much longer old content").unwrap();

    let mut cmd = cargo_bin_cmd!("ccp");
    cmd.arg(&src).arg(&dst).assert().success();

    assert_eq!(fs::read_to_string(&dst).unwrap(), "new");
}

#[test]
fn test_help_flag() {
    let mut cmd = cargo_bin_cmd!("ccp");
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("ccp"))
        .stdout(predicate::str::contains("chunk"));
}

#[test]
fn test_version_flag() {
    let mut cmd = cargo_bin_cmd!("ccp");
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("ccp"));
}
