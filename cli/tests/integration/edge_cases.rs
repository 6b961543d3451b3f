//! Boundary case integration tests for ccp CLI.
//!
//! Sizes around the 1024-byte transfer buffer exercise end-of-stream
//! detection: the reported chunk count must never include an empty chunk.

#[path = "../common/mod.rs"]
mod common;

use assert_cmd::cargo::cargo_bin_cmd;
use common::{TestFixture, byte_pattern};
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
#[case::empty(0, 0)]
#[case::one_byte(1, 1)]
#[case::just_below_buffer(1023, 1)]
#[case::exact_buffer(1024, 1)]
#[case::just_above_buffer(1025, 2)]
#[case::exact_multiple(4096, 4)]
#[case::large(1024 * 1024 + 17, 1025)]
fn test_copy_sizes(#[case] size: usize, #[case] chunks: u64) {
    let fx = TestFixture::new();
    let data = byte_pattern(size);
    let src = fx.write_source("data.bin", &data);
    let dst = fx.dest_path("data.bin");

    let mut cmd = cargo_bin_cmd!("ccp");
    cmd.arg("-q")
        .arg(&src)
        .arg(&dst)
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "Successfully copied {size} bytes"
        )))
        .stdout(predicate::str::contains(format!(" in {chunks} chunk")));

    fx.assert_file_bytes(&dst, &data);
}

#[test]
fn test_exact_multiple_has_no_empty_write() {
    let fx = TestFixture::new();
    let src = fx.write_source("data.bin", &byte_pattern(2048));
    let dst = fx.dest_path("data.bin");

    let mut cmd = cargo_bin_cmd!("ccp");
    cmd.arg(&src)
        .arg(&dst)
        .assert()
        .success()
        .stderr(predicate::str::contains("Wrote 0 bytes").not())
        .stderr(predicate::str::contains("Read 0 bytes").not());
}

#[test]
fn test_unicode_and_space_filenames() {
    let fx = TestFixture::new();
    let src = fx.write_source("données source.txt", "ünïcødé content".as_bytes());
    let dst = fx.dest_path("目标 文件.txt");

    let mut cmd = cargo_bin_cmd!("ccp");
    cmd.arg(&src).arg(&dst).assert().success();

    fx.assert_file_bytes(&dst, "ünïcødé content".as_bytes());
}
