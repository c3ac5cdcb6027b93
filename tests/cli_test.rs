use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;
use trellis::cli::Args;

fn make_args(args: &[&str]) -> Vec<OsString> {
    let mut res = vec![OsString::from("trellis")];
    res.extend(args.iter().map(OsString::from));
    res
}

#[test]
fn test_basic_args() {
    let args = make_args(&["./template", "spec.yaml", "./out"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.template, PathBuf::from("./template"));
    assert_eq!(parsed.spec_file, "spec.yaml");
    assert_eq!(parsed.output_dir, PathBuf::from("./out"));
    assert!(!parsed.edit);
    assert!(!parsed.verbose);
}

#[test]
fn test_all_flags() {
    let args = make_args(&["--edit", "--verbose", "./template", "spec.yaml", "./out"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert!(parsed.edit);
    assert!(parsed.verbose);
}

#[test]
fn test_short_flags() {
    let args = make_args(&["-e", "-v", "./template", "spec.yaml", "./out"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert!(parsed.edit);
    assert!(parsed.verbose);
}

#[test]
fn test_stdin_spec() {
    let args = make_args(&["./template", "-", "./out"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.spec_file, "-");
}

#[test]
fn test_missing_args() {
    let args = make_args(&["./template", "spec.yaml"]);
    assert!(Args::try_parse_from(args).is_err());
}

#[test]
fn test_too_many_args() {
    let args = make_args(&["./template", "spec.yaml", "./out", "extra"]);
    assert!(Args::try_parse_from(args).is_err());
}

#[test]
fn test_version_flag() {
    let err = Args::try_parse_from(make_args(&["--version"])).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
}
