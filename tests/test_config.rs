//! Integration tests for encode options and their command-line surface

use courier::config::{EncodeOptions, DEFAULT_FRAME_SIZE, DEFAULT_GROUP_SIZE, MAX_FRAME_SIZE};
use courier::{build_cli, CourierError};

fn encode_matches(args: &[&str]) -> clap::ArgMatches {
    let mut argv = vec!["courier", "encode"];
    argv.extend_from_slice(args);
    let matches = build_cli().try_get_matches_from(argv).unwrap();
    matches.subcommand_matches("encode").unwrap().clone()
}

#[test]
fn test_default_options() {
    let options = EncodeOptions::default();
    assert_eq!(options.frame_size, DEFAULT_FRAME_SIZE);
    assert_eq!(options.group_size, DEFAULT_GROUP_SIZE);
    assert!(options.parity);
    assert!(options.validate().is_ok());
}

#[test]
fn test_validate_bounds() {
    assert!(EncodeOptions::new(1, 1, true).validate().is_ok());
    assert!(EncodeOptions::new(MAX_FRAME_SIZE, 1, false).validate().is_ok());
    assert!(matches!(
        EncodeOptions::new(0, 1, true).validate(),
        Err(CourierError::InvalidConfig(_))
    ));
    assert!(matches!(
        EncodeOptions::new(MAX_FRAME_SIZE + 1, 1, true).validate(),
        Err(CourierError::InvalidConfig(_))
    ));
    assert!(matches!(
        EncodeOptions::new(64, 0, false).validate(),
        Err(CourierError::InvalidConfig(_))
    ));
}

#[test]
fn test_from_args_defaults() {
    let matches = encode_matches(&["--hex", "00"]);
    assert_eq!(EncodeOptions::from_args(&matches), EncodeOptions::default());
}

#[test]
fn test_from_args_overrides() {
    let matches = encode_matches(&["--hex", "00", "--frame-size", "32", "-g", "4", "--no-parity"]);
    assert_eq!(
        EncodeOptions::from_args(&matches),
        EncodeOptions::new(32, 4, false)
    );
}

#[test]
fn test_from_args_legacy_aliases() {
    let matches = encode_matches(&["--hex", "00", "--size", "16", "--group", "2"]);
    assert_eq!(
        EncodeOptions::from_args(&matches),
        EncodeOptions::new(16, 2, true)
    );
}

#[test]
#[cfg(target_pointer_width = "64")]
fn test_from_args_huge_group_size() {
    let matches = encode_matches(&["--hex", "00", "--group-size", "1000000000000"]);
    let options = EncodeOptions::from_args(&matches);
    assert_eq!(options.group_size, 1_000_000_000_000);
    assert!(options.validate().is_ok());
    assert_eq!(courier::encode("00", &options).unwrap().len(), 2);
}

#[test]
fn test_cli_rejects_out_of_range_sizes() {
    for args in [
        ["courier", "encode", "--frame-size", "0"],
        ["courier", "encode", "--frame-size", "1000"],
        ["courier", "encode", "--group-size", "0"],
    ] {
        assert!(build_cli().try_get_matches_from(args).is_err());
    }
}

#[test]
fn test_cli_subcommand_aliases() {
    let matches = build_cli()
        .try_get_matches_from(["courier", "encode-tx", "--hex", "00"])
        .unwrap();
    assert_eq!(matches.subcommand_name(), Some("encode"));

    let matches = build_cli()
        .try_get_matches_from(["courier", "decode-frames"])
        .unwrap();
    assert_eq!(matches.subcommand_name(), Some("decode"));
}

#[test]
fn test_cli_hex_conflicts_with_input() {
    let result =
        build_cli().try_get_matches_from(["courier", "encode", "--hex", "00", "-i", "tx.hex"]);
    assert!(result.is_err());
}
