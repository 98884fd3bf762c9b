use crate::config::MAX_FRAME_SIZE;
use clap::builder::RangedU64ValueParser;
use clap::{Arg, ArgAction, Command};

/// Command-line definition for the `courier` binary
pub fn build_cli() -> Command {
    Command::new("courier")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Frame signed transactions for offline carriers (SMS/radio/mesh/USB)")
        .arg_required_else_help(true)
        .subcommand(
            Command::new("encode")
                .visible_aliases(["encode-tx", "e"])
                .about("Encode a signed transaction into frames")
                .arg(
                    Arg::new("hex")
                        .long("hex")
                        .help("Signed transaction hex string (0x prefix allowed)")
                        .value_name("HEX")
                        .conflicts_with("input"),
                )
                .arg(
                    Arg::new("input")
                        .short('i')
                        .long("input")
                        .help("File containing the transaction hex (default: stdin)")
                        .value_name("FILE"),
                )
                .arg(output_arg("Write frames to file (default: stdout)"))
                .arg(
                    Arg::new("frame-size")
                        .short('s')
                        .long("frame-size")
                        .visible_alias("size")
                        .help("Payload bytes per frame before base64 (default: 64)")
                        .value_name("BYTES")
                        .value_parser(
                            RangedU64ValueParser::<usize>::new().range(1..=MAX_FRAME_SIZE as u64),
                        ),
                )
                .arg(
                    Arg::new("group-size")
                        .short('g')
                        .long("group-size")
                        .visible_alias("group")
                        .help("Data frames per parity group (default: 8)")
                        .value_name("COUNT")
                        .value_parser(RangedU64ValueParser::<usize>::new().range(1..)),
                )
                .arg(
                    Arg::new("no-parity")
                        .long("no-parity")
                        .help("Disable parity frames")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("decode")
                .visible_aliases(["decode-frames", "d"])
                .about("Decode frames back into raw transaction hex")
                .arg(
                    Arg::new("input")
                        .short('i')
                        .long("input")
                        .help("File with frames, one per line (default: stdin)")
                        .value_name("FILE"),
                )
                .arg(output_arg("Write transaction hex to file (default: stdout)"))
                .arg(
                    Arg::new("strict")
                        .long("strict")
                        .help("Exit with status 2 if the output is empty or truncated")
                        .action(ArgAction::SetTrue),
                ),
        )
}

fn output_arg(help: &'static str) -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .help(help)
        .value_name("FILE")
}
