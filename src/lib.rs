//! Split signed transactions into checksummed text frames for lossy carriers
//!
//! Frames are one line each, survive SMS/radio/manual transcription, and can
//! arrive in any order. An optional XOR parity frame per group lets the
//! decoder rebuild one lost data frame per group.
//!
//! ```
//! use courier::{decode, encode, EncodeOptions};
//!
//! let frames = encode(&"deadbeef".repeat(32), &EncodeOptions::default()).unwrap();
//! assert_eq!(frames.len(), 3);
//! assert_eq!(hex::encode(decode(&frames)), "deadbeef".repeat(32));
//! ```

pub mod args;
pub mod assembler;
pub mod checksum;
pub mod chunker;
pub mod codec;
pub mod config;
pub mod decoder;
pub mod domain;
pub mod envelope;
pub mod error;
pub mod frame;
pub mod recovery;
pub mod xor;

pub use args::build_cli;
pub use codec::{decode, decode_with_report, encode, encode_bytes, normalize_hex};
pub use config::EncodeOptions;
pub use decoder::{DecodeReport, FrameCollector};
pub use error::{CourierError, Result};
pub use frame::{parse_frame, DataFrame, Frame, ParityFrame, ParseError};
