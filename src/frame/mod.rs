//! Data and parity frames and their line-oriented wire format
//!
//! ```text
//! Data:   F:<seq:06>:<size:03>:<crc:08x>:<base64 payload>
//! Parity: P:<gidx:06>:<start:06>:<end:06>:<size:03>:<crc:08x>:<base64 parity>
//! ```

pub mod encoder;
pub mod error;
pub mod parser;

pub use encoder::FrameEncoder;
pub use error::ParseError;
pub use parser::parse_frame;

use crate::checksum::compute_crc32;
use crate::domain::{Crc32Value, GroupIndex, SequenceNumber};
use crate::envelope::encode_envelope;
use std::fmt;

pub const DATA_TAG: &str = "F";
pub const PARITY_TAG: &str = "P";
pub const FIELD_SEPARATOR: char = ':';

/// One contiguous slice of the original payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataFrame {
    pub sequence: SequenceNumber,
    pub size: usize,
    pub checksum: Crc32Value,
    pub payload: Vec<u8>,
}

impl DataFrame {
    /// Build a frame for a payload slice, computing size and checksum
    pub fn new(sequence: SequenceNumber, payload: Vec<u8>) -> Self {
        Self {
            sequence,
            size: payload.len(),
            checksum: compute_crc32(&payload),
            payload,
        }
    }
}

impl fmt::Display for DataFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{DATA_TAG}:{:06}:{:03}:{}:{}",
            self.sequence.as_u64(),
            self.size,
            self.checksum,
            encode_envelope(&self.payload)
        )
    }
}

/// XOR of every data frame in one protection group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParityFrame {
    pub group_index: GroupIndex,
    pub start_sequence: SequenceNumber,
    pub end_sequence: SequenceNumber,
    pub size: usize,
    pub checksum: Crc32Value,
    pub parity: Vec<u8>,
}

impl ParityFrame {
    pub fn new(
        group_index: GroupIndex,
        start_sequence: SequenceNumber,
        end_sequence: SequenceNumber,
        parity: Vec<u8>,
    ) -> Self {
        Self {
            group_index,
            start_sequence,
            end_sequence,
            size: parity.len(),
            checksum: compute_crc32(&parity),
            parity,
        }
    }

    /// Every sequence number this group covers, received or not
    pub fn sequences(&self) -> impl Iterator<Item = SequenceNumber> {
        SequenceNumber::range(self.start_sequence, self.end_sequence)
    }
}

impl fmt::Display for ParityFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{PARITY_TAG}:{:06}:{:06}:{:06}:{:03}:{}:{}",
            self.group_index.as_u64(),
            self.start_sequence.as_u64(),
            self.end_sequence.as_u64(),
            self.size,
            self.checksum,
            encode_envelope(&self.parity)
        )
    }
}

/// A parsed line of the wire format
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frame {
    Data(DataFrame),
    Parity(ParityFrame),
}

impl Frame {
    pub fn is_parity(&self) -> bool {
        matches!(self, Frame::Parity(_))
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Frame::Data(frame) => fmt::Display::fmt(frame, f),
            Frame::Parity(frame) => fmt::Display::fmt(frame, f),
        }
    }
}

impl From<DataFrame> for Frame {
    fn from(frame: DataFrame) -> Self {
        Frame::Data(frame)
    }
}

impl From<ParityFrame> for Frame {
    fn from(frame: ParityFrame) -> Self {
        Frame::Parity(frame)
    }
}
