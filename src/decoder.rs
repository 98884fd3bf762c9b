//! Decode pipeline: classify lines, recover single losses, assemble
//!
//! [`FrameCollector`] owns the sequence map for one decode. Lines can be fed
//! in any order; malformed lines are counted and dropped.

use crate::assembler::{assemble, first_gap};
use crate::domain::SequenceNumber;
use crate::frame::{parse_frame, Frame, ParityFrame, ParseError};
use crate::recovery::{recover_with_parity, RecoveryOutcome, SequenceMap};
use log::{debug, trace};
use std::fmt;

/// Accumulates parsed frames until [`finish`](FrameCollector::finish)
#[derive(Debug, Default)]
pub struct FrameCollector {
    parts: SequenceMap,
    parities: Vec<ParityFrame>,
    data_frames: usize,
    rejected_lines: usize,
    blank_lines: usize,
}

impl FrameCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse one line and file the frame it carries
    ///
    /// A later valid data frame for an already seen sequence replaces the
    /// earlier one.
    pub fn push_line(&mut self, line: &str) {
        match parse_frame(line) {
            Ok(frame) => self.push_frame(frame),
            Err(ParseError::Blank) => self.blank_lines += 1,
            Err(err) => {
                debug!("Discarding line: {}", err);
                self.rejected_lines += 1;
            }
        }
    }

    /// File an already parsed frame
    pub fn push_frame(&mut self, frame: Frame) {
        match frame {
            Frame::Data(data) => {
                trace!("Data frame {} ({} bytes)", data.sequence, data.size);
                self.data_frames += 1;
                self.parts.insert(data.sequence, data.payload);
            }
            Frame::Parity(parity) => {
                trace!(
                    "Parity frame {} covering {}..={}",
                    parity.group_index,
                    parity.start_sequence,
                    parity.end_sequence
                );
                self.parities.push(parity);
            }
        }
    }

    /// Run recovery for every parity frame in arrival order, then assemble
    pub fn finish(mut self) -> DecodeReport {
        let mut recovered = Vec::new();
        for parity in &self.parities {
            if let RecoveryOutcome::Recovered(seq) = recover_with_parity(&mut self.parts, parity) {
                recovered.push(seq);
            }
        }
        recovered.sort_unstable();

        let report = DecodeReport {
            payload: assemble(&self.parts),
            data_frames: self.data_frames,
            parity_frames: self.parities.len(),
            rejected_lines: self.rejected_lines,
            blank_lines: self.blank_lines,
            recovered,
            first_gap: first_gap(&self.parts),
        };
        debug!("Decode finished: {}", report);
        report
    }
}

impl<S: AsRef<str>> Extend<S> for FrameCollector {
    fn extend<I: IntoIterator<Item = S>>(&mut self, lines: I) {
        for line in lines {
            self.push_line(line.as_ref());
        }
    }
}

/// Outcome of decoding a set of lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeReport {
    /// Longest contiguous payload from the lowest received sequence
    pub payload: Vec<u8>,
    /// Valid data frames received, duplicates included
    pub data_frames: usize,
    /// Valid parity frames received
    pub parity_frames: usize,
    /// Non-blank lines that failed validation
    pub rejected_lines: usize,
    pub blank_lines: usize,
    /// Sequences rebuilt from parity, ascending
    pub recovered: Vec<SequenceNumber>,
    /// First missing sequence that cut the payload short
    pub first_gap: Option<SequenceNumber>,
}

impl DecodeReport {
    /// True when nothing received was dropped from the payload
    ///
    /// Losses at the very start or end of the payload are indistinguishable
    /// from a shorter payload and still report complete.
    pub fn is_complete(&self) -> bool {
        self.first_gap.is_none()
    }

    pub fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }
}

impl fmt::Display for DecodeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} bytes from {} data and {} parity frames, {} rejected, {} recovered",
            self.payload.len(),
            self.data_frames,
            self.parity_frames,
            self.rejected_lines,
            self.recovered.len()
        )?;
        if let Some(gap) = self.first_gap {
            write!(f, ", truncated at sequence {}", gap)?;
        }
        Ok(())
    }
}
