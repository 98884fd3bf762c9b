//! Payload to frame encoding
//!
//! Slices a payload into data frames and, when parity is enabled, appends one
//! parity frame after the last data frame of each protection group.

use super::{DataFrame, Frame, ParityFrame};
use crate::chunker::{chunk_bytes, chunk_count};
use crate::config::EncodeOptions;
use crate::domain::{GroupIndex, SequenceNumber};
use crate::xor::xor_into;
use log::{debug, trace};

/// Running XOR state for one protection group
#[derive(Debug)]
struct GroupAccumulator<'a> {
    start: SequenceNumber,
    slices: Vec<&'a [u8]>,
}

impl<'a> GroupAccumulator<'a> {
    fn new(start: SequenceNumber, capacity: usize) -> Self {
        Self {
            start,
            slices: Vec::with_capacity(capacity),
        }
    }

    fn push(&mut self, slice: &'a [u8]) {
        self.slices.push(slice);
    }

    fn len(&self) -> usize {
        self.slices.len()
    }

    fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    /// Close the group into a parity frame
    ///
    /// The parity buffer is as long as the longest slice; shorter slices are
    /// treated as zero-padded.
    fn finish(&self, group_index: GroupIndex) -> ParityFrame {
        let size = self.slices.iter().map(|s| s.len()).max().unwrap_or(0);
        let mut parity = vec![0u8; size];
        for slice in &self.slices {
            xor_into(&mut parity, slice);
        }
        let end = self.start + (self.slices.len() as u64 - 1);
        ParityFrame::new(group_index, self.start, end, parity)
    }
}

/// Encoder for turning a payload into frames
#[derive(Debug, Clone, Default)]
pub struct FrameEncoder {
    options: EncodeOptions,
}

impl FrameEncoder {
    /// Create an encoder; `options` must already be validated
    pub fn new(options: EncodeOptions) -> Self {
        Self { options }
    }

    /// Encode a payload into frames in emission order
    pub fn encode(&self, data: &[u8]) -> Vec<Frame> {
        let EncodeOptions {
            frame_size,
            group_size,
            parity,
        } = self.options;

        let data_count = chunk_count(data.len(), frame_size);
        let parity_count = if parity {
            chunk_count(data_count, group_size)
        } else {
            0
        };
        let mut frames = Vec::with_capacity(data_count + parity_count);

        // The group size is caller-controlled; never reserve past the payload
        let group_capacity = group_size.min(data_count);
        let mut group = GroupAccumulator::new(SequenceNumber::ZERO, group_capacity);
        let mut group_index = GroupIndex::FIRST;

        for (idx, slice) in chunk_bytes(data, frame_size).enumerate() {
            let sequence = SequenceNumber::new(idx as u64);
            let frame = DataFrame::new(sequence, slice.to_vec());
            trace!(
                "Data frame {}: {} bytes, crc {}",
                sequence,
                frame.size,
                frame.checksum
            );
            frames.push(Frame::Data(frame));

            if !parity {
                continue;
            }

            group.push(slice);
            if group.len() == group_size {
                frames.push(Frame::Parity(group.finish(group_index)));
                group_index = group_index.next();
                group = GroupAccumulator::new(sequence + 1, group_capacity);
            }
        }

        if parity && !group.is_empty() {
            frames.push(Frame::Parity(group.finish(group_index)));
        }

        debug!(
            "Encoded {} bytes into {} data frames and {} parity frames",
            data.len(),
            data_count,
            parity_count
        );

        frames
    }

    /// Encode a payload straight to wire lines
    pub fn encode_lines(&self, data: &[u8]) -> Vec<String> {
        self.encode(data).iter().map(Frame::to_string).collect()
    }
}
