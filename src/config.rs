//! Configuration for encode operations

use crate::error::{CourierError, Result};

/// Default payload bytes per data frame (before base64)
pub const DEFAULT_FRAME_SIZE: usize = 64;
/// Default number of data frames covered by one parity frame
pub const DEFAULT_GROUP_SIZE: usize = 8;
/// Largest payload that fits the three-digit size field
pub const MAX_FRAME_SIZE: usize = 999;

/// Options controlling how a payload is split into frames
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Payload bytes per data frame, keep <= 64 for SMS/radio
    pub frame_size: usize,
    /// Data frames per parity group
    pub group_size: usize,
    /// Whether to emit one parity frame per group
    pub parity: bool,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            frame_size: DEFAULT_FRAME_SIZE,
            group_size: DEFAULT_GROUP_SIZE,
            parity: true,
        }
    }
}

impl EncodeOptions {
    pub fn new(frame_size: usize, group_size: usize, parity: bool) -> Self {
        Self {
            frame_size,
            group_size,
            parity,
        }
    }

    /// Build options from the `encode` subcommand matches
    ///
    /// Absent values fall back to the defaults; clap's value parsers reject
    /// malformed or out-of-range numbers before this point.
    pub fn from_args(matches: &clap::ArgMatches) -> Self {
        let frame_size = matches
            .get_one::<usize>("frame-size")
            .copied()
            .unwrap_or(DEFAULT_FRAME_SIZE);

        let group_size = matches
            .get_one::<usize>("group-size")
            .copied()
            .unwrap_or(DEFAULT_GROUP_SIZE);

        let parity = !matches.get_flag("no-parity");

        Self::new(frame_size, group_size, parity)
    }

    /// Check the options describe a frame layout the wire format can carry
    pub fn validate(&self) -> Result<()> {
        if self.frame_size == 0 || self.frame_size > MAX_FRAME_SIZE {
            return Err(CourierError::InvalidConfig(format!(
                "frame size must be between 1 and {}, got {}",
                MAX_FRAME_SIZE, self.frame_size
            )));
        }
        if self.group_size == 0 {
            return Err(CourierError::InvalidConfig(
                "group size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
