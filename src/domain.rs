//! Core domain types for frame operations
//!
//! This module contains type-safe wrappers for frame sequence numbers, parity
//! group indices and checksums. These newtypes make it impossible to pass a
//! group index where a sequence number is expected, or a byte count where a
//! checksum is expected.
//!
//! ## Type Safety Benefits
//!
//! - **SequenceNumber, GroupIndex**: Both are small integers on the wire; the
//!   types keep data-frame numbering and parity-group numbering apart
//! - **Crc32Value**: Prevents mixing CRC checksums with sizes/counts/other u32 values

use std::fmt;
use std::ops::RangeInclusive;

/// Position of a data frame within the encoded payload (0-based, global)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SequenceNumber(u64);

impl SequenceNumber {
    pub const ZERO: SequenceNumber = SequenceNumber(0);

    pub fn new(value: u64) -> Self {
        SequenceNumber(value)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }

    /// The sequence number that follows this one, or `None` at `u64::MAX`
    pub fn next(&self) -> Option<SequenceNumber> {
        self.0.checked_add(1).map(SequenceNumber)
    }

    /// Iterate every sequence number in `start..=end`
    ///
    /// Yields nothing when `start > end`.
    pub fn range(start: SequenceNumber, end: SequenceNumber) -> impl Iterator<Item = Self> {
        RangeInclusive::new(start.0, end.0).map(SequenceNumber)
    }
}

impl From<u64> for SequenceNumber {
    fn from(value: u64) -> Self {
        SequenceNumber::new(value)
    }
}

impl std::ops::Add<u64> for SequenceNumber {
    type Output = SequenceNumber;

    fn add(self, rhs: u64) -> SequenceNumber {
        SequenceNumber(self.0 + rhs)
    }
}

impl fmt::Display for SequenceNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 1-based index of a parity protection group
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GroupIndex(u64);

impl GroupIndex {
    pub const FIRST: GroupIndex = GroupIndex(1);

    pub fn new(value: u64) -> Self {
        GroupIndex(value)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }

    pub fn next(&self) -> GroupIndex {
        GroupIndex(self.0 + 1)
    }
}

impl From<u64> for GroupIndex {
    fn from(value: u64) -> Self {
        GroupIndex::new(value)
    }
}

impl fmt::Display for GroupIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Type-safe wrapper for CRC32 checksum values
/// Prevents mixing CRC values with other u32 values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Crc32Value(u32);

impl Crc32Value {
    pub fn new(value: u32) -> Self {
        Crc32Value(value)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl From<u32> for Crc32Value {
    fn from(value: u32) -> Self {
        Crc32Value::new(value)
    }
}

impl PartialEq<u32> for Crc32Value {
    fn eq(&self, other: &u32) -> bool {
        self.0 == *other
    }
}

impl PartialEq<Crc32Value> for u32 {
    fn eq(&self, other: &Crc32Value) -> bool {
        *self == other.0
    }
}

/// Renders as 8 lowercase hex digits, the frame wire representation
impl fmt::Display for Crc32Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08x}", self.0)
    }
}
