//! Single-loss recovery from parity frames
//!
//! A parity frame holds the XOR of every data frame in its group, so when
//! exactly one member is missing it equals the parity XORed with all the
//! others. Two or more losses in a group cannot be corrected.
//!
//! Recovered bytes are not checksum-verified: the lost frame's CRC never
//! arrived. When the lost frame was a short final slice the recovered bytes
//! carry trailing zero padding up to the parity size.

use crate::domain::SequenceNumber;
use crate::frame::ParityFrame;
use crate::xor::{xor_into, xor_padded};
use log::debug;
use std::collections::BTreeMap;

/// Received payloads keyed by sequence number
pub type SequenceMap = BTreeMap<SequenceNumber, Vec<u8>>;

/// What a single recovery attempt did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecoveryOutcome {
    /// Every sequence in the group was already present
    NothingMissing,
    /// The missing frame was rebuilt and inserted
    Recovered(SequenceNumber),
    /// Two or more frames of the group are missing
    TooManyMissing,
}

/// Find the sole missing sequence in the parity's range
///
/// Stops scanning at the second gap, so a wide range with few received
/// frames costs at most `received + 2` lookups.
fn find_single_missing(parts: &SequenceMap, parity: &ParityFrame) -> RecoveryOutcome {
    let mut missing = None;
    for seq in parity.sequences() {
        if parts.contains_key(&seq) {
            continue;
        }
        if missing.is_some() {
            return RecoveryOutcome::TooManyMissing;
        }
        missing = Some(seq);
    }
    match missing {
        Some(seq) => RecoveryOutcome::Recovered(seq),
        None => RecoveryOutcome::NothingMissing,
    }
}

/// Rebuild the missing member of `parity`'s group, if exactly one is missing
pub fn recover_with_parity(parts: &mut SequenceMap, parity: &ParityFrame) -> RecoveryOutcome {
    let outcome = find_single_missing(parts, parity);
    let RecoveryOutcome::Recovered(missing) = outcome else {
        debug!(
            "Group {} ({}..={}): {:?}",
            parity.group_index, parity.start_sequence, parity.end_sequence, outcome
        );
        return outcome;
    };

    let mut others = vec![0u8; parity.size];
    for (_, payload) in parts.range(parity.start_sequence..=parity.end_sequence) {
        xor_into(&mut others, payload);
    }
    let recovered = xor_padded(&parity.parity, &others, parity.size);

    debug!(
        "Group {}: recovered sequence {} ({} bytes)",
        parity.group_index,
        missing,
        recovered.len()
    );
    parts.insert(missing, recovered);
    outcome
}
