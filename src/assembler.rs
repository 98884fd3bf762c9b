//! Reassembly of the longest contiguous payload prefix

use crate::domain::SequenceNumber;
use crate::recovery::SequenceMap;

/// Lowest key followed by every consecutive key that is present
fn contiguous_run(parts: &SequenceMap) -> impl Iterator<Item = (&SequenceNumber, &Vec<u8>)> {
    let mut expected = parts.keys().next().copied();
    parts.iter().take_while(move |(seq, _)| {
        if expected != Some(**seq) {
            return false;
        }
        expected = seq.next();
        true
    })
}

/// Concatenate payloads from the lowest sequence up to the first gap
///
/// Frames after the first gap are dropped even when present. An empty map
/// yields an empty buffer.
pub fn assemble(parts: &SequenceMap) -> Vec<u8> {
    let mut out = Vec::with_capacity(parts.values().map(Vec::len).sum());
    for (_, payload) in contiguous_run(parts) {
        out.extend_from_slice(payload);
    }
    out
}

/// First missing sequence that truncates the assembled output
///
/// `None` when the received sequences are contiguous, including the empty
/// map. A gap is only reported if some frame beyond it was received and
/// therefore lost from the output.
pub fn first_gap(parts: &SequenceMap) -> Option<SequenceNumber> {
    let (last_run, _) = contiguous_run(parts).last()?;
    let (highest, _) = parts.last_key_value()?;
    if last_run == highest {
        None
    } else {
        last_run.next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(entries: &[(u64, &[u8])]) -> SequenceMap {
        entries
            .iter()
            .map(|(seq, bytes)| (SequenceNumber::new(*seq), bytes.to_vec()))
            .collect()
    }

    #[test]
    fn test_first_gap_contiguous() {
        assert_eq!(first_gap(&map(&[(0, b"a"), (1, b"b")])), None);
        assert_eq!(first_gap(&SequenceMap::new()), None);
    }

    #[test]
    fn test_first_gap_reports_hole() {
        let parts = map(&[(0, b"a"), (1, b"b"), (3, b"d"), (5, b"f")]);
        assert_eq!(first_gap(&parts), Some(SequenceNumber::new(2)));
    }

    #[test]
    fn test_assemble_starts_at_lowest_present() {
        let parts = map(&[(4, b"xy"), (5, b"z"), (7, b"q")]);
        assert_eq!(assemble(&parts), b"xyz".to_vec());
    }
}
