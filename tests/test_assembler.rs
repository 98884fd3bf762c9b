//! Integration tests for contiguous payload assembly

use courier::assembler::{assemble, first_gap};
use courier::domain::SequenceNumber;
use courier::recovery::SequenceMap;

fn map(entries: &[(u64, &[u8])]) -> SequenceMap {
    entries
        .iter()
        .map(|(seq, bytes)| (SequenceNumber::new(*seq), bytes.to_vec()))
        .collect()
}

#[test]
fn test_assemble_empty() {
    assert!(assemble(&SequenceMap::new()).is_empty());
}

#[test]
fn test_assemble_contiguous() {
    let parts = map(&[(0, b"ab"), (1, b"cd"), (2, b"e")]);
    assert_eq!(assemble(&parts), b"abcde".to_vec());
    assert_eq!(first_gap(&parts), None);
}

#[test]
fn test_assemble_insertion_order_irrelevant() {
    let mut parts = SequenceMap::new();
    parts.insert(SequenceNumber::new(2), b"3".to_vec());
    parts.insert(SequenceNumber::new(0), b"1".to_vec());
    parts.insert(SequenceNumber::new(1), b"2".to_vec());
    assert_eq!(assemble(&parts), b"123".to_vec());
}

#[test]
fn test_assemble_stops_at_first_gap() {
    let parts = map(&[(0, b"ab"), (1, b"cd"), (3, b"gh"), (4, b"ij")]);
    assert_eq!(assemble(&parts), b"abcd".to_vec());
    assert_eq!(first_gap(&parts), Some(SequenceNumber::new(2)));
}

#[test]
fn test_assemble_single_frame_not_at_zero() {
    let parts = map(&[(5, b"only")]);
    assert_eq!(assemble(&parts), b"only".to_vec());
    assert_eq!(first_gap(&parts), None);
}

#[test]
fn test_first_gap_with_missing_start_is_not_visible() {
    // Losing sequence 0 leaves a contiguous run from 1
    let parts = map(&[(1, b"b"), (2, b"c")]);
    assert_eq!(assemble(&parts), b"bc".to_vec());
    assert_eq!(first_gap(&parts), None);
}
