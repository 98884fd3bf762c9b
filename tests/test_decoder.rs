//! Integration tests for the decode pipeline and its report

use courier::config::EncodeOptions;
use courier::domain::SequenceNumber;
use courier::{decode_with_report, encode_bytes, FrameCollector};

fn frames_for(len: usize, frame_size: usize, group_size: usize) -> (Vec<u8>, Vec<String>) {
    let data: Vec<u8> = (0..len).map(|i| (i * 31 % 251) as u8).collect();
    let lines = encode_bytes(&data, &EncodeOptions::new(frame_size, group_size, true)).unwrap();
    (data, lines)
}

#[test]
fn test_report_counts_clean_decode() {
    let (data, lines) = frames_for(256, 64, 4);
    let report = decode_with_report(&lines);
    assert_eq!(report.payload, data);
    assert_eq!(report.data_frames, 4);
    assert_eq!(report.parity_frames, 1);
    assert_eq!(report.rejected_lines, 0);
    assert!(report.recovered.is_empty());
    assert!(report.is_complete());
}

#[test]
fn test_report_tracks_rejected_and_blank_lines() {
    let (data, mut lines) = frames_for(128, 64, 8);
    lines.push(String::new());
    lines.push("   ".to_string());
    lines.push("hello from the radio operator".to_string());
    lines.push("F:garbage".to_string());

    let report = decode_with_report(&lines);
    assert_eq!(report.payload, data);
    assert_eq!(report.rejected_lines, 2);
    assert_eq!(report.blank_lines, 2);
}

#[test]
fn test_report_lists_recovered_sequences() {
    let (data, lines) = frames_for(64 * 8, 64, 4);
    // Layout: F0 F1 F2 F3 P1 F4 F5 F6 F7 P2; drop F1 and F6
    let kept: Vec<&String> = lines
        .iter()
        .filter(|l| !l.starts_with("F:000001:") && !l.starts_with("F:000006:"))
        .collect();

    let report = decode_with_report(kept);
    assert_eq!(report.payload, data);
    assert_eq!(
        report.recovered,
        vec![SequenceNumber::new(1), SequenceNumber::new(6)]
    );
    assert!(report.is_complete());
}

#[test]
fn test_report_first_gap_on_double_loss() {
    let (data, lines) = frames_for(64 * 8, 64, 4);
    let kept: Vec<&String> = lines
        .iter()
        .filter(|l| !l.starts_with("F:000005:") && !l.starts_with("F:000006:"))
        .collect();

    let report = decode_with_report(kept);
    assert_eq!(report.payload, data[..5 * 64].to_vec());
    assert_eq!(report.first_gap, Some(SequenceNumber::new(5)));
    assert!(!report.is_complete());
    assert!(report.to_string().contains("truncated at sequence 5"));
}

#[test]
fn test_duplicate_frames_are_harmless() {
    let (data, lines) = frames_for(200, 32, 3);
    let mut doubled = lines.clone();
    doubled.extend(lines.iter().cloned());

    let report = decode_with_report(&doubled);
    assert_eq!(report.payload, data);
    assert_eq!(report.parity_frames, 2 * lines.iter().filter(|l| l.starts_with("P:")).count());
}

#[test]
fn test_collector_incremental_feed() {
    let (data, lines) = frames_for(300, 50, 2);
    let mut collector = FrameCollector::new();
    for line in lines.iter().rev() {
        collector.push_line(line);
    }
    assert_eq!(collector.finish().payload, data);
}

#[test]
fn test_report_empty_input() {
    let report = decode_with_report(Vec::<String>::new());
    assert!(report.is_empty());
    assert!(report.is_complete());
    assert_eq!(report.data_frames, 0);
}
