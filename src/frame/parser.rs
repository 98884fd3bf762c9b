//! Line to frame parsing and validation
//!
//! A line either yields a fully validated frame or an error; there is no
//! best-effort result. Callers decide what to do with rejections.

use super::error::ParseError;
use super::{DataFrame, Frame, ParityFrame, DATA_TAG, FIELD_SEPARATOR, PARITY_TAG};
use crate::checksum::compute_crc32;
use crate::domain::{Crc32Value, GroupIndex, SequenceNumber};
use crate::envelope::decode_envelope;

/// Field count after the kind tag for each frame kind
const DATA_FIELDS: usize = 4;
const PARITY_FIELDS: usize = 6;

/// Parse one line of the wire format
///
/// Surrounding whitespace (including a trailing `\r`) is ignored.
pub fn parse_frame(line: &str) -> Result<Frame, ParseError> {
    let line = line.trim();
    if line.is_empty() {
        return Err(ParseError::Blank);
    }

    let (kind, rest) = line
        .split_once(FIELD_SEPARATOR)
        .ok_or(ParseError::MissingSeparator)?;

    match kind {
        DATA_TAG => parse_data(rest).map(Frame::Data),
        PARITY_TAG => parse_parity(rest).map(Frame::Parity),
        other => Err(ParseError::UnknownKind(other.to_string())),
    }
}

fn parse_data(rest: &str) -> Result<DataFrame, ParseError> {
    let fields = split_fields::<DATA_FIELDS>(rest)?;
    let [seq, size, crc, body] = fields;

    let sequence = SequenceNumber::new(parse_decimal("sequence", seq)?);
    let size = parse_size(size)?;
    let checksum = parse_checksum(crc)?;
    let payload = decode_checked(body, size, checksum)?;

    Ok(DataFrame {
        sequence,
        size,
        checksum,
        payload,
    })
}

fn parse_parity(rest: &str) -> Result<ParityFrame, ParseError> {
    let fields = split_fields::<PARITY_FIELDS>(rest)?;
    let [gidx, start, end, size, crc, body] = fields;

    let group_index = GroupIndex::new(parse_decimal("group_index", gidx)?);
    let start_sequence = SequenceNumber::new(parse_decimal("start_sequence", start)?);
    let end_sequence = SequenceNumber::new(parse_decimal("end_sequence", end)?);
    let size = parse_size(size)?;
    let checksum = parse_checksum(crc)?;
    let parity = decode_checked(body, size, checksum)?;

    Ok(ParityFrame {
        group_index,
        start_sequence,
        end_sequence,
        size,
        checksum,
        parity,
    })
}

/// Split into exactly `N` fields
///
/// The last field is the base64 body, which never contains the separator,
/// so any extra separator means a malformed line.
fn split_fields<const N: usize>(rest: &str) -> Result<[&str; N], ParseError> {
    let fields: Vec<&str> = rest.split(FIELD_SEPARATOR).collect();
    let found = fields.len();
    fields
        .try_into()
        .map_err(|_| ParseError::FieldCount { expected: N, found })
}

fn parse_decimal(field: &'static str, value: &str) -> Result<u64, ParseError> {
    // `u64::from_str` accepts a leading '+', which no encoder emits
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid(field, value));
    }
    value.parse().map_err(|_| invalid(field, value))
}

fn parse_size(value: &str) -> Result<usize, ParseError> {
    let size = parse_decimal("size", value)?;
    usize::try_from(size).map_err(|_| invalid("size", value))
}

fn parse_checksum(value: &str) -> Result<Crc32Value, ParseError> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid("checksum", value));
    }
    u32::from_str_radix(value, 16)
        .map(Crc32Value::new)
        .map_err(|_| invalid("checksum", value))
}

fn decode_checked(
    body: &str,
    declared_size: usize,
    declared_crc: Crc32Value,
) -> Result<Vec<u8>, ParseError> {
    let bytes = decode_envelope(body)?;
    if bytes.len() != declared_size {
        return Err(ParseError::SizeMismatch {
            declared: declared_size,
            actual: bytes.len(),
        });
    }
    let computed = compute_crc32(&bytes);
    if computed != declared_crc {
        return Err(ParseError::ChecksumMismatch {
            declared: declared_crc,
            computed,
        });
    }
    Ok(bytes)
}

fn invalid(field: &'static str, value: &str) -> ParseError {
    ParseError::InvalidNumber {
        field,
        value: value.to_string(),
    }
}
