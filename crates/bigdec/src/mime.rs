//! Quoted-printable style byte decoding.
//!
//! `=XX` (hex, either case) decodes to one byte and `=` followed by a line break is a
//! soft break that decodes to nothing. Every other byte passes through. The first `=`
//! that starts neither form ends escape handling: it and everything after it in the
//! range are copied verbatim.

/// Decodes `source[start..end]`, returning the decoded bytes and the number of bytes consumed.
///
/// The range is clamped to `source`; the whole clamped range is always consumed.
///
/// ```
/// let (decoded, consumed) = bigdec::mime::decode(b"caf=C3=A9=\r\n!", 0, 13);
/// assert_eq!(decoded, "café!".as_bytes());
/// assert_eq!(consumed, 13);
/// ```
#[must_use]
pub fn decode(source: &[u8], start: usize, end: usize) -> (Vec<u8>, usize) {
    let end = end.min(source.len());
    let start = start.min(end);
    let input = &source[start..end];

    let mut out = Vec::with_capacity(input.len());
    let mut index = 0usize;

    while index < input.len() {
        let byte = input[index];
        if byte != b'=' {
            out.push(byte);
            index += 1;
            continue;
        }

        match escape_len(&input[index + 1..]) {
            Some((len, decoded)) => {
                out.extend(decoded);
                index += 1 + len;
            }
            None => {
                tracing::trace!(offset = start + index, "malformed escape, copying the rest verbatim");
                out.extend_from_slice(&input[index..]);
                break;
            }
        }
    }

    (out, input.len())
}

/// Recognizes the escape body following a `=`: its length and the byte it decodes to, if any.
fn escape_len(rest: &[u8]) -> Option<(usize, Option<u8>)> {
    match rest {
        [b'\n', ..] => Some((1, None)),
        [b'\r', b'\n', ..] => Some((2, None)),
        [hi, lo, ..] => {
            let hi = hex_nibble(*hi)?;
            let lo = hex_nibble(*lo)?;
            Some((2, Some((hi << 4) | lo)))
        }
        _ => None,
    }
}

fn hex_nibble(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_all(source: &[u8]) -> Vec<u8> {
        let (decoded, consumed) = decode(source, 0, source.len());
        assert_eq!(consumed, source.len());
        decoded
    }

    #[test]
    fn test_hex_pairs_either_case() {
        assert_eq!(decode_all(b"a=3Db=3db"), b"a=b=b");
        assert_eq!(decode_all(b"=FF=00"), [0xff, 0x00]);
    }

    #[test]
    fn test_soft_breaks() {
        assert_eq!(decode_all(b"one=\ntwo"), b"onetwo");
        assert_eq!(decode_all(b"one=\r\ntwo"), b"onetwo");
        assert_eq!(decode_all(b"plain\r\nline"), b"plain\r\nline");
    }

    #[test]
    fn test_malformed_escape_copies_rest() {
        assert_eq!(decode_all(b"x=G1=41"), b"x=G1=41");
        assert_eq!(decode_all(b"=41=4"), b"A=4");
        assert_eq!(decode_all(b"=41="), b"A=");
        assert_eq!(decode_all(b"=\rx=41"), b"=\rx=41");
    }

    #[test]
    fn test_range_is_clamped() {
        let source = b"xx=41yy";
        assert_eq!(decode(source, 2, 5), (b"A".to_vec(), 3));
        assert_eq!(decode(source, 5, 100), (b"yy".to_vec(), 2));
        assert_eq!(decode(source, 9, 3), (Vec::new(), 0));
    }

    #[test]
    fn test_escape_split_by_range_end() {
        // the hex pair is cut off by `end`, so the escape is malformed inside the range
        assert_eq!(decode(b"=41", 0, 2), (b"=4".to_vec(), 2));
    }
}
