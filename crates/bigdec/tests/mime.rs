use bigdec::mime::decode;
use pretty_assertions::assert_eq;

#[test]
fn decodes_mixed_body() {
    let body = b"Subject: caf=C3=A9\r\nlong line =\r\ncontinues=\nhere =3D done";
    let (decoded, consumed) = decode(body, 0, body.len());
    assert_eq!(consumed, body.len());
    assert_eq!(
        String::from_utf8(decoded).unwrap(),
        "Subject: caf\u{e9}\r\nlong line continueshere = done"
    );
}

#[test]
fn decodes_only_the_requested_window() {
    let buffer = b"header|=48=49|trailer";
    let (decoded, consumed) = decode(buffer, 7, 13);
    assert_eq!(decoded, b"HI");
    assert_eq!(consumed, 6);
}

#[test]
fn malformed_escape_stops_decoding() {
    let body = b"ok=41 bad=ZZ then=42 =\n";
    let (decoded, consumed) = decode(body, 0, body.len());
    assert_eq!(consumed, body.len());
    assert_eq!(decoded, b"okA bad=ZZ then=42 =\n");
}

#[test]
fn empty_and_inverted_ranges() {
    assert_eq!(decode(b"", 0, 0), (Vec::new(), 0));
    assert_eq!(decode(b"abc", 2, 1), (Vec::new(), 0));
}
