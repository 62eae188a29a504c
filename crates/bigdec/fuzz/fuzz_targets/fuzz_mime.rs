//! Fuzz target: the quoted-printable decoder never panics and always consumes its range.

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Some((&split, source)) = data.split_first() else {
        return;
    };
    let start = usize::from(split) % (source.len() + 1);
    let (decoded, consumed) = bigdec::mime::decode(source, start, source.len());
    assert_eq!(consumed, source.len() - start);
    assert!(decoded.len() <= consumed);
});
