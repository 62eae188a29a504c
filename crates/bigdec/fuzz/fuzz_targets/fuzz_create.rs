//! Fuzz target: run arbitrary text through the literal path of `create`.
//!
//! Both strict and non-strict modes are exercised with a small digit bound. Any
//! outcome is acceptable except a panic. A `Normal` result must also survive being
//! fed back in at the same precision.

#![no_main]

use bigdec::{Config, DecimalValue, Precision, create};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    // Skip excessively large inputs.
    if text.len() > 4096 {
        return;
    }

    let config = Config::default();
    let precision = Precision::Digits(data.first().map_or(0, |byte| u32::from(byte % 40)));
    for strict in [true, false] {
        if let Ok(value @ DecimalValue::Normal(_)) = create(text, precision, strict, &config) {
            assert_eq!(create(&value, precision, strict, &config), Ok(value));
        }
    }
});
