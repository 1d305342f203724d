//! Fuzz target: JSON deserialization of `CrosshairSettings`.
//!
//! Any settings value that decodes must hold line styles inside the legal
//! ordinal domain.

#![no_main]

use forexmentor_core::{CrosshairSettings, LineStyle};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(settings) = serde_json::from_slice::<CrosshairSettings>(data) {
        assert!(settings.vertical_line_style.value() <= LineStyle::MAX);
        assert!(settings.horizontal_line_style.value() <= LineStyle::MAX);
        let _ = settings.validate();
    }
});
