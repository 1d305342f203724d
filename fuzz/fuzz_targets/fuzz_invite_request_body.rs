//! Fuzz target: strict parsing of the invite code request body.
//!
//! Arbitrary bytes must never panic the parser, and anything it accepts
//! must re-encode as a body the parser accepts again with the same code.

#![no_main]

use forexmentor_core::InviteCodeCheckRequest;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(request) = InviteCodeCheckRequest::from_slice(data) {
        let body = serde_json::to_vec(&request).expect("request serializes");
        let again = InviteCodeCheckRequest::from_slice(&body).expect("re-encoded body parses");
        assert_eq!(again, request);
    }
});
