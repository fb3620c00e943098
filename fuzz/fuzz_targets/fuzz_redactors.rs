//! Fuzz target for the built-in redactors.
//!
//! Redactors must be total: any text and any token, no panics, and text
//! without a trigger substring comes back unchanged.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use lr_redact::builtin::{api_key, email, password};
use lr_redact::RedactorSet;

#[derive(Arbitrary, Debug)]
struct Input {
    text: String,
    token: String,
}

fuzz_target!(|input: Input| {
    let out = password(&input.text, &input.token);
    if !input.text.contains("password=") {
        assert_eq!(out, input.text);
    }
    let out = api_key(&input.text, &input.token);
    if !input.text.contains("api_key=") {
        assert_eq!(out, input.text);
    }
    let out = email(&input.text, &input.token);
    if !input.text.contains('@') {
        assert_eq!(out, input.text);
    }

    let _ = RedactorSet::with_defaults().apply(&input.text, &input.token);
});
