//! Fuzz target for redaction policy parsing.
//!
//! Tests that JSON policy parsing and redactor compilation handle arbitrary
//! input without panicking.

#![no_main]

use libfuzzer_sys::fuzz_target;
use lr_redact::RedactionPolicy;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Should never panic, only return an error
        if let Ok(policy) = RedactionPolicy::from_json(content) {
            let _ = policy.build_set();
        }
    }
});
