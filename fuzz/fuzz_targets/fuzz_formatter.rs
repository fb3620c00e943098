//! Fuzz target for the redacting formatter over both inner formats.
//!
//! Formatting an arbitrary entry should never panic.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use lr_format::{Entry, Formatter, JsonFormatter, Level, RedactingFormatter, TextFormatter};

#[derive(Arbitrary, Debug)]
struct Input {
    message: String,
    target: String,
    fields: Vec<(String, String)>,
    token: String,
}

fuzz_target!(|input: Input| {
    let mut entry = Entry::new(Level::Info, input.message).with_target(input.target);
    for (key, value) in input.fields {
        entry = entry.with_field(key, value);
    }

    let mut text = RedactingFormatter::with_defaults(TextFormatter::new());
    text.set_replacement_token(input.token.clone());
    let _ = text.format(&entry);

    let mut json = RedactingFormatter::with_defaults(JsonFormatter::new());
    json.set_replacement_token(input.token);
    let _ = json.format(&entry);
});
