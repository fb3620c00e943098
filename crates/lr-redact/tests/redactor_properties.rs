//! Property-based tests for the built-in redactors and redactor ordering.
//!
//! Uses proptest to check identity on non-matching text, full replacement of
//! every occurrence (including next to non-ASCII text), and strict
//! left-to-right application.

use lr_redact::builtin::{api_key, email, password};
use lr_redact::{Redactor, RedactorSet, DEFAULT_REPLACEMENT_TOKEN};
use proptest::prelude::*;

/// Text that cannot contain `=` or `@`, so no built-in can match.
fn plain_text() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 ,.:;_-]{0,64}"
}

/// A non-empty secret value without whitespace.
fn secret_value() -> impl Strategy<Value = String> {
    "[A-Za-z0-9!#$%^&*()_+.,-]{1,24}"
}

fn token() -> impl Strategy<Value = String> {
    "[A-Za-z0-9\\[\\]<>*#-]{0,12}"
}

// ============================================================================
// Identity on non-matching input
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn builtins_are_identity_without_matches(text in plain_text(), tok in token()) {
        prop_assert_eq!(password(&text, &tok), text.clone());
        prop_assert_eq!(api_key(&text, &tok), text.clone());
        prop_assert_eq!(email(&text, &tok), text.clone());
    }

    #[test]
    fn builtins_never_panic(text in any::<String>(), tok in any::<String>()) {
        let _ = password(&text, &tok);
        let _ = api_key(&text, &tok);
        let _ = email(&text, &tok);
    }
}

// ============================================================================
// Every occurrence is replaced
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn password_values_all_replaced(
        head in plain_text(),
        values in prop::collection::vec(secret_value(), 1..4),
    ) {
        let line = values
            .iter()
            .map(|v| format!("password={v}"))
            .collect::<Vec<_>>()
            .join(" ");
        let input = format!("{head} {line}");
        let out = password(&input, DEFAULT_REPLACEMENT_TOKEN);

        let expected_tail = vec!["password=[REDACTED]"; values.len()].join(" ");
        prop_assert_eq!(out, format!("{head} {expected_tail}"));
    }

    #[test]
    fn api_key_values_all_replaced(
        values in prop::collection::vec(secret_value(), 1..4),
        tok in token(),
    ) {
        let input = values
            .iter()
            .map(|v| format!("api_key={v}"))
            .collect::<Vec<_>>()
            .join("\t");
        let out = api_key(&input, &tok);
        let expected = vec![format!("api_key={tok}"); values.len()].join("\t");
        prop_assert_eq!(out, expected);
    }

    #[test]
    fn email_replaced_without_prefix(
        local in "[a-z0-9][a-z0-9._%+-]{0,11}",
        domain in "[a-z0-9-]{1,12}",
        tld in "[a-z]{2,6}",
    ) {
        let input = format!("mail to {local}@{domain}.{tld} now");
        let out = email(&input, "<E>");
        prop_assert!(!out.contains('@'), "address survived: {}", out);
        prop_assert!(out.ends_with(" now"));
        prop_assert!(out.contains("<E>"));
    }
}

// ============================================================================
// Non-ASCII neighbours
// ============================================================================

/// Runs of non-ASCII letters (Latin-1, Cyrillic, kana, CJK).
fn non_ascii_letters() -> impl Strategy<Value = String> {
    "[à-öø-ÿа-яア-ン一-龥]{1,8}"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn email_masked_between_non_ascii_letters(
        before in non_ascii_letters(),
        after in non_ascii_letters(),
        local in "[a-z0-9][a-z0-9._%+-]{0,11}",
        domain in "[a-z0-9-]{1,12}",
        tld in "[a-z]{2,6}",
    ) {
        let address = format!("{local}@{domain}.{tld}");
        let input = format!("{before}{address}{after}");
        let out = email(&input, "<E>");
        prop_assert!(!out.contains('@'), "address survived: {}", out);
        prop_assert!(out.starts_with(&before));
        prop_assert!(out.ends_with(&after));
    }

    #[test]
    fn secret_with_non_ascii_never_survives(
        before in non_ascii_letters(),
        head in "[A-Za-z0-9]{1,8}",
        tail in non_ascii_letters(),
    ) {
        // U+00A0 and U+3000 are whitespace to Unicode but part of the value here.
        let secret = format!("{head}\u{a0}{tail}\u{3000}{head}");
        let input = format!("{before} password={secret} api_key={secret} done");
        let set = RedactorSet::with_defaults();
        let out = set.apply(&input, DEFAULT_REPLACEMENT_TOKEN);
        prop_assert_eq!(
            out,
            format!("{before} password=[REDACTED] api_key=[REDACTED] done")
        );
    }
}

// ============================================================================
// Ordering
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// A set of [R1, R2] computes R2(R1(x)).
    #[test]
    fn set_applies_left_to_right(text in plain_text(), tok in token()) {
        let r1 = Redactor::from_fn("wrap", |t: &str, k: &str| format!("[{k}]{t}"));
        let r2 = Redactor::from_fn("rev", |t: &str, _: &str| t.chars().rev().collect());

        let mut set = RedactorSet::new();
        set.push(r1.clone()).push(r2.clone());

        let expected = r2.apply(&r1.apply(&text, &tok), &tok);
        prop_assert_eq!(set.apply(&text, &tok), expected);
    }
}

#[test]
fn order_changes_result() {
    // An `@`-bearing token is re-matched by a later email pass only when
    // password runs first.
    let tok = "<a@b.cd>";
    let password_then_email: RedactorSet = vec![
        Redactor::from_fn("password", password),
        Redactor::from_fn("email", email),
    ]
    .into_iter()
    .collect();
    let email_then_password: RedactorSet = vec![
        Redactor::from_fn("email", email),
        Redactor::from_fn("password", password),
    ]
    .into_iter()
    .collect();

    let input = "password=hunter2";
    assert_eq!(password_then_email.apply(input, tok), "password=<<a@b.cd>>");
    assert_eq!(email_then_password.apply(input, tok), "password=<a@b.cd>");
}
