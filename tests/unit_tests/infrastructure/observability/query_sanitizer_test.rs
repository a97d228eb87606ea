use kazi::infrastructure::observability::sanitize_query;

#[test]
fn given_blank_query_when_sanitizing_then_marks_empty() {
    assert_eq!(sanitize_query("   "), "[EMPTY]");
}

#[test]
fn given_short_query_when_sanitizing_then_keeps_it() {
    assert_eq!(
        sanitize_query(" plumber in Accra "),
        "plumber in Accra"
    );
}

#[test]
fn given_phone_and_email_when_sanitizing_then_both_are_masked() {
    let sanitized = sanitize_query("plumber call +254712345678 or me@mail.com");

    assert_eq!(sanitized, "plumber call [PHONE] or [EMAIL]");
}

#[test]
fn given_long_multibyte_query_when_sanitizing_then_truncates_on_char_boundary() {
    let query = "é".repeat(100);

    let sanitized = sanitize_query(&query);

    assert!(sanitized.starts_with(&"é".repeat(80)));
    assert!(sanitized.ends_with("... (100 chars total)"));
}
