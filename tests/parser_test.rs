use email_triage::{ParsedEmail, parse_email_content};

#[test]
fn test_parse_simple_email() {
    let parsed = parse_email_content("From: a@b.com\nSubject: Hi\nLine1\nLine2");

    assert_eq!(
        parsed,
        ParsedEmail {
            from: "a@b.com".into(),
            subject: "Hi".into(),
            body: "Line1\nLine2".into(),
        }
    );
}

#[test]
fn test_parse_without_headers() {
    let parsed = parse_email_content("just a body, no headers");

    assert_eq!(parsed.from, "");
    assert_eq!(parsed.subject, "");
    assert_eq!(parsed.body, "just a body, no headers");
    assert!(parsed.is_headerless());
}

#[test]
fn test_headerless_body_is_trimmed_and_stable() {
    let raw = "\n\n  Hello team,\n\nPlease call me back.  \n\n";
    let first = parse_email_content(raw);
    assert_eq!(first.body, "Hello team,\n\nPlease call me back.");

    let second = parse_email_content(&first.body);
    assert_eq!(second, first);
}

#[test]
fn test_parse_empty_input() {
    assert_eq!(parse_email_content(""), ParsedEmail::default());
}

#[test]
fn test_subject_before_from() {
    let parsed = parse_email_content("Subject: Hi\nFrom: a@b.com\nBody text");

    assert_eq!(parsed.from, "a@b.com");
    assert_eq!(parsed.subject, "Hi");
    assert_eq!(parsed.body, "Body text");
}

#[test]
fn test_body_starts_after_later_header() {
    let parsed = parse_email_content("From: a@b.com\nTo: me@b.com\nSubject: Hi\n\nBody");

    assert_eq!(parsed.body, "Body");
}

#[test]
fn test_lines_between_out_of_order_headers_are_dropped() {
    let parsed = parse_email_content("Subject: Hi\nnote\nFrom: a@b.com\nBody");

    assert_eq!(parsed.subject, "Hi");
    assert_eq!(parsed.from, "a@b.com");
    assert_eq!(parsed.body, "Body");
}

#[test]
fn test_only_from_header() {
    let parsed = parse_email_content("From: Jane <jane@example.com>\nHello there");

    assert_eq!(parsed.from, "Jane <jane@example.com>");
    assert_eq!(parsed.subject, "");
    assert_eq!(parsed.body, "Hello there");
}

#[test]
fn test_header_labels_are_case_sensitive() {
    let raw = "from: a@b.com\nSUBJECT: Hi\nBody";
    let parsed = parse_email_content(raw);

    assert_eq!(parsed.from, "");
    assert_eq!(parsed.subject, "");
    assert_eq!(parsed.body, raw);
}

#[test]
fn test_header_must_start_the_line() {
    let parsed = parse_email_content("Forwarded From: a@b.com\n  Subject: Hi\nBody");

    assert_eq!(parsed.from, "");
    assert_eq!(parsed.subject, "");
}

#[test]
fn test_first_occurrence_wins() {
    let parsed =
        parse_email_content("From: first@x.com\nSubject: One\nFrom: second@x.com\nSubject: Two\nBody");

    assert_eq!(parsed.from, "first@x.com");
    assert_eq!(parsed.subject, "One");
    assert_eq!(parsed.body, "From: second@x.com\nSubject: Two\nBody");
}

#[test]
fn test_header_value_is_trimmed() {
    let parsed = parse_email_content("From:    a@b.com   \nSubject:  Hi there \nBody");

    assert_eq!(parsed.from, "a@b.com");
    assert_eq!(parsed.subject, "Hi there");
}

#[test]
fn test_header_without_value_is_ignored() {
    let parsed = parse_email_content("From:\nSubject: Hi\nBody");

    assert_eq!(parsed.from, "");
    assert_eq!(parsed.subject, "Hi");
    assert_eq!(parsed.body, "Body");
}

#[test]
fn test_crlf_line_endings() {
    let parsed = parse_email_content("From: a@b.com\r\nSubject: Hi\r\n\r\nBody line\r\n");

    assert_eq!(parsed.from, "a@b.com");
    assert_eq!(parsed.subject, "Hi");
    assert_eq!(parsed.body, "Body line");
}

#[test]
fn test_body_start_uses_first_from_prefixed_line() {
    // "From:x" has no space so it is not the captured header, but it still
    // marks where the body begins.
    let parsed = parse_email_content("From:x\nFrom: a@b.com\nBody");

    assert_eq!(parsed.from, "a@b.com");
    assert_eq!(parsed.body, "From: a@b.com\nBody");
}
