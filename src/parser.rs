//! Header parser for pasted email text
//!
//! This is a line scanner, not an RFC 5322 parser: it looks for the first
//! `From: ` and `Subject: ` lines and treats whatever follows the later of the
//! two as the body.

use crate::types::ParsedEmail;
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

// CRLF mode keeps a trailing '\r' out of the captured value.
static FROM_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?mR)^From: (.+)$").expect("valid From regex"));

static SUBJECT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?mR)^Subject: (.+)$").expect("valid Subject regex"));

/// Split raw email text into sender, subject and body.
///
/// Never fails: text without recognizable headers comes back as a body with
/// empty `from` and `subject`.
#[must_use]
pub fn parse_email_content(raw: &str) -> ParsedEmail {
    let lines: Vec<&str> = raw.split('\n').collect();
    let mut body_start = 0;

    let from = match capture_header(&FROM_REGEX, raw) {
        Some(value) => {
            if let Some(idx) = first_line_with_prefix(&lines, "From:") {
                body_start = idx + 1;
            }
            value
        }
        None => String::new(),
    };

    let subject = match capture_header(&SUBJECT_REGEX, raw) {
        Some(value) => {
            if let Some(idx) = first_line_with_prefix(&lines, "Subject:") {
                body_start = body_start.max(idx + 1);
            }
            value
        }
        None => String::new(),
    };

    let body = lines
        .get(body_start..)
        .map(|rest| rest.join("\n"))
        .unwrap_or_default()
        .trim()
        .to_string();

    debug!(
        from = %from,
        subject = %subject,
        body_start,
        "Parsed email content"
    );

    ParsedEmail {
        from,
        subject,
        body,
    }
}

fn capture_header(regex: &Regex, raw: &str) -> Option<String> {
    regex
        .captures(raw)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
}

fn first_line_with_prefix(lines: &[&str], prefix: &str) -> Option<usize> {
    lines.iter().position(|line| line.starts_with(prefix))
}
