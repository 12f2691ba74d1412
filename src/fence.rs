//! Removal of the ```` ```json ```` fence some backends wrap JSON payloads in

const OPEN: &str = "```json";
const CLOSE: &str = "```";

/// Return the JSON payload inside a response.
///
/// Only the exact form "```json ... ```" (after trimming) is recognized; the
/// opening seven and closing three characters are dropped and the remainder
/// trimmed. Anything else comes back trimmed but otherwise untouched.
#[must_use]
pub fn strip_json_fence(text: &str) -> &str {
    let trimmed = text.trim();
    trimmed
        .strip_prefix(OPEN)
        .and_then(|rest| rest.strip_suffix(CLOSE))
        .map_or(trimmed, str::trim)
}
