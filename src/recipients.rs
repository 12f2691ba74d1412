//! The fixed set of addresses an email can be routed to

use serde::{Deserialize, Serialize};

/// Addresses used when nothing else is configured
pub const DEFAULT_RECIPIENTS: [&str; 5] = [
    "support@example.com",
    "sales@example.com",
    "marketing@example.com",
    "billing@example.com",
    "info@example.com",
];

/// Ordered, read-only list of valid recipient addresses.
///
/// The same list feeds the classification prompt, the response schema enum
/// and autocomplete, so all three always agree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipientSet(Vec<String>);

impl RecipientSet {
    /// Build from configured addresses, falling back to the defaults when empty
    pub fn new<I, S>(addresses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let list: Vec<String> = addresses
            .into_iter()
            .map(|a| Into::<String>::into(a).trim().to_string())
            .filter(|a| !a.is_empty())
            .collect();

        if list.is_empty() {
            Self::default()
        } else {
            Self(list)
        }
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Exact membership test
    #[must_use]
    pub fn contains(&self, address: &str) -> bool {
        self.0.iter().any(|a| a == address)
    }

    /// Autocomplete candidates for what the user has typed so far.
    ///
    /// An empty query lists every recipient; otherwise a case-insensitive
    /// substring match, keeping list order.
    #[must_use]
    pub fn suggest(&self, query: &str) -> Vec<&str> {
        if query.is_empty() {
            return self.iter().collect();
        }
        let needle = query.to_lowercase();
        self.iter()
            .filter(|a| a.to_lowercase().contains(&needle))
            .collect()
    }

    /// Comma separated, as embedded in prompts
    #[must_use]
    pub fn joined(&self) -> String {
        self.0.join(", ")
    }
}

impl Default for RecipientSet {
    fn default() -> Self {
        Self(DEFAULT_RECIPIENTS.iter().map(ToString::to_string).collect())
    }
}
