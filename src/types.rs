//! Core types for parsed and classified emails

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category an email is routed under
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    Support,
    Sales,
    Marketing,
    Billing,
    #[serde(rename = "General Inquiry")]
    GeneralInquiry,
}

impl Category {
    /// Every category, in prompt and schema order
    pub const ALL: [Self; 5] = [
        Self::Support,
        Self::Sales,
        Self::Marketing,
        Self::Billing,
        Self::GeneralInquiry,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Support => "Support",
            Self::Sales => "Sales",
            Self::Marketing => "Marketing",
            Self::Billing => "Billing",
            Self::GeneralInquiry => "General Inquiry",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Handling priority assigned to an email
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Every priority, in prompt and schema order
    pub const ALL: [Self; 3] = [Self::High, Self::Medium, Self::Low];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Result of classifying one email
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EmailClassification {
    pub category: Category,

    pub priority: Priority,

    /// Address from the configured recipient set
    pub suggested_recipient: String,

    /// Short free-text summary of the email
    pub summary: String,
}

/// Header fields and body scanned out of raw email text
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParsedEmail {
    /// Value of the first `From:` line, or empty
    pub from: String,

    /// Value of the first `Subject:` line, or empty
    pub subject: String,

    /// Everything after the later of the two headers, trimmed
    pub body: String,
}

impl ParsedEmail {
    /// True when neither header was found
    #[must_use]
    pub fn is_headerless(&self) -> bool {
        self.from.is_empty() && self.subject.is_empty()
    }
}

/// A classification recorded in history
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    /// Unique within a history list
    pub id: String,

    /// Local wall-clock time the entry was recorded, human readable
    pub timestamp: String,

    /// Raw email text exactly as classified
    pub email_content: String,

    pub classification: EmailClassification,
}
