//! Response schemas sent with JSON-constrained generation requests
//!
//! Type names follow the Gemini `Schema` object (`OBJECT`, `STRING`, `ARRAY`).

use crate::recipients::RecipientSet;
use crate::types::{Category, Priority};
use serde_json::{Value, json};

/// Field order of a classification object
pub const CLASSIFICATION_FIELDS: [&str; 4] =
    ["category", "priority", "suggestedRecipient", "summary"];

/// Schema for a single `EmailClassification` object
#[must_use]
pub fn classification_schema(recipients: &RecipientSet) -> Value {
    let categories: Vec<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();
    let priorities: Vec<&str> = Priority::ALL.iter().map(|p| p.as_str()).collect();
    let addresses: Vec<&str> = recipients.iter().collect();

    json!({
        "type": "OBJECT",
        "properties": {
            "category": {
                "type": "STRING",
                "enum": categories,
                "description": "The classified category of the email.",
            },
            "priority": {
                "type": "STRING",
                "enum": priorities,
                "description": "The priority of the email.",
            },
            "suggestedRecipient": {
                "type": "STRING",
                "enum": addresses,
                "description": "The suggested recipient email address.",
            },
            "summary": {
                "type": "STRING",
                "description": "A brief summary of the email content.",
            },
        },
        "required": CLASSIFICATION_FIELDS,
        "propertyOrdering": CLASSIFICATION_FIELDS,
    })
}

/// Schema for a list of action-item strings
#[must_use]
pub fn action_items_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": { "type": "STRING" },
    })
}
