//! Prompt text for each backend operation

use crate::recipients::RecipientSet;
use crate::types::{Category, EmailClassification, Priority};

fn join<T: ToString>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Instruction for classification; embeds every allowed value and the raw email
#[must_use]
pub fn classification(email_content: &str, recipients: &RecipientSet) -> String {
    format!(
        "Classify the following email into a category, assign a priority, \
         suggest a recipient, and provide a brief summary.\n\
         \n\
         Categories: {categories}\n\
         Priorities: {priorities}\n\
         Recipients: {recipients}\n\
         \n\
         Email content:\n\
         ```\n\
         {email_content}\n\
         ```\n\
         \n\
         Provide the output in JSON format.",
        categories = join(&Category::ALL),
        priorities = join(&Priority::ALL),
        recipients = recipients.joined(),
    )
}

/// Instruction for a reply draft written in the role the category implies
#[must_use]
pub fn response_draft(email_content: &str, classification: &EmailClassification) -> String {
    format!(
        "Draft a polite and concise email response for the following original email, \
         considering its classification and suggested recipient.\n\
         \n\
         Original email content:\n\
         ```\n\
         {email_content}\n\
         ```\n\
         \n\
         Classification details:\n\
         Category: {category}\n\
         Priority: {priority}\n\
         Suggested Recipient: {recipient}\n\
         Summary: {summary}\n\
         \n\
         Draft the response from the perspective of an appropriate agent \
         (e.g., support, sales) based on the category. Ensure it acknowledges the \
         sender's query and suggests next steps or provides relevant information.",
        category = classification.category,
        priority = classification.priority,
        recipient = classification.suggested_recipient,
        summary = classification.summary,
    )
}

/// Instruction asking for a JSON array of action-item strings
#[must_use]
pub fn action_items(email_content: &str) -> String {
    format!(
        "From the following email content, identify and list all distinct actionable \
         items. Return them as a JSON array of strings.\n\
         \n\
         Email content:\n\
         ```\n\
         {email_content}\n\
         ```\n\
         \n\
         Example output:\n\
         [\"Action item 1\", \"Action item 2\"]"
    )
}
