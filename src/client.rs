//! Classification client: prompts in, validated results out

use crate::backend::{GenerateRequest, GenerationConfig, GenerativeBackend};
use crate::error::{AssistError, FailureCause, Result};
use crate::fence::strip_json_fence;
use crate::gemini::DEFAULT_MODEL;
use crate::prompt;
use crate::recipients::RecipientSet;
use crate::schema;
use crate::types::EmailClassification;
use tracing::{debug, error, info};

type CauseResult<T> = std::result::Result<T, FailureCause>;

/// Turns raw email text into classifications, reply drafts and action items.
///
/// Every operation is one backend round trip. Nothing is retried and nothing
/// is cached; a failed call leaves no partial result behind.
#[derive(Debug, Clone)]
pub struct ClassificationClient<B> {
    backend: B,
    model: String,
    recipients: RecipientSet,
}

impl<B: GenerativeBackend> ClassificationClient<B> {
    /// Client using the default model and recipient set
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            model: DEFAULT_MODEL.to_string(),
            recipients: RecipientSet::default(),
        }
    }

    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    #[must_use]
    pub fn with_recipients(mut self, recipients: RecipientSet) -> Self {
        self.recipients = recipients;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub const fn recipients(&self) -> &RecipientSet {
        &self.recipients
    }

    /// Classify an email into category, priority, recipient and summary
    pub async fn classify(&self, email_content: &str) -> Result<EmailClassification> {
        self.try_classify(email_content).await.map_err(|cause| {
            error!(error = %cause, "Error classifying email");
            AssistError::Classification(cause)
        })
    }

    /// Draft a reply to `email_content` in the role its classification implies.
    ///
    /// The generated text is returned exactly as the backend produced it.
    pub async fn generate_response_draft(
        &self,
        email_content: &str,
        classification: &EmailClassification,
    ) -> Result<String> {
        self.try_generate_response_draft(email_content, classification)
            .await
            .map_err(|cause| {
                error!(error = %cause, "Error generating response draft");
                AssistError::DraftGeneration(cause)
            })
    }

    /// List the actionable items in an email; an empty list is a valid answer
    pub async fn extract_action_items(&self, email_content: &str) -> Result<Vec<String>> {
        self.try_extract_action_items(email_content)
            .await
            .map_err(|cause| {
                error!(error = %cause, "Error extracting action items");
                AssistError::ActionExtraction(cause)
            })
    }

    async fn try_classify(&self, email_content: &str) -> CauseResult<EmailClassification> {
        ensure_content(email_content)?;

        let text = self
            .request(
                prompt::classification(email_content, &self.recipients),
                Some(GenerationConfig::json(schema::classification_schema(
                    &self.recipients,
                ))),
            )
            .await?;

        let classification: EmailClassification = serde_json::from_str(strip_json_fence(&text))?;
        if !self.recipients.contains(&classification.suggested_recipient) {
            return Err(FailureCause::UnknownRecipient(
                classification.suggested_recipient,
            ));
        }

        info!(
            category = %classification.category,
            priority = %classification.priority,
            recipient = %classification.suggested_recipient,
            "Classified email"
        );
        Ok(classification)
    }

    async fn try_generate_response_draft(
        &self,
        email_content: &str,
        classification: &EmailClassification,
    ) -> CauseResult<String> {
        ensure_content(email_content)?;

        let draft = self
            .request(prompt::response_draft(email_content, classification), None)
            .await?;
        debug!(chars = draft.len(), "Generated response draft");
        Ok(draft)
    }

    async fn try_extract_action_items(&self, email_content: &str) -> CauseResult<Vec<String>> {
        ensure_content(email_content)?;

        let text = self
            .request(
                prompt::action_items(email_content),
                Some(GenerationConfig::json(schema::action_items_schema())),
            )
            .await?;

        let items: Vec<String> = serde_json::from_str(strip_json_fence(&text))?;
        debug!(count = items.len(), "Extracted action items");
        Ok(items)
    }

    async fn request(
        &self,
        prompt: String,
        config: Option<GenerationConfig>,
    ) -> CauseResult<String> {
        let response = self
            .backend
            .generate(GenerateRequest {
                model: self.model.clone(),
                prompt,
                config,
            })
            .await?;
        Ok(response.text)
    }
}

fn ensure_content(email_content: &str) -> CauseResult<()> {
    if email_content.trim().is_empty() {
        Err(FailureCause::EmptyContent)
    } else {
        Ok(())
    }
}
