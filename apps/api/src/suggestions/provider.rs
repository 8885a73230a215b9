use async_trait::async_trait;

use crate::errors::AppError;
use crate::llm_client::{LlmClient, LlmError};
use crate::models::drive::Drive;
use crate::models::student::Student;
use crate::suggestions::prompts;

/// Fixed reply when no OpenRouter key is configured.
pub const UNAVAILABLE_MESSAGE: &str =
    "AI suggestions are currently unavailable. Set OPENROUTER_API_KEY to enable them.";

/// Strategy seam for placement advice. Selected once at startup; handlers
/// never know whether a real model or the keyless fallback answers.
#[async_trait]
pub trait SuggestionProvider: Send + Sync {
    async fn suggest(&self, profile: &Student, drives: &[Drive]) -> Result<String, AppError>;
}

/// Live provider: prompts the OpenRouter model with the profile and the
/// current drive list.
pub struct OpenRouterSuggestions {
    client: LlmClient,
}

impl OpenRouterSuggestions {
    pub fn new(client: LlmClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SuggestionProvider for OpenRouterSuggestions {
    async fn suggest(&self, profile: &Student, drives: &[Drive]) -> Result<String, AppError> {
        let prompt = prompts::build_suggestions_prompt(profile, drives);
        let response = self.client.call(&prompt, prompts::COUNSELOR_SYSTEM).await?;
        let text = response.text().ok_or(LlmError::EmptyContent)?;
        Ok(text.to_string())
    }
}

/// Keyless fallback: always answers with the fixed message.
pub struct UnavailableSuggestions;

#[async_trait]
impl SuggestionProvider for UnavailableSuggestions {
    async fn suggest(&self, _profile: &Student, _drives: &[Drive]) -> Result<String, AppError> {
        Ok(UNAVAILABLE_MESSAGE.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::student::SkillList;

    fn make_profile() -> Student {
        Student {
            id: "s1".to_string(),
            name: "Priya".to_string(),
            username: None,
            cgpa: None,
            branch: None,
            backlogs: None,
            skills: SkillList::default(),
            year: None,
        }
    }

    #[tokio::test]
    async fn test_unavailable_provider_returns_fixed_message() {
        let provider = UnavailableSuggestions;

        let text = provider.suggest(&make_profile(), &[]).await.unwrap();

        assert_eq!(text, UNAVAILABLE_MESSAGE);
    }
}
