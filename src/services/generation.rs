use async_trait::async_trait;
use serde_json::json;

use super::OpenAiClient;
use crate::error::GenerationFailure;

/// Everything the generator may draw on for the next question.
#[derive(Debug, Clone)]
pub struct PromptContext<'a> {
    /// Target job title for the interview
    pub role: &'a str,
    /// Questions already asked, in order
    pub asked_questions: &'a [String],
    /// Topics the candidate could not answer
    pub dont_know_topics: &'a [String],
    /// The candidate's latest transcribed answer
    pub transcript: &'a str,
}

/// Follow-up question boundary: returns exactly one short question.
#[async_trait]
pub trait QuestionGenerator: Send + Sync {
    async fn follow_up(&self, ctx: PromptContext<'_>) -> Result<String, GenerationFailure>;
}

/// Follow-up generation via an OpenAI-compatible chat-completions API.
pub struct ChatGenerator {
    client: OpenAiClient,
    model: String,
}

impl ChatGenerator {
    pub fn new(client: OpenAiClient, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }
}

/// Builds the interviewer prompt from session history.
///
/// Asked questions and don't-know topics are inlined so the model avoids
/// repeating either.
fn build_prompt(ctx: &PromptContext<'_>) -> String {
    format!(
        "Context: You are conducting an interview for a {role} role.\n\
         Focus on evaluating the candidate's technical depth with skill-specific, tricky, and to-the-point questions.\n\
         Do not repeat already asked questions or topics the user doesn't know: {dont_know}.\n\
         User has been asked questions like: {asked}.\n\
         User Response: {transcript}\n\n\
         Generate one short technical follow-up question.",
        role = ctx.role,
        dont_know = ctx.dont_know_topics.join(", "),
        asked = ctx.asked_questions.join(", "),
        transcript = ctx.transcript,
    )
}

#[async_trait]
impl QuestionGenerator for ChatGenerator {
    async fn follow_up(&self, ctx: PromptContext<'_>) -> Result<String, GenerationFailure> {
        let body = json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": "You are a professional technical interviewer." },
                { "role": "user", "content": build_prompt(&ctx) },
            ],
        });

        let response = self
            .client
            .http
            .post(format!("{}/chat/completions", self.client.api_base))
            .bearer_auth(&self.client.api_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(GenerationFailure {
                message: format!("service returned HTTP {status}"),
            });
        }

        let data: serde_json::Value = response.json().await?;

        data["choices"][0]["message"]["content"]
            .as_str()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .ok_or_else(|| GenerationFailure {
                message: "no question in completion".to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_includes_role_history_and_transcript() {
        let asked = vec!["What is Rust?".to_string(), "Explain lifetimes.".to_string()];
        let dont_know = vec!["Explain lifetimes.".to_string()];

        let prompt = build_prompt(&PromptContext {
            role: "Backend Engineer",
            asked_questions: &asked,
            dont_know_topics: &dont_know,
            transcript: "I mostly use async channels.",
        });

        assert!(prompt.contains("Backend Engineer role"));
        assert!(prompt.contains("What is Rust?, Explain lifetimes."));
        assert!(prompt.contains("topics the user doesn't know: Explain lifetimes."));
        assert!(prompt.contains("User Response: I mostly use async channels."));
        assert!(prompt.ends_with("Generate one short technical follow-up question."));
    }

    #[test]
    fn prompt_handles_empty_history() {
        let prompt = build_prompt(&PromptContext {
            role: "SRE",
            asked_questions: &[],
            dont_know_topics: &[],
            transcript: "Hello",
        });

        assert!(prompt.contains("doesn't know: .\n"));
        assert!(prompt.contains("questions like: .\n"));
    }
}
