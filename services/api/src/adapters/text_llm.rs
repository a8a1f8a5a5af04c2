//! services/api/src/adapters/text_llm.rs
//!
//! This module contains the adapter for the marketing text-generation LLM.
//! It implements the `TextGenerationService` port from the `core` crate.

const CONTENT_INSTRUCTIONS: &str = r#"You are a social media marketing expert.

When asked for content for a platform:
- Consider trending topics, common marketing strategies for that platform, and the kind of content that performs best there.
- Suggest posts that maximize engagement and reach. Give a few options.
- Always include relevant hashtags.
- Keep every option engaging and appropriate for the platform."#;

const ADVICE_INSTRUCTIONS: &str = r#"You are a digital marketing expert advising users of a catalog of marketing tools.

The catalog groups tools into these categories: post & image creation, video tools, caption generation, trend analysis, hashtag tools, voiceover tools and content scheduling.

Give detailed, practical advice on how to reach the user's goal with those tools. Name the tool categories in your advice, and name specific tools in each category when appropriate."#;

use async_openai::{
    config::OpenAIConfig, error::OpenAIError, types::responses::CreateResponseArgs, Client,
};
use async_trait::async_trait;
use catalog_core::{
    domain::{MarketingContent, MarketingContentRequest, ToolAdvice, ToolAdviceRequest},
    ports::{PortError, PortResult, TextGenerationService},
};
use tracing::debug;

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

/// An adapter that implements `TextGenerationService` using an OpenAI-compatible LLM.
#[derive(Clone)]
pub struct OpenAiTextAdapter {
    client: Client<OpenAIConfig>,
    content_model: String,
    advice_model: String,
}

impl OpenAiTextAdapter {
    /// Creates a new `OpenAiTextAdapter`.
    pub fn new(client: Client<OpenAIConfig>, content_model: String, advice_model: String) -> Self {
        Self {
            client,
            content_model,
            advice_model,
        }
    }

    /// Sends one non-streaming request and returns the trimmed output text.
    async fn complete(&self, model: &str, instructions: &str, input: String) -> PortResult<String> {
        let request = CreateResponseArgs::default()
            .model(model)
            .instructions(instructions)
            .input(input)
            .max_output_tokens(1200u32)
            .build()
            .map_err(|e| PortError::Unexpected(e.to_string()))?;

        let response = self
            .client
            .responses()
            .create(request)
            .await
            .map_err(|e: OpenAIError| PortError::Unexpected(e.to_string()))?;

        let text = response.output_text().unwrap_or_default();
        let text = text.trim();
        if text.is_empty() {
            return Err(PortError::Unexpected(
                "Text generation LLM response contained no text content.".to_string(),
            ));
        }
        debug!("Text generation returned {} characters", text.len());
        Ok(text.to_string())
    }
}

//=========================================================================================
// `TextGenerationService` Trait Implementation
//=========================================================================================

#[async_trait]
impl TextGenerationService for OpenAiTextAdapter {
    async fn generate_marketing_content(
        &self,
        request: &MarketingContentRequest,
    ) -> PortResult<MarketingContent> {
        let input = format!("Generate content tailored for {}.", request.platform);
        let content = self
            .complete(&self.content_model, CONTENT_INSTRUCTIONS, input)
            .await?;
        Ok(MarketingContent { content })
    }

    async fn get_tool_use_advice(&self, request: &ToolAdviceRequest) -> PortResult<ToolAdvice> {
        let input = format!("My marketing goal: {}", request.goal);
        let advice = self
            .complete(&self.advice_model, ADVICE_INSTRUCTIONS, input)
            .await?;
        Ok(ToolAdvice { advice })
    }
}
