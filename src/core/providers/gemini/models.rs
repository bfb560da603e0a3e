//! Gemini wire types, prompt formatting and pricing

use serde::Deserialize;

use crate::core::types::{ChatMessage, MessageRole};

/// `generateContent` response body
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<Content>,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Part {
    pub text: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    pub block_reason: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate
    pub fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|p| p.text.as_deref())
                    .collect::<String>()
            })
            .unwrap_or_default()
    }

    pub fn finish_reason(&self) -> Option<&str> {
        self.candidates
            .first()
            .and_then(|c| c.finish_reason.as_deref())
    }

    /// Set when the prompt itself was rejected and no candidate was produced
    pub fn block_reason(&self) -> Option<&str> {
        self.prompt_feedback
            .as_ref()
            .and_then(|f| f.block_reason.as_deref())
    }
}

/// Flatten a conversation into Gemini's single-prompt form
pub fn format_prompt(messages: &[ChatMessage]) -> String {
    messages
        .iter()
        .map(|message| match message.role {
            MessageRole::System => format!("Context: {}", message.content),
            MessageRole::User => format!("User: {}", message.content),
            MessageRole::Assistant => format!("Assistant: {}", message.content),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Character-count token estimate, padded by 10%
///
/// Approximate by nature; it only needs to grow with output length.
pub fn estimate_tokens(prompt: &str, response: &str) -> u32 {
    let total_chars = prompt.chars().count() + response.chars().count();
    let estimated = (total_chars / 4) as f64;
    (estimated * 1.1) as u32
}

/// Pricing in USD per 1M tokens
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelPricing {
    pub input_price: f64,
    pub output_price: f64,
}

impl ModelPricing {
    /// Input and output are not told apart by the estimate, so bill the mean
    pub fn blended(&self) -> f64 {
        (self.input_price + self.output_price) / 2.0
    }
}

const PRICING: &[(&str, ModelPricing)] = &[
    (
        "gemini-2.0-flash",
        ModelPricing {
            input_price: 0.10,
            output_price: 0.40,
        },
    ),
    (
        "gemini-2.0-flash-lite",
        ModelPricing {
            input_price: 0.075,
            output_price: 0.30,
        },
    ),
    (
        "gemini-1.5-flash",
        ModelPricing {
            input_price: 0.075,
            output_price: 0.30,
        },
    ),
    (
        "gemini-1.5-pro",
        ModelPricing {
            input_price: 1.25,
            output_price: 5.00,
        },
    ),
];

/// Look up pricing, ignoring a leading `models/` prefix
pub fn get_model_pricing(model: &str) -> Option<ModelPricing> {
    let model = model.strip_prefix("models/").unwrap_or(model);
    PRICING
        .iter()
        .find(|(id, _)| *id == model)
        .map(|(_, pricing)| *pricing)
}
