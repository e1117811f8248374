//! LLM Client — the single point of entry for all hosted-model calls.
//!
//! ARCHITECTURAL RULE: No other module may call the model endpoint directly.
//! All model interactions MUST go through this module.
//!
//! Every call is a forced structured tool invocation: the caller supplies a
//! `ToolDefinition` and the deployment is instructed to answer with exactly
//! that tool. No free-text completions are issued anywhere in the system.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::config::Config;

/// API revision the request contract is pinned to.
pub const OPENAI_API_VERSION: &str = "2024-02-15-preview";
/// Fixed low temperature — biases toward stable output; repeats are still
/// not byte-identical.
const TEMPERATURE: f32 = 0.1;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("model endpoint returned status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("failed to decode model response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// A structured tool the model is forced to invoke.
/// `parameters` is a JSON Schema object describing the arguments.
#[derive(Debug, Clone, Serialize)]
pub struct ToolDefinition {
    pub name: &'static str,
    pub description: &'static str,
    pub parameters: serde_json::Value,
}

/// Seam between the question generator and the hosted model, so generation
/// logic is testable against a scripted stand-in.
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// Sends a two-turn prompt and forces a call to `tool`. Returns the raw
    /// JSON arguments of the first matching tool call, or `None` when the
    /// model produced no such call. One attempt only — never retried.
    async fn forced_tool_call(
        &self,
        system: &str,
        user: &str,
        tool: &ToolDefinition,
    ) -> Result<Option<String>, LlmError>;
}

// ────────────────────────────────────────────────────────────────────────────
// Wire types (chat completions with tools)
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    tools: Vec<Tool<'a>>,
    tool_choice: ToolChoice<'a>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct Tool<'a> {
    #[serde(rename = "type")]
    tool_type: &'a str,
    function: &'a ToolDefinition,
}

#[derive(Debug, Serialize)]
struct ToolChoice<'a> {
    #[serde(rename = "type")]
    choice_type: &'a str,
    function: ToolChoiceFunction<'a>,
}

#[derive(Debug, Serialize)]
struct ToolChoiceFunction<'a> {
    name: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
    #[serde(default)]
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    tool_calls: Option<Vec<ToolCall>>,
}

#[derive(Debug, Deserialize)]
struct ToolCall {
    function: FunctionCall,
}

#[derive(Debug, Deserialize)]
struct FunctionCall {
    name: String,
    arguments: String,
}

#[derive(Debug, Deserialize)]
struct Usage {
    prompt_tokens: u32,
    completion_tokens: u32,
}

// ────────────────────────────────────────────────────────────────────────────
// Azure OpenAI client
// ────────────────────────────────────────────────────────────────────────────

/// Chat-completions client pinned to one deployment alias and API revision.
#[derive(Clone)]
pub struct AzureOpenAiClient {
    client: Client,
    endpoint: String,
    api_key: String,
    deployment: String,
}

impl AzureOpenAiClient {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .expect("Failed to build HTTP client"),
            endpoint: config.openai_endpoint.trim_end_matches('/').to_string(),
            api_key: config.openai_api_key.clone(),
            deployment: config.openai_deployment.clone(),
        }
    }

    pub fn deployment(&self) -> &str {
        &self.deployment
    }
}

#[async_trait]
impl ChatModel for AzureOpenAiClient {
    async fn forced_tool_call(
        &self,
        system: &str,
        user: &str,
        tool: &ToolDefinition,
    ) -> Result<Option<String>, LlmError> {
        let request_body = ChatRequest {
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
            temperature: TEMPERATURE,
            tools: vec![Tool {
                tool_type: "function",
                function: tool,
            }],
            tool_choice: ToolChoice {
                choice_type: "function",
                function: ToolChoiceFunction { name: tool.name },
            },
        };

        let url = format!(
            "{}/openai/deployments/{}/chat/completions?api-version={}",
            self.endpoint, self.deployment, OPENAI_API_VERSION
        );

        let response = self
            .client
            .post(&url)
            .header("api-key", &self.api_key)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let chat_response: ChatResponse = serde_json::from_str(&body)?;

        if let Some(usage) = &chat_response.usage {
            debug!(
                "Model call succeeded: prompt_tokens={}, completion_tokens={}",
                usage.prompt_tokens, usage.completion_tokens
            );
        }

        Ok(extract_tool_arguments(chat_response, tool.name))
    }
}

/// Pulls the arguments of the first tool call matching `tool_name` out of a
/// chat response. `None` when the model answered without the forced call.
fn extract_tool_arguments(response: ChatResponse, tool_name: &str) -> Option<String> {
    response
        .choices
        .into_iter()
        .next()?
        .message
        .tool_calls?
        .into_iter()
        .find(|call| call.function.name == tool_name)
        .map(|call| call.function.arguments)
}
