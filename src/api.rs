//! Provider-agnostic chat completion client.
//!
//! Thin wrapper over the HTTP APIs of OpenAI-compatible services, Claude and
//! Ollama. The composer only sees it through `GeneratorCapability`: text in,
//! text out, may fail.

use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::time::Duration;

use crate::composer::principles::{GeneratorCapability, PrincipleTemplate};
use crate::config::Config;

/// System message sent with every generation call.
const SYSTEM_PROMPT: &str = "You are an expert prompt engineer. Follow the \
    instructions exactly and reply with only the requested text.";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub max_tokens: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatChoice {
    pub message: ChatMessage,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<ChatChoice>,
    pub usage: Option<Usage>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

#[derive(Debug, Clone)]
pub enum AIProvider {
    OpenAI,
    Claude,
    Ollama,
    Custom,
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    pub provider: AIProvider,
    endpoint: String,
    api_key: String,
    model: String,
}

impl ApiClient {
    pub fn new(provider: &str, endpoint: &str, api_key: &str, model: &str) -> Self {
        let provider_type = match provider.to_lowercase().as_str() {
            "openai" => AIProvider::OpenAI,
            "claude" | "anthropic" => AIProvider::Claude,
            "ollama" => AIProvider::Ollama,
            _ => AIProvider::Custom,
        };

        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .user_agent("promptly-cli/1.0")
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            provider: provider_type,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
        }
    }

    /// Build a client from the config, or `None` when generation is not
    /// configured. Ollama runs locally and needs no key; everything else does.
    pub fn from_config(config: &Config) -> Option<Self> {
        let ai = &config.ai;
        let client = Self::new(&ai.provider, &ai.api_url, &ai.api_key, &ai.model);
        match client.provider {
            AIProvider::Ollama => Some(client),
            _ if !ai.api_key.is_empty() => Some(client),
            _ => None,
        }
    }

    /// One-shot chat completion: system prompt plus a single user message.
    pub async fn send_message(&self, message: &str) -> Result<String> {
        let messages = vec![
            ChatMessage {
                role: "system".to_string(),
                content: SYSTEM_PROMPT.to_string(),
            },
            ChatMessage {
                role: "user".to_string(),
                content: message.to_string(),
            },
        ];

        match self.provider {
            AIProvider::OpenAI | AIProvider::Custom => self.send_openai_request(messages).await,
            AIProvider::Claude => self.send_claude_request(messages).await,
            AIProvider::Ollama => self.send_ollama_request(messages).await,
        }
    }

    async fn send_openai_request(&self, messages: Vec<ChatMessage>) -> Result<String> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages,
            temperature: 0.3,
            max_tokens: Some(2000),
        };

        let mut request_builder = self
            .client
            .post(format!("{}/chat/completions", self.endpoint))
            .json(&request);

        if !self.api_key.is_empty() {
            request_builder =
                request_builder.header("Authorization", format!("Bearer {}", self.api_key));
        }

        let response = request_builder.send().await?;

        if response.status().is_success() {
            let chat_response: ChatResponse = response.json().await?;
            chat_response
                .choices
                .first()
                .map(|choice| choice.message.content.clone())
                .ok_or_else(|| anyhow::anyhow!("No choices in response"))
        } else {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            Err(anyhow::anyhow!("API request failed: {}", error_text))
        }
    }

    async fn send_claude_request(&self, messages: Vec<ChatMessage>) -> Result<String> {
        // Claude takes the system prompt as a top-level field, not a message
        let (system, chat): (Vec<_>, Vec<_>) =
            messages.into_iter().partition(|m| m.role == "system");
        let claude_messages: Vec<Value> = chat
            .into_iter()
            .map(|msg| json!({ "role": msg.role, "content": msg.content }))
            .collect();

        let request = json!({
            "model": self.model,
            "system": system.first().map(|m| m.content.clone()).unwrap_or_default(),
            "messages": claude_messages,
            "max_tokens": 2000,
            "temperature": 0.3
        });

        let mut request_builder = self
            .client
            .post(format!("{}/v1/messages", self.endpoint))
            .header("content-type", "application/json")
            .header("anthropic-version", "2023-06-01")
            .json(&request);

        if !self.api_key.is_empty() {
            request_builder = request_builder.header("x-api-key", &self.api_key);
        }

        let response = request_builder.send().await?;

        if response.status().is_success() {
            let claude_response: Value = response.json().await?;
            claude_response["content"]
                .as_array()
                .and_then(|content| content.first())
                .and_then(|block| block["text"].as_str())
                .map(ToString::to_string)
                .ok_or_else(|| anyhow::anyhow!("Could not parse Claude response"))
        } else {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            Err(anyhow::anyhow!("Claude API request failed: {}", error_text))
        }
    }

    async fn send_ollama_request(&self, messages: Vec<ChatMessage>) -> Result<String> {
        let prompt = messages
            .iter()
            .map(|msg| format!("{}: {}", msg.role.to_uppercase(), msg.content))
            .collect::<Vec<_>>()
            .join("\n");

        let request = json!({
            "model": self.model,
            "prompt": prompt,
            "stream": false,
            "options": {
                "temperature": 0.3,
                "num_predict": 2000
            }
        });

        let response = self
            .client
            .post(format!("{}/api/generate", self.endpoint))
            .json(&request)
            .send()
            .await?;

        if response.status().is_success() {
            let ollama_response: Value = response.json().await?;
            ollama_response["response"]
                .as_str()
                .map(ToString::to_string)
                .ok_or_else(|| anyhow::anyhow!("Could not parse Ollama response"))
        } else {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            Err(anyhow::anyhow!("Ollama API request failed: {}", error_text))
        }
    }
}

#[async_trait]
impl GeneratorCapability for ApiClient {
    async fn generate(&self, _template: PrincipleTemplate, instruction: &str) -> Result<String> {
        self.send_message(instruction).await
    }
}
