use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;

use crate::config::Config;
use crate::errors::PlanError;
use crate::profile::Profile;
use crate::prompt;
use crate::wire::{ChatCompletion, ChatMessage, ChatRequest};

pub const SOURCE_GROQ: &str = "Llama 3 (Groq)";

/// Live backend: one chat-completion call per request, single user
/// message, no retries.
pub struct GroqProvider {
    api_key: String,
    api_url: String,
    model: String,
    temperature: f32,
    timeout_secs: u64,
    client: Client,
}

impl GroqProvider {
    pub fn new(api_key: String, cfg: &Config) -> Self {
        Self {
            api_key,
            api_url: cfg.api_url.clone(),
            model: cfg.model.clone(),
            temperature: cfg.temperature,
            timeout_secs: cfg.timeout_secs,
            client: Client::new(),
        }
    }
}

#[async_trait]
impl super::Provider for GroqProvider {
    async fn request_plan(&self, profile: &Profile, debug: bool) -> Result<String, PlanError> {
        let body = ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage::user(prompt::coach_prompt(profile))],
            temperature: self.temperature,
        };

        if debug {
            eprintln!(
                "debug[groq]: HTTP POST {} model={} temperature={}",
                self.api_url, self.model, self.temperature
            );
        }

        let resp = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .timeout(Duration::from_secs(self.timeout_secs))
            .json(&body)
            .send()
            .await
            .map_err(|e| PlanError::Provider(e.to_string()))?;

        let status = resp.status();
        let text = resp
            .text()
            .await
            .map_err(|e| PlanError::Provider(e.to_string()))?;

        if debug {
            eprintln!("debug[groq]: raw status: {}", status);
            eprintln!("debug[groq]: raw response:\n{}", &text);
        }

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(PlanError::Auth(format!("{}: {}", status, text)));
        }
        if !status.is_success() {
            return Err(PlanError::Provider(format!("Groq API error ({}): {}", status, text)));
        }

        let parsed: ChatCompletion = serde_json::from_str(&text)
            .map_err(|e| PlanError::Schema(format!("{e}\nRaw: {text}")))?;

        match parsed.first_content() {
            Some(content) => Ok(content.to_string()),
            None => Err(PlanError::Schema("completion carried no choices".into())),
        }
    }

    fn source(&self) -> &'static str {
        SOURCE_GROQ
    }
}
