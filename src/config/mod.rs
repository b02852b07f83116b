use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub api_url: String,
    pub model: String,
    pub temperature: f32,
    pub timeout_secs: u64,
    pub root: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: "https://api.groq.com/openai/v1/chat/completions".into(),
            model: "llama-3.3-70b-versatile".into(),
            temperature: 0.5,
            timeout_secs: 120,
            root: ".".into(),
        }
    }
}

/// Key-retrieval order: explicit flag first, then the environment.
pub fn resolve_api_key(flag: Option<String>) -> Option<String> {
    flag.filter(|k| !k.trim().is_empty())
        .or_else(|| std::env::var("GROQ_API_KEY").ok().filter(|k| !k.trim().is_empty()))
}
