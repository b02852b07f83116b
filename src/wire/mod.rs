use serde::{Deserialize, Serialize};

/// ========================================
/// Chat-completion wire protocol
/// ========================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self { role: "user".into(), content: content.into() }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    pub message: ChatMessage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletion {
    pub choices: Vec<Choice>,
}

impl ChatCompletion {
    /// Content of the first choice, if the endpoint returned any.
    pub fn first_content(&self) -> Option<&str> {
        self.choices.first().map(|c| c.message.content.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completion_deserializes_from_endpoint_shape() {
        let raw = r#"{
            "id": "chatcmpl-123",
            "object": "chat.completion",
            "choices": [
                { "index": 0, "message": { "role": "assistant", "content": "Day: Monday" }, "finish_reason": "stop" }
            ],
            "usage": { "total_tokens": 42 }
        }"#;
        let parsed: ChatCompletion = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.first_content(), Some("Day: Monday"));
    }

    #[test]
    fn empty_choices_yield_no_content() {
        let parsed: ChatCompletion = serde_json::from_str(r#"{"choices":[]}"#).unwrap();
        assert!(parsed.first_content().is_none());
    }

    #[test]
    fn request_serializes_messages_in_order() {
        let req = ChatRequest {
            model: "llama-3.3-70b-versatile".into(),
            messages: vec![ChatMessage::user("hello")],
            temperature: 0.5,
        };
        let v = serde_json::to_value(&req).unwrap();
        assert_eq!(v["messages"][0]["role"], "user");
        assert_eq!(v["model"], "llama-3.3-70b-versatile");
    }
}
