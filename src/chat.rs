use itertools::Itertools;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use crate::catalog::{Category, Platform};
use crate::error::DashboardError;

pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String
}

impl ChatMessage {
    pub fn new(role: Role, content: &str) -> Self {
        ChatMessage { role, content: content.to_string() }
    }
}

#[derive(Serialize, Debug)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: Vec<&'a ChatMessage>
}

#[derive(Deserialize, Debug)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>
}

#[derive(Deserialize, Debug)]
struct Choice {
    message: Option<ReplyMessage>
}

#[derive(Deserialize, Debug)]
struct ReplyMessage {
    content: Option<String>
}

/// Describes the current catalog to the model.
pub fn system_prompt(categories: &[Category], platforms: &[Platform]) -> String {
    format!(
        "You are an assistant that helps users manage a dashboard of platforms.\nCurrent categories: {}.\nExisting platforms: {}.",
        categories.iter().map(|c| format!("{}({})", c.main, c.subs.join(", "))).join("; "),
        platforms.iter().map(|p| p.name.as_str()).join(", ")
    )
}

pub struct ChatAssistant {
    client: Client,
    endpoint: String,
    model: String,
    api_key: Option<String>,
    messages: Vec<ChatMessage>
}

impl ChatAssistant {
    /// Without an api key messages are only recorded locally.
    pub fn new(endpoint: &str, model: &str, api_key: Option<String>) -> Self {
        ChatAssistant {
            client: Client::new(),
            endpoint: endpoint.to_string(),
            model: model.to_string(),
            api_key: api_key.filter(|k| !k.is_empty()),
            messages: Vec::new()
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_enabled(&self) -> bool {
        self.api_key.is_some()
    }

    /// Records `input` and, when enabled, asks for a reply. Returns the reply if one arrived.
    pub async fn send(&mut self, input: &str, categories: &[Category], platforms: &[Platform]) -> Option<String> {
        if input.trim().is_empty() {
            return None;
        }
        self.messages.push(ChatMessage::new(Role::User, input));

        let api_key = match &self.api_key {
            Some(key) => key.clone(),
            None => {
                debug!("No chat api key configured, message kept locally");
                return None;
            }
        };

        let system = ChatMessage::new(Role::System, &system_prompt(categories, platforms));
        match self.request_reply(&api_key, &system).await {
            Ok(Some(reply)) => {
                self.messages.push(ChatMessage::new(Role::Assistant, &reply));
                Some(reply)
            }
            Ok(None) => None,
            Err(err) => {
                warn!("Chat request failed: {}", err);
                None
            }
        }
    }

    async fn request_reply(&self, api_key: &str, system: &ChatMessage) -> Result<Option<String>, DashboardError> {
        let request = CompletionRequest {
            model: &self.model,
            messages: std::iter::once(system).chain(self.messages.iter()).collect()
        };

        let response = self.client.post(&self.endpoint)
            .bearer_auth(api_key)
            .json(&request)
            .send().await
            .map_err(|err| DashboardError::network(format!("Failed to reach chat endpoint: {}", err)))?
            .json::<CompletionResponse>().await
            .map_err(|err| DashboardError::network(format!("Failed to parse chat response: {}", err)))?;

        Ok(extract_reply(response))
    }
}

fn extract_reply(response: CompletionResponse) -> Option<String> {
    response.choices.into_iter()
        .next()
        .and_then(|c| c.message)
        .and_then(|m| m.content)
        .map(|content| content.trim().to_string())
        .filter(|content| !content.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed::{default_categories, default_platforms};

    #[test]
    fn system_prompt_lists_catalog() {
        let categories = vec![Category::new("Design", &["UI/UX", "Icons"], "purple", "")];
        let prompt = system_prompt(&categories, &default_platforms()[..2]);

        assert!(prompt.contains("Current categories: Design(UI/UX, Icons)."));
        assert!(prompt.ends_with("Existing platforms: GitHub, Notion."));
    }

    #[test]
    fn reply_is_trimmed_and_blank_replies_dropped() {
        let parsed: CompletionResponse = serde_json::from_str(r#"{"choices":[{"message":{"content":"  hi \n"}}]}"#).unwrap();
        assert_eq!(extract_reply(parsed), Some("hi".to_string()));

        let blank: CompletionResponse = serde_json::from_str(r#"{"choices":[{"message":{"content":"  "}}]}"#).unwrap();
        assert_eq!(extract_reply(blank), None);

        let empty: CompletionResponse = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(extract_reply(empty), None);
    }

    #[test]
    fn request_body_puts_system_prompt_first() {
        let system = ChatMessage::new(Role::System, "sys");
        let user = ChatMessage::new(Role::User, "hello");
        let request = CompletionRequest { model: DEFAULT_MODEL, messages: vec![&system, &user] };

        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["model"], "gpt-3.5-turbo");
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][1]["content"], "hello");
    }

    #[tokio::test]
    async fn without_api_key_messages_stay_local() {
        let mut chat = ChatAssistant::new(DEFAULT_ENDPOINT, DEFAULT_MODEL, None);
        assert!(!chat.is_enabled());

        assert_eq!(chat.send("", &default_categories(), &default_platforms()).await, None);
        assert!(chat.messages().is_empty());

        assert_eq!(chat.send("add figma", &default_categories(), &default_platforms()).await, None);
        assert_eq!(chat.messages(), &[ChatMessage::new(Role::User, "add figma")]);
    }

    #[tokio::test]
    async fn network_failures_are_swallowed() {
        let mut chat = ChatAssistant::new("http://127.0.0.1:9/v1/chat/completions", DEFAULT_MODEL, Some("key".to_string()));

        assert_eq!(chat.send("hello", &[], &[]).await, None);
        assert_eq!(chat.messages().len(), 1);
    }
}
