use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Who authored a conversation turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

impl ChatRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatRole::User => "user",
            ChatRole::Assistant => "assistant",
        }
    }
}

/// One turn of the conversation history
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ChatMessageDto {
    pub role: ChatRole,

    #[validate(length(min = 1, max = 4000, message = "Message must be 1-4000 characters"))]
    pub content: String,
}

/// Request DTO for a chat turn; the full history is sent each time
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ChatRequestDto {
    #[validate(length(min = 1, max = 50, message = "Conversation must be 1-50 messages"), nested)]
    pub messages: Vec<ChatMessageDto>,
}

/// Response DTO for a chat turn
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChatResponseDto {
    pub reply: String,
    /// True when the upstream call failed and `reply` is the canned fallback
    pub fallback: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_history_fails_validation() {
        let dto = ChatRequestDto { messages: vec![] };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_empty_message_content_fails_validation() {
        let dto = ChatRequestDto {
            messages: vec![ChatMessageDto {
                role: ChatRole::User,
                content: String::new(),
            }],
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_valid_history_passes() {
        let dto = ChatRequestDto {
            messages: vec![
                ChatMessageDto {
                    role: ChatRole::User,
                    content: "How does sponsorship matching work?".to_string(),
                },
                ChatMessageDto {
                    role: ChatRole::Assistant,
                    content: "Happy to explain.".to_string(),
                },
                ChatMessageDto {
                    role: ChatRole::User,
                    content: "Go on.".to_string(),
                },
            ],
        };
        assert!(dto.validate().is_ok());
    }
}
