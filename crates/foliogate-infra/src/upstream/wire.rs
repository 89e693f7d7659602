//! Wire shapes of the upstream chat-completions API.
//!
//! Only the fields the relay actually reads are modeled; everything else
//! in the upstream body is carried opaquely through `serde_json::Value`.

use serde::Deserialize;
use serde_json::Value;

use foliogate_types::chat::ChatReply;

/// One streamed chat-completion chunk.
#[derive(Debug, Default, Deserialize)]
pub struct StreamChunk {
    #[serde(default)]
    pub choices: Vec<StreamChoice>,
}

#[derive(Debug, Default, Deserialize)]
pub struct StreamChoice {
    #[serde(default)]
    pub delta: StreamDelta,
}

#[derive(Debug, Default, Deserialize)]
pub struct StreamDelta {
    #[serde(default)]
    pub content: Option<String>,
}

/// Extract the consolidated reply from a non-streaming upstream body.
///
/// Takes the first non-empty of the chosen message content, the chosen
/// text field, or the first output item's content; falls back to the
/// whole body serialized as text. The raw body rides along verbatim.
pub fn extract_reply(raw: Value) -> ChatReply {
    const CANDIDATES: [&str; 3] = [
        "/choices/0/message/content",
        "/choices/0/text",
        "/output/0/content",
    ];

    let reply = CANDIDATES
        .iter()
        .find_map(|pointer| {
            raw.pointer(pointer)
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
        })
        .map(str::to_owned)
        .unwrap_or_else(|| raw.to_string());

    ChatReply { reply, raw }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_stream_chunk_delta() {
        let chunk: StreamChunk =
            serde_json::from_str(r#"{"choices":[{"delta":{"content":"Hi"}}]}"#).unwrap();
        assert_eq!(chunk.choices[0].delta.content.as_deref(), Some("Hi"));
    }

    #[test]
    fn test_stream_chunk_missing_fields_default() {
        let chunk: StreamChunk = serde_json::from_str(r#"{"id":"x"}"#).unwrap();
        assert!(chunk.choices.is_empty());
    }

    #[test]
    fn test_extract_message_content() {
        let raw = json!({"choices": [{"message": {"content": "answer"}}]});
        let reply = extract_reply(raw.clone());
        assert_eq!(reply.reply, "answer");
        assert_eq!(reply.raw, raw);
    }

    #[test]
    fn test_extract_text_field() {
        let raw = json!({"choices": [{"text": "completion text"}]});
        assert_eq!(extract_reply(raw).reply, "completion text");
    }

    #[test]
    fn test_extract_output_content() {
        let raw = json!({"output": [{"content": "output text"}]});
        assert_eq!(extract_reply(raw).reply, "output text");
    }

    #[test]
    fn test_extract_falls_back_to_raw_json() {
        let raw = json!({"unexpected": true});
        let reply = extract_reply(raw.clone());
        assert_eq!(reply.reply, raw.to_string());
    }

    #[test]
    fn test_extract_skips_empty_content() {
        let raw = json!({"choices": [{"message": {"content": ""}, "text": "fallback"}]});
        assert_eq!(extract_reply(raw).reply, "fallback");
    }
}
