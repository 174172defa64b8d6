//! Gemini `generateContent` JSON shapes.

use serde_json::{json, Value};

use crate::session::{ModelResponse, SessionConfig, ToolResultPayload, TurnInput};
use crate::tools::{to_gemini_tool, ToolInvocationRequest};
use crate::{AiError, TokenUsage};

/// The `contents` entry carrying one turn input.
pub(crate) fn input_content(input: &TurnInput) -> Value {
    match input {
        TurnInput::Message(text) => json!({
            "role": "user",
            "parts": [{ "text": text }]
        }),
        TurnInput::ToolResults(results) => tool_results_content(results),
    }
}

fn tool_results_content(results: &[ToolResultPayload]) -> Value {
    let parts: Vec<Value> = results
        .iter()
        .map(|r| {
            // functionResponse.response must be an object.
            let response = match &r.result {
                Value::Object(_) => r.result.clone(),
                other => json!({ "result": other }),
            };
            json!({
                "functionResponse": {
                    "id": r.call_id,
                    "name": r.name,
                    "response": response,
                }
            })
        })
        .collect();
    json!({ "role": "user", "parts": parts })
}

/// Build the request body from committed history plus the pending input.
pub(crate) fn build_request_body(config: &SessionConfig, contents: Vec<Value>) -> Value {
    let mut body = json!({
        "contents": contents,
        "generationConfig": {
            "maxOutputTokens": config.max_output_tokens,
            "temperature": config.temperature,
        }
    });

    if !config.system_instruction.trim().is_empty() {
        body["systemInstruction"] = json!({
            "parts": [{ "text": config.system_instruction }]
        });
    }

    if !config.tools.is_empty() {
        let tool_defs: Vec<_> = config.tools.iter().map(to_gemini_tool).collect();
        body["tools"] = json!([{
            "functionDeclarations": tool_defs
        }]);
    }

    body
}

/// A parsed reply plus the `model` content to commit to history.
#[derive(Debug)]
pub(crate) struct ParsedReply {
    pub response: ModelResponse,
    pub content: Value,
}

/// Parse a `generateContent` reply.
///
/// `functionCall` parts without an `id` get a generated one, written back
/// into the committed content so the later `functionResponse` matches.
pub(crate) fn parse_response(json: Value) -> Result<ParsedReply, AiError> {
    let candidates = json["candidates"]
        .as_array()
        .ok_or_else(|| AiError::ParseError("no candidates in response".to_string()))?;

    let first = candidates
        .first()
        .ok_or_else(|| AiError::ParseError("empty candidates".to_string()))?;

    let mut parts = first["content"]["parts"]
        .as_array()
        .cloned()
        .unwrap_or_default();

    let mut text = String::new();
    let mut tool_calls = Vec::new();

    for part in parts.iter_mut() {
        if let Some(t) = part["text"].as_str() {
            // Thought summaries are not part of the reply.
            if part["thought"].as_bool() != Some(true) {
                text.push_str(t);
            }
        }
        if let Some(fc) = part.get_mut("functionCall") {
            let existing = fc["id"]
                .as_str()
                .filter(|id| !id.is_empty())
                .map(str::to_string);
            let call_id = match existing {
                Some(id) => id,
                None => {
                    let id = uuid::Uuid::new_v4().to_string();
                    fc["id"] = Value::String(id.clone());
                    id
                }
            };
            let arguments = match fc.get("args") {
                Some(args) => args.clone(),
                None => json!({}),
            };
            tool_calls.push(ToolInvocationRequest {
                call_id,
                name: fc["name"].as_str().unwrap_or("").to_string(),
                arguments,
            });
        }
    }

    if parts.is_empty() {
        parts.push(json!({ "text": "" }));
    }

    let usage = TokenUsage {
        input_tokens: json["usageMetadata"]["promptTokenCount"]
            .as_u64()
            .unwrap_or(0),
        output_tokens: json["usageMetadata"]["candidatesTokenCount"]
            .as_u64()
            .unwrap_or(0),
    };

    Ok(ParsedReply {
        response: ModelResponse {
            text,
            tool_calls,
            usage,
        },
        content: json!({ "role": "model", "parts": parts }),
    })
}

/// Map a non-success HTTP status and body to an error.
pub(crate) fn classify_status(status: reqwest::StatusCode, body: &str) -> AiError {
    use reqwest::StatusCode;

    if status == StatusCode::TOO_MANY_REQUESTS {
        return AiError::RateLimited;
    }
    if status == StatusCode::UNAUTHORIZED
        || status == StatusCode::FORBIDDEN
        || (status == StatusCode::BAD_REQUEST && body.contains("API_KEY_INVALID"))
    {
        return AiError::Unauthorized(format!("HTTP {status}"));
    }
    AiError::ApiError(format!("HTTP {status}: {body}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::BuiltinTool;
    use reqwest::StatusCode;

    #[test]
    fn message_input_is_a_user_text_part() {
        let content = input_content(&TurnInput::Message("hello".into()));
        assert_eq!(content["role"], "user");
        assert_eq!(content["parts"][0]["text"], "hello");
    }

    #[test]
    fn tool_results_become_function_responses() {
        let content = input_content(&TurnInput::ToolResults(vec![
            ToolResultPayload {
                call_id: "c1".into(),
                name: "open_website".into(),
                result: json!({ "status": "dispatched" }),
            },
            ToolResultPayload {
                call_id: "c2".into(),
                name: "open_website".into(),
                result: json!("plain"),
            },
        ]));
        assert_eq!(content["role"], "user");
        let first = &content["parts"][0]["functionResponse"];
        assert_eq!(first["id"], "c1");
        assert_eq!(first["name"], "open_website");
        assert_eq!(first["response"]["status"], "dispatched");
        assert_eq!(content["parts"][1]["functionResponse"]["response"]["result"], "plain");
    }

    #[test]
    fn request_body_carries_instruction_tools_and_generation_config() {
        let config = SessionConfig::new("gemini-2.5-pro")
            .with_system_instruction("You are Aura.")
            .with_tools(vec![BuiltinTool::OpenWebsite.declaration()])
            .with_max_output_tokens(512)
            .with_temperature(0.2);
        let body = build_request_body(&config, vec![input_content(&TurnInput::Message("hi".into()))]);

        assert_eq!(body["systemInstruction"]["parts"][0]["text"], "You are Aura.");
        assert_eq!(body["generationConfig"]["maxOutputTokens"], 512);
        assert_eq!(body["generationConfig"]["temperature"], 0.2);
        assert_eq!(
            body["tools"][0]["functionDeclarations"][0]["name"],
            "open_website"
        );
        assert_eq!(body["contents"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn request_body_omits_empty_instruction_and_tools() {
        let body = build_request_body(&SessionConfig::new("m"), Vec::new());
        assert!(body.get("systemInstruction").is_none());
        assert!(body.get("tools").is_none());
    }

    #[test]
    fn parses_text_and_usage() {
        let reply = parse_response(json!({
            "candidates": [{
                "content": { "role": "model", "parts": [{ "text": "hi " }, { "text": "there" }] }
            }],
            "usageMetadata": { "promptTokenCount": 12, "candidatesTokenCount": 3 }
        }))
        .unwrap();
        assert_eq!(reply.response.text, "hi there");
        assert!(!reply.response.has_tool_calls());
        assert_eq!(reply.response.usage.total_tokens(), 15);
        assert_eq!(reply.content["role"], "model");
    }

    #[test]
    fn provider_call_id_is_kept() {
        let reply = parse_response(json!({
            "candidates": [{
                "content": { "parts": [{
                    "functionCall": { "id": "c1", "name": "open_website", "args": { "url": "example.com" } }
                }] }
            }]
        }))
        .unwrap();
        let call = &reply.response.tool_calls[0];
        assert_eq!(call.call_id, "c1");
        assert_eq!(call.name, "open_website");
        assert_eq!(call.arguments["url"], "example.com");
    }

    #[test]
    fn missing_call_id_is_generated_and_written_back() {
        let reply = parse_response(json!({
            "candidates": [{
                "content": { "parts": [{ "functionCall": { "name": "open_website" } }] }
            }]
        }))
        .unwrap();
        let call = &reply.response.tool_calls[0];
        assert!(!call.call_id.is_empty());
        assert_eq!(call.arguments, json!({}));
        assert_eq!(
            reply.content["parts"][0]["functionCall"]["id"],
            call.call_id.as_str()
        );
    }

    #[test]
    fn thought_parts_are_not_reply_text() {
        let reply = parse_response(json!({
            "candidates": [{
                "content": { "parts": [
                    { "text": "planning...", "thought": true },
                    { "text": "Done." }
                ] }
            }]
        }))
        .unwrap();
        assert_eq!(reply.response.text, "Done.");
    }

    #[test]
    fn candidate_without_content_is_an_empty_reply() {
        let reply = parse_response(json!({
            "candidates": [{ "finishReason": "SAFETY" }]
        }))
        .unwrap();
        assert_eq!(reply.response.text, "");
        assert_eq!(reply.content["parts"][0]["text"], "");
    }

    #[test]
    fn missing_candidates_is_a_parse_error() {
        assert!(matches!(
            parse_response(json!({ "error": "nope" })),
            Err(AiError::ParseError(_))
        ));
        assert!(matches!(
            parse_response(json!({ "candidates": [] })),
            Err(AiError::ParseError(_))
        ));
    }

    #[test]
    fn status_classification() {
        assert!(matches!(
            classify_status(StatusCode::TOO_MANY_REQUESTS, ""),
            AiError::RateLimited
        ));
        assert!(classify_status(StatusCode::UNAUTHORIZED, "").is_fatal());
        assert!(classify_status(StatusCode::FORBIDDEN, "").is_fatal());
        assert!(classify_status(
            StatusCode::BAD_REQUEST,
            r#"{"error":{"details":[{"reason":"API_KEY_INVALID"}]}}"#
        )
        .is_fatal());
        let err = classify_status(StatusCode::INTERNAL_SERVER_ERROR, "boom");
        assert!(!err.is_fatal());
        assert_eq!(err.to_string(), "API error: HTTP 500 Internal Server Error: boom");
    }
}
