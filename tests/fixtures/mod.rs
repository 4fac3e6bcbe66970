use serde_json::{Value, json};

pub fn generate_request(prompt: &str) -> Value {
    json!({
        "contents": [{"role": "user", "parts": [{"text": prompt}]}]
    })
}

pub fn generate_response(text: &str) -> Value {
    json!({
        "candidates": [{
            "content": {"role": "model", "parts": [{"text": text}]},
            "finishReason": "STOP",
            "index": 0
        }],
        "usageMetadata": {
            "promptTokenCount": 1180,
            "candidatesTokenCount": 42,
            "totalTokenCount": 1222
        },
        "modelVersion": "gemini-flash-latest"
    })
}

pub fn multi_part_response() -> Value {
    json!({
        "candidates": [{
            "content": {
                "role": "model",
                "parts": [
                    {"text": "• **MedLink Plus**: healthcare platform\n\n"},
                    {"text": "• **Discord bots**: automation"}
                ]
            },
            "finishReason": "STOP"
        }]
    })
}

pub fn blocked_prompt_response() -> Value {
    json!({
        "promptFeedback": {"blockReason": "SAFETY"},
        "usageMetadata": {"promptTokenCount": 1180, "totalTokenCount": 1180}
    })
}

pub fn api_error_response(code: u16, message: &str, status: &str) -> Value {
    json!({
        "error": {"code": code, "message": message, "status": status}
    })
}
