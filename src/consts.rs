pub const INSTRUCTION_TEMPLATE: &str = include_str!("../prompts/instructions.md");
pub const USER_QUESTION_SEPARATOR: &str = "\n\nUser Question: ";

pub const MESSAGE_REQUIRED: &str = "Message is required";
pub const INVALID_JSON_BODY: &str = "Invalid JSON body";
pub const PAYLOAD_TOO_LARGE: &str = "Request body too large";
pub const UPSTREAM_FAILURE: &str = "Failed to fetch response from AI";

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_MODEL: &str = "gemini-flash-latest";
pub const DEFAULT_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

pub const API_KEY_HEADER: &str = "x-goog-api-key";

pub const CONNECT_TIMEOUT_SECS: u64 = 30;
pub const JSON_BODY_LIMIT: usize = 100 * 1024;
