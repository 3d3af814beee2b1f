use prompt_relay::{Result, config::LlmConfig};
use serde_json::{Value, json};
use tempfile::TempDir;
use tokio::fs;
use wiremock::MockServer;

pub const TEST_API_KEY: &str = "sk-test-key";

/// LLM config pointed at a mock upstream, with a test credential
pub fn create_llm_config(server: &MockServer) -> LlmConfig {
    LlmConfig {
        base_url: format!("{}/v1", server.uri()),
        api_key: Some(TEST_API_KEY.to_string()),
    }
}

/// LLM config pointed at a mock upstream, without any credential
pub fn create_llm_config_without_key(server: &MockServer) -> LlmConfig {
    LlmConfig {
        api_key: None,
        ..create_llm_config(server)
    }
}

/// Base URL of a port nothing listens on anymore
pub async fn unreachable_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind ephemeral port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/v1", port)
}

/// Create a temporary directory for test files
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Create a test config YAML file
pub async fn create_test_config_file(dir: &TempDir, content: &str) -> Result<String> {
    let config_path = dir.path().join("config.yaml");
    fs::write(&config_path, content).await?;
    Ok(config_path.to_string_lossy().to_string())
}

/// A minimal chat-completion body carrying `content`
pub fn completion_body(content: &str) -> Value {
    json!({
        "id": "chatcmpl-123",
        "object": "chat.completion",
        "created": 1_700_000_000,
        "model": "gpt-4o-mini",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }],
        "usage": { "prompt_tokens": 5, "completion_tokens": 1, "total_tokens": 6 }
    })
}

/// The error body the provider sends for a bad credential
pub fn invalid_key_body() -> Value {
    json!({
        "error": {
            "message": "Incorrect API key provided",
            "type": "invalid_request_error",
            "param": null,
            "code": "invalid_api_key"
        }
    })
}

pub const SAMPLE_CONFIG_YAML: &str = r#"
server:
  host: "127.0.0.1"
  port: 9090
  logs:
    level: "debug"

llm:
  base_url: "http://localhost:4010/v1"
  api_key: "sk-from-file"
"#;

pub const MINIMAL_CONFIG_YAML: &str = r#"
server:
  port: 3000
"#;

pub const INVALID_CONFIG_YAML: &str = r#"
server:
  port: "not-a-number"
"#;
