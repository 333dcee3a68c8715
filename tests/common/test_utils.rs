#![allow(dead_code)]

use super::mocks::MockLlmClient;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, Response},
};
use memoire_ai::{
    Result,
    config::{Config, LlmConfig, LogsConfig, ServerConfig},
    improver::SentenceImprover,
    server::{self, AppState},
};
use serde_json::Value;
use std::sync::Arc;
use tempfile::TempDir;
use tokio::fs;

/// Create a test configuration with sensible defaults
pub fn create_test_config() -> Config {
    Config {
        app_name: "Memoire AI".to_string(),
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8000,
            logs: LogsConfig {
                level: "debug".to_string(),
            },
        },
        llm: LlmConfig {
            base_url: String::new(),
            api_key: "test-api-key".to_string(),
            model: "gpt-4-turbo-preview".to_string(),
            timeout_secs: 30,
        },
    }
}

/// Router wired to the given mock instead of the real provider
pub fn create_test_app(mock: &MockLlmClient) -> Router {
    let config = create_test_config();
    let improver = SentenceImprover::new(Arc::new(mock.clone()), &config.llm);
    server::router(AppState::new(improver, &config.app_name))
}

pub fn json_post(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn read_json(response: Response<Body>) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
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

/// Sample configuration YAML for testing
pub const SAMPLE_CONFIG_YAML: &str = r#"
app_name: "Memoire AI"

server:
  host: "127.0.0.1"
  port: 8000
  logs:
    level: "debug"

llm:
  base_url: "https://api.openai.com/v1"
  api_key: "test-api-key"
  model: "gpt-4-turbo-preview"
  timeout_secs: 10
"#;

/// Configuration without an API key
pub const CONFIG_WITHOUT_KEY_YAML: &str = r#"
server:
  port: 8000

llm:
  model: "gpt-4-turbo-preview"
"#;

/// Invalid configuration YAML for testing error cases
pub const INVALID_CONFIG_YAML: &str = r#"
server:
  port: "not-a-number"
"#;
