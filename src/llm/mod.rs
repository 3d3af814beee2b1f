mod client;
mod types;

pub use client::{HttpLlmClient, LlmClient, OpenAiClient};
pub use types::*;
