//! LLM provider implementations for taskwright.
//!
//! The only transport is the OpenAI-compatible `/v1/chat/completions`
//! endpoint, which covers OpenAI itself plus OpenRouter, Ollama, vLLM, and
//! most other hosted or local backends.

pub mod openai_compat;

pub use openai_compat::OpenAiCompatProvider;
