//! Integration tests for chat-inference
//!
//! These tests drive the public API end to end against a mock inference
//! endpoint: builder, adapter, HTTP client and response normalization.

mod chat_completions;
mod image_chat;
