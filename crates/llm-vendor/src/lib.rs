//! OpenAI-compatible chat-completion client.
//!
//! Implements [`vendor_core::LanguageModel`] against any endpoint that
//! speaks the `/v1/chat/completions` protocol. All persona, analysis, and
//! scripting prompts in the workflows crate go through this client.
//!
//! # Example
//!
//! ```no_run
//! use llm_vendor::{ChatVendor, LlmConfig};
//! use vendor_core::{CompletionRequest, LanguageModel};
//!
//! # async fn example() -> Result<(), vendor_core::VendorError> {
//! let vendor = ChatVendor::new(LlmConfig::builder().api_key("sk-...").build())?;
//! let reply = vendor
//!     .complete(CompletionRequest::new("You are terse.", "Say hi"))
//!     .await?;
//! # Ok(())
//! # }
//! ```

mod api_types;
mod client;
mod config;

pub use api_types::{ApiErrorBody, ChatCompletionRequest, ChatCompletionResponse, Choice, ResponseFormat, ResponseMessage, Usage};
pub use client::ChatVendor;
pub use config::{LlmConfig, LlmConfigBuilder};
