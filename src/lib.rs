// Enforce at crate level
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]
#![allow(clippy::significant_drop_tightening)]

//! Email Triage
//!
//! Parses pasted email text and asks a generative-AI backend to classify it,
//! draft a reply, or pull out action items.
//!
//! # Features
//!
//! - Header scanning for `From:` / `Subject:` and the body that follows
//! - Schema-constrained classification into category, priority, recipient and summary
//! - Free-text reply drafting and JSON action-item extraction
//! - Pluggable backend trait with a Gemini REST implementation
//! - Persistent classification history and recipient autocomplete
//!
//! # Example
//!
//! ```rust
//! use email_triage::parse_email_content;
//!
//! let parsed = parse_email_content("From: a@b.com\nSubject: Hi\nLine1\nLine2");
//!
//! assert_eq!(parsed.from, "a@b.com");
//! assert_eq!(parsed.subject, "Hi");
//! assert_eq!(parsed.body, "Line1\nLine2");
//! ```

pub mod backend;
pub mod config;
pub mod gemini;
pub mod history;
pub mod prompt;
pub mod schema;

mod client;
mod error;
mod fence;
mod parser;
mod recipients;
mod types;

pub use backend::{GenerateRequest, GenerateResponse, GenerationConfig, GenerativeBackend};
pub use client::ClassificationClient;
pub use error::{AssistError, BackendError, ConfigError, FailureCause, HistoryError, Result};
pub use fence::strip_json_fence;
pub use gemini::GeminiBackend;
pub use history::{FileStorage, History, HistoryStorage, MemoryStorage};
pub use parser::parse_email_content;
pub use recipients::{DEFAULT_RECIPIENTS, RecipientSet};
pub use types::*;
