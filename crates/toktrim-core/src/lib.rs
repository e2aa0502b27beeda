//! Core truncation logic for toktrim
//!
//! This crate contains:
//! - The `Tokenizer` capability trait (encode/decode over integer token ids)
//! - The `Truncator` engine (truncate to a token budget, below-limit checks)
//! - The error taxonomy shared with concrete tokenizer adapters

pub mod error;
pub mod tokenizer;
pub mod truncate;

pub use error::{Result, TokenizerError};
pub use tokenizer::Tokenizer;
pub use truncate::Truncator;
