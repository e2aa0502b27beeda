//! o200k tokenizer adapter for toktrim
//!
//! Wraps the `tiktoken-rs` o200k_base vocabulary (GPT-4o family) behind the
//! [`Tokenizer`] capability and exposes module-level helpers over a shared,
//! lazily-loaded handle. The vocabulary is embedded in the `tiktoken-rs`
//! crate, so loading it is a parse of static data, done once per process.

use once_cell::sync::Lazy;
use tiktoken_rs::CoreBPE;
use tracing::debug;

use toktrim_core::{Result, Tokenizer, TokenizerError, Truncator};

/// o200k_base BPE tokenizer.
pub struct O200kTokenizer {
    bpe: CoreBPE,
}

impl O200kTokenizer {
    pub fn new() -> Result<Self> {
        let bpe = tiktoken_rs::o200k_base().map_err(|e| TokenizerError::Init(e.to_string()))?;
        Ok(Self { bpe })
    }
}

impl Tokenizer for O200kTokenizer {
    fn encode(&self, text: &str) -> Vec<u32> {
        self.bpe.encode_ordinary(text)
    }

    fn decode(&self, tokens: &[u32]) -> Result<String> {
        // tiktoken fails here for unknown token ids and for boundaries that
        // split a multi-byte character across tokens.
        self.bpe
            .decode(tokens.to_vec())
            .map_err(|e| TokenizerError::Decode(e.to_string()))
    }
}

static SHARED: Lazy<O200kTokenizer> = Lazy::new(|| {
    debug!("loading o200k_base vocabulary");
    O200kTokenizer::new().expect("embedded o200k_base vocabulary must parse")
});

/// Process-wide tokenizer handle, loaded on first use and never torn down.
pub fn shared() -> &'static O200kTokenizer {
    Lazy::force(&SHARED)
}

fn engine() -> Truncator<'static> {
    Truncator::new(shared())
}

/// Encode text to o200k token ids.
pub fn encode(text: &str) -> Vec<u32> {
    engine().encode(text)
}

/// Alias of [`encode`], kept for call-site compatibility.
pub fn tokenize(text: &str) -> Vec<u32> {
    engine().tokenize(text)
}

/// Number of o200k tokens the text encodes to.
pub fn count(text: &str) -> usize {
    engine().count(text)
}

/// Decode token ids back to text; undecodable sequences yield empty text.
pub fn decode(tokens: &[u32]) -> Result<String> {
    engine().decode(tokens)
}

/// Truncate text so it encodes to at most `max_tokens` o200k tokens.
pub fn truncate(text: &str, max_tokens: usize, strict: bool) -> Result<String> {
    engine().truncate(text, max_tokens, strict)
}

/// Check that text stays strictly under an o200k token limit.
pub fn below_limit(text: &str, limit: usize, strict: bool) -> bool {
    engine().below_limit(text, limit, strict)
}
