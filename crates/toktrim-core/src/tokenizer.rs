use crate::Result;

/// Capability interface for a concrete BPE tokenizer.
///
/// Encoding is total: any text maps to a token sequence. Decoding can fail
/// with [`TokenizerError::Decode`](crate::TokenizerError::Decode) when the
/// sequence splits an indivisible unit, e.g. a truncation boundary that falls
/// inside a multi-token code point.
pub trait Tokenizer: Send + Sync {
    fn encode(&self, text: &str) -> Vec<u32>;

    fn decode(&self, tokens: &[u32]) -> Result<String>;
}
