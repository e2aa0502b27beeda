//! Truncation engine - fits text into a token budget
//!
//! The engine is generic over the [`Tokenizer`] capability so tests can run
//! against fakes and production code against a real BPE vocabulary. Budget
//! checks are verified by re-encoding: a decoded token prefix is never
//! trusted to stay within the budget it was cut to.

use tracing::{debug, trace};

use crate::{Result, Tokenizer, TokenizerError};

/// Token-budget engine over an injected tokenizer capability.
pub struct Truncator<'a> {
    tokenizer: &'a dyn Tokenizer,
}

impl<'a> Truncator<'a> {
    pub fn new(tokenizer: &'a dyn Tokenizer) -> Self {
        Self { tokenizer }
    }

    /// Encode text to token ids.
    pub fn encode(&self, text: &str) -> Vec<u32> {
        self.tokenizer.encode(text)
    }

    /// Alias of [`encode`](Self::encode), kept for call-site compatibility.
    pub fn tokenize(&self, text: &str) -> Vec<u32> {
        self.encode(text)
    }

    /// Number of tokens the text encodes to.
    pub fn count(&self, text: &str) -> usize {
        self.tokenizer.encode(text).len()
    }

    /// Decode token ids back to text.
    ///
    /// An undecodable sequence yields empty text instead of an error; any
    /// other capability failure propagates.
    pub fn decode(&self, tokens: &[u32]) -> Result<String> {
        match self.tokenizer.decode(tokens) {
            Ok(text) => Ok(text),
            Err(err) if err.is_decode() => {
                debug!("undecodable token sequence, substituting empty text: {}", err);
                Ok(String::new())
            }
            Err(err) => Err(err),
        }
    }

    /// Truncate text so it encodes to at most `max_tokens` tokens.
    ///
    /// With `strict` unset, text whose character count is under half the
    /// budget is returned as-is without touching the tokenizer: a token
    /// covers at least one character in the common case, and the halved
    /// bound absorbs scripts where one character costs more than one token.
    pub fn truncate(&self, text: &str, max_tokens: usize, strict: bool) -> Result<String> {
        if max_tokens == 0 {
            return Ok(String::new());
        }

        if !strict && text.chars().count() < max_tokens / 2 {
            return Ok(text.to_string());
        }

        let tokens = self.tokenizer.encode(text);
        if tokens.len() <= max_tokens {
            return Ok(text.to_string());
        }

        let mut working = tokens[..max_tokens].to_vec();
        loop {
            let Some(decoded) = self.decode_shrinking(&mut working)? else {
                return Ok(String::new());
            };

            // Re-encoding can merge differently across the new boundary and
            // land over the budget. Verify, shrink by one, redecode.
            let reencoded = self.tokenizer.encode(&decoded).len();
            if reencoded <= max_tokens {
                return Ok(decoded);
            }
            trace!(
                "re-encoded to {} tokens over budget {}, shrinking prefix",
                reencoded,
                max_tokens
            );
            working.pop();
        }
    }

    /// Cheap check that text stays strictly under a token limit.
    ///
    /// The non-strict fast path mirrors [`truncate`](Self::truncate); strict
    /// mode always encodes.
    pub fn below_limit(&self, text: &str, limit: usize, strict: bool) -> bool {
        if !strict && text.chars().count() < limit / 2 {
            return true;
        }

        self.tokenizer.encode(text).len() < limit
    }

    /// Decode `working`, dropping trailing tokens while the boundary splits
    /// an indivisible unit. `None` once the list is exhausted.
    fn decode_shrinking(&self, working: &mut Vec<u32>) -> Result<Option<String>> {
        while !working.is_empty() {
            match self.tokenizer.decode(working) {
                Ok(decoded) => return Ok(Some(decoded)),
                Err(err) if err.is_decode() => {
                    trace!("prefix of {} tokens undecodable, dropping one", working.len());
                    working.pop();
                }
                Err(err) => return Err(err),
            }
        }
        Ok(None)
    }
}
