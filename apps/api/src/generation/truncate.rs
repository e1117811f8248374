//! Token-bound truncation under the cl100k_base subword encoding.
//!
//! Prompt inputs are cut to a fixed token prefix — no summarization, text
//! past the cutoff is dropped. Inputs already under budget pass through
//! byte-identical.

use anyhow::Result;
use tiktoken_rs::{cl100k_base, CoreBPE};

pub struct TokenTrimmer {
    bpe: CoreBPE,
}

impl TokenTrimmer {
    pub fn new() -> Result<Self> {
        Ok(TokenTrimmer { bpe: cl100k_base()? })
    }

    /// Number of cl100k_base tokens in `text`.
    pub fn count(&self, text: &str) -> usize {
        self.bpe.encode_ordinary(text).len()
    }

    /// Returns `text` unchanged when it fits in `max_tokens`; otherwise the
    /// decoded first `max_tokens` tokens. A prefix cut can land inside a
    /// multi-byte character, in which case the cut backs off one token at a
    /// time until it decodes cleanly.
    pub fn trim(&self, text: &str, max_tokens: usize) -> String {
        let tokens = self.bpe.encode_ordinary(text);
        if tokens.len() <= max_tokens {
            return text.to_string();
        }

        for cut in (0..=max_tokens).rev() {
            if let Ok(trimmed) = self.bpe.decode(tokens[..cut].to_vec()) {
                return trimmed;
            }
        }
        String::new()
    }
}
