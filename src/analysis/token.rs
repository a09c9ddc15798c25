//! Token types for document ingestion.
//!
//! A [`Token`] is one whitespace-delimited word of a text together with its
//! byte offsets in that text.
//!
//! ```
//! use docsift::analysis::token::Token;
//!
//! let text = "hello world";
//! let token = Token::new("world", 6, 11);
//! assert_eq!(&text[token.start_offset..token.end_offset], token.text);
//! ```

use serde::{Deserialize, Serialize};

/// A single word of a text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token, case preserved
    pub text: String,

    /// The byte offset where this token starts in the original text
    pub start_offset: usize,

    /// The byte offset where this token ends in the original text
    pub end_offset: usize,
}

impl Token {
    /// Create a new token with text and byte offsets.
    pub fn new<S: Into<String>>(text: S, start_offset: usize, end_offset: usize) -> Self {
        Token {
            text: text.into(),
            start_offset,
            end_offset,
        }
    }

    /// Consume the token and return its text.
    pub fn into_text(self) -> String {
        self.text
    }
}

/// Boxed iterator of tokens produced by a tokenizer.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;
