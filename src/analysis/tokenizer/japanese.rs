//! Japanese tokenizer implementation.
//!
//! Japanese text carries no spaces between words, so the whitespace tokenizer
//! is useless for it. This tokenizer segments text into runs of the same
//! script class (hiragana, katakana, kanji, latin, digits, whitespace), which
//! approximates word boundaries well enough for vocabulary indexing while
//! keeping a property the pipeline depends on: every character of the input
//! lands in exactly one token, so concatenating the tokens reproduces the
//! input byte-for-byte.
//!
//! # Examples
//!
//! ```
//! use tsumugi::analysis::tokenizer::Tokenizer;
//! use tsumugi::analysis::tokenizer::japanese::JapaneseTokenizer;
//!
//! let tokenizer = JapaneseTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("こんにちは、世界").unwrap().collect();
//!
//! assert_eq!(tokens.len(), 3);
//! assert_eq!(tokens[0].text, "こんにちは");
//! assert_eq!(tokens[1].text, "、");
//! assert_eq!(tokens[2].text, "世界");
//! ```

use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

use super::Tokenizer;
use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;

/// Script classification for a single grapheme cluster.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ScriptClass {
    Hiragana,
    Katakana,
    Kanji,
    Latin,
    Digit,
    Whitespace,
    Punctuation,
}

impl ScriptClass {
    fn of(grapheme: &str) -> ScriptClass {
        let c = match grapheme.chars().next() {
            Some(c) => c,
            None => return ScriptClass::Punctuation,
        };

        if c.is_whitespace() {
            return ScriptClass::Whitespace;
        }
        match c {
            '\u{3040}'..='\u{309F}' => ScriptClass::Hiragana,
            // Includes the prolonged sound mark so "コーヒー" stays one token
            '\u{30A0}'..='\u{30FF}' | '\u{31F0}'..='\u{31FF}' => ScriptClass::Katakana,
            // CJK Unified Ideographs plus Extension A and the iteration mark
            '\u{4E00}'..='\u{9FFF}' | '\u{3400}'..='\u{4DBF}' | '\u{3005}' => ScriptClass::Kanji,
            // ASCII and fullwidth Latin letters
            'A'..='Z' | 'a'..='z' | '\u{FF21}'..='\u{FF3A}' | '\u{FF41}'..='\u{FF5A}' => {
                ScriptClass::Latin
            }
            '0'..='9' | '\u{FF10}'..='\u{FF19}' => ScriptClass::Digit,
            _ => ScriptClass::Punctuation,
        }
    }
}

/// A tokenizer that segments Japanese text into script-class runs.
///
/// Consecutive grapheme clusters of the same script class form one token;
/// punctuation is emitted one grapheme per token. No input character is ever
/// dropped, including whitespace, so the token sequence joined with the empty
/// string equals the input exactly.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JapaneseTokenizer;

impl JapaneseTokenizer {
    /// Create a new Japanese tokenizer.
    pub fn new() -> Self {
        JapaneseTokenizer
    }
}

impl Tokenizer for JapaneseTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let mut tokens: Vec<Token> = Vec::new();
        let mut current: Option<(ScriptClass, usize, String)> = None;
        let mut position = 0;

        let mut flush =
            |current: &mut Option<(ScriptClass, usize, String)>, end: usize, position: &mut usize| {
                if let Some((_, start, text)) = current.take() {
                    tokens.push(Token::with_offsets(text, *position, start, end));
                    *position += 1;
                }
            };

        for (offset, grapheme) in text.grapheme_indices(true) {
            let class = ScriptClass::of(grapheme);
            match &mut current {
                Some((run_class, _, run_text))
                    if *run_class == class && class != ScriptClass::Punctuation =>
                {
                    run_text.push_str(grapheme);
                }
                _ => {
                    flush(&mut current, offset, &mut position);
                    current = Some((class, offset, grapheme.to_string()));
                }
            }
        }
        flush(&mut current, text.len(), &mut position);

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "japanese"
    }
}
